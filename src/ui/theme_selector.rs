use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Clear, ListItem};

use crate::config::{DialogAction, GlobalAction, KeyResolver};
use crate::theme::{ThemeInfo, available_themes};
use crate::ui::{Component, Handled, List, ListEvent, ListRow, Result};
use crate::Theme;

impl ListRow for ThemeInfo {
    fn render_row(&self, theme: &Theme) -> ListItem<'static> {
        ListItem::new(self.name.to_string()).style(Style::default().fg(theme.text()))
    }
}

pub enum ThemeEvent {
    Cancelled,
    Selected(ThemeInfo),
}

/// Popup listing the built-in themes.
pub struct ThemeSelector {
    list: List<ThemeInfo>,
    resolver: Arc<KeyResolver>,
}

impl ThemeSelector {
    /// Open the selector with `current` preselected.
    pub fn new(current: &Theme, resolver: Arc<KeyResolver>) -> Self {
        let themes = available_themes();
        let current_index = themes.iter().position(|t| t.theme == *current).unwrap_or(0);
        let mut list = List::new(themes, resolver.clone());
        list.select(current_index);
        Self { list, resolver }
    }
}

impl Component for ThemeSelector {
    type Output = ThemeEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        let result = self.list.handle_key(key)?;
        Ok(match result {
            Handled::Event(ListEvent::Activated(info)) => ThemeEvent::Selected(info).into(),
            Handled::Consumed => Handled::Consumed,
            Handled::Ignored => {
                if self.resolver.matches_dialog(&key, DialogAction::Dismiss)
                    || self.resolver.matches_global(&key, GlobalAction::Theme)
                {
                    ThemeEvent::Cancelled.into()
                } else {
                    Handled::Consumed
                }
            }
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup_area = area.centered(Constraint::Percentage(40), Constraint::Percentage(50));

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Select Theme (Enter to confirm, Esc to cancel) ")
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_focused()))
            .style(Style::default().bg(theme.base()));

        let inner = block.inner(popup_area);
        frame.render_widget(block, popup_area);

        self.list.render(frame, inner, theme);
    }
}
