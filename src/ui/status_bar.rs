use std::sync::Arc;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver};
use crate::ui::Keybinding;

/// Bottom bar: what has focus on the left, key hints on the right.
pub struct StatusBar {
    resolver: Arc<KeyResolver>,
}

impl StatusBar {
    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self { resolver }
    }

    pub fn render(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        focus: &str,
        local_keybindings: &[Keybinding],
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border()));

        let inner_area = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(14), Constraint::Min(20)])
            .split(inner_area);

        let focus_line = Line::from(Span::styled(
            format!(" {focus} "),
            Style::default()
                .fg(theme.base())
                .bg(theme.primary())
                .add_modifier(Modifier::BOLD),
        ));
        frame.render_widget(Paragraph::new(focus_line), chunks[0]);

        self.render_hints(frame, chunks[1], theme, local_keybindings);
    }

    fn render_hints(
        &self,
        frame: &mut Frame,
        area: Rect,
        theme: &Theme,
        local_keybindings: &[Keybinding],
    ) {
        let global_keybindings = self.global_keybindings();

        let mut spans = Vec::new();
        for kb in local_keybindings
            .iter()
            .chain(global_keybindings.iter())
            .filter(|kb| kb.hint)
        {
            if !spans.is_empty() {
                spans.push(Span::styled(" │ ", Style::default().fg(theme.surface2())));
            }
            spans.push(Span::styled(kb.key.clone(), Style::default().fg(theme.peach())));
            spans.push(Span::raw(" "));
            spans.push(Span::styled(
                kb.description.clone(),
                Style::default().fg(theme.subtext0()),
            ));
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    /// Keybindings available everywhere, for the status bar and help overlay.
    pub fn global_keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(
                format!(
                    "{}/{}",
                    self.resolver.display_global(GlobalAction::FocusNext),
                    self.resolver.display_global(GlobalAction::FocusPrev)
                ),
                "Focus",
            ),
            Keybinding::hint(self.resolver.display_global(GlobalAction::Help), "Help"),
            Keybinding::new(self.resolver.display_global(GlobalAction::Theme), "Theme"),
            Keybinding::hint(self.resolver.display_global(GlobalAction::Quit), "Quit"),
        ]
    }
}
