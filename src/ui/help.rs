use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph};

use crate::Theme;
use crate::config::{DialogAction, GlobalAction, KeyResolver};
use crate::ui::{Component, Handled, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keybinding {
    pub key: String,
    pub description: String,
    /// Whether this keybinding is shown in the status bar hints.
    pub hint: bool,
}

impl Keybinding {
    pub fn new(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            hint: false,
        }
    }

    /// Create a keybinding that is also shown in the status bar.
    pub fn hint(key: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            description: description.into(),
            hint: true,
        }
    }
}

/// A titled group of keybindings in the help overlay.
pub struct KeybindingSection {
    pub title: String,
    pub keybindings: Vec<Keybinding>,
}

impl KeybindingSection {
    pub fn new(title: impl Into<String>, keybindings: Vec<Keybinding>) -> Self {
        Self {
            title: title.into(),
            keybindings,
        }
    }
}

pub enum HelpEvent {
    Close,
}

pub struct HelpOverlay {
    sections: Vec<KeybindingSection>,
    resolver: Arc<KeyResolver>,
}

impl HelpOverlay {
    pub const fn new(sections: Vec<KeybindingSection>, resolver: Arc<KeyResolver>) -> Self {
        Self { sections, resolver }
    }
}

impl Component for HelpOverlay {
    type Output = HelpEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        if self.resolver.matches_dialog(&key, DialogAction::Dismiss)
            || self.resolver.matches_global(&key, GlobalAction::Help)
        {
            return Ok(HelpEvent::Close.into());
        }
        Ok(Handled::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let key_width = self
            .sections
            .iter()
            .flat_map(|s| &s.keybindings)
            .map(|kb| kb.key.chars().count())
            .max()
            .unwrap_or(1);

        let mut lines = Vec::new();
        for section in &self.sections {
            if section.keybindings.is_empty() {
                continue;
            }
            if !lines.is_empty() {
                lines.push(Line::from(""));
            }
            lines.push(Line::from(Span::styled(
                section.title.clone(),
                Style::default()
                    .fg(theme.secondary())
                    .add_modifier(Modifier::BOLD),
            )));
            for kb in &section.keybindings {
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {:>key_width$}", kb.key),
                        Style::default().fg(theme.peach()),
                    ),
                    Span::styled("  ", Style::default()),
                    Span::styled(kb.description.clone(), Style::default().fg(theme.text())),
                ]));
            }
        }

        let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
        let popup_area = area.centered(Constraint::Percentage(50), Constraint::Length(height));
        frame.render_widget(Clear, popup_area);

        let title = format!(
            " Help (press {} to close) ",
            self.resolver.display_global(GlobalAction::Help)
        );
        let block = Block::default()
            .title(title)
            .title_style(
                Style::default()
                    .fg(theme.mauve())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme.border_focused()))
            .style(Style::default().bg(theme.base()));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}
