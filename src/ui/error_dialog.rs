use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap};

use crate::Theme;
use crate::config::{DialogAction, KeyResolver};
use crate::ui::{Component, Handled, Result};

const MAX_WIDTH: u16 = 60;

pub enum ErrorDialogEvent {
    Dismissed,
}

/// Blocking popup for failures the user should know about, such as a
/// config file that could not be written.
pub struct ErrorDialog {
    message: String,
    resolver: Arc<KeyResolver>,
}

impl ErrorDialog {
    pub fn new(message: impl Into<String>, resolver: Arc<KeyResolver>) -> Self {
        Self {
            message: message.into(),
            resolver,
        }
    }

    /// Popup sized to the message: at most `MAX_WIDTH` wide, tall enough
    /// for the wrapped text plus the hint row, the margin and the border.
    fn popup_area(&self, area: Rect) -> Rect {
        let width = MAX_WIDTH.min(area.width);
        let text_width = usize::from(width.saturating_sub(4).max(1));
        let wrapped = self.message.chars().count().div_ceil(text_width).max(1);
        let height = u16::try_from(wrapped + 5)
            .unwrap_or(u16::MAX)
            .min(area.height);
        area.centered(Constraint::Length(width), Constraint::Length(height))
    }
}

impl Component for ErrorDialog {
    type Output = ErrorDialogEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        if self.resolver.matches_dialog(&key, DialogAction::Dismiss) {
            return Ok(ErrorDialogEvent::Dismissed.into());
        }
        Ok(Handled::Consumed)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let popup = self.popup_area(area);
        frame.render_widget(Clear, popup);

        let block = Block::default()
            .title(Line::from(vec![
                Span::styled(" ✖ ", Style::default().fg(theme.error())),
                Span::styled(
                    "Something went wrong ",
                    Style::default()
                        .fg(theme.error())
                        .add_modifier(Modifier::BOLD),
                ),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Thick)
            .border_style(Style::default().fg(theme.error()))
            .style(Style::default().bg(theme.base()));
        let inner = block.inner(popup);
        frame.render_widget(block, popup);

        let [message_area, hint_area] = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .areas(inner);

        frame.render_widget(
            Paragraph::new(self.message.as_str())
                .style(Style::default().fg(theme.text()))
                .wrap(Wrap { trim: true }),
            message_area,
        );

        let hint = Line::from(vec![
            Span::styled(
                self.resolver.display_dialog(DialogAction::Dismiss),
                Style::default().fg(theme.peach()),
            ),
            Span::styled(" dismiss", Style::default().fg(theme.overlay1())),
        ]);
        frame.render_widget(
            Paragraph::new(hint).alignment(Alignment::Right),
            hint_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn dialog(message: &str) -> ErrorDialog {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        ErrorDialog::new(message, resolver)
    }

    #[test]
    fn test_dismiss_and_swallow() {
        let mut dialog = dialog("boom");
        let press = |dialog: &mut ErrorDialog, code| {
            dialog
                .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
                .unwrap()
        };
        assert!(matches!(press(&mut dialog, KeyCode::Char('a')), Handled::Consumed));
        assert!(matches!(
            press(&mut dialog, KeyCode::Esc),
            Handled::Event(ErrorDialogEvent::Dismissed)
        ));
    }

    #[test]
    fn test_popup_grows_with_message() {
        let area = Rect::new(0, 0, 100, 40);
        let short = dialog("boom").popup_area(area);
        let long = dialog(&"x".repeat(200)).popup_area(area);
        assert_eq!(short.width, MAX_WIDTH);
        assert_eq!(short.height, 6);
        assert!(long.height > short.height);
    }

    #[test]
    fn test_popup_fits_small_terminal() {
        let area = Rect::new(0, 0, 20, 4);
        let popup = dialog(&"x".repeat(500)).popup_area(area);
        assert!(popup.width <= 20 && popup.height <= 4);
    }

    #[test]
    fn test_render_shows_message_and_hint() {
        let mut dialog = dialog("Could not save theme");
        let mut terminal = Terminal::new(TestBackend::new(80, 20)).unwrap();
        terminal
            .draw(|frame| dialog.render(frame, frame.area(), &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let text: String = (0..buffer.area.height)
            .flat_map(|y| (0..buffer.area.width).map(move |x| (x, y)))
            .map(|pos| buffer[pos].symbol().to_string())
            .collect();
        assert!(text.contains("Could not save theme"));
        assert!(text.contains("dismiss"));
    }
}
