use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::config::key::identifier;
use crate::ui::{Component, Handled, Result};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextInputEvent {
    /// The text was edited; carries the full new value.
    Changed(String),
    /// A non-editing key was pressed; carries its identifier (`"Enter"`, `"Up"`, ...).
    KeyPressed(String),
    /// The user asked to leave the input.
    Cancelled,
}

/// Single-line inline text field.
///
/// The field keeps a mirror of the text it displays so it can place the
/// cursor, but the owner decides the real value: every edit is reported as
/// [`TextInputEvent::Changed`] and the owner pushes the accepted value back
/// with [`set_value`](Self::set_value). The cursor is a char index.
pub struct TextInput {
    label: String,
    value: String,
    cursor: usize,
    placeholder: Option<String>,
    focused: bool,
}

impl TextInput {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            placeholder: None,
            focused: false,
        }
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Sync the displayed text with the owner's value.
    pub fn set_value(&mut self, value: &str) {
        if self.value != value {
            self.value = value.to_string();
            self.cursor = self.cursor.min(self.len());
        }
    }

    /// Insert pasted text at the cursor. Newlines are dropped since the
    /// field is single-line.
    pub fn paste(&mut self, text: &str) -> Option<TextInputEvent> {
        let text: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        if text.is_empty() {
            return None;
        }
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, &text);
        self.cursor += text.chars().count();
        Some(TextInputEvent::Changed(self.value.clone()))
    }

    fn len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map_or(self.value.len(), |(i, _)| i)
    }

    fn insert_char(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    fn delete_char_before_cursor(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_char_at_cursor(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.value.remove(at);
        true
    }

    fn delete_word_before_cursor(&mut self) -> bool {
        let chars: Vec<char> = self.value.chars().collect();
        let mut pos = self.cursor;
        while pos > 0 && chars[pos - 1] == ' ' {
            pos -= 1;
        }
        while pos > 0 && chars[pos - 1] != ' ' {
            pos -= 1;
        }
        if pos == self.cursor {
            return false;
        }
        let (start, end) = (self.byte_index(pos), self.byte_index(self.cursor));
        self.value.drain(start..end);
        self.cursor = pos;
        true
    }

    fn clear_line(&mut self) -> bool {
        if self.value.is_empty() {
            return false;
        }
        self.value.clear();
        self.cursor = 0;
        true
    }

    fn changed(&self, edited: bool) -> Handled<TextInputEvent> {
        if edited {
            TextInputEvent::Changed(self.value.clone()).into()
        } else {
            Handled::Consumed
        }
    }
}

impl Component for TextInput {
    type Output = TextInputEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        Ok(match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => TextInputEvent::Cancelled.into(),

            // Focus movement belongs to the parent
            (KeyCode::Tab | KeyCode::BackTab, _) => Handled::Ignored,

            // Delete
            (KeyCode::Backspace, KeyModifiers::ALT) | (KeyCode::Char('w'), KeyModifiers::CONTROL) => {
                let edited = self.delete_word_before_cursor();
                self.changed(edited)
            }
            (KeyCode::Backspace, _) => {
                let edited = self.delete_char_before_cursor();
                self.changed(edited)
            }
            (KeyCode::Delete, _) => {
                let edited = self.delete_char_at_cursor();
                self.changed(edited)
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let edited = self.clear_line();
                self.changed(edited)
            }

            // Cursor movement
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Consumed
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.len());
                Handled::Consumed
            }
            (KeyCode::Home, _) | (KeyCode::Char('a'), KeyModifiers::CONTROL) => {
                self.cursor = 0;
                Handled::Consumed
            }
            (KeyCode::End, _) | (KeyCode::Char('e'), KeyModifiers::CONTROL) => {
                self.cursor = self.len();
                Handled::Consumed
            }

            // Character input
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                self.insert_char(c);
                self.changed(true)
            }

            (code, _) => TextInputEvent::KeyPressed(identifier(code)).into(),
        })
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let input_style = Style::default().fg(theme.text());
        let cursor_style = Style::default()
            .fg(theme.base())
            .bg(theme.text())
            .add_modifier(Modifier::BOLD);
        let placeholder_style = Style::default().fg(theme.overlay0());

        let line = match (&self.placeholder, self.value.is_empty()) {
            (Some(placeholder), true) => {
                let mut spans = Vec::new();
                if self.focused {
                    spans.push(Span::styled(" ", cursor_style));
                }
                spans.push(Span::styled(placeholder.clone(), placeholder_style));
                Line::from(spans)
            }
            _ if self.focused => {
                let before: String = self.value.chars().take(self.cursor).collect();
                let mut after = self.value.chars().skip(self.cursor);
                let cursor_char = after.next().unwrap_or(' ');
                let rest: String = after.collect();
                Line::from(vec![
                    Span::styled(before, input_style),
                    Span::styled(cursor_char.to_string(), cursor_style),
                    Span::styled(rest, input_style),
                ])
            }
            _ => Line::from(Span::styled(self.value.clone(), input_style)),
        };

        let border_color = if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };
        let block = Block::default()
            .title(format!(" {} ", self.label))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        frame.render_widget(Paragraph::new(line).block(block), area);
    }
}
