use std::sync::Arc;

use crossterm::event::KeyEvent;
use lazytodo_core::{StoreAction, TodoCounterStore};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::Theme;
use crate::config::{CounterAction, KeyResolver};
use crate::ui::{Component, Handled, Keybinding, Result};

pub struct CounterPanel {
    value: i64,
    focused: bool,
    resolver: Arc<KeyResolver>,
}

impl CounterPanel {
    pub const fn new(resolver: Arc<KeyResolver>) -> Self {
        Self {
            value: 0,
            focused: false,
            resolver,
        }
    }

    pub const fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    pub const fn sync(&mut self, store: &TodoCounterStore) {
        self.value = store.counter();
    }

    pub fn keybindings(&self) -> Vec<Keybinding> {
        vec![
            Keybinding::hint(
                self.resolver.display_counter(CounterAction::Increment),
                "Increment",
            ),
            Keybinding::hint(
                self.resolver.display_counter(CounterAction::Decrement),
                "Decrement",
            ),
        ]
    }
}

impl Component for CounterPanel {
    type Output = StoreAction;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        if self
            .resolver
            .matches_counter(&key, CounterAction::Increment)
        {
            return Ok(StoreAction::Increment.into());
        }
        if self
            .resolver
            .matches_counter(&key, CounterAction::Decrement)
        {
            return Ok(StoreAction::Decrement.into());
        }
        Ok(Handled::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_color = if self.focused {
            theme.border_focused()
        } else {
            theme.border()
        };
        let block = Block::default()
            .title(" Counter ")
            .title_style(
                Style::default()
                    .fg(theme.primary())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));

        let button = |label: &'static str| {
            let style = if self.focused {
                Style::default()
                    .fg(theme.base())
                    .bg(theme.primary())
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme.primary())
            };
            Span::styled(label, style)
        };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                format!(" {} ", self.value),
                Style::default()
                    .fg(theme.primary())
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                button(" - "),
                Span::raw("   "),
                button(" + "),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn panel() -> CounterPanel {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        CounterPanel::new(resolver)
    }

    fn press(panel: &mut CounterPanel, code: KeyCode) -> Handled<StoreAction> {
        panel
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    #[test]
    fn test_keys_map_to_actions() {
        let mut panel = panel();
        assert_eq!(
            press(&mut panel, KeyCode::Char('+')),
            Handled::Event(StoreAction::Increment)
        );
        assert_eq!(
            press(&mut panel, KeyCode::Up),
            Handled::Event(StoreAction::Increment)
        );
        assert_eq!(
            press(&mut panel, KeyCode::Char('-')),
            Handled::Event(StoreAction::Decrement)
        );
        assert_eq!(press(&mut panel, KeyCode::Char('x')), Handled::Ignored);
    }

    #[test]
    fn test_sync_reads_store() {
        let mut store = TodoCounterStore::new();
        store.decrement();
        let mut panel = panel();
        panel.sync(&store);
        assert_eq!(panel.value, -1);
    }
}
