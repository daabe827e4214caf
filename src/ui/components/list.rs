use std::sync::Arc;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::prelude::{Modifier, Style};
use ratatui::widgets::{List as RatatuiList, ListItem, ListState};

use crate::Theme;
use crate::config::{KeyResolver, NavAction};
use crate::ui::{Component, Handled, Result};

pub enum ListEvent<T> {
    Activated(T),
}

pub trait ListRow {
    fn render_row(&self, theme: &Theme) -> ListItem<'static>;
}

/// Selectable list with keyboard navigation.
///
/// The selection is always either `None` (empty list) or a valid index.
pub struct List<T: ListRow + Clone> {
    items: Vec<T>,
    state: ListState,
    resolver: Arc<KeyResolver>,
    highlight: bool,
}

impl<T: ListRow + Clone> List<T> {
    pub fn new(items: Vec<T>, resolver: Arc<KeyResolver>) -> Self {
        let mut state = ListState::default();
        if !items.is_empty() {
            state.select(Some(0));
        }
        Self {
            items,
            state,
            resolver,
            highlight: true,
        }
    }

    pub fn selected(&self) -> Option<&T> {
        self.state.selected().and_then(|i| self.items.get(i))
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.state.selected()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Whether the selected row is drawn highlighted.
    pub const fn set_highlight(&mut self, highlight: bool) {
        self.highlight = highlight;
    }

    /// Replace the rows, keeping the selection on the same index where possible.
    pub fn set_items(&mut self, items: Vec<T>) {
        self.items = items;

        if self.items.is_empty() {
            self.state.select(None);
        } else if let Some(i) = self.state.selected() {
            if i >= self.items.len() {
                self.state.select(Some(self.items.len() - 1));
            }
        } else {
            self.state.select(Some(0));
        }
    }

    /// Select a row by index, clamped to the last row.
    pub fn select(&mut self, index: usize) {
        if self.items.is_empty() {
            self.state.select(None);
        } else {
            self.state.select(Some(index.min(self.items.len() - 1)));
        }
    }

    fn last_index(&self) -> usize {
        self.items.len().saturating_sub(1)
    }
}

impl<T: ListRow + Clone> Component for List<T> {
    type Output = ListEvent<T>;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        if self.resolver.matches_nav(&key, NavAction::Down) {
            let next = self.state.selected().map_or(0, |i| i + 1);
            self.select(next.min(self.last_index()));
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Up) {
            let previous = self.state.selected().map_or(0, |i| i.saturating_sub(1));
            self.select(previous);
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Home) {
            self.select(0);
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::End) {
            self.select(self.last_index());
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_nav(&key, NavAction::Select) {
            if let Some(item) = self.selected() {
                return Ok(ListEvent::Activated(item.clone()).into());
            }
            return Ok(Handled::Ignored);
        }

        Ok(Handled::Ignored)
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let items: Vec<ListItem> = self.items.iter().map(|i| i.render_row(theme)).collect();

        let mut list = RatatuiList::new(items);
        if self.highlight {
            list = list
                .highlight_style(
                    Style::default()
                        .bg(theme.selection_bg())
                        .fg(theme.lavender())
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("▶ ");
        } else {
            list = list.highlight_symbol("  ");
        }

        frame.render_stateful_widget(list, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::{KeyCode, KeyModifiers};

    #[derive(Clone, Debug, PartialEq)]
    struct Row(&'static str);

    impl ListRow for Row {
        fn render_row(&self, _theme: &Theme) -> ListItem<'static> {
            ListItem::new(self.0)
        }
    }

    fn list(items: &[&'static str]) -> List<Row> {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        List::new(items.iter().copied().map(Row).collect(), resolver)
    }

    fn press(list: &mut List<Row>, code: KeyCode) -> Handled<ListEvent<Row>> {
        list.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap()
    }

    #[test]
    fn test_navigation_is_clamped() {
        let mut list = list(&["a", "b"]);
        press(&mut list, KeyCode::Up);
        assert_eq!(list.selected_index(), Some(0));
        press(&mut list, KeyCode::Down);
        press(&mut list, KeyCode::Down);
        assert_eq!(list.selected(), Some(&Row("b")));
    }

    #[test]
    fn test_set_items_keeps_selection_in_range() {
        let mut list = list(&["a", "b", "c"]);
        press(&mut list, KeyCode::End);
        list.set_items(vec![Row("a"), Row("b")]);
        assert_eq!(list.selected_index(), Some(1));
        list.set_items(vec![]);
        assert_eq!(list.selected_index(), None);
        list.set_items(vec![Row("z")]);
        assert_eq!(list.selected_index(), Some(0));
    }

    #[test]
    fn test_activate() {
        let mut list = list(&["a", "b"]);
        press(&mut list, KeyCode::Char('j'));
        match press(&mut list, KeyCode::Enter) {
            Handled::Event(ListEvent::Activated(row)) => assert_eq!(row, Row("b")),
            _ => panic!("expected activation"),
        }
    }

    #[test]
    fn test_empty_list_ignores_select() {
        let mut list = list(&[]);
        assert_eq!(list.selected_index(), None);
        assert!(matches!(press(&mut list, KeyCode::Enter), Handled::Ignored));
        press(&mut list, KeyCode::Down);
        assert_eq!(list.selected_index(), None);
    }
}
