//! The single lazytodo screen.
//!
//! [`AppShell`] owns the [`TodoCounterStore`] and lays out the header, the
//! welcome card, the counter panel and the todo panel. Panels never touch the
//! store: they turn keys into [`StoreAction`]s, the shell dispatches them and
//! then pushes the new state back into every panel before the next event.

mod counter;
mod header;
mod todos;
mod welcome;

use std::sync::Arc;

use crossterm::event::KeyEvent;
use lazytodo_core::{StoreAction, TodoCounterStore};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use tracing::debug;

use crate::Theme;
use crate::config::{GlobalAction, KeyResolver};
use crate::ui::{Component, Handled, Keybinding, Result, Screen};

pub use counter::CounterPanel;
pub use todos::{TodoFocus, TodoPanel, TodoPanelEvent};

/// Below this width the two panels are stacked instead of side by side.
const SIDE_BY_SIDE_MIN_WIDTH: u16 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Counter,
    Input,
    List,
}

impl Focus {
    const ORDER: [Self; 3] = [Self::Counter, Self::Input, Self::List];

    fn next(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + 1) % Self::ORDER.len()]
    }

    fn prev(self) -> Self {
        let i = Self::ORDER.iter().position(|f| *f == self).unwrap_or(0);
        Self::ORDER[(i + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    const fn label(self) -> &'static str {
        match self {
            Self::Counter => "COUNTER",
            Self::Input => "INPUT",
            Self::List => "TODOS",
        }
    }
}

pub struct AppShell {
    store: TodoCounterStore,
    focus: Focus,
    counter: CounterPanel,
    todos: TodoPanel,
    resolver: Arc<KeyResolver>,
    view_revision: u64,
}

impl AppShell {
    pub fn new(store: TodoCounterStore, resolver: Arc<KeyResolver>) -> Self {
        let mut shell = Self {
            store,
            focus: Focus::Input,
            counter: CounterPanel::new(resolver.clone()),
            todos: TodoPanel::new(resolver.clone()),
            resolver,
            view_revision: 0,
        };
        shell.apply_focus();
        shell.sync();
        shell
    }

    pub const fn store(&self) -> &TodoCounterStore {
        &self.store
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            debug!(from = ?self.focus, to = ?focus, "Moving focus");
            self.focus = focus;
            self.apply_focus();
            self.view_revision += 1;
        }
    }

    fn apply_focus(&mut self) {
        self.counter.set_focused(self.focus == Focus::Counter);
        self.todos.set_focus(match self.focus {
            Focus::Counter => None,
            Focus::Input => Some(TodoFocus::Input),
            Focus::List => Some(TodoFocus::List),
        });
    }

    fn dispatch(&mut self, action: StoreAction) {
        if self.store.dispatch(action) {
            self.sync();
        }
    }

    /// Push the current store state into the panels.
    fn sync(&mut self) {
        self.counter.sync(&self.store);
        self.todos.sync(&self.store);
    }

    fn handle_todo_event(&mut self, event: TodoPanelEvent) {
        match event {
            TodoPanelEvent::Action(action) => self.dispatch(action),
            TodoPanelEvent::FocusInput => self.set_focus(Focus::Input),
            TodoPanelEvent::FocusList => self.set_focus(Focus::List),
        }
    }
}

impl Screen for AppShell {
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<()>> {
        if self.resolver.matches_global(&key, GlobalAction::FocusNext) {
            self.set_focus(self.focus.next());
            return Ok(Handled::Consumed);
        }
        if self.resolver.matches_global(&key, GlobalAction::FocusPrev) {
            self.set_focus(self.focus.prev());
            return Ok(Handled::Consumed);
        }

        match self.focus {
            Focus::Counter => Ok(match self.counter.handle_key(key)? {
                Handled::Event(action) => {
                    self.dispatch(action);
                    Handled::Consumed
                }
                Handled::Consumed => Handled::Consumed,
                Handled::Ignored => Handled::Ignored,
            }),
            Focus::Input | Focus::List => {
                let selection_before = self.todos.selected_index();
                let result = self.todos.handle_key(key)?;
                if self.todos.selected_index() != selection_before {
                    self.view_revision += 1;
                }
                Ok(match result {
                    Handled::Event(event) => {
                        self.handle_todo_event(event);
                        Handled::Consumed
                    }
                    Handled::Consumed => Handled::Consumed,
                    Handled::Ignored => Handled::Ignored,
                })
            }
        }
    }

    fn handle_paste(&mut self, text: &str) -> Handled<()> {
        if self.focus != Focus::Input {
            return Handled::Ignored;
        }
        if let Some(event) = self.todos.paste(text) {
            self.handle_todo_event(event);
        }
        Handled::Consumed
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let [header_area, welcome_area, body_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(5),
                Constraint::Min(8),
            ])
            .areas(area);

        header::render(frame, header_area, theme);
        welcome::render(frame, welcome_area, theme);

        let direction = if body_area.width >= SIDE_BY_SIDE_MIN_WIDTH {
            Direction::Horizontal
        } else {
            Direction::Vertical
        };
        let constraints = match direction {
            Direction::Horizontal => [Constraint::Percentage(50), Constraint::Percentage(50)],
            Direction::Vertical => [Constraint::Length(7), Constraint::Min(6)],
        };
        let [counter_area, todos_area] = Layout::default()
            .direction(direction)
            .constraints(constraints)
            .areas(body_area);

        self.counter.render(frame, counter_area, theme);
        self.todos.render(frame, todos_area, theme);
    }

    fn focus_label(&self) -> &'static str {
        self.focus.label()
    }

    fn keybindings(&self) -> Vec<Keybinding> {
        match self.focus {
            Focus::Counter => self.counter.keybindings(),
            Focus::Input | Focus::List => self.todos.keybindings(),
        }
    }

    fn revision(&self) -> u64 {
        self.store.revision() + self.view_revision
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::keybindings::KeybindingsConfig;
    use crossterm::event::{KeyCode, KeyModifiers};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn shell() -> AppShell {
        let resolver = Arc::new(KeyResolver::new(Arc::new(KeybindingsConfig::default())));
        AppShell::new(TodoCounterStore::new(), resolver)
    }

    fn press(shell: &mut AppShell, code: KeyCode) -> Handled<()> {
        shell
            .handle_key(KeyEvent::new(code, KeyModifiers::NONE))
            .unwrap()
    }

    fn type_str(shell: &mut AppShell, text: &str) {
        for c in text.chars() {
            press(shell, KeyCode::Char(c));
        }
    }

    fn texts(shell: &AppShell) -> Vec<String> {
        shell.store().todos().iter().map(|t| t.text.clone()).collect()
    }

    fn screen_text(shell: &mut AppShell, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|frame| shell.render(frame, frame.area(), &Theme::default()))
            .unwrap();
        let buffer = terminal.backend().buffer();
        let mut text = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                text.push_str(buffer[(x, y)].symbol());
            }
            text.push('\n');
        }
        text
    }

    #[test]
    fn test_focus_cycles() {
        let mut shell = shell();
        assert_eq!(shell.focus, Focus::Input);
        press(&mut shell, KeyCode::Tab);
        assert_eq!(shell.focus, Focus::List);
        press(&mut shell, KeyCode::Tab);
        assert_eq!(shell.focus, Focus::Counter);
        shell
            .handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT))
            .unwrap();
        assert_eq!(shell.focus, Focus::List);
    }

    #[test]
    fn test_typing_and_enter_adds_todo() {
        let mut shell = shell();
        type_str(&mut shell, "Buy milk");
        assert_eq!(shell.store().draft_text(), "Buy milk");

        press(&mut shell, KeyCode::Enter);

        assert_eq!(texts(&shell), vec!["Buy milk"]);
        assert_eq!(shell.store().draft_text(), "");
    }

    #[test]
    fn test_blank_enter_is_ignored() {
        let mut shell = shell();
        type_str(&mut shell, "   ");
        press(&mut shell, KeyCode::Enter);
        assert!(shell.store().is_empty());
        assert_eq!(shell.store().draft_text(), "   ");
    }

    #[test]
    fn test_counter_keys() {
        let mut shell = shell();
        press(&mut shell, KeyCode::Tab);
        press(&mut shell, KeyCode::Tab);
        assert_eq!(shell.focus, Focus::Counter);

        press(&mut shell, KeyCode::Char('+'));
        press(&mut shell, KeyCode::Char('='));
        press(&mut shell, KeyCode::Char('-'));
        press(&mut shell, KeyCode::Char('-'));
        press(&mut shell, KeyCode::Char('-'));

        assert_eq!(shell.store().counter(), -1);
    }

    #[test]
    fn test_counter_does_not_swallow_global_keys() {
        let mut shell = shell();
        press(&mut shell, KeyCode::BackTab);
        assert_eq!(shell.focus, Focus::Counter);
        assert_eq!(press(&mut shell, KeyCode::Char('q')), Handled::Ignored);
    }

    #[test]
    fn test_input_captures_global_letters() {
        let mut shell = shell();
        assert_eq!(press(&mut shell, KeyCode::Char('q')), Handled::Consumed);
        assert_eq!(shell.store().draft_text(), "q");
    }

    #[test]
    fn test_delete_selected_todo() {
        let mut shell = shell();
        for text in ["A", "B", "C"] {
            type_str(&mut shell, text);
            press(&mut shell, KeyCode::Enter);
        }
        press(&mut shell, KeyCode::Esc);
        assert_eq!(shell.focus, Focus::List);

        press(&mut shell, KeyCode::Char('j'));
        press(&mut shell, KeyCode::Char('d'));
        assert_eq!(texts(&shell), vec!["A", "C"]);

        press(&mut shell, KeyCode::Char('j'));
        press(&mut shell, KeyCode::Delete);
        assert_eq!(texts(&shell), vec!["A"]);

        press(&mut shell, KeyCode::Char('d'));
        assert!(shell.store().is_empty());
        assert_eq!(press(&mut shell, KeyCode::Char('d')), Handled::Consumed);
    }

    #[test]
    fn test_compose_returns_to_input() {
        let mut shell = shell();
        press(&mut shell, KeyCode::Esc);
        assert_eq!(shell.focus, Focus::List);
        press(&mut shell, KeyCode::Char('a'));
        assert_eq!(shell.focus, Focus::Input);
        assert_eq!(shell.store().draft_text(), "");
    }

    #[test]
    fn test_ctrl_s_submits_directly() {
        let mut shell = shell();
        type_str(&mut shell, "Walk dog");
        shell
            .handle_key(KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL))
            .unwrap();
        assert_eq!(texts(&shell), vec!["Walk dog"]);
    }

    #[test]
    fn test_paste_into_input() {
        let mut shell = shell();
        assert_eq!(shell.handle_paste("Call mom"), Handled::Consumed);
        assert_eq!(shell.store().draft_text(), "Call mom");

        press(&mut shell, KeyCode::Esc);
        assert_eq!(shell.handle_paste("ignored"), Handled::Ignored);
        assert_eq!(shell.store().draft_text(), "Call mom");
    }

    #[test]
    fn test_revision_tracks_changes() {
        let mut shell = shell();
        let start = shell.revision();
        press(&mut shell, KeyCode::Char('x'));
        assert!(shell.revision() > start);

        let after_typing = shell.revision();
        press(&mut shell, KeyCode::Left);
        assert_eq!(shell.revision(), after_typing);
    }

    #[test]
    fn test_render_shows_state() {
        let mut shell = shell();
        let text = screen_text(&mut shell, 100, 30);
        assert!(text.contains("Welcome to lazytodo!"));
        assert!(text.contains("No todos yet. Add one above!"));

        for item in ["Walk dog", "Feed cat"] {
            type_str(&mut shell, item);
            press(&mut shell, KeyCode::Enter);
        }
        press(&mut shell, KeyCode::Tab);
        press(&mut shell, KeyCode::Tab);
        for _ in 0..3 {
            press(&mut shell, KeyCode::Char('+'));
        }

        let text = screen_text(&mut shell, 100, 30);
        assert!(!text.contains("No todos yet"));
        let walk = text.find("Walk dog").expect("first todo rendered");
        let feed = text.find("Feed cat").expect("second todo rendered");
        assert!(walk < feed);
        assert!(text.contains(" 3 "));
    }

    #[test]
    fn test_render_narrow_terminal() {
        let mut shell = shell();
        let text = screen_text(&mut shell, 50, 30);
        assert!(text.contains("Counter"));
        assert!(text.contains("Todo List"));
    }
}
