use crate::config::actions::{CounterAction, DialogAction, GlobalAction, NavAction, TodoAction};
use crate::config::key::KeyBinding;
use crate::config::keybindings::KeybindingsConfig;
use crossterm::event::KeyEvent;
use std::sync::Arc;

/// Maps key events onto configured actions, one scope at a time.
pub struct KeyResolver {
    pub keybindings: Arc<KeybindingsConfig>,
}

impl KeyResolver {
    pub const fn new(keybindings: Arc<KeybindingsConfig>) -> Self {
        Self { keybindings }
    }

    fn global(&self, action: GlobalAction) -> &KeyBinding {
        let kb = &self.keybindings.global;
        match action {
            GlobalAction::Quit => &kb.quit,
            GlobalAction::Help => &kb.help,
            GlobalAction::Theme => &kb.theme,
            GlobalAction::FocusNext => &kb.focus_next,
            GlobalAction::FocusPrev => &kb.focus_prev,
        }
    }

    fn nav(&self, action: NavAction) -> &KeyBinding {
        let kb = &self.keybindings.navigation;
        match action {
            NavAction::Up => &kb.up,
            NavAction::Down => &kb.down,
            NavAction::Home => &kb.home,
            NavAction::End => &kb.end,
            NavAction::Select => &kb.select,
        }
    }

    fn counter(&self, action: CounterAction) -> &KeyBinding {
        let kb = &self.keybindings.counter;
        match action {
            CounterAction::Increment => &kb.increment,
            CounterAction::Decrement => &kb.decrement,
        }
    }

    fn todo(&self, action: TodoAction) -> &KeyBinding {
        let kb = &self.keybindings.todos;
        match action {
            TodoAction::Compose => &kb.compose,
            TodoAction::Submit => &kb.submit,
            TodoAction::Delete => &kb.delete,
        }
    }

    fn dialog(&self, action: DialogAction) -> &KeyBinding {
        match action {
            DialogAction::Dismiss => &self.keybindings.dialog.dismiss,
        }
    }

    // Global actions
    pub fn matches_global(&self, event: &KeyEvent, action: GlobalAction) -> bool {
        self.global(action).matches(event)
    }

    pub fn display_global(&self, action: GlobalAction) -> String {
        self.global(action).display()
    }

    // Navigation actions
    pub fn matches_nav(&self, event: &KeyEvent, action: NavAction) -> bool {
        self.nav(action).matches(event)
    }

    pub fn display_nav(&self, action: NavAction) -> String {
        self.nav(action).display()
    }

    // Counter actions
    pub fn matches_counter(&self, event: &KeyEvent, action: CounterAction) -> bool {
        self.counter(action).matches(event)
    }

    pub fn display_counter(&self, action: CounterAction) -> String {
        self.counter(action).display()
    }

    // Todo list actions
    pub fn matches_todo(&self, event: &KeyEvent, action: TodoAction) -> bool {
        self.todo(action).matches(event)
    }

    pub fn display_todo(&self, action: TodoAction) -> String {
        self.todo(action).display()
    }

    // Dialog actions
    pub fn matches_dialog(&self, event: &KeyEvent, action: DialogAction) -> bool {
        self.dialog(action).matches(event)
    }

    pub fn display_dialog(&self, action: DialogAction) -> String {
        self.dialog(action).display()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn resolver() -> KeyResolver {
        KeyResolver::new(Arc::new(KeybindingsConfig::default()))
    }

    #[test]
    fn test_default_counter_keys() {
        let resolver = resolver();
        let plus = KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT);
        let minus = KeyEvent::new(KeyCode::Char('-'), KeyModifiers::NONE);
        assert!(resolver.matches_counter(&plus, CounterAction::Increment));
        assert!(resolver.matches_counter(&minus, CounterAction::Decrement));
        assert!(!resolver.matches_counter(&minus, CounterAction::Increment));
    }

    #[test]
    fn test_back_tab_matches_focus_prev() {
        let resolver = resolver();
        let event = KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT);
        assert!(resolver.matches_global(&event, GlobalAction::FocusPrev));
        assert!(!resolver.matches_global(&event, GlobalAction::FocusNext));
    }

    #[test]
    fn test_display() {
        let resolver = resolver();
        assert_eq!(resolver.display_todo(TodoAction::Delete), "d/Delete");
        assert_eq!(resolver.display_global(GlobalAction::Quit), "q");
        assert_eq!(resolver.display_todo(TodoAction::Submit), "ctrl+s");
    }
}
