use crossterm::event::KeyCode;
use serde::{Deserialize, Serialize};

use crate::config::key::{Key, KeyBinding};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalKeybindings {
    pub quit: KeyBinding,
    pub help: KeyBinding,
    pub theme: KeyBinding,
    pub focus_next: KeyBinding,
    pub focus_prev: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationKeybindings {
    pub up: KeyBinding,
    pub down: KeyBinding,
    pub home: KeyBinding,
    pub end: KeyBinding,
    pub select: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CounterKeybindings {
    pub increment: KeyBinding,
    pub decrement: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoKeybindings {
    pub compose: KeyBinding,
    pub submit: KeyBinding,
    pub delete: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DialogKeybindings {
    pub dismiss: KeyBinding,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct KeybindingsConfig {
    pub global: GlobalKeybindings,
    pub navigation: NavigationKeybindings,
    pub counter: CounterKeybindings,
    pub todos: TodoKeybindings,
    pub dialog: DialogKeybindings,
}

impl Default for GlobalKeybindings {
    fn default() -> Self {
        Self {
            quit: Key::new(KeyCode::Char('q')).into(),
            help: Key::new(KeyCode::Char('?')).into(),
            theme: Key::new(KeyCode::Char('t')).into(),
            focus_next: Key::new(KeyCode::Tab).into(),
            focus_prev: Key::new(KeyCode::BackTab).into(),
        }
    }
}

impl Default for NavigationKeybindings {
    fn default() -> Self {
        Self {
            up: KeyBinding::multiple(vec![Key::new(KeyCode::Char('k')), Key::new(KeyCode::Up)]),
            down: KeyBinding::multiple(vec![Key::new(KeyCode::Char('j')), Key::new(KeyCode::Down)]),
            home: KeyBinding::multiple(vec![Key::new(KeyCode::Char('g')), Key::new(KeyCode::Home)]),
            end: KeyBinding::multiple(vec![Key::new(KeyCode::Char('G')), Key::new(KeyCode::End)]),
            select: Key::new(KeyCode::Enter).into(),
        }
    }
}

impl Default for CounterKeybindings {
    fn default() -> Self {
        Self {
            increment: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('+')),
                Key::new(KeyCode::Char('=')),
                Key::new(KeyCode::Up),
            ]),
            decrement: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('-')),
                Key::new(KeyCode::Down),
            ]),
        }
    }
}

impl Default for TodoKeybindings {
    fn default() -> Self {
        Self {
            compose: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('a')),
                Key::new(KeyCode::Char('i')),
            ]),
            submit: Key::ctrl(KeyCode::Char('s')).into(),
            delete: KeyBinding::multiple(vec![
                Key::new(KeyCode::Char('d')),
                Key::new(KeyCode::Delete),
            ]),
        }
    }
}

impl Default for DialogKeybindings {
    fn default() -> Self {
        Self {
            dismiss: KeyBinding::multiple(vec![
                Key::new(KeyCode::Enter),
                Key::new(KeyCode::Esc),
                Key::new(KeyCode::Char('q')),
            ]),
        }
    }
}
