use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// A single key plus modifiers, as written in the config file (`"ctrl+c"`, `"Enter"`, `"+"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl Key {
    pub const fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        match (self.code, event.code) {
            // Terminals disagree on whether SHIFT is reported for printable
            // characters, so it is ignored and the character itself decides.
            (KeyCode::Char(expected), KeyCode::Char(actual)) => {
                let ignore_shift = !KeyModifiers::SHIFT;
                expected == actual
                    && (self.modifiers & ignore_shift) == (event.modifiers & ignore_shift)
            }
            // Shift+Tab arrives as BackTab on most terminals.
            (KeyCode::BackTab, KeyCode::BackTab) => true,
            _ => self.code == event.code && self.modifiers == event.modifiers,
        }
    }

    pub fn display(&self) -> String {
        let mut parts = Vec::new();

        if self.modifiers.contains(KeyModifiers::CONTROL) {
            parts.push("ctrl".to_string());
        }
        if self.modifiers.contains(KeyModifiers::ALT) {
            parts.push("alt".to_string());
        }
        if self.modifiers.contains(KeyModifiers::SHIFT) {
            parts.push("shift".to_string());
        }

        parts.push(match self.code {
            KeyCode::Char(' ') => "Space".to_string(),
            code => identifier(code),
        });
        parts.join("+")
    }
}

/// Name of a key without modifiers, in the form the draft input forwards
/// to the store (`"Enter"`, `"a"`, `"Esc"`, ...).
pub fn identifier(code: KeyCode) -> String {
    match code {
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Tab => "Tab".to_string(),
        KeyCode::BackTab => "BackTab".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Delete => "Delete".to_string(),
        KeyCode::Insert => "Insert".to_string(),
        KeyCode::Home => "Home".to_string(),
        KeyCode::End => "End".to_string(),
        KeyCode::PageUp => "PageUp".to_string(),
        KeyCode::PageDown => "PageDown".to_string(),
        KeyCode::Up => "Up".to_string(),
        KeyCode::Down => "Down".to_string(),
        KeyCode::Left => "Left".to_string(),
        KeyCode::Right => "Right".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => "?".to_string(),
    }
}

impl FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty key".to_string());
        }

        // A lone "+" is the plus key, not a separator.
        let (modifier_parts, key_part) = match s.rsplit_once('+') {
            Some((prefix, "")) if prefix.is_empty() => ("", "+"),
            Some((prefix, "")) => (prefix.strip_suffix('+').unwrap_or(prefix), "+"),
            Some((prefix, key)) => (prefix, key),
            None => ("", s),
        };

        let mut modifiers = KeyModifiers::NONE;
        for part in modifier_parts.split('+').filter(|p| !p.is_empty()) {
            match part.to_lowercase().as_str() {
                "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
                "alt" => modifiers |= KeyModifiers::ALT,
                "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return Err(format!("Unknown modifier: {part}")),
            }
        }

        let mut chars = key_part.chars();
        if let (Some(c), None) = (chars.next(), chars.next()) {
            return Ok(Self {
                code: KeyCode::Char(c),
                modifiers,
            });
        }

        let code = match key_part.to_lowercase().as_str() {
            "enter" | "return" => KeyCode::Enter,
            "esc" | "escape" => KeyCode::Esc,
            "tab" => KeyCode::Tab,
            "backtab" => KeyCode::BackTab,
            "backspace" => KeyCode::Backspace,
            "delete" | "del" => KeyCode::Delete,
            "insert" | "ins" => KeyCode::Insert,
            "home" => KeyCode::Home,
            "end" => KeyCode::End,
            "pageup" | "pgup" => KeyCode::PageUp,
            "pagedown" | "pgdn" => KeyCode::PageDown,
            "up" => KeyCode::Up,
            "down" => KeyCode::Down,
            "left" => KeyCode::Left,
            "right" => KeyCode::Right,
            "space" => KeyCode::Char(' '),
            name if name.starts_with('f') => {
                let num: u8 = name[1..]
                    .parse()
                    .map_err(|_| format!("Invalid function key: {key_part}"))?;
                KeyCode::F(num)
            }
            _ => return Err(format!("Unknown key: {key_part}")),
        };

        Ok(Self { code, modifiers })
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl Serialize for Key {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.display())
    }
}

impl<'de> Deserialize<'de> for Key {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// One or more keys bound to the same action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KeyBinding {
    Single(Key),
    Multiple(Vec<Key>),
}

impl KeyBinding {
    pub const fn multiple(keys: Vec<Key>) -> Self {
        Self::Multiple(keys)
    }

    pub fn matches(&self, event: &KeyEvent) -> bool {
        match self {
            Self::Single(key) => key.matches(event),
            Self::Multiple(keys) => keys.iter().any(|k| k.matches(event)),
        }
    }

    pub fn display(&self) -> String {
        match self {
            Self::Single(key) => key.display(),
            Self::Multiple(keys) => keys.iter().map(Key::display).collect::<Vec<_>>().join("/"),
        }
    }
}

impl From<Key> for KeyBinding {
    fn from(key: Key) -> Self {
        Self::Single(key)
    }
}

impl From<Vec<Key>> for KeyBinding {
    fn from(keys: Vec<Key>) -> Self {
        Self::Multiple(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_parsing() {
        assert_eq!(Key::from_str("q").unwrap(), Key::new(KeyCode::Char('q')));
        assert_eq!(Key::from_str("Enter").unwrap(), Key::new(KeyCode::Enter));
        assert_eq!(Key::from_str("esc").unwrap(), Key::new(KeyCode::Esc));
        assert_eq!(
            Key::from_str("ctrl+c").unwrap(),
            Key::ctrl(KeyCode::Char('c'))
        );
        assert_eq!(Key::from_str("F5").unwrap(), Key::new(KeyCode::F(5)));
        assert_eq!(Key::from_str("G").unwrap(), Key::new(KeyCode::Char('G')));
    }

    #[test]
    fn test_plus_key_parsing() {
        assert_eq!(Key::from_str("+").unwrap(), Key::new(KeyCode::Char('+')));
        assert_eq!(
            Key::from_str("ctrl++").unwrap(),
            Key::ctrl(KeyCode::Char('+'))
        );
    }

    #[test]
    fn test_invalid_keys() {
        assert!(Key::from_str("hyper+x").is_err());
        assert!(Key::from_str("nope").is_err());
        assert!(Key::from_str("").is_err());
    }

    #[test]
    fn test_key_display_round_trip() {
        for text in ["q", "Enter", "ctrl+c", "Space", "F1", "-", "+", "shift+Tab"] {
            let key = Key::from_str(text).unwrap();
            assert_eq!(Key::from_str(&key.display()).unwrap(), key);
        }
    }

    #[test]
    fn test_identifier() {
        assert_eq!(identifier(KeyCode::Enter), "Enter");
        assert_eq!(identifier(KeyCode::Char('a')), "a");
        assert_eq!(identifier(KeyCode::Esc), "Esc");
    }

    #[test]
    fn test_matches_ignores_shift_on_chars() {
        let key = Key::new(KeyCode::Char('+'));
        assert!(key.matches(&KeyEvent::new(KeyCode::Char('+'), KeyModifiers::SHIFT)));
        assert!(key.matches(&KeyEvent::new(KeyCode::Char('+'), KeyModifiers::NONE)));
        assert!(!key.matches(&KeyEvent::new(KeyCode::Char('+'), KeyModifiers::CONTROL)));
    }

    #[test]
    fn test_binding_display() {
        let binding = KeyBinding::multiple(vec![
            Key::new(KeyCode::Char('d')),
            Key::new(KeyCode::Delete),
        ]);
        assert_eq!(binding.display(), "d/Delete");
        assert!(binding.matches(&KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE)));
    }
}
