use std::fmt;

/// Identifier of a [`TodoRecord`], unique within a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TodoId(u64);

impl TodoId {
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A single todo entry.
///
/// `text` is stored exactly as typed. Surrounding whitespace only matters
/// when deciding whether a draft may be submitted at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoRecord {
    pub id: TodoId,
    pub text: String,
}

impl TodoRecord {
    pub fn new(id: TodoId, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
        }
    }
}
