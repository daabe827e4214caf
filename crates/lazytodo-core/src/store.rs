use tracing::{debug, trace};

use crate::action::StoreAction;
use crate::record::{TodoId, TodoRecord};

/// Key identifier that commits the draft in [`TodoCounterStore::submit_draft_on_key`].
pub const COMMIT_KEY: &str = "Enter";

/// Owned copy of everything a view needs to draw the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub counter: i64,
    pub todos: Vec<TodoRecord>,
    pub draft_text: String,
}

/// Session state for the counter and the todo list.
///
/// The store is the only place these values change. Views read through the
/// accessors and raise [`StoreAction`]s (or call the operations directly).
/// [`revision`](Self::revision) increases on every real change, so a view can
/// tell whether it needs to redraw after handling an event.
#[derive(Debug, Clone)]
pub struct TodoCounterStore {
    counter: i64,
    todos: Vec<TodoRecord>,
    draft_text: String,
    next_id: u64,
    revision: u64,
}

impl Default for TodoCounterStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TodoCounterStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            counter: 0,
            todos: Vec::new(),
            draft_text: String::new(),
            next_id: 1,
            revision: 0,
        }
    }

    #[must_use]
    pub const fn counter(&self) -> i64 {
        self.counter
    }

    #[must_use]
    pub fn todos(&self) -> &[TodoRecord] {
        &self.todos
    }

    #[must_use]
    pub fn draft_text(&self) -> &str {
        &self.draft_text
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.todos.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.todos.is_empty()
    }

    /// Whether [`submit_draft`](Self::submit_draft) would create a record.
    #[must_use]
    pub fn can_submit(&self) -> bool {
        !self.draft_text.trim().is_empty()
    }

    #[must_use]
    pub const fn revision(&self) -> u64 {
        self.revision
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            counter: self.counter,
            todos: self.todos.clone(),
            draft_text: self.draft_text.clone(),
        }
    }

    pub const fn increment(&mut self) {
        self.counter = self.counter.wrapping_add(1);
        self.revision += 1;
    }

    pub const fn decrement(&mut self) {
        self.counter = self.counter.wrapping_sub(1);
        self.revision += 1;
    }

    pub fn set_draft_text(&mut self, value: impl Into<String>) {
        let value = value.into();
        if value == self.draft_text {
            return;
        }
        self.draft_text = value;
        self.revision += 1;
    }

    /// Append the draft as a new todo and clear it.
    ///
    /// A draft that is empty after trimming is left alone and nothing is
    /// added. The stored text is the raw draft, not the trimmed one.
    pub fn submit_draft(&mut self) -> Option<TodoId> {
        if !self.can_submit() {
            trace!("Ignoring blank draft");
            return None;
        }

        let id = TodoId::new(self.next_id);
        self.next_id += 1;

        let text = std::mem::take(&mut self.draft_text);
        debug!(%id, text = %text, "Adding todo");
        self.todos.push(TodoRecord::new(id, text));
        self.revision += 1;
        Some(id)
    }

    /// Submit the draft only when `key` is [`COMMIT_KEY`].
    pub fn submit_draft_on_key(&mut self, key: &str) -> Option<TodoId> {
        if key == COMMIT_KEY {
            self.submit_draft()
        } else {
            None
        }
    }

    /// Remove the todo with the given id. Unknown ids are ignored.
    pub fn delete_todo(&mut self, id: TodoId) -> Option<TodoRecord> {
        let index = self.todos.iter().position(|todo| todo.id == id)?;
        let removed = self.todos.remove(index);
        debug!(%id, "Deleted todo");
        self.revision += 1;
        Some(removed)
    }

    /// Apply an action. Returns `true` if any state changed.
    pub fn dispatch(&mut self, action: StoreAction) -> bool {
        let before = self.revision;
        match action {
            StoreAction::Increment => self.increment(),
            StoreAction::Decrement => self.decrement(),
            StoreAction::SetDraftText(value) => self.set_draft_text(value),
            StoreAction::SubmitDraft => {
                self.submit_draft();
            }
            StoreAction::SubmitDraftOnKey(key) => {
                self.submit_draft_on_key(&key);
            }
            StoreAction::DeleteTodo(id) => {
                self.delete_todo(id);
            }
        }
        self.revision != before
    }
}
