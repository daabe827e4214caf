use crate::record::TodoId;

/// Events a view may raise into the [`crate::TodoCounterStore`].
///
/// Each variant maps one-to-one onto a store operation; see
/// [`crate::TodoCounterStore::dispatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreAction {
    /// Add one to the counter
    Increment,
    /// Subtract one from the counter
    Decrement,
    /// Replace the draft text with the given value
    SetDraftText(String),
    /// Turn the draft into a todo, unless it is blank
    SubmitDraft,
    /// Submit the draft if the key identifier is the commit key
    SubmitDraftOnKey(String),
    /// Remove the todo with this id, if present
    DeleteTodo(TodoId),
}
