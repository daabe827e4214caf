//! State behind the lazytodo screen.
//!
//! This crate knows nothing about terminals. It holds the three pieces of
//! session state the UI renders from and the only operations allowed to
//! change them:
//! - [`TodoCounterStore`] - Owns the counter, the todo list and the draft text
//! - [`StoreAction`] - Events a view raises into the store
//! - [`TodoRecord`] - A single entry in the todo list
//!
//! Every edge case (blank submission, deleting an unknown id) is a silent
//! no-op, so none of the operations return errors.

mod action;
mod record;
mod store;

pub use action::StoreAction;
pub use record::{TodoId, TodoRecord};
pub use store::{COMMIT_KEY, Snapshot, TodoCounterStore};
