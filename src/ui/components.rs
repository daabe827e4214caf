mod list;
mod text_input;

pub use list::{List, ListEvent, ListRow};
pub use text_input::{TextInput, TextInputEvent};
