//! UI building blocks for the TUI.
//!
//! This module defines the core UI abstractions:
//! - [`Component`] - Reusable, interactive UI building blocks
//! - [`Screen`] - Full-page views that own state and orchestrate components
//! - [`Handled`] - Result of handling an input event
//!
//! along with the app-level overlays (help, theme selector, error dialog)
//! and the status bar.

pub mod components;

mod error_dialog;
mod help;
mod status_bar;
mod theme_selector;

use crossterm::event::KeyEvent;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::Theme;

pub use components::{List, ListEvent, ListRow, TextInput, TextInputEvent};
pub use error_dialog::{ErrorDialog, ErrorDialogEvent};
pub use help::{HelpEvent, HelpOverlay, Keybinding, KeybindingSection};
pub use status_bar::StatusBar;
pub use theme_selector::{ThemeEvent, ThemeSelector};

/// Result type alias for UI operations.
pub type Result<T> = std::result::Result<T, color_eyre::Report>;

/// Result of handling an input event.
///
/// - `Ignored` - The handler didn't recognize or handle this input
/// - `Consumed` - The input was handled but produced no event
/// - `Event(E)` - The input was handled and produced an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Handled<E> {
    /// Input was not handled, parent should process it.
    Ignored,
    /// Input was consumed but produced no event.
    Consumed,
    /// Input was consumed and produced an event.
    Event(E),
}

impl<E> Handled<E> {
    /// Returns true if the input was consumed (not ignored).
    pub const fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

impl<E> From<E> for Handled<E> {
    fn from(event: E) -> Self {
        Self::Event(event)
    }
}

/// Interactive UI building block.
///
/// Components handle key events and emit generic outputs. They know
/// nothing about the store.
pub trait Component {
    /// The output type this component produces (e.g., `ListEvent<T>`, `TextInputEvent`)
    type Output;

    /// Handle a key event.
    ///
    /// Returns `Ok(Handled::...)` where:
    /// - `Ignored` - key was not handled, parent should process it
    /// - `Consumed` - key was handled but produced no output
    /// - `Event(output)` - key was handled and produced an output
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        _ = key;
        Ok(Handled::Ignored)
    }

    /// Render the component to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);
}

/// Full-page view.
///
/// A screen owns the state it displays, translates component outputs into
/// state changes, and redraws from that state.
pub trait Screen {
    /// Handle a key event that no overlay claimed.
    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<()>>;

    /// Handle text pasted into the terminal.
    fn handle_paste(&mut self, text: &str) -> Handled<()> {
        _ = text;
        Handled::Ignored
    }

    /// Render the screen to the frame.
    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme);

    /// Short label for what currently has focus, shown in the status bar.
    fn focus_label(&self) -> &'static str;

    /// Keybindings that apply to the current focus.
    fn keybindings(&self) -> Vec<Keybinding> {
        vec![]
    }

    /// Monotonic counter that changes whenever the screen needs a redraw.
    fn revision(&self) -> u64;
}
