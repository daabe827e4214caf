use std::sync::Arc;

use crossterm::event::KeyEvent;
use lazytodo_core::{COMMIT_KEY, StoreAction, TodoCounterStore, TodoRecord};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, ListItem, Paragraph};

use crate::Theme;
use crate::config::{KeyResolver, NavAction, TodoAction};
use crate::ui::{Component, Handled, Keybinding, List, ListRow, Result, TextInput, TextInputEvent};

const EMPTY_MESSAGE: &str = "No todos yet. Add one above!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TodoFocus {
    Input,
    List,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoPanelEvent {
    Action(StoreAction),
    FocusInput,
    FocusList,
}

#[derive(Clone)]
struct TodoRow(TodoRecord);

impl ListRow for TodoRow {
    fn render_row(&self, theme: &Theme) -> ListItem<'static> {
        ListItem::new(self.0.text.clone()).style(Style::default().fg(theme.text()))
    }
}

/// Draft input, add button and the list of todos.
pub struct TodoPanel {
    input: TextInput,
    list: List<TodoRow>,
    focus: Option<TodoFocus>,
    can_submit: bool,
    resolver: Arc<KeyResolver>,
}

impl TodoPanel {
    pub fn new(resolver: Arc<KeyResolver>) -> Self {
        Self {
            input: TextInput::new("New todo").with_placeholder("Add a new todo..."),
            list: List::new(Vec::new(), resolver.clone()),
            focus: None,
            can_submit: false,
            resolver,
        }
    }

    pub fn set_focus(&mut self, focus: Option<TodoFocus>) {
        self.focus = focus;
        self.input.set_focused(focus == Some(TodoFocus::Input));
        self.list.set_highlight(focus == Some(TodoFocus::List));
    }

    pub fn sync(&mut self, store: &TodoCounterStore) {
        self.input.set_value(store.draft_text());
        self.list
            .set_items(store.todos().iter().cloned().map(TodoRow).collect());
        self.can_submit = store.can_submit();
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.list.selected_index()
    }

    pub fn paste(&mut self, text: &str) -> Option<TodoPanelEvent> {
        match self.input.paste(text)? {
            TextInputEvent::Changed(value) => {
                Some(TodoPanelEvent::Action(StoreAction::SetDraftText(value)))
            }
            _ => None,
        }
    }

    pub fn keybindings(&self) -> Vec<Keybinding> {
        match self.focus {
            Some(TodoFocus::Input) => vec![
                Keybinding::hint(COMMIT_KEY, "Add todo"),
                Keybinding::new(
                    self.resolver.display_todo(TodoAction::Submit),
                    "Add todo (anywhere in input)",
                ),
                Keybinding::hint("Esc", "Leave input"),
            ],
            Some(TodoFocus::List) => vec![
                Keybinding::hint(self.resolver.display_todo(TodoAction::Compose), "New todo"),
                Keybinding::hint(self.resolver.display_todo(TodoAction::Delete), "Delete"),
                Keybinding::new(
                    format!(
                        "{}/{}",
                        self.resolver.display_nav(NavAction::Up),
                        self.resolver.display_nav(NavAction::Down)
                    ),
                    "Navigate",
                ),
                Keybinding::new(
                    format!(
                        "{}/{}",
                        self.resolver.display_nav(NavAction::Home),
                        self.resolver.display_nav(NavAction::End)
                    ),
                    "First/last",
                ),
            ],
            None => vec![],
        }
    }

    fn handle_input_key(&mut self, key: KeyEvent) -> Result<Handled<TodoPanelEvent>> {
        if self.resolver.matches_todo(&key, TodoAction::Submit) {
            return Ok(TodoPanelEvent::Action(StoreAction::SubmitDraft).into());
        }

        Ok(match self.input.handle_key(key)? {
            Handled::Event(TextInputEvent::Changed(value)) => {
                TodoPanelEvent::Action(StoreAction::SetDraftText(value)).into()
            }
            Handled::Event(TextInputEvent::KeyPressed(identifier)) => {
                TodoPanelEvent::Action(StoreAction::SubmitDraftOnKey(identifier)).into()
            }
            Handled::Event(TextInputEvent::Cancelled) => TodoPanelEvent::FocusList.into(),
            Handled::Consumed => Handled::Consumed,
            Handled::Ignored => Handled::Ignored,
        })
    }

    fn handle_list_key(&mut self, key: KeyEvent) -> Result<Handled<TodoPanelEvent>> {
        if self.resolver.matches_todo(&key, TodoAction::Compose) {
            return Ok(TodoPanelEvent::FocusInput.into());
        }
        if self.resolver.matches_todo(&key, TodoAction::Delete) {
            return Ok(self.list.selected().map_or(Handled::Consumed, |row| {
                TodoPanelEvent::Action(StoreAction::DeleteTodo(row.0.id)).into()
            }));
        }

        Ok(match self.list.handle_key(key)? {
            // Activating a row has no meaning here; the list is read-only.
            Handled::Event(_) | Handled::Consumed => Handled::Consumed,
            Handled::Ignored => Handled::Ignored,
        })
    }

    fn render_add_button(&self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let style = if self.can_submit {
            Style::default()
                .fg(theme.primary())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.overlay0())
        };
        let button = Paragraph::new(Line::from(Span::styled("+", style)))
            .alignment(Alignment::Center)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(style),
            );
        frame.render_widget(button, area);
    }
}

impl Component for TodoPanel {
    type Output = TodoPanelEvent;

    fn handle_key(&mut self, key: KeyEvent) -> Result<Handled<Self::Output>> {
        match self.focus {
            Some(TodoFocus::Input) => self.handle_input_key(key),
            Some(TodoFocus::List) => self.handle_list_key(key),
            None => Ok(Handled::Ignored),
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, theme: &Theme) {
        let border_color = if self.focus.is_some() {
            theme.border_focused()
        } else {
            theme.border()
        };
        let block = Block::default()
            .title(" Todo List ")
            .title_style(
                Style::default()
                    .fg(theme.secondary())
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(border_color));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let [input_row, list_area] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(1)])
            .areas(inner);
        let [input_area, button_area] = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(5)])
            .areas(input_row);

        self.input.render(frame, input_area, theme);
        self.render_add_button(frame, button_area, theme);

        if self.list.items().is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                EMPTY_MESSAGE,
                Style::default().fg(theme.overlay1()),
            )))
            .alignment(Alignment::Center);
            frame.render_widget(empty, list_area);
        } else {
            self.list.render(frame, list_area, theme);
        }
    }
}
