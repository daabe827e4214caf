//! Application loop.
//!
//! Terminal events come in from [`Tui`], keys are offered to the open
//! overlay first, then to the [`AppShell`], and whatever the shell ignores
//! is matched against the global keybindings. Everything that changes
//! app-level state goes through an [`AppMessage`] on an internal channel.

use std::sync::Arc;

use color_eyre::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use lazytodo_core::TodoCounterStore;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::widgets::Block;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info, warn};

use crate::Theme;
use crate::config::{self, GlobalAction, KeyResolver};
use crate::shell::AppShell;
use crate::theme::ThemeInfo;
use crate::tui::{Event, Tui};
use crate::ui::{
    Component, ErrorDialog, ErrorDialogEvent, Handled, HelpEvent, HelpOverlay, KeybindingSection,
    Screen, StatusBar, ThemeEvent, ThemeSelector,
};

const FRAME_RATE: f64 = 30.0;
const TICK_RATE: f64 = 4.0;
const STATUS_BAR_HEIGHT: u16 = 3;

#[derive(Debug, Clone)]
pub enum AppMessage {
    // Lifecycle
    Render,
    Resize(u16, u16),
    Suspend,
    Quit,

    // Overlays
    DisplayError(String),
    DisplayHelp,
    DisplayThemeSelector,
    ClosePopup,
    SelectTheme(ThemeInfo),
}

enum Overlay {
    Help(HelpOverlay),
    Theme(ThemeSelector),
    Error(ErrorDialog),
}

pub struct App {
    shell: AppShell,
    overlay: Option<Overlay>,
    status_bar: StatusBar,
    resolver: Arc<KeyResolver>,
    theme: Theme,
    persist_theme: bool,
    should_quit: bool,
    should_suspend: bool,
    dirty: bool,
    rendered_revision: Option<u64>,
    message_tx: UnboundedSender<AppMessage>,
    message_rx: UnboundedReceiver<AppMessage>,
}

impl App {
    pub fn new(resolver: Arc<KeyResolver>, theme: Theme) -> Self {
        let (message_tx, message_rx) = mpsc::unbounded_channel();
        Self {
            shell: AppShell::new(TodoCounterStore::new(), resolver.clone()),
            overlay: None,
            status_bar: StatusBar::new(resolver.clone()),
            resolver,
            theme,
            persist_theme: true,
            should_quit: false,
            should_suspend: false,
            dirty: true,
            rendered_revision: None,
            message_tx,
            message_rx,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut tui = Tui::new(FRAME_RATE, TICK_RATE)?;
        tui.enter()?;

        loop {
            self.handle_events(&mut tui).await?;
            self.handle_messages(&mut tui)?;
            if self.should_suspend {
                info!("Suspending");
                tui.suspend()?;
                tui.resume()?;
                self.should_suspend = false;
                self.dirty = true;
            } else if self.should_quit {
                break;
            }
        }

        tui.exit()?;
        info!(
            counter = self.shell.store().counter(),
            todos = self.shell.store().len(),
            "Exiting"
        );
        Ok(())
    }

    async fn handle_events(&mut self, tui: &mut Tui) -> Result<()> {
        let Some(event) = tui.next_event().await else {
            self.message_tx.send(AppMessage::Quit)?;
            return Ok(());
        };

        match event {
            Event::Init | Event::Render => self.message_tx.send(AppMessage::Render)?,
            Event::Tick => {}
            Event::Quit => self.message_tx.send(AppMessage::Quit)?,
            Event::Error(message) => self.message_tx.send(AppMessage::DisplayError(message))?,
            Event::Resize(width, height) => {
                self.message_tx.send(AppMessage::Resize(width, height))?;
            }
            Event::Paste(text) => self.handle_paste(&text)?,
            Event::Key(key) => self.handle_key(key)?,
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('z') {
            self.message_tx.send(AppMessage::Suspend)?;
            return Ok(());
        }

        if self.overlay.is_some() {
            self.handle_overlay_key(key)?;
        } else {
            let handled = match self.shell.handle_key(key) {
                Ok(handled) => handled,
                Err(e) => {
                    self.message_tx.send(AppMessage::DisplayError(e.to_string()))?;
                    Handled::Consumed
                }
            };
            if !handled.is_consumed() {
                self.handle_global_key(key)?;
            }
        }

        self.dirty = true;
        self.message_tx.send(AppMessage::Render)?;
        Ok(())
    }

    fn handle_overlay_key(&mut self, key: KeyEvent) -> Result<()> {
        let message = match &mut self.overlay {
            Some(Overlay::Help(help)) => match help.handle_key(key)? {
                Handled::Event(HelpEvent::Close) => Some(AppMessage::ClosePopup),
                _ => None,
            },
            Some(Overlay::Theme(selector)) => match selector.handle_key(key)? {
                Handled::Event(ThemeEvent::Selected(info)) => Some(AppMessage::SelectTheme(info)),
                Handled::Event(ThemeEvent::Cancelled) => Some(AppMessage::ClosePopup),
                _ => None,
            },
            Some(Overlay::Error(dialog)) => match dialog.handle_key(key)? {
                Handled::Event(ErrorDialogEvent::Dismissed) => Some(AppMessage::ClosePopup),
                _ => None,
            },
            None => None,
        };

        if let Some(message) = message {
            self.message_tx.send(message)?;
        }
        Ok(())
    }

    fn handle_global_key(&self, key: KeyEvent) -> Result<()> {
        let message = if self.resolver.matches_global(&key, GlobalAction::Quit) {
            AppMessage::Quit
        } else if self.resolver.matches_global(&key, GlobalAction::Help) {
            AppMessage::DisplayHelp
        } else if self.resolver.matches_global(&key, GlobalAction::Theme) {
            AppMessage::DisplayThemeSelector
        } else {
            return Ok(());
        };
        self.message_tx.send(message)?;
        Ok(())
    }

    fn handle_paste(&mut self, text: &str) -> Result<()> {
        if self.overlay.is_none() && self.shell.handle_paste(text).is_consumed() {
            self.dirty = true;
            self.message_tx.send(AppMessage::Render)?;
        }
        Ok(())
    }

    fn handle_messages(&mut self, tui: &mut Tui) -> Result<()> {
        while let Ok(message) = self.message_rx.try_recv() {
            match message {
                AppMessage::Render => self.render(tui)?,
                AppMessage::Resize(width, height) => {
                    tui.resize(Rect::new(0, 0, width, height))?;
                    self.dirty = true;
                    self.render(tui)?;
                }
                message => self.update(message),
            }
        }
        Ok(())
    }

    /// Apply a message that does not need the terminal.
    fn update(&mut self, message: AppMessage) {
        debug!(?message, "Handling message");
        match message {
            AppMessage::Render | AppMessage::Resize(..) => {}
            AppMessage::Suspend => self.should_suspend = true,
            AppMessage::Quit => self.should_quit = true,
            AppMessage::DisplayError(message) => {
                error!(%message, "Showing error");
                self.overlay = Some(Overlay::Error(ErrorDialog::new(
                    message,
                    self.resolver.clone(),
                )));
            }
            AppMessage::DisplayHelp => {
                self.overlay = Some(Overlay::Help(HelpOverlay::new(
                    self.help_sections(),
                    self.resolver.clone(),
                )));
            }
            AppMessage::DisplayThemeSelector => {
                self.overlay = Some(Overlay::Theme(ThemeSelector::new(
                    &self.theme,
                    self.resolver.clone(),
                )));
            }
            AppMessage::ClosePopup => self.overlay = None,
            AppMessage::SelectTheme(info) => {
                info!(theme = info.name, "Switching theme");
                self.theme = info.theme;
                self.overlay = None;
                if self.persist_theme
                    && let Err(e) = config::save_theme(info.name)
                {
                    warn!(error = %e, "Failed to save theme");
                    self.overlay = Some(Overlay::Error(ErrorDialog::new(
                        format!("Could not save theme: {e}"),
                        self.resolver.clone(),
                    )));
                }
            }
        }
        self.dirty = true;
    }

    fn help_sections(&self) -> Vec<KeybindingSection> {
        vec![
            KeybindingSection::new(self.shell.focus_label(), self.shell.keybindings()),
            KeybindingSection::new("Global", self.status_bar.global_keybindings()),
        ]
    }

    fn render(&mut self, tui: &mut Tui) -> Result<()> {
        let revision = self.shell.revision();
        if !self.dirty && self.rendered_revision == Some(revision) {
            return Ok(());
        }
        tui.draw(|frame| self.draw(frame))?;
        self.dirty = false;
        self.rendered_revision = Some(revision);
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(
            Block::default().style(Style::default().bg(self.theme.base())),
            area,
        );

        let [body, status] = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(STATUS_BAR_HEIGHT)])
            .areas(area);

        self.shell.render(frame, body, &self.theme);
        self.status_bar.render(
            frame,
            status,
            &self.theme,
            self.shell.focus_label(),
            &self.shell.keybindings(),
        );

        match &mut self.overlay {
            Some(Overlay::Help(help)) => help.render(frame, area, &self.theme),
            Some(Overlay::Theme(selector)) => selector.render(frame, area, &self.theme),
            Some(Overlay::Error(dialog)) => dialog.render(frame, area, &self.theme),
            None => {}
        }
    }
}
