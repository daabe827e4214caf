//! Terminal session.
//!
//! [`Tui`] wraps ratatui's [`Terminal`], switches the terminal in and out of
//! raw mode, and turns crossterm input plus two timers into a stream of
//! [`Event`]s on a background task.

use std::io::Stdout;
use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crossterm::cursor;
use crossterm::event::{
    DisableBracketedPaste, EnableBracketedPaste, Event as CrosstermEvent, EventStream, KeyCode,
    KeyEvent, KeyEventKind, KeyModifiers,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use futures::{FutureExt, StreamExt};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;
use tracing::error;

const GRACEFUL_SHUTDOWN_TIMEOUT_MS: u64 = 500;
const FORCEFUL_SHUTDOWN_TIMEOUT_MS: u64 = 2000;

pub type Backend = CrosstermBackend<Stdout>;

#[derive(Clone, Debug)]
pub enum Event {
    Init,
    Quit,
    Error(String),
    Tick,
    Render,
    Paste(String),
    Key(KeyEvent),
    Resize(u16, u16),
}

pub struct Tui {
    terminal: Terminal<Backend>,
    task: JoinHandle<()>,
    cancellation_token: CancellationToken,
    event_rx: UnboundedReceiver<Event>,
    event_tx: UnboundedSender<Event>,
    frame_rate: f64,
    tick_rate: f64,
}

impl Tui {
    /// `frame_rate` and `tick_rate` are per second.
    pub fn new(frame_rate: f64, tick_rate: f64) -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Ok(Self {
            terminal: Terminal::new(Backend::new(std::io::stdout()))?,
            task: tokio::spawn(async {}),
            cancellation_token: CancellationToken::new(),
            event_rx,
            event_tx,
            frame_rate,
            tick_rate,
        })
    }

    /// Raw mode, alternate screen, bracketed paste.
    pub fn enter(&mut self) -> color_eyre::Result<()> {
        crossterm::terminal::enable_raw_mode()?;
        crossterm::execute!(
            std::io::stdout(),
            EnterAlternateScreen,
            EnableBracketedPaste,
            cursor::Hide
        )?;
        self.start();
        Ok(())
    }

    pub fn exit(&mut self) -> color_eyre::Result<()> {
        self.stop()?;
        if crossterm::terminal::is_raw_mode_enabled()? {
            self.flush()?;
            crossterm::execute!(
                std::io::stdout(),
                DisableBracketedPaste,
                LeaveAlternateScreen,
                cursor::Show
            )?;
            crossterm::terminal::disable_raw_mode()?;
        }
        Ok(())
    }

    /// Restore the terminal and stop the process (Ctrl+Z).
    pub fn suspend(&mut self) -> color_eyre::Result<()> {
        self.exit()?;
        #[cfg(not(windows))]
        signal_hook::low_level::raise(signal_hook::consts::SIGTSTP)?;
        Ok(())
    }

    pub fn resume(&mut self) -> color_eyre::Result<()> {
        self.enter()?;
        self.clear()?;
        Ok(())
    }

    pub async fn next_event(&mut self) -> Option<Event> {
        self.event_rx.recv().await
    }

    fn start(&mut self) {
        self.cancel();
        self.cancellation_token = CancellationToken::new();
        let event_loop = Self::event_loop(
            self.event_tx.clone(),
            self.cancellation_token.clone(),
            self.tick_rate,
            self.frame_rate,
        );
        self.task = tokio::spawn(event_loop);
    }

    fn stop(&mut self) -> color_eyre::Result<()> {
        self.cancel();
        let mut shutdown_counter = 0;
        while !self.task.is_finished() {
            std::thread::sleep(Duration::from_millis(1));
            shutdown_counter += 1;
            if shutdown_counter >= GRACEFUL_SHUTDOWN_TIMEOUT_MS {
                self.task.abort();
            }
            if shutdown_counter >= FORCEFUL_SHUTDOWN_TIMEOUT_MS {
                return Err(color_eyre::eyre::eyre!("Failed to stop the input task"));
            }
        }
        Ok(())
    }

    fn cancel(&self) {
        self.cancellation_token.cancel();
    }

    #[cfg(unix)]
    fn forward_sigterm(event_tx: UnboundedSender<Event>) {
        use tokio::signal::unix::{SignalKind, signal};
        use tracing::warn;

        tokio::spawn(async move {
            match signal(SignalKind::terminate()) {
                Ok(mut sigterm) => {
                    sigterm.recv().await;
                    let _ = event_tx.send(Event::Quit);
                }
                Err(e) => warn!(error = %e, "Could not install SIGTERM handler"),
            }
        });
    }

    fn map_event(event: CrosstermEvent) -> Option<Event> {
        match event {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => {
                if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
                {
                    Some(Event::Quit)
                } else {
                    Some(Event::Key(key))
                }
            }
            CrosstermEvent::Resize(width, height) => Some(Event::Resize(width, height)),
            CrosstermEvent::Paste(text) => Some(Event::Paste(text)),
            _ => None,
        }
    }

    async fn event_loop(
        event_tx: UnboundedSender<Event>,
        cancellation_token: CancellationToken,
        tick_rate: f64,
        frame_rate: f64,
    ) {
        let mut event_stream = EventStream::new();
        let mut tick_interval = interval(Duration::from_secs_f64(1.0 / tick_rate));
        let mut frame_interval = interval(Duration::from_secs_f64(1.0 / frame_rate));

        #[cfg(unix)]
        Self::forward_sigterm(event_tx.clone());

        if event_tx.send(Event::Init).is_err() {
            return;
        }

        loop {
            let event = tokio::select! {
                () = cancellation_token.cancelled() => break,
                _ = tick_interval.tick() => Event::Tick,
                _ = frame_interval.tick() => Event::Render,
                crossterm_event = event_stream.next().fuse() => match crossterm_event {
                    Some(Ok(event)) => match Self::map_event(event) {
                        Some(event) => event,
                        None => continue,
                    },
                    Some(Err(e)) => Event::Error(e.to_string()),
                    None => break,
                },
            };
            if event_tx.send(event).is_err() {
                break;
            }
        }
        cancellation_token.cancel();
    }
}

impl Deref for Tui {
    type Target = Terminal<Backend>;

    fn deref(&self) -> &Self::Target {
        &self.terminal
    }
}

impl DerefMut for Tui {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.terminal
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        if let Err(e) = self.exit() {
            error!(error = %e, "Failed to restore the terminal");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> CrosstermEvent {
        CrosstermEvent::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn test_ctrl_c_quits() {
        let event = Tui::map_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(matches!(event, Some(Event::Quit)));
    }

    #[test]
    fn test_plain_keys_pass_through() {
        let event = Tui::map_event(key(KeyCode::Char('c'), KeyModifiers::NONE));
        assert!(matches!(event, Some(Event::Key(k)) if k.code == KeyCode::Char('c')));
    }

    #[test]
    fn test_key_release_is_dropped() {
        let mut release = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        assert!(Tui::map_event(CrosstermEvent::Key(release)).is_none());
    }

    #[test]
    fn test_paste_and_resize() {
        assert!(matches!(
            Tui::map_event(CrosstermEvent::Paste("hi".into())),
            Some(Event::Paste(text)) if text == "hi"
        ));
        assert!(matches!(
            Tui::map_event(CrosstermEvent::Resize(80, 24)),
            Some(Event::Resize(80, 24))
        ));
    }
}
