//! TUI application state and logic

use crate::game::{Rejection, RoundStatus, Session, Signal, SubmitOutcome, ValidationTicket};
use crate::oracle::WordOracle;
use crate::wordlists::SUPPORTED_LENGTHS;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::{Duration, Instant};
use tracing::{debug, warn};

/// How long the "not enough letters" warning stays up
pub const INSUFFICIENT_FLASH: Duration = Duration::from_millis(500);
/// How long the "not in word list" warning stays up
pub const INVALID_FLASH: Duration = Duration::from_millis(400);

const TICK: Duration = Duration::from_millis(50);
const MAX_MESSAGES: usize = 5;

/// A transient signal and when it disappears
#[derive(Debug, Clone, Copy)]
pub struct Flash {
    pub signal: Signal,
    pub until: Instant,
}

impl Flash {
    fn new(signal: Signal) -> Self {
        let duration = match signal {
            Signal::InsufficientLetters => INSUFFICIENT_FLASH,
            Signal::InvalidWord => INVALID_FLASH,
        };
        Self {
            signal,
            until: Instant::now() + duration,
        }
    }

    #[must_use]
    pub fn text(&self) -> &'static str {
        match self.signal {
            Signal::InsufficientLetters => "Not enough letters",
            Signal::InvalidWord => "Not in word list",
        }
    }
}

/// Panel drawn over the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Stats,
    Help,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

type Verdict = (ValidationTicket, bool);

/// Application state
pub struct App {
    pub session: Session,
    pub flash: Option<Flash>,
    pub overlay: Overlay,
    pub messages: Vec<Message>,
    pub should_quit: bool,
    oracle: Arc<dyn WordOracle>,
    verdict_tx: Sender<Verdict>,
    verdict_rx: Receiver<Verdict>,
}

impl App {
    #[must_use]
    pub fn new(session: Session, oracle: Arc<dyn WordOracle>) -> Self {
        let (verdict_tx, verdict_rx) = mpsc::channel();
        let mut app = Self {
            session,
            flash: None,
            overlay: Overlay::None,
            messages: Vec::new(),
            should_quit: false,
            oracle,
            verdict_tx,
            verdict_rx,
        };
        app.add_message(
            "Guess the word! Enter submits, Tab switches length, F1 for help.",
            MessageStyle::Info,
        );
        app
    }

    /// The flash, if it has not expired yet
    #[must_use]
    pub fn active_flash(&self) -> Option<&Flash> {
        self.flash.as_ref().filter(|f| f.until > Instant::now())
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.new_word(),
            KeyCode::Char('s') if ctrl => self.toggle_overlay(Overlay::Stats),
            KeyCode::F(1) => self.toggle_overlay(Overlay::Help),
            KeyCode::Esc => {
                if self.overlay == Overlay::None {
                    self.should_quit = true;
                } else {
                    self.overlay = Overlay::None;
                }
            }
            KeyCode::Tab => self.cycle_length(1),
            KeyCode::BackTab => self.cycle_length(SUPPORTED_LENGTHS.len() - 1),
            KeyCode::F(n @ 5..=7) => self.switch_length(usize::from(n)),
            KeyCode::Enter => self.submit(),
            KeyCode::Backspace => {
                self.session.delete_letter();
            }
            KeyCode::Char(c) if !ctrl && c.is_ascii_alphabetic() => {
                self.session.add_letter(c);
            }
            _ => {}
        }
    }

    fn toggle_overlay(&mut self, overlay: Overlay) {
        self.overlay = if self.overlay == overlay {
            Overlay::None
        } else {
            overlay
        };
    }

    /// Start validating the current input on a worker thread
    pub fn submit(&mut self) {
        let ticket = match self.session.begin_submit() {
            Ok(ticket) => ticket,
            Err(Rejection::InsufficientLetters) => {
                self.flash = Some(Flash::new(Signal::InsufficientLetters));
                return;
            }
            Err(Rejection::NotPlaying) => {
                self.add_message("Round over. Ctrl-N for a new word.", MessageStyle::Info);
                return;
            }
            Err(Rejection::ValidationPending) => return,
        };

        let oracle = Arc::clone(&self.oracle);
        let tx = self.verdict_tx.clone();
        thread::spawn(move || {
            let valid = oracle.is_valid_word(ticket.word());
            // The receiver is gone only when the app has quit
            let _ = tx.send((ticket, valid));
        });
    }

    /// Apply any verdicts that have arrived
    pub fn poll_validation(&mut self) {
        while let Ok((ticket, valid)) = self.verdict_rx.try_recv() {
            let outcome = self.session.complete_submit(&ticket, valid);
            self.apply_outcome(outcome);
        }
    }

    fn apply_outcome(&mut self, outcome: SubmitOutcome) {
        match outcome {
            SubmitOutcome::Signal(signal) => self.flash = Some(Flash::new(signal)),
            SubmitOutcome::Recorded(RoundStatus::Won) => {
                let attempts = self.session.active().guesses().len();
                let celebration = match attempts {
                    1 => "🎯 Genius! First try!",
                    2 => "🔥 Magnificent! Two guesses!",
                    3 => "✨ Impressive! Three guesses!",
                    4 => "👏 Splendid! Four guesses!",
                    5 => "🎉 Great! Five guesses!",
                    _ => "😅 Phew! Got it in six!",
                };
                self.add_message(celebration, MessageStyle::Success);
                self.add_message("Ctrl-N for a new word.", MessageStyle::Info);
                self.overlay = Overlay::Stats;
            }
            SubmitOutcome::Recorded(RoundStatus::Lost) => {
                let text = format!("The word was {}", self.session.active().target());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Ctrl-N for a new word.", MessageStyle::Info);
                self.overlay = Overlay::Stats;
            }
            SubmitOutcome::Stale => debug!("ignoring verdict for an inactive round"),
            SubmitOutcome::Recorded(RoundStatus::Playing) | SubmitOutcome::Ignored => {}
        }
    }

    pub fn new_word(&mut self) {
        match self.session.reset_active() {
            Ok(()) => {
                self.flash = None;
                self.overlay = Overlay::None;
                self.add_message("New word! Good luck.", MessageStyle::Info);
            }
            Err(e) => {
                warn!("could not start a new round: {e}");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Move `step` places along the supported lengths, wrapping around
    fn cycle_length(&mut self, step: usize) {
        let current = SUPPORTED_LENGTHS
            .iter()
            .position(|&n| n == self.session.active_length())
            .unwrap_or(0);
        let next = SUPPORTED_LENGTHS[(current + step) % SUPPORTED_LENGTHS.len()];
        self.switch_length(next);
    }

    pub fn switch_length(&mut self, length: usize) {
        if length == self.session.active_length() {
            return;
        }
        match self.session.switch_length(length) {
            Ok(()) => {
                self.flash = None;
                self.add_message(&format!("{length}-letter words"), MessageStyle::Info);
            }
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    while !app.should_quit {
        app.poll_validation();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so verdicts and flash expiry redraw without a key press
        if !event::poll(TICK)? {
            continue;
        }
        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind == KeyEventKind::Press {
                app.handle_key(key);
            }
        }
    }

    Ok(())
}
