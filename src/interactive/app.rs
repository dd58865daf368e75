//! TUI application state and logic

use crate::dictionary::WordListDictionary;
use crate::game::{Game, GameError, GameSession, Outcome};
use crate::output::formatters::rejection_text;
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::info;

/// Application state
pub struct App<'a> {
    pub game: Game<'a, WordList, WordListDictionary>,
    pub session: GameSession,
    pub rng: StdRng,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub alert: Option<Alert>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Typing,
    Alert,
}

/// A rejection shown as a modal until dismissed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub rounds_played: usize,
    pub words_accepted: usize,
    pub best_score: usize,
}

impl<'a> App<'a> {
    /// Create the app and start the first round
    ///
    /// # Errors
    ///
    /// Returns an error if the root-word pool is empty.
    pub fn new(
        game: Game<'a, WordList, WordListDictionary>,
        mut rng: StdRng,
    ) -> Result<Self, GameError> {
        let session = game.start_new_game(&mut rng)?;

        Ok(Self {
            game,
            session,
            rng,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Spell words using the letters of the root word.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Words need 3+ letters. Ctrl+N starts a new game.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            alert: None,
            stats: Statistics {
                rounds_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Typing,
        })
    }

    /// Submit whatever is in the input buffer
    pub fn submit(&mut self) {
        let outcome = self.game.submit_word(&mut self.session, &self.input_buffer);

        match outcome {
            Outcome::Ignored => {}
            Outcome::Accepted { word, points, score } => {
                self.input_buffer.clear();
                self.stats.words_accepted += 1;
                self.stats.best_score = self.stats.best_score.max(score);
                self.add_message(
                    &format!("{} +{points}", word.to_uppercase()),
                    MessageStyle::Success,
                );
            }
            Outcome::Rejected(rejection) => {
                let (title, message) = rejection_text(rejection, self.session.root_word());
                self.add_message(&format!("{title}: {message}"), MessageStyle::Error);
                self.alert = Some(Alert {
                    title: title.to_string(),
                    message,
                });
                self.input_mode = InputMode::Alert;
            }
        }
    }

    /// Start a new round on a fresh root word
    ///
    /// # Errors
    ///
    /// Returns an error if the root-word pool is empty.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.game.restart(&mut self.session, &mut self.rng)?;
        self.stats.rounds_played += 1;
        self.input_buffer.clear();
        self.alert = None;
        self.input_mode = InputMode::Typing;
        self.messages.clear();
        self.add_message(
            &format!(
                "New game started! Root word: {}",
                self.session.root_word().to_uppercase()
            ),
            MessageStyle::Info,
        );
        info!(root_word = self.session.root_word(), "new game from TUI");
        Ok(())
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.input_mode = InputMode::Typing;
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// React to a single key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new round cannot be started.
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<(), GameError> {
        // Only process key press events (fixes Windows double-input bug)
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                KeyCode::Char('c') => self.should_quit = true,
                KeyCode::Char('n') => self.new_game()?,
                _ => {}
            }
            return Ok(());
        }

        match self.input_mode {
            InputMode::Alert => {
                // The alert's only button is "Ok"
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                    self.dismiss_alert();
                }
            }
            InputMode::Typing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::F(2) => self.new_game()?,
                KeyCode::Char(c) => self.input_buffer.push(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
        }

        Ok(())
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails, if there's an I/O error
/// during rendering or event handling, or if a new round cannot be started.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key)?;
        }

        if app.should_quit {
            break;
        }
    }

    info!(
        rounds = app.stats.rounds_played,
        words = app.stats.words_accepted,
        best_score = app.stats.best_score,
        "leaving TUI"
    );
    Ok(())
}
