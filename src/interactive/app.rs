//! TUI application state and logic

use crate::core::WORD_LENGTH;
use crate::game::{Game, GameError, Outcome, SubmitError};
use crate::services::WordValidator;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::Duration;

/// Application state
pub struct App<V> {
    pub game: Game<V>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    /// Waiting on the validator; key presses are discarded
    Checking,
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<V: WordValidator> App<V> {
    #[must_use]
    pub fn new(game: Game<V>) -> Self {
        Self {
            game,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! Guess the five-letter word in six tries.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a word and press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            input_mode: InputMode::Guessing,
            should_quit: false,
        }
    }

    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Guessing
            && c.is_ascii_alphabetic()
            && self.input_buffer.len() < WORD_LENGTH
        {
            self.input_buffer.push(c.to_ascii_uppercase());
        }
    }

    pub fn pop_char(&mut self) {
        if self.input_mode == InputMode::Guessing {
            self.input_buffer.pop();
        }
    }

    /// Enter the checking state if there is a guess to submit
    ///
    /// Returns `false` when nothing should be sent to the validator.
    pub fn begin_submit(&mut self) -> bool {
        if self.input_mode != InputMode::Guessing {
            return false;
        }
        if self.input_buffer.len() != WORD_LENGTH {
            self.add_message(
                &format!("Please enter a {WORD_LENGTH}-letter word."),
                MessageStyle::Error,
            );
            return false;
        }
        self.input_mode = InputMode::Checking;
        true
    }

    /// Validate and score the current input
    pub async fn submit_guess(&mut self) {
        let guess = self.input_buffer.clone();

        match self.game.submit(&guess).await {
            Ok(result) => {
                self.input_buffer.clear();
                match result.outcome {
                    Outcome::Won => {
                        let celebration = match self.game.session().attempt_count() {
                            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
                            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
                            3 => "✨ SPLENDID! Three guesses! ✨",
                            4 => "👏 GREAT JOB! Four guesses! 👏",
                            5 => "🎉 NICE WORK! Five guesses! 🎉",
                            _ => "😅 PHEW! Got it in six! 😅",
                        };
                        self.add_message(celebration, MessageStyle::Success);
                        self.finish_game();
                    }
                    Outcome::Lost => {
                        self.add_message(
                            &format!("Game over! The word was {}.", self.game.session().answer()),
                            MessageStyle::Error,
                        );
                        self.finish_game();
                    }
                    Outcome::InProgress => {
                        self.add_message(
                            &format!("{} guesses left", result.attempts_remaining),
                            MessageStyle::Info,
                        );
                        self.input_mode = InputMode::Guessing;
                    }
                }
            }
            Err(SubmitError::Game(GameError::SessionAlreadyEnded)) => {
                self.finish_game();
            }
            Err(e) => {
                self.add_message(&e.user_message(), MessageStyle::Error);
                self.input_mode = InputMode::Guessing;
            }
        }
    }

    fn finish_game(&mut self) {
        self.input_mode = InputMode::GameOver;
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.game.new_game();
        self.input_buffer.clear();
        self.messages.clear();
        self.input_mode = InputMode::Guessing;
        self.add_message("New game started!", MessageStyle::Info);
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

    /// Apply a key press; returns `true` if a guess is ready to be validated
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return false;
        }

        match self.input_mode {
            InputMode::Checking => {}
            InputMode::GameOver => match key.code {
                KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n' | 'N') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.new_game();
                }
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => self.pop_char(),
                KeyCode::Enter => return self.begin_submit(),
                _ => {}
            },
        }
        false
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub async fn run_tui<V: WordValidator>(app: App<V>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

async fn run_app<B, V>(terminal: &mut Terminal<B>, mut app: App<V>) -> Result<()>
where
    B: ratatui::backend::Backend,
    V: WordValidator,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if app.handle_key(key) {
                // Show the checking state before the request goes out
                terminal.draw(|f| super::rendering::ui(f, &app))?;
                app.submit_guess().await;

                // Drop anything typed while the validator was running
                while event::poll(Duration::ZERO)? {
                    event::read()?;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{StaticWordSource, WordListValidator};
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    async fn app() -> App<WordListValidator> {
        let game = Game::start(
            StaticWordSource::new(words_from_slice(&["WATER"])),
            WordListValidator::new(words_from_slice(&["WATER", "THERE", "WHICH"])),
            StdRng::seed_from_u64(1),
        )
        .await
        .unwrap();
        App::new(game)
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_word<V: WordValidator>(app: &mut App<V>, word: &str) -> bool {
        word.chars().for_each(|c| {
            app.handle_key(key(KeyCode::Char(c)));
        });
        app.handle_key(key(KeyCode::Enter))
    }

    #[tokio::test]
    async fn typing_is_limited_to_five_letters() {
        let mut app = app().await;
        for c in "wat3erss".chars() {
            app.handle_key(key(KeyCode::Char(c)));
        }
        assert_eq!(app.input_buffer, "WATER");

        app.handle_key(key(KeyCode::Backspace));
        assert_eq!(app.input_buffer, "WATE");
    }

    #[tokio::test]
    async fn short_input_is_not_submitted() {
        let mut app = app().await;
        assert!(!type_word(&mut app, "wat"));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(
            app.messages.last().map(|m| m.style),
            Some(MessageStyle::Error)
        );
    }

    #[tokio::test]
    async fn unknown_word_keeps_input_and_attempts() {
        let mut app = app().await;
        assert!(type_word(&mut app, "xyzzy"));
        assert_eq!(app.input_mode, InputMode::Checking);

        app.submit_guess().await;

        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.input_buffer, "XYZZY");
        assert_eq!(app.game.session().attempt_count(), 0);
    }

    #[tokio::test]
    async fn keys_ignored_while_checking() {
        let mut app = app().await;
        assert!(type_word(&mut app, "there"));
        app.handle_key(key(KeyCode::Backspace));
        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.input_buffer, "THERE");
    }

    #[tokio::test]
    async fn win_then_new_game() {
        let mut app = app().await;
        assert!(type_word(&mut app, "there"));
        app.submit_guess().await;
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert!(app.input_buffer.is_empty());

        assert!(type_word(&mut app, "water"));
        app.submit_guess().await;
        assert_eq!(app.input_mode, InputMode::GameOver);
        assert_eq!(app.game.stats().games_won, 1);

        app.handle_key(key(KeyCode::Char('n')));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.game.session().attempt_count(), 0);
    }

    #[tokio::test]
    async fn escape_quits() {
        let mut app = app().await;
        app.handle_key(key(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn messages_are_capped() {
        let mut app = app().await;
        for i in 0..10 {
            app.add_message(&format!("message {i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[4].text, "message 9");
    }
}
