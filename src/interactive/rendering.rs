//! TUI rendering with ratatui
//!
//! Board, keyboard and status panels for the game.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{LetterHints, LetterStatus, WORD_LENGTH};
use crate::game::{MAX_ATTEMPTS, Outcome};
use crate::services::WordValidator;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Main UI rendering function
pub fn ui<V: WordValidator>(f: &mut Frame, app: &App<V>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header
            Constraint::Min(16),    // Main content
            Constraint::Length(3),  // Input area
            Constraint::Length(1),  // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(45), // Board
            Constraint::Percentage(55), // Side panel
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_side_panel(f, app, main_chunks[1]);

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("🟩 WORD GAME 🟨")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Colours used for a letter in a given state
const fn status_style(status: Option<LetterStatus>) -> Style {
    let (fg, bg) = match status {
        Some(LetterStatus::Correct) => (Color::Black, Color::Green),
        Some(LetterStatus::Present) => (Color::Black, Color::Yellow),
        Some(LetterStatus::Absent) => (Color::White, Color::DarkGray),
        None => (Color::White, Color::Reset),
    };
    Style::new().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
}

fn tile(letter: char, status: Option<LetterStatus>) -> Span<'static> {
    Span::styled(format!(" {letter} "), status_style(status))
}

fn render_board<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let session = app.game.session();
    let history = session.history();
    let mut lines = Vec::with_capacity(MAX_ATTEMPTS * 2);

    for row in 0..MAX_ATTEMPTS {
        let mut spans = vec![Span::raw("  ")];

        if let Some(record) = history.get(row) {
            for (&letter, status) in record.guess.chars().iter().zip(record.classification.iter()) {
                spans.push(tile(char::from(letter), Some(status)));
                spans.push(Span::raw(" "));
            }
        } else if row == history.len() && !session.is_over() {
            // Row being typed
            let typed: Vec<char> = app.input_buffer.chars().collect();
            for i in 0..WORD_LENGTH {
                let letter = typed.get(i).copied().unwrap_or('_');
                spans.push(tile(letter, None));
                spans.push(Span::raw(" "));
            }
        } else {
            for _ in 0..WORD_LENGTH {
                spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
                spans.push(Span::raw(" "));
            }
        }

        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }

    let board = Paragraph::new(lines).block(
        Block::default()
            .title(" Board ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(board, area);
}

fn render_side_panel<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Used letters
            Constraint::Length(5), // Keyboard
            Constraint::Length(3), // Attempts gauge
            Constraint::Min(5),    // Messages
            Constraint::Length(4), // Statistics
        ])
        .split(area);

    render_used_letters(f, app, chunks[0]);
    render_keyboard(f, &app.game.hints(), chunks[1]);
    render_attempts(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_statistics(f, app, chunks[4]);
}

fn render_used_letters<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let letters: String = app
        .game
        .session()
        .used_letters()
        .sorted_letters()
        .iter()
        .map(|c| format!("{c} "))
        .collect();

    let paragraph = Paragraph::new(letters.trim_end().to_string())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(" Used Letters ")
                .borders(Borders::ALL),
        );
    f.render_widget(paragraph, area);
}

fn render_keyboard(f: &mut Frame, hints: &LetterHints, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .enumerate()
        .map(|(i, row)| {
            let mut spans = vec![Span::raw(" ".repeat(i))];
            for letter in row.chars() {
                spans.push(tile(letter, hints.status(letter)));
            }
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines).block(
        Block::default()
            .title(" Keyboard ")
            .borders(Borders::ALL),
    );
    f.render_widget(keyboard, area);
}

fn render_attempts<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let used = app.game.session().attempt_count();
    let percent = (used * 100 / MAX_ATTEMPTS) as u16;

    let color = match app.game.session().outcome() {
        Outcome::Won => Color::Green,
        Outcome::Lost => Color::Red,
        Outcome::InProgress => Color::Cyan,
    };

    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(" Guesses ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(color))
        .percent(percent)
        .label(format!("{used}/{MAX_ATTEMPTS} guesses used"));

    f.render_widget(gauge, area);
}

fn render_messages<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_statistics<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let stats = app.game.stats();
    let content = vec![
        Line::from(format!(
            "Games: {} | Win Rate: {:.0}%",
            stats.total_games,
            stats.win_rate()
        )),
        Line::from(format!(
            "Streak: {} | Best: {}",
            stats.current_streak, stats.best_streak
        )),
    ];

    let paragraph = Paragraph::new(content)
        .block(Block::default().title(" Statistics ").borders(Borders::ALL));
    f.render_widget(paragraph, area);
}

fn render_input<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let (title, content, color) = match app.input_mode {
        InputMode::GameOver => (
            " Game over | Press 'n' for new game or 'q' to quit ",
            "",
            Color::Green,
        ),
        InputMode::Checking => (
            " Checking word... ",
            app.input_buffer.as_str(),
            Color::DarkGray,
        ),
        InputMode::Guessing => (
            " Enter your guess (5 letters) | Enter to submit ",
            app.input_buffer.as_str(),
            Color::Yellow,
        ),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status<V: WordValidator>(f: &mut Frame, app: &App<V>, area: Rect) {
    let help_text = match app.input_mode {
        InputMode::GameOver => "q: Quit | n: New Game",
        _ => "Esc: Quit | Ctrl-N: New Game | Enter: Submit | Backspace: Delete",
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, area);
}
