//! TUI rendering with ratatui

use super::app::{App, MessageStyle, Overlay};
use crate::core::{KeyboardStatus, MAX_ATTEMPTS, TileStatus};
use crate::game::{RoundState, RoundStatus, Statistics};
use crate::output::display::KEYBOARD_ROWS;
use crate::output::formatters::create_progress_bar;
use crate::wordlists::SUPPORTED_LENGTHS;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                       // Header
            Constraint::Length(MAX_ATTEMPTS as u16 + 2), // Board
            Constraint::Length(5),                       // Keyboard
            Constraint::Min(3),                          // Messages
            Constraint::Length(1),                       // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);
    render_board(f, app, chunks[1]);
    render_keyboard(f, &app.session.keyboard_status(), chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    let area = f.area();
    match app.overlay {
        Overlay::Stats => render_stats(f, app.session.statistics(), area),
        Overlay::Help => render_help(f, area),
        Overlay::None => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.active_flash() {
        Some(flash) => (flash.text().to_string(), Color::Red),
        None => (
            format!("WORDLE · {} letters", app.session.active_length()),
            Color::Cyan,
        ),
    };
    let header = Paragraph::new(text)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(color)),
        );
    f.render_widget(header, area);
}

/// Background colour of a tile
fn tile_color(status: TileStatus) -> Color {
    match status {
        TileStatus::Correct => Color::Green,
        TileStatus::Present => Color::Yellow,
        TileStatus::Absent => Color::DarkGray,
        TileStatus::Filled => Color::Gray,
        TileStatus::Empty => Color::Black,
    }
}

/// Letters shown on row `row`: a guess, the input being typed, or nothing
fn row_letters(round: &RoundState, row: usize) -> Vec<char> {
    let mut letters: Vec<char> = match round.guesses().get(row) {
        Some(guess) => guess.word().chars().collect(),
        None if row == round.guesses().len() => round.current_input().chars().collect(),
        None => Vec::new(),
    };
    letters.resize(round.word_length(), ' ');
    letters
}

fn board_lines(round: &RoundState) -> Vec<Line<'static>> {
    (0..MAX_ATTEMPTS)
        .map(|row| {
            let spans: Vec<Span> = row_letters(round, row)
                .into_iter()
                .zip(round.row_statuses(row))
                .map(|(letter, status)| {
                    let style = match status {
                        TileStatus::Empty => Style::default().fg(Color::DarkGray),
                        TileStatus::Filled => Style::default()
                            .fg(Color::White)
                            .add_modifier(Modifier::BOLD),
                        _ => Style::default()
                            .fg(Color::Black)
                            .bg(tile_color(status))
                            .add_modifier(Modifier::BOLD),
                    };
                    let text = if status == TileStatus::Empty {
                        " · ".to_string()
                    } else {
                        format!(" {letter} ")
                    };
                    Span::styled(text, style)
                })
                .collect();
            Line::from(spans)
        })
        .collect()
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let round = app.session.active();
    let title = if app.session.is_validating() {
        " Checking... "
    } else {
        match round.status() {
            RoundStatus::Playing => " Board ",
            RoundStatus::Won => " Solved! ",
            RoundStatus::Lost => " Out of guesses ",
        }
    };

    let board = Paragraph::new(board_lines(round))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
    f.render_widget(board, area);
}

fn render_keyboard(f: &mut Frame, keys: &KeyboardStatus, area: Rect) {
    let lines: Vec<Line> = KEYBOARD_ROWS
        .iter()
        .map(|row| {
            let spans: Vec<Span> = row
                .chars()
                .map(|c| {
                    let style = match keys.get(c) {
                        Some(status) => Style::default()
                            .fg(Color::Black)
                            .bg(tile_color(status))
                            .add_modifier(Modifier::BOLD),
                        None => Style::default().fg(Color::White),
                    };
                    Span::styled(format!(" {c} "), style)
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let keyboard = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(" Keyboard "));
    f.render_widget(keyboard, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
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

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let lengths: Vec<Span> = SUPPORTED_LENGTHS
        .iter()
        .map(|&n| {
            let style = if n == app.session.active_length() {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            Span::styled(format!(" F{n}:{n} "), style)
        })
        .collect();

    let mut spans = lengths;
    spans.push(Span::styled(
        "| Enter: Submit | Ctrl-N: New | Ctrl-S: Stats | F1: Help | Esc: Quit",
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

/// Rectangle of `width` x `height` centered in `area`
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn stats_lines(stats: &Statistics) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(format!(
            "Played {}   Win % {}   Streak {}   Max {}",
            stats.played,
            stats.win_percentage(),
            stats.current_streak,
            stats.max_streak
        )),
        Line::from(""),
        Line::from("Guess distribution"),
    ];
    let max = stats.distribution.iter().copied().max().unwrap_or(0).max(1);
    for (i, &count) in stats.distribution.iter().enumerate() {
        let bar = create_progress_bar(f64::from(count), f64::from(max), 24);
        lines.push(Line::from(vec![
            Span::raw(format!("{} ", i + 1)),
            Span::styled(bar, Style::default().fg(Color::Green)),
            Span::raw(format!(" {count}")),
        ]));
    }
    lines
}

fn render_stats(f: &mut Frame, stats: &Statistics, area: Rect) {
    let popup = centered(area, 46, MAX_ATTEMPTS as u16 + 6);
    let panel = Paragraph::new(stats_lines(stats)).block(
        Block::default()
            .title(" Statistics (Ctrl-S to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}

fn render_help(f: &mut Frame, area: Rect) {
    let text = vec![
        Line::from("Guess the hidden word in 6 tries."),
        Line::from(""),
        Line::from(vec![
            Span::styled(" A ", Style::default().fg(Color::Black).bg(Color::Green)),
            Span::raw(" right letter, right spot"),
        ]),
        Line::from(vec![
            Span::styled(" B ", Style::default().fg(Color::Black).bg(Color::Yellow)),
            Span::raw(" in the word, wrong spot"),
        ]),
        Line::from(vec![
            Span::styled(" C ", Style::default().fg(Color::Black).bg(Color::DarkGray)),
            Span::raw(" not in the word"),
        ]),
        Line::from(""),
        Line::from("Tab / F5 F6 F7   switch word length"),
        Line::from("Ctrl-N           new random word"),
        Line::from("Ctrl-S           statistics"),
        Line::from("Esc / Ctrl-C     quit"),
    ];
    let popup = centered(area, 44, 14);
    let panel = Paragraph::new(text).block(
        Block::default()
            .title(" Help (F1 to close) ")
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Cyan)),
    );
    f.render_widget(Clear, popup);
    f.render_widget(panel, popup);
}
