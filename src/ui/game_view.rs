use crate::game::{GameEngine, GameStatus, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget::board_lines;

pub fn render(
    frame: &mut Frame,
    engine: &GameEngine,
    selected_column: usize,
    message: Option<&str>,
) {
    let board_height = engine.size() as u16 + 4;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),         // Header
            Constraint::Min(board_height), // Board + history
            Constraint::Length(3),         // Message
            Constraint::Length(3),         // Controls
        ])
        .split(frame.area());

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(14)])
        .split(chunks[1]);

    render_header(frame, engine, chunks[0]);
    render_board(frame, engine, selected_column, middle[0]);
    render_history(frame, engine, middle[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    let (status, color) = match engine.status() {
        GameStatus::InProgress => {
            let player = engine.current_player();
            (format!("Current Player: {}", player.name()), player_color(player))
        }
        GameStatus::Won { player, .. } => (
            format!("Game Over  |  {} wins", player.name()),
            player_color(player),
        ),
        GameStatus::Draw => ("Game Over  |  Draw".to_string(), Color::White),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Drop Token"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, engine: &GameEngine, selected_column: usize, area: Rect) {
    let board = engine.board();
    let board_widget =
        Paragraph::new(board_lines(&board, selected_column)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_history(frame: &mut Frame, engine: &GameEngine, area: Rect) {
    // Most recent moves first so they survive truncation
    let lines: Vec<Line> = engine
        .moves()
        .enumerate()
        .rev()
        .map(|(i, column)| Line::from(format!("{:>3}. col {}", i + 1, column)))
        .collect();

    let history = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Moves"));
    frame.render_widget(history, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new("←/→: Move  |  Enter: Drop  |  R: Restart  |  Q: Quit")
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
