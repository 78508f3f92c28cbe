use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::game::{player_name, GameOutcome, GameState};

use super::board_view;

/// Draw the whole game screen. Returns the area the board was laid out in.
pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Board
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, chunks[0]);

    let highlight = match game_state.outcome() {
        Some(GameOutcome::Winner(player)) => game_state.board().winning_line(player),
        _ => None,
    };
    board_view::render_board(
        frame,
        game_state.board(),
        selected_column,
        highlight,
        chunks[1],
    );

    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);

    chunks[1]
}

fn render_header(frame: &mut Frame, game_state: &GameState, area: Rect) {
    let player = game_state.active_player();
    let (status, color) = match game_state.outcome() {
        Some(GameOutcome::Winner(winner)) => (
            format!("{} wins!", player_name(winner)),
            board_view::player_color(winner),
        ),
        Some(GameOutcome::Tie) => ("Tie game!".to_string(), Color::Blue),
        None => (
            format!(
                "{}'s turn  |  Move {}",
                player_name(player),
                game_state.turns().move_count() + 1
            ),
            board_view::player_color(player),
        ),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Connect Four"),
        );

    frame.render_widget(header, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let line = Line::from("←/→: Move  |  Enter/1-9/Click: Drop  |  R: Restart  |  Q: Quit");

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Controls"),
        );

    frame.render_widget(controls, area);
}
