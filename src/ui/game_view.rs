use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::board_widget;
use super::input::KeyMap;
use super::palette::Palette;
use crate::game::{GameState, SIZE};

pub fn render(
    frame: &mut Frame,
    state: &GameState,
    palette: Option<&Palette>,
    keys: &KeyMap,
    message: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                  // Header
            Constraint::Min((SIZE * 2 + 1) as u16), // Board
            Constraint::Length(3),                  // Message
            Constraint::Length(3),                  // Controls
        ])
        .split(frame.area());

    render_header(frame, state, chunks[0]);
    render_board(frame, state, palette, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, keys, chunks[3]);
}

fn render_header(frame: &mut Frame, state: &GameState, area: Rect) {
    let best = state
        .board()
        .highest_tile()
        .map_or(0, |tile| tile.value());
    let status = format!("Score: {}  |  Best tile: {}", state.score(), best);

    let header = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("2048"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, state: &GameState, palette: Option<&Palette>, area: Rect) {
    let lines = board_widget::board_lines(state.board(), palette);
    let board = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(board, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let msg_widget = Paragraph::new(message.unwrap_or(""))
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, keys: &KeyMap, area: Rect) {
    let line = Line::from(format!(
        "{}/{}/{}/{} or arrows: Move  |  Q: Quit",
        keys.up, keys.left, keys.down, keys.right
    ));

    let controls = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
