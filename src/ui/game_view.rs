use super::board_widget::{board_lines, cell_style};
use crate::game::{Marker, Match, RoundStatus};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(frame: &mut Frame, game: &Match, cursor: usize, message: Option<&str>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(7),    // Board
            Constraint::Length(4), // Scores
            Constraint::Length(3), // Message
            Constraint::Length(3), // Controls
        ])
        .split(frame.area());

    render_header(frame, game, chunks[0]);
    render_board(frame, game, cursor, chunks[1]);
    render_scores(frame, game, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn marker_color(marker: Marker) -> Color {
    match marker {
        Marker::X => Color::Red,
        Marker::O => Color::Blue,
    }
}

fn render_header(frame: &mut Frame, game: &Match, area: Rect) {
    let (status, color) = match game.status() {
        RoundStatus::InProgress => {
            let player = game.current_player();
            (
                format!(
                    "Round {}  |  {}'s turn ({})",
                    game.round(),
                    player.name(),
                    player.marker()
                ),
                marker_color(player.marker()),
            )
        }
        RoundStatus::Won(marker) => (
            format!("Round {}  |  {} wins!", game.round(), game.player(marker).name()),
            marker_color(marker),
        ),
        RoundStatus::Draw => (format!("Round {}  |  Draw", game.round()), Color::Yellow),
    };

    let header = Paragraph::new(status)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, game: &Match, cursor: usize, area: Rect) {
    let (cursor, highlight) = match game.status() {
        RoundStatus::InProgress => (Some(cursor), None),
        RoundStatus::Won(marker) => (None, game.board().winning_line(marker)),
        RoundStatus::Draw => (None, None),
    };

    let board_widget =
        Paragraph::new(board_lines(game.board(), cursor, highlight)).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_scores(frame: &mut Frame, game: &Match, area: Rect) {
    let lines: Vec<Line> = game
        .players()
        .iter()
        .map(|player| {
            let marker = player.marker();
            Line::from(vec![
                Span::styled(format!("{} ", marker), cell_style(marker.to_cell())),
                Span::raw(format!("{:<24}", player.name())),
                Span::styled(
                    game.score(marker).to_string(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
            ])
        })
        .collect();

    let scores = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Score"));

    frame.render_widget(scores, area);
}

fn render_message(frame: &mut Frame, message: Option<&str>, area: Rect) {
    let text = message.unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let controls = Paragraph::new(Line::from(
        "Arrows: Move  |  Enter/1-9: Place  |  N: Next round  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
