use crate::game::{Board, Cell, SIZE};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Colour used for a marker cell
pub fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default().fg(Color::DarkGray),
        Cell::X => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Cell::O => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    }
}

/// Lines for a 3x3 grid. Empty cells show their key (1-9). The cursor cell is
/// drawn reversed and cells of `highlight` are drawn on green.
pub fn board_lines(
    board: &Board,
    cursor: Option<usize>,
    highlight: Option<[usize; 3]>,
) -> Vec<Line<'static>> {
    let separator = "───┼───┼───";
    let mut lines = Vec::new();

    for row in 0..SIZE {
        if row > 0 {
            lines.push(Line::from(Span::styled(
                separator,
                Style::default().fg(Color::DarkGray),
            )));
        }

        let mut spans = Vec::new();
        for col in 0..SIZE {
            let index = row * SIZE + col;
            if col > 0 {
                spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
            }

            let cell = board.get(index).unwrap_or_default();
            let symbol = match cell {
                Cell::Empty => format!(" {} ", index + 1),
                Cell::X => " X ".to_string(),
                Cell::O => " O ".to_string(),
            };

            let mut style = cell_style(cell);
            if highlight.is_some_and(|line| line.contains(&index)) {
                style = style.bg(Color::Green).fg(Color::Black);
            }
            if cursor == Some(index) {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled(symbol, style));
        }
        lines.push(Line::from(spans));
    }

    lines
}
