use crate::game::{Board, Cell};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

/// Color and glyph for one cell
fn cell_span(cell: Cell) -> Span<'static> {
    let (symbol, color) = match cell {
        Cell::Empty => (" . ", Color::DarkGray),
        Cell::One => (" \u{25cf} ", Color::Red),
        Cell::Two => (" \u{25cf} ", Color::Yellow),
    };
    Span::styled(symbol, Style::default().fg(color))
}

/// Board lines with column numbers on top, a frame, and a selection marker
/// under `selected_column` (0-indexed).
pub fn board_lines(board: &Board, selected_column: usize) -> Vec<Line<'static>> {
    let size = board.size();
    let mut lines = Vec::with_capacity(size + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..size {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * size + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    for row in board.rows() {
        let mut row_spans = vec![Span::raw("  ║")];
        row_spans.extend(row.iter().map(|&cell| cell_span(cell)));
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..size {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_line_count() {
        let lines = board_lines(&Board::new(4), 0);
        // header, top frame, 4 rows, bottom frame, indicator
        assert_eq!(lines.len(), 8);
    }

    #[test]
    fn test_rows_show_tokens() {
        let mut board = Board::new(3);
        board.drop_piece(2, Cell::One).unwrap();
        let lines = board_lines(&board, 2);

        assert_eq!(text(&lines[0]), "    1  2  3   ");
        assert_eq!(text(&lines[4]), "  ║ .  .  ●  ║");
        assert_eq!(text(&lines[6]), format!("{}▲{}", " ".repeat(10), " ".repeat(3)));
    }
}
