use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::game::{Board, PlayerId, NO_OWNER, PLAYER_ONE, PLAYER_TWO, WIN_LENGTH};

/// Characters per board column (" ● ")
const CELL_WIDTH: u16 = 3;

/// Lines drawn besides the cell rows: column numbers, two borders, indicator
const FRAME_LINES: u16 = 4;

pub fn player_color(player: PlayerId) -> Color {
    match player {
        PLAYER_ONE => Color::Red,
        PLAYER_TWO => Color::Yellow,
        _ => Color::Magenta,
    }
}

fn to_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Width and height in terminal cells needed to draw `board`.
pub fn board_size(board: &Board) -> (u16, u16) {
    let width = to_u16(board.width())
        .saturating_mul(CELL_WIDTH)
        .saturating_add(2);
    let height = to_u16(board.height()).saturating_add(FRAME_LINES);
    (width, height)
}

/// The rectangle the board occupies when centered in `area`.
pub fn board_rect(board: &Board, area: Rect) -> Rect {
    let (width, height) = board_size(board);
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Map a pointer position to the board column under it. `rect` is the board's
/// on-screen rectangle as returned by [`board_rect`].
pub fn column_at(board: &Board, rect: Rect, x: u16, y: u16) -> Option<usize> {
    if y < rect.y || y >= rect.y.saturating_add(rect.height) {
        return None;
    }
    // Skip the left border
    let offset = x.checked_sub(rect.x.saturating_add(1))?;
    let column = usize::from(offset / CELL_WIDTH);
    (column < board.width()).then_some(column)
}

/// Render the board with a column selector. Cells in `highlight` are drawn
/// reversed.
pub fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    highlight: Option<[(usize, usize); WIN_LENGTH]>,
    area: Rect,
) {
    let mut lines = Vec::new();

    // Column numbers, 1-based
    let mut col_line = vec![Span::raw(" ")];
    for column in 0..board.width() {
        let label = format!("{:^3}", column + 1);
        if column == selected_column {
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
    lines.push(Line::from(col_line));

    let rule = "═".repeat(board.width() * usize::from(CELL_WIDTH));
    lines.push(Line::from(format!("╔{rule}╗")));

    // Top row first
    for row in (0..board.height()).rev() {
        let mut row_spans = vec![Span::raw("║")];
        for column in 0..board.width() {
            let owner = board.cell(column, row).map_or(NO_OWNER, |cell| cell.owner());
            let span = if owner == NO_OWNER {
                Span::styled(" . ", Style::default().fg(Color::DarkGray))
            } else {
                let mut style = Style::default().fg(player_color(owner));
                if highlight.is_some_and(|line| line.contains(&(column, row))) {
                    style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
                }
                Span::styled(" ● ", style)
            };
            row_spans.push(span);
        }
        row_spans.push(Span::raw("║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("╚{rule}╝")));

    let mut indicator_line = vec![Span::raw(" ")];
    for column in 0..board.width() {
        if column == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    lines.push(Line::from(indicator_line));

    frame.render_widget(Paragraph::new(lines), board_rect(board, area));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_size() {
        let board = Board::new();
        assert_eq!(board_size(&board), (23, 10));
    }

    #[test]
    fn test_board_rect_is_centered() {
        let board = Board::new();
        let rect = board_rect(&board, Rect::new(0, 0, 43, 20));
        assert_eq!(rect, Rect::new(10, 5, 23, 10));
    }

    #[test]
    fn test_board_rect_clamps_to_area() {
        let board = Board::new();
        let rect = board_rect(&board, Rect::new(2, 3, 10, 4));
        assert_eq!(rect, Rect::new(2, 3, 10, 4));
    }

    #[test]
    fn test_column_at() {
        let board = Board::new();
        let rect = Rect::new(10, 5, 23, 10);

        // Left border
        assert_eq!(column_at(&board, rect, 10, 6), None);
        assert_eq!(column_at(&board, rect, 11, 6), Some(0));
        assert_eq!(column_at(&board, rect, 13, 6), Some(0));
        assert_eq!(column_at(&board, rect, 14, 6), Some(1));
        assert_eq!(column_at(&board, rect, 31, 6), Some(6));
        // Right border
        assert_eq!(column_at(&board, rect, 32, 6), None);
        assert_eq!(column_at(&board, rect, 0, 6), None);
    }

    #[test]
    fn test_column_at_ignores_rows_outside_board() {
        let board = Board::new();
        let rect = Rect::new(10, 5, 23, 10);
        assert_eq!(column_at(&board, rect, 14, 4), None);
        assert_eq!(column_at(&board, rect, 14, 15), None);
        assert_eq!(column_at(&board, rect, 14, 14), Some(1));
    }

    #[test]
    fn test_player_color() {
        assert_eq!(player_color(PLAYER_ONE), Color::Red);
        assert_eq!(player_color(PLAYER_TWO), Color::Yellow);
    }
}
