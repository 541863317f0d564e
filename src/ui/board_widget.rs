use crate::game::{GameState, Player, Position, COLS, ROWS};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub fn player_color(player: Player) -> Color {
    match player {
        Player::One => Color::Red,
        Player::Two => Color::Yellow,
    }
}

/// Board lines with column numbers, frame, and a cursor marker under
/// `selected_column`. Winning cells are drawn as diamonds; `cue` marks the
/// most recent drop.
pub fn board_lines(
    state: &GameState,
    selected_column: usize,
    cue: Option<Position>,
) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(ROWS + 4);

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..COLS {
        let label = format!(" {} ", col + 1);
        if col == selected_column && !state.is_game_over() {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else if state.board().is_column_full(col) {
            col_line.push(Span::styled(label, Style::default().fg(Color::DarkGray)));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from(format!("  ╔{}╗", "═".repeat(COLS * 3 + 1))));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];
        for col in 0..COLS {
            let pos = Position::new(row, col);
            row_spans.push(cell_span(state, pos, cue == Some(pos)));
        }
        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{}╝", "═".repeat(COLS * 3 + 1))));

    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        if col == selected_column && !state.is_game_over() {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    lines
}

fn cell_span(state: &GameState, pos: Position, cued: bool) -> Span<'static> {
    let Some(player) = state.board().cell(pos).owner() else {
        return Span::styled(" . ", Style::default().fg(Color::DarkGray));
    };

    let mut style = Style::default().fg(player_color(player));
    if state.is_winning_cell(pos) {
        return Span::styled(" ◆ ", style.add_modifier(Modifier::BOLD));
    }
    if cued {
        style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
    }
    Span::styled(" ● ", style)
}
