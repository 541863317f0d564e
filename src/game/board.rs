use crate::error::MoveError;

use super::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const WIN_LENGTH: usize = 4;

/// Axis directions as (row step, col step), in the order they are checked:
/// horizontal, vertical, diagonal "/", diagonal "\".
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (-1, 1), (1, 1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    One,
    Two,
}

impl Cell {
    /// The player occupying this cell, if any
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::One => Some(Player::One),
            Cell::Two => Some(Player::Two),
        }
    }
}

/// A cell coordinate. Row 0 is the top, row `ROWS - 1` the bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    /// Move `steps` times along (dr, dc), or None if that leaves the board
    fn step(self, dr: isize, dc: isize, steps: usize) -> Option<Position> {
        let steps = steps as isize;
        let row = self.row as isize + dr * steps;
        let col = self.col as isize + dc * steps;
        if (0..ROWS as isize).contains(&row) && (0..COLS as isize).contains(&col) {
            Some(Position::new(row as usize, col as usize))
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; ROWS * COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; ROWS * COLS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * COLS + col]
    }

    pub fn cell(&self, pos: Position) -> Cell {
        self.get(pos.row, pos.col)
    }

    /// Check if a column is full. Out-of-range columns count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Number of pieces stacked in a column
    pub fn column_height(&self, col: usize) -> usize {
        (0..ROWS)
            .filter(|&row| self.get(row, col) != Cell::Empty)
            .count()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn { column: col });
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull { column: col });
        }

        // Lowest empty row wins; row 0 is known to be empty here
        let row = (0..ROWS)
            .rev()
            .find(|&row| self.get(row, col) == Cell::Empty)
            .unwrap_or(0);
        self.cells[row * COLS + col] = cell;
        Ok(row)
    }

    /// Check if every cell on the board is occupied
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Cell::Empty)
    }

    /// Find a winning line through `pos` for pieces of kind `cell`.
    ///
    /// Each axis is scanned up to `WIN_LENGTH - 1` cells on either side of
    /// `pos`. The first axis whose run reaches `WIN_LENGTH` decides the
    /// result, and the reported cells are the first `WIN_LENGTH` cells of
    /// that run counted from its negative-direction end.
    pub fn find_win(&self, pos: Position, cell: Cell) -> Option<[Position; WIN_LENGTH]> {
        if cell == Cell::Empty {
            return None;
        }

        for (dr, dc) in AXES {
            let behind = self.count_run(pos, -dr, -dc, cell);
            let ahead = self.count_run(pos, dr, dc, cell);
            if behind + 1 + ahead < WIN_LENGTH {
                continue;
            }

            let start = pos.step(-dr, -dc, behind)?;
            let mut line = [start; WIN_LENGTH];
            for (k, slot) in line.iter_mut().enumerate() {
                *slot = start.step(dr, dc, k)?;
            }
            return Some(line);
        }

        None
    }

    /// Count matching cells walking away from `pos`, capped at `WIN_LENGTH - 1`
    fn count_run(&self, pos: Position, dr: isize, dc: isize, cell: Cell) -> usize {
        (1..WIN_LENGTH)
            .map_while(|k| pos.step(dr, dc, k))
            .take_while(|&p| self.cell(p) == cell)
            .count()
    }

    /// Build a board from text rows, top row first: '.' empty, '1' and '2' pieces.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; ROWS]) -> Self {
        let mut board = Board::new();
        for (row, line) in rows.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                board.cells[row * COLS + col] = match ch {
                    '1' => Cell::One,
                    '2' => Cell::Two,
                    _ => Cell::Empty,
                };
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(cells: [(usize, usize); WIN_LENGTH]) -> [Position; WIN_LENGTH] {
        cells.map(|(row, col)| Position::new(row, col))
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        // Drop first piece in column 3
        let row = board.drop_piece(3, Cell::One).unwrap();
        assert_eq!(row, 5); // Should land at bottom
        assert_eq!(board.get(5, 3), Cell::One);

        // Drop second piece in same column
        let row = board.drop_piece(3, Cell::Two).unwrap();
        assert_eq!(row, 4); // Should land on top of first piece
        assert_eq!(board.get(4, 3), Cell::Two);
        assert_eq!(board.column_height(3), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();

        for _ in 0..ROWS {
            board.drop_piece(0, Cell::One).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(
            board.drop_piece(0, Cell::Two),
            Err(MoveError::ColumnFull { column: 0 })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(
            board.drop_piece(7, Cell::One),
            Err(MoveError::InvalidColumn { column: 7 })
        );
        assert!(board.is_column_full(7));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.drop_piece(col, Cell::One).unwrap();
            }
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::new();
        for col in 0..4 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert_eq!(
            board.find_win(Position::new(5, 2), Cell::One),
            Some(line([(5, 0), (5, 1), (5, 2), (5, 3)]))
        );
    }

    #[test]
    fn test_vertical_win_in_column_three() {
        let mut board = Board::new();
        for _ in 0..4 {
            board.drop_piece(3, Cell::One).unwrap();
        }
        assert_eq!(
            board.find_win(Position::new(2, 3), Cell::One),
            Some(line([(2, 3), (3, 3), (4, 3), (5, 3)]))
        );
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::new();
        // Create diagonal / pattern
        board.drop_piece(0, Cell::One).unwrap();

        board.drop_piece(1, Cell::Two).unwrap();
        board.drop_piece(1, Cell::One).unwrap();

        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::Two).unwrap();
        board.drop_piece(2, Cell::One).unwrap();

        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        board.drop_piece(3, Cell::Two).unwrap();
        let row = board.drop_piece(3, Cell::One).unwrap();

        // Run starts at the bottom-left end
        assert_eq!(
            board.find_win(Position::new(row, 3), Cell::One),
            Some(line([(5, 0), (4, 1), (3, 2), (2, 3)]))
        );
    }

    #[test]
    fn test_diagonal_down_win() {
        let board = Board::from_rows([
            "2......",
            "12.....",
            "112....",
            "2122...",
            "1211...",
            "21221..",
        ]);
        assert_eq!(
            board.find_win(Position::new(3, 3), Cell::Two),
            Some(line([(0, 0), (1, 1), (2, 2), (3, 3)]))
        );
    }

    #[test]
    fn test_no_win_with_three() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_piece(col, Cell::One).unwrap();
        }
        assert_eq!(board.find_win(Position::new(5, 1), Cell::One), None);
    }

    #[test]
    fn test_empty_cell_never_wins() {
        let board = Board::new();
        assert_eq!(board.find_win(Position::new(5, 0), Cell::Empty), None);
    }

    #[test]
    fn test_long_run_reports_first_four_from_left() {
        let board = Board::from_rows([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "1111111",
        ]);
        // Walks are capped at three cells per side
        assert_eq!(
            board.find_win(Position::new(5, 6), Cell::One),
            Some(line([(5, 3), (5, 4), (5, 5), (5, 6)]))
        );
        assert_eq!(
            board.find_win(Position::new(5, 3), Cell::One),
            Some(line([(5, 0), (5, 1), (5, 2), (5, 3)]))
        );
    }

    #[test]
    fn test_horizontal_checked_before_vertical() {
        let board = Board::from_rows([
            ".......",
            ".......",
            "...1...",
            "...1...",
            "...1...",
            "1111...",
        ]);
        assert_eq!(
            board.find_win(Position::new(5, 3), Cell::One),
            Some(line([(5, 0), (5, 1), (5, 2), (5, 3)]))
        );
    }

    #[test]
    fn test_anti_diagonal_checked_before_main_diagonal() {
        // (3,3) completes both a "/" and a "\" line
        let board = Board::from_rows([
            "1.....1",
            ".1...1.",
            "..1.1..",
            "...1...",
            "..2.2..",
            ".2...2.",
        ]);
        assert_eq!(
            board.find_win(Position::new(3, 3), Cell::One),
            Some(line([(3, 3), (2, 4), (1, 5), (0, 6)]))
        );
    }

    #[test]
    fn test_cell_owner() {
        assert_eq!(Cell::Empty.owner(), None);
        assert_eq!(Cell::One.owner(), Some(Player::One));
        assert_eq!(Cell::Two.owner(), Some(Player::Two));
    }
}
