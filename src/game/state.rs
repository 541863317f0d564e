use crate::error::MoveError;

use super::board::{Position, COLS, WIN_LENGTH};
use super::{Board, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What a successful drop did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropOutcome {
    pub player: Player,
    pub position: Position,
    /// Set when this drop ended the game
    pub outcome: Option<GameOutcome>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
    winning_cells: Option<[Position; WIN_LENGTH]>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::One, // Player 1 starts
            outcome: None,
            winning_cells: None,
        }
    }

    /// Player whose turn is next. Frozen once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    pub fn winner(&self) -> Option<Player> {
        match self.outcome {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        }
    }

    /// The four cells of the winning line, or an empty slice
    pub fn winning_cells(&self) -> &[Position] {
        match &self.winning_cells {
            Some(cells) => cells,
            None => &[],
        }
    }

    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_cells().contains(&pos)
    }

    /// Check if game is over
    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_game_over() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place. On error the state is left untouched.
    pub fn apply_move_mut(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        if self.is_game_over() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player.to_cell())?;
        let position = Position::new(row, column);

        if let Some(line) = self.board.find_win(position, player.to_cell()) {
            self.outcome = Some(GameOutcome::Winner(player));
            self.winning_cells = Some(line);
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        } else {
            self.current_player = player.other();
        }

        Ok(DropOutcome {
            player,
            position,
            outcome: self.outcome,
        })
    }

    /// Position a test game mid-play with `to_move` next.
    #[cfg(test)]
    pub(crate) fn from_board(board: Board, to_move: Player) -> Self {
        GameState {
            board,
            current_player: to_move,
            outcome: None,
            winning_cells: None,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
