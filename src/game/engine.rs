use tracing::{debug, info};

use crate::error::MoveError;

use super::{Board, DropOutcome, GameOutcome, GameState, Player, Position};

/// Owns one game session and is the only way to change it.
///
/// Rejected drops leave the state exactly as it was, so callers may treat
/// an `Err` as a no-op. The engine has no internal locking; wrap it in a
/// mutex if several threads need to drive the same game.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    pub fn new() -> Self {
        GameEngine {
            state: GameState::initial(),
        }
    }

    /// Drop the current player's piece into `column`.
    pub fn drop_piece(&mut self, column: usize) -> Result<DropOutcome, MoveError> {
        let result = self.state.apply_move_mut(column);
        match &result {
            Ok(drop) => {
                debug!(
                    player = drop.player.id(),
                    row = drop.position.row,
                    col = drop.position.col,
                    "piece dropped"
                );
                match drop.outcome {
                    Some(GameOutcome::Winner(player)) => {
                        info!(winner = player.id(), cells = ?self.state.winning_cells(), "game won")
                    }
                    Some(GameOutcome::Draw) => info!("game drawn"),
                    None => {}
                }
            }
            Err(err) => debug!(column, %err, "drop rejected"),
        }
        result
    }

    /// Drop that reports only whether a piece was placed.
    pub fn try_drop(&mut self, column: usize) -> bool {
        self.drop_piece(column).is_ok()
    }

    /// Discard the current game and start a fresh one.
    pub fn reset(&mut self) {
        self.state = GameState::initial();
        info!("new game started");
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn board(&self) -> &Board {
        self.state.board()
    }

    pub fn current_player(&self) -> Player {
        self.state.current_player()
    }

    pub fn winner(&self) -> Option<Player> {
        self.state.winner()
    }

    pub fn winning_cells(&self) -> &[Position] {
        self.state.winning_cells()
    }

    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.state.is_winning_cell(pos)
    }

    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.state.outcome()
    }

    /// Columns that currently accept a piece; empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        self.state.legal_columns()
    }
}
