use super::board::{Board, DropError, Line, MAX_SIZE};
use super::Player;
use crate::error::GameError;

/// Result of an accepted placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PutOutcome {
    Ok,
    Win,
    Draw,
}

/// Reasons a placement is rejected. The engine state is untouched in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("game is over")]
    GameOver,
    #[error("column out of range")]
    InvalidColumn,
    #[error("column is full")]
    ColumnFull,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: Line },
    Draw,
}

/// One Drop Token game on a square board.
///
/// Player one moves first. Once a full row, column or diagonal belongs to a
/// single player the game is won and every later placement is rejected.
#[derive(Debug, Clone)]
pub struct GameEngine {
    board: Board,
    history: Vec<usize>,
    current_player: Player,
    status: GameStatus,
}

impl GameEngine {
    /// Create a game on an empty `size` x `size` board
    pub fn new(size: usize) -> Result<Self, GameError> {
        if size == 0 || size > MAX_SIZE {
            return Err(GameError::InvalidSize {
                size,
                max: MAX_SIZE,
            });
        }

        Ok(GameEngine {
            board: Board::new(size),
            history: Vec::new(),
            current_player: Player::One,
            status: GameStatus::InProgress,
        })
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// True once the game has been won or drawn
    pub fn is_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Columns played so far (1-indexed), in play order.
    ///
    /// Clone the iterator to walk the history again.
    pub fn moves(
        &self,
    ) -> impl DoubleEndedIterator<Item = usize> + ExactSizeIterator + Clone + '_ {
        self.history.iter().copied()
    }

    /// Number of accepted placements
    pub fn move_count(&self) -> usize {
        self.history.len()
    }

    /// Independent copy of the current grid
    pub fn board(&self) -> Board {
        self.board.clone()
    }

    /// Drop the current player's token into a 1-indexed column
    pub fn put(&mut self, column: usize) -> Result<PutOutcome, MoveError> {
        if matches!(self.status, GameStatus::Won { .. }) {
            return Err(MoveError::GameOver);
        }
        if column == 0 || column > self.board.size() {
            return Err(MoveError::InvalidColumn);
        }

        let mover = self.current_player;
        self.board
            .drop_piece(column - 1, mover.to_cell())
            .map_err(|e| match e {
                DropError::ColumnFull => MoveError::ColumnFull,
                DropError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        self.history.push(column);
        self.current_player = mover.other();

        // Whole-board scan; any line found was completed by this move
        if let Some((line, player)) = self.board.winning_line() {
            self.status = GameStatus::Won { player, line };
            Ok(PutOutcome::Win)
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            Ok(PutOutcome::Draw)
        } else {
            Ok(PutOutcome::Ok)
        }
    }
}
