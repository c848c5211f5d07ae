use tracing::{debug, info};

use super::{Board, Cell, Player};
use crate::error::GameError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameOutcome {
    #[default]
    InProgress,
    Winner(Player),
    Tie,
}

impl GameOutcome {
    /// Win or tie
    pub fn is_terminal(self) -> bool {
        self != GameOutcome::InProgress
    }

    pub fn winner(self) -> Option<Player> {
        match self {
            GameOutcome::Winner(player) => Some(player),
            _ => None,
        }
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub row: usize,
    pub column: usize,
    /// Player who made the move
    pub player: Player,
    /// Outcome after the move
    pub outcome: GameOutcome,
}

/// Grid, turn order and outcome of a single game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
}

impl GameState {
    /// Create a game on an empty `width` x `height` board. Player one moves first.
    pub fn new(width: usize, height: usize) -> Result<Self, GameError> {
        Ok(GameState {
            board: Board::new(width, height)?,
            current_player: Player::One,
            outcome: GameOutcome::InProgress,
        })
    }

    /// Create the standard 7x6 game
    pub fn initial() -> Self {
        GameState {
            board: Board::default(),
            current_player: Player::One,
            outcome: GameOutcome::InProgress,
        }
    }

    /// Start over on a board of the given size. On error the current game is kept.
    pub fn initialize(&mut self, width: usize, height: usize) -> Result<(), GameError> {
        *self = GameState::new(width, height)?;
        info!(width, height, "new game");
        Ok(())
    }

    /// Start over with the same board size
    pub fn reset(&mut self) {
        self.board.clear();
        self.current_player = Player::One;
        self.outcome = GameOutcome::InProgress;
        info!(width = self.width(), height = self.height(), "new game");
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn width(&self) -> usize {
        self.board.width()
    }

    pub fn height(&self) -> usize {
        self.board.height()
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_terminal()
    }

    /// Cell at (row, column), `None` outside the board
    pub fn cell_at(&self, row: usize, column: usize) -> Option<Cell> {
        self.board.get(row, column)
    }

    pub fn moves_played(&self) -> usize {
        self.board.filled()
    }

    /// Get list of legal columns (not full). Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..self.width())
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Row a piece dropped into `column` would land in, `None` if the column is full
    pub fn find_landing_row(&self, column: usize) -> Result<Option<usize>, GameError> {
        self.board.landing_row(column)
    }

    /// Full-board scan for four in a row owned by `player`
    pub fn check_win_at(&self, player: Player) -> bool {
        self.board.check_win_at(player)
    }

    pub fn is_full(&self) -> bool {
        self.board.is_full()
    }

    /// Drop the current player's piece into `column`.
    ///
    /// Win is checked before tie, so filling the last cell with a winning
    /// piece reports a win. The turn passes only when the game continues.
    /// Rejected moves leave the state untouched.
    pub fn apply_move(&mut self, column: usize) -> Result<MoveResult, GameError> {
        if self.is_terminal() {
            return Err(GameError::GameAlreadyOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        debug!(player = player.number(), column, row, "piece dropped");

        self.outcome = if self.board.check_win_through(row, column) {
            GameOutcome::Winner(player)
        } else if self.board.is_full() {
            GameOutcome::Tie
        } else {
            self.current_player = player.other();
            GameOutcome::InProgress
        };

        if self.outcome.is_terminal() {
            info!(outcome = ?self.outcome, moves = self.moves_played(), "game over");
        }

        Ok(MoveResult {
            row,
            column,
            player,
            outcome: self.outcome,
        })
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[&str], to_move: Player) -> GameState {
        GameState {
            board: Board::from_rows(rows),
            current_player: to_move,
            outcome: GameOutcome::InProgress,
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
