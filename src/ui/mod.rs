//! Terminal UI for playing Connect Four, plus the text output shared with the
//! headless runner.

mod app;
mod game_view;

pub use app::App;

use crate::config::UiConfig;
use crate::error::ReplayError;
use crate::game::{GameOutcome, GameState};

/// End-of-game announcement, `None` while the game is still running.
pub fn outcome_message(outcome: GameOutcome, names: &UiConfig) -> Option<String> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Winner(player) => Some(format!("{} wins!", names.player_name(player))),
        GameOutcome::Tie => Some("It's a tie!".to_string()),
    }
}

/// Play 0-based columns in order. Stops at the first rejected move; moves
/// before it stay applied.
pub fn replay(game: &mut GameState, moves: &[usize]) -> Result<(), ReplayError> {
    for (turn, &column) in moves.iter().enumerate() {
        let player = game.current_player();
        game.apply_move(column).map_err(|source| ReplayError {
            turn: turn + 1,
            player,
            column,
            source,
        })?;
    }
    Ok(())
}

/// Text board followed by the outcome, or whose turn it is.
pub fn text_summary(game: &GameState, names: &UiConfig) -> String {
    let status = outcome_message(game.outcome(), names)
        .unwrap_or_else(|| format!("{} to move", names.player_name(game.current_player())));
    format!("{}\n{status}", game.board())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GameError;
    use crate::game::Player;

    #[test]
    fn test_outcome_message() {
        let names = UiConfig::default();
        assert_eq!(outcome_message(GameOutcome::InProgress, &names), None);
        assert_eq!(
            outcome_message(GameOutcome::Winner(Player::Two), &names).as_deref(),
            Some("Player 2 wins!")
        );
        assert_eq!(
            outcome_message(GameOutcome::Tie, &names).as_deref(),
            Some("It's a tie!")
        );
    }

    #[test]
    fn test_replay_to_win() {
        let mut game = GameState::initial();
        replay(&mut game, &[0, 6, 1, 6, 2, 6, 3]).unwrap();
        assert_eq!(game.outcome(), GameOutcome::Winner(Player::One));

        let summary = text_summary(&game, &UiConfig::default());
        assert!(summary.ends_with("1234567\nPlayer 1 wins!"));
        assert!(summary.starts_with(".......\n"));
    }

    #[test]
    fn test_replay_stops_at_full_column() {
        let mut game = GameState::initial();
        let err = replay(&mut game, &[0, 0, 0, 0, 0, 0, 0, 1]).unwrap_err();

        assert_eq!(
            err,
            ReplayError {
                turn: 7,
                player: Player::One,
                column: 0,
                source: GameError::ColumnFull(0),
            }
        );
        assert_eq!(
            err.to_string(),
            "move 7 by Player 1 in column 0 rejected: column 0 is full"
        );
        // Moves before the rejection are kept, later ones never run
        assert_eq!(game.moves_played(), 6);
        assert_eq!(game.cell_at(5, 1), Some(crate::game::Cell::Empty));
    }

    #[test]
    fn test_replay_after_game_over() {
        let mut game = GameState::initial();
        let err = replay(&mut game, &[0, 6, 1, 6, 2, 6, 3, 4]).unwrap_err();
        assert_eq!(err.turn, 8);
        assert_eq!(err.source, GameError::GameAlreadyOver);
        assert_eq!(game.moves_played(), 7);
    }

    #[test]
    fn test_summary_in_progress() {
        let mut game = GameState::new(4, 4).unwrap();
        replay(&mut game, &[1]).unwrap();
        let mut names = UiConfig::default();
        names.player_two_name = "Yellow".to_string();

        assert_eq!(
            text_summary(&game, &names),
            "....\n....\n....\n.X..\n1234\nYellow to move"
        );
    }
}
