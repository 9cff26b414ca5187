use crate::env::Player;
use crate::game::Board;
use crate::search::{Heuristic, LOSS, WIN};

/// Weights contested squares against the mover's mobility depending on the
/// game phase: the overlap term fades as the move counter grows while raw
/// mobility gains importance.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct PhaseHeuristic;

impl Heuristic for PhaseHeuristic {
    fn eval(&self, board: &Board, player: Player) -> f64 {
        let own_moves = board.legal_moves(player);
        let opp_moves = board.legal_moves(player.opponent());
        if opp_moves.is_empty() {
            return WIN;
        }
        if own_moves.is_empty() {
            return LOSS;
        }

        let shared = opp_moves.iter().filter(|mv| own_moves.contains(mv)).count();
        let factor = 1.0 / (board.move_count() + 1) as f64;
        let mobility = board.legal_moves(board.active()).len() as f64;

        shared as f64 * factor + mobility / factor
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn decided_states_dominate() {
        let board = Board::parse(
            r#"
            1 . .
            . . #
            . # 2"#,
        )
        .unwrap();

        assert_eq!(PhaseHeuristic.eval(&board, Player::One), LOSS);
        assert_eq!(PhaseHeuristic.eval(&board, Player::Two), WIN);
    }

    #[test]
    fn mobility_outweighs_overlap_late() {
        let early = Board::parse(
            r#"
            . . . . .
            . 1 . . .
            . . . . .
            . 2 . . .
            . . . . ."#,
        )
        .unwrap();

        // One contested square, four moves for the active player.
        assert_eq!(PhaseHeuristic.eval(&early, Player::One), 1.0 + 4.0);

        // Several plies in, the same position weighs mobility higher and
        // the overlap lower.
        let late = early.forecast(early.legal_moves(Player::One)[0]);
        let value = PhaseHeuristic.eval(&late, Player::One);
        let factor = 1.0 / 2.0;
        let own = late.legal_moves(Player::One);
        let opp = late.legal_moves(Player::Two);
        let shared = opp.iter().filter(|mv| own.contains(mv)).count() as f64;
        let mobility = late.legal_moves(late.active()).len() as f64;
        assert_eq!(value, shared * factor + mobility / factor);
    }
}
