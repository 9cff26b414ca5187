use crate::env::Player;
use crate::game::Board;
use crate::search::{Heuristic, LOSS, WIN};

/// Mobility advantage plus the number of contested squares, rewarding
/// positions that keep fighting for the same territory as the opponent.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct OverlapHeuristic;

impl Heuristic for OverlapHeuristic {
    fn eval(&self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return LOSS;
        }
        if board.is_winner(player) {
            return WIN;
        }

        let own_moves = board.legal_moves(player);
        let opp_moves = board.legal_moves(player.opponent());
        let shared = opp_moves.iter().filter(|mv| own_moves.contains(mv)).count();

        (own_moves.len() as f64 - opp_moves.len() as f64) + shared as f64
    }
}
