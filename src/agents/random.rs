use rand::{rngs::SmallRng, seq::IteratorRandom, SeedableRng};

use crate::env::Pos;
use crate::game::Board;

/// Baseline agent that plays a uniformly random legal move.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
pub struct RandomAgent;

impl RandomAgent {
    pub fn select_move(&self, board: &Board) -> Pos {
        let mut rng = SmallRng::from_entropy();
        board
            .legal_moves(board.active())
            .into_iter()
            .choose(&mut rng)
            .unwrap_or(Pos::NULL)
    }
}
