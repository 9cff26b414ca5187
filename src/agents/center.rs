use crate::env::{Player, Pos};
use crate::game::Board;
use crate::search::{Heuristic, LOSS, WIN};

/// Mobility advantage combined with the distance from the board center.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CenterHeuristic {
    mobility: f64,
    centrality: f64,
}

impl Default for CenterHeuristic {
    fn default() -> Self {
        Self {
            mobility: 1.0,
            centrality: 1.0,
        }
    }
}

impl CenterHeuristic {
    /// Euclidean distance of the player to the geometric board center.
    fn center_distance(board: &Board, player: Player) -> f64 {
        let Pos { x, y } = board.location(player);
        let dx = x as f64 - board.width() as f64 / 2.0;
        let dy = y as f64 - board.height() as f64 / 2.0;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Heuristic for CenterHeuristic {
    fn eval(&self, board: &Board, player: Player) -> f64 {
        if board.is_loser(player) {
            return LOSS;
        }
        if board.is_winner(player) {
            return WIN;
        }

        let opponent = player.opponent();
        let own_moves = board.legal_moves(player).len() as f64;
        let opp_moves = board.legal_moves(opponent).len() as f64;
        let own_center = Self::center_distance(board, player);
        let opp_center = Self::center_distance(board, opponent);

        self.mobility * (own_moves - opp_moves) + self.centrality * (own_center - opp_center)
    }
}
