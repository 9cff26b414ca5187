use log::debug;

use super::HeuristicConfig;
use crate::env::Pos;
use crate::game::Board;
use crate::search::{minimax, Clock, SearchAborted, TIMER_THRESHOLD};

/// Fixed-depth minimax agent, mostly useful as a sparring partner.
///
/// Unlike [`super::AlphaBetaAgent`] it has no completed shallower depth to
/// fall back to, so an exhausted budget forfeits with `Pos::NULL`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct MinimaxAgent {
    pub depth: usize,
    /// Remaining milliseconds at which the search gives up.
    pub threshold: f64,
    pub heuristic: HeuristicConfig,
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self {
            depth: 3,
            threshold: TIMER_THRESHOLD,
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl MinimaxAgent {
    pub fn select_move(&self, board: &Board, time_left: &dyn Fn() -> f64) -> Pos {
        let clock = Clock::new(time_left, self.threshold);
        match minimax(board, self.depth, &self.heuristic, &clock) {
            Ok((mv, score)) => {
                debug!(">>> minimax {} {:?} {}", self.depth, mv, score);
                mv
            }
            Err(SearchAborted) => Pos::NULL,
        }
    }
}
