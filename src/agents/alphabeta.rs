use super::HeuristicConfig;
use crate::env::Pos;
use crate::game::Board;
use crate::search::{deepening, Clock, TIMER_THRESHOLD};

/// Iterative deepening alpha-beta agent.
///
/// Searches one ply deeper until the turn budget is nearly exhausted and
/// answers with the move of the last depth that completed in time.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AlphaBetaAgent {
    /// Deepening stops here even with time to spare.
    /// High enough to never be reached on regular boards before timeout.
    pub max_depth: usize,
    /// Remaining milliseconds at which the search gives up.
    pub threshold: f64,
    pub heuristic: HeuristicConfig,
}

impl Default for AlphaBetaAgent {
    fn default() -> Self {
        Self {
            max_depth: 25,
            threshold: TIMER_THRESHOLD,
            heuristic: HeuristicConfig::default(),
        }
    }
}

impl AlphaBetaAgent {
    pub fn select_move(&self, board: &Board, time_left: &dyn Fn() -> f64) -> Pos {
        let clock = Clock::new(time_left, self.threshold);
        deepening(board, self.max_depth, &self.heuristic, &clock)
    }
}
