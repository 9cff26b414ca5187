use std::fmt;
use std::str::FromStr;

mod alphabeta;
pub use alphabeta::*;
mod minimax;
pub use minimax::*;
mod random;
pub use random::*;
mod center;
pub use center::*;
mod overlap;
pub use overlap::*;
mod phase;
pub use phase::*;

use crate::env::{Player, Pos};
use crate::game::Board;
use crate::search::Heuristic;

/// Configuration of the agent answering move requests.
///
/// Serialized as JSON so that it can be passed on the command line, for
/// example `{"AlphaBeta":{"heuristic":{"Phase":null}}}`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum Agent {
    Minimax(MinimaxAgent),
    AlphaBeta(AlphaBetaAgent),
    Random(RandomAgent),
}

impl Default for Agent {
    fn default() -> Self {
        Self::AlphaBeta(AlphaBetaAgent::default())
    }
}

impl Agent {
    /// Chooses a move for the active player of `board`.
    ///
    /// `time_left` reports the remaining milliseconds of the turn budget.
    /// A move is returned before it runs out; `Pos::NULL` only if the
    /// player is already isolated.
    pub fn select_move(&self, board: &Board, time_left: &dyn Fn() -> f64) -> Pos {
        match self {
            Agent::Minimax(agent) => agent.select_move(board, time_left),
            Agent::AlphaBeta(agent) => agent.select_move(board, time_left),
            Agent::Random(agent) => agent.select_move(board),
        }
    }
}

impl FromStr for Agent {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl fmt::Display for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", serde_json::to_string(self).unwrap_or_default())
    }
}

/// The built-in leaf evaluation strategies.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub enum HeuristicConfig {
    Center(CenterHeuristic),
    Overlap(OverlapHeuristic),
    Phase(PhaseHeuristic),
}

impl Default for HeuristicConfig {
    fn default() -> Self {
        Self::Center(CenterHeuristic::default())
    }
}

impl Heuristic for HeuristicConfig {
    fn eval(&self, board: &Board, player: Player) -> f64 {
        match self {
            HeuristicConfig::Center(h) => h.eval(board, player),
            HeuristicConfig::Overlap(h) => h.eval(board, player),
            HeuristicConfig::Phase(h) => h.eval(board, player),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::env::Pos;
    use crate::game::Board;

    #[test]
    fn config_roundtrip() {
        let config: Agent = r#"{"AlphaBeta":{"max_depth":12}}"#.parse().unwrap();
        match &config {
            Agent::AlphaBeta(agent) => assert_eq!(agent.max_depth, 12),
            _ => panic!("wrong agent"),
        }
        let _: Agent = config.to_string().parse().unwrap();
    }

    #[test]
    fn stuck_player_gets_sentinel() {
        let board = Board::parse(
            r#"
            1 . .
            . . #
            . # 2"#,
        )
        .unwrap();

        let time_left = || f64::INFINITY;
        for config in [
            Agent::Minimax(MinimaxAgent::default()),
            Agent::AlphaBeta(AlphaBetaAgent::default()),
            Agent::Random(RandomAgent),
        ] {
            assert_eq!(config.select_move(&board, &time_left), Pos::NULL);
        }
    }
}
