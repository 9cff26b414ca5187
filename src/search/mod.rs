mod minimax;
pub use minimax::*;
mod alphabeta;
pub use alphabeta::*;

use std::fmt::Debug;

use crate::env::Player;
use crate::game::Board;

/// Score of a won game.
pub const WIN: f64 = f64::INFINITY;
/// Score of a lost game.
pub const LOSS: f64 = f64::NEG_INFINITY;

/// The turn clock ran out mid-search.
///
/// This is the only failure the engines know. It unwinds through every
/// active recursive frame so that no partially expanded node ever
/// contributes a score to its ancestors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchAborted;

pub type SearchResult<T> = Result<T, SearchAborted>;

/// A heuristic that evaluates the game state at the leafs of a tree search.
///
/// The score is always taken from the point of view of `player`, the agent
/// that initiated the search, not the player who is to move at the leaf.
/// Decided states must evaluate to [`WIN`]/[`LOSS`] before any other term.
pub trait Heuristic: Debug + Send + Sync {
    fn eval(&self, board: &Board, player: Player) -> f64;
}

/// Default remaining-time threshold below which a search gives up, in ms.
pub const TIMER_THRESHOLD: f64 = 10.0;

/// Wall-clock budget of a single turn.
///
/// The probe reports the remaining milliseconds and is polled before every
/// node expansion. Cancellation is cooperative, so the worst case overrun is
/// one node expansion; choose the threshold generously relative to the
/// per-node cost.
pub struct Clock<'a> {
    time_left: &'a dyn Fn() -> f64,
    threshold: f64,
}

impl<'a> Clock<'a> {
    pub fn new(time_left: &'a dyn Fn() -> f64, threshold: f64) -> Clock<'a> {
        Clock {
            time_left,
            threshold,
        }
    }

    pub fn check(&self) -> SearchResult<()> {
        if (self.time_left)() < self.threshold {
            Err(SearchAborted)
        } else {
            Ok(())
        }
    }
}
