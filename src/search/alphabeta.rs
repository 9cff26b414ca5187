use log::debug;

use super::{Clock, Heuristic, SearchAborted, SearchResult, LOSS, WIN};
use crate::env::{Player, Pos};
use crate::game::Board;

/// Depth-limited minimax with alpha-beta pruning.
///
/// @see https://en.wikipedia.org/wiki/Alpha%E2%80%93beta_pruning
///
/// Produces the same move and backed-up score as [`super::minimax`] at the
/// same depth, it only skips dominated subtrees. The root is maximizing
/// only: completed branches raise alpha while beta stays unbounded.
pub fn alphabeta(
    board: &Board,
    depth: usize,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> SearchResult<(Pos, f64)> {
    clock.check()?;

    let me = board.active();
    let mut alpha = LOSS;
    let mut best_move = Pos::NULL;
    let mut best_score = LOSS;
    for mv in board.legal_moves(me) {
        let score = min_value(
            &board.forecast(mv),
            depth.saturating_sub(1),
            me,
            alpha,
            WIN,
            heuristic,
            clock,
        )?;
        if score > best_score {
            best_score = score;
            best_move = mv;
            alpha = best_score;
        }
    }
    Ok((best_move, best_score))
}

fn leaf(board: &Board, depth: usize, clock: &Clock) -> SearchResult<bool> {
    clock.check()?;
    Ok(depth == 0 || board.legal_moves(board.active()).is_empty())
}

fn min_value(
    board: &Board,
    depth: usize,
    me: Player,
    alpha: f64,
    mut beta: f64,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> SearchResult<f64> {
    clock.check()?;

    if leaf(board, depth, clock)? {
        return Ok(heuristic.eval(board, me));
    }
    let mut score = WIN;
    for mv in board.legal_moves(board.active()) {
        let value = max_value(
            &board.forecast(mv),
            depth - 1,
            me,
            alpha,
            beta,
            heuristic,
            clock,
        )?;
        score = score.min(value);
        // Dominated from the maximizer's perspective.
        if score <= alpha {
            break;
        }
        beta = beta.min(score);
    }
    Ok(score)
}

fn max_value(
    board: &Board,
    depth: usize,
    me: Player,
    mut alpha: f64,
    beta: f64,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> SearchResult<f64> {
    clock.check()?;

    if leaf(board, depth, clock)? {
        return Ok(heuristic.eval(board, me));
    }
    let mut score = LOSS;
    for mv in board.legal_moves(board.active()) {
        let value = min_value(
            &board.forecast(mv),
            depth - 1,
            me,
            alpha,
            beta,
            heuristic,
            clock,
        )?;
        score = score.max(value);
        if score >= beta {
            break;
        }
        alpha = alpha.max(score);
    }
    Ok(score)
}

/// Iterative deepening on top of [`alphabeta`].
///
/// Restarts the bounded search with increasing depth until the clock runs
/// out or `max_depth` is reached. The candidate move is only replaced after
/// a depth completed in full; an aborted depth is discarded entirely. If no
/// depth ever completed, the first legal move is returned, and only a player
/// without any legal move gets the `Pos::NULL` sentinel.
pub fn deepening(
    board: &Board,
    max_depth: usize,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> Pos {
    let mut best_move = Pos::NULL;
    for depth in 1..max_depth {
        match alphabeta(board, depth, heuristic, clock) {
            Ok((mv, score)) => {
                debug!(">>> alphabeta {} {:?} {}", depth, mv, score);
                best_move = mv;
            }
            Err(SearchAborted) => {
                debug!(">>> aborted at depth {}", depth);
                break;
            }
        }
    }

    if best_move == Pos::NULL {
        board
            .legal_moves(board.active())
            .first()
            .copied()
            .unwrap_or(Pos::NULL)
    } else {
        best_move
    }
}
