use super::{Clock, Heuristic, SearchResult, LOSS, WIN};
use crate::env::{Player, Pos};
use crate::game::Board;

/// Depth-limited minimax without pruning.
///
/// @see https://en.wikipedia.org/wiki/Minimax
///
/// Enumerates the active player's moves in board order and keeps the first
/// move with the strictly greatest backed-up score. Returns `Pos::NULL` if
/// there is no legal move (or none scores above [`LOSS`]).
pub fn minimax(
    board: &Board,
    depth: usize,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> SearchResult<(Pos, f64)> {
    clock.check()?;

    let me = board.active();
    let mut best_move = Pos::NULL;
    let mut best_score = LOSS;
    for mv in board.legal_moves(me) {
        let score = min_value(
            &board.forecast(mv),
            depth.saturating_sub(1),
            me,
            heuristic,
            clock,
        )?;
        if score > best_score {
            best_score = score;
            best_move = mv;
        }
    }
    Ok((best_move, best_score))
}

/// The search is over when the depth is exhausted or the player to move is
/// stuck. The clock is polled even before this test.
fn leaf(board: &Board, depth: usize, clock: &Clock) -> SearchResult<bool> {
    clock.check()?;
    Ok(depth == 0 || board.legal_moves(board.active()).is_empty())
}

fn min_value(
    board: &Board,
    depth: usize,
    me: Player,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> SearchResult<f64> {
    clock.check()?;

    if leaf(board, depth, clock)? {
        return Ok(heuristic.eval(board, me));
    }
    let mut score = WIN;
    for mv in board.legal_moves(board.active()) {
        let value = max_value(&board.forecast(mv), depth - 1, me, heuristic, clock)?;
        score = score.min(value);
    }
    Ok(score)
}

fn max_value(
    board: &Board,
    depth: usize,
    me: Player,
    heuristic: &dyn Heuristic,
    clock: &Clock,
) -> SearchResult<f64> {
    clock.check()?;

    if leaf(board, depth, clock)? {
        return Ok(heuristic.eval(board, me));
    }
    let mut score = LOSS;
    for mv in board.legal_moves(board.active()) {
        let value = min_value(&board.forecast(mv), depth - 1, me, heuristic, clock)?;
        score = score.max(value);
    }
    Ok(score)
}
