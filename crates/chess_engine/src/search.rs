use std::sync::atomic::{AtomicBool, Ordering};

use chess_core::{Board, Color, Move};
use log::trace;

use crate::evaluation::evaluate;

/// Depth-limited minimax with alpha-beta pruning.
///
/// `engine_color` is the maximizing side; `to_move` alternates down the
/// tree. `is_over` is the caller's terminal predicate (checkmate,
/// stalemate, captured king, whatever the driver assembles), applied to
/// each node's own position. `halt`, when supplied, is polled between
/// sibling evaluations so a long search can be aborted while keeping the
/// best move found so far.
///
/// Returns the chosen action and its score. The action is `None` when
/// depth was zero on entry, the terminal predicate already held, or no
/// sibling was evaluated (empty action space, or halted immediately; the
/// score is then the unimproved infinity bound). Among equally scored
/// actions the last one in `action_space` order wins.
pub fn minimax<F>(
    board: &Board,
    depth: u8,
    to_move: Color,
    engine_color: Color,
    mut alpha: f64,
    mut beta: f64,
    is_over: &F,
    halt: Option<&AtomicBool>,
) -> (Option<Move>, f64)
where
    F: Fn(&Board, Color) -> bool,
{
    if depth == 0 || is_over(board, to_move) {
        return (None, evaluate(board, engine_color));
    }

    let mut best_action = None;
    if to_move == engine_color {
        let mut best_score = f64::NEG_INFINITY;
        for action in board.action_space(to_move) {
            if halted(halt) {
                trace!("search halted {depth} plies from the horizon");
                break;
            }
            let score = score_action(board, action, depth, to_move, engine_color, alpha, beta, is_over, halt);
            best_score = best_score.max(score);
            if score >= best_score {
                best_action = Some(action);
            }
            alpha = alpha.max(score);
            if alpha >= beta {
                break;
            }
        }
        (best_action, best_score)
    } else {
        let mut best_score = f64::INFINITY;
        for action in board.action_space(to_move) {
            if halted(halt) {
                trace!("search halted {depth} plies from the horizon");
                break;
            }
            let score = score_action(board, action, depth, to_move, engine_color, alpha, beta, is_over, halt);
            best_score = best_score.min(score);
            if score <= best_score {
                best_action = Some(action);
            }
            beta = beta.min(score);
            if alpha >= beta {
                break;
            }
        }
        (best_action, best_score)
    }
}

fn score_action<F>(
    board: &Board,
    action: Move,
    depth: u8,
    to_move: Color,
    engine_color: Color,
    alpha: f64,
    beta: f64,
    is_over: &F,
    halt: Option<&AtomicBool>,
) -> f64
where
    F: Fn(&Board, Color) -> bool,
{
    let mut successor = board.clone();
    let _ = successor.move_piece(action.from, action.to, to_move);
    minimax(
        &successor,
        depth - 1,
        to_move.opposite(),
        engine_color,
        alpha,
        beta,
        is_over,
        halt,
    )
    .1
}

fn halted(halt: Option<&AtomicBool>) -> bool {
    halt.map_or(false, |flag| flag.load(Ordering::SeqCst))
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod search_tests;
