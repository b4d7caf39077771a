use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chess_core::{Board, Color, Move};
use log::debug;

use crate::search::minimax;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: u8 = 3;

/// An automated player: fixed color, fixed search depth, cancellable
/// search. Cloning shares the halt flag; the engine holds no other state.
#[derive(Debug, Clone)]
pub struct Engine {
    color: Color,
    depth: u8,
    halt: Arc<AtomicBool>,
}

impl Engine {
    pub fn new(color: Color) -> Self {
        Self::with_depth(color, DEFAULT_DEPTH)
    }

    pub fn with_depth(color: Color, depth: u8) -> Self {
        Self {
            color,
            depth,
            halt: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn depth(&self) -> u8 {
        self.depth
    }

    /// Handle another thread may set to abort an in-flight search; the
    /// search then returns the best move it has found so far. The flag is
    /// rearmed on the next `select_move` call.
    pub fn halt_handle(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.halt)
    }

    /// Searches from the engine's color with a full window and returns the
    /// move to play, or `None` when no action is available.
    pub fn select_move<F>(&self, board: &Board, is_over: &F) -> Option<Move>
    where
        F: Fn(&Board, Color) -> bool,
    {
        self.halt.store(false, Ordering::SeqCst);
        let (action, score) = minimax(
            board,
            self.depth,
            self.color,
            self.color,
            f64::NEG_INFINITY,
            f64::INFINITY,
            is_over,
            Some(&self.halt),
        );
        if let Some(action) = &action {
            debug!("{} engine picked {action} scoring {score:.1}", self.color);
        }
        action
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
