use chess_core::{Board, Color};

// each reachable destination is worth a tenth of a pawn
const MOBILITY_WEIGHT: f64 = 0.1;

/// Heuristic score of `board` from `perspective`'s point of view: material
/// balance plus a small mobility bonus. A pure function of the position;
/// both terms are freshly enumerated, nothing is cached.
pub fn evaluate(board: &Board, perspective: Color) -> f64 {
    material_term(board, perspective) + mobility_term(board, perspective)
}

fn material_term(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|piece| {
            let value = f64::from(piece.kind.value());
            if piece.color == perspective {
                value
            } else {
                -value
            }
        })
        .sum()
}

fn mobility_term(board: &Board, perspective: Color) -> f64 {
    board
        .pieces()
        .map(|piece| {
            let reach = piece.possible_moves(board).len() as f64 * MOBILITY_WEIGHT;
            if piece.color == perspective {
                reach
            } else {
                -reach
            }
        })
        .sum()
}

#[cfg(test)]
#[path = "evaluation_tests.rs"]
mod evaluation_tests;
