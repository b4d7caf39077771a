use crate::{Board, Color, Move, PieceKind, Square};

fn board_with(placements: &[(&'static str, (i8, i8))]) -> Board {
    let mut rows = vec![vec!["__"; 8]; 8];
    for &(token, (row, col)) in placements {
        rows[row as usize][col as usize] = token;
    }
    Board::parse(&rows).unwrap()
}

fn moves_of(board: &Board, row: i8, col: i8) -> Vec<Move> {
    board
        .piece_at(Square::new(row, col))
        .unwrap()
        .possible_moves(board)
}

fn allowed(board: &Board, from: (i8, i8), to: (i8, i8)) -> bool {
    let from = Square::new(from.0, from.1);
    let piece = board.piece_at(from).unwrap();
    piece.move_allowed(from, Square::new(to.0, to.1), board)
}

#[test]
fn pawn_advances_one_or_two_squares_from_home() {
    let board = Board::standard();
    let moves = moves_of(&board, 6, 0);
    assert_eq!(
        moves,
        vec![
            Move::new(Square::new(6, 0), Square::new(5, 0)),
            Move::new(Square::new(6, 0), Square::new(4, 0)),
        ]
    );
}

#[test]
fn black_pawn_advances_toward_higher_rows() {
    let board = Board::standard();
    let moves = moves_of(&board, 1, 3);
    assert_eq!(
        moves,
        vec![
            Move::new(Square::new(1, 3), Square::new(2, 3)),
            Move::new(Square::new(1, 3), Square::new(3, 3)),
        ]
    );
}

#[test]
fn pawn_double_step_needs_both_squares_empty() {
    let board = board_with(&[("wP", (6, 4)), ("bN", (5, 4))]);
    assert!(!allowed(&board, (6, 4), (5, 4)));
    assert!(!allowed(&board, (6, 4), (4, 4)));

    let board = board_with(&[("wP", (6, 4)), ("bN", (4, 4))]);
    assert!(allowed(&board, (6, 4), (5, 4)));
    assert!(!allowed(&board, (6, 4), (4, 4)));
}

#[test]
fn pawn_captures_diagonally_onto_enemies_only() {
    let board = board_with(&[("wP", (6, 1)), ("bN", (5, 0)), ("wB", (5, 2))]);
    assert!(allowed(&board, (6, 1), (5, 0)));
    assert!(!allowed(&board, (6, 1), (5, 2)));

    let board = board_with(&[("wP", (6, 1))]);
    assert!(!allowed(&board, (6, 1), (5, 0)));
}

#[test]
fn pawn_loses_double_step_after_first_move() {
    let mut board = Board::standard();
    assert_eq!(
        board.move_piece(Square::new(6, 0), Square::new(5, 0), Color::White),
        Ok(true)
    );
    let moves = moves_of(&board, 5, 0);
    assert_eq!(moves, vec![Move::new(Square::new(5, 0), Square::new(4, 0))]);
}

#[test]
fn knight_jumps_but_not_onto_friendly_pieces() {
    let board = Board::standard();
    let moves = moves_of(&board, 7, 1);
    assert_eq!(
        moves,
        vec![
            Move::new(Square::new(7, 1), Square::new(5, 2)),
            Move::new(Square::new(7, 1), Square::new(5, 0)),
        ]
    );
}

#[test]
fn rook_rays_stop_at_blockers_and_captures() {
    let board = board_with(&[("wR", (4, 4)), ("wP", (4, 6)), ("bP", (1, 4))]);
    assert!(allowed(&board, (4, 4), (4, 5)));
    assert!(!allowed(&board, (4, 4), (4, 6)));
    assert!(!allowed(&board, (4, 4), (4, 7)));
    assert!(allowed(&board, (4, 4), (1, 4)));
    assert!(!allowed(&board, (4, 4), (0, 4)));
}

#[test]
fn bishop_requires_a_perfect_diagonal() {
    let board = board_with(&[("wB", (4, 4))]);
    assert!(allowed(&board, (4, 4), (6, 6)));
    assert!(allowed(&board, (4, 4), (0, 0)));
    assert!(!allowed(&board, (4, 4), (6, 5)));
    assert!(!allowed(&board, (4, 4), (4, 6)));
}

#[test]
fn queen_moves_along_ranks_files_and_diagonals() {
    let board = board_with(&[("wQ", (4, 4)), ("bR", (4, 0))]);
    assert!(allowed(&board, (4, 4), (4, 0)));
    assert!(allowed(&board, (4, 4), (0, 4)));
    assert!(allowed(&board, (4, 4), (7, 7)));
    assert!(!allowed(&board, (4, 4), (6, 5)));
}

#[test]
fn king_steps_a_single_square() {
    let board = board_with(&[("wK", (4, 4))]);
    assert!(allowed(&board, (4, 4), (5, 5)));
    assert!(allowed(&board, (4, 4), (3, 4)));
    assert!(!allowed(&board, (4, 4), (6, 4)));
}

#[test]
fn kingside_castle_needs_a_clear_path() {
    let board = board_with(&[("wK", (7, 4)), ("wR", (7, 7))]);
    assert!(allowed(&board, (7, 4), (7, 6)));

    let board = board_with(&[("wK", (7, 4)), ("wR", (7, 7)), ("wB", (7, 5))]);
    assert!(!allowed(&board, (7, 4), (7, 6)));

    let board = board_with(&[("wK", (7, 4)), ("wR", (7, 7)), ("bN", (7, 6))]);
    assert!(!allowed(&board, (7, 4), (7, 6)));
}

#[test]
fn queenside_castle_checks_every_square_to_the_rook() {
    let board = board_with(&[("wK", (7, 4)), ("wR", (7, 0))]);
    assert!(allowed(&board, (7, 4), (7, 2)));

    let board = board_with(&[("wK", (7, 4)), ("wR", (7, 0)), ("bN", (7, 1))]);
    assert!(!allowed(&board, (7, 4), (7, 2)));
}

#[test]
fn castle_requires_an_unmoved_rook_on_the_far_square() {
    let board = board_with(&[("wK", (7, 4)), ("wN", (7, 7))]);
    assert!(!allowed(&board, (7, 4), (7, 6)));

    let board = board_with(&[("wK", (7, 4)), ("bR", (7, 7))]);
    assert!(!allowed(&board, (7, 4), (7, 6)));

    let mut board = board_with(&[("wK", (7, 4)), ("wR", (7, 7))]);
    assert_eq!(
        board.move_piece(Square::new(7, 7), Square::new(6, 7), Color::White),
        Ok(true)
    );
    assert_eq!(
        board.move_piece(Square::new(6, 7), Square::new(7, 7), Color::White),
        Ok(true)
    );
    assert!(!allowed(&board, (7, 4), (7, 6)));
}

#[test]
fn checking_castle_legality_never_marks_the_king_moved() {
    let board = board_with(&[("wK", (7, 4)), ("wR", (7, 7))]);
    let before = board.clone();
    assert!(allowed(&board, (7, 4), (7, 6)));
    assert!(!board.piece_at(Square::new(7, 4)).unwrap().has_moved);
    assert_eq!(board, before);
    // still eligible on a second check
    assert!(allowed(&board, (7, 4), (7, 6)));
}

#[test]
fn king_loses_castling_once_it_has_moved() {
    let mut board = board_with(&[("wK", (7, 4)), ("wR", (7, 7))]);
    assert_eq!(
        board.move_piece(Square::new(7, 4), Square::new(6, 4), Color::White),
        Ok(true)
    );
    assert_eq!(
        board.move_piece(Square::new(6, 4), Square::new(7, 4), Color::White),
        Ok(true)
    );
    assert!(!allowed(&board, (7, 4), (7, 6)));
}

#[test]
fn stretch_flag_marks_the_ray_pieces() {
    assert!(PieceKind::Rook.is_stretch());
    assert!(PieceKind::Bishop.is_stretch());
    assert!(PieceKind::Queen.is_stretch());
    assert!(!PieceKind::Pawn.is_stretch());
    assert!(!PieceKind::Knight.is_stretch());
    assert!(!PieceKind::King.is_stretch());
}

#[test]
fn material_values_match_the_classic_table() {
    assert_eq!(PieceKind::Pawn.value(), 100);
    assert_eq!(PieceKind::Knight.value(), 320);
    assert_eq!(PieceKind::Bishop.value(), 330);
    assert_eq!(PieceKind::Rook.value(), 500);
    assert_eq!(PieceKind::Queen.value(), 900);
    assert_eq!(PieceKind::King.value(), 10_000);
}
