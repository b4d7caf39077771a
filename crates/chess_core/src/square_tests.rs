use super::*;
use crate::error::CoordError;

#[test]
fn text_round_trip_covers_every_standard_square() {
    for row in 0..8 {
        for col in 0..8 {
            let square = Square::new(row, col);
            let text = square.to_text();
            assert_eq!(Square::from_text(&text), Ok(square), "square {square}");
        }
    }
}

#[test]
fn corners_map_to_expected_coordinates() {
    assert_eq!(Square::from_text("A1"), Ok(Square::new(0, 0)));
    assert_eq!(Square::from_text("H8"), Ok(Square::new(7, 7)));
    assert_eq!(Square::new(0, 0).to_text(), "A1");
    assert_eq!(Square::new(7, 7).to_text(), "H8");
}

#[test]
fn lowercase_column_letters_are_accepted() {
    assert_eq!(Square::from_text("e2"), Ok(Square::new(1, 4)));
}

#[test]
fn malformed_text_is_rejected() {
    assert_eq!(Square::from_text(""), Err(CoordError::Length(0)));
    assert_eq!(Square::from_text("A"), Err(CoordError::Length(1)));
    assert_eq!(Square::from_text("A12"), Err(CoordError::Length(3)));
    assert_eq!(Square::from_text("I1"), Err(CoordError::Column('I')));
    assert_eq!(Square::from_text("A0"), Err(CoordError::Row('0')));
    assert_eq!(Square::from_text("A9"), Err(CoordError::Row('9')));
}

#[test]
fn offset_adds_componentwise() {
    assert_eq!(Square::new(4, 4).offset(-2, 1), Square::new(2, 5));
    assert_eq!(Square::new(0, 0).offset(-1, -1), Square::new(-1, -1));
}
