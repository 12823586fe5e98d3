use super::*;
use crate::tables::*;

#[test]
fn test_coordinate_bounds() {
    assert!(Coordinate::new(0).is_ok());
    assert!(Coordinate::new(63).is_ok());
    assert_eq!(Coordinate::new(64), Err(ChessError::InvalidCoordinate(64)));
    assert_eq!(Coordinate::new(-1), Err(ChessError::InvalidCoordinate(-1)));
}

#[test]
fn test_coordinate_row_and_column() {
    let c = Coordinate::new(52).unwrap();
    assert_eq!(c.row(), 6);
    assert_eq!(c.column(), 4);
    assert_eq!(c.to_algebraic(), "e2");
}

#[test]
fn test_algebraic_names() {
    // Row 0 is black's back rank.
    assert_eq!(Coordinate::from_algebraic("a8"), Coordinate::new(0).ok());
    assert_eq!(Coordinate::from_algebraic("h8"), Coordinate::new(7).ok());
    assert_eq!(Coordinate::from_algebraic("a1"), Coordinate::new(56).ok());
    assert_eq!(Coordinate::from_algebraic("e1"), Coordinate::new(60).ok());
    assert_eq!(Coordinate::from_algebraic("i1"), None);
    assert_eq!(Coordinate::from_algebraic("a9"), None);
    assert_eq!(Coordinate::from_algebraic("e"), None);
}

#[test]
fn test_offset_stops_at_board_ends() {
    let a8 = Coordinate::new(0).unwrap();
    assert_eq!(a8.offset(-1), None);
    assert_eq!(a8.offset(9), Coordinate::new(9).ok());
    let h1 = Coordinate::new(63).unwrap();
    assert_eq!(h1.offset(1), None);
}

#[test]
fn test_alliance_directions() {
    assert_eq!(Alliance::White.direction(), -1);
    assert_eq!(Alliance::Black.direction(), 1);
    assert_eq!(Alliance::White.opposite_direction(), 1);
    assert_eq!(Alliance::White.opponent(), Alliance::Black);
    assert_eq!(Alliance::Black.opponent(), Alliance::White);
}

#[test]
fn test_promotion_squares() {
    let b8 = Coordinate::from_algebraic("b8").unwrap();
    let g1 = Coordinate::from_algebraic("g1").unwrap();
    assert!(Alliance::White.is_promotion_square(b8));
    assert!(!Alliance::White.is_promotion_square(g1));
    assert!(Alliance::Black.is_promotion_square(g1));
    assert!(!Alliance::Black.is_promotion_square(b8));
}

#[test]
fn test_column_tables() {
    assert_eq!(FIRST_COLUMN.iter().filter(|&&b| b).count(), 8);
    assert!(FIRST_COLUMN[56]);
    assert!(SECOND_COLUMN[57]);
    assert!(SEVENTH_COLUMN[6]);
    assert!(EIGHTH_COLUMN[63]);
    assert!(!EIGHTH_COLUMN[56]);
    assert!(SECOND_ROW[8] && SECOND_ROW[15] && !SECOND_ROW[16]);
    assert!(SEVENTH_ROW[48] && SEVENTH_ROW[55]);
}

#[test]
fn test_coordinate_serde_rejects_off_board() {
    let c: Coordinate = serde_json::from_str("36").unwrap();
    assert_eq!(c.to_algebraic(), "e4");
    assert!(serde_json::from_str::<Coordinate>("64").is_err());
    assert_eq!(serde_json::to_string(&Alliance::Black).unwrap(), "\"black\"");
}

#[test]
fn test_piece_values() {
    assert_eq!(PieceKind::Pawn.value(), 100);
    assert_eq!(PieceKind::Knight.value(), PieceKind::Bishop.value());
    assert!(PieceKind::Queen.value() > PieceKind::Rook.value());
    assert_eq!(PieceKind::King.value(), 10_000);
}
