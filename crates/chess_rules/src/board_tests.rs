use super::*;

fn kings(builder: &mut BoardBuilder) -> &mut BoardBuilder {
    builder
        .set_piece(Piece::new(PieceKind::King, Alliance::White, Coordinate::at(60), false))
        .set_piece(Piece::new(PieceKind::King, Alliance::Black, Coordinate::at(4), false))
}

fn malformed(result: Result<Board, ChessError>) -> bool {
    matches!(result, Err(ChessError::MalformedPosition(_)))
}

#[test]
fn test_standard_board() {
    let board = Board::standard();
    assert_eq!(board.white_pieces().len(), 16);
    assert_eq!(board.black_pieces().len(), 16);
    assert_eq!(board.next_move_maker(), Alliance::White);
    assert!(board.en_passant_pawn().is_none());
    assert!(board.all_pieces().all(Piece::is_first_move));

    assert_eq!(board.piece_at(Coordinate::at(60)).unwrap().kind(), PieceKind::King);
    assert_eq!(board.piece_at(Coordinate::at(4)).unwrap().side(), Alliance::Black);
    assert_eq!(board.piece_at(Coordinate::at(59)).unwrap().kind(), PieceKind::Queen);
    for i in 16..48 {
        assert!(!board.tile(Coordinate::at(i)).is_occupied());
    }
}

#[test]
fn test_standard_board_moves() {
    let board = Board::standard();
    let white = board.white_player().legal_moves();
    assert_eq!(white.len(), 20);
    assert!(white.iter().all(|m| !m.is_attack() && !m.is_castle() && !m.is_promotion()));
    assert_eq!(board.black_player().pseudo_legal_moves().count(), 20);
    assert_eq!(board.all_legal_moves().count(), 40);
    assert!(
        board
            .all_legal_moves()
            .take(20)
            .all(|m| m.moved_piece().side() == Alliance::White)
    );
}

#[test]
fn test_pieces_by_side() {
    let board = Board::standard();
    assert_eq!(board.pieces(Alliance::White), board.white_pieces());
    assert_eq!(board.pieces(Alliance::Black), board.black_pieces());
    assert_eq!(board.all_pieces().count(), 32);

    let material = |side| board.pieces(side).iter().map(Piece::value).sum::<u32>();
    assert_eq!(material(Alliance::White), 13_900);
    assert_eq!(material(Alliance::White), material(Alliance::Black));
}

#[test]
fn test_tile_at_bounds() {
    let board = Board::standard();
    let corner = board.tile_at(0).unwrap();
    assert_eq!(corner.coordinate(), Coordinate::at(0));
    assert_eq!(corner.piece().unwrap().symbol(), 'r');
    assert!(!board.tile_at(35).unwrap().is_occupied());
    assert_eq!(board.tile_at(64), Err(ChessError::InvalidCoordinate(64)));
    assert_eq!(board.tile_at(-1), Err(ChessError::InvalidCoordinate(-1)));
}

#[test]
fn test_display() {
    let text = Board::standard().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(lines[0], "  r  n  b  q  k  b  n  r");
    assert_eq!(lines[1], "  p  p  p  p  p  p  p  p");
    assert_eq!(lines[4], "  -  -  -  -  -  -  -  -");
    assert_eq!(lines[7], "  R  N  B  Q  K  B  N  R");
}

#[test]
fn test_builder_minimal_position() {
    let mut builder = BoardBuilder::new();
    kings(&mut builder).set_move_maker(Alliance::Black);
    let board = builder.build().unwrap();
    assert_eq!(board.next_move_maker(), Alliance::Black);
    assert_eq!(board.current_player().alliance(), Alliance::Black);
    assert_eq!(board.white_player().legal_moves().len(), 5);
}

#[test]
fn test_builder_last_piece_wins() {
    let mut builder = BoardBuilder::new();
    kings(&mut builder)
        .set_piece(Piece::new(PieceKind::Rook, Alliance::White, Coordinate::at(36), false))
        .set_piece(Piece::new(PieceKind::Knight, Alliance::White, Coordinate::at(36), false));
    let board = builder.build().unwrap();
    assert_eq!(board.piece_at(Coordinate::at(36)).unwrap().kind(), PieceKind::Knight);
    assert_eq!(board.white_pieces().len(), 2);
}

#[test]
fn test_builder_requires_one_king_each() {
    let mut builder = BoardBuilder::new();
    builder.set_piece(Piece::new(PieceKind::King, Alliance::White, Coordinate::at(60), false));
    assert!(malformed(builder.build()));

    let mut builder = BoardBuilder::new();
    kings(&mut builder).set_piece(Piece::new(
        PieceKind::King,
        Alliance::Black,
        Coordinate::at(20),
        false,
    ));
    assert!(malformed(builder.build()));
}

#[test]
fn test_builder_rejects_pawn_on_back_rank() {
    for at in [0, 63] {
        let mut builder = BoardBuilder::new();
        kings(&mut builder).set_piece(Piece::new(
            PieceKind::Pawn,
            Alliance::White,
            Coordinate::at(at),
            false,
        ));
        assert!(malformed(builder.build()));
    }
}

#[test]
fn test_builder_checks_en_passant_pawn() {
    let pawn = Piece::new(PieceKind::Pawn, Alliance::Black, Coordinate::at(27), false);

    // Black just jumped, white to move: accepted.
    let mut builder = BoardBuilder::new();
    kings(&mut builder).set_piece(pawn).set_en_passant_pawn(pawn);
    let board = builder.build().unwrap();
    assert_eq!(board.en_passant_pawn(), Some(&pawn));

    // Wrong side to move.
    let mut builder = BoardBuilder::new();
    kings(&mut builder)
        .set_piece(pawn)
        .set_en_passant_pawn(pawn)
        .set_move_maker(Alliance::Black);
    assert!(malformed(builder.build()));

    // Not on the board.
    let mut builder = BoardBuilder::new();
    kings(&mut builder).set_en_passant_pawn(pawn);
    assert!(malformed(builder.build()));

    // Not a pawn.
    let knight = Piece::new(PieceKind::Knight, Alliance::Black, Coordinate::at(27), false);
    let mut builder = BoardBuilder::new();
    kings(&mut builder).set_piece(knight).set_en_passant_pawn(knight);
    assert!(malformed(builder.build()));
}

#[test]
fn test_builder_rejects_side_not_to_move_in_check() {
    let mut builder = BoardBuilder::new();
    kings(&mut builder).set_piece(Piece::new(
        PieceKind::Rook,
        Alliance::White,
        Coordinate::at(36),
        false,
    ));
    // White rook on e4 attacks the black king on e8 with white to move.
    assert!(malformed(builder.clone().build()));

    builder.set_move_maker(Alliance::Black);
    let board = builder.build().unwrap();
    assert!(board.current_player().is_in_check());
}
