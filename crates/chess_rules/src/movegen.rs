use crate::board::Board;
use crate::moves::Move;
use crate::piece::Piece;
use crate::tables::{EIGHTH_COLUMN, FIRST_COLUMN, SECOND_COLUMN, SEVENTH_COLUMN};
use crate::types::{Coordinate, PieceKind};

const KNIGHT_OFFSETS: [i8; 8] = [-17, -15, -10, -6, 6, 10, 15, 17];
const KING_OFFSETS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];
const BISHOP_VECTORS: [i8; 4] = [-9, -7, 7, 9];
const ROOK_VECTORS: [i8; 4] = [-8, -1, 1, 8];
const QUEEN_VECTORS: [i8; 8] = [-9, -8, -7, -1, 1, 7, 8, 9];

/// Generate the pseudo-legal moves of one piece, returning a freshly allocated vector.
pub fn pseudo_legal_moves(piece: &Piece, board: &Board) -> Vec<Move> {
    let mut out = Vec::with_capacity(16);
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, piece, &mut out),
        PieceKind::Knight => gen_leaper(board, piece, &KNIGHT_OFFSETS, &mut out),
        PieceKind::Bishop => gen_slider(board, piece, &BISHOP_VECTORS, &mut out),
        PieceKind::Rook => gen_slider(board, piece, &ROOK_VECTORS, &mut out),
        PieceKind::Queen => gen_slider(board, piece, &QUEEN_VECTORS, &mut out),
        PieceKind::King => gen_leaper(board, piece, &KING_OFFSETS, &mut out),
    }
    out
}

/// True when stepping `offset` from `from` would wrap to the other edge.
///
/// Knights jump two columns, so they need the second/seventh column tables
/// as well; every other piece moves at most one column per step.
pub(crate) fn is_column_exclusion(kind: PieceKind, from: Coordinate, offset: i8) -> bool {
    let i = from.index();
    match kind {
        PieceKind::Knight => {
            (FIRST_COLUMN[i] && matches!(offset, -17 | -10 | 6 | 15))
                || (SECOND_COLUMN[i] && matches!(offset, -10 | 6))
                || (SEVENTH_COLUMN[i] && matches!(offset, -6 | 10))
                || (EIGHTH_COLUMN[i] && matches!(offset, -15 | -6 | 10 | 17))
        }
        _ => {
            (FIRST_COLUMN[i] && matches!(offset, -9 | -1 | 7))
                || (EIGHTH_COLUMN[i] && matches!(offset, -7 | 1 | 9))
        }
    }
}

fn gen_pawn(board: &Board, pawn: &Piece, out: &mut Vec<Move>) {
    let side = pawn.side();
    let dir = side.direction();
    let from = pawn.position();

    // forward 1, and forward 2 for an unmoved pawn
    if let Some(to) = from.offset(8 * dir)
        && !board.tile(to).is_occupied()
    {
        push_promotable(
            out,
            Move::PawnMove {
                piece: *pawn,
                destination: to,
            },
        );

        if pawn.is_first_move()
            && let Some(to2) = from.offset(16 * dir)
            && !board.tile(to2).is_occupied()
        {
            out.push(Move::PawnJump {
                piece: *pawn,
                destination: to2,
            });
        }
    }

    // captures + en-passant
    for offset in [7 * dir, 9 * dir] {
        if is_column_exclusion(PieceKind::Pawn, from, offset) {
            continue;
        }
        let Some(to) = from.offset(offset) else {
            continue;
        };
        match board.tile(to).piece() {
            Some(target) if target.side() != side => push_promotable(
                out,
                Move::PawnAttackMove {
                    piece: *pawn,
                    destination: to,
                    captured: *target,
                },
            ),
            Some(_) => {}
            None => {
                // The jumped pawn sits beside us, directly behind the empty target.
                if let Some(ep) = board.en_passant_pawn()
                    && ep.side() != side
                    && Some(ep.position()) == to.offset(-8 * dir)
                {
                    push_promotable(
                        out,
                        Move::PawnEnPassantAttackMove {
                            piece: *pawn,
                            destination: to,
                            captured: *ep,
                        },
                    );
                }
            }
        }
    }
}

fn push_promotable(out: &mut Vec<Move>, mv: Move) {
    if mv.moved_piece().side().is_promotion_square(mv.destination()) {
        out.push(Move::PawnPromotion(Box::new(mv)));
    } else {
        out.push(mv);
    }
}

fn gen_leaper(board: &Board, piece: &Piece, offsets: &[i8], out: &mut Vec<Move>) {
    let from = piece.position();
    for &offset in offsets {
        if is_column_exclusion(piece.kind(), from, offset) {
            continue;
        }
        if let Some(to) = from.offset(offset) {
            push_major(board, piece, to, out);
        }
    }
}

fn gen_slider(board: &Board, piece: &Piece, vectors: &[i8], out: &mut Vec<Move>) {
    for &vector in vectors {
        let mut current = piece.position();
        loop {
            if is_column_exclusion(piece.kind(), current, vector) {
                break;
            }
            let Some(to) = current.offset(vector) else {
                break;
            };
            if !push_major(board, piece, to, out) {
                break;
            }
            current = to;
        }
    }
}

/// Records a quiet move or a capture onto `to`. Returns whether a slider may
/// keep walking past `to`.
fn push_major(board: &Board, piece: &Piece, to: Coordinate, out: &mut Vec<Move>) -> bool {
    match board.tile(to).piece() {
        None => {
            out.push(Move::MajorMove {
                piece: *piece,
                destination: to,
            });
            true
        }
        Some(target) => {
            if target.side() != piece.side() {
                out.push(Move::MajorAttackMove {
                    piece: *piece,
                    destination: to,
                    captured: *target,
                });
            }
            false
        }
    }
}

#[cfg(test)]
#[path = "movegen_tests.rs"]
mod movegen_tests;
