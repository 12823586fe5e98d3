//! Read-only lookup tables indexed by coordinate.
//!
//! The column tables only exist to stop offset arithmetic from wrapping
//! around the board edge (e.g. `h4 + 1` landing on `a5`).

pub const NUM_TILES: usize = 64;
pub const NUM_TILES_PER_ROW: usize = 8;

const fn column_table(column: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut i = 0;
    while i < NUM_TILES {
        table[i] = i % NUM_TILES_PER_ROW == column;
        i += 1;
    }
    table
}

const fn row_table(row: usize) -> [bool; NUM_TILES] {
    let mut table = [false; NUM_TILES];
    let mut i = 0;
    while i < NUM_TILES {
        table[i] = i / NUM_TILES_PER_ROW == row;
        i += 1;
    }
    table
}

pub const FIRST_COLUMN: [bool; NUM_TILES] = column_table(0);
pub const SECOND_COLUMN: [bool; NUM_TILES] = column_table(1);
pub const SEVENTH_COLUMN: [bool; NUM_TILES] = column_table(6);
pub const EIGHTH_COLUMN: [bool; NUM_TILES] = column_table(7);

/// Row 0: black's back rank.
pub const FIRST_ROW: [bool; NUM_TILES] = row_table(0);
/// Black pawns start here.
pub const SECOND_ROW: [bool; NUM_TILES] = row_table(1);
/// White pawns start here.
pub const SEVENTH_ROW: [bool; NUM_TILES] = row_table(6);
/// Row 7: white's back rank.
pub const EIGHTH_ROW: [bool; NUM_TILES] = row_table(7);

pub fn is_valid_coordinate(index: i32) -> bool {
    (0..NUM_TILES as i32).contains(&index)
}
