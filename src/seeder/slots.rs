//! Slot lists: the empty cells of a zone, and their shuffle.

use crate::board::Board;
use crate::core::coord::GridCoord;
use crate::core::rng::UniformSource;
use crate::zones::RowZone;

/// Ordered candidate cells for one team. Built per run, then consumed.
pub type SlotList = Vec<GridCoord>;

/// Collect every non-wall cell in `zone`.
///
/// Rows are visited from `zone.min_row` upward and, within a row, columns
/// from `0` to `cols - 1`. The result keeps exactly that order, so it is
/// reproducible before the shuffle is applied.
pub fn build_slots(zone: RowZone, cols: i32, is_wall: impl Fn(i32, i32) -> bool) -> SlotList {
    let mut slots = Vec::new();

    for y in zone.rows() {
        for x in 0..cols {
            if is_wall(x, y) {
                continue;
            }
            slots.push(GridCoord::new(x, y));
        }
    }

    slots
}

/// `build_slots` against a board, restricted to the board's rows.
pub fn build_board_slots<B: Board + ?Sized>(zone: RowZone, board: &B) -> SlotList {
    build_slots(zone.clamp_to(board.rows()), board.cols(), |x, y| board.is_wall(x, y))
}

/// Fisher–Yates shuffle in place.
///
/// For `i` from `len - 1` down to `1`, draws `j` from `[0, i]` and swaps
/// positions `i` and `j`.
pub fn shuffle<T, R: UniformSource + ?Sized>(slots: &mut [T], rng: &mut R) {
    for i in (1..slots.len()).rev() {
        let j = rng.index_inclusive(i);
        slots.swap(i, j);
    }
}
