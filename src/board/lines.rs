//! Squares lying strictly between two squares on a shared rank, file or diagonal.

use once_cell::sync::Lazy;

use super::types::{Bitboard, Coordinate};

/// `BETWEEN[a][b]` holds the squares strictly between `a` and `b` when they share a
/// line, and is empty otherwise (including for adjacent squares and `a == b`).
static BETWEEN: Lazy<Box<[[u64; 64]; 64]>> = Lazy::new(|| {
    let mut table = Box::new([[0u64; 64]; 64]);
    for from in 0..64 {
        for to in 0..64 {
            table[from][to] = between_mask(from, to);
        }
    }
    table
});

fn between_mask(sq1: usize, sq2: usize) -> u64 {
    let (file1, rank1) = ((sq1 % 8) as i32, (sq1 / 8) as i32);
    let (file2, rank2) = ((sq2 % 8) as i32, (sq2 / 8) as i32);
    let df = file2 - file1;
    let dr = rank2 - rank1;

    if df == 0 && dr == 0 {
        return 0;
    }
    // Not on a rank, file or diagonal
    if df != 0 && dr != 0 && df.abs() != dr.abs() {
        return 0;
    }

    let (step_f, step_r) = (df.signum(), dr.signum());
    let mut mask = 0u64;
    let mut f = file1 + step_f;
    let mut r = rank1 + step_r;
    while f != file2 || r != rank2 {
        mask |= 1u64 << (r * 8 + f);
        f += step_f;
        r += step_r;
    }
    mask
}

/// Squares strictly between `from` and `to`.
#[inline]
#[must_use]
pub(crate) fn between(from: Coordinate, to: Coordinate) -> Bitboard {
    Bitboard(BETWEEN[from.index()][to.index()])
}
