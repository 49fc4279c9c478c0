use itertools::Itertools;
use num_bigint::BigUint;
use num_traits::{One, Zero};

use crate::grid::Grid;
use crate::place::Landing;

fn low_mask(bits: usize) -> BigUint {
    (BigUint::one() << bits) - 1u32
}

/// Remove the rows in `cleared` (sorted, distinct) from one column, sliding
/// everything above each removed row down to close the gap.
pub fn compact(column: &BigUint, cleared: &[usize]) -> BigUint {
    let mut out = BigUint::zero();
    let mut start = 0;
    for (shift, &row) in cleared.iter().enumerate() {
        if row > start {
            let segment = (column >> start) & low_mask(row - start);
            out |= segment << (start - shift);
        }
        start = row + 1;
    }
    out | ((column >> start) << (start - cleared.len()))
}

/// Clear any rows the last landing completed. Returns how many went away.
pub fn clear_rows(grid: &mut Grid, landing: &Landing) -> usize {
    let full = grid.full_rows();
    if full.is_zero() {
        return 0;
    }
    let cleared = landing
        .span()
        .filter(|row| full.bit(*row as u64))
        .collect_vec();
    if cleared.is_empty() {
        return 0;
    }
    log::debug!("clearing rows {:?}", cleared);
    for column in grid.columns_mut() {
        *column = compact(column, &cleared);
    }
    cleared.len()
}
