use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;

pub const FIELD_WIDTH: usize = 10;

/// A play field stored as one bitmask per column; bit `i` of a column is set
/// when the cell at height `i` (0 = floor) is filled. Columns grow without
/// bound, so the height is never stored, only derived.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    columns: Vec<BigUint>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(FIELD_WIDTH)
    }
}

impl Grid {
    pub fn new(width: usize) -> Self {
        Self {
            columns: vec![BigUint::zero(); width],
        }
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    /// Highest filled cell across all columns, plus one.
    pub fn height(&self) -> usize {
        self.columns.iter().map(|c| c.bits()).max().unwrap_or(0) as usize
    }

    /// Height of one column. Returns None if the column is out-of-bounds.
    pub fn column_height(&self, column: usize) -> Option<usize> {
        self.columns.get(column).map(|c| c.bits() as usize)
    }

    pub fn column(&self, column: usize) -> Option<&BigUint> {
        self.columns.get(column)
    }

    pub fn columns(&self) -> &[BigUint] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut [BigUint] {
        &mut self.columns
    }

    pub fn get(&self, column: usize, row: usize) -> Option<bool> {
        self.columns.get(column).map(|c| c.bit(row as u64))
    }

    /// OR `mask`, shifted up by `offset` rows, into a column. Returns None if
    /// the column is out-of-bounds.
    pub fn merge(&mut self, column: usize, mask: u32, offset: usize) -> Option<()> {
        let target = self.columns.get_mut(column)?;
        *target |= BigUint::from(mask) << offset;
        Some(())
    }

    /// Bitmask of the rows that are filled in every column.
    pub fn full_rows(&self) -> BigUint {
        let mut columns = self.columns.iter();
        match columns.next() {
            Some(first) => columns.fold(first.clone(), |acc, c| acc & c),
            None => BigUint::zero(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|c| c.is_zero())
    }

    pub fn dump_with<F: Fn(bool) -> char>(&self, f: F) -> String {
        let mut out = String::new();
        for row in (0..self.height()).rev() {
            out.extend(self.columns.iter().map(|c| f(c.bit(row as u64))));
            out.push('\n');
        }
        out.extend(std::iter::repeat('-').take(self.width()));
        out
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dump = self.dump_with(|filled| if filled { '#' } else { '.' });
        write!(f, "{}", dump)
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;

    use super::Grid;

    #[test]
    fn test_small() {
        let mut g = Grid::new(1);
        assert_eq!(g.width(), 1);
        assert_eq!(g.height(), 0);
        assert_eq!(g.get(1, 0), None);
        assert_eq!(g.get(0, 0), Some(false));
        g.merge(0, 0b1, 0);
        assert_eq!(g.get(0, 0), Some(true));
        assert_eq!(g.height(), 1);
        assert_eq!(g.merge(3, 0b1, 0), None);
    }

    #[test]
    fn test_basic() {
        let mut g = Grid::default();
        assert_eq!(g.width(), 10);
        assert!(g.is_empty());
        g.merge(4, 0b101, 2);
        assert_eq!(g.column(4), Some(&BigUint::from(0b10100u32)));
        assert_eq!(g.column_height(4), Some(5));
        assert_eq!(g.column_height(3), Some(0));
        assert_eq!(g.height(), 5);
        assert_eq!(g.height(), g.height());
    }

    #[test]
    fn test_full_rows() {
        let mut g = Grid::new(3);
        g.merge(0, 0b011, 0);
        g.merge(1, 0b111, 0);
        g.merge(2, 0b110, 0);
        assert_eq!(g.full_rows(), BigUint::from(0b010u32));
        assert_eq!(Grid::new(0).full_rows(), BigUint::from(0u32));
    }

    #[test]
    fn test_display() {
        let mut g = Grid::new(3);
        g.merge(0, 0b01, 0);
        g.merge(1, 0b11, 0);
        assert_eq!(g.to_string(), ".#.\n##.\n---");
        assert_eq!(Grid::new(2).to_string(), "--");
    }

    #[test]
    fn test_tall_columns() {
        let mut g = Grid::new(2);
        g.merge(1, 0b1, 500);
        assert_eq!(g.height(), 501);
        assert_eq!(g.get(1, 500), Some(true));
        assert_eq!(g.get(1, 499), Some(false));
    }
}
