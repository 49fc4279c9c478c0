use std::sync::OnceLock;

use derive_more::Display;

#[derive(Debug, Display, PartialEq, Eq, Hash, Clone, Copy)]
pub enum BlockKind {
    Q,
    I,
    S,
    Z,
    T,
    L,
    J,
}

impl BlockKind {
    pub const ALL: [BlockKind; 7] = [
        BlockKind::Q,
        BlockKind::I,
        BlockKind::S,
        BlockKind::Z,
        BlockKind::T,
        BlockKind::L,
        BlockKind::J,
    ];

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'Q' => Some(Self::Q),
            'I' => Some(Self::I),
            'S' => Some(Self::S),
            'Z' => Some(Self::Z),
            'T' => Some(Self::T),
            'L' => Some(Self::L),
            'J' => Some(Self::J),
            _ => None,
        }
    }

    /// Occupancy rows, top row first, as they would be drawn.
    fn rows(&self) -> &'static [&'static str] {
        match self {
            Self::Q => &["11", "11"],
            Self::I => &["1111"],
            Self::S => &["011", "110"],
            Self::Z => &["110", "011"],
            Self::T => &["111", "010"],
            Self::L => &["10", "10", "11"],
            Self::J => &["01", "01", "11"],
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Q => 0,
            Self::I => 1,
            Self::S => 2,
            Self::Z => 3,
            Self::T => 4,
            Self::L => 5,
            Self::J => 6,
        }
    }

    /// Look up the precomputed column masks for this kind.
    pub fn shape(&self) -> &'static Shape {
        &catalog()[self.index()]
    }
}

/// A block shape stored column-wise: bit `i` of `columns[c]` is set when
/// row `i` (counted from the bottom of the shape) of column `c` is filled.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Shape {
    width: usize,
    height: usize,
    columns: Vec<u32>,
    lowest: Vec<Option<usize>>,
}

impl Shape {
    fn from_rows(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut columns = vec![0u32; width];
        // the last row drawn is the bottom of the shape
        for (y, row) in rows.iter().rev().enumerate() {
            for (x, cell) in row.bytes().enumerate() {
                if cell == b'1' {
                    columns[x] |= 1 << y;
                }
            }
        }
        let lowest = columns
            .iter()
            .map(|c| (*c != 0).then(|| c.trailing_zeros() as usize))
            .collect();
        Self {
            width,
            height,
            columns,
            lowest,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn columns(&self) -> &[u32] {
        &self.columns
    }

    /// Lowest filled row of each column, `None` for a column with no cells.
    pub fn lowest_rows(&self) -> &[Option<usize>] {
        &self.lowest
    }

    pub fn cell_count(&self) -> usize {
        self.columns.iter().map(|c| c.count_ones() as usize).sum()
    }
}

fn catalog() -> &'static [Shape; 7] {
    static CATALOG: OnceLock<[Shape; 7]> = OnceLock::new();
    CATALOG.get_or_init(|| BlockKind::ALL.map(|kind| Shape::from_rows(kind.rows())))
}

#[cfg(test)]
mod tests {
    use super::BlockKind;

    #[test]
    fn test_letters() {
        for kind in BlockKind::ALL {
            let letter = kind.to_string().chars().next().unwrap();
            assert_eq!(BlockKind::from_letter(letter), Some(kind));
        }
        assert_eq!(BlockKind::from_letter('X'), None);
        assert_eq!(BlockKind::from_letter('q'), None);
    }

    #[test]
    fn test_columns() {
        assert_eq!(BlockKind::Q.shape().columns(), &[0b11, 0b11]);
        assert_eq!(BlockKind::I.shape().columns(), &[1, 1, 1, 1]);
        assert_eq!(BlockKind::S.shape().columns(), &[0b01, 0b11, 0b10]);
        assert_eq!(BlockKind::Z.shape().columns(), &[0b10, 0b11, 0b01]);
        assert_eq!(BlockKind::T.shape().columns(), &[0b10, 0b11, 0b10]);
        assert_eq!(BlockKind::L.shape().columns(), &[0b111, 0b001]);
        assert_eq!(BlockKind::J.shape().columns(), &[0b001, 0b111]);
    }

    #[test]
    fn test_lowest_rows() {
        assert_eq!(BlockKind::T.shape().lowest_rows(), &[Some(1), Some(0), Some(1)]);
        assert_eq!(BlockKind::Z.shape().lowest_rows(), &[Some(1), Some(0), Some(0)]);
        assert_eq!(BlockKind::L.shape().lowest_rows(), &[Some(0), Some(0)]);
    }

    #[test]
    fn test_dimensions() {
        let shape = BlockKind::L.shape();
        assert_eq!((shape.width(), shape.height()), (2, 3));
        assert_eq!(BlockKind::I.shape().height(), 1);
        for kind in BlockKind::ALL {
            assert_eq!(kind.shape().cell_count(), 4);
        }
    }
}
