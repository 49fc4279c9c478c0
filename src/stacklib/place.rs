use crate::command::Command;
use crate::error::DropError;
use crate::grid::Grid;
use crate::shape::Shape;

/// Where a piece came to rest: its bottom row and how many rows it spans.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    pub offset: usize,
    pub rows: usize,
}

impl Landing {
    /// Rows the piece touched; only these can have become full.
    pub fn span(&self) -> std::ops::Range<usize> {
        self.offset..self.offset + self.rows
    }
}

/// Find the lowest offset at which `shape` fits with its left edge at `left`.
///
/// Each filled shape column would rest on its own stack at `height - lowest`;
/// the piece stops at the first of those it hits, i.e. the largest. Columns
/// past the edge of the grid count as empty.
pub fn landing_offset(grid: &Grid, left: usize, shape: &Shape) -> usize {
    shape
        .lowest_rows()
        .iter()
        .enumerate()
        .filter_map(|(i, lowest)| {
            let lowest = (*lowest)?;
            let height = grid.column_height(left + i).unwrap_or(0);
            Some(height.saturating_sub(lowest))
        })
        .max()
        .unwrap_or(0)
}

/// Drop the commanded piece straight down and merge it into the grid.
pub fn drop_piece(grid: &mut Grid, command: &Command) -> Result<Landing, DropError> {
    let shape = command.kind.shape();
    let fits = command
        .column
        .checked_add(shape.width())
        .map_or(false, |right| right <= grid.width());
    if !fits {
        return Err(DropError::OutOfBounds {
            position: command.position,
            kind: command.kind,
            column: command.column,
            width: grid.width(),
        });
    }
    let offset = landing_offset(grid, command.column, shape);
    for (i, mask) in shape.columns().iter().enumerate() {
        if *mask != 0 {
            let merged = grid.merge(command.column + i, *mask, offset);
            debug_assert!(merged.is_some(), "bounds were checked above");
        }
    }
    log::debug!(
        "{}{} landed at row {}",
        command.kind,
        command.column,
        offset
    );
    Ok(Landing {
        offset,
        rows: shape.height(),
    })
}
