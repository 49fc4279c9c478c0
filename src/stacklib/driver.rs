use crate::clear::clear_rows;
use crate::command::{parse_line, Command};
use crate::error::DropError;
use crate::grid::Grid;
use crate::place::drop_piece;

/// Drop one piece and clear whatever rows it completed. Returns the number
/// of rows cleared.
pub fn step(grid: &mut Grid, command: &Command) -> Result<usize, DropError> {
    let landing = drop_piece(grid, command)?;
    Ok(clear_rows(grid, &landing))
}

/// Run every command on a line against a fresh grid and hand back the
/// final grid. Stops at the first bad token.
pub fn simulate(line: &str) -> Result<Grid, DropError> {
    let mut grid = Grid::default();
    for command in parse_line(line) {
        step(&mut grid, &command?)?;
    }
    log::trace!("final grid for {:?}:\n{}", line, grid);
    Ok(grid)
}

/// Stack height left after running a line.
pub fn run_line(line: &str) -> Result<usize, DropError> {
    simulate(line).map(|grid| grid.height())
}
