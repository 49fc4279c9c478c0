pub mod clear;
pub mod command;
pub mod driver;
pub mod error;
pub mod grid;
pub mod place;
pub mod shape;

pub use clear::clear_rows;
pub use command::{parse_line, Command};
pub use driver::{run_line, simulate, step};
pub use error::DropError;
pub use grid::{Grid, FIELD_WIDTH};
pub use place::{drop_piece, landing_offset, Landing};
pub use shape::{BlockKind, Shape};
