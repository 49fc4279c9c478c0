use derive_more::Display;

use crate::shape::BlockKind;

/// Everything that can abort the simulation of one input line.
///
/// `position` is the 0-based index of the offending token among the
/// non-empty tokens of the line.
#[derive(Debug, Display, PartialEq, Eq, Clone)]
pub enum DropError {
    #[display(fmt = "token {}: unknown block kind {:?}", position, letter)]
    InvalidShape { position: usize, letter: char },
    #[display(
        fmt = "token {}: {:?} is not of the form <kind><column>",
        position,
        token
    )]
    MalformedToken { position: usize, token: String },
    #[display(
        fmt = "token {}: {}{} does not fit in a field {} columns wide",
        position,
        kind,
        column,
        width
    )]
    OutOfBounds {
        position: usize,
        kind: BlockKind,
        column: usize,
        width: usize,
    },
}

impl DropError {
    pub fn position(&self) -> usize {
        match self {
            Self::InvalidShape { position, .. }
            | Self::MalformedToken { position, .. }
            | Self::OutOfBounds { position, .. } => *position,
        }
    }
}

impl std::error::Error for DropError {}
