use nom::{
    character::complete::{digit1, satisfy},
    combinator::{all_consuming, map_res},
    sequence::pair,
    IResult,
};

use crate::error::DropError;
use crate::shape::BlockKind;

/// One `<kind><column>` token: drop `kind` with its left edge at `column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Command {
    pub position: usize,
    pub kind: BlockKind,
    pub column: usize,
}

fn parse_token(s: &str) -> IResult<&str, (char, usize)> {
    all_consuming(pair(
        satisfy(|c| c.is_ascii_alphabetic()),
        map_res(digit1, |d: &str| d.parse::<usize>()),
    ))(s)
}

impl Command {
    pub fn parse(position: usize, token: &str) -> Result<Self, DropError> {
        let (_, (letter, column)) = parse_token(token).map_err(|_| DropError::MalformedToken {
            position,
            token: token.to_owned(),
        })?;
        let kind =
            BlockKind::from_letter(letter).ok_or(DropError::InvalidShape { position, letter })?;
        Ok(Self {
            position,
            kind,
            column,
        })
    }
}

/// Split a line on commas into commands, skipping empty tokens.
pub fn parse_line(line: &str) -> impl Iterator<Item = Result<Command, DropError>> + '_ {
    line.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .enumerate()
        .map(|(position, token)| Command::parse(position, token))
}
