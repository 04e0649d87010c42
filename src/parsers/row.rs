//! Provides parsers for one row of a table.

use crate::parsers::{parse_cell, ParseResult, Span};
use nom::{
    branch::alt,
    character::complete::{line_ending, space0, space1},
    combinator::eof,
    multi::separated_list1,
    sequence::{pair, preceded, terminated},
};

/// Parses a line of space separated cells, including the line ending.
///
/// ## Example
/// ```
/// # use small_groups::parsers::{parse_row, preamble::*};
/// let row = parse_row(Span::new("0 . 2\n"));
/// assert!(row.is_value(vec![Some(0), None, Some(2)]));
/// ```
pub fn parse_row<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<Option<usize>>> {
    terminated(
        preceded(space0, separated_list1(space1, parse_cell)),
        pair(space0, alt((line_ending, eof))),
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Match;

    #[test]
    fn surrounding_spaces() {
        assert!(parse_row("  1\t0  \n").is_exactly(vec![Some(1), Some(0)]));
    }

    #[test]
    fn last_line_without_newline() {
        assert!(parse_row("2 1 0").is_exactly(vec![Some(2), Some(1), Some(0)]));
    }

    #[test]
    fn windows_line_endings() {
        assert!(parse_row("0 1\r\n").is_exactly(vec![Some(0), Some(1)]));
    }

    #[test]
    fn rejects_separator_line() {
        assert!(parse_row("- - -\n").is_err());
    }

    #[test]
    fn rejects_unknown_symbols() {
        assert!(parse_row("0 x\n").is_err());
        assert!(parse_row("\n").is_err());
    }
}
