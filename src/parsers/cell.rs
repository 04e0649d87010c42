//! Provides parsers for a single cell of a table.

use crate::{
    parsers::{ParseResult, Span},
    tables::EMPTY_SYMBOL,
};
use nom::{
    branch::alt,
    character::complete::{char, digit1},
    combinator::{map, value},
};

/// Parses a cell: an element written in decimal, or `.` for an empty cell.
///
/// Numbers too large for `usize` parse as `usize::MAX`, which is never an
/// element, so the table built from them is rejected later on.
///
/// ## Example
/// ```
/// # use small_groups::parsers::{parse_cell, preamble::*};
/// assert!(parse_cell(Span::new("3")).is_value(Some(3)));
/// assert!(parse_cell(Span::new(".")).is_value(None));
/// assert!(parse_cell(Span::new("-")).is_err());
/// ```
pub fn parse_cell<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Option<usize>> {
    alt((
        value(None, char(EMPTY_SYMBOL)),
        map(digit1, |digits: Span<'a>| {
            Some(digits.fragment().parse::<usize>().unwrap_or(usize::MAX))
        }),
    ))(input.into())
}
