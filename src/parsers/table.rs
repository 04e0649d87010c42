//! Provides parsers for whole tables.

use crate::{
    parsed_types::TableRows,
    parsers::{parse_row, parse_separator, skip_blank_and_comment_lines, ParseResult, Span},
};
use nom::{
    combinator::{map, opt, verify},
    multi::{many0, many1},
    sequence::{pair, preceded, terminated},
};

/// Parses one table: at least one row, optionally closed by a separator line
/// with one dash per row. A table also ends at the first line that is not a
/// row, so blank lines can stand in for separators.
///
/// ## Example
/// ```
/// # use small_groups::parsed_types::TableRows;
/// # use small_groups::parsers::{parse_table, preamble::*};
/// let input = "0 1\n1 0\n- -\n";
/// let table = parse_table(Span::new(input));
/// assert!(table.is_value(TableRows::new(vec![
///     vec![Some(0), Some(1)],
///     vec![Some(1), Some(0)],
/// ])));
/// ```
pub fn parse_table<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, TableRows> {
    map(
        verify(
            pair(many1(parse_row), opt(parse_separator)),
            |(rows, dashes): &(Vec<Vec<Option<usize>>>, Option<usize>)| {
                dashes.map_or(true, |dashes| dashes == rows.len())
            },
        ),
        |(rows, _)| TableRows::new(rows),
    )(input.into())
}

/// Parses a sequence of tables separated by blank and comment lines.
pub fn parse_tables<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, Vec<TableRows>> {
    preceded(
        skip_blank_and_comment_lines,
        many0(terminated(parse_table, skip_blank_and_comment_lines)),
    )(input.into())
}

impl crate::parsers::Parser for TableRows {
    type Item = TableRows;

    /// Parses a table.
    ///
    /// ## See also
    /// See [`parse_table`].
    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item> {
        parse_table(input)
    }
}
