//! Parsers for the plain text table format: rows of space separated cells,
//! `.` for an empty cell, closed by a line of dashes. Blank lines and lines
//! starting with `;` between tables are ignored.
//!
//! ```text
//! ; the cyclic group of order 3
//! 0 1 2
//! 1 2 0
//! 2 0 1
//! - - -
//! ```

mod cell;
mod comments;
mod row;
mod separator;
mod table;
mod test_helpers;

#[cfg(test)]
pub(crate) use test_helpers::Match;
pub use test_helpers::UnwrapValue;

use crate::{error::GroupError, parsed_types::TableRows};

pub trait Parser {
    type Item;

    fn parse<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, Self::Item>;

    /// Parse a string slice into the desired type. Discards any remaining
    /// input.
    fn from_str(input: &str) -> Result<Self::Item, nom::Err<ParseError>> {
        let (_, value) = Self::parse(input)?;
        Ok(value)
    }
}

pub type Span<'a> = nom_locate::LocatedSpan<&'a str>;

pub type ParseError<'a> = nom_greedyerror::GreedyError<Span<'a>, nom::error::ErrorKind>;

pub type ParseResult<'a, T, E = ParseError<'a>> = nom::IResult<Span<'a>, T, E>;

/// Re-exports commonly used types.
pub mod preamble {
    pub use crate::parsers::test_helpers::UnwrapValue;
    pub use crate::parsers::Parser;
    pub use crate::parsers::{ParseError, ParseResult, Span};
}

// Parsers
pub use cell::parse_cell;
pub use comments::skip_blank_and_comment_lines;
pub use row::parse_row;
pub use separator::parse_separator;
pub use table::{parse_table, parse_tables};

/// Parses every table in `text`. Unlike [`Parser::from_str`], the whole input
/// must be consumed; leftover text is reported with its position.
pub fn parse_table_text(text: &str) -> Result<Vec<TableRows>, GroupError> {
    let (rest, tables) =
        parse_tables(Span::new(text)).map_err(|e| GroupError::Parse(format!("{:?}", e)))?;

    if !rest.fragment().is_empty() {
        return Err(GroupError::Parse(format!(
            "unexpected input at line {}, column {}",
            rest.location_line(),
            rest.get_utf8_column()
        )));
    }

    Ok(tables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::ORDER_FOUR_TEXT;

    #[test]
    fn parses_fixture_file() {
        let tables = parse_table_text(ORDER_FOUR_TEXT).unwrap();
        assert_eq!(tables.len(), 4);
        assert!(tables.iter().all(|t| t.len() == 4));
        assert_eq!(
            tables[3].rows()[1],
            vec![Some(1), Some(3), Some(0), Some(2)]
        );
    }

    #[test]
    fn empty_text_has_no_tables() {
        assert!(parse_table_text("").unwrap().is_empty());
        assert!(parse_table_text("\n; nothing here\n  \n").unwrap().is_empty());
    }

    #[test]
    fn short_separator_is_rejected() {
        let text = "; order four\n0 1 2 3\n1 0 3 2\n2 3 0 1\n3 2 1 0\n- -\n";
        let err = parse_table_text(text).unwrap_err();
        match err {
            GroupError::Parse(message) => assert!(message.contains("line 2")),
            other => panic!("unexpected error {:?}", other),
        }
    }

    #[test]
    fn reports_position_of_garbage() {
        let err = parse_table_text("0 1\n1 x\n").unwrap_err();
        match err {
            GroupError::Parse(message) => assert!(message.contains("line 2")),
            other => panic!("unexpected error {:?}", other),
        }
    }
}
