use crate::{
    parsers::{ParseResult, Span},
    tables::SEPARATOR_SYMBOL,
};
use nom::{
    branch::alt,
    character::complete::{char, line_ending, space0, space1},
    combinator::{eof, map},
    multi::separated_list1,
    sequence::tuple,
};

/// Parses the dashed line closing a table and returns the number of dashes.
///
/// ## Example
/// ```
/// # use small_groups::parsers::{parse_separator, preamble::*};
/// let dashes = parse_separator(Span::new(" - - -  \n")).unwrap_value();
/// assert_eq!(dashes, 3);
/// ```
pub fn parse_separator<'a, T: Into<Span<'a>>>(input: T) -> ParseResult<'a, usize> {
    map(
        tuple((
            space0,
            separated_list1(space1, char(SEPARATOR_SYMBOL)),
            space0,
            alt((line_ending, eof)),
        )),
        |(_, dashes, _, _)| dashes.len(),
    )(input.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parsers::Match;

    #[test]
    fn counts_dashes() {
        assert!(parse_separator("- - - -\n").is_exactly(4));
        assert!(parse_separator("-").is_exactly(1));
    }

    #[test]
    fn rejects_rows() {
        assert!(parse_separator("0 1\n").is_err());
    }
}
