use crate::parsers::{ParseResult, Span};
use nom::{
    branch::alt,
    bytes::complete::is_not,
    character::complete::{char, line_ending, space0, space1},
    combinator::{eof, opt, value},
    multi::many0,
    sequence::{pair, tuple},
};

/// Consumes any number of blank lines and `;` comment lines. Always
/// succeeds, possibly consuming nothing.
pub fn skip_blank_and_comment_lines<'a, S: Into<Span<'a>>>(input: S) -> ParseResult<'a, ()> {
    value(
        (),
        many0(alt((
            value((), pair(space0, line_ending)),
            value(
                (),
                tuple((space0, char(';'), opt(is_not("\r\n")), alt((line_ending, eof)))),
            ),
            value((), pair(space1, eof)),
        ))),
    )(input.into())
}
