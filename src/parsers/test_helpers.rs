//! Helpers for checking parser output in tests and doc examples.

use crate::parsers::ParseResult;

pub trait UnwrapValue<T> {
    /// Whether the parser succeeded with `value`, regardless of any input
    /// left over.
    fn is_value(&self, value: T) -> bool;

    /// Returns the parsed value, panicking if the parser failed.
    fn unwrap_value(self) -> T;
}

impl<'a, T: PartialEq> UnwrapValue<T> for ParseResult<'a, T> {
    fn is_value(&self, value: T) -> bool {
        matches!(self, Ok((_, parsed)) if *parsed == value)
    }

    fn unwrap_value(self) -> T {
        match self {
            Ok((_, value)) => value,
            Err(e) => panic!("parser failed: {:?}", e),
        }
    }
}

#[cfg(test)]
pub(crate) trait Match<T> {
    /// Whether the parser succeeded with `value` and consumed all input.
    fn is_exactly(&self, value: T) -> bool;
}

#[cfg(test)]
impl<'a, T: PartialEq> Match<T> for ParseResult<'a, T> {
    fn is_exactly(&self, value: T) -> bool {
        matches!(self, Ok((rest, parsed)) if rest.fragment().is_empty() && *parsed == value)
    }
}
