// src/i18n/identifier.rs
use crate::core::constants::{EMPTY_STRING_ID, LITERAL_PREFIX};

/// A text identifier as handed in by UI code.
///
/// Raw strings are classified once by [`Identifier::parse`]; resolution then
/// dispatches on the variant instead of sniffing the string again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Identifier<'a> {
    /// No identifier at all, resolves to the empty string.
    Empty,
    /// `emptyString_msg`, resolves to a single punctuation space.
    EmptySentinel,
    /// `@`-prefixed static text, returned without lookup.
    Literal(&'a str),
    /// Regular identifier looked up in the translation table.
    Lookup(&'a str),
}

impl<'a> Identifier<'a> {
    pub fn parse(raw: Option<&'a str>) -> Self {
        match raw {
            None => Self::Empty,
            Some(EMPTY_STRING_ID) => Self::EmptySentinel,
            Some(id) => match id.strip_prefix(LITERAL_PREFIX) {
                Some(text) => Self::Literal(text),
                None => Self::Lookup(id),
            },
        }
    }
}

impl<'a> From<&'a str> for Identifier<'a> {
    fn from(raw: &'a str) -> Self {
        Self::parse(Some(raw))
    }
}

impl<'a> From<Option<&'a str>> for Identifier<'a> {
    fn from(raw: Option<&'a str>) -> Self {
        Self::parse(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_variants() {
        assert_eq!(Identifier::parse(None), Identifier::Empty);
        assert_eq!(
            Identifier::parse(Some("emptyString_msg")),
            Identifier::EmptySentinel
        );
        assert_eq!(
            Identifier::parse(Some("@Hello")),
            Identifier::Literal("Hello")
        );
        assert_eq!(
            Identifier::parse(Some("ok_action")),
            Identifier::Lookup("ok_action")
        );
    }

    #[test]
    fn test_only_leading_at_marks_literal() {
        assert_eq!(Identifier::from("@"), Identifier::Literal(""));
        assert_eq!(Identifier::from("@@x"), Identifier::Literal("@x"));
        assert_eq!(
            Identifier::from("mail@host_label"),
            Identifier::Lookup("mail@host_label")
        );
    }
}
