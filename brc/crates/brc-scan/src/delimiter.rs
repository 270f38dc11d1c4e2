//! Delimiter classification.
//!
//! This module defines the three delimiter pairs the checker tracks and
//! the [`OpenMarker`] record pushed when an opener is scanned.

use brc_util::Span;

/// One of the three delimiter pairs: `()`, `{}`, `[]`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Delimiter {
    /// `(` and `)`
    Paren,
    /// `{` and `}`
    Brace,
    /// `[` and `]`
    Bracket,
}

impl Delimiter {
    /// Classifies an opening delimiter character.
    ///
    /// # Example
    ///
    /// ```
    /// use brc_scan::delimiter::Delimiter;
    ///
    /// assert_eq!(Delimiter::from_opener('('), Some(Delimiter::Paren));
    /// assert_eq!(Delimiter::from_opener(')'), None);
    /// assert_eq!(Delimiter::from_opener('x'), None);
    /// ```
    pub fn from_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Paren),
            '{' => Some(Self::Brace),
            '[' => Some(Self::Bracket),
            _ => None,
        }
    }

    /// Classifies a closing delimiter character.
    pub fn from_closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Paren),
            '}' => Some(Self::Brace),
            ']' => Some(Self::Bracket),
            _ => None,
        }
    }

    /// Returns the opening character of this pair.
    pub const fn opener(self) -> char {
        match self {
            Self::Paren => '(',
            Self::Brace => '{',
            Self::Bracket => '[',
        }
    }

    /// Returns the closing character of this pair.
    pub const fn closer(self) -> char {
        match self {
            Self::Paren => ')',
            Self::Brace => '}',
            Self::Bracket => ']',
        }
    }
}

/// A recorded opening delimiter awaiting its matching closer.
///
/// Created when an opener is scanned in code mode; popped when any closer
/// arrives, or reported as unclosed at end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OpenMarker {
    /// Which pair was opened.
    pub delimiter: Delimiter,
    /// Where the opener appeared (1-based line and character column).
    pub span: Span,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_opener() {
        assert_eq!(Delimiter::from_opener('('), Some(Delimiter::Paren));
        assert_eq!(Delimiter::from_opener('{'), Some(Delimiter::Brace));
        assert_eq!(Delimiter::from_opener('['), Some(Delimiter::Bracket));
        assert_eq!(Delimiter::from_opener(']'), None);
        assert_eq!(Delimiter::from_opener('<'), None);
    }

    #[test]
    fn test_from_closer() {
        assert_eq!(Delimiter::from_closer(')'), Some(Delimiter::Paren));
        assert_eq!(Delimiter::from_closer('}'), Some(Delimiter::Brace));
        assert_eq!(Delimiter::from_closer(']'), Some(Delimiter::Bracket));
        assert_eq!(Delimiter::from_closer('('), None);
        assert_eq!(Delimiter::from_closer('>'), None);
    }

    #[test]
    fn test_pairing_round_trip() {
        for delim in [Delimiter::Paren, Delimiter::Brace, Delimiter::Bracket] {
            assert_eq!(Delimiter::from_opener(delim.opener()), Some(delim));
            assert_eq!(Delimiter::from_closer(delim.closer()), Some(delim));
        }
    }

    #[test]
    fn test_open_marker() {
        let marker = OpenMarker {
            delimiter: Delimiter::Bracket,
            span: Span::new(2, 9),
        };
        assert_eq!(marker.delimiter.closer(), ']');
        assert_eq!(marker.span.to_string(), "2:9");
    }
}
