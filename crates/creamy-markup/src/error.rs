//! Error types for markup parsing.

use thiserror::Error;

/// Result type alias for creamy-markup operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while parsing markup.
///
/// Positions are byte offsets into the parsed text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Syntax error reported by quick-xml.
    #[error("markup syntax error at byte {position}: {message}")]
    Syntax { message: String, position: usize },

    /// The input ended while an element was still open.
    #[error("unclosed element <{name}> opened at byte {position}")]
    UnclosedElement { name: String, position: usize },

    /// An end tag does not match the innermost open element.
    #[error("mismatched end tag at byte {position}: expected </{expected}>, found </{found}>")]
    MismatchedEndTag {
        expected: String,
        found: String,
        position: usize,
    },

    /// An end tag appeared with no element open.
    #[error("unexpected end tag </{name}> at byte {position}")]
    UnexpectedEndTag { name: String, position: usize },

    /// An element carries more than one branch directive.
    #[error("element <{element}> at byte {position} carries both {first} and {second}")]
    ConflictingDirectives {
        element: String,
        first: String,
        second: String,
        position: usize,
    },
}
