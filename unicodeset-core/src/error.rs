use thiserror::Error;

/// A convenience alias for results returned by this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while lexing, parsing, or resolving a
/// pattern.
///
/// Every variant carries the byte offset in the original pattern text where
/// the problem was detected. Parsing stops at the first error; nothing in
/// this crate attempts recovery.
#[derive(Clone, Debug, Error, Eq, PartialEq)]
pub enum Error {
    /// A `[` (or `[:`) was never closed.
    #[error("unbalanced bracket at byte {offset}")]
    UnbalancedBracket {
        /// Byte offset of the unmatched opening delimiter.
        offset: usize,
    },

    /// A `{` (or the brace of a `\p{...}`/`\P{...}` body) was never closed.
    #[error("unbalanced brace at byte {offset}")]
    UnbalancedBrace {
        /// Byte offset of the unmatched opening delimiter.
        offset: usize,
    },

    /// A `'` literal run was never closed.
    #[error("unterminated quote at byte {offset}")]
    UnterminatedQuote {
        /// Byte offset of the opening quote.
        offset: usize,
    },

    /// A `\u`, `\U`, or `\x` escape was malformed, or named a codepoint past
    /// `U+10FFFF`.
    #[error("bad escape at byte {offset}")]
    BadEscape {
        /// Byte offset of the backslash that introduced the escape.
        offset: usize,
    },

    /// A `lo-hi` range had `lo > hi`.
    #[error("empty range at byte {offset}")]
    EmptyRange {
        /// Byte offset of the `-` token.
        offset: usize,
    },

    /// A `&` or `-` operator had an operand that wasn't a bracketed set or a
    /// property expression.
    #[error("operator at byte {offset} needs a set operand")]
    OperatorNeedsSet {
        /// Byte offset of the operator.
        offset: usize,
    },

    /// A `[: :]` or `\p{}` body was empty.
    #[error("empty property name at byte {offset}")]
    EmptyPropertyName {
        /// Byte offset of the empty body.
        offset: usize,
    },

    /// A property name didn't match anything the resolver knows about.
    #[error("unknown property {name:?} at byte {offset}")]
    UnknownProperty {
        /// Byte offset of the property reference.
        offset: usize,
        /// The (canonicalized) property name that wasn't recognized.
        name: String,
    },

    /// A property name was recognized but the value wasn't one of its
    /// accepted values.
    #[error("unknown value {value:?} for property {property:?} at byte {offset}")]
    UnknownPropertyValue {
        /// Byte offset of the property reference.
        offset: usize,
        /// The (canonicalized) property name.
        property: String,
        /// The (canonicalized) value that wasn't recognized.
        value: String,
    },

    /// Bracket nesting exceeded the configured depth limit.
    #[error("nesting depth exceeded the limit of {limit} at byte {offset}")]
    DepthExceeded {
        /// Byte offset where the limit was crossed.
        offset: usize,
        /// The configured limit.
        limit: u32,
    },
}

impl Error {
    /// The byte offset in the pattern text where this error was detected.
    pub fn offset(&self) -> usize {
        match *self {
            Error::UnbalancedBracket { offset }
            | Error::UnbalancedBrace { offset }
            | Error::UnterminatedQuote { offset }
            | Error::BadEscape { offset }
            | Error::EmptyRange { offset }
            | Error::OperatorNeedsSet { offset }
            | Error::EmptyPropertyName { offset }
            | Error::UnknownProperty { offset, .. }
            | Error::UnknownPropertyValue { offset, .. }
            | Error::DepthExceeded { offset, .. } => offset,
        }
    }
}
