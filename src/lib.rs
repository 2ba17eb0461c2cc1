//! A concrete syntax tree parser for ECMAScript-style regular expression
//! patterns.
//!
//! The parser turns the body of a pattern (without delimiters or flags) into
//! a lossless tree: every node carries the byte span of the text it was
//! built from, and the leaves of the tree cover the input exactly once, in
//! order. It never matches strings against the pattern.
//!
//! ```
//! use ecma_regex_cst::{NodeKind, parse};
//!
//! let pattern = parse(r"(?<year>\d{4})-\d\d").unwrap();
//! assert_eq!(pattern.capture_count(), 1);
//! assert_eq!(pattern.children()[0].kind(), &NodeKind::Term);
//! ```

#![warn(clippy::pedantic, rust_2018_idioms)]
#![allow(clippy::missing_errors_doc, clippy::too_many_lines)]

pub mod cst;
pub mod parser;
pub mod scanner;
pub mod span;
pub mod validate;

pub use self::{
    cst::{CaptureGroup, Lookaround, Node, NodeKind, Pattern},
    parser::parse,
    scanner::Scanner,
    span::Span,
    validate::{diagnostics, parse_and_validate, validate},
};

/// Characters with a syntactic meaning at term level, and the only
/// characters accepted by an identity escape.
///
/// `]`, `}` and a `{` that doesn't start a count quantifier are still read
/// as pattern characters when they appear where an atom is expected.
pub const SYNTAX_CHARS: &[char] = &[
    '^', '$', '\\', '.', '*', '+', '?', '(', ')', '[', ']', '{', '}', '|',
];

/// Returns `true` if `c` is one of [`SYNTAX_CHARS`].
#[inline]
#[must_use]
pub fn is_syntax_char(c: char) -> bool {
    SYNTAX_CHARS.contains(&c)
}

/// The reason a pattern was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorKind {
    /// The pattern ended where more content was required, e.g. after a
    /// trailing `\`.
    #[error("unexpected end of pattern")]
    UnterminatedPattern,

    /// A group was opened but its `)` was never found.
    #[error("unterminated group")]
    UnterminatedGroup,

    /// A character class was opened but its `]` was never found.
    #[error("unterminated character class")]
    UnterminatedCharacterClass,

    /// A `\` was followed by a character no escape accepts.
    #[error("invalid escape sequence")]
    InvalidEscape,

    /// A `\p{...}` or `\P{...}` expression is malformed.
    #[error("invalid unicode property expression")]
    InvalidUnicodeProperty,

    /// A count quantifier has a minimum larger than its maximum.
    #[error("invalid quantifier bounds")]
    InvalidQuantifierBounds,

    /// A character could not be classified, or a quantifier has nothing it
    /// may repeat.
    #[error("unexpected character")]
    UnexpectedCharacter,

    /// A backreference names a group that does not exist.
    #[error("reference to undefined group")]
    UndefinedGroupReference,

    /// Groups are nested deeper than [`parser::MAX_DEPTH`].
    #[error("groups nested too deeply")]
    NestingTooDeep,

    /// Two named groups share a name.
    #[error("duplicate group name")]
    DuplicateGroupName,
}

/// The error returned when a pattern can't be parsed or validated.
///
/// `pos` is a byte offset into the original pattern text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
#[error("{kind} at {pos}")]
pub struct SyntaxError {
    kind: ErrorKind,
    pos: usize,
}

impl SyntaxError {
    #[must_use]
    pub const fn new(kind: ErrorKind, pos: usize) -> Self {
        Self { kind, pos }
    }

    /// Returns the kind of error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the byte offset at which the error occurred.
    #[must_use]
    pub const fn pos(&self) -> usize {
        self.pos
    }
}

pub type Result<T> = std::result::Result<T, SyntaxError>;
