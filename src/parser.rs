use log::{debug, trace};

use super::{
    ErrorKind, Result, SyntaxError,
    cst::{
        Node, NodeKind, Pattern,
        builder::{NodeBuilder, leaf},
    },
    scanner::{Atom, Context, Lookahead, Scanner},
};

mod class;
mod escape;
mod group;
mod quantifier;

/// The maximum number of groups that may be open at the same time.
pub const MAX_DEPTH: usize = 128;

/// Parses the body of a regular expression into a concrete syntax tree.
///
/// `pattern` must not include delimiters or flags.
///
/// # Errors
///
/// If the pattern is not syntactically valid, a [`SyntaxError`] with the
/// offset of the first problem is returned.
pub fn parse(pattern: &str) -> Result<Pattern> {
    let result = Parser::new(pattern).parse();

    match &result {
        Ok(parsed) => trace!(
            "parsed pattern of {} bytes with {} capture groups",
            pattern.len(),
            parsed.capture_count()
        ),
        Err(err) => debug!("failed to parse pattern {pattern:?}: {err}"),
    }

    result
}

/// Converts a pattern string into a [`Pattern`].
struct Parser<'a> {
    scanner: Scanner<'a>,
    capture_count: usize,
    /// The number of groups currently open.
    depth: usize,
}

impl<'a> Parser<'a> {
    fn new(pattern: &'a str) -> Self {
        Parser {
            scanner: Scanner::new(pattern),
            capture_count: 0,
            depth: 0,
        }
    }

    fn parse(mut self) -> Result<Pattern> {
        let root = self.parse_pattern()?;

        // Only an unmatched `)` can stop the top-level pattern early.
        if !self.scanner.is_at_end() {
            return Err(self.error(ErrorKind::UnexpectedCharacter));
        }

        Ok(Pattern::new(self.source(), root, self.capture_count))
    }

    fn source(&self) -> &'a str {
        self.scanner.input()
    }

    fn error(&self, kind: ErrorKind) -> SyntaxError {
        SyntaxError::new(kind, self.scanner.tell())
    }

    /// Consumes `text`, already known to come next, as a [`NodeKind::Token`]
    /// child of `builder`.
    fn expect_token(&mut self, builder: &mut NodeBuilder, text: &str) {
        let start = self.scanner.tell();
        let consumed = self.scanner.consume_str(text);
        debug_assert!(consumed, "expected {text:?} at {start}");
        builder.token(start, self.scanner.tell());
    }

    /// Consumes `text`, already known to come next, as a leaf of `kind`.
    fn expect_leaf(&mut self, kind: NodeKind, text: &str) -> Node {
        let start = self.scanner.tell();
        let consumed = self.scanner.consume_str(text);
        debug_assert!(consumed, "expected {text:?} at {start}");
        leaf(kind, start, self.scanner.tell())
    }

    /// Parses a disjunction or a term, stopping before a `)` or at the end
    /// of the input.
    fn parse_pattern(&mut self) -> Result<Node> {
        let start = self.scanner.tell();
        let mut pattern = NodeBuilder::new(NodeKind::Pattern, start);
        let first = self.parse_term()?;

        if self.scanner.peek() != Some('|') {
            if let Some(term) = first {
                pattern.push(term);
            }
            return Ok(pattern.finish(self.scanner.tell()));
        }

        let mut disjunction = NodeBuilder::new(NodeKind::Disjunction, start);
        if let Some(term) = first {
            disjunction.push(term);
        }

        while self.scanner.peek() == Some('|') {
            self.expect_token(&mut disjunction, "|");
            if let Some(term) = self.parse_term()? {
                disjunction.push(term);
            }
        }

        pattern.push(disjunction.finish(self.scanner.tell()));
        Ok(pattern.finish(self.scanner.tell()))
    }

    /// Parses a run of atoms and their quantifiers. Returns `None` for an
    /// empty run.
    fn parse_term(&mut self) -> Result<Option<Node>> {
        let mut term = NodeBuilder::new(NodeKind::Term, self.scanner.tell());

        loop {
            let atom = match self.scanner.lookahead() {
                Lookahead::End | Lookahead::Alternation | Lookahead::GroupClose => break,
                Lookahead::Quantifier => {
                    return Err(self.error(ErrorKind::UnexpectedCharacter));
                }
                Lookahead::LineFeed => {
                    let start = self.scanner.tell();
                    self.scanner.advance();
                    term.token(start, self.scanner.tell());
                    continue;
                }
                Lookahead::Atom(atom) => self.parse_atom(atom)?,
            };

            term.push(atom);

            if let Some(quantifier) = self.parse_quantifier() {
                term.push(quantifier);
            }
        }

        if term.is_empty() {
            return Ok(None);
        }

        Ok(Some(term.finish(self.scanner.tell())))
    }

    fn parse_atom(&mut self, atom: Atom) -> Result<Node> {
        match atom {
            Atom::StartAssertion => Ok(self.expect_leaf(NodeKind::StartAssertion, "^")),
            Atom::EndAssertion => Ok(self.expect_leaf(NodeKind::EndAssertion, "$")),
            Atom::BoundaryAssertion => Ok(self.expect_leaf(NodeKind::BoundaryAssertion, "\\b")),
            Atom::NonBoundaryAssertion => {
                Ok(self.expect_leaf(NodeKind::NonBoundaryAssertion, "\\B"))
            }
            Atom::AnyCharacter => Ok(self.expect_leaf(NodeKind::AnyCharacter, ".")),
            Atom::Group(opener) => self.parse_group(opener),
            Atom::CharacterClass => self.parse_class(),
            Atom::Escape => self.parse_escape(Context::Term),
            Atom::PatternCharacter => {
                let start = self.scanner.tell();
                self.scanner.advance();
                Ok(leaf(NodeKind::PatternCharacter, start, self.scanner.tell()))
            }
        }
    }
}

/// Converts a run of ASCII digits into a number, saturating at
/// [`u32::MAX`].
fn parse_decimal(digits: &str) -> u32 {
    digits.parse().unwrap_or(u32::MAX)
}
