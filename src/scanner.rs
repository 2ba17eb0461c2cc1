//! Classification of the characters ahead of the parser.
//!
//! The [`Scanner`] never builds nodes. It reports which construct starts at
//! the current position, using a bounded amount of lookahead, and lets the
//! parser consume the characters.

use super::{cst::Lookaround, is_syntax_char};

pub mod lookahead;

pub use lookahead::{Atom, Context, Escape, GroupOpener, Lookahead};

const LOOKAROUNDS: [Lookaround; 4] = [
    Lookaround::PositiveLookahead,
    Lookaround::NegativeLookahead,
    Lookaround::PositiveLookbehind,
    Lookaround::NegativeLookbehind,
];

/// Characters accepted in group names.
#[must_use]
pub fn is_group_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Characters accepted in unicode property names and values.
#[must_use]
pub fn is_property_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

/// A cursor over the pattern text. Positions are byte offsets.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Scanner<'a> {
    #[must_use]
    pub fn new(input: &'a str) -> Self {
        Scanner { input, pos: 0 }
    }

    /// Returns the whole pattern text.
    #[must_use]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Returns the current position.
    #[must_use]
    pub fn tell(&self) -> usize {
        self.pos
    }

    #[must_use]
    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    #[must_use]
    pub fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// Returns the `n`-th character after the current one, `peek_nth(0)`
    /// being the same as `peek()`.
    #[must_use]
    pub fn peek_nth(&self, n: usize) -> Option<char> {
        self.rest().chars().nth(n)
    }

    pub fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consumes `c` if it is the next character.
    pub fn consume(&mut self, c: char) -> bool {
        if self.peek() == Some(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consumes `s` if the input continues with it.
    pub fn consume_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    /// Consumes the longest run of characters matching `pred` and returns
    /// it, possibly empty.
    pub fn consume_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let rest = self.rest();
        let len = rest.find(|c: char| !pred(c)).unwrap_or(rest.len());
        self.pos += len;
        &rest[..len]
    }

    /// Classifies what starts at the current position at term level.
    ///
    /// Candidates are tried in a fixed order: assertions, groups, classes,
    /// escapes and finally literal characters.
    #[must_use]
    pub fn lookahead(&self) -> Lookahead {
        let Some(c) = self.peek() else {
            return Lookahead::End;
        };

        match c {
            '|' => Lookahead::Alternation,
            ')' => Lookahead::GroupClose,
            '^' => Lookahead::Atom(Atom::StartAssertion),
            '$' => Lookahead::Atom(Atom::EndAssertion),
            '\\' => match self.peek_nth(1) {
                Some('b') => Lookahead::Atom(Atom::BoundaryAssertion),
                Some('B') => Lookahead::Atom(Atom::NonBoundaryAssertion),
                _ => Lookahead::Atom(Atom::Escape),
            },
            '(' => Lookahead::Atom(Atom::Group(self.group_opener())),
            '[' => Lookahead::Atom(Atom::CharacterClass),
            '.' => Lookahead::Atom(Atom::AnyCharacter),
            '*' | '+' | '?' => Lookahead::Quantifier,
            '{' if self.is_count_quantifier() => Lookahead::Quantifier,
            '\n' => Lookahead::LineFeed,
            _ => Lookahead::Atom(Atom::PatternCharacter),
        }
    }

    /// Determines the kind of group starting at the current `(`.
    fn group_opener(&self) -> GroupOpener {
        let rest = self.rest();

        if let Some(lookaround) = LOOKAROUNDS
            .into_iter()
            .find(|lookaround| rest.starts_with(lookaround.opener()))
        {
            return GroupOpener::Lookaround(lookaround);
        }

        if rest.starts_with("(?:") {
            return GroupOpener::NonCapturing;
        }

        if let Some(after) = rest.strip_prefix("(?<") {
            let name_len = after
                .find(|c: char| !is_group_name_char(c))
                .unwrap_or(after.len());
            if name_len > 0 && after[name_len..].starts_with('>') {
                return GroupOpener::NamedCapture;
            }
        }

        GroupOpener::AnonymousCapture
    }

    /// Returns `true` if the input continues with `{n}`, `{n,}` or `{n,m}`.
    #[must_use]
    pub fn is_count_quantifier(&self) -> bool {
        let Some(rest) = self.rest().strip_prefix('{') else {
            return false;
        };
        let digits = |s: &str| s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());

        let min_len = digits(rest);
        if min_len == 0 {
            return false;
        }

        let rest = &rest[min_len..];
        let rest = match rest.strip_prefix(',') {
            Some(rest) => &rest[digits(rest)..],
            None => rest,
        };

        rest.starts_with('}')
    }

    /// Selects the escape family for the character following a `\`, which
    /// must already be consumed.
    ///
    /// Returns `None` if no family accepts the character, including when the
    /// input is exhausted.
    #[must_use]
    pub fn escape(&self, context: Context) -> Option<Escape> {
        let c = self.peek()?;

        let escape = match (c, context) {
            ('1'..='9', Context::Term) if self.peek_nth(1).is_some_and(|c| c.is_ascii_digit()) => {
                Escape::Decimal
            }
            ('d' | 'D' | 's' | 'S' | 'w' | 'W', _) => Escape::CharacterClass,
            ('p' | 'P', _) => Escape::UnicodeProperty,
            ('k', Context::Term) => Escape::NamedBackreference,
            ('f' | 'n' | 'r' | 't' | 'v' | '0', _) | ('b', Context::Class) => Escape::Control,
            ('c', _) => Escape::ControlLetter,
            ('-', Context::Class) => Escape::Identity,
            (c, _) if is_syntax_char(c) => Escape::Identity,
            _ => return None,
        };

        Some(escape)
    }
}
