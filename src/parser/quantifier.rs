use super::{
    super::cst::{Node, NodeKind, builder::NodeBuilder, builder::leaf},
    Parser, parse_decimal,
};

/// Repetition before laziness is known.
enum Repeat {
    ZeroOrMore,
    OneOrMore,
    Optional,
    Count { min: u32, max: Option<u32> },
}

impl Repeat {
    fn into_kind(self, lazy: bool) -> NodeKind {
        match self {
            Repeat::ZeroOrMore => NodeKind::ZeroOrMore { lazy },
            Repeat::OneOrMore => NodeKind::OneOrMore { lazy },
            Repeat::Optional => NodeKind::Optional { lazy },
            Repeat::Count { min, max } => NodeKind::CountQuantifier { lazy, min, max },
        }
    }
}

impl Parser<'_> {
    /// Parses the quantifier following an atom, if any.
    ///
    /// A `{` that doesn't have the shape of a count quantifier is left in
    /// place, to be read as a literal character.
    pub(super) fn parse_quantifier(&mut self) -> Option<Node> {
        // The kind is settled once laziness is known.
        let mut quantifier = NodeBuilder::new(NodeKind::Token, self.scanner.tell());

        let repeat = match self.scanner.peek()? {
            '*' => {
                self.expect_token(&mut quantifier, "*");
                Repeat::ZeroOrMore
            }
            '+' => {
                self.expect_token(&mut quantifier, "+");
                Repeat::OneOrMore
            }
            '?' => {
                self.expect_token(&mut quantifier, "?");
                Repeat::Optional
            }
            '{' if self.scanner.is_count_quantifier() => self.parse_count(&mut quantifier),
            _ => return None,
        };

        let lazy_start = self.scanner.tell();
        let lazy = self.scanner.consume('?');
        if lazy {
            quantifier.push(leaf(NodeKind::Lazy, lazy_start, self.scanner.tell()));
        }

        quantifier.set_kind(repeat.into_kind(lazy));
        Some(quantifier.finish(self.scanner.tell()))
    }

    /// Parses `{n}`, `{n,}` or `{n,m}`, whose shape the scanner has already
    /// checked.
    fn parse_count(&mut self, quantifier: &mut NodeBuilder) -> Repeat {
        self.expect_token(quantifier, "{");

        let min = self.parse_decimal_digits(quantifier).unwrap_or_default();
        let mut max = Some(min);

        if self.scanner.peek() == Some(',') {
            self.expect_token(quantifier, ",");
            max = self.parse_decimal_digits(quantifier);
        }

        self.expect_token(quantifier, "}");

        Repeat::Count { min, max }
    }

    /// Parses a run of digits into a `DecimalDigits` child of `parent`.
    fn parse_decimal_digits(&mut self, parent: &mut NodeBuilder) -> Option<u32> {
        let start = self.scanner.tell();
        let digits = self.scanner.consume_while(|c| c.is_ascii_digit());

        if digits.is_empty() {
            return None;
        }

        parent.push(leaf(NodeKind::DecimalDigits, start, self.scanner.tell()));
        Some(parse_decimal(digits))
    }
}
