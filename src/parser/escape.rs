use super::{
    super::{
        ErrorKind, Result, SyntaxError,
        cst::{Node, NodeKind, builder::NodeBuilder, builder::leaf},
        scanner::{Context, Escape, is_group_name_char, is_property_char},
    },
    Parser, parse_decimal,
};

impl Parser<'_> {
    /// Parses an escape sequence starting at `\`.
    ///
    /// `\b` and `\B` at term level are assertions and never reach this
    /// function; inside a class `\b` is a control escape.
    pub(super) fn parse_escape(&mut self, context: Context) -> Result<Node> {
        let start = self.scanner.tell();
        let backslash = self.scanner.consume('\\');
        debug_assert!(backslash, "expected '\\' at {start}");

        if self.scanner.is_at_end() {
            return Err(self.error(ErrorKind::UnterminatedPattern));
        }

        let Some(escape) = self.scanner.escape(context) else {
            return Err(SyntaxError::new(ErrorKind::InvalidEscape, start));
        };

        match escape {
            Escape::Decimal => {
                let digits = self.scanner.consume_while(|c| c.is_ascii_digit());
                let index = parse_decimal(digits);
                Ok(leaf(NodeKind::DecimalEscape { index }, start, self.scanner.tell()))
            }
            Escape::CharacterClass => {
                let class = self.scanner.advance().unwrap_or_default();
                Ok(leaf(
                    NodeKind::CharacterClassEscape { class },
                    start,
                    self.scanner.tell(),
                ))
            }
            Escape::UnicodeProperty => self.parse_unicode_property(start),
            Escape::NamedBackreference => self.parse_named_backreference(start),
            Escape::Control => {
                self.scanner.advance();
                Ok(leaf(NodeKind::ControlEscape, start, self.scanner.tell()))
            }
            Escape::ControlLetter => {
                self.scanner.advance();
                self.require(start, |c| c.is_ascii_alphabetic())?;
                self.scanner.advance();
                Ok(leaf(NodeKind::ControlLetterEscape, start, self.scanner.tell()))
            }
            Escape::Identity => {
                self.scanner.advance();
                Ok(leaf(NodeKind::IdentityEscape, start, self.scanner.tell()))
            }
        }
    }

    /// Checks that the next character of the escape starting at `start`
    /// satisfies `pred`, without consuming it.
    fn require(&self, start: usize, pred: impl Fn(char) -> bool) -> Result<()> {
        match self.scanner.peek() {
            Some(c) if pred(c) => Ok(()),
            Some(_) => Err(SyntaxError::new(ErrorKind::InvalidEscape, start)),
            None => Err(self.error(ErrorKind::UnterminatedPattern)),
        }
    }

    /// Parses `\p{...}` or `\P{...}`, with the scanner at the `p`.
    fn parse_unicode_property(&mut self, start: usize) -> Result<Node> {
        let class = self.scanner.advance().unwrap_or_default();
        self.require(start, |c| c == '{')?;

        let mut escape = NodeBuilder::new(NodeKind::CharacterClassEscape { class }, start);
        escape.token(start, self.scanner.tell());
        self.expect_token(&mut escape, "{");
        escape.push(self.parse_unicode_property_expression()?);

        if self.scanner.peek() != Some('}') {
            return Err(self.error(ErrorKind::InvalidUnicodeProperty));
        }
        self.expect_token(&mut escape, "}");

        Ok(escape.finish(self.scanner.tell()))
    }

    /// Parses `value` or `name=value`.
    fn parse_unicode_property_expression(&mut self) -> Result<Node> {
        let start = self.scanner.tell();
        let mut expression = NodeBuilder::new(NodeKind::UnicodePropertyExpression, start);

        if self.scanner.consume_while(is_property_char).is_empty() {
            return Err(self.error(ErrorKind::InvalidUnicodeProperty));
        }

        if self.scanner.peek() == Some('=') {
            expression.push(leaf(
                NodeKind::UnicodePropertyName,
                start,
                self.scanner.tell(),
            ));
            self.expect_token(&mut expression, "=");

            let value_start = self.scanner.tell();
            if self.scanner.consume_while(is_property_char).is_empty() {
                return Err(self.error(ErrorKind::InvalidUnicodeProperty));
            }
            expression.push(leaf(
                NodeKind::UnicodePropertyValue,
                value_start,
                self.scanner.tell(),
            ));
        } else {
            expression.push(leaf(
                NodeKind::UnicodePropertyValue,
                start,
                self.scanner.tell(),
            ));
        }

        Ok(expression.finish(self.scanner.tell()))
    }

    /// Parses `\k<name>`, with the scanner at the `k`.
    fn parse_named_backreference(&mut self, start: usize) -> Result<Node> {
        self.scanner.advance();

        let mut escape = NodeBuilder::new(NodeKind::BackreferenceEscape, start);
        escape.token(start, self.scanner.tell());

        self.require(start, |c| c == '<')?;
        self.expect_token(&mut escape, "<");

        self.require(start, is_group_name_char)?;
        let Some(name) = self.parse_group_name() else {
            return Err(SyntaxError::new(ErrorKind::InvalidEscape, start));
        };
        escape.push(name);

        self.require(start, |c| c == '>')?;
        self.expect_token(&mut escape, ">");

        Ok(escape.finish(self.scanner.tell()))
    }
}
