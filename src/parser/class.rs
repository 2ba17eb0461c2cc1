use super::{
    super::{
        ErrorKind, Result,
        cst::{Node, NodeKind, builder::NodeBuilder, builder::leaf},
        scanner::Context,
    },
    Parser,
};

impl Parser<'_> {
    /// Parses a character class starting at `[`.
    pub(super) fn parse_class(&mut self) -> Result<Node> {
        let mut class = NodeBuilder::new(
            NodeKind::CharacterClass { negated: false },
            self.scanner.tell(),
        );
        self.expect_token(&mut class, "[");

        if self.scanner.peek() == Some('^') {
            class.set_kind(NodeKind::CharacterClass { negated: true });
            self.expect_token(&mut class, "^");
        }

        loop {
            match self.scanner.peek() {
                None => return Err(self.error(ErrorKind::UnterminatedCharacterClass)),
                Some(']') => break,
                Some(_) => {
                    let range = self.parse_class_range()?;
                    class.push(range);
                }
            }
        }

        self.expect_token(&mut class, "]");

        Ok(class.finish(self.scanner.tell()))
    }

    fn parse_class_range(&mut self) -> Result<Node> {
        let mut range = NodeBuilder::new(NodeKind::ClassRange, self.scanner.tell());
        range.push(self.parse_class_atom()?);

        // [a-z], but not [a-] where the `-` is a literal atom of its own.
        if self.scanner.peek() == Some('-') && !matches!(self.scanner.peek_nth(1), Some(']') | None)
        {
            self.expect_token(&mut range, "-");
            range.push(self.parse_class_atom()?);
        }

        Ok(range.finish(self.scanner.tell()))
    }

    fn parse_class_atom(&mut self) -> Result<Node> {
        let start = self.scanner.tell();

        match self.scanner.peek() {
            None => Err(self.error(ErrorKind::UnterminatedCharacterClass)),
            Some('\\') => {
                let mut atom = NodeBuilder::new(NodeKind::ClassAtom, start);
                atom.push(self.parse_escape(Context::Class)?);
                Ok(atom.finish(self.scanner.tell()))
            }
            Some(_) => {
                self.scanner.advance();
                Ok(leaf(NodeKind::ClassAtom, start, self.scanner.tell()))
            }
        }
    }
}
