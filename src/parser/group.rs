use super::{
    super::{
        ErrorKind, Result, SyntaxError,
        cst::{Node, NodeKind, builder::NodeBuilder, builder::leaf},
        scanner::{GroupOpener, is_group_name_char},
    },
    MAX_DEPTH, Parser,
};

impl Parser<'_> {
    /// Parses a group or lookaround assertion starting at `(`.
    pub(super) fn parse_group(&mut self, opener: GroupOpener) -> Result<Node> {
        let start = self.scanner.tell();
        if self.depth == MAX_DEPTH {
            return Err(SyntaxError::new(ErrorKind::NestingTooDeep, start));
        }

        let kind = match opener {
            GroupOpener::Lookaround(lookaround) => NodeKind::LookaroundAssertion(lookaround),
            GroupOpener::NonCapturing => NodeKind::NonCapturingGroup,
            GroupOpener::NamedCapture => NodeKind::NamedCapturingGroup {
                index: self.next_capture_index(),
            },
            GroupOpener::AnonymousCapture => NodeKind::AnonymousCapturingGroup {
                index: self.next_capture_index(),
            },
        };

        let mut group = NodeBuilder::new(kind, start);
        self.expect_token(&mut group, opener.text());

        if opener == GroupOpener::NamedCapture {
            // The scanner only reports a named group when `name>` follows.
            let name = self
                .parse_group_name()
                .ok_or_else(|| self.error(ErrorKind::UnexpectedCharacter))?;
            group.push(name);
            self.expect_token(&mut group, ">");
        }

        self.depth += 1;
        let body = self.parse_pattern()?;
        self.depth -= 1;
        group.push(body);

        if self.scanner.peek() != Some(')') {
            return Err(self.error(ErrorKind::UnterminatedGroup));
        }
        self.expect_token(&mut group, ")");

        Ok(group.finish(self.scanner.tell()))
    }

    /// Capture indexes follow the order of the opening parentheses, so they
    /// are handed out before the group body is parsed.
    fn next_capture_index(&mut self) -> usize {
        self.capture_count += 1;
        self.capture_count
    }

    /// Parses a group name, returning `None` if there is none at the current
    /// position.
    pub(super) fn parse_group_name(&mut self) -> Option<Node> {
        let start = self.scanner.tell();
        let name = self.scanner.consume_while(is_group_name_char);

        if name.is_empty() {
            return None;
        }

        Some(leaf(NodeKind::GroupName, start, self.scanner.tell()))
    }
}
