//! Semantic checks on a parsed [`Pattern`].
//!
//! The parser accepts some patterns that are well-formed but meaningless,
//! like `a{4,2}` or `^*`. These checks are kept apart from parsing so that
//! tools such as syntax highlighters can work with the tree anyway, while
//! linters can report the problems.

use std::collections::HashSet;

use super::{
    ErrorKind, Result, SyntaxError,
    cst::{Node, NodeKind, Pattern},
    parser::parse,
};

/// Parses `pattern` and checks the result with [`validate`].
pub fn parse_and_validate(pattern: &str) -> Result<Pattern> {
    let parsed = parse(pattern)?;
    validate(&parsed)?;
    Ok(parsed)
}

/// Checks a parsed pattern, returning the problem that appears first in the
/// pattern text.
pub fn validate(pattern: &Pattern) -> Result<()> {
    match diagnostics(pattern).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

/// Returns every problem found in `pattern`, ordered by offset.
///
/// The following are reported:
///
/// - count quantifiers whose minimum exceeds their maximum
///   ([`ErrorKind::InvalidQuantifierBounds`]),
/// - quantifiers applied to assertions ([`ErrorKind::UnexpectedCharacter`]),
/// - backreferences to groups that don't exist
///   ([`ErrorKind::UndefinedGroupReference`]),
/// - named groups sharing a name ([`ErrorKind::DuplicateGroupName`]).
#[must_use]
pub fn diagnostics(pattern: &Pattern) -> Vec<SyntaxError> {
    let groups = pattern.capture_groups();
    let names: HashSet<&str> = groups.iter().filter_map(|group| group.name).collect();

    let mut errors = Vec::new();
    let mut seen_names = HashSet::new();

    for group in &groups {
        if let Some(name) = group.name
            && !seen_names.insert(name)
        {
            let pos = group
                .node
                .child(&NodeKind::GroupName)
                .map_or(group.node.span().start(), |node| node.span().start());
            errors.push(SyntaxError::new(ErrorKind::DuplicateGroupName, pos));
        }
    }

    for node in pattern.descendants() {
        match node.kind() {
            NodeKind::Term => check_term(node, &mut errors),
            NodeKind::DecimalEscape { index } => {
                let defined = usize::try_from(*index)
                    .is_ok_and(|index| index <= pattern.capture_count());
                if !defined {
                    errors.push(SyntaxError::new(
                        ErrorKind::UndefinedGroupReference,
                        node.span().start(),
                    ));
                }
            }
            NodeKind::BackreferenceEscape => {
                let defined = node
                    .child(&NodeKind::GroupName)
                    .is_some_and(|name| names.contains(pattern.text(name)));
                if !defined {
                    errors.push(SyntaxError::new(
                        ErrorKind::UndefinedGroupReference,
                        node.span().start(),
                    ));
                }
            }
            _ => {}
        }
    }

    errors.sort_by_key(SyntaxError::pos);
    errors
}

fn check_term(term: &Node, errors: &mut Vec<SyntaxError>) {
    for (atom, quantifier) in term.items() {
        let Some(quantifier) = quantifier else {
            continue;
        };

        if atom.kind().is_assertion() {
            errors.push(SyntaxError::new(
                ErrorKind::UnexpectedCharacter,
                quantifier.span().start(),
            ));
        }

        if let NodeKind::CountQuantifier {
            min,
            max: Some(max),
            ..
        } = quantifier.kind()
            && min > max
        {
            errors.push(SyntaxError::new(
                ErrorKind::InvalidQuantifierBounds,
                quantifier.span().start(),
            ));
        }
    }
}
