use ecma_regex_cst::{ErrorKind, SyntaxError, diagnostics, parse, parse_and_validate, validate};

fn validate_err(pattern: &str) -> SyntaxError {
    let parsed = parse(pattern).unwrap_or_else(|err| panic!("{pattern:?} should parse: {err}"));
    match validate(&parsed) {
        Ok(()) => panic!("{pattern:?} should not validate"),
        Err(err) => err,
    }
}

#[test]
fn test_valid_patterns() {
    for pattern in [
        "a{2,4}",
        "a{2,}",
        "a{3,3}",
        r"(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)\10",
        r"\10(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)",
        r"(?<x>a)\k<x>",
        r"\k<x>(?<x>a)",
        "(?<x>a)|(?<y>b)",
        "^a$",
        "(?=a)b",
    ] {
        assert_eq!(parse_and_validate(pattern).map(|_| ()), Ok(()), "{pattern}");
    }
}

#[test]
fn test_count_quantifier_bounds() {
    assert_eq!(
        validate_err("a{4,2}"),
        SyntaxError::new(ErrorKind::InvalidQuantifierBounds, 1)
    );
    assert_eq!(
        validate_err("(?:ab){10,9}?"),
        SyntaxError::new(ErrorKind::InvalidQuantifierBounds, 6)
    );
}

#[test]
fn test_quantified_assertions() {
    for (pattern, pos) in [("^*", 1), (r"\b+", 2), (r"a\B{2}", 3), ("a$?", 2), ("(?=a)?", 5), ("(?<!a)*", 6)] {
        assert_eq!(
            validate_err(pattern),
            SyntaxError::new(ErrorKind::UnexpectedCharacter, pos),
            "{pattern}"
        );
    }
}

#[test]
fn test_undefined_group_references() {
    for (pattern, pos) in [(r"(a)\22", 3), (r"\10", 0), (r"\k<x>", 0), (r"(?<y>a)\k<x>", 7), (r"\99999999999", 0)] {
        assert_eq!(
            validate_err(pattern),
            SyntaxError::new(ErrorKind::UndefinedGroupReference, pos),
            "{pattern}"
        );
    }
}

#[test]
fn test_duplicate_group_names() {
    assert_eq!(
        validate_err("(?<x>a)(?<x>b)"),
        SyntaxError::new(ErrorKind::DuplicateGroupName, 10)
    );
}

#[test]
fn test_diagnostics_are_ordered() {
    let parsed = parse(r"\k<y>(?<x>a){3,1}^+").unwrap();
    assert_eq!(
        diagnostics(&parsed),
        vec![
            SyntaxError::new(ErrorKind::UndefinedGroupReference, 0),
            SyntaxError::new(ErrorKind::InvalidQuantifierBounds, 12),
            SyntaxError::new(ErrorKind::UnexpectedCharacter, 18),
        ]
    );
    assert_eq!(
        validate(&parsed),
        Err(SyntaxError::new(ErrorKind::UndefinedGroupReference, 0))
    );
}

#[test]
fn test_syntax_errors_come_first() {
    assert_eq!(
        parse_and_validate("a{4,2}(").map(|_| ()),
        Err(SyntaxError::new(ErrorKind::UnterminatedGroup, 7))
    );
}
