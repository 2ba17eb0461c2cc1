/// Direction and polarity of a lookaround assertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Lookaround {
    /// `(?=...)`
    PositiveLookahead,
    /// `(?!...)`
    NegativeLookahead,
    /// `(?<=...)`
    PositiveLookbehind,
    /// `(?<!...)`
    NegativeLookbehind,
}

impl Lookaround {
    /// Returns the opening delimiter of the assertion.
    #[must_use]
    pub const fn opener(self) -> &'static str {
        match self {
            Lookaround::PositiveLookahead => "(?=",
            Lookaround::NegativeLookahead => "(?!",
            Lookaround::PositiveLookbehind => "(?<=",
            Lookaround::NegativeLookbehind => "(?<!",
        }
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        matches!(
            self,
            Lookaround::NegativeLookahead | Lookaround::NegativeLookbehind
        )
    }

    #[must_use]
    pub const fn is_lookbehind(self) -> bool {
        matches!(
            self,
            Lookaround::PositiveLookbehind | Lookaround::NegativeLookbehind
        )
    }
}

/// The kind of a [`Node`](super::Node), together with the attributes that
/// the node's text alone doesn't make obvious.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum NodeKind {
    /// A whole pattern, or the body of a group or lookaround. Its only child
    /// is a `Disjunction` or a `Term`; it has none when the body is empty.
    Pattern,
    /// Alternatives separated by `|` tokens. Empty alternatives have no node.
    Disjunction,
    /// A run of atoms, each optionally followed by its quantifier.
    Term,

    // Assertions
    StartAssertion,       // ^
    EndAssertion,         // $
    BoundaryAssertion,    // \b
    NonBoundaryAssertion, // \B
    LookaroundAssertion(Lookaround),

    PatternCharacter,
    AnyCharacter, // .

    CharacterClass { negated: bool },
    /// One `ClassAtom`, or two of them around a `-` token.
    ClassRange,
    /// A literal character (leaf) or a single escape child.
    ClassAtom,

    // Groups. `index` is the 1-based capture index.
    AnonymousCapturingGroup { index: usize },
    NamedCapturingGroup { index: usize },
    NonCapturingGroup,

    // Quantifiers
    ZeroOrMore { lazy: bool }, // *
    OneOrMore { lazy: bool },  // +
    Optional { lazy: bool },   // ?
    /// `{min}`, `{min,}` or `{min,max}`. `max` is `None` when unbounded.
    CountQuantifier { lazy: bool, min: u32, max: Option<u32> },

    /// `\10`, `\11`, ... Backreference by number, two digits or more.
    DecimalEscape { index: u32 },
    /// `\d`, `\D`, `\s`, `\S`, `\w`, `\W`, or `\p{...}` / `\P{...}`.
    CharacterClassEscape { class: char },
    UnicodePropertyExpression,
    UnicodePropertyName,
    UnicodePropertyValue,
    /// `\k<name>`
    BackreferenceEscape,
    ControlEscape,       // \b (in classes) \f \n \r \t \v \0
    ControlLetterEscape, // \cX
    IdentityEscape,      // \. \* \- ...
    GroupName,
    DecimalDigits,
    /// The `?` that makes a quantifier lazy.
    Lazy,
    /// Punctuation that belongs to its parent construct.
    Token,
}

impl NodeKind {
    /// Returns the snake case name of the kind, without attributes.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            NodeKind::Pattern => "pattern",
            NodeKind::Disjunction => "disjunction",
            NodeKind::Term => "term",
            NodeKind::StartAssertion => "start_assertion",
            NodeKind::EndAssertion => "end_assertion",
            NodeKind::BoundaryAssertion => "boundary_assertion",
            NodeKind::NonBoundaryAssertion => "non_boundary_assertion",
            NodeKind::LookaroundAssertion(_) => "lookaround_assertion",
            NodeKind::PatternCharacter => "pattern_character",
            NodeKind::AnyCharacter => "any_character",
            NodeKind::CharacterClass { .. } => "character_class",
            NodeKind::ClassRange => "class_range",
            NodeKind::ClassAtom => "class_atom",
            NodeKind::AnonymousCapturingGroup { .. } => "anonymous_capturing_group",
            NodeKind::NamedCapturingGroup { .. } => "named_capturing_group",
            NodeKind::NonCapturingGroup => "non_capturing_group",
            NodeKind::ZeroOrMore { .. } => "zero_or_more",
            NodeKind::OneOrMore { .. } => "one_or_more",
            NodeKind::Optional { .. } => "optional",
            NodeKind::CountQuantifier { .. } => "count_quantifier",
            NodeKind::DecimalEscape { .. } => "decimal_escape",
            NodeKind::CharacterClassEscape { .. } => "character_class_escape",
            NodeKind::UnicodePropertyExpression => "unicode_property_value_expression",
            NodeKind::UnicodePropertyName => "unicode_property_name",
            NodeKind::UnicodePropertyValue => "unicode_property_value",
            NodeKind::BackreferenceEscape => "backreference_escape",
            NodeKind::ControlEscape => "control_escape",
            NodeKind::ControlLetterEscape => "control_letter_escape",
            NodeKind::IdentityEscape => "identity_escape",
            NodeKind::GroupName => "group_name",
            NodeKind::DecimalDigits => "decimal_digits",
            NodeKind::Lazy => "lazy",
            NodeKind::Token => "token",
        }
    }

    /// Returns `true` for the zero-width assertion kinds.
    #[must_use]
    pub const fn is_assertion(&self) -> bool {
        matches!(
            self,
            NodeKind::StartAssertion
                | NodeKind::EndAssertion
                | NodeKind::BoundaryAssertion
                | NodeKind::NonBoundaryAssertion
                | NodeKind::LookaroundAssertion(_)
        )
    }

    #[must_use]
    pub const fn is_quantifier(&self) -> bool {
        matches!(
            self,
            NodeKind::ZeroOrMore { .. }
                | NodeKind::OneOrMore { .. }
                | NodeKind::Optional { .. }
                | NodeKind::CountQuantifier { .. }
        )
    }

    /// Returns the capture index if this is a capturing group.
    #[must_use]
    pub const fn capture_index(&self) -> Option<usize> {
        match self {
            NodeKind::AnonymousCapturingGroup { index }
            | NodeKind::NamedCapturingGroup { index } => Some(*index),
            _ => None,
        }
    }

    /// Returns the laziness of a quantifier, `None` for other kinds.
    #[must_use]
    pub const fn lazy(&self) -> Option<bool> {
        match self {
            NodeKind::ZeroOrMore { lazy }
            | NodeKind::OneOrMore { lazy }
            | NodeKind::Optional { lazy }
            | NodeKind::CountQuantifier { lazy, .. } => Some(*lazy),
            _ => None,
        }
    }
}
