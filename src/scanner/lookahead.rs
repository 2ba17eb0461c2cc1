use super::super::cst::Lookaround;

/// Where an escape or character is being read.
///
/// Some sequences change meaning inside a character class: `\b` is a
/// boundary assertion at term level but a backspace inside `[...]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Context {
    Term,
    Class,
}

/// The four parenthesized forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupOpener {
    /// `(?=`, `(?!`, `(?<=`, `(?<!`
    Lookaround(Lookaround),
    /// `(?<name>`
    NamedCapture,
    /// `(?:`
    NonCapturing,
    /// `(`
    AnonymousCapture,
}

impl GroupOpener {
    /// Returns the text of the opening delimiter. For named groups this is
    /// only the part before the name.
    #[must_use]
    pub const fn text(self) -> &'static str {
        match self {
            GroupOpener::Lookaround(lookaround) => lookaround.opener(),
            GroupOpener::NamedCapture => "(?<",
            GroupOpener::NonCapturing => "(?:",
            GroupOpener::AnonymousCapture => "(",
        }
    }
}

/// The kind of atom that starts at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Atom {
    /// `^`
    StartAssertion,
    /// `$`
    EndAssertion,
    /// `\b`
    BoundaryAssertion,
    /// `\B`
    NonBoundaryAssertion,
    /// Any of the parenthesized forms, lookarounds included.
    Group(GroupOpener),
    /// `[`
    CharacterClass,
    /// `\` followed by anything but `b` or `B`.
    Escape,
    /// `.`
    AnyCharacter,
    /// Any other character, or a `{` that can't start a quantifier.
    PatternCharacter,
}

/// What the scanner sees at term level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    Atom(Atom),
    /// `|`
    Alternation,
    /// `)`
    GroupClose,
    /// A quantifier where an atom was expected.
    Quantifier,
    /// A raw line feed, kept as a token between atoms.
    LineFeed,
    /// End of input.
    End,
}

/// The escape family selected by the character after a `\`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Escape {
    /// `\10`, `\12`, ... A single digit is not enough.
    Decimal,
    /// `\d`, `\D`, `\s`, `\S`, `\w`, `\W`
    CharacterClass,
    /// `\p{...}`, `\P{...}`
    UnicodeProperty,
    /// `\k<name>`
    NamedBackreference,
    /// `\f`, `\n`, `\r`, `\t`, `\v`, `\0`, and `\b` inside classes.
    Control,
    /// `\cX`
    ControlLetter,
    /// `\` followed by a syntax character, or `\-` inside classes.
    Identity,
}
