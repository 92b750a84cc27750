// Character class matching for Lua patterns
// Handles %a, %d, %l, %u, %w, %s, %p, %c, %g, %x, their uppercase inverses,
// the `.` wildcard and [set] membership.
//
// Predicates follow the C locale: only ASCII characters belong to a class.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassKind {
    Letter,   // %a
    Control,  // %c
    Digit,    // %d
    Graph,    // %g
    Lower,    // %l
    Punct,    // %p
    Space,    // %s
    Upper,    // %u
    AlphaNum, // %w
    Hex,      // %x
}

impl ClassKind {
    /// Map a class letter to its class. Case is ignored; the caller decides
    /// negation from the letter's case.
    pub fn from_letter(cl: char) -> Option<ClassKind> {
        let kind = match cl.to_ascii_lowercase() {
            'a' => ClassKind::Letter,
            'c' => ClassKind::Control,
            'd' => ClassKind::Digit,
            'g' => ClassKind::Graph,
            'l' => ClassKind::Lower,
            'p' => ClassKind::Punct,
            's' => ClassKind::Space,
            'u' => ClassKind::Upper,
            'w' => ClassKind::AlphaNum,
            'x' => ClassKind::Hex,
            _ => return None,
        };
        Some(kind)
    }

    pub fn letter(self) -> char {
        match self {
            ClassKind::Letter => 'a',
            ClassKind::Control => 'c',
            ClassKind::Digit => 'd',
            ClassKind::Graph => 'g',
            ClassKind::Lower => 'l',
            ClassKind::Punct => 'p',
            ClassKind::Space => 's',
            ClassKind::Upper => 'u',
            ClassKind::AlphaNum => 'w',
            ClassKind::Hex => 'x',
        }
    }

    #[inline(always)]
    pub fn matches(self, c: char) -> bool {
        match self {
            ClassKind::Letter => c.is_ascii_alphabetic(),
            ClassKind::Control => c.is_ascii_control(),
            ClassKind::Digit => c.is_ascii_digit(),
            ClassKind::Graph => c.is_ascii_graphic(),
            ClassKind::Lower => c.is_ascii_lowercase(),
            ClassKind::Punct => c.is_ascii_punctuation(),
            // isspace() also accepts vertical tab, which is_ascii_whitespace() does not
            ClassKind::Space => matches!(c, ' ' | '\t' | '\n' | '\x0b' | '\x0c' | '\r'),
            ClassKind::Upper => c.is_ascii_uppercase(),
            ClassKind::AlphaNum => c.is_ascii_alphanumeric(),
            ClassKind::Hex => c.is_ascii_hexdigit(),
        }
    }
}

/// An item inside a character set [...]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetItem {
    Char(char),
    Range(char, char),
    Class { kind: ClassKind, negated: bool },
}

impl SetItem {
    pub fn matches(&self, c: char) -> bool {
        match self {
            SetItem::Char(ch) => c == *ch,
            SetItem::Range(start, end) => c >= *start && c <= *end,
            SetItem::Class { kind, negated } => kind.matches(c) != *negated,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CharSet {
    pub items: Vec<SetItem>,
    pub negated: bool,
}

impl CharSet {
    pub fn matches(&self, c: char) -> bool {
        let found = self.items.iter().any(|item| item.matches(c));
        found != self.negated
    }
}

/// Payload of a class item: what a single subject character is tested against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharClass {
    /// `.`
    Any,
    /// `%a`, `%D`, ...
    Named { kind: ClassKind, negated: bool },
    /// `[...]`
    Set(CharSet),
}

impl CharClass {
    #[inline]
    pub fn matches(&self, c: char) -> bool {
        match self {
            CharClass::Any => true,
            CharClass::Named { kind, negated } => kind.matches(c) != *negated,
            CharClass::Set(set) => set.matches(c),
        }
    }
}

impl std::fmt::Display for CharClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CharClass::Any => write!(f, "."),
            CharClass::Named { kind, negated } => {
                let cl = kind.letter();
                if *negated {
                    write!(f, "%{}", cl.to_ascii_uppercase())
                } else {
                    write!(f, "%{}", cl)
                }
            }
            CharClass::Set(set) => {
                write!(f, "[")?;
                if set.negated {
                    write!(f, "^")?;
                }
                for item in &set.items {
                    match item {
                        SetItem::Char(c) if c.is_ascii_alphanumeric() => write!(f, "{}", c)?,
                        SetItem::Char(c) => write!(f, "%{}", c)?,
                        SetItem::Range(a, b) => write!(f, "{}-{}", a, b)?,
                        SetItem::Class { kind, negated } => {
                            let cl = kind.letter();
                            if *negated {
                                write!(f, "%{}", cl.to_ascii_uppercase())?
                            } else {
                                write!(f, "%{}", cl)?
                            }
                        }
                    }
                }
                write!(f, "]")
            }
        }
    }
}
