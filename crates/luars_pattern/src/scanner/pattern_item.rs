use crate::class::CharClass;
use crate::error::ScanError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Repeat {
    /// exactly once
    #[default]
    One,
    Optional,   // ?
    OneOrMore,  // +
    ZeroOrMore, // *
    Lazy,       // - (non-greedy)
}

impl Repeat {
    pub fn from_suffix(c: char) -> Option<Repeat> {
        match c {
            '?' => Some(Repeat::Optional),
            '+' => Some(Repeat::OneOrMore),
            '*' => Some(Repeat::ZeroOrMore),
            '-' => Some(Repeat::Lazy),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ItemKind {
    Literal(char),
    Class(CharClass),
    CaptureOpen,
    CaptureClose,
    End,
    Error(ScanError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternItem {
    pub kind: ItemKind,
    /// Char offset of the item in the pattern source.
    pub position: usize,
    pub repeat: Repeat,
}

impl PatternItem {
    pub fn new(kind: ItemKind, position: usize) -> Self {
        PatternItem {
            kind,
            position,
            repeat: Repeat::One,
        }
    }

    pub fn with_repeat(kind: ItemKind, position: usize, repeat: Repeat) -> Self {
        PatternItem {
            kind,
            position,
            repeat,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self.kind, ItemKind::End | ItemKind::Error(_))
    }
}
