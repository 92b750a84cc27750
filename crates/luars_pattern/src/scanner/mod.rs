// Pattern scanner
// Turns a pattern string into a stream of items, one pull at a time.
//
// The stream always ends with exactly one terminal item: `End`, or `Error`
// for a malformed pattern. Anchors never become items; they are recorded
// as flags the compiler reads once the stream is drained.

mod pattern_item;
mod reader;

pub use pattern_item::{ItemKind, PatternItem, Repeat};
use reader::Reader;

use crate::class::{CharClass, CharSet, ClassKind, SetItem};
use crate::error::{ScanError, ScanErrorKind};
use crate::pattern_limits::LUA_MAXCAPTURES;

pub struct Scanner {
    reader: Reader,
    open_captures: usize,
    total_captures: usize,
    head_anchored: bool,
    tail_anchored: bool,
    finished: bool,
}

impl Scanner {
    pub fn new(pattern: &str) -> Self {
        let mut reader = Reader::new(pattern);
        let head_anchored = reader.eat('^');
        Scanner {
            reader,
            open_captures: 0,
            total_captures: 0,
            head_anchored,
            tail_anchored: false,
            finished: false,
        }
    }

    pub fn head_anchored(&self) -> bool {
        self.head_anchored
    }

    /// Only meaningful once the stream has reached its terminal item.
    pub fn tail_anchored(&self) -> bool {
        self.tail_anchored
    }

    pub fn total_captures(&self) -> usize {
        self.total_captures
    }

    fn lex(&mut self) -> PatternItem {
        let start = self.reader.position();
        let Some(c) = self.reader.current_char() else {
            if self.open_captures > 0 {
                return self.error(ScanErrorKind::UnfinishedCapture, start);
            }
            return PatternItem::new(ItemKind::End, start);
        };

        match c {
            '(' => {
                self.reader.bump();
                if self.total_captures >= LUA_MAXCAPTURES {
                    return self.error(ScanErrorKind::TooManyCaptures, start);
                }
                self.open_captures += 1;
                self.total_captures += 1;
                PatternItem::new(ItemKind::CaptureOpen, start)
            }
            ')' => {
                self.reader.bump();
                if self.open_captures == 0 {
                    return self.error(ScanErrorKind::InvalidCapture, start);
                }
                self.open_captures -= 1;
                PatternItem::new(ItemKind::CaptureClose, start)
            }
            '$' if self.reader.is_last() => {
                self.reader.bump();
                self.tail_anchored = true;
                self.lex()
            }
            '%' => self.lex_escape(start),
            '.' => {
                self.reader.bump();
                self.single(ItemKind::Class(CharClass::Any), start)
            }
            '[' => self.lex_set(start),
            _ => {
                self.reader.bump();
                self.single(ItemKind::Literal(c), start)
            }
        }
    }

    fn lex_escape(&mut self, start: usize) -> PatternItem {
        self.reader.bump(); // '%'
        let Some(cl) = self.reader.current_char() else {
            return self.error(ScanErrorKind::EndsWithEscape, start);
        };
        self.reader.bump();

        if matches!(cl, 'b' | 'f') || cl.is_ascii_digit() {
            return self.error(ScanErrorKind::Unsupported(cl), start);
        }
        let kind = match ClassKind::from_letter(cl) {
            Some(kind) => ItemKind::Class(CharClass::Named {
                kind,
                negated: cl.is_ascii_uppercase(),
            }),
            None => ItemKind::Literal(cl),
        };
        self.single(kind, start)
    }

    fn lex_set(&mut self, start: usize) -> PatternItem {
        self.reader.bump(); // '['
        let negated = self.reader.eat('^');
        let mut items = Vec::new();

        // ']' right after the opening bracket is a member, not the terminator
        if self.reader.eat(']') {
            items.push(SetItem::Char(']'));
        }

        loop {
            let Some(c) = self.reader.current_char() else {
                return self.error(ScanErrorKind::MissingBracket, start);
            };
            self.reader.bump();
            match c {
                ']' => break,
                '%' => {
                    let Some(cl) = self.reader.current_char() else {
                        return self.error(ScanErrorKind::MissingBracket, start);
                    };
                    self.reader.bump();
                    match ClassKind::from_letter(cl) {
                        Some(kind) => items.push(SetItem::Class {
                            kind,
                            negated: cl.is_ascii_uppercase(),
                        }),
                        None => items.push(SetItem::Char(cl)),
                    }
                }
                _ => {
                    let is_range = self.reader.current_char() == Some('-')
                        && self.reader.next_char().is_some_and(|end| end != ']');
                    if is_range {
                        self.reader.bump(); // '-'
                        if let Some(end) = self.reader.current_char() {
                            self.reader.bump();
                            items.push(SetItem::Range(c, end));
                        }
                    } else {
                        items.push(SetItem::Char(c));
                    }
                }
            }
        }

        self.single(
            ItemKind::Class(CharClass::Set(CharSet { items, negated })),
            start,
        )
    }

    /// Finish a single-character item by reading its optional repetition suffix.
    fn single(&mut self, kind: ItemKind, start: usize) -> PatternItem {
        let repeat = match self.reader.current_char().and_then(Repeat::from_suffix) {
            Some(repeat) => {
                self.reader.bump();
                repeat
            }
            None => Repeat::One,
        };
        PatternItem::with_repeat(kind, start, repeat)
    }

    fn error(&self, kind: ScanErrorKind, position: usize) -> PatternItem {
        PatternItem::new(ItemKind::Error(ScanError::new(kind, position)), position)
    }
}

impl Iterator for Scanner {
    type Item = PatternItem;

    fn next(&mut self) -> Option<PatternItem> {
        if self.finished {
            return None;
        }
        let item = self.lex();
        if item.is_terminal() {
            self.finished = true;
        }
        Some(item)
    }
}

/// Scan a whole pattern eagerly. Mostly useful for inspection and tests.
pub fn scan(pattern: &str) -> Vec<PatternItem> {
    Scanner::new(pattern).collect()
}
