/// Char cursor over a pattern source. Positions are char offsets.
pub struct Reader {
    chars: Vec<char>,
    pos: usize,
}

impl Reader {
    pub fn new(text: &str) -> Self {
        Reader {
            chars: text.chars().collect(),
            pos: 0,
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    /// True when the cursor sits on the final character of the source.
    #[inline]
    pub fn is_last(&self) -> bool {
        self.pos + 1 == self.chars.len()
    }

    #[inline]
    pub fn current_char(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    #[inline]
    pub fn next_char(&self) -> Option<char> {
        self.chars.get(self.pos + 1).copied()
    }

    #[inline]
    pub fn bump(&mut self) {
        if self.pos < self.chars.len() {
            self.pos += 1;
        }
    }

    /// Consume the current char if it equals `ch`.
    pub fn eat(&mut self, ch: char) -> bool {
        if self.current_char() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
