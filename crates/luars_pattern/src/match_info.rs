use std::ops::Range;

/// Byte range `[start, end)` in a subject. Always on char boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        MatchSpan { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn slice<'s>(&self, subject: &'s str) -> &'s str {
        &subject[self.range()]
    }
}

/// Information about a single match
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchInfo {
    pub span: MatchSpan,
    /// One entry per capture, in source order. `None` if the capture was not
    /// reached on the accepting path.
    pub captures: Vec<Option<MatchSpan>>,
}

impl MatchInfo {
    #[inline]
    pub fn start(&self) -> usize {
        self.span.start
    }

    #[inline]
    pub fn end(&self) -> usize {
        self.span.end
    }

    /// Group `0` is the whole match, `1..` are the captures.
    pub fn get(&self, group: usize) -> Option<MatchSpan> {
        if group == 0 {
            Some(self.span)
        } else {
            self.captures.get(group - 1).copied().flatten()
        }
    }

    pub fn as_str<'s>(&self, subject: &'s str) -> &'s str {
        self.span.slice(subject)
    }

    /// Captured text of group `group`, `""` when the group did not participate.
    pub fn group_str<'s>(&self, subject: &'s str, group: usize) -> &'s str {
        self.get(group).map_or("", |span| span.slice(subject))
    }

    /// Whole match followed by every capture.
    pub fn substrings<'s>(&self, subject: &'s str) -> Vec<&'s str> {
        (0..=self.captures.len())
            .map(|group| self.group_str(subject, group))
            .collect()
    }

    /// First capture, or the whole match when the pattern has no captures.
    /// This is the value Lua hands to function and table replacements.
    pub fn first_value<'s>(&self, subject: &'s str) -> &'s str {
        if self.captures.is_empty() {
            self.as_str(subject)
        } else {
            self.group_str(subject, 1)
        }
    }
}
