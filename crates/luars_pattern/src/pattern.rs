use smol_str::SmolStr;

use crate::compiler::{self, Program};
use crate::error::{CompileError, MatchError, ReplaceError};
use crate::match_info::MatchInfo;
use crate::match_option::MatchOption;
use crate::matcher::{self, Subject};
use crate::replace::{self, Replacer};

/// A compiled pattern. Compile once, match against any number of subjects.
///
/// All offsets handed out are byte offsets into the subject.
#[derive(Debug, Clone)]
pub struct Pattern {
    source: SmolStr,
    program: Program,
    option: MatchOption,
}

impl Pattern {
    pub fn new(pattern: &str) -> Result<Self, CompileError> {
        Self::with_option(pattern, MatchOption::default())
    }

    pub fn with_option(pattern: &str, option: MatchOption) -> Result<Self, CompileError> {
        Ok(Pattern {
            source: SmolStr::new(pattern),
            program: compiler::compile(pattern)?,
            option,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn option(&self) -> &MatchOption {
        &self.option
    }

    /// Number of captures in the pattern.
    pub fn captures_len(&self) -> usize {
        self.program.captures()
    }

    /// First match in `subject`, or an error if the search ran out of
    /// backtrack space before deciding.
    pub fn try_find_index(&self, subject: &str) -> Result<Option<MatchInfo>, MatchError> {
        let subject = Subject::new(subject);
        matcher::find_at(&self.program, &subject, 0, &self.option)
    }

    /// Like `try_find_index`, starting at byte offset `init` or later. An
    /// `init` past the end of the subject never matches.
    pub fn try_find_index_at(
        &self,
        subject: &str,
        init: usize,
    ) -> Result<Option<MatchInfo>, MatchError> {
        if init > subject.len() {
            return Ok(None);
        }
        let subject = Subject::new(subject);
        let init = subject.char_index(init);
        matcher::find_at(&self.program, &subject, init, &self.option)
    }

    /// All matches, at most `limit` of them (`None` or `Some(0)`: no limit).
    /// Fails as a whole if any attempt runs out of backtrack space.
    pub fn try_find_index_all(
        &self,
        subject: &str,
        limit: Option<usize>,
    ) -> Result<Vec<MatchInfo>, MatchError> {
        let subject = Subject::new(subject);
        matcher::find_all(&self.program, &subject, limit, &self.option)
    }

    /// First match in `subject`. A search that exceeds the backtrack budget
    /// counts as no match; use `try_find_index` to tell the two apart.
    pub fn find_index(&self, subject: &str) -> Option<MatchInfo> {
        self.try_find_index(subject).ok().flatten()
    }

    pub fn find_index_at(&self, subject: &str, init: usize) -> Option<MatchInfo> {
        self.try_find_index_at(subject, init).ok().flatten()
    }

    /// All matches, or none at all when the backtrack budget runs out.
    pub fn find_index_all(&self, subject: &str, limit: Option<usize>) -> Vec<MatchInfo> {
        self.try_find_index_all(subject, limit).unwrap_or_default()
    }

    /// Whole match followed by each capture. An unreached capture is `""`.
    pub fn find<'s>(&self, subject: &'s str) -> Option<Vec<&'s str>> {
        self.find_index(subject).map(|m| m.substrings(subject))
    }

    pub fn find_all<'s>(&self, subject: &'s str, limit: Option<usize>) -> Vec<Vec<&'s str>> {
        self.find_index_all(subject, limit)
            .iter()
            .map(|m| m.substrings(subject))
            .collect()
    }

    pub fn is_match(&self, subject: &str) -> bool {
        self.find_index(subject).is_some()
    }

    /// Replace up to `limit` matches. Returns the new string and the number
    /// of matches replaced. Nothing is replaced if the search runs out of
    /// backtrack space.
    pub fn replace_all(
        &self,
        subject: &str,
        replacer: Replacer<'_>,
        limit: Option<usize>,
    ) -> Result<(String, usize), ReplaceError> {
        let matches = self.try_find_index_all(subject, limit)?;
        replace::replace_matches(subject, &matches, replacer)
    }
}
