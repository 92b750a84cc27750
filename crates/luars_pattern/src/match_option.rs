use crate::pattern_limits::MAX_BACKTRACK_ENTRIES;

/// Where `find_index_all` resumes scanning after a successful match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ResumeMode {
    /// Resume at the match end, like `string.gmatch` / `string.gsub`.
    /// An empty match at the end of the previous match is skipped.
    #[default]
    MatchEnd,
    /// Resume one position past the match end. Adjacent matches are missed.
    SkipOne,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MatchOption {
    /// Maximum number of pending alternatives in one match attempt. When
    /// exceeded the search fails with `MatchError::BacktrackLimit`.
    pub max_backtrack: usize,
    pub resume: ResumeMode,
}

impl Default for MatchOption {
    fn default() -> Self {
        Self {
            max_backtrack: MAX_BACKTRACK_ENTRIES,
            resume: ResumeMode::MatchEnd,
        }
    }
}
