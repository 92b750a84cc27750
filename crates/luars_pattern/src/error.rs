use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanErrorKind {
    #[error("malformed pattern (ends with '%')")]
    EndsWithEscape,
    #[error("malformed pattern (missing ']')")]
    MissingBracket,
    #[error("unfinished capture")]
    UnfinishedCapture,
    #[error("invalid pattern capture")]
    InvalidCapture,
    #[error("'%{0}' is not supported in patterns")]
    Unsupported(char),
    #[error("too many captures")]
    TooManyCaptures,
}

/// A malformed pattern, reported at the char offset where scanning stopped.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind} at position {position}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub position: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, position: usize) -> Self {
        ScanError { kind, position }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    #[error("invalid pattern: {0}")]
    Scan(#[from] ScanError),
}

impl CompileError {
    pub fn scan_error(&self) -> &ScanError {
        match self {
            CompileError::Scan(e) => e,
        }
    }
}

/// A search that ran out of backtrack space. It says nothing about whether
/// the subject matches.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("pattern too complex: more than {0} pending backtrack entries")]
    BacktrackLimit(usize),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplaceError {
    #[error("invalid use of '%' in replacement string")]
    InvalidEscape,
    #[error("invalid capture index %{0} in replacement string")]
    InvalidCaptureIndex(usize),
    #[error(transparent)]
    Match(#[from] MatchError),
}
