// Lua pattern matching
// Patterns are scanned into items, compiled to split/jump bytecode and run
// on a backtracking VM with an explicit backtrack stack.

#[cfg(test)]
mod test;

pub mod class;
pub mod compiler;
pub mod error;
pub mod match_info;
pub mod match_option;
pub mod matcher;
pub mod pattern;
pub mod pattern_cache;
pub mod pattern_limits;
pub mod replace;
pub mod scanner;

pub use compiler::{Instruction, Program};
pub use error::{CompileError, MatchError, ReplaceError, ScanError, ScanErrorKind};
pub use match_info::{MatchInfo, MatchSpan};
pub use match_option::{MatchOption, ResumeMode};
pub use pattern::Pattern;
pub use pattern_cache::PatternCache;
pub use replace::Replacer;

/// Compile `pattern` with the default options.
pub fn compile(pattern: &str) -> Result<Pattern, CompileError> {
    Pattern::new(pattern)
}
