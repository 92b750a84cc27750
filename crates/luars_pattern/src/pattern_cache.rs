use ahash::RandomState;
use smol_str::SmolStr;
use std::collections::HashMap;

use crate::error::CompileError;
use crate::match_option::MatchOption;
use crate::pattern::Pattern;
use crate::pattern_limits::{MAX_CACHED_PATTERN_LEN, MAX_CACHED_PATTERNS};

/// Compiled-pattern cache for callers that see the same pattern strings
/// over and over (`string.gsub` in a loop).
/// - Short sources only, like short-string interning
/// - Bounded: the whole map is dropped once it is full
/// - Compile errors are not cached
pub struct PatternCache {
    map: HashMap<SmolStr, Pattern, RandomState>,
    option: MatchOption,
    hits: usize,
    misses: usize,
}

impl PatternCache {
    pub fn new() -> Self {
        Self::with_option(MatchOption::default())
    }

    pub fn with_option(option: MatchOption) -> Self {
        Self {
            map: HashMap::with_capacity_and_hasher(MAX_CACHED_PATTERNS, RandomState::new()),
            option,
            hits: 0,
            misses: 0,
        }
    }

    /// Return the compiled pattern for `source`, compiling it on a miss.
    pub fn get(&mut self, source: &str) -> Result<Pattern, CompileError> {
        if let Some(pattern) = self.map.get(source) {
            self.hits += 1;
            return Ok(pattern.clone());
        }

        self.misses += 1;
        let pattern = Pattern::with_option(source, self.option)?;
        if source.len() <= MAX_CACHED_PATTERN_LEN {
            if self.map.len() >= MAX_CACHED_PATTERNS {
                log::debug!("pattern cache full, dropping {} entries", self.map.len());
                self.map.clear();
            }
            self.map.insert(SmolStr::new(source), pattern.clone());
        }
        Ok(pattern)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// (hits, misses)
    pub fn stats(&self) -> (usize, usize) {
        (self.hits, self.misses)
    }

    pub fn clear(&mut self) {
        self.map.clear();
    }
}

impl Default for PatternCache {
    fn default() -> Self {
        Self::new()
    }
}
