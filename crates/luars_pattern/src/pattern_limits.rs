//! Centralized pattern engine limits.
//!
//! Mirrors the pattern section of Lua 5.5's `luaconf.h` / `lstrlib.c`.
//! All magic numbers that bound scanning and matching are collected here.

// ===== Captures =====

/// Maximum number of captures in a single pattern.
/// Matches Lua 5.5's LUA_MAXCAPTURES.
pub const LUA_MAXCAPTURES: usize = 32;

// ===== Matching =====

/// Default bound on pending backtrack entries in one match attempt.
/// Every iteration of a greedy `*` or `+` leaves one entry behind, so this
/// caps how far a single repeat can run before the search fails.
pub const MAX_BACKTRACK_ENTRIES: usize = 1_000_000;

// ===== Cache =====

/// Patterns kept by a `PatternCache` before it starts over.
pub const MAX_CACHED_PATTERNS: usize = 64;

/// Longer pattern sources are compiled but never cached.
pub const MAX_CACHED_PATTERN_LEN: usize = 40;
