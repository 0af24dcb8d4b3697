//! Standard exit codes for CLI operations
//!
//! Failed external commands pass their own exit codes through, so this
//! table only covers failures deckhand produces itself.

#![allow(dead_code)]

/// Success - operation completed without errors
pub const SUCCESS: i32 = 0;

/// General error - missing tool or invalid invocation
pub const ERROR: i32 = 1;
