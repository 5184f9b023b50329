//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the config location and the reference keypad.

/// Directory name under the platform config directory.
pub const CONFIG_DIR_NAME: &str = "Knightpad";

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "KNIGHTPAD_CONFIG_DIR";

/// Cell marker for positions without a key.
pub const BLOCKED_CELL: char = '_';

/// Reference keypad rows, top to bottom.
pub const CANONICAL_ROWS: [&str; 4] = ["ABCDE", "FGHIJ", "KLMNO", "_123_"];

/// Vowels of the reference keypad.
pub const CANONICAL_VOWELS: &str = "AEIO";

/// Vowel budget used when none is given.
pub const DEFAULT_MAX_VOWELS: usize = 2;

/// Longest sequence `verify` will enumerate key by key.
pub const MAX_VERIFY_LENGTH: usize = 12;

/// Lengths reported by `table` when none are given.
pub const DEFAULT_TABLE_LENGTHS: [u64; 3] = [10, 16, 32];
