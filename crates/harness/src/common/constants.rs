//! Harness-wide constants.

/// Default xorshift32 seed.
///
/// Also substituted for a zero seed, which is a fixed point of xorshift.
pub const DEFAULT_SEED: u32 = 314_159_265;

/// Default number of test cases per AMO kind.
pub const DEFAULT_NUM_CASES: u32 = 10_000;

/// Size of the shared word in bytes.
pub const WORD_BYTES: u64 = 4;

/// ANSI escape enabling bold text on the console.
pub const ANSI_BOLD: &str = "\x1b[1m";

/// ANSI escape resetting all text attributes.
pub const ANSI_RESET: &str = "\x1b[0m";
