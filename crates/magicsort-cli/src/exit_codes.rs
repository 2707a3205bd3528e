//! Process exit codes. Part of the CLI contract.

pub const SUCCESS: i32 = 0;
pub const NOT_FOUND: i32 = 1; // No cached seed, or search limit reached
pub const CONFIG_ERROR: i32 = 2; // Bad config, bad input, or unexpected failure
