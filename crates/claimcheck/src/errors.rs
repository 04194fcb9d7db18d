//! Exit codes for claimcheck
//!
//! Mismatched claims are not failures: a completed run always exits 0.

use claimcheck_common::ClaimCheckError;

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when an input file has an unsupported format or shape
pub const EXIT_INPUT_FORMAT: i32 = 64;

/// Exit code when an input file cannot be read
pub const EXIT_INPUT_UNREADABLE: i32 = 66;

/// Exit code for invalid configuration
pub const EXIT_CONFIG: i32 = 78;

/// Pick the exit code for a failed run.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<ClaimCheckError>())
        .map(ClaimCheckError::code)
        .unwrap_or(EXIT_GENERAL_ERROR)
}
