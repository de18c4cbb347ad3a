//! Exit code constants for the celldiff CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, unreadable or uncreatable files)
//! - 2: Read failure (malformed CSV or input I/O error mid-run)
//! - 3: Write failure (output I/O error mid-run)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or a file that could not be opened.
pub const USER_ERROR: i32 = 1;

/// Read failure: the input could not be parsed or read partway through.
pub const READ_FAILURE: i32 = 2;

/// Write failure: the output sink rejected a write or flush.
pub const WRITE_FAILURE: i32 = 3;
