//! Byte/megabyte conversions shared by the report and the formatters.
//!
//! All sizes are carried as `u64` bytes. Megabytes are binary (1024 * 1024)
//! and only appear at the reporting boundary.

pub const BYTES_PER_MB: u64 = 1024 * 1024;

/// Items at or above this many MB are highlighted in human-readable output.
pub const LARGE_ITEM_MB: f64 = 1024.0;

/// Convert a byte count to (unrounded) megabytes.
pub fn bytes_to_mb(bytes: u64) -> f64 {
    bytes as f64 / BYTES_PER_MB as f64
}

/// Round a megabyte value to two decimals.
pub fn round_mb(mb: f64) -> f64 {
    (mb * 100.0).round() / 100.0
}

pub fn is_large(size_mb: f64) -> bool {
    size_mb >= LARGE_ITEM_MB
}
