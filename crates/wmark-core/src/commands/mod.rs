//! Thin path-level command functions, one per direction, used by the CLI.

mod embed;
mod extract;

pub use embed::embed;
pub use extract::extract;

/// Embedding strength used when the caller does not pass one.
pub const DEFAULT_ALPHA: f32 = 0.05;
