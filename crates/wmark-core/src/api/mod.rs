//! Builder-style entry points over the path-level operations.

pub mod embed;
pub mod extract;
