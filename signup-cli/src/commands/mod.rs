//! CLI command implementations.

pub mod prompt;
pub mod validate;
