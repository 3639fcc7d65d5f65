//! CLI command implementations.

pub mod submit;
