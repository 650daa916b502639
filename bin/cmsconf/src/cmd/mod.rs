//! Command implementations.

pub mod render;
pub mod serve;
