//! Schema module - Configuration types for boards and sprite animations.

mod config;
mod piece;

pub use config::*;
pub use piece::*;
