//! Command implementations.
//!
//! Each command hydrates the store it needs from the given storage, applies
//! one operation, and returns the rendered result for `main` to print.

pub mod cart;
pub mod reset;
pub mod wishlist;

use clap::ValueEnum;

/// How command results are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable listing
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}
