//! README Generator
//!
//! Builds `README.md` from the crate documentation in `src/lib.md`.
//!
//! This library provides:
//! - The line rewriter that cleans doc-test snippets for README display
//! - File-level generation and up-to-date checking
//! - Configuration management

pub mod config;
pub mod error;
pub mod generate;
pub mod rewriter;

// Re-exports for clean public API
pub use config::Config;
pub use error::GenerateError;
pub use generate::{check, generate};
pub use rewriter::{rewrite_lines, rewrite_lines_with_stats, rewrite_str, RewriteStats, Rewriter};
