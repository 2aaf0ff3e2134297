#![forbid(unsafe_code)]
//! vislab: a guided tour of Rust item visibility.
//!
//! The tour ports a classic teaching module built around a capitalization
//! convention (identifiers starting with an uppercase letter are exported,
//! the rest are package-private) into Rust's own access-control idiom, where
//! the `pub` keyword does the same job.
//!
//! The demonstration declarations live in the [`vislab_core`] crate behind a
//! real crate boundary; this crate provides the CLI around them plus the
//! [`conventions`] helpers that translate the capitalization rule into Rust
//! spellings.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?` / `map_err`. The `cli` module
//!   enforces `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod conventions;
pub mod version;

pub use vislab_core::showcase;

pub use conventions::{ConventionError, Visibility, classify};
