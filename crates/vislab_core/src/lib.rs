//! Provide the visibility demonstration module for the vislab tour.
//!
//! This crate is intentionally small and dependency-light. It holds one module,
//! [`showcase`], whose declarations exist to demonstrate Rust's access-control
//! idiom: items with `pub` are visible to other crates and modules, items
//! without it are visible only inside their defining module.
//!
//! ## Notes
//!
//! - The crate boundary is part of the demonstration: consumers (the `vislab`
//!   CLI, the integration tests) can name only the exported half of the
//!   surface, and the compiler enforces it.
//! - The only IO is writing fixed demonstration lines to a caller-supplied
//!   `io::Write` sink; there is no state, no configuration, and no failure
//!   mode beyond the sink itself.

pub mod showcase;

pub use showcase::{PI, Profile, SCREEN_SIZE, Years, public_func, run_all};
