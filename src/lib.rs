#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![deny(deprecated)]

//!
//! Access-Rights is a small permission bitset.
//!
//! It defines the read, write and execute flags, the `NONE` and `FULL`
//! convenience values, and pure helpers to test, combine and encode them.

// Module for common, shared scalar types (RightsBits).
pub mod types;

// Module for the rights algebra.
pub mod rights;

// Display impl for AccessRights.
mod display;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use rights::{
    add, convert_from_bits, convert_to_bits, has, is, join, remove, separate, AccessRights,
};
pub use types::RightsBits;

/// Installs a `tracing` subscriber filtered by `RUST_LOG`.
///
/// Does nothing if a global subscriber is already set.
#[cfg(feature = "log-init")]
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}
