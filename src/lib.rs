//! safestrings: bounded, truncation-safe string copy and concatenation.
//!
//! Every routine takes the destination capacity explicitly, never writes past
//! it, and always leaves the destination terminated. Truncation is reported
//! as [`Error::InsufficientBuffer`](error::Error::InsufficientBuffer), distinct
//! from rejected input.

#[cfg(feature = "banned")]
pub mod banned;
pub mod capacity;
pub mod cat;
pub mod copy;
pub mod error;
pub mod length;
pub mod str;
pub mod types;
pub mod wide;

pub use error::{Error, Result};
