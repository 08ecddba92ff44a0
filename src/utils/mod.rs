//! Browser utilities.
//!
//! Provides:
//! - [`dom`] - Window access, focus helpers and console logging
//! - [`HttpLoader`] - Fetch-based content loader with timeout

pub mod dom;
mod fetch;

pub use fetch::HttpLoader;
