//! Data models for the UI layer.
//!
//! - [`OutputLine`] - Terminal transcript entries

mod terminal;

pub use terminal::{OutputLine, OutputLineData};
