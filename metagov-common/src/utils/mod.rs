//! utils
//!
//! Time helpers shared across the metagov crates.

pub mod time;

pub use time::ChainClock;
