//! Metric registration services.

pub mod trends;

pub use trends::*;
