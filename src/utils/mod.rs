//! Utility functions shared by configuration and metric registration.

pub mod sanitize;

pub use sanitize::*;
