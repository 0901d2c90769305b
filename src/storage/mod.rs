//! Storage Layer
//!
//! Handles all data persistence: the key-value form store and JSON config.

pub mod config;
pub mod kv;

pub use config::*;
pub use kv::*;
