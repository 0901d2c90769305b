//! Data Models
//!
//! Settings and the response shapes returned by commands.

pub mod response;
pub mod settings;

pub use response::*;
pub use settings::*;
