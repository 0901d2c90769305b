//! Commands
//!
//! Frontend-facing entry points. Each command takes the shared [`AppState`]
//! and returns a [`CommandResponse`]; failures are carried in the response,
//! never raised.
//!
//! [`AppState`]: crate::state::AppState
//! [`CommandResponse`]: crate::models::response::CommandResponse

pub mod catalog;
pub mod form;
pub mod health;
pub mod preview;
pub mod settings;

pub use catalog::*;
pub use form::*;
pub use health::*;
pub use preview::*;
pub use settings::*;
