//! Form Module
//!
//! Form state management for the prompt builder.
//!
//! - `state` - `FormState` reducer over the prompt record and preset selection
//! - `session` - `PromptSession`, the form plus its preview under one reducer

pub mod session;
pub mod state;

pub use session::PromptSession;
pub use state::{FormAction, FormChange, FormState};
