//! Application layer managing state and business workflows.
//!
//! This module holds the wizard's state machine, its persisted state
//! container, and the terminal shell state that ties them to the
//! presentation layer.

pub mod navigator;
pub mod state;
pub mod store;

pub use navigator::*;
pub use state::*;
pub use store::*;
