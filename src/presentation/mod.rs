//! Presentation layer for the terminal interface.
//!
//! Rendering of the stepper, step bodies, dialogs, and the key handling
//! that maps terminal input onto navigator commands and step-host forms.

pub mod ui;
pub mod input;

pub use ui::*;
pub use input::*;
