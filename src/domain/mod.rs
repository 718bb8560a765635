pub mod models;
pub mod steps;
pub mod errors;

pub use models::*;
pub use steps::*;
pub use errors::*;
