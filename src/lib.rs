//! JOBWIZ - Job Application Wizard Library
//!
//! A terminal wizard for assembling a job application dossier end to end,
//! built in Rust: initialize the opportunity and application, then attach
//! companies, contacts, documents, products, scheduled events, and actions,
//! and confirm from a summary. The session is persisted after every change
//! and resumes across launches.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
