//! Connectivity mode controller
//!
//! Resolves the desired station / access point / peer link combination to a
//! radio mode, drives station attempts with timeout and fallback, persists
//! the effective configuration and keeps dependent services running.

pub mod controller;
pub mod link;
pub mod mode;
pub mod services;
pub mod state;

pub use controller::*;
pub use link::*;
pub use mode::*;
pub use services::*;
pub use state::*;
