//! Connectivity configuration
//!
//! Desired radio modes and credentials, controller tunables, and the
//! postcard-encoded record kept in the settings store.

pub mod persistence;
pub mod types;

pub use persistence::*;
pub use types::*;
