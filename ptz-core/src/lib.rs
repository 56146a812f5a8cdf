//! Board-agnostic control plane for the PTZ head
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Connectivity configuration and its persisted record
//! - Radio mode resolution (pure decision table)
//! - Connectivity mode controller (apply cycle, fallback, services)
//! - Shared motion setpoint slot
//! - Command protocol engine (validate, classify, dispatch, reply)
//! - Diagnostic events and the cooperative control loop

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

#[macro_use]
mod log;

pub mod config;
pub mod connectivity;
pub mod diag;
pub mod engine;
pub mod motion;
pub mod runtime;

#[cfg(test)]
mod testing;

pub use config::{ConnectivityConfig, ControllerSettings};
pub use connectivity::{resolve, ConnectivityController, ControllerState, StationLink};
pub use diag::{Diagnostic, DiagnosticSink, NullDiagnostics};
pub use engine::{Dispatch, DropReason, ProtocolEngine};
pub use motion::SetpointSlot;
pub use runtime::{CommandPump, ControlLoop, Supervisor};
