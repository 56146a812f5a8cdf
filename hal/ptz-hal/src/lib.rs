//! PTZ Head Hardware Abstraction Layer
//!
//! This crate defines the narrow interfaces through which the control plane
//! talks to the rest of the device. Chip-specific firmware implements them
//! on top of its radio stack, flash driver and motion controller; tests
//! implement them with in-memory fakes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  ptz-core (controller, protocol engine) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  ptz-hal (this crate - traits)          │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │ radio / flash │       │ motion stack  │
//! │   firmware    │       │  (steppers)   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`radio::WifiRadio`] - Radio mode, station link, access point, peer mode
//! - [`storage::SettingsStore`] - Namespaced persistent key-value settings
//! - [`datagram::DatagramTransport`] - Command datagram receive / reply
//! - [`service::ServiceLauncher`] - Dependent network services
//! - [`motion::PositionProvider`], [`motion::HomingTrigger`] - Motion stack hooks

#![no_std]
#![deny(unsafe_code)]

pub mod datagram;
pub mod motion;
pub mod radio;
pub mod service;
pub mod storage;

// Re-export key traits at crate root for convenience
pub use datagram::{DatagramTransport, PeerAddr, TransportError};
pub use motion::{HomingTrigger, PositionProvider};
pub use radio::{LinkStatus, RadioError, RadioMode, WifiRadio};
pub use service::{ServiceContext, ServiceError, ServiceKind, ServiceLauncher};
pub use storage::{SettingsStore, StorageError, StorageKey};
