//! Connectivity settings persistence
//!
//! The active [`ConnectivityConfig`] is wrapped in a [`StoredConnectivity`]
//! record with a magic number and format version, serialized with postcard
//! and written to the settings store under the `wifi-config` namespace.

use ptz_hal::{SettingsStore, StorageError, StorageKey};
use serde::{Deserialize, Serialize};

use super::types::ConnectivityConfig;

/// Settings namespace for connectivity data
pub const SETTINGS_NAMESPACE: &str = "wifi-config";

/// Magic number to identify a connectivity record
pub const CONNECTIVITY_MAGIC: u32 = 0x5054_5A43; // "PTZC"

/// Current connectivity record version
pub const CONNECTIVITY_VERSION: u8 = 1;

/// Upper bound for a serialized record
pub const MAX_RECORD_SIZE: usize = 128;

/// Persisted connectivity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct StoredConnectivity {
    /// Magic number for validation
    pub magic: u32,
    /// Data format version
    pub version: u8,
    /// Desired connectivity
    pub config: ConnectivityConfig,
}

impl StoredConnectivity {
    /// Wrap a configuration with the current header
    pub fn new(config: ConnectivityConfig) -> Self {
        Self {
            magic: CONNECTIVITY_MAGIC,
            version: CONNECTIVITY_VERSION,
            config,
        }
    }

    /// Check if the header matches this firmware
    pub fn is_valid(&self) -> bool {
        self.magic == CONNECTIVITY_MAGIC && self.version == CONNECTIVITY_VERSION
    }
}

/// Settings persistence error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PersistError {
    /// Underlying store failed
    Storage(StorageError),
    /// Record could not be encoded
    Serialize,
    /// Record could not be decoded
    Deserialize,
    /// Record was written by an incompatible version
    VersionMismatch,
}

impl From<StorageError> for PersistError {
    fn from(e: StorageError) -> Self {
        PersistError::Storage(e)
    }
}

/// Reads and writes the connectivity record
pub struct ConfigPersistence<S> {
    store: S,
}

impl<S: SettingsStore> ConfigPersistence<S> {
    /// Create a new persistence layer over a settings store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Load the stored configuration
    ///
    /// The returned configuration is repaired and has unused credentials
    /// cleared, so it can be applied directly.
    pub fn load(&mut self) -> Result<ConnectivityConfig, PersistError> {
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let len = self.store.get(
            SETTINGS_NAMESPACE,
            StorageKey::ConnectivityConfig,
            &mut buffer,
        )?;

        let bytes = buffer
            .get(..len)
            .ok_or(PersistError::Storage(StorageError::BufferTooSmall))?;
        let record: StoredConnectivity =
            postcard::from_bytes(bytes).map_err(|_| PersistError::Deserialize)?;
        if !record.is_valid() {
            return Err(PersistError::VersionMismatch);
        }

        let mut config = record.config;
        config.repair();
        config.clear_unused_credentials();
        Ok(config)
    }

    /// Load the stored configuration, or the access-point default
    pub fn load_or_default(&mut self) -> (ConnectivityConfig, Option<PersistError>) {
        match self.load() {
            Ok(config) => (config, None),
            Err(PersistError::Storage(StorageError::NotFound)) => {
                (ConnectivityConfig::default(), None)
            }
            Err(e) => (ConnectivityConfig::default(), Some(e)),
        }
    }

    /// Save a configuration
    pub fn save(&mut self, config: &ConnectivityConfig) -> Result<(), PersistError> {
        let mut config = config.clone();
        config.clear_unused_credentials();

        let record = StoredConnectivity::new(config);
        let mut buffer = [0u8; MAX_RECORD_SIZE];
        let bytes = postcard::to_slice(&record, &mut buffer).map_err(|_| PersistError::Serialize)?;

        self.store
            .put(SETTINGS_NAMESPACE, StorageKey::ConnectivityConfig, bytes)?;
        Ok(())
    }

    /// Access the underlying store
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Release the underlying store
    pub fn into_store(self) -> S {
        self.store
    }
}
