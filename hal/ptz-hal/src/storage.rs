//! Settings storage abstractions
//!
//! Provides a trait for persistent, namespaced key-value storage that can be
//! implemented on top of the device's non-volatile settings partition.

/// Storage keys for persisted settings
///
/// Each key lives inside a namespace (see [`SettingsStore`]). The actual
/// storage implementation handles wear leveling and data integrity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum StorageKey {
    /// Connectivity mode flags and station credentials (binary postcard format)
    ConnectivityConfig = 0,
}

impl StorageKey {
    /// Get the key as a byte value
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Key name as used by string-keyed backends
    pub fn name(self) -> &'static str {
        match self {
            StorageKey::ConnectivityConfig => "connectivity",
        }
    }
}

/// Errors from settings storage operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Underlying storage operation failed
    Storage,
    /// Namespace could not be opened
    Namespace,
    /// Key not found
    NotFound,
    /// Buffer too small for the data
    BufferTooSmall,
    /// Storage is full
    Full,
}

/// Namespaced settings store
///
/// Values are opaque byte blobs; callers own the encoding. Implementations
/// should make `put` atomic per key where the medium allows it.
pub trait SettingsStore {
    /// Read a value by key into the provided buffer
    ///
    /// # Returns
    /// The number of bytes read, or [`StorageError::NotFound`] when the key
    /// has never been written in this namespace.
    fn get(
        &mut self,
        namespace: &str,
        key: StorageKey,
        buffer: &mut [u8],
    ) -> Result<usize, StorageError>;

    /// Write a value by key, replacing any previous value
    fn put(&mut self, namespace: &str, key: StorageKey, data: &[u8]) -> Result<(), StorageError>;
}
