//! Error types for the page controller.
//!
//! None of these are fatal. The page layer turns them into alerts or log
//! lines; the `Display` text of the user-facing variants is the alert text.

use thiserror::Error;

/// Failure writing one of the stored records.
#[derive(Error, Debug)]
pub enum StorageError {
    /// The record could not be encoded as JSON.
    #[error("failed to serialize '{key}': {source}")]
    Serialize {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The browser refused the write, usually because the quota is full.
    #[error("failed to write '{key}' to local storage")]
    Write { key: &'static str },
}

#[derive(Error, Debug)]
pub enum PlantError {
    #[error("No plant selected for update. Click Edit on a plant first.")]
    NoSelection,

    /// The index no longer points into the stored list.
    #[error("plant #{index} no longer exists (list has {len})")]
    StaleIndex { index: usize, len: usize },

    #[error(transparent)]
    Storage(#[from] StorageError),
}

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Enter email")]
    MissingEmail,

    #[error("Enter admin email")]
    MissingAdminEmail,

    #[error(transparent)]
    Storage(#[from] StorageError),
}
