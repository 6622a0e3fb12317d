//! Error types for the editor

use mailforge_blocks::RegistryError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EditorError {
    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Upload failed for block {block_id}: {reason}")]
    Upload { block_id: String, reason: String },
}
