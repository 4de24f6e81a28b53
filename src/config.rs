use crate::codegen::{CodeGenerator, DEFAULT_ENDPOINT, HttpTransport};
use crate::error::ConfigError;
use crate::store::{
    DEFAULT_STORE_NAME, DEFAULT_STORE_VERSION, FileBackend, StorageFormat, WorkspaceStore,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Runtime settings of a workspace, usually loaded from a JSON file.
///
/// Every field is optional in the file and falls back to its default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceConfig {
    pub store_name: String,
    pub store_version: u32,
    pub storage_dir: PathBuf,
    pub storage_format: StorageFormat,
    pub endpoint: String,
    pub timeout_secs: u64,
}

impl Default for WorkspaceConfig {
    fn default() -> Self {
        Self {
            store_name: DEFAULT_STORE_NAME.to_string(),
            store_version: DEFAULT_STORE_VERSION,
            storage_dir: PathBuf::from(".pipeforge"),
            storage_format: StorageFormat::Json,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: 10,
        }
    }
}

impl WorkspaceConfig {
    /// Load a config from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Opens the file-backed store described by this config.
    pub fn open_store(&self) -> WorkspaceStore {
        WorkspaceStore::new(
            FileBackend::new(&self.storage_dir),
            &self.store_name,
            self.store_version,
            self.storage_format,
        )
    }

    pub fn code_generator(&self) -> CodeGenerator<HttpTransport> {
        CodeGenerator::new(HttpTransport::new(&self.endpoint, self.timeout()))
    }
}
