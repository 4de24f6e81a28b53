pub mod backend;
pub mod record;

pub use backend::*;
pub use record::*;

use crate::error::StoreError;
use crate::graph::GraphState;

/// Record name used by default for the workspace.
pub const DEFAULT_STORE_NAME: &str = "workspace-storage";
/// Current version of the persisted workspace shape.
pub const DEFAULT_STORE_VERSION: u32 = 1;

/// Named, versioned persistence of a workspace graph.
///
/// A record written under another version is discarded on load rather than
/// migrated.
pub struct WorkspaceStore {
    backend: Box<dyn StorageBackend>,
    name: String,
    version: u32,
    format: StorageFormat,
}

impl WorkspaceStore {
    pub fn new(
        backend: impl StorageBackend + 'static,
        name: impl Into<String>,
        version: u32,
        format: StorageFormat,
    ) -> Self {
        Self {
            backend: Box::new(backend),
            name: name.into(),
            version,
            format,
        }
    }

    /// A JSON store with the default name and version.
    pub fn with_defaults(backend: impl StorageBackend + 'static) -> Self {
        Self::new(
            backend,
            DEFAULT_STORE_NAME,
            DEFAULT_STORE_VERSION,
            StorageFormat::Json,
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn format(&self) -> StorageFormat {
        self.format
    }

    fn key(&self) -> String {
        format!("{}.{}", self.name, self.format.extension())
    }

    /// Reads the stored record, if any, regardless of its version.
    pub fn load(&self) -> Result<Option<PersistedRecord>, StoreError> {
        let Some(bytes) = self.backend.read(&self.key())? else {
            return Ok(None);
        };
        let header = self.format.decode_header(&bytes)?;
        if header.version != self.version {
            log::warn!(
                "Discarding '{}' record with version {} (expected {})",
                self.name,
                header.version,
                self.version
            );
            return Ok(None);
        }
        self.format.decode(&bytes).map(Some)
    }

    /// Returns the stored graph, or an empty one if the record is absent,
    /// from another version or unreadable.
    pub fn hydrate(&self) -> GraphState {
        match self.load() {
            Ok(Some(record)) => {
                log::debug!(
                    "Rehydrated '{}' with {} nodes and {} edges",
                    self.name,
                    record.state.nodes.len(),
                    record.state.edges.len()
                );
                record.state
            }
            Ok(None) => GraphState::default(),
            Err(e) => {
                log::warn!("Could not rehydrate '{}', starting empty: {}", self.name, e);
                GraphState::default()
            }
        }
    }

    /// Writes `state` under the current version.
    pub fn persist(&self, state: &GraphState) -> Result<(), StoreError> {
        let record = PersistedRecordRef {
            version: self.version,
            state,
        };
        let bytes = self.format.encode(&record)?;
        self.backend.write(&self.key(), &bytes)
    }

    /// Removes the stored record.
    pub fn clear(&self) -> Result<(), StoreError> {
        self.backend.remove(&self.key())
    }
}
