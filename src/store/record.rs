use crate::error::StoreError;
use crate::graph::GraphState;
use bincode::config::standard;
use bincode::serde::{decode_from_slice, encode_to_vec};
use serde::{Deserialize, Serialize};

/// The persisted envelope: a version tag followed by the graph state.
///
/// `version` comes first so the binary format can read it without decoding
/// the rest of the record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    pub version: u32,
    pub state: GraphState,
}

#[derive(Serialize)]
pub(crate) struct PersistedRecordRef<'a> {
    pub version: u32,
    pub state: &'a GraphState,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RecordHeader {
    pub version: u32,
}

/// On-disk encoding of a workspace record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageFormat {
    #[default]
    Json,
    Binary,
}

impl StorageFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            StorageFormat::Json => "json",
            StorageFormat::Binary => "bin",
        }
    }

    pub(crate) fn encode<T: Serialize>(&self, record: &T) -> Result<Vec<u8>, StoreError> {
        match self {
            StorageFormat::Json => {
                serde_json::to_vec_pretty(record).map_err(|e| StoreError::Encode(e.to_string()))
            }
            StorageFormat::Binary => {
                encode_to_vec(record, standard()).map_err(|e| StoreError::Encode(e.to_string()))
            }
        }
    }

    pub(crate) fn decode_header(&self, bytes: &[u8]) -> Result<RecordHeader, StoreError> {
        self.decode(bytes)
    }

    pub(crate) fn decode<T: serde::de::DeserializeOwned>(
        &self,
        bytes: &[u8],
    ) -> Result<T, StoreError> {
        match self {
            StorageFormat::Json => {
                serde_json::from_slice(bytes).map_err(|e| StoreError::Decode(e.to_string()))
            }
            StorageFormat::Binary => decode_from_slice(bytes, standard())
                .map(|(record, _)| record)
                .map_err(|e| StoreError::Decode(e.to_string())),
        }
    }
}
