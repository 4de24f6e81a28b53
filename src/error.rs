use thiserror::Error;

/// Errors raised while committing user drafts into the workspace.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkspaceError {
    #[error("Parameter '{label}' is a select but no options were given")]
    SelectWithoutOptions { label: String },

    #[error("Parameter label must not be empty")]
    EmptyParameterLabel,

    #[error("Unknown node type '{0}', expected one of: step, region, custom")]
    UnknownNodeType(String),

    #[error("Unknown parameter type '{0}', expected one of: string, number, boolean, select")]
    UnknownParameterType(String),

    #[error("Node '{node_id}' does not support {action}")]
    NotSupported { node_id: String, action: &'static str },

    #[error("Custom parameter index {index} is out of range for node '{node_id}'")]
    ParameterIndexOutOfRange { node_id: String, index: usize },
}

/// Errors that can occur while reading or writing the persisted workspace record.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Storage I/O failed for record '{name}': {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to encode workspace record: {0}")]
    Encode(String),

    #[error("Failed to decode workspace record: {0}")]
    Decode(String),
}

/// Errors reported by a code generation transport.
///
/// These never escape `CodeGenerator::generate`, which falls back to the local
/// template instead.
#[derive(Error, Debug, Clone)]
pub enum CodegenError {
    #[error("Request to '{endpoint}' failed: {message}")]
    Transport { endpoint: String, message: String },

    #[error("Code generation service answered with status {0}")]
    Status(u16),

    #[error("Code generation response could not be read: {0}")]
    MalformedResponse(String),
}

/// Errors that can occur while loading a configuration file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file '{path}': {message}")]
    Parse { path: String, message: String },
}
