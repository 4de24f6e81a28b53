//! Prelude module for convenient imports
//!
//! Re-exports the types needed to build, edit, persist and render a pipeline
//! workspace.
//!
//! # Example
//!
//! ```rust,no_run
//! use pipeforge::prelude::*;
//!
//! let store = WorkspaceStore::with_defaults(MemoryBackend::new());
//! let mut graph = GraphController::open_or_seed(store);
//! graph.connect("region-1", "region-2");
//!
//! let code = CodeGenerator::<HttpTransport>::default().generate(graph.parameters());
//! println!("{}", code);
//! ```

// Graph state
pub use crate::graph::{Edge, EdgeChange, GraphController, GraphState, NewNodeDraft, NodeChange};

// Nodes and interactions
pub use crate::node::{
    CustomParameter, CustomParameterType, EditDraft, Node, NodeActions, NodeCard, NodePatch,
    NodeType, ParameterDraft, ParameterTypeTag, Position, render,
};

// Parameters and schemas
pub use crate::params::{ParamValue, ParameterMap, ParameterSnapshot, StepParameterForm};
pub use crate::schema::{ParameterKind, StepSchema};

// Code generation
pub use crate::codegen::{CodeGenerator, CodePreview, CodegenTransport, HttpTransport};

// Persistence and configuration
pub use crate::config::WorkspaceConfig;
pub use crate::store::{FileBackend, MemoryBackend, StorageFormat, WorkspaceStore};

// Error types
pub use crate::error::{CodegenError, ConfigError, StoreError, WorkspaceError};
