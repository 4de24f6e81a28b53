//! # Pipeforge - Machine-Learning Pipeline Workspace Model
//!
//! **Pipeforge** holds the state behind a visual pipeline editor: a directed
//! graph of configurable nodes describing a machine-learning workflow (data
//! collection, preprocessing, model selection, training, evaluation, tuning,
//! deployment). The graph's parameters are rendered into source code by a
//! remote generator, with a local scaffold as fallback.
//!
//! ## Core Workflow
//!
//! 1.  **Open a Workspace**: Create a `GraphController`, optionally backed by a
//!     `WorkspaceStore` so every mutation is persisted and restored on the next start.
//! 2.  **Shape the Graph**: Add, edit, move, connect and delete nodes. Step
//!     numbers stay contiguous from 1 after every change.
//! 3.  **Configure**: Region nodes expose a `StepParameterForm` derived from the
//!     step's schema; custom nodes grow their own typed parameter list.
//! 4.  **Generate**: Hand the accumulated `ParameterMap` to a `CodeGenerator`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pipeforge::prelude::*;
//! use pipeforge::node::{change_region_parameter, region_form};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = WorkspaceStore::with_defaults(FileBackend::new(".pipeforge"));
//!     let mut graph = GraphController::open_or_seed(store);
//!
//!     // Configure the data collection region through its form.
//!     let region = graph.node("region-1").ok_or("missing region")?;
//!     let mut form = region_form(region).ok_or("not a region node")?;
//!     change_region_parameter("region-1", &mut form, "source_type", "csv", &mut graph);
//!     change_region_parameter("region-1", &mut form, "sample_size", "500", &mut graph);
//!
//!     // Add a custom node under the preprocessing region and wire it in.
//!     let id = graph.add_node(
//!         NewNodeDraft::new(NodeType::Custom, "Dedupe").parent_region("Data Preprocessing"),
//!     );
//!     graph.connect("region-1", &id);
//!
//!     let code = CodeGenerator::<HttpTransport>::default().generate(graph.parameters());
//!     println!("{}", code);
//!     Ok(())
//! }
//! ```

pub mod codegen;
pub mod config;
pub mod error;
pub mod graph;
pub mod node;
pub mod params;
pub mod prelude;
pub mod schema;
pub mod store;
