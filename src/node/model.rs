use super::custom::CustomParameter;
use crate::error::WorkspaceError;
use crate::params::ParameterSnapshot;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A point on the canvas.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(with = "crate::params::value::lenient_number")]
    pub x: f64,
    #[serde(with = "crate::params::value::lenient_number")]
    pub y: f64,
}

impl Position {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The three node variants a workspace can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeType {
    /// Display-only pipeline step.
    Step,
    /// Configurable stage bound to a step schema.
    Region,
    /// User-defined node with an open-ended parameter list.
    Custom,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Step => "step",
            NodeType::Region => "region",
            NodeType::Custom => "custom",
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NodeType {
    type Err = WorkspaceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "step" => Ok(NodeType::Step),
            "region" => Ok(NodeType::Region),
            "custom" => Ok(NodeType::Custom),
            other => Err(WorkspaceError::UnknownNodeType(other.to_string())),
        }
    }
}

/// Fields shared by every node variant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    pub label: String,
    pub description: String,
    /// Position in the pipeline. Always within `1..=N` and unique.
    pub step: u32,
    /// The region this node belongs to: its own label for regions, the
    /// chosen parent region for custom nodes.
    pub region_type: String,
}

/// Variant-specific node state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum NodePayload {
    Step,
    Region { parameters: ParameterSnapshot },
    Custom { parameters: Vec<CustomParameter> },
}

impl NodePayload {
    pub fn empty(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Step => NodePayload::Step,
            NodeType::Region => NodePayload::Region {
                parameters: ParameterSnapshot::new(),
            },
            NodeType::Custom => NodePayload::Custom {
                parameters: Vec::new(),
            },
        }
    }
}

/// A node of the pipeline graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    pub position: Position,
    pub data: NodeData,
    pub payload: NodePayload,
}

impl Node {
    pub fn new(id: impl Into<String>, node_type: NodeType, position: Position, data: NodeData) -> Self {
        Self {
            id: id.into(),
            position,
            data,
            payload: NodePayload::empty(node_type),
        }
    }

    pub fn node_type(&self) -> NodeType {
        match self.payload {
            NodePayload::Step => NodeType::Step,
            NodePayload::Region { .. } => NodeType::Region,
            NodePayload::Custom { .. } => NodeType::Custom,
        }
    }

    pub fn label(&self) -> &str {
        &self.data.label
    }

    pub fn step(&self) -> u32 {
        self.data.step
    }

    pub fn region_parameters(&self) -> Option<&ParameterSnapshot> {
        match &self.payload {
            NodePayload::Region { parameters } => Some(parameters),
            _ => None,
        }
    }

    pub fn custom_parameters(&self) -> Option<&[CustomParameter]> {
        match &self.payload {
            NodePayload::Custom { parameters } => Some(parameters),
            _ => None,
        }
    }

    /// Merges `patch` into the node. Fields absent from the patch are kept.
    pub fn apply_patch(&mut self, patch: NodePatch) {
        if let Some(label) = patch.label {
            self.data.label = label;
        }
        if let Some(description) = patch.description {
            self.data.description = description;
        }
        if let Some(updated) = patch.custom_parameters {
            match &mut self.payload {
                NodePayload::Custom { parameters } => *parameters = updated,
                _ => log::debug!(
                    "Node '{}' is not a custom node, dropping custom parameters from patch",
                    self.id
                ),
            }
        }
    }
}

/// A partial update of a node's data.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NodePatch {
    pub label: Option<String>,
    pub description: Option<String>,
    pub custom_parameters: Option<Vec<CustomParameter>>,
}

impl NodePatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn custom_parameters(mut self, parameters: Vec<CustomParameter>) -> Self {
        self.custom_parameters = Some(parameters);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.label.is_none() && self.description.is_none() && self.custom_parameters.is_none()
    }
}
