use super::edge::Edge;
use crate::node::Node;
use crate::params::ParameterMap;
use serde::{Deserialize, Serialize};

/// Everything the workspace persists: nodes, edges and the parameter map.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphState {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub parameters: ParameterMap,
    /// Sequence number of the last edge created.
    #[serde(default)]
    pub edge_seq: u64,
}

impl GraphState {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty() && self.edges.is_empty() && self.parameters.is_empty()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub(crate) fn node_mut(&mut self, id: &str) -> Option<&mut Node> {
        self.nodes.iter_mut().find(|n| n.id == id)
    }

    /// Advances `edge_seq` past every `edge-N` id already present.
    pub(crate) fn sync_edge_seq(&mut self) {
        let highest = self
            .edges
            .iter()
            .filter_map(|e| e.id.strip_prefix("edge-")?.parse::<u64>().ok())
            .max()
            .unwrap_or(0);
        self.edge_seq = self.edge_seq.max(highest);
    }

    /// Reassigns every node's step to its list position plus one.
    pub(crate) fn renumber_steps(&mut self) {
        for (index, node) in self.nodes.iter_mut().enumerate() {
            node.data.step = index as u32 + 1;
        }
    }
}
