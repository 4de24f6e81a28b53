use super::change::{EdgeChange, NodeChange};
use super::edge::Edge;
use super::layout::grid_position;
use super::state::GraphState;
use crate::node::{Node, NodeActions, NodeData, NodePatch, NodePayload, NodeType, Position};
use crate::params::{ParameterMap, ParameterSnapshot};
use crate::schema;
use crate::store::WorkspaceStore;

/// Descriptions of the predefined region nodes, by step.
const REGION_DESCRIPTIONS: [&str; 7] = [
    "Configure data collection parameters and sources",
    "Set up data cleaning and preprocessing steps",
    "Choose and configure the ML model",
    "Configure training parameters and process",
    "Set up evaluation metrics and validation",
    "Configure hyperparameter tuning process",
    "Set up model deployment configuration",
];

/// The add-node form's pending values.
#[derive(Debug, Clone, PartialEq)]
pub struct NewNodeDraft {
    pub node_type: NodeType,
    pub label: String,
    pub description: String,
    /// Label of the region a custom node belongs to.
    pub parent_region: Option<String>,
}

impl NewNodeDraft {
    pub fn new(node_type: NodeType, label: impl Into<String>) -> Self {
        Self {
            node_type,
            label: label.into(),
            description: String::new(),
            parent_region: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn parent_region(mut self, region: impl Into<String>) -> Self {
        self.parent_region = Some(region.into());
        self
    }
}

/// Owns the workspace graph and applies every mutation to it.
///
/// Mutations are applied immediately. When a store is attached, the full
/// state is mirrored to it after each one.
#[derive(Default)]
pub struct GraphController {
    state: GraphState,
    store: Option<WorkspaceStore>,
}

impl GraphController {
    /// Creates an empty, unpersisted controller.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(mut state: GraphState) -> Self {
        state.renumber_steps();
        state.sync_edge_seq();
        Self { state, store: None }
    }

    /// Creates a controller holding the seven predefined pipeline regions.
    pub fn with_default_regions() -> Self {
        Self::from_state(default_regions())
    }

    /// Rehydrates from `store` and mirrors every later mutation into it.
    pub fn open(store: WorkspaceStore) -> Self {
        let mut controller = Self::from_state(store.hydrate());
        controller.store = Some(store);
        controller
    }

    /// Like `open`, but seeds the default regions when the store holds nothing.
    ///
    /// An unreadable record is left in place: the defaults are shown but not
    /// written until the next mutation.
    pub fn open_or_seed(store: WorkspaceStore) -> Self {
        let (state, seeded) = match store.load() {
            Ok(Some(record)) if !record.state.is_empty() => (record.state, false),
            Ok(_) => (default_regions(), true),
            Err(e) => {
                log::warn!(
                    "Record '{}' is unreadable, leaving it untouched: {}",
                    store.name(),
                    e
                );
                (default_regions(), false)
            }
        };
        let mut controller = Self::from_state(state);
        controller.store = Some(store);
        if seeded {
            controller.sync();
        }
        controller
    }

    /// Replaces the whole graph with the seven predefined regions.
    pub fn reset(&mut self) {
        self.state = default_regions();
        self.sync();
    }

    pub fn nodes(&self) -> &[Node] {
        &self.state.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.state.edges
    }

    pub fn parameters(&self) -> &ParameterMap {
        &self.state.parameters
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.state.node(id)
    }

    pub fn state(&self) -> &GraphState {
        &self.state
    }

    pub fn into_state(self) -> GraphState {
        self.state
    }

    /// Appends a node built from `draft` and returns its id.
    ///
    /// The id is `{type}-{count + 1}` and the step is `count + 1`. Positional
    /// counting can produce an id that is already taken once nodes have been
    /// deleted; the collision is logged and the suffix advanced until free.
    pub fn add_node(&mut self, draft: NewNodeDraft) -> String {
        let count = self.state.nodes.len();
        let id = self.allocate_id(draft.node_type, count + 1);

        let region_type = match draft.node_type {
            NodeType::Custom => draft.parent_region.unwrap_or_default(),
            _ => draft.label.clone(),
        };
        let data = NodeData {
            label: draft.label,
            description: draft.description,
            step: count as u32 + 1,
            region_type,
        };
        let node = Node::new(id.clone(), draft.node_type, grid_position(count), data);

        log::debug!("Adding {} node '{}' at step {}", draft.node_type, id, count + 1);
        self.state.nodes.push(node);
        self.sync();
        id
    }

    fn allocate_id(&self, node_type: NodeType, mut suffix: usize) -> String {
        let candidate = format!("{}-{}", node_type, suffix);
        if self.node(&candidate).is_none() {
            return candidate;
        }
        loop {
            suffix += 1;
            let resolved = format!("{}-{}", node_type, suffix);
            if self.node(&resolved).is_none() {
                log::warn!(
                    "Node id '{}' is already taken, assigning '{}' instead",
                    candidate,
                    resolved
                );
                return resolved;
            }
        }
    }

    /// Merges `patch` into the node's data. Unknown ids are ignored.
    pub fn update_node(&mut self, id: &str, patch: NodePatch) -> bool {
        let Some(node) = self.state.node_mut(id) else {
            log::debug!("Ignoring update for unknown node '{}'", id);
            return false;
        };
        node.apply_patch(patch);
        self.sync();
        true
    }

    /// Removes a node and every edge touching it, then renumbers steps by position.
    pub fn delete_node(&mut self, id: &str) -> bool {
        let before = self.state.nodes.len();
        self.state.nodes.retain(|n| n.id != id);
        if self.state.nodes.len() == before {
            log::debug!("Ignoring delete for unknown node '{}'", id);
            return false;
        }

        self.state.renumber_steps();
        self.state.edges.retain(|e| !e.touches(id));
        log::debug!(
            "Deleted node '{}', {} nodes and {} edges remain",
            id,
            self.state.nodes.len(),
            self.state.edges.len()
        );
        self.sync();
        true
    }

    /// Replaces the parameter snapshot of a node.
    ///
    /// The snapshot is stored in the parameter map and, for region nodes, on
    /// the node itself so its form reopens with the same values.
    pub fn update_parameters(&mut self, id: &str, snapshot: ParameterSnapshot) -> bool {
        let Some(node) = self.state.node_mut(id) else {
            log::debug!("Ignoring parameter update for unknown node '{}'", id);
            return false;
        };
        if let NodePayload::Region { parameters } = &mut node.payload {
            *parameters = snapshot.clone();
        }
        self.state.parameters.replace(id, snapshot);
        self.sync();
        true
    }

    /// Connects `source` to `target`.
    ///
    /// Returns `None` if either endpoint does not exist. Repeated connections
    /// between the same pair are kept as separate edges.
    pub fn connect(&mut self, source: &str, target: &str) -> Option<&Edge> {
        if self.node(source).is_none() || self.node(target).is_none() {
            log::debug!(
                "Refusing edge '{}' -> '{}': endpoint does not exist",
                source,
                target
            );
            return None;
        }

        self.state.edge_seq += 1;
        let edge = Edge::new(format!("edge-{}", self.state.edge_seq), source, target);
        log::debug!("Connecting '{}' -> '{}' as '{}'", source, target, edge.id);
        self.state.edges.push(edge);
        self.sync();
        self.state.edges.last()
    }

    /// Moves a node. Nothing but its position changes.
    ///
    /// Positions with a NaN or infinite coordinate are refused.
    pub fn move_node(&mut self, id: &str, position: Position) -> bool {
        if !position.is_finite() {
            log::warn!("Refusing to move '{}' to non-finite position {:?}", id, position);
            return false;
        }
        let Some(node) = self.state.node_mut(id) else {
            return false;
        };
        node.position = position;
        self.sync();
        true
    }

    /// Applies widget change events to nodes. Only finite position changes are honored.
    pub fn apply_node_changes(&mut self, changes: &[NodeChange]) {
        let mut moved = false;
        for node in &mut self.state.nodes {
            let change = changes.iter().find(|c| c.id() == node.id);
            if let Some(NodeChange::Position {
                position: Some(position),
                ..
            }) = change
            {
                if !position.is_finite() {
                    log::debug!("Ignoring non-finite position change for '{}'", node.id);
                    continue;
                }
                node.position = *position;
                moved = true;
            }
        }
        if moved {
            self.sync();
        }
    }

    /// Applies widget change events to edges.
    ///
    /// Selection is recorded; removal events are not acted on here, edges
    /// only disappear with their endpoint nodes.
    pub fn apply_edge_changes(&mut self, changes: &[EdgeChange]) {
        let mut changed = false;
        for edge in &mut self.state.edges {
            match changes.iter().find(|c| c.id() == edge.id) {
                Some(EdgeChange::Select { selected, .. }) => {
                    edge.selected = *selected;
                    changed = true;
                }
                Some(EdgeChange::Remove { id }) => {
                    log::debug!("Edge removal for '{}' left to node deletion", id);
                }
                None => {}
            }
        }
        if changed {
            self.sync();
        }
    }

    /// Replaces the node list wholesale, renumbering steps by position.
    pub fn set_nodes(&mut self, nodes: Vec<Node>) {
        self.state.nodes = nodes;
        self.state.renumber_steps();
        let GraphState { nodes, edges, .. } = &mut self.state;
        edges.retain(|e| {
            nodes.iter().any(|n| n.id == e.source) && nodes.iter().any(|n| n.id == e.target)
        });
        self.sync();
    }

    /// Replaces the edge list wholesale. Edges with missing endpoints are dropped.
    pub fn set_edges(&mut self, edges: Vec<Edge>) {
        let (kept, dropped): (Vec<_>, Vec<_>) = edges
            .into_iter()
            .partition(|e| self.node(&e.source).is_some() && self.node(&e.target).is_some());
        if !dropped.is_empty() {
            log::warn!("Dropping {} edges with missing endpoints", dropped.len());
        }
        self.state.edges = kept;
        self.state.sync_edge_seq();
        self.sync();
    }

    fn sync(&self) {
        if let Some(store) = &self.store {
            if let Err(e) = store.persist(&self.state) {
                log::warn!("Failed to mirror workspace to '{}': {}", store.name(), e);
            }
        }
    }
}

impl NodeActions for GraphController {
    fn on_delete(&mut self, node_id: &str) {
        self.delete_node(node_id);
    }

    fn on_update(&mut self, node_id: &str, patch: NodePatch) {
        self.update_node(node_id, patch);
    }

    fn on_parameter_update(&mut self, node_id: &str, snapshot: ParameterSnapshot) {
        self.update_parameters(node_id, snapshot);
    }
}

fn default_regions() -> GraphState {
    let nodes = schema::steps()
        .zip(REGION_DESCRIPTIONS)
        .enumerate()
        .map(|(index, ((step, schema), description))| {
            let data = NodeData {
                label: schema.title.to_string(),
                description: description.to_string(),
                step,
                region_type: schema.title.to_string(),
            };
            Node::new(
                format!("{}-{}", NodeType::Region, step),
                NodeType::Region,
                grid_position(index),
                data,
            )
        })
        .collect();

    GraphState {
        nodes,
        ..GraphState::default()
    }
}
