use super::model::NodePatch;
use crate::params::ParameterSnapshot;

/// The operations a node may trigger on the graph that owns it.
///
/// Passed into node interactions by the caller instead of being stored on
/// the node, so nodes stay plain data.
pub trait NodeActions {
    /// Removes the node from the graph.
    fn on_delete(&mut self, node_id: &str);

    /// Merges `patch` into the node's data.
    fn on_update(&mut self, node_id: &str, patch: NodePatch);

    /// Replaces the node's parameter snapshot.
    fn on_parameter_update(&mut self, node_id: &str, snapshot: ParameterSnapshot);
}
