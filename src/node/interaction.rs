//! User interactions on a single node.
//!
//! Each function validates against the node it is given and reports the
//! outcome through the injected `NodeActions`. Pass the node as it currently
//! is in the graph: list edits are computed from its present parameters.
//! Step nodes are display-only and reject every interaction.

use super::actions::NodeActions;
use super::custom::ParameterDraft;
use super::model::{Node, NodePatch, NodePayload};
use crate::error::WorkspaceError;
use crate::params::StepParameterForm;

/// The edit modal's working copy of a node's label and description.
#[derive(Debug, Clone, PartialEq)]
pub struct EditDraft {
    node_id: String,
    pub label: String,
    pub description: String,
}

impl EditDraft {
    /// Opens an edit draft pre-filled with the node's current values.
    ///
    /// Returns `None` for step nodes, which cannot be edited.
    pub fn for_node(node: &Node) -> Option<Self> {
        if matches!(node.payload, NodePayload::Step) {
            return None;
        }
        Some(Self {
            node_id: node.id.clone(),
            label: node.data.label.clone(),
            description: node.data.description.clone(),
        })
    }

    pub fn node_id(&self) -> &str {
        &self.node_id
    }

    /// Commits the draft. Only label and description are sent; the owner merges them.
    pub fn confirm(self, actions: &mut impl NodeActions) {
        let patch = NodePatch::new()
            .label(self.label)
            .description(self.description);
        actions.on_update(&self.node_id, patch);
    }
}

/// Asks the owner to remove `node`.
pub fn request_delete(node: &Node, actions: &mut impl NodeActions) -> Result<(), WorkspaceError> {
    if matches!(node.payload, NodePayload::Step) {
        return Err(not_supported(node, "deletion"));
    }
    actions.on_delete(&node.id);
    Ok(())
}

/// Builds the parameter form of a region node, seeded with its stored snapshot.
pub fn region_form(node: &Node) -> Option<StepParameterForm> {
    node.region_parameters()
        .map(|snapshot| StepParameterForm::with_snapshot(node.data.step, snapshot.clone()))
}

/// Applies one form change and forwards the resulting snapshot for `node_id`.
///
/// The caller keeps `form` open across changes, so each update carries every
/// value entered so far. Returns `false` if the schema has no such parameter.
pub fn change_region_parameter(
    node_id: &str,
    form: &mut StepParameterForm,
    key: &str,
    raw: &str,
    actions: &mut impl NodeActions,
) -> bool {
    match form.on_change(key, raw) {
        Some(update) => {
            actions.on_parameter_update(node_id, update.snapshot);
            true
        }
        None => false,
    }
}

/// Appends the parameter described by `draft` to a custom node.
pub fn add_custom_parameter(
    node: &Node,
    draft: ParameterDraft,
    actions: &mut impl NodeActions,
) -> Result<(), WorkspaceError> {
    let existing = node
        .custom_parameters()
        .ok_or_else(|| not_supported(node, "custom parameters"))?;
    let parameter = draft.commit()?;

    let mut parameters = existing.to_vec();
    parameters.push(parameter);
    actions.on_update(&node.id, NodePatch::new().custom_parameters(parameters));
    Ok(())
}

/// Sets the current value of the custom parameter at `index`.
pub fn set_custom_parameter_value(
    node: &Node,
    index: usize,
    raw: &str,
    actions: &mut impl NodeActions,
) -> Result<(), WorkspaceError> {
    let existing = node
        .custom_parameters()
        .ok_or_else(|| not_supported(node, "custom parameters"))?;

    let mut parameters = existing.to_vec();
    let parameter =
        parameters
            .get_mut(index)
            .ok_or_else(|| WorkspaceError::ParameterIndexOutOfRange {
                node_id: node.id.clone(),
                index,
            })?;
    parameter.set_raw_value(raw);
    actions.on_update(&node.id, NodePatch::new().custom_parameters(parameters));
    Ok(())
}

fn not_supported(node: &Node, action: &'static str) -> WorkspaceError {
    WorkspaceError::NotSupported {
        node_id: node.id.clone(),
        action,
    }
}
