use super::custom::CustomParameterType;
use super::model::{Node, NodePayload};
use crate::params::{FieldView, StepParameterForm};

/// Whether an anchor accepts or emits connections.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorKind {
    Target,
    Source,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Anchor {
    pub kind: AnchorKind,
    pub side: AnchorSide,
}

/// Every node has one inbound anchor on the left and one outbound on the right.
pub const NODE_ANCHORS: [Anchor; 2] = [
    Anchor {
        kind: AnchorKind::Target,
        side: AnchorSide::Left,
    },
    Anchor {
        kind: AnchorKind::Source,
        side: AnchorSide::Right,
    },
];

/// What the user may do with a rendered node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    pub edit: bool,
    pub delete: bool,
    pub parameter_form: bool,
    pub add_parameter: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CustomControl {
    Select { options: Vec<String> },
    Input { numeric: bool },
}

/// One editable row of a custom node's parameter list.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomParameterRow {
    pub index: usize,
    pub label: String,
    pub control: CustomControl,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NodeBody {
    Empty,
    Form(Vec<FieldView>),
    CustomParameters(Vec<CustomParameterRow>),
}

/// Presentation model of a single node card.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeCard {
    pub id: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: String,
    pub anchors: [Anchor; 2],
    pub capabilities: Capabilities,
    pub body: NodeBody,
}

/// Builds the card for `node`.
pub fn render(node: &Node) -> NodeCard {
    let data = &node.data;
    let (title, subtitle, capabilities, body) = match &node.payload {
        NodePayload::Step => (
            format!("Step {}: {}", data.step, data.label),
            None,
            Capabilities::default(),
            NodeBody::Empty,
        ),
        NodePayload::Region { parameters } => {
            let form = StepParameterForm::with_snapshot(data.step, parameters.clone());
            (
                format!("Step {}: {}", data.step, data.label),
                None,
                Capabilities {
                    edit: true,
                    delete: true,
                    parameter_form: true,
                    add_parameter: false,
                },
                NodeBody::Form(form.render()),
            )
        }
        NodePayload::Custom { parameters } => {
            let rows = parameters
                .iter()
                .enumerate()
                .map(|(index, param)| CustomParameterRow {
                    index,
                    label: param.label.clone(),
                    control: match &param.kind {
                        CustomParameterType::Select(options) => CustomControl::Select {
                            options: options.clone(),
                        },
                        kind => CustomControl::Input {
                            numeric: *kind == CustomParameterType::Number,
                        },
                    },
                    value: param.display_value(),
                })
                .collect();
            (
                data.label.clone(),
                Some(format!("Part of {}", data.region_type)),
                Capabilities {
                    edit: true,
                    delete: true,
                    parameter_form: false,
                    add_parameter: true,
                },
                NodeBody::CustomParameters(rows),
            )
        }
    };

    NodeCard {
        id: node.id.clone(),
        title,
        subtitle,
        description: data.description.clone(),
        anchors: NODE_ANCHORS,
        capabilities,
        body,
    }
}
