use crate::node::Position;

/// A change reported by the graph widget for a node.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeChange {
    Position {
        id: String,
        position: Option<Position>,
        dragging: bool,
    },
    Select {
        id: String,
        selected: bool,
    },
    Dimensions {
        id: String,
        width: f64,
        height: f64,
    },
    Remove {
        id: String,
    },
}

impl NodeChange {
    pub fn id(&self) -> &str {
        match self {
            NodeChange::Position { id, .. }
            | NodeChange::Select { id, .. }
            | NodeChange::Dimensions { id, .. }
            | NodeChange::Remove { id } => id,
        }
    }
}

/// A change reported by the graph widget for an edge.
#[derive(Debug, Clone, PartialEq)]
pub enum EdgeChange {
    Select { id: String, selected: bool },
    Remove { id: String },
}

impl EdgeChange {
    pub fn id(&self) -> &str {
        match self {
            EdgeChange::Select { id, .. } | EdgeChange::Remove { id } => id,
        }
    }
}
