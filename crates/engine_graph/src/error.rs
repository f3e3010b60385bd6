//! Registry and node evaluation error types.

use engine_component::{Entity, WorldError};

use crate::port::PortType;

/// Errors from registering or instantiating nodes, or from wiring values into
/// their ports.
#[derive(Debug, thiserror::Error)]
pub enum GraphError {
    #[error("module '{0}' is already registered")]
    DuplicateModule(String),

    #[error("node '{node}' is already registered in module '{module}'")]
    DuplicateNode { module: String, node: String },

    #[error("unknown module '{0}'")]
    UnknownModule(String),

    #[error("unknown node '{node}' in module '{module}'")]
    UnknownNode { module: String, node: String },

    #[error(transparent)]
    Port(#[from] PortError),
}

/// A port access that does not match the node's declared signature.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortError {
    #[error("port index {index} out of range ({len} ports)")]
    Index { index: usize, len: usize },

    #[error("port {index} is declared {expected}, got {found}")]
    Type {
        index: usize,
        expected: PortType,
        found: PortType,
    },
}

/// A failure inside a single node evaluation.
///
/// Node errors never abort the tick: the node instance reports them and the
/// node's outputs stay unset for that evaluation.
#[derive(Debug, thiserror::Error)]
pub enum NodeError {
    #[error(transparent)]
    Port(#[from] PortError),

    #[error(transparent)]
    World(#[from] WorldError),

    #[error("input {0} is not connected")]
    MissingInput(usize),

    #[error("{entity} has no {component} component")]
    MissingComponent {
        entity: Entity,
        component: &'static str,
    },
}
