//! The node capability traits.

use crate::args::NodeArguments;
use crate::error::NodeError;
use crate::port::NodeSignature;

/// Runtime behaviour of a node.
///
/// The graph calls [`Node::initialize`] once when the node is first activated
/// and [`Node::execute`] on every evaluation after that.
pub trait Node {
    /// First-activation hook. Does nothing unless overridden.
    ///
    /// # Errors
    ///
    /// A [`NodeError`] confined to this evaluation.
    fn initialize(&mut self, args: &mut NodeArguments) -> Result<(), NodeError> {
        let _ = args;
        Ok(())
    }

    /// Per-evaluation hook.
    ///
    /// # Errors
    ///
    /// A [`NodeError`] confined to this evaluation.
    fn execute(&mut self, args: &mut NodeArguments) -> Result<(), NodeError>;
}

/// A registrable node type: a [`Node`] that also declares its port signature.
pub trait NodeKind: Node + 'static {
    /// Declare input and output ports, in order.
    fn on_register(signature: &mut NodeSignature);
}
