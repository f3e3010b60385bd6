//! A live node: its behaviour plus its port slots.

use tracing::warn;

use crate::args::NodeArguments;
use crate::error::{GraphError, NodeError};
use crate::node::Node;
use crate::port::{NodeSignature, Value};

/// One instantiated node inside a graph.
///
/// Each evaluation starts with every output unset. If the node fails, the
/// failure is logged, the outputs are unset again, and the error is returned
/// to the host; nothing else in the graph is affected.
pub struct NodeInstance {
    name: String,
    node: Box<dyn Node>,
    args: NodeArguments,
    initialized: bool,
}

impl NodeInstance {
    /// Wrap a freshly built `node` with empty slots for `signature`.
    pub(crate) fn new(name: String, node: Box<dyn Node>, signature: &NodeSignature) -> Self {
        Self {
            name,
            node,
            args: NodeArguments::new(signature),
            initialized: false,
        }
    }

    /// Qualified `module.node` name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether [`initialize`](Self::initialize) has run.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Wire a value into input `index`, or disconnect it with `None`.
    ///
    /// # Errors
    ///
    /// [`GraphError::Port`] if the value does not fit the declared port.
    pub fn set_input(&mut self, index: usize, value: Option<Value>) -> Result<(), GraphError> {
        self.args.set_input(index, value)?;
        Ok(())
    }

    /// Run the first-activation hook.
    ///
    /// # Errors
    ///
    /// The node's own [`NodeError`], after it has been logged.
    pub fn initialize(&mut self) -> Result<(), NodeError> {
        self.initialized = true;
        self.args.clear_outputs();
        let result = self.node.initialize(&mut self.args);
        self.finish("initialize", result)
    }

    /// Run one evaluation.
    ///
    /// # Errors
    ///
    /// The node's own [`NodeError`], after it has been logged.
    pub fn execute(&mut self) -> Result<(), NodeError> {
        self.args.clear_outputs();
        let result = self.node.execute(&mut self.args);
        self.finish("execute", result)
    }

    /// Initialize on first call, execute on every later one.
    ///
    /// # Errors
    ///
    /// The node's own [`NodeError`], after it has been logged.
    pub fn evaluate(&mut self) -> Result<(), NodeError> {
        if self.initialized {
            self.execute()
        } else {
            self.initialize()
        }
    }

    /// Output `index` as set by the last evaluation.
    #[must_use]
    pub fn output(&self, index: usize) -> Option<Value> {
        self.args.output(index)
    }

    fn finish(
        &mut self,
        phase: &'static str,
        result: Result<(), NodeError>,
    ) -> Result<(), NodeError> {
        if let Err(err) = &result {
            warn!(node = self.name, phase, error = %err, "node evaluation failed");
            self.args.clear_outputs();
        }
        result
    }
}

impl std::fmt::Debug for NodeInstance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeInstance")
            .field("name", &self.name)
            .field("args", &self.args)
            .field("initialized", &self.initialized)
            .finish_non_exhaustive()
    }
}
