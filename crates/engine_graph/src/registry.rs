//! Node registry — named modules of named node constructors.
//!
//! Gameplay code registers node types at startup, grouped into modules
//! (`"patron"`, `"audio"`, ...). Graphs later instantiate nodes by
//! `(module, node)` name. Names are unique: registering a module or a node a
//! second time is an error, not an overwrite.

use std::collections::HashMap;

use tracing::{debug, info};

use crate::error::GraphError;
use crate::instance::NodeInstance;
use crate::node::{Node, NodeKind};
use crate::port::NodeSignature;

type Constructor = Box<dyn Fn() -> Box<dyn Node>>;

/// A registered node type: its signature and how to build an instance.
pub struct NodeDef {
    signature: NodeSignature,
    constructor: Constructor,
}

impl NodeDef {
    /// Ports declared by the node's [`NodeKind::on_register`].
    #[must_use]
    pub fn signature(&self) -> &NodeSignature {
        &self.signature
    }
}

impl std::fmt::Debug for NodeDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeDef")
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A named group of node types.
#[derive(Debug)]
pub struct Module {
    name: String,
    nodes: HashMap<String, NodeDef>,
}

impl Module {
    fn new(name: String) -> Self {
        Self {
            name,
            nodes: HashMap::new(),
        }
    }

    /// Module name, as passed to [`EventSystem::add_module`].
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register node type `N` under `name`, built by `constructor`.
    ///
    /// The signature is taken from [`NodeKind::on_register`] once, here.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateNode`] if `name` is already taken in this module.
    pub fn register_node<N, F>(&mut self, name: &str, constructor: F) -> Result<(), GraphError>
    where
        N: NodeKind,
        F: Fn() -> N + 'static,
    {
        if self.nodes.contains_key(name) {
            return Err(GraphError::DuplicateNode {
                module: self.name.clone(),
                node: name.to_string(),
            });
        }

        let mut signature = NodeSignature::new();
        N::on_register(&mut signature);
        debug!(
            module = self.name,
            node = name,
            inputs = signature.inputs.len(),
            outputs = signature.outputs.len(),
            "node registered"
        );

        let constructor: Constructor =
            Box::new(move || -> Box<dyn Node> { Box::new(constructor()) });
        self.nodes.insert(
            name.to_string(),
            NodeDef {
                signature,
                constructor,
            },
        );
        Ok(())
    }

    /// The node type registered as `name`.
    #[must_use]
    pub fn node(&self, name: &str) -> Option<&NodeDef> {
        self.nodes.get(name)
    }

    /// Number of node types in this module.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

/// The registry of all node modules.
#[derive(Debug, Default)]
pub struct EventSystem {
    modules: HashMap<String, Module>,
}

impl EventSystem {
    /// An empty registry with no modules.
    #[must_use]
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Create a new, empty module named `name`.
    ///
    /// # Errors
    ///
    /// [`GraphError::DuplicateModule`] if the name is already registered.
    pub fn add_module(&mut self, name: &str) -> Result<&mut Module, GraphError> {
        if self.modules.contains_key(name) {
            return Err(GraphError::DuplicateModule(name.to_string()));
        }
        info!(module = name, "module added");
        Ok(self
            .modules
            .entry(name.to_string())
            .or_insert_with(|| Module::new(name.to_string())))
    }

    /// The module registered as `name`.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.modules.get(name)
    }

    /// Number of registered modules.
    #[must_use]
    pub fn module_count(&self) -> usize {
        self.modules.len()
    }

    /// Build a fresh instance of `module::node`.
    ///
    /// # Errors
    ///
    /// [`GraphError::UnknownModule`] or [`GraphError::UnknownNode`] if the
    /// name does not resolve.
    pub fn instantiate(&self, module: &str, node: &str) -> Result<NodeInstance, GraphError> {
        let def = self
            .modules
            .get(module)
            .ok_or_else(|| GraphError::UnknownModule(module.to_string()))?
            .node(node)
            .ok_or_else(|| GraphError::UnknownNode {
                module: module.to_string(),
                node: node.to_string(),
            })?;

        Ok(NodeInstance::new(
            format!("{module}.{node}"),
            (def.constructor)(),
            &def.signature,
        ))
    }
}
