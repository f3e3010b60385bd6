//! # engine_graph
//!
//! The host side of event-graph scripting: gameplay crates register node
//! types here, and graphs instantiate and evaluate them by name.
//!
//! - [`NodeSignature`], [`PortType`], [`Value`] — typed ports.
//! - [`NodeArguments`] — the input/output slots a node reads and writes.
//! - [`Node`], [`NodeKind`] — node behaviour and static signature.
//! - [`EventSystem`], [`Module`] — the name registry.
//! - [`NodeInstance`] — the initialize/execute lifecycle of one node.
//!
//! ```rust
//! use engine_graph::{EventSystem, Node, NodeArguments, NodeError, NodeKind, NodeSignature, Value};
//!
//! struct Answer;
//!
//! impl Node for Answer {
//!     fn execute(&mut self, args: &mut NodeArguments) -> Result<(), NodeError> {
//!         args.set_output(0, 42)?;
//!         Ok(())
//!     }
//! }
//!
//! impl NodeKind for Answer {
//!     fn on_register(signature: &mut NodeSignature) {
//!         signature.add_output::<i32>();
//!     }
//! }
//!
//! let mut events = EventSystem::new();
//! events.add_module("demo")?.register_node("answer", || Answer)?;
//! let mut node = events.instantiate("demo", "answer")?;
//! node.execute()?;
//! assert_eq!(node.output(0), Some(Value::Int(42)));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod args;
pub mod error;
pub mod instance;
pub mod node;
pub mod port;
pub mod registry;

pub use args::NodeArguments;
pub use error::{GraphError, NodeError, PortError};
pub use instance::NodeInstance;
pub use node::{Node, NodeKind};
pub use port::{NodeSignature, PortType, PortValue, Pulse, Value};
pub use registry::{EventSystem, Module, NodeDef};
