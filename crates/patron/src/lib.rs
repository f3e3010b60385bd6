//! # patron
//!
//! Patrons along the river, the events that target them, and the script
//! nodes graphs use to ask about them.
//!
//! - [`Patron`], [`RailDenizen`] — components.
//! - [`EntityEvent`], [`TargetedEvent`], [`PatronFedEvent`] — entity-targeted
//!   events.
//! - [`initialize_patron_module`] — registers `patron_upright` and
//!   `check_delicious_cycle` with an [`EventSystem`](engine_graph::EventSystem).

pub mod components;
pub mod config;
pub mod events;
pub mod modules;

pub use components::{Patron, PatronState, RailDenizen};
pub use config::PatronModuleConfig;
pub use events::{EntityEvent, PatronFedEvent, TargetedEvent};
pub use modules::patron::{
    CHECK_DELICIOUS_CYCLE, CheckDeliciousCycleNode, CycleReport, LAP_DURATION, MODULE_NAME,
    PATRON_UPRIGHT, PatronUprightNode, check_delicious_cycle, initialize_patron_module,
    initialize_patron_module_with, patron_upright,
};
