//! Script nodes that answer questions about patrons.
//!
//! | node                    | inputs            | outputs |
//! |-------------------------|-------------------|---------|
//! | `patron_upright`        | `entity`          | `bool`  |
//! | `check_delicious_cycle` | `pulse`, `entity` | `int`   |
//!
//! Port order and types are what authored graphs are wired against; changing
//! them breaks existing graphs.

use engine_component::{Component, Entity, World, WorldError, WorldHandle};
use engine_graph::{
    EventSystem, GraphError, Node, NodeArguments, NodeError, NodeKind, NodeSignature, Pulse,
};
use tracing::info;

use crate::components::{Patron, RailDenizen};
use crate::config::PatronModuleConfig;

/// Default module name.
pub const MODULE_NAME: &str = "patron";

/// Node reporting whether a patron is standing.
pub const PATRON_UPRIGHT: &str = "patron_upright";

/// Node reporting whether every patron was fed within the last lap window.
pub const CHECK_DELICIOUS_CYCLE: &str = "check_delicious_cycle";

/// One lap plus a twentieth, so a patron fed just before the raft crosses the
/// lap line still counts for the next lap.
pub const LAP_DURATION: f32 = 1.0 + 1.0 / 20.0;

/// Whether `entity` is a patron standing upright.
///
/// `None` for a null or dead handle; `Some(false)` for a live entity that is
/// not a patron or not upright.
#[must_use]
pub fn patron_upright(world: &World, entity: Entity) -> Option<bool> {
    if !world.is_alive(entity) {
        return None;
    }
    Some(world.get::<Patron>(entity).is_some_and(Patron::is_upright))
}

/// Outcome of a delicious-cycle check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleReport {
    /// Patrons seen.
    pub total: usize,
    /// Patrons fed within the current lap window.
    pub fed: usize,
}

impl CycleReport {
    /// `true` when every patron is fed. Vacuously true with no patrons.
    #[must_use]
    pub fn all_fed(&self) -> bool {
        self.fed == self.total
    }
}

/// Count patrons fed within `lap_duration` laps of `reference`'s rail
/// position.
///
/// # Errors
///
/// [`NodeError::World`] if `reference` is not alive,
/// [`NodeError::MissingComponent`] if it has no [`RailDenizen`].
pub fn check_delicious_cycle(
    world: &World,
    reference: Entity,
    lap_duration: f32,
) -> Result<CycleReport, NodeError> {
    if !world.is_alive(reference) {
        return Err(WorldError::EntityNotFound(reference).into());
    }
    let rail = world
        .get::<RailDenizen>(reference)
        .ok_or(NodeError::MissingComponent {
            entity: reference,
            component: RailDenizen::type_name(),
        })?;
    let window_start = rail.lap - lap_duration;

    Ok(world
        .iter::<Patron>()
        .fold(CycleReport::default(), |mut report, (_, patron)| {
            report.total += 1;
            if patron.fed_in_window(window_start) {
                report.fed += 1;
            }
            report
        }))
}

/// `patron_upright`: is the input entity a patron standing upright?
///
/// Leaves the output unset when the input is unconnected, null, or dead.
#[derive(Debug, Clone)]
pub struct PatronUprightNode {
    world: WorldHandle,
}

impl PatronUprightNode {
    /// A node reading patrons through `world`.
    #[must_use]
    pub fn new(world: WorldHandle) -> Self {
        Self { world }
    }

    fn run(&self, args: &mut NodeArguments) -> Result<(), NodeError> {
        let Some(entity) = args.input::<Entity>(0)? else {
            return Ok(());
        };
        if let Some(upright) = self.world.read(|world| patron_upright(world, entity))? {
            args.set_output(0, upright)?;
        }
        Ok(())
    }
}

impl Node for PatronUprightNode {
    fn initialize(&mut self, args: &mut NodeArguments) -> Result<(), NodeError> {
        self.run(args)
    }

    fn execute(&mut self, args: &mut NodeArguments) -> Result<(), NodeError> {
        self.run(args)
    }
}

impl NodeKind for PatronUprightNode {
    fn on_register(signature: &mut NodeSignature) {
        signature.add_input::<Entity>().add_output::<bool>();
    }
}

/// `check_delicious_cycle`: has every patron been fed this lap?
///
/// Input 0 is the trigger, input 1 the raft whose rail lap anchors the
/// window. Outputs `1` when all patrons are fed, `0` otherwise.
#[derive(Debug, Clone)]
pub struct CheckDeliciousCycleNode {
    world: WorldHandle,
    lap_duration: f32,
}

impl CheckDeliciousCycleNode {
    /// A node checking the feeding window of width `lap_duration` laps.
    #[must_use]
    pub fn new(world: WorldHandle, lap_duration: f32) -> Self {
        Self {
            world,
            lap_duration,
        }
    }
}

impl Node for CheckDeliciousCycleNode {
    fn execute(&mut self, args: &mut NodeArguments) -> Result<(), NodeError> {
        let raft = args
            .input::<Entity>(1)?
            .ok_or(NodeError::MissingInput(1))?;
        let report = self
            .world
            .read(|world| check_delicious_cycle(world, raft, self.lap_duration))??;

        info!(total = report.total, fed = report.fed, "delicious cycle checked");
        args.set_output(0, i32::from(report.all_fed()))?;
        Ok(())
    }
}

impl NodeKind for CheckDeliciousCycleNode {
    fn on_register(signature: &mut NodeSignature) {
        signature
            .add_input::<Pulse>()
            .add_input::<Entity>()
            .add_output::<i32>();
    }
}

/// Register the patron nodes under `"patron"` with the default lap window.
///
/// Call once at startup, after the world exists and before any graph is
/// loaded.
///
/// # Errors
///
/// [`GraphError::DuplicateModule`] if the module was already registered.
pub fn initialize_patron_module(
    event_system: &mut EventSystem,
    world: &WorldHandle,
) -> Result<(), GraphError> {
    initialize_patron_module_with(event_system, world, &PatronModuleConfig::default())
}

/// [`initialize_patron_module`] with explicit settings.
///
/// # Errors
///
/// [`GraphError::DuplicateModule`] if `config.module_name` is taken.
pub fn initialize_patron_module_with(
    event_system: &mut EventSystem,
    world: &WorldHandle,
    config: &PatronModuleConfig,
) -> Result<(), GraphError> {
    let module = event_system.add_module(&config.module_name)?;

    let handle = world.clone();
    module.register_node(PATRON_UPRIGHT, move || PatronUprightNode::new(handle.clone()))?;

    let handle = world.clone();
    let lap_duration = config.lap_duration;
    module.register_node(CHECK_DELICIOUS_CYCLE, move || {
        CheckDeliciousCycleNode::new(handle.clone(), lap_duration)
    })?;

    info!(
        module = config.module_name,
        lap_duration, "patron module initialised"
    );
    Ok(())
}
