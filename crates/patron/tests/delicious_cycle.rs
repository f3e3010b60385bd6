//! Property tests for the patron script nodes, driven through the node
//! registry the way a graph would drive them.

use engine_component::{Entity, SharedWorld, World, WorldHandle, shared};
use engine_graph::{EventSystem, Value};
use patron::{
    CHECK_DELICIOUS_CYCLE, LAP_DURATION, MODULE_NAME, PATRON_UPRIGHT, Patron, PatronState,
    RailDenizen, initialize_patron_module,
};
use proptest::prelude::*;

fn setup(raft_lap: f32, fed_laps: &[f32]) -> (SharedWorld, EventSystem, Entity) {
    let world = shared(World::new());
    let raft = {
        let mut w = world.borrow_mut();
        let raft = w.spawn();
        w.insert(raft, RailDenizen::at_lap(raft_lap)).unwrap();
        for &lap in fed_laps {
            let p = w.spawn();
            w.insert(p, Patron::new().fed_at(lap)).unwrap();
        }
        raft
    };
    let mut events = EventSystem::new();
    initialize_patron_module(&mut events, &WorldHandle::new(&world)).unwrap();
    (world, events, raft)
}

fn run_cycle(events: &EventSystem, raft: Entity) -> i32 {
    let mut node = events.instantiate(MODULE_NAME, CHECK_DELICIOUS_CYCLE).unwrap();
    node.set_input(0, Some(Value::Pulse)).unwrap();
    node.set_input(1, Some(raft.into())).unwrap();
    node.evaluate().unwrap();
    node.evaluate().unwrap();
    match node.output(0) {
        Some(Value::Int(v)) => v,
        other => panic!("unexpected output {other:?}"),
    }
}

fn fed_lap() -> impl Strategy<Value = f32> {
    prop_oneof![Just(0.0f32), -5.0f32..20.0f32]
}

fn any_state() -> impl Strategy<Value = PatronState> {
    prop_oneof![
        Just(PatronState::Upright),
        Just(PatronState::Falling),
        Just(PatronState::LayingDown),
        Just(PatronState::GettingUp),
    ]
}

proptest! {
    #[test]
    fn cycle_matches_fed_window(
        raft_lap in 0.0f32..20.0,
        fed_laps in prop::collection::vec(fed_lap(), 0..12),
    ) {
        let (_world, events, raft) = setup(raft_lap, &fed_laps);
        let window_start = raft_lap - LAP_DURATION;
        let expected = fed_laps
            .iter()
            .all(|&lap| lap >= window_start || lap == 0.0);
        prop_assert_eq!(run_cycle(&events, raft), i32::from(expected));
    }

    #[test]
    fn cycle_never_recovers_as_raft_advances(
        raft_lap in 0.0f32..20.0,
        advance in 0.0f32..5.0,
        fed_laps in prop::collection::vec(fed_lap(), 0..12),
    ) {
        let (world, events, raft) = setup(raft_lap, &fed_laps);
        let before = run_cycle(&events, raft);

        if let Some(rail) = world.borrow_mut().get_mut::<RailDenizen>(raft) {
            rail.advance(advance);
        }
        let after = run_cycle(&events, raft);

        prop_assert!(after <= before);
    }

    #[test]
    fn upright_matches_state(state in any_state(), fed in fed_lap()) {
        let (world, events, _raft) = setup(0.0, &[]);
        let patron = {
            let mut w = world.borrow_mut();
            let p = w.spawn();
            w.insert(p, Patron::new().with_state(state).fed_at(fed)).unwrap();
            p
        };

        let mut node = events.instantiate(MODULE_NAME, PATRON_UPRIGHT).unwrap();
        node.set_input(0, Some(patron.into())).unwrap();
        node.evaluate().unwrap();
        prop_assert_eq!(
            node.output(0),
            Some(Value::Bool(state == PatronState::Upright))
        );
    }
}

#[test]
fn zero_patrons_is_vacuously_fed() {
    let (_world, events, raft) = setup(7.0, &[]);
    assert_eq!(run_cycle(&events, raft), 1);
}

#[test]
fn feeding_restores_the_cycle() {
    let (world, events, raft) = setup(3.0, &[1.0, 2.5]);
    assert_eq!(run_cycle(&events, raft), 0);

    let stale: Vec<Entity> = world
        .borrow()
        .iter::<Patron>()
        .filter(|(_, p)| !p.fed_in_window(3.0 - LAP_DURATION))
        .map(|(e, _)| e)
        .collect();
    for entity in stale {
        let event = patron::PatronFedEvent::new(patron::EntityEvent::new(entity), 3.0);
        assert!(event.apply(&mut world.borrow_mut()));
    }

    assert_eq!(run_cycle(&events, raft), 1);
}

#[test]
fn despawned_patrons_drop_out_of_the_count() {
    let (world, events, raft) = setup(3.0, &[2.5]);
    let stale = {
        let mut w = world.borrow_mut();
        let p = w.spawn();
        w.insert(p, Patron::new().fed_at(0.5)).unwrap();
        p
    };
    assert_eq!(run_cycle(&events, raft), 0);

    world.borrow_mut().despawn(stale).unwrap();
    assert_eq!(run_cycle(&events, raft), 1);
}
