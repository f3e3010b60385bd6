//! Patron and rail components.

use engine_component::Component;
use serde::{Deserialize, Serialize};

/// Posture of a patron.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatronState {
    /// Standing and able to catch food.
    #[default]
    Upright,
    /// Knocked off balance.
    Falling,
    /// On the ground.
    LayingDown,
    /// Recovering back to upright.
    GettingUp,
}

/// A patron waiting along the river to be fed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Patron {
    /// Current posture.
    #[serde(default)]
    pub state: PatronState,
    /// Lap at which the patron was last fed. `0.0` means never.
    #[serde(default)]
    pub last_lap_fed: f32,
}

impl Patron {
    /// Never fed.
    pub const NEVER_FED: f32 = 0.0;

    /// An upright patron that has never been fed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: PatronState::Upright,
            last_lap_fed: Self::NEVER_FED,
        }
    }

    /// Same patron, in posture `state`.
    #[must_use]
    pub fn with_state(mut self, state: PatronState) -> Self {
        self.state = state;
        self
    }

    /// Same patron, last fed at `lap`.
    #[must_use]
    pub fn fed_at(mut self, lap: f32) -> Self {
        self.last_lap_fed = lap;
        self
    }

    /// Standing, as opposed to mid-fall or on the ground.
    #[must_use]
    pub fn is_upright(&self) -> bool {
        self.state == PatronState::Upright
    }

    /// `false` while `last_lap_fed` is still [`Self::NEVER_FED`].
    #[must_use]
    pub fn has_been_fed(&self) -> bool {
        self.last_lap_fed != Self::NEVER_FED
    }

    /// Record a feeding at `lap`.
    pub fn feed(&mut self, lap: f32) {
        self.last_lap_fed = lap;
    }

    /// Whether this patron counts as fed for a lap window starting at
    /// `window_start`.
    ///
    /// Patrons that were never fed always count: some only show up on the
    /// first lap and can't be fed again afterwards.
    #[must_use]
    pub fn fed_in_window(&self, window_start: f32) -> bool {
        self.last_lap_fed >= window_start || !self.has_been_fed()
    }
}

impl Default for Patron {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for Patron {
    fn type_name() -> &'static str {
        "Patron"
    }
}

/// Progress of an entity riding the river rail, in laps.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RailDenizen {
    /// Laps travelled; the integer part counts completed laps.
    pub lap: f32,
}

impl RailDenizen {
    /// A rider currently at `lap`.
    #[must_use]
    pub fn at_lap(lap: f32) -> Self {
        Self { lap }
    }

    /// Move forward along the rail. Negative deltas are ignored.
    pub fn advance(&mut self, laps: f32) {
        self.lap += laps.max(0.0);
    }
}

impl Component for RailDenizen {
    fn type_name() -> &'static str {
        "RailDenizen"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_patron_is_upright_and_unfed() {
        let patron = Patron::new();
        assert!(patron.is_upright());
        assert!(!patron.has_been_fed());
    }

    #[test]
    fn test_fed_in_window() {
        assert!(Patron::new().fed_at(2.1).fed_in_window(2.0));
        assert!(Patron::new().fed_at(2.0).fed_in_window(2.0));
        assert!(!Patron::new().fed_at(1.9).fed_in_window(2.0));
    }

    #[test]
    fn test_never_fed_always_in_window() {
        assert!(Patron::new().fed_in_window(50.0));
    }

    #[test]
    fn test_feed_records_lap() {
        let mut patron = Patron::new();
        patron.feed(1.25);
        assert!(patron.has_been_fed());
        assert_eq!(patron.last_lap_fed, 1.25);
    }

    #[test]
    fn test_rail_advance_is_monotonic() {
        let mut rail = RailDenizen::at_lap(1.0);
        rail.advance(0.5);
        rail.advance(-3.0);
        assert_eq!(rail.lap, 1.5);
    }

    #[test]
    fn test_patron_deserializes_with_defaults() {
        let patron: Patron = serde_json::from_str(r#"{ "state": "laying_down" }"#).unwrap();
        assert_eq!(patron.state, PatronState::LayingDown);
        assert_eq!(patron.last_lap_fed, Patron::NEVER_FED);
    }
}
