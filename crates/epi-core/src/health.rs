//! Agent health states and venue kinds.

use std::fmt;

// ── HealthState ───────────────────────────────────────────────────────────────

/// Health state of one agent.
///
/// ```text
/// Susceptible ──(contact with Sick)──▶ Sick ──(illness_duration)──▶ Recovered
///                                        └──────────(p_fatal)─────▶ Dead
/// Vaccinated  (never leaves; cannot be infected)
/// ```
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HealthState {
    #[default]
    Susceptible,
    Sick,
    Recovered,
    Dead,
    Vaccinated,
}

impl HealthState {
    /// Every state, in reporting order.
    pub const ALL: [HealthState; 5] = [
        HealthState::Susceptible,
        HealthState::Sick,
        HealthState::Recovered,
        HealthState::Dead,
        HealthState::Vaccinated,
    ];

    /// Only susceptible agents can be infected.
    #[inline]
    pub fn is_susceptible(self) -> bool {
        matches!(self, HealthState::Susceptible)
    }

    #[inline]
    pub fn is_infectious(self) -> bool {
        matches!(self, HealthState::Sick)
    }

    /// Dead agents neither move nor take part in contacts.
    #[inline]
    pub fn is_alive(self) -> bool {
        !matches!(self, HealthState::Dead)
    }

    /// No further infection-state transition can occur from this state.
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(
            self,
            HealthState::Recovered | HealthState::Dead | HealthState::Vaccinated
        )
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HealthState::Susceptible => "susceptible",
            HealthState::Sick        => "sick",
            HealthState::Recovered   => "recovered",
            HealthState::Dead        => "dead",
            HealthState::Vaccinated  => "vaccinated",
        };
        f.write_str(s)
    }
}

// ── VenueKind ─────────────────────────────────────────────────────────────────

/// The kind of a venue node.
///
/// Houses are private to their residents; every other kind is shared and may
/// receive any agent.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum VenueKind {
    House,
    BusStation,
    Hospital,
    Supermarket,
    Temple,
}

impl VenueKind {
    /// Shared kinds in the order the builder lays them out.
    pub const SHARED: [VenueKind; 4] = [
        VenueKind::BusStation,
        VenueKind::Hospital,
        VenueKind::Supermarket,
        VenueKind::Temple,
    ];

    #[inline]
    pub fn is_shared(self) -> bool {
        !matches!(self, VenueKind::House)
    }
}

impl fmt::Display for VenueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            VenueKind::House       => "house",
            VenueKind::BusStation  => "bus_station",
            VenueKind::Hospital    => "hospital",
            VenueKind::Supermarket => "supermarket",
            VenueKind::Temple      => "temple",
        };
        f.write_str(s)
    }
}
