//! Field occupants.

use crate::AgentId;

/// Anything that can occupy a field location.
///
/// Agents are stored by id; their state lives in the agent store, not in the
/// field.  Obstacles are inert blockers with no state of their own.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    Agent(AgentId),
    Obstacle,
}

impl Entity {
    #[inline]
    pub fn kind(self) -> EntityKind {
        match self {
            Entity::Agent(_) => EntityKind::Agent,
            Entity::Obstacle => EntityKind::Obstacle,
        }
    }

    #[inline]
    pub fn agent_id(self) -> Option<AgentId> {
        match self {
            Entity::Agent(id) => Some(id),
            Entity::Obstacle  => None,
        }
    }
}

/// Exact-kind filter for typed neighbour queries.
///
/// Matching is by exact kind: there is no hierarchy, so `Agent` never
/// matches an `Obstacle` and vice versa.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EntityKind {
    Agent,
    Obstacle,
}

impl EntityKind {
    pub fn name(self) -> &'static str {
        match self {
            EntityKind::Agent    => "Agent",
            EntityKind::Obstacle => "Obstacle",
        }
    }
}
