//! The `Field` capability trait and helpers shared by every topology.
//!
//! Implementations supply storage (occupancy, adjacency, the zone); the
//! provided methods build every derived query on top of those so that the
//! grid and the network filter neighbours in exactly the same way.

use std::fmt::Debug;
use std::hash::Hash;

use ep_core::{AgentId, Entity, EntityKind, FieldKind, SimRng};

use crate::{FieldResult, QuarantineZone};

/// A finite space of locations, each holding at most one [`Entity`].
///
/// # Invariants
///
/// - Occupancy is a partial injective map: one entity per location, and the
///   caller never places the same agent at two locations.
/// - `locations()` returns every addressable location in a fixed order that
///   does not change over the lifetime of the field.
/// - The quarantine zone owns no entities.
pub trait Field {
    type Location: Copy + Eq + Hash + Debug;

    // ── Required ──────────────────────────────────────────────────────────

    fn kind(&self) -> FieldKind;

    /// Every addressable location, in deterministic iteration order.
    fn locations(&self) -> Vec<Self::Location>;

    fn contains(&self, location: Self::Location) -> bool;

    /// The occupant of `location`, or `None` when it is empty or not part of
    /// the field.
    fn object_at(&self, location: Self::Location) -> Option<Entity>;

    /// Put `entity` at `location`, discarding any previous occupant.
    fn place(&mut self, location: Self::Location, entity: Entity) -> FieldResult<()>;

    /// Empty `location`.  Clearing an empty location is a no-op.
    fn clear_location(&mut self, location: Self::Location) -> FieldResult<()>;

    /// Remove every occupant.  The quarantine zone is left alone.
    fn clear_all(&mut self);

    /// Locations directly adjacent to `location`, excluding `location`
    /// itself, without duplicates, in a deterministic order.
    fn adjacent_locations(&self, location: Self::Location) -> Vec<Self::Location>;

    fn zone(&self) -> &QuarantineZone<Self::Location>;

    fn zone_mut(&mut self) -> &mut QuarantineZone<Self::Location>;

    // ── Provided ──────────────────────────────────────────────────────────

    /// Clear the field and the zone, then offer every location (in
    /// [`locations`](Self::locations) order) to `generate`, placing whatever
    /// it returns.
    fn initialise<G>(&mut self, mut generate: G) -> FieldResult<()>
    where
        G: FnMut(Self::Location) -> Option<Entity>,
    {
        self.clear_all();
        self.zone_mut().clear();
        for location in self.locations() {
            if let Some(entity) = generate(location) {
                self.place(location, entity)?;
            }
        }
        Ok(())
    }

    /// Snapshot of every occupant, in location order.
    fn entities(&self) -> Vec<Entity> {
        self.locations().into_iter().filter_map(|loc| self.object_at(loc)).collect()
    }

    fn is_free(&self, location: Self::Location) -> bool {
        self.contains(location) && self.object_at(location).is_none()
    }

    fn free_adjacent_locations(&self, location: Self::Location) -> Vec<Self::Location> {
        self.adjacent_locations(location)
            .into_iter()
            .filter(|&loc| self.object_at(loc).is_none())
            .collect()
    }

    /// A uniformly chosen location among the free adjacent locations plus
    /// `location` itself when it is free.  `None` when there is no candidate.
    fn free_adjacent_location(
        &self,
        location: Self::Location,
        rng:      &mut SimRng,
    ) -> Option<Self::Location> {
        let mut candidates = self.free_adjacent_locations(location);
        if self.is_free(location) {
            candidates.push(location);
        }
        rng.shuffle(&mut candidates);
        candidates.first().copied()
    }

    /// Adjacent occupants of exactly `kind`, in adjacency order.
    fn neighbours(&self, location: Self::Location, kind: EntityKind) -> Vec<Entity> {
        self.adjacent_locations(location)
            .into_iter()
            .filter_map(|loc| self.object_at(loc))
            .filter(|e| e.kind() == kind)
            .collect()
    }

    fn neighbour_count(&self, location: Self::Location, kind: EntityKind) -> usize {
        self.adjacent_locations(location)
            .into_iter()
            .filter_map(|loc| self.object_at(loc))
            .filter(|e| e.kind() == kind)
            .count()
    }

    fn is_neighbour_to(&self, location: Self::Location, kind: EntityKind) -> bool {
        self.adjacent_locations(location)
            .into_iter()
            .filter_map(|loc| self.object_at(loc))
            .any(|e| e.kind() == kind)
    }

    /// Ids of the agents adjacent to `location`, in adjacency order.
    fn neighbour_agents(&self, location: Self::Location) -> Vec<AgentId> {
        self.adjacent_locations(location)
            .into_iter()
            .filter_map(|loc| self.object_at(loc).and_then(Entity::agent_id))
            .collect()
    }

    // ── Zone shorthands ───────────────────────────────────────────────────

    fn register_zone(&mut self, locations: &[Self::Location]) {
        self.zone_mut().register(locations);
    }

    fn deregister_zone(&mut self, locations: &[Self::Location]) {
        self.zone_mut().deregister(locations);
    }

    fn register_zone_for(&mut self, contributor: AgentId, locations: &[Self::Location]) {
        self.zone_mut().register_for(contributor, locations);
    }

    fn deregister_zone_for(&mut self, contributor: AgentId) -> bool {
        self.zone_mut().deregister_for(contributor)
    }

    #[inline]
    fn in_zone(&self, location: Self::Location) -> bool {
        self.zone().contains(&location)
    }
}

// ── Shared helpers ────────────────────────────────────────────────────────────

/// Order `candidates` by ascending number of adjacent `kind` occupants.
///
/// The sort is stable, so equally crowded candidates keep their input order.
pub fn rank_by_crowding<F: Field>(
    field:      &F,
    candidates: Vec<F::Location>,
    kind:       EntityKind,
) -> Vec<F::Location> {
    let mut scored: Vec<(usize, F::Location)> = candidates
        .into_iter()
        .map(|loc| (field.neighbour_count(loc, kind), loc))
        .collect();
    scored.sort_by_key(|&(crowding, _)| crowding);
    scored.into_iter().map(|(_, loc)| loc).collect()
}

/// The first candidate outside the quarantine zone, else the first candidate.
pub fn first_outside_zone<F: Field>(field: &F, candidates: &[F::Location]) -> Option<F::Location> {
    candidates
        .iter()
        .copied()
        .find(|&loc| !field.in_zone(loc))
        .or_else(|| candidates.first().copied())
}
