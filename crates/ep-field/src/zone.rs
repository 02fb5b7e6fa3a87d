//! Quarantine zone: a set of locations agents avoid when they can.
//!
//! The zone has two layers:
//!
//! - an **anonymous** flat set fed by [`register`](QuarantineZone::register)
//!   and [`deregister`](QuarantineZone::deregister).  Removal is plain set
//!   difference, so it can erase a location some other caller also added.
//! - **tracked contributions** keyed by the contributing agent.  Each
//!   location carries a reference count and only leaves the zone when the
//!   last contributor releases it.
//!
//! Membership is the union of both layers.  Nothing in the zone refers to
//! occupants; a location can be in the zone whether or not it is occupied.

use std::hash::Hash;

use ep_core::AgentId;

#[cfg(feature = "fx-hash")]
type Set<T> = rustc_hash::FxHashSet<T>;
#[cfg(feature = "fx-hash")]
type Map<K, V> = rustc_hash::FxHashMap<K, V>;

#[cfg(not(feature = "fx-hash"))]
type Set<T> = std::collections::HashSet<T>;
#[cfg(not(feature = "fx-hash"))]
type Map<K, V> = std::collections::HashMap<K, V>;

/// Locations currently under quarantine.
#[derive(Clone, Debug)]
pub struct QuarantineZone<L> {
    anonymous:     Set<L>,
    /// Location → number of tracked contributors covering it.
    counts:        Map<L, u32>,
    /// Contributor → the (deduplicated) locations it registered.
    contributions: Map<AgentId, Vec<L>>,
}

impl<L: Copy + Eq + Hash> QuarantineZone<L> {
    pub fn new() -> Self {
        Self {
            anonymous:     Set::default(),
            counts:        Map::default(),
            contributions: Map::default(),
        }
    }

    // ── Anonymous layer ───────────────────────────────────────────────────

    /// Add every location to the anonymous layer.  Idempotent.
    pub fn register(&mut self, locations: &[L]) {
        self.anonymous.extend(locations.iter().copied());
    }

    /// Remove every location from the anonymous layer.  Tracked
    /// contributions are unaffected.
    pub fn deregister(&mut self, locations: &[L]) {
        for loc in locations {
            self.anonymous.remove(loc);
        }
    }

    // ── Tracked layer ─────────────────────────────────────────────────────

    /// Record `contributor`'s locations.  A contributor that is already
    /// registered has its previous contribution released first.
    pub fn register_for(&mut self, contributor: AgentId, locations: &[L]) {
        self.deregister_for(contributor);

        let mut unique: Vec<L> = Vec::with_capacity(locations.len());
        for &loc in locations {
            if !unique.contains(&loc) {
                unique.push(loc);
            }
        }
        for &loc in &unique {
            *self.counts.entry(loc).or_insert(0) += 1;
        }
        self.contributions.insert(contributor, unique);
    }

    /// Release `contributor`'s locations.  Returns `false` if it had none.
    pub fn deregister_for(&mut self, contributor: AgentId) -> bool {
        let Some(locations) = self.contributions.remove(&contributor) else {
            return false;
        };
        for loc in locations {
            if let Some(count) = self.counts.get_mut(&loc) {
                *count -= 1;
                if *count == 0 {
                    self.counts.remove(&loc);
                }
            }
        }
        true
    }

    /// The locations `contributor` currently holds in the zone.
    pub fn contribution(&self, contributor: AgentId) -> Option<&[L]> {
        self.contributions.get(&contributor).map(Vec::as_slice)
    }

    pub fn contributor_count(&self) -> usize {
        self.contributions.len()
    }

    // ── Queries ───────────────────────────────────────────────────────────

    #[inline]
    pub fn contains(&self, location: &L) -> bool {
        self.anonymous.contains(location) || self.counts.contains_key(location)
    }

    /// Number of distinct locations in the zone.
    pub fn len(&self) -> usize {
        self.anonymous.len()
            + self.counts.keys().filter(|loc| !self.anonymous.contains(*loc)).count()
    }

    pub fn is_empty(&self) -> bool {
        self.anonymous.is_empty() && self.counts.is_empty()
    }

    /// Every location in the zone, each exactly once, in no particular order.
    pub fn locations(&self) -> Vec<L> {
        let mut out: Vec<L> = self.anonymous.iter().copied().collect();
        out.extend(self.counts.keys().filter(|loc| !self.anonymous.contains(*loc)).copied());
        out
    }

    pub fn clear(&mut self) {
        self.anonymous.clear();
        self.counts.clear();
        self.contributions.clear();
    }
}

impl<L: Copy + Eq + Hash> Default for QuarantineZone<L> {
    fn default() -> Self {
        Self::new()
    }
}
