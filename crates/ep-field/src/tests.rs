//! Unit tests for ep-field.
//!
//! All tests build small fields by hand; the generators are exercised with
//! fixed seeds.

#[cfg(test)]
mod helpers {
    use ep_core::{AgentId, Entity};
    use crate::{Field, Grid, GridLocation, NetworkBuilder, ContactNetwork};

    pub fn loc(row: usize, col: usize) -> GridLocation {
        GridLocation::new(row, col)
    }

    pub fn agent(n: u32) -> Entity {
        Entity::Agent(AgentId(n))
    }

    /// A grid with every cell occupied by an agent.
    pub fn full_grid(depth: usize, width: usize) -> Grid {
        let mut g = Grid::new(depth, width);
        let mut next = 0;
        g.initialise(|_| {
            next += 1;
            Some(agent(next - 1))
        })
        .unwrap();
        g
    }

    /// Path network 0-1-2-3 plus a chord 0-2.
    ///
    /// ```text
    ///   0 ─ 1
    ///   │ ╲ │
    ///   3 ─ 2
    /// ```
    pub fn square_network() -> ContactNetwork {
        let mut b = NetworkBuilder::new();
        let n: Vec<_> = (0..4).map(|_| b.add_node()).collect();
        b.add_link(n[0], n[1]);
        b.add_link(n[1], n[2]);
        b.add_link(n[2], n[3]);
        b.add_link(n[3], n[0]);
        b.add_link(n[0], n[2]);
        b.build()
    }
}

// ── Grid adjacency ────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_adjacency {
    use super::helpers::loc;
    use crate::{Field, Grid};

    #[test]
    fn interior_cell_has_eight() {
        let g = Grid::new(5, 5);
        let adj = g.adjacent_locations(loc(2, 2));
        assert_eq!(adj.len(), 8);
        assert!(!adj.contains(&loc(2, 2)));
        assert!(adj.contains(&loc(1, 1)));
        assert!(adj.contains(&loc(3, 3)));
    }

    #[test]
    fn corner_wraps() {
        let g = Grid::new(4, 6);
        let adj = g.adjacent_locations(loc(0, 0));
        assert_eq!(adj.len(), 8);
        assert!(adj.contains(&loc(3, 5)));
        assert!(adj.contains(&loc(0, 5)));
        assert!(adj.contains(&loc(3, 0)));
        assert!(adj.contains(&loc(1, 1)));
    }

    #[test]
    fn tiny_grids_dedupe() {
        assert!(Grid::new(1, 1).adjacent_locations(loc(0, 0)).is_empty());
        assert_eq!(Grid::new(2, 2).adjacent_locations(loc(0, 0)).len(), 3);
        assert_eq!(Grid::new(1, 3).adjacent_locations(loc(0, 1)).len(), 2);
    }

    #[test]
    fn radius_two() {
        let g = Grid::new(10, 10);
        assert_eq!(g.adjacent_within(loc(5, 5), 2).len(), 24);
        assert_eq!(g.adjacent_within(loc(5, 5), 0).len(), 0);
    }

    #[test]
    fn iteration_order_is_row_major() {
        let g = Grid::new(2, 3);
        assert_eq!(
            g.locations(),
            vec![loc(0, 0), loc(0, 1), loc(0, 2), loc(1, 0), loc(1, 1), loc(1, 2)]
        );
    }
}

// ── Occupancy ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod occupancy {
    use ep_core::{Entity, EntityKind, SimRng};
    use super::helpers::{agent, full_grid, loc};
    use crate::{Field, FieldError, Grid};

    #[test]
    fn place_replaces_occupant() {
        let mut g = Grid::new(3, 3);
        g.place(loc(1, 1), agent(0)).unwrap();
        g.place(loc(1, 1), Entity::Obstacle).unwrap();
        assert_eq!(g.object_at(loc(1, 1)), Some(Entity::Obstacle));
        assert_eq!(g.entities().len(), 1);
    }

    #[test]
    fn clear_location_and_all() {
        let mut g = full_grid(3, 3);
        g.clear_location(loc(0, 0)).unwrap();
        assert_eq!(g.object_at(loc(0, 0)), None);
        assert_eq!(g.entities().len(), 8);
        g.clear_all();
        assert!(g.entities().is_empty());
    }

    #[test]
    fn out_of_bounds_write_is_an_error() {
        let mut g = Grid::new(3, 3);
        assert!(matches!(
            g.place(loc(3, 0), agent(0)),
            Err(FieldError::LocationOutOfBounds(_))
        ));
        assert_eq!(g.object_at(loc(7, 7)), None);
    }

    #[test]
    fn empty_grid_has_eight_free_neighbours() {
        let g = Grid::new(5, 5);
        assert_eq!(g.free_adjacent_locations(loc(0, 0)).len(), 8);
    }

    #[test]
    fn full_grid_has_none() {
        let g = full_grid(5, 5);
        assert!(g.free_adjacent_locations(loc(2, 2)).is_empty());
        let mut rng = SimRng::new(1);
        assert_eq!(g.free_adjacent_location(loc(2, 2), &mut rng), None);
    }

    #[test]
    fn free_adjacent_location_may_pick_free_origin() {
        let mut g = full_grid(3, 3);
        g.clear_location(loc(1, 1)).unwrap();
        let mut rng = SimRng::new(5);
        // Every neighbour is occupied, so the only candidate is the origin.
        assert_eq!(g.free_adjacent_location(loc(1, 1), &mut rng), Some(loc(1, 1)));
    }

    #[test]
    fn free_adjacent_location_excludes_occupied_origin() {
        let mut g = Grid::new(3, 3);
        g.place(loc(1, 1), agent(0)).unwrap();
        let mut rng = SimRng::new(5);
        for _ in 0..50 {
            let picked = g.free_adjacent_location(loc(1, 1), &mut rng).unwrap();
            assert_ne!(picked, loc(1, 1));
        }
    }

    #[test]
    fn typed_neighbour_queries() {
        let mut g = Grid::new(4, 4);
        g.place(loc(0, 1), agent(0)).unwrap();
        g.place(loc(1, 0), Entity::Obstacle).unwrap();
        assert!(g.is_neighbour_to(loc(1, 1), EntityKind::Agent));
        assert!(g.is_neighbour_to(loc(1, 1), EntityKind::Obstacle));
        assert_eq!(g.neighbours(loc(1, 1), EntityKind::Agent), vec![agent(0)]);
        assert!(!g.is_neighbour_to(loc(3, 2), EntityKind::Agent));
    }

    #[test]
    fn initialise_clears_before_generating() {
        let mut g = full_grid(2, 2);
        g.register_zone(&[loc(0, 0)]);
        g.initialise(|l| (l == loc(1, 1)).then_some(Entity::Obstacle)).unwrap();
        assert_eq!(g.entities(), vec![Entity::Obstacle]);
        assert!(g.zone().is_empty());
    }
}

// ── Quarantine zone ───────────────────────────────────────────────────────────

#[cfg(test)]
mod zone {
    use ep_core::AgentId;
    use super::helpers::loc;
    use crate::{Field, Grid, QuarantineZone};

    #[test]
    fn register_is_idempotent() {
        let mut z = QuarantineZone::new();
        z.register(&[1, 2, 3]);
        z.register(&[2, 3]);
        assert_eq!(z.len(), 3);
        z.deregister(&[2]);
        assert!(!z.contains(&2));
        assert!(z.contains(&1));
        z.deregister(&[2]);
        assert_eq!(z.len(), 2);
    }

    #[test]
    fn flat_deregister_erases_overlap() {
        let mut z = QuarantineZone::new();
        z.register(&[1, 2]);
        z.register(&[2, 3]);
        z.deregister(&[1, 2]);
        assert!(!z.contains(&2));
        assert!(z.contains(&3));
    }

    #[test]
    fn tracked_overlap_survives_one_release() {
        let mut z = QuarantineZone::new();
        z.register_for(AgentId(0), &[1, 2]);
        z.register_for(AgentId(1), &[2, 3]);
        assert_eq!(z.len(), 3);

        assert!(z.deregister_for(AgentId(0)));
        assert!(!z.contains(&1));
        assert!(z.contains(&2), "still contributed by agent 1");
        assert!(z.contains(&3));

        assert!(z.deregister_for(AgentId(1)));
        assert!(z.is_empty());
        assert!(!z.deregister_for(AgentId(1)));
    }

    #[test]
    fn re_registering_replaces_contribution() {
        let mut z = QuarantineZone::new();
        z.register_for(AgentId(4), &[1, 1, 2]);
        assert_eq!(z.contribution(AgentId(4)), Some(&[1, 2][..]));
        z.register_for(AgentId(4), &[5]);
        assert!(!z.contains(&1));
        assert!(z.contains(&5));
        assert_eq!(z.contributor_count(), 1);
    }

    #[test]
    fn layers_union() {
        let mut z = QuarantineZone::new();
        z.register(&[1]);
        z.register_for(AgentId(0), &[1, 2]);
        assert_eq!(z.len(), 2);
        let mut all = z.locations();
        all.sort();
        assert_eq!(all, vec![1, 2]);
        // Anonymous removal leaves the tracked contribution in place.
        z.deregister(&[1]);
        assert!(z.contains(&1));
    }

    #[test]
    fn deregister_removes_only_the_intersection() {
        let mut z = QuarantineZone::new();
        z.register(&[1, 2]);
        z.deregister(&[2, 9]);
        assert!(z.contains(&1));
        assert!(!z.contains(&2));
        assert!(!z.contains(&9));
        assert_eq!(z.len(), 1);
    }

    #[test]
    fn grid_deregister_removes_only_the_intersection() {
        let mut g = Grid::new(4, 4);
        g.register_zone(&[loc(0, 0), loc(0, 1)]);
        g.deregister_zone(&[loc(0, 1), loc(3, 3)]);
        assert!(g.in_zone(loc(0, 0)));
        assert!(!g.in_zone(loc(0, 1)));
        assert!(!g.in_zone(loc(3, 3)));
        assert_eq!(g.zone().len(), 1);
    }

    #[test]
    fn zone_is_independent_of_occupancy() {
        let mut g = Grid::new(3, 3);
        g.register_zone(&[loc(0, 0)]);
        g.clear_all();
        assert!(g.in_zone(loc(0, 0)));
        assert!(g.object_at(loc(0, 0)).is_none());
    }
}

// ── Ranking helpers ───────────────────────────────────────────────────────────

#[cfg(test)]
mod ranking {
    use ep_core::EntityKind;
    use super::helpers::{agent, loc};
    use crate::{Field, Grid, first_outside_zone, rank_by_crowding};

    #[test]
    fn least_crowded_first_and_stable() {
        let mut g = Grid::new(6, 6);
        g.place(loc(0, 0), agent(0)).unwrap();
        g.place(loc(0, 1), agent(1)).unwrap();
        // (1,1) touches both agents, (1,0) touches both, (4,4) touches none.
        let ranked = rank_by_crowding(&g, vec![loc(1, 1), loc(4, 4), loc(1, 0), loc(3, 3)], EntityKind::Agent);
        assert_eq!(ranked, vec![loc(4, 4), loc(3, 3), loc(1, 1), loc(1, 0)]);
    }

    #[test]
    fn first_outside_zone_falls_back() {
        let mut g = Grid::new(4, 4);
        g.register_zone(&[loc(0, 0), loc(0, 1)]);
        assert_eq!(first_outside_zone(&g, &[loc(0, 0), loc(0, 1), loc(2, 2)]), Some(loc(2, 2)));
        assert_eq!(first_outside_zone(&g, &[loc(0, 1), loc(0, 0)]), Some(loc(0, 1)));
        assert_eq!(first_outside_zone(&g, &[]), None);
    }
}

// ── Network ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod network {
    use ep_core::{EntityKind, NodeId, SimRng, Topology};
    use super::helpers::{agent, square_network};
    use crate::{ContactNetwork, Field, FieldError, NetworkBuilder, scale_free, small_world};

    #[test]
    fn empty_build() {
        let net = NetworkBuilder::new().build();
        assert_eq!(net.node_count(), 0);
        assert_eq!(net.link_count(), 0);
        assert!(net.is_empty());
    }

    #[test]
    fn csr_adjacency_sorted_and_deduplicated() {
        let mut b = NetworkBuilder::new();
        let a = b.add_node();
        let c = b.add_node();
        let d = b.add_node();
        b.add_link(a, d);
        b.add_link(a, c);
        b.add_link(c, a);
        b.add_link(a, a);
        let net = b.build();
        assert_eq!(net.adjacent_locations(a), vec![c, d]);
        assert_eq!(net.link_count(), 2);
        assert!(net.has_link(d, a));
        assert!(!net.has_link(c, d));
    }

    #[test]
    fn adjacency_is_direct_neighbours() {
        let net = square_network();
        assert_eq!(net.adjacent_locations(NodeId(0)), vec![NodeId(1), NodeId(2), NodeId(3)]);
        assert_eq!(net.adjacent_locations(NodeId(1)), vec![NodeId(0), NodeId(2)]);
        assert!(net.adjacent_locations(NodeId(99)).is_empty());
    }

    #[test]
    fn free_and_typed_queries_filter_like_grid() {
        let mut net = square_network();
        net.place(NodeId(1), agent(0)).unwrap();
        assert_eq!(net.free_adjacent_locations(NodeId(0)), vec![NodeId(2), NodeId(3)]);
        assert!(net.is_neighbour_to(NodeId(2), EntityKind::Agent));
        assert!(!net.is_neighbour_to(NodeId(3), EntityKind::Agent));
        assert!(matches!(
            net.place(NodeId(4), agent(1)),
            Err(FieldError::LocationOutOfBounds(_))
        ));
    }

    #[test]
    fn small_world_degrees() {
        let net = small_world(6, 2.0, &mut SimRng::new(3)).unwrap();
        assert_eq!(net.node_count(), 36);
        for node in net.locations() {
            // Four lattice links plus its own long-range link; incoming
            // long-range links only add to that.
            assert!(net.degree(node) >= 5, "{node} has degree {}", net.degree(node));
        }
    }

    #[test]
    fn steep_clustering_keeps_long_range_links() {
        // 6×6 torus: 72 lattice links.  Every node still gets a link to the
        // distance-2 ring even when farther weights underflow to zero.
        let net = small_world(6, 2000.0, &mut SimRng::new(3)).unwrap();
        assert!(net.link_count() > 72, "only {} links", net.link_count());
        for node in net.locations() {
            assert!(net.degree(node) >= 5, "{node} has degree {}", net.degree(node));
        }
    }

    #[test]
    fn small_world_is_deterministic() {
        let a = small_world(5, 0.5, &mut SimRng::new(42)).unwrap();
        let b = small_world(5, 0.5, &mut SimRng::new(42)).unwrap();
        for node in a.locations() {
            assert_eq!(a.adjacent_locations(node), b.adjacent_locations(node));
        }
    }

    #[test]
    fn scale_free_sizes() {
        let net = scale_free(3, 2, 50, &mut SimRng::new(9)).unwrap();
        assert_eq!(net.node_count(), 50);
        // Complete seed graph (3 links) plus 2 per added node.
        assert_eq!(net.link_count(), 3 + 47 * 2);
        for node in net.locations() {
            assert!(net.degree(node) >= 2);
        }
    }

    #[test]
    fn scale_free_single_seed() {
        let net = scale_free(1, 1, 10, &mut SimRng::new(0)).unwrap();
        assert_eq!(net.link_count(), 9);
    }

    #[test]
    fn scale_free_rejects_bad_params() {
        assert!(matches!(
            scale_free(2, 3, 10, &mut SimRng::new(0)),
            Err(FieldError::NetworkBuild(_))
        ));
    }

    #[test]
    fn from_topology_rejects_grid() {
        assert!(matches!(
            ContactNetwork::from_topology(&Topology::Grid, &mut SimRng::new(0)),
            Err(FieldError::Core(_))
        ));
        let net = ContactNetwork::from_topology(&Topology::small_world(), &mut SimRng::new(0)).unwrap();
        assert_eq!(net.node_count(), 144);
    }
}

// ── Properties ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod properties {
    use proptest::prelude::*;
    use super::helpers::agent;
    use crate::{Field, Grid, GridLocation};

    proptest! {
        #[test]
        fn torus_adjacency_in_bounds(
            depth in 1usize..12,
            width in 1usize..12,
            row in 0usize..12,
            col in 0usize..12,
        ) {
            let g = Grid::new(depth, width);
            let origin = GridLocation::new(row % depth, col % width);
            let adj = g.adjacent_locations(origin);
            prop_assert!(adj.len() <= 8);
            for (i, l) in adj.iter().enumerate() {
                prop_assert!(l.row < depth && l.col < width);
                prop_assert!(*l != origin);
                prop_assert!(!adj[..i].contains(l));
            }
            if depth >= 3 && width >= 3 {
                prop_assert_eq!(adj.len(), 8);
            }
        }

        #[test]
        fn adjacency_is_symmetric(
            depth in 1usize..10,
            width in 1usize..10,
            row in 0usize..10,
            col in 0usize..10,
        ) {
            let g = Grid::new(depth, width);
            let origin = GridLocation::new(row % depth, col % width);
            for n in g.adjacent_locations(origin) {
                prop_assert!(g.adjacent_locations(n).contains(&origin));
            }
        }

        #[test]
        fn occupancy_is_exclusive(
            placements in proptest::collection::vec((0usize..5, 0usize..5), 0..40),
        ) {
            let mut g = Grid::new(5, 5);
            for (i, &(r, c)) in placements.iter().enumerate() {
                g.place(GridLocation::new(r, c), agent(i as u32)).unwrap();
            }
            let mut distinct = placements.clone();
            distinct.sort();
            distinct.dedup();
            prop_assert_eq!(g.entities().len(), distinct.len());
        }
    }
}
