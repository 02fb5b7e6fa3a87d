//! Unit tests for ep-disease.

#[cfg(test)]
mod helpers {
    use ep_agent::{Agent, AgentStore, Compliance};
    use ep_core::Entity;
    use ep_field::{Field, Grid, GridLocation};

    /// Place `(location, infected, masked)` agents on an empty grid.
    pub fn scenario(
        depth: usize,
        width: usize,
        agents: &[(GridLocation, bool, bool)],
    ) -> (Grid, AgentStore<GridLocation>) {
        let mut grid = Grid::new(depth, width);
        let mut store = AgentStore::new();
        for &(loc, infected, masked) in agents {
            let compliance = Compliance { masked, ..Compliance::default() };
            let agent = if infected {
                Agent { compliance, ..Agent::patient_zero(loc, 10) }
            } else {
                Agent::new(loc, 10, compliance)
            };
            let id = store.push(agent);
            grid.place(loc, Entity::Agent(id)).unwrap();
        }
        (grid, store)
    }

    /// 3×3 grid: susceptible centre, the other eight cells infected.
    pub fn surrounded() -> (Grid, AgentStore<GridLocation>) {
        let mut agents = vec![(GridLocation::new(1, 1), false, false)];
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (1, 1) {
                    agents.push((GridLocation::new(row, col), true, false));
                }
            }
        }
        scenario(3, 3, &agents)
    }
}

#[cfg(test)]
mod probability {
    use crate::infection_probability;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn sequence_by_neighbour_count() {
        let r = 0.3;
        assert!(close(infection_probability(r, 0.8, [false; 0]), 0.0));
        assert!(close(infection_probability(r, 0.8, [false]), 0.30));
        assert!(close(infection_probability(r, 0.8, [false; 2]), 0.51));
        for n in 0..=8 {
            let expected = 1.0 - (1.0 - r).powi(n as i32);
            assert!(close(infection_probability(r, 0.8, vec![false; n]), expected), "n = {n}");
        }
    }

    #[test]
    fn masked_neighbour_reduces_risk() {
        // r · (1 − 0.8) = 0.06
        assert!(close(infection_probability(0.3, 0.8, [true]), 0.06));
        // 1 − (1 − 0.3)(1 − 0.06)
        assert!(close(infection_probability(0.3, 0.8, [false, true]), 1.0 - 0.7 * 0.94));
    }

    #[test]
    fn certain_infectivity() {
        assert!(close(infection_probability(1.0, 0.0, [false; 3]), 1.0));
        assert!(close(infection_probability(0.0, 0.0, [false; 8]), 0.0));
    }

    #[test]
    fn monotone_in_neighbours() {
        let mut last = 0.0;
        for n in 1..=8 {
            let p = infection_probability(0.2, 0.5, vec![n % 2 == 0; n]);
            assert!(p > last);
            last = p;
        }
    }
}

#[cfg(test)]
mod snapshot {
    use ep_core::{AgentId, Entity, SimConfig, SimRng};
    use ep_field::{Field, GridLocation};
    use super::helpers::{scenario, surrounded};
    use crate::{ContactSnapshot, TransmissionModel, infect_all};

    #[test]
    fn surrounded_agent_has_eight_infected_neighbours() {
        let (grid, store) = surrounded();
        let snap = ContactSnapshot::capture(&grid, &store);
        assert_eq!(snap.len(), 1);
        let exposure = &snap.exposures()[0];
        assert_eq!(exposure.agent, AgentId(0));
        assert_eq!(exposure.infected_count(), 8);
    }

    #[test]
    fn surrounded_agent_is_infected_at_full_infectivity() {
        let (grid, mut store) = surrounded();
        let cfg = SimConfig { infectivity: 1.0, ..SimConfig::default() };
        let snap = ContactSnapshot::capture(&grid, &store);
        let hits = TransmissionModel::new(&cfg).newly_infected(&snap, &mut SimRng::new(0));
        assert_eq!(hits, vec![AgentId(0)]);
        assert_eq!(infect_all(&mut store, &hits).unwrap(), 1);
        assert_eq!(store.state_counts(), [0, 9, 0]);
    }

    #[test]
    fn zero_infectivity_never_infects() {
        let (grid, store) = surrounded();
        let cfg = SimConfig { infectivity: 0.0, ..SimConfig::default() };
        let snap = ContactSnapshot::capture(&grid, &store);
        assert!(TransmissionModel::new(&cfg).newly_infected(&snap, &mut SimRng::new(0)).is_empty());
    }

    #[test]
    fn no_infected_means_no_contacts() {
        let loc = GridLocation::new;
        let (grid, store) = scenario(4, 4, &[(loc(0, 0), false, false), (loc(0, 1), false, false)]);
        assert!(ContactSnapshot::capture(&grid, &store).is_empty());
    }

    #[test]
    fn snapshot_ignores_later_movement() {
        let loc = GridLocation::new;
        let (mut grid, mut store) =
            scenario(5, 5, &[(loc(0, 0), false, false), (loc(0, 1), true, false)]);
        let snap = ContactSnapshot::capture(&grid, &store);
        assert!(snap.is_exposed(AgentId(0)));

        // The infected agent walks away after the snapshot.
        grid.clear_location(loc(0, 1)).unwrap();
        grid.place(loc(3, 3), Entity::Agent(AgentId(1))).unwrap();
        store.location[1] = loc(3, 3);

        let cfg = SimConfig { infectivity: 1.0, ..SimConfig::default() };
        let hits = TransmissionModel::new(&cfg).newly_infected(&snap, &mut SimRng::new(4));
        assert_eq!(hits, vec![AgentId(0)]);
    }

    #[test]
    fn masked_neighbours_recorded() {
        let loc = GridLocation::new;
        let (grid, store) = scenario(
            5,
            5,
            &[(loc(2, 2), false, false), (loc(2, 3), true, true), (loc(1, 1), true, false)],
        );
        let snap = ContactSnapshot::capture(&grid, &store);
        let mut masks = snap.exposures()[0].infected_neighbours.clone();
        masks.sort();
        assert_eq!(masks, vec![false, true]);
    }

    #[test]
    fn infect_all_skips_non_susceptible() {
        let (_, mut store) = surrounded();
        assert_eq!(infect_all(&mut store, &[AgentId(1), AgentId(2)]).unwrap(), 0);
        assert!(infect_all(&mut store, &[AgentId(42)]).is_err());
    }

    #[test]
    fn same_seed_same_infections() {
        let loc = GridLocation::new;
        let agents: Vec<_> = (0..5)
            .flat_map(|r| (0..5).map(move |c| (loc(r, c), (r + c) % 4 == 0, false)))
            .collect();
        let (grid, store) = scenario(5, 5, &agents);
        let cfg = SimConfig { infectivity: 0.3, ..SimConfig::default() };
        let model = TransmissionModel::new(&cfg);
        let snap = ContactSnapshot::capture(&grid, &store);
        let a = model.newly_infected(&snap, &mut SimRng::new(17));
        let b = model.newly_infected(&snap, &mut SimRng::new(17));
        assert_eq!(a, b);
    }
}
