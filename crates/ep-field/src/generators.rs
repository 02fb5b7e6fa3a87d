//! Random graph generators for [`ContactNetwork`].
//!
//! Both generators draw only from the `SimRng` they are handed, so a given
//! seed always yields the same graph.

use rand::distributions::{Distribution, WeightedIndex};
use tracing::debug;

use ep_core::{NodeId, SimRng};

use crate::{ContactNetwork, FieldError, FieldResult, NetworkBuilder};

// ── Kleinberg small world ─────────────────────────────────────────────────────

/// Kleinberg small-world network on an `n × n` torus lattice.
///
/// Every node links to its four lattice neighbours, plus one long-range link
/// to a node at lattice distance ≥ 2 chosen with probability proportional to
/// `distance^-clustering` (Manhattan distance on the torus).  An exponent of
/// 0 makes the long-range target uniform; larger exponents favour nearby
/// targets.  Weights are taken relative to the nearest ring (distance 2), so
/// that ring keeps weight 1 however large the exponent.
pub fn small_world(n: usize, clustering: f64, rng: &mut SimRng) -> FieldResult<ContactNetwork> {
    let node_count = n * n;
    let mut b = NetworkBuilder::with_capacity(node_count * 3);
    b.add_nodes(node_count);

    let id = |row: usize, col: usize| NodeId((row * n + col) as u32);

    for row in 0..n {
        for col in 0..n {
            b.add_link(id(row, col), id(row, (col + 1) % n));
            b.add_link(id(row, col), id((row + 1) % n, col));
        }
    }

    let torus = |x: usize, y: usize| {
        let d = x.abs_diff(y);
        d.min(n - d)
    };

    let mut candidates: Vec<NodeId> = Vec::with_capacity(node_count);
    let mut weights:    Vec<f64>    = Vec::with_capacity(node_count);
    for row in 0..n {
        for col in 0..n {
            candidates.clear();
            weights.clear();
            for r2 in 0..n {
                for c2 in 0..n {
                    let d = torus(row, r2) + torus(col, c2);
                    if d >= 2 {
                        candidates.push(id(r2, c2));
                        weights.push((d as f64 / 2.0).powf(-clustering));
                    }
                }
            }
            if candidates.is_empty() {
                continue;
            }
            let dist = WeightedIndex::new(&weights).map_err(|e| {
                FieldError::NetworkBuild(format!(
                    "small-world weights for clustering {clustering}: {e}"
                ))
            })?;
            let target = candidates[dist.sample(rng.inner())];
            b.add_link(id(row, col), target);
        }
    }

    let net = b.build();
    debug!(
        nodes = net.node_count(),
        links = net.link_count(),
        clustering,
        "generated small-world network"
    );
    Ok(net)
}

// ── Barabási–Albert ───────────────────────────────────────────────────────────

/// Barabási–Albert preferential-attachment network.
///
/// Starts from a complete graph on `initial_nodes` nodes and adds nodes until
/// there are `total_nodes`, each linking to `edges_per_node` distinct
/// existing nodes chosen with probability proportional to their degree.
/// While no node has a link yet (a one-node seed) targets are uniform.
pub fn scale_free(
    initial_nodes:  usize,
    edges_per_node: usize,
    total_nodes:    usize,
    rng:            &mut SimRng,
) -> FieldResult<ContactNetwork> {
    if initial_nodes == 0 || edges_per_node == 0 || edges_per_node > initial_nodes {
        return Err(FieldError::NetworkBuild(format!(
            "need 1 <= edges per node ({edges_per_node}) <= initial nodes ({initial_nodes})"
        )));
    }
    if total_nodes < initial_nodes {
        return Err(FieldError::NetworkBuild(format!(
            "total nodes ({total_nodes}) is less than initial nodes ({initial_nodes})"
        )));
    }

    let mut b = NetworkBuilder::with_capacity(total_nodes * edges_per_node);
    b.add_nodes(initial_nodes);

    // One entry per link endpoint: sampling uniformly from this list is
    // sampling nodes proportionally to degree.
    let mut endpoints: Vec<NodeId> = Vec::with_capacity(2 * total_nodes * edges_per_node);
    for i in 0..initial_nodes {
        for j in (i + 1)..initial_nodes {
            let (a, c) = (NodeId(i as u32), NodeId(j as u32));
            b.add_link(a, c);
            endpoints.push(a);
            endpoints.push(c);
        }
    }

    let mut targets: Vec<NodeId> = Vec::with_capacity(edges_per_node);
    for _ in initial_nodes..total_nodes {
        let existing = b.node_count();
        targets.clear();
        while targets.len() < edges_per_node {
            let pick = if endpoints.is_empty() {
                NodeId(rng.gen_range(0..existing) as u32)
            } else {
                endpoints[rng.gen_range(0..endpoints.len())]
            };
            if !targets.contains(&pick) {
                targets.push(pick);
            }
        }

        let node = b.add_node();
        for &t in &targets {
            b.add_link(node, t);
            endpoints.push(node);
            endpoints.push(t);
        }
    }

    let net = b.build();
    debug!(
        nodes = net.node_count(),
        links = net.link_count(),
        "generated scale-free network"
    );
    Ok(net)
}
