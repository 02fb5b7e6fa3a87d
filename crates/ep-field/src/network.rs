//! Contact network: a field whose locations are graph nodes.
//!
//! # Data layout
//!
//! Adjacency uses **Compressed Sparse Row (CSR)** format.  Given a
//! `NodeId n`, its neighbours occupy the slice:
//!
//! ```text
//! adjacency[ node_adj_start[n] .. node_adj_start[n+1] ]
//! ```
//!
//! Links are undirected; each one is stored once per endpoint.  Within a
//! node's slice neighbours are sorted by id, so adjacency order is
//! deterministic regardless of the order links were added in.

use ep_core::{Entity, FieldKind, NodeId, SimRng, Topology};

use crate::{Field, FieldError, FieldResult, QuarantineZone, generators};

// ── ContactNetwork ────────────────────────────────────────────────────────────

/// Undirected contact graph with per-node occupancy.
///
/// Do not construct directly; use [`NetworkBuilder`] or
/// [`from_topology`](Self::from_topology).
pub struct ContactNetwork {
    /// CSR row pointer.  Neighbours of node `n` are at
    /// `node_adj_start[n] .. node_adj_start[n+1]`.  Length = `node_count + 1`.
    node_adj_start: Vec<u32>,

    /// Neighbour ids, grouped by source node.
    adjacency: Vec<NodeId>,

    /// Occupant of each node.  Indexed by `NodeId`.
    occupants: Vec<Option<Entity>>,

    zone: QuarantineZone<NodeId>,
}

impl ContactNetwork {
    /// Generate the network described by a graph topology.
    ///
    /// Returns [`EpError::TopologyMismatch`](ep_core::EpError) for
    /// [`Topology::Grid`].
    pub fn from_topology(topology: &Topology, rng: &mut SimRng) -> FieldResult<Self> {
        match *topology {
            Topology::SmallWorld { lattice_size, clustering } => {
                generators::small_world(lattice_size, clustering, rng)
            }
            Topology::ScaleFree { initial_nodes, edges_per_node, total_nodes } => {
                generators::scale_free(initial_nodes, edges_per_node, total_nodes, rng)
            }
            Topology::Grid => Err(ep_core::EpError::TopologyMismatch {
                configured: topology.name(),
                expected:   FieldKind::Grid,
                got:        FieldKind::Network,
            }
            .into()),
        }
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn node_count(&self) -> usize {
        self.occupants.len()
    }

    /// Number of undirected links.
    pub fn link_count(&self) -> usize {
        self.adjacency.len() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.occupants.is_empty()
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Neighbours of `node` as a contiguous slice.  Empty for unknown nodes.
    #[inline]
    pub fn neighbours_of(&self, node: NodeId) -> &[NodeId] {
        if node.index() >= self.occupants.len() {
            return &[];
        }
        let start = self.node_adj_start[node.index()] as usize;
        let end   = self.node_adj_start[node.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    #[inline]
    pub fn degree(&self, node: NodeId) -> usize {
        self.neighbours_of(node).len()
    }

    pub fn has_link(&self, a: NodeId, b: NodeId) -> bool {
        self.neighbours_of(a).binary_search(&b).is_ok()
    }

    fn slot_or_err(&self, node: NodeId) -> FieldResult<usize> {
        if node.index() < self.occupants.len() {
            Ok(node.index())
        } else {
            Err(FieldError::LocationOutOfBounds(node.to_string()))
        }
    }
}

impl Field for ContactNetwork {
    type Location = NodeId;

    fn kind(&self) -> FieldKind {
        FieldKind::Network
    }

    fn locations(&self) -> Vec<NodeId> {
        (0..self.occupants.len() as u32).map(NodeId).collect()
    }

    fn contains(&self, node: NodeId) -> bool {
        node.index() < self.occupants.len()
    }

    fn object_at(&self, node: NodeId) -> Option<Entity> {
        self.occupants.get(node.index()).copied().flatten()
    }

    fn place(&mut self, node: NodeId, entity: Entity) -> FieldResult<()> {
        let i = self.slot_or_err(node)?;
        self.occupants[i] = Some(entity);
        Ok(())
    }

    fn clear_location(&mut self, node: NodeId) -> FieldResult<()> {
        let i = self.slot_or_err(node)?;
        self.occupants[i] = None;
        Ok(())
    }

    fn clear_all(&mut self) {
        self.occupants.iter_mut().for_each(|o| *o = None);
    }

    fn adjacent_locations(&self, node: NodeId) -> Vec<NodeId> {
        self.neighbours_of(node).to_vec()
    }

    fn zone(&self) -> &QuarantineZone<NodeId> {
        &self.zone
    }

    fn zone_mut(&mut self) -> &mut QuarantineZone<NodeId> {
        &mut self.zone
    }
}

// ── NetworkBuilder ────────────────────────────────────────────────────────────

/// Construct a [`ContactNetwork`] incrementally, then call
/// [`build`](Self::build).
///
/// Links may be added in any order and more than once; `build()` drops
/// self-loops and duplicate links.
///
/// # Example
///
/// ```
/// use ep_field::{Field, NetworkBuilder};
///
/// let mut b = NetworkBuilder::new();
/// let a = b.add_node();
/// let c = b.add_node();
/// b.add_link(a, c);
/// let net = b.build();
/// assert_eq!(net.node_count(), 2);
/// assert_eq!(net.adjacent_locations(a), vec![c]);
/// ```
pub struct NetworkBuilder {
    node_count: usize,
    raw_links:  Vec<(NodeId, NodeId)>,
}

impl NetworkBuilder {
    pub fn new() -> Self {
        Self { node_count: 0, raw_links: Vec::new() }
    }

    /// Pre-allocate for the expected number of links.
    pub fn with_capacity(links: usize) -> Self {
        Self { node_count: 0, raw_links: Vec::with_capacity(links) }
    }

    /// Add a node and return its `NodeId` (sequential from 0).
    pub fn add_node(&mut self) -> NodeId {
        let id = NodeId(self.node_count as u32);
        self.node_count += 1;
        id
    }

    /// Add `n` nodes at once; ids continue the sequence.
    pub fn add_nodes(&mut self, n: usize) {
        self.node_count += n;
    }

    /// Add an undirected link between `a` and `b`.
    pub fn add_link(&mut self, a: NodeId, b: NodeId) {
        self.raw_links.push((a, b));
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Consume the builder and produce a [`ContactNetwork`].
    ///
    /// Links naming a node that was never added are dropped.
    pub fn build(self) -> ContactNetwork {
        let node_count = self.node_count;

        let mut directed: Vec<(NodeId, NodeId)> = Vec::with_capacity(self.raw_links.len() * 2);
        for (a, b) in self.raw_links {
            if a == b || a.index() >= node_count || b.index() >= node_count {
                continue;
            }
            directed.push((a, b));
            directed.push((b, a));
        }
        directed.sort_unstable();
        directed.dedup();

        // Build CSR row pointer.
        let mut node_adj_start = vec![0u32; node_count + 1];
        for &(from, _) in &directed {
            node_adj_start[from.index() + 1] += 1;
        }
        for i in 1..=node_count {
            node_adj_start[i] += node_adj_start[i - 1];
        }
        debug_assert_eq!(node_adj_start[node_count] as usize, directed.len());

        let adjacency = directed.into_iter().map(|(_, to)| to).collect();

        ContactNetwork {
            node_adj_start,
            adjacency,
            occupants: vec![None; node_count],
            zone: QuarantineZone::new(),
        }
    }
}

impl Default for NetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
