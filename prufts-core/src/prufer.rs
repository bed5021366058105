//! The codec between topologies and sequences.
//!
//! Encoding peels the smallest-labeled leaf off the tree
//! and records its neighbor until two nodes remain.  The
//! smallest-first tie break is what makes the sequence a
//! canonical serialization for a fixed labeling.

use std::collections::HashMap;
use std::collections::HashSet;

use crate::leaf_queue::LeafQueue;
use crate::newtypes::NodeLabel;
use crate::topology::Edge;
use crate::topology::Topology;
use crate::topology::TopologyError;
use crate::topology::TopologyResult;
use crate::validity::implied_leaf_count;
use crate::validity::validate;
use crate::validity::SequenceError;
use crate::validity::SequenceResult;

/// A Pruefer-style serialization of a [`Topology`]
///
/// A tree on `m` nodes serializes to `m - 2` symbols.
///
/// # Examples
///
/// ```
/// let sequence = prufts_core::PruferSequence::new(vec![4.into(), 4.into(), 5.into()]);
/// assert_eq!(sequence, prufts_core::PruferSequence::from(vec![4, 4, 5]));
/// assert_eq!(sequence.len(), 3);
/// assert_eq!(sequence.symbols()[2], 5);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PruferSequence(Vec<NodeLabel>);

impl PruferSequence {
    /// Create a sequence from symbols in emission order.
    pub fn new(symbols: Vec<NodeLabel>) -> Self {
        Self(symbols)
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// `true` if there are no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// View the symbols in emission order.
    pub fn symbols(&self) -> &[NodeLabel] {
        &self.0
    }

    /// Iterate over the symbols in emission order.
    pub fn iter(&self) -> std::slice::Iter<'_, NodeLabel> {
        self.0.iter()
    }
}

impl From<Vec<NodeLabel>> for PruferSequence {
    fn from(value: Vec<NodeLabel>) -> Self {
        Self(value)
    }
}

impl From<Vec<u32>> for PruferSequence {
    fn from(value: Vec<u32>) -> Self {
        value.into_iter().map(NodeLabel::from).collect()
    }
}

impl FromIterator<NodeLabel> for PruferSequence {
    fn from_iter<I: IntoIterator<Item = NodeLabel>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Neighbor sets for one encode pass.
///
/// Owned by a single [`encode`] call and discarded with it.
struct Adjacency {
    neighbors: HashMap<NodeLabel, HashSet<NodeLabel>>,
}

impl Adjacency {
    fn from_topology(topology: &Topology) -> TopologyResult<Self> {
        let mut neighbors: HashMap<NodeLabel, HashSet<NodeLabel>> = HashMap::new();
        for edge in topology.edges() {
            let Edge(a, b) = *edge;
            if a == b {
                return Err(TopologyError::SelfLoop { found: a });
            }
            if !neighbors.entry(a).or_default().insert(b) {
                return Err(TopologyError::DuplicateEdge {
                    found: edge.canonical(),
                });
            }
            neighbors.entry(b).or_default().insert(a);
        }
        if topology.num_edges() + 1 != neighbors.len() {
            return Err(TopologyError::EdgeCountMismatch {
                nodes: neighbors.len(),
                edges: topology.num_edges(),
            });
        }
        Ok(Self { neighbors })
    }

    fn node_count(&self) -> usize {
        self.neighbors.len()
    }

    fn degree(&self, label: NodeLabel) -> usize {
        self.neighbors.get(&label).map_or(0, |set| set.len())
    }

    fn current_leaves(&self) -> LeafQueue {
        self.neighbors
            .iter()
            .filter(|(_, set)| set.len() == 1)
            .map(|(label, _)| *label)
            .collect()
    }

    /// Remove `leaf` and its one edge; return the neighbor.
    fn detach_leaf(&mut self, leaf: NodeLabel) -> TopologyResult<NodeLabel> {
        let set = self
            .neighbors
            .remove(&leaf)
            .ok_or(TopologyError::IsolatedNode { found: leaf })?;
        let mut drain = set.into_iter();
        let neighbor = drain
            .next()
            .ok_or(TopologyError::IsolatedNode { found: leaf })?;
        // labels queue up only when their degree reaches one
        debug_assert!(drain.next().is_none());
        let remaining = self
            .neighbors
            .get_mut(&neighbor)
            .ok_or(TopologyError::IsolatedNode { found: neighbor })?;
        remaining.remove(&leaf);
        if remaining.is_empty() {
            return Err(TopologyError::IsolatedNode { found: neighbor });
        }
        Ok(neighbor)
    }
}

/// Serialize a topology by iterative leaf removal.
///
/// Works for any labeled tree, coalescent or not: the
/// node set is whatever the edge list mentions.  The
/// empty topology (a single-node tree) encodes to the
/// empty sequence.
///
/// # Errors
///
/// [`TopologyError`] if the edge list is not a tree:
/// wrong edge count for its distinct labels, self loops,
/// duplicate edges, or disconnection/cycles discovered
/// while peeling.
///
/// # Examples
///
/// Three leaves coalescing as (1,2) then ((1,2),3):
///
/// ```
/// use prufts_core::Edge;
/// use prufts_core::Topology;
///
/// let topology = Topology::new(vec![
///     Edge::new(1, 4),
///     Edge::new(2, 4),
///     Edge::new(3, 5),
///     Edge::new(4, 5),
/// ]);
/// let sequence = prufts_core::encode(&topology).unwrap();
/// assert_eq!(sequence, prufts_core::PruferSequence::from(vec![4, 4, 5]));
/// ```
pub fn encode(topology: &Topology) -> TopologyResult<PruferSequence> {
    if topology.is_empty() {
        return Ok(PruferSequence::default());
    }
    let mut adjacency = Adjacency::from_topology(topology)?;
    let mut pending = adjacency.current_leaves();
    let mut symbols = Vec::with_capacity(adjacency.node_count().saturating_sub(2));
    while adjacency.node_count() > 2 {
        let leaf = pending.pop_min().ok_or(TopologyError::Disconnected)?;
        let neighbor = adjacency.detach_leaf(leaf)?;
        symbols.push(neighbor);
        if adjacency.degree(neighbor) == 1 {
            pending.insert(neighbor);
        }
    }
    Ok(PruferSequence::new(symbols))
}

/// Rebuild the topology a sequence came from.
///
/// A sequence of length `L` implies `L + 2` nodes.  The
/// decoder insists on the coalescent labeling convention:
/// the length must be odd (`L = 2n - 3` for `n` leaves)
/// and the symbols must pass [`validate`] for the implied
/// leaf count, so a sequence naming a leaf-range label
/// fails here instead of yielding a tree that is not a
/// coalescent topology.  The result is canonicalized.
///
/// The empty sequence decodes to the fixed two-node tree
/// over labels 1 and 2.  Note the degenerate ends of the
/// codec do not invert each other: a single-node topology
/// encodes to the empty sequence, while the empty
/// sequence decodes to the two-node tree.
///
/// # Errors
///
/// [`SequenceError`] as produced by [`validate`], or for
/// lengths admitting no leaf/internal split.
///
/// # Examples
///
/// ```
/// use prufts_core::PruferSequence;
///
/// let decoded = prufts_core::decode(&PruferSequence::from(vec![4, 4, 5])).unwrap();
/// assert_eq!(decoded.num_edges(), 4);
/// assert!(prufts_core::decode(&PruferSequence::from(vec![1, 4, 5])).is_err());
/// ```
pub fn decode(sequence: &PruferSequence) -> SequenceResult<Topology> {
    if sequence.is_empty() {
        return Ok(Topology::new(vec![Edge::new(1, 2)]));
    }
    let leaves = implied_leaf_count(sequence.len())?;
    validate(sequence, leaves)?;
    let node_count = sequence.len() + 2;
    let mut degree = vec![1u32; node_count];
    for symbol in sequence.iter() {
        degree[usize::from(*symbol) - 1] += 1;
    }
    let mut pending: LeafQueue = (1..=node_count as u32)
        .map(NodeLabel::from)
        .filter(|label| degree[usize::from(*label) - 1] == 1)
        .collect();
    let mut edges = Vec::with_capacity(node_count - 1);
    for symbol in sequence.iter() {
        let leaf = pending.pop_min().ok_or(SequenceError::EmptyLeafPool)?;
        edges.push(Edge::new(leaf, *symbol));
        degree[usize::from(leaf) - 1] -= 1;
        let symbol_slot = usize::from(*symbol) - 1;
        degree[symbol_slot] -= 1;
        if degree[symbol_slot] == 1 {
            pending.insert(*symbol);
        }
    }
    let first = pending.pop_min().ok_or(SequenceError::EmptyLeafPool)?;
    let second = pending.pop_min().ok_or(SequenceError::EmptyLeafPool)?;
    edges.push(Edge::new(first, second));
    Ok(Topology::new(edges).into_canonical())
}
