use std::collections::HashMap;

use thiserror::Error;

use crate::newtypes::NodeLabel;

/// Error type for malformed input trees.
#[derive(Error, Debug, PartialEq)]
pub enum TopologyError {
    /// A tree on `nodes` nodes has exactly `nodes - 1` edges.
    #[error("{edges} edges cannot form a tree on {nodes} nodes")]
    EdgeCountMismatch {
        /// Number of distinct labels present
        nodes: usize,
        /// Number of edges present
        edges: usize,
    },
    /// An edge joining a node to itself.
    #[error("edge joins {found} to itself")]
    SelfLoop {
        /// The offending label
        found: NodeLabel,
    },
    /// The same unordered pair listed twice.
    #[error("duplicate edge {found:?}")]
    DuplicateEdge {
        /// The offending edge, canonicalized
        found: Edge,
    },
    /// No removable leaf remained while nodes were left.
    #[error("topology is disconnected")]
    Disconnected,
    /// A node lost its last neighbor before its own removal,
    /// which cannot happen in a connected acyclic graph.
    #[error("node {found} has no remaining neighbors")]
    IsolatedNode {
        /// The offending label
        found: NodeLabel,
    },
}

/// Alias for a [`Result`](std::result::Result) whose error
/// type is [`TopologyError`].
pub type TopologyResult<T> = std::result::Result<T, TopologyError>;

/// An unordered pair of node labels
///
/// The canonical form stores the smaller label first.
///
/// # Examples
///
/// ```
/// let edge = prufts_core::Edge::new(9, 4).canonical();
/// assert_eq!(edge, prufts_core::Edge::new(4, 9));
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
pub struct Edge(pub NodeLabel, pub NodeLabel);

impl Edge {
    /// Create a new edge from anything convertible to
    /// [`NodeLabel`].
    pub fn new<A, B>(a: A, b: B) -> Self
    where
        A: Into<NodeLabel>,
        B: Into<NodeLabel>,
    {
        Self(a.into(), b.into())
    }

    /// Reorder the pair as (min, max).
    pub fn canonical(self) -> Self {
        if self.1 < self.0 {
            Self(self.1, self.0)
        } else {
            self
        }
    }
}

/// The edge set of a labeled tree
///
/// A topology is immutable once built; transformations
/// such as [`Topology::into_canonical`] consume the value
/// and return a new one.
///
/// The derived equality compares edge lists as stored, so
/// callers comparing trees from different sources should
/// canonicalize both sides first.
/// [`encode`](crate::encode) works for any labeled tree;
/// the coalescent leaf/internal labeling convention only
/// matters to [`decode`](crate::decode) and
/// [`validate`](crate::validate).
///
/// # Examples
///
/// ```
/// use prufts_core::Edge;
/// use prufts_core::Topology;
///
/// let topology = Topology::new(vec![Edge::new(5, 3), Edge::new(4, 1)]).into_canonical();
/// assert_eq!(topology.edges(), vec![Edge::new(1, 4), Edge::new(3, 5)]);
/// assert_eq!(topology.node_count(), 4);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Topology {
    edges: Vec<Edge>,
}

impl Topology {
    /// Create a new topology from an edge list.
    ///
    /// The edges are stored as given.  No structural
    /// checks happen here; [`encode`](crate::encode)
    /// rejects non-trees when it walks the edges.
    pub fn new(edges: Vec<Edge>) -> Self {
        Self { edges }
    }

    /// View the edges in stored order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// `true` if the topology has no edges.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Number of distinct labels appearing in the edge list.
    pub fn node_count(&self) -> usize {
        self.degrees().len()
    }

    /// Count the edges incident to each label present.
    ///
    /// For a coalescent tree over `n` leaves, every leaf
    /// has degree 1, the root degree 2, and every other
    /// internal node degree 3.
    pub fn degrees(&self) -> HashMap<NodeLabel, usize> {
        let mut degrees = HashMap::new();
        for edge in &self.edges {
            *degrees.entry(edge.0).or_insert(0) += 1;
            *degrees.entry(edge.1).or_insert(0) += 1;
        }
        degrees
    }

    /// Normalize: reorder each edge as (min, max), then
    /// sort edges by first label, then second.
    ///
    /// Purely a reordering.  Structurally identical trees
    /// compare equal after canonicalization regardless of
    /// how their edge lists were assembled.
    pub fn into_canonical(mut self) -> Self {
        for edge in &mut self.edges {
            *edge = edge.canonical();
        }
        self.edges.sort();
        self
    }
}

impl FromIterator<Edge> for Topology {
    fn from_iter<I: IntoIterator<Item = Edge>>(iter: I) -> Self {
        Self {
            edges: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod test_topology {
    use super::*;

    fn three_leaf_topology() -> Topology {
        Topology::new(vec![
            Edge::new(1, 4),
            Edge::new(2, 4),
            Edge::new(3, 5),
            Edge::new(4, 5),
        ])
    }

    #[test]
    fn test_edge_canonical() {
        assert_eq!(Edge::new(9, 4).canonical(), Edge::new(4, 9));
        assert_eq!(Edge::new(4, 9).canonical(), Edge::new(4, 9));
        assert_eq!(Edge::new(4, 4).canonical(), Edge::new(4, 4));
    }

    #[test]
    fn test_canonical_ordering() {
        let scrambled = Topology::new(vec![
            Edge::new(5, 4),
            Edge::new(4, 2),
            Edge::new(5, 3),
            Edge::new(4, 1),
        ]);
        assert_eq!(scrambled.into_canonical(), three_leaf_topology());
    }

    #[test]
    fn test_node_count() {
        assert_eq!(three_leaf_topology().node_count(), 5);
        assert_eq!(Topology::default().node_count(), 0);
        assert!(Topology::default().is_empty());
    }

    #[test]
    fn test_degrees() {
        let degrees = three_leaf_topology().degrees();
        for leaf in [1, 2, 3] {
            assert_eq!(degrees[&NodeLabel::from(leaf)], 1);
        }
        assert_eq!(degrees[&NodeLabel::from(4)], 3);
        assert_eq!(degrees[&NodeLabel::from(5)], 2);
    }

    #[test]
    fn test_from_iterator() {
        let topology: Topology = [Edge::new(1, 3), Edge::new(2, 3)].into_iter().collect();
        assert_eq!(topology.num_edges(), 2);
        assert_eq!(topology.node_count(), 3);
    }
}
