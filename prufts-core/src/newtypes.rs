/// The integer label of a node in a [`Topology`](crate::Topology)
///
/// The coalescent labeling convention for a sample of
/// size `n` puts leaves at `1..=n` and internal nodes at
/// `n+1..=2n-1`, with `2n-1` always the root.
/// The label itself stores any `u32`; range rules are
/// enforced by [`validate`](crate::validate) and
/// [`decode`](crate::decode), not here.
///
/// # Examples
///
/// ```
/// let label = prufts_core::NodeLabel::from(10);
/// assert_eq!(label, 10); // can be compared to u32
/// # assert_eq!(10, label);
/// # assert!(label > 0);
/// # assert!(label != 0);
/// # assert!(label >= 10);
/// # assert!(label <= 10);
/// # assert!(0 < label);
/// let next = prufts_core::NodeLabel::from(11);
/// assert!(label < next);
/// assert!(label != next);
/// ```
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, std::hash::Hash)]
#[repr(transparent)]
pub struct NodeLabel(u32);

impl std::fmt::Display for NodeLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl PartialEq<u32> for NodeLabel {
    fn eq(&self, other: &u32) -> bool {
        self.0 == *other
    }
}

impl PartialEq<NodeLabel> for u32 {
    fn eq(&self, other: &NodeLabel) -> bool {
        *self == other.0
    }
}

impl PartialOrd<u32> for NodeLabel {
    fn partial_cmp(&self, other: &u32) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<NodeLabel> for u32 {
    fn partial_cmp(&self, other: &NodeLabel) -> Option<std::cmp::Ordering> {
        self.partial_cmp(&other.0)
    }
}

impl From<u32> for NodeLabel {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<NodeLabel> for u32 {
    fn from(value: NodeLabel) -> Self {
        value.0
    }
}

impl From<NodeLabel> for usize {
    fn from(value: NodeLabel) -> Self {
        value.0 as Self
    }
}

/// The time of a coalescence event
///
/// Accumulated waiting times are non-negative by
/// construction, but the type stores any `f64`.
///
/// # Notes
///
/// * Comparison panics on NaN so that sorted containers
///   of times keep a total order.
#[derive(Copy, Clone, Debug, PartialEq)]
#[repr(transparent)]
pub struct Time(f64);

impl From<f64> for Time {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl From<Time> for f64 {
    fn from(value: Time) -> Self {
        value.0
    }
}

impl PartialEq<f64> for Time {
    fn eq(&self, other: &f64) -> bool {
        self.0 == *other
    }
}

impl PartialEq<Time> for f64 {
    fn eq(&self, other: &Time) -> bool {
        *self == other.0
    }
}

impl PartialOrd<Time> for Time {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        match self.0.partial_cmp(&other.0) {
            None => panic!("fatal: partial_cmp for Time received NaN"),
            Some(x) => Some(x),
        }
    }
}

impl PartialOrd<f64> for Time {
    fn partial_cmp(&self, other: &f64) -> Option<std::cmp::Ordering> {
        self.0.partial_cmp(other)
    }
}

impl PartialOrd<Time> for f64 {
    fn partial_cmp(&self, other: &Time) -> Option<std::cmp::Ordering> {
        self.partial_cmp(&other.0)
    }
}
