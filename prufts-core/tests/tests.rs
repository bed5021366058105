use proptest::prelude::*;

use prufts_core::decode;
use prufts_core::encode;
use prufts_core::roundtrip_error;
use prufts_core::validate;
use prufts_core::Edge;
use prufts_core::NodeLabel;
use prufts_core::PruferSequence;
use prufts_core::Topology;

// Merge random pairs until one lineage remains, labeling
// internal nodes n+1.. in creation order.
fn coalescent_topology_from_picks(
    leaves: u32,
    picks: &[(prop::sample::Index, prop::sample::Index)],
) -> Topology {
    let mut active: Vec<NodeLabel> = (1..=leaves).map(NodeLabel::from).collect();
    let mut edges = vec![];
    let mut next_internal = leaves + 1;
    for (first_pick, second_pick) in picks {
        let i = first_pick.index(active.len());
        let j = second_pick.index(active.len() - 1);
        let j = if j >= i { j + 1 } else { j };
        let parent = NodeLabel::from(next_internal);
        next_internal += 1;
        edges.push(Edge::new(active[i], parent));
        edges.push(Edge::new(active[j], parent));
        active.swap_remove(i.max(j));
        active.swap_remove(i.min(j));
        active.push(parent);
    }
    Topology::new(edges)
}

// The unique valid occurrence multiset for n leaves, in a
// pick-driven random order.
fn shuffled_valid_sequence(leaves: u32, picks: &[prop::sample::Index]) -> PruferSequence {
    let mut symbols: Vec<NodeLabel> = vec![];
    for internal in leaves + 1..2 * leaves - 1 {
        symbols.push(NodeLabel::from(internal));
        symbols.push(NodeLabel::from(internal));
    }
    symbols.push(NodeLabel::from(2 * leaves - 1));
    for (slot, pick) in picks.iter().enumerate().take(symbols.len()) {
        let other = slot + pick.index(symbols.len() - slot);
        symbols.swap(slot, other);
    }
    PruferSequence::from(symbols)
}

proptest! {
    #[test]
    fn test_topology_round_trip(
        (leaves, picks) in (2u32..32).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(
                    (any::<prop::sample::Index>(), any::<prop::sample::Index>()),
                    (n - 1) as usize,
                ),
            )
        })
    ) {
        let topology = coalescent_topology_from_picks(leaves, &picks);
        let sequence = encode(&topology).unwrap();
        prop_assert_eq!(sequence.len(), topology.node_count() - 2);
        prop_assert!(validate(&sequence, leaves).is_ok());
        let decoded = decode(&sequence).unwrap();
        prop_assert_eq!(decoded, topology.into_canonical());
    }
}

proptest! {
    #[test]
    fn test_sequence_round_trip(
        (leaves, picks) in (2u32..32).prop_flat_map(|n| {
            (
                Just(n),
                prop::collection::vec(any::<prop::sample::Index>(), (2 * n - 3) as usize),
            )
        })
    ) {
        let sequence = shuffled_valid_sequence(leaves, &picks);
        prop_assert!(validate(&sequence, leaves).is_ok());
        let back = encode(&decode(&sequence).unwrap()).unwrap();
        prop_assert_eq!(&back, &sequence);
        prop_assert_eq!(roundtrip_error(&sequence).unwrap(), 0);
    }
}

proptest! {
    #[test]
    fn test_encode_on_arbitrary_labeled_trees(
        picks in prop::collection::vec(any::<prop::sample::Index>(), 1..64)
    ) {
        // random attachment tree over labels 1..=picks.len()+1
        let mut edges = vec![];
        for (grown, pick) in picks.iter().enumerate() {
            let child = grown as u32 + 2;
            let parent = pick.index(grown + 1) as u32 + 1;
            edges.push(Edge::new(parent, child));
        }
        let topology = Topology::new(edges);
        let node_count = topology.node_count();
        let sequence = encode(&topology).unwrap();
        prop_assert_eq!(sequence.len(), node_count - 2);
        for symbol in sequence.iter() {
            prop_assert!(*symbol >= 1);
            prop_assert!(*symbol <= node_count as u32);
        }
        // a second encode of the canonicalized tree agrees
        let again = encode(&topology.clone().into_canonical()).unwrap();
        prop_assert_eq!(again, sequence);
    }
}
