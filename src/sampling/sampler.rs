//! Sampler implementations.

use std::collections::HashMap;

use rand::seq::{index, SliceRandom};
use rand::Rng;

use crate::graph::{Color, Graph, NodeId};

/// Share of a color-biased sample drawn from the requester's own color.
pub const SAME_COLOR_PERCENT: usize = 70;

/// Up to `k` distinct neighbors of `node`.
///
/// Self-loops are dropped and duplicate adjacency entries collapsed. When
/// `k` covers every distinct neighbor they are all returned in adjacency
/// order; otherwise `k` of them are drawn without replacement, each with
/// weight equal to how often it appears in the adjacency list.
pub fn local_sample<R: Rng>(graph: &Graph, node: NodeId, k: usize, rng: &mut R) -> Vec<NodeId> {
    let mut slots: HashMap<NodeId, usize> = HashMap::new();
    let mut distinct: Vec<NodeId> = Vec::new();
    let mut weights: Vec<f64> = Vec::new();
    for &n in graph.neighbors_of(node).iter().filter(|&&n| n != node) {
        match slots.get(&n) {
            Some(&slot) => weights[slot] += 1.0,
            None => {
                slots.insert(n, distinct.len());
                distinct.push(n);
                weights.push(1.0);
            }
        }
    }

    if distinct.len() <= k {
        return distinct;
    }
    // Weights are positive multiplicities, so the weighted draw cannot fail.
    let picked = index::sample_weighted(rng, distinct.len(), |i| weights[i], k)
        .unwrap_or_else(|_| index::sample(rng, distinct.len(), k));
    picked.into_iter().map(|i| distinct[i]).collect()
}

/// `k` distinct ids drawn uniformly from every node except `node`.
///
/// Returns the whole eligible population when it has at most `k` members.
pub fn uniform_sample<R: Rng>(graph: &Graph, node: NodeId, k: usize, rng: &mut R) -> Vec<NodeId> {
    let ids = graph.node_ids();
    let own = graph.index_of(node);
    let eligible = ids.len() - usize::from(own.is_some());

    index::sample(rng, eligible, k.min(eligible))
        .into_iter()
        .map(|i| match own {
            // Skip over the requester's slot.
            Some(pos) if i >= pos => ids[i + 1],
            _ => ids[i],
        })
        .collect()
}

/// A sample of size at most `k` biased towards nodes holding `color`.
///
/// `floor(k * 70%)` ids come from the same-color group (capped by its
/// size) and the rest of `k` from the other-color group (capped by its
/// size). A short group is not backfilled from the other one.
pub fn color_biased_sample<R: Rng>(
    graph: &Graph,
    node: NodeId,
    color: Color,
    k: usize,
    rng: &mut R,
) -> Vec<NodeId> {
    let mut same = Vec::new();
    let mut diff = Vec::new();
    for n in graph.nodes().iter().filter(|n| n.id() != node) {
        if n.color() == color {
            same.push(n.id());
        } else {
            diff.push(n.id());
        }
    }
    same.shuffle(rng);
    diff.shuffle(rng);

    let from_same = (k * SAME_COLOR_PERCENT / 100).min(same.len());
    let from_diff = (k - from_same).min(diff.len());

    let mut out = Vec::with_capacity(from_same + from_diff);
    out.extend_from_slice(&same[..from_same]);
    out.extend_from_slice(&diff[..from_diff]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;
    use std::collections::HashSet;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn star(leaves: usize) -> Graph {
        let mut nodes = vec![Node::new(0, 0, (1..=leaves).collect())];
        nodes.extend((1..=leaves).map(|i| Node::new(i, 0, vec![0])));
        Graph::from_nodes(nodes).unwrap()
    }

    fn colored(same: usize, diff: usize) -> Graph {
        // Node 0 is the requester with color 0.
        let mut nodes = vec![Node::new(0, 0, vec![])];
        nodes.extend((1..=same).map(|i| Node::new(i, 0, vec![])));
        nodes.extend((same + 1..=same + diff).map(|i| Node::new(i, 1, vec![])));
        Graph::from_nodes(nodes).unwrap()
    }

    fn is_distinct(ids: &[NodeId]) -> bool {
        ids.iter().collect::<HashSet<_>>().len() == ids.len()
    }

    #[test]
    fn test_local_returns_all_when_k_covers() {
        let g = star(4);
        let mut rng = StdRng::seed_from_u64(3);
        assert_eq!(local_sample(&g, 0, 4, &mut rng), vec![1, 2, 3, 4]);
        assert_eq!(local_sample(&g, 0, 10, &mut rng), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_local_subset_is_distinct_neighbors() {
        let g = star(10);
        let mut rng = StdRng::seed_from_u64(5);
        let sample = local_sample(&g, 0, 3, &mut rng);
        assert_eq!(sample.len(), 3);
        assert!(is_distinct(&sample));
        assert!(sample.iter().all(|&n| (1..=10).contains(&n)));
    }

    #[test]
    fn test_local_collapses_duplicates_and_self_loops() {
        let g = Graph::from_nodes(vec![
            Node::new(0, 0, vec![1, 1, 0, 2, 1]),
            Node::new(1, 0, vec![0, 0, 0]),
            Node::new(2, 0, vec![0]),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        // Five adjacency entries but only two distinct neighbors: must not spin.
        assert_eq!(local_sample(&g, 0, 3, &mut rng), vec![1, 2]);
        assert_eq!(local_sample(&g, 0, 2, &mut rng), vec![1, 2]);
        assert_eq!(local_sample(&g, 0, 1, &mut rng).len(), 1);
    }

    #[test]
    fn test_local_weights_by_multiplicity() {
        // Neighbor 1 appears nine times, 2 and 3 once each.
        let mut adj = vec![1; 9];
        adj.extend([2, 3]);
        let g = Graph::from_nodes(vec![
            Node::new(0, 0, adj),
            Node::new(1, 0, vec![0; 9]),
            Node::new(2, 0, vec![0]),
            Node::new(3, 0, vec![0]),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(21);
        let picks_of_one = (0..1000)
            .filter(|_| local_sample(&g, 0, 1, &mut rng) == vec![1])
            .count();
        // Expected share is 9/11; uniform over distinct ids would give 1/3.
        assert!(picks_of_one > 650, "neighbor 1 picked {picks_of_one} times");
    }

    #[test]
    fn test_local_zero_k() {
        let g = star(3);
        let mut rng = StdRng::seed_from_u64(0);
        assert!(local_sample(&g, 0, 0, &mut rng).is_empty());
    }

    #[test]
    fn test_uniform_excludes_self() {
        let g = star(9);
        let mut rng = StdRng::seed_from_u64(11);
        for node in 0..10 {
            let sample = uniform_sample(&g, node, 4, &mut rng);
            assert_eq!(sample.len(), 4);
            assert!(is_distinct(&sample));
            assert!(!sample.contains(&node));
        }
    }

    #[test]
    fn test_uniform_exhausts_small_population() {
        let g = star(2);
        let mut rng = StdRng::seed_from_u64(1);
        let mut sample = uniform_sample(&g, 1, 10, &mut rng);
        sample.sort_unstable();
        assert_eq!(sample, vec![0, 2]);
    }

    #[test]
    fn test_uniform_single_node_graph() {
        let g = Graph::from_nodes(vec![Node::new(5, 0, vec![])]).unwrap();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(uniform_sample(&g, 5, 3, &mut rng).is_empty());
    }

    #[test]
    fn test_biased_caps_same_color_without_backfill() {
        let g = colored(3, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let sample = color_biased_sample(&g, 0, 0, 10, &mut rng);
        let same = sample.iter().filter(|&&n| g.color_of(n) == 0).count();
        let diff = sample.iter().filter(|&&n| g.color_of(n) == 1).count();
        assert_eq!(same, 3);
        assert_eq!(diff, 7);
        assert_eq!(sample.len(), 10);
        assert!(!sample.contains(&0));
    }

    #[test]
    fn test_biased_split_with_ample_groups() {
        let g = colored(20, 20);
        let mut rng = StdRng::seed_from_u64(9);
        let sample = color_biased_sample(&g, 0, 0, 10, &mut rng);
        assert_eq!(sample.iter().filter(|&&n| g.color_of(n) == 0).count(), 7);
        assert_eq!(sample.iter().filter(|&&n| g.color_of(n) == 1).count(), 3);
    }

    #[test]
    fn test_biased_short_diff_group_not_backfilled() {
        let g = colored(20, 1);
        let mut rng = StdRng::seed_from_u64(2);
        let sample = color_biased_sample(&g, 0, 0, 10, &mut rng);
        // 7 same + min(3, 1) other.
        assert_eq!(sample.len(), 8);
        assert!(is_distinct(&sample));
    }

    proptest! {
        #[test]
        fn prop_uniform_exact_size(n in 2usize..60, k in 0usize..60, seed in any::<u64>()) {
            let g = star(n - 1);
            let mut rng = StdRng::seed_from_u64(seed);
            let requester = seed as usize % n;
            let sample = uniform_sample(&g, requester, k, &mut rng);
            prop_assert_eq!(sample.len(), k.min(n - 1));
            prop_assert!(is_distinct(&sample));
            prop_assert!(!sample.contains(&requester));
        }

        #[test]
        fn prop_biased_bounded(same in 0usize..15, diff in 0usize..15, k in 0usize..25, seed in any::<u64>()) {
            let g = colored(same, diff);
            let mut rng = StdRng::seed_from_u64(seed);
            let sample = color_biased_sample(&g, 0, 0, k, &mut rng);
            prop_assert!(sample.len() <= k);
            prop_assert!(is_distinct(&sample));
            prop_assert!(!sample.contains(&0));
        }
    }
}
