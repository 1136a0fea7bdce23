//! Partition quality metrics.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::graph::Graph;

/// Number of ordered (node, neighbor) pairs whose colors differ.
///
/// Each undirected cut edge is counted once from each endpoint.
pub fn cut_pairs(graph: &Graph) -> usize {
    #[cfg(feature = "parallel")]
    let nodes = graph.nodes().par_iter();
    #[cfg(not(feature = "parallel"))]
    let nodes = graph.nodes().iter();

    nodes
        .map(|node| {
            node.neighbors()
                .iter()
                .filter(|&&n| graph.color_of(n) != node.color())
                .count()
        })
        .sum()
}

/// Number of edges whose endpoints hold different colors.
pub fn edge_cut(graph: &Graph) -> usize {
    cut_pairs(graph) / 2
}

/// Number of nodes whose color differs from their initial color.
pub fn migrations(graph: &Graph) -> usize {
    #[cfg(feature = "parallel")]
    let nodes = graph.nodes().par_iter();
    #[cfg(not(feature = "parallel"))]
    let nodes = graph.nodes().iter();

    nodes.filter(|node| node.has_migrated()).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Node;
    use proptest::prelude::*;

    fn cycle(colors: &[usize]) -> Graph {
        let n = colors.len();
        let nodes = colors
            .iter()
            .enumerate()
            .map(|(i, &c)| Node::new(i, c, vec![(i + 1) % n, (i + n - 1) % n]))
            .collect();
        Graph::from_nodes(nodes).unwrap()
    }

    #[test]
    fn test_cycle_edge_cut() {
        let g = cycle(&[0, 0, 1, 1]);
        assert_eq!(cut_pairs(&g), 4);
        assert_eq!(edge_cut(&g), 2);
        assert_eq!(migrations(&g), 0);
    }

    #[test]
    fn test_monochrome_has_no_cut() {
        assert_eq!(edge_cut(&cycle(&[3, 3, 3, 3, 3])), 0);
    }

    #[test]
    fn test_migrations_against_initial_color() {
        let mut g = cycle(&[0, 0, 1, 1]);
        g.swap_colors(1, 2);
        assert_eq!(migrations(&g), 2);
        // Swapping back restores the initial assignment.
        g.swap_colors(1, 2);
        assert_eq!(migrations(&g), 0);
    }

    fn random_graph() -> impl Strategy<Value = Graph> {
        (2usize..20)
            .prop_flat_map(|n| {
                (
                    Just(n),
                    prop::collection::vec((0..n, 0..n), 0..40),
                    prop::collection::vec(0usize..3, n),
                )
            })
            .prop_map(|(n, edges, colors)| {
                let mut adj = vec![Vec::new(); n];
                for (a, b) in edges {
                    adj[a].push(b);
                    adj[b].push(a);
                }
                let nodes = adj
                    .into_iter()
                    .zip(colors)
                    .enumerate()
                    .map(|(i, (neighbors, c))| Node::new(i, c, neighbors))
                    .collect();
                Graph::from_nodes(nodes).unwrap()
            })
    }

    proptest! {
        #[test]
        fn prop_edge_cut_bounded_and_symmetric(g in random_graph()) {
            prop_assert_eq!(cut_pairs(&g) % 2, 0);
            prop_assert!(edge_cut(&g) <= g.edge_count());
        }
    }
}
