//! Partner selection.
//!
//! For requester `p` and candidate `q`:
//!
//! ```text
//! old = d_p(color_p)^a + d_q(color_q)^a
//! new = d_p(color_q)^a + d_q(color_p)^a
//! accept  iff  new / old^(1/T) > 1
//! ```
//!
//! where `d_x(c)` is the number of neighbors of `x` holding color `c`.

use crate::graph::{Graph, NodeId};

/// Exponent applied to same-color degrees.
pub const ALPHA: f64 = 2.0;

/// Utility of the current coloring of a pair and of its swapped coloring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapUtility {
    pub old: f64,
    pub new: f64,
}

/// Scores swapping the colors of `p` and `q` against the current graph.
pub fn swap_utility(graph: &Graph, p: NodeId, q: NodeId) -> SwapUtility {
    let (pc, qc) = (graph.color_of(p), graph.color_of(q));
    let d_pp = graph.degree_by_color(p, pc);
    let d_qq = graph.degree_by_color(q, qc);
    let d_pq = graph.degree_by_color(p, qc);
    let d_qp = graph.degree_by_color(q, pc);
    SwapUtility {
        old: powered(d_pp) + powered(d_qq),
        new: powered(d_pq) + powered(d_qp),
    }
}

fn powered(degree: usize) -> f64 {
    (degree as f64).powf(ALPHA)
}

/// Temperature-softened improvement test.
///
/// A zero `old` utility accepts any positive `new` and rejects `new == 0`.
pub fn accepts(old: f64, new: f64, temperature: f64) -> bool {
    if old <= 0.0 {
        return new > 0.0;
    }
    new / old.powf(1.0 / temperature) > 1.0
}

/// Best accepted partner for `node` among `candidates`.
///
/// Among accepted candidates the one with the highest new utility wins;
/// ties keep the earliest candidate. Candidates equal to `node` are
/// ignored. Returns `None` when nothing is accepted.
pub fn select_partner(
    graph: &Graph,
    node: NodeId,
    candidates: &[NodeId],
    temperature: f64,
) -> Option<NodeId> {
    let mut best: Option<(NodeId, f64)> = None;
    for &q in candidates.iter().filter(|&&q| q != node) {
        let utility = swap_utility(graph, node, q);
        if !accepts(utility.old, utility.new, temperature) {
            continue;
        }
        if best.is_none_or(|(_, u)| utility.new > u) {
            best = Some((q, utility.new));
        }
    }
    best.map(|(q, _)| q)
}
