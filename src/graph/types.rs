//! Node and graph representation.

use std::collections::HashMap;

use crate::error::{JabejaError, Result};

/// Identifier of a node. Unique within a graph and immutable.
pub type NodeId = usize;

/// Partition label carried by a node.
pub type Color = usize;

/// A graph vertex with its color state and adjacency.
///
/// The neighbor list keeps duplicates: a node listed twice counts twice
/// towards every degree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    color: Color,
    initial_color: Color,
    neighbors: Vec<NodeId>,
}

impl Node {
    /// Creates a node whose current and initial color are both `color`.
    pub fn new(id: NodeId, color: Color, neighbors: Vec<NodeId>) -> Self {
        Self {
            id,
            color,
            initial_color: color,
            neighbors,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Color assigned at construction, used to count migrations.
    pub fn initial_color(&self) -> Color {
        self.initial_color
    }

    pub fn neighbors(&self) -> &[NodeId] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    /// Whether the node currently holds a color other than its initial one.
    pub fn has_migrated(&self) -> bool {
        self.color != self.initial_color
    }

    /// Resets both current and initial color.
    pub(crate) fn assign_initial_color(&mut self, color: Color) {
        self.color = color;
        self.initial_color = color;
    }
}

/// Node storage in creation order with an id index.
///
/// Every neighbor id referenced by a node is guaranteed to exist in the
/// graph; [`Graph::from_nodes`] rejects anything else.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
    ids: Vec<NodeId>,
    index: HashMap<NodeId, usize>,
}

impl Graph {
    /// Builds a graph, checking id uniqueness and neighbor references.
    pub fn from_nodes(nodes: Vec<Node>) -> Result<Self> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (pos, node) in nodes.iter().enumerate() {
            if index.insert(node.id, pos).is_some() {
                return Err(JabejaError::DuplicateNode(node.id));
            }
        }
        for node in &nodes {
            if let Some(&missing) = node.neighbors.iter().find(|n| !index.contains_key(n)) {
                return Err(JabejaError::DanglingNeighbor {
                    node: node.id,
                    neighbor: missing,
                });
            }
        }
        let ids = nodes.iter().map(|n| n.id).collect();
        Ok(Self { nodes, ids, index })
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All node ids in creation order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.ids
    }

    /// All nodes in creation order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.index.contains_key(&id)
    }

    /// Position of `id` in creation order.
    pub fn index_of(&self, id: NodeId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// Looks up a node without panicking.
    pub fn try_node(&self, id: NodeId) -> Option<&Node> {
        self.index.get(&id).map(|&pos| &self.nodes[pos])
    }

    /// Looks up a node.
    ///
    /// # Panics
    /// Panics if `id` is not in the graph. Ids handed around during a run
    /// all come from the graph itself, so a miss is a logic error.
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[self.position(id)]
    }

    pub fn color_of(&self, id: NodeId) -> Color {
        self.node(id).color
    }

    pub fn set_color(&mut self, id: NodeId, color: Color) {
        let pos = self.position(id);
        self.nodes[pos].color = color;
    }

    pub fn neighbors_of(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).neighbors
    }

    /// Number of neighbors of `id` currently holding `color`.
    ///
    /// Recomputed on every call; there is no per-color degree cache.
    pub fn degree_by_color(&self, id: NodeId, color: Color) -> usize {
        self.neighbors_of(id)
            .iter()
            .filter(|&&n| self.color_of(n) == color)
            .count()
    }

    /// Exchanges the colors of `p` and `q`.
    pub fn swap_colors(&mut self, p: NodeId, q: NodeId) {
        let (pp, qp) = (self.position(p), self.position(q));
        let (pc, qc) = (self.nodes[pp].color, self.nodes[qp].color);
        self.nodes[pp].color = qc;
        self.nodes[qp].color = pc;
    }

    /// Number of undirected edges, counting each adjacency entry once
    /// from each endpoint.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    /// Current color of every node, in creation order.
    pub fn colors(&self) -> Vec<Color> {
        self.nodes.iter().map(|n| n.color).collect()
    }

    fn position(&self, id: NodeId) -> usize {
        match self.index.get(&id) {
            Some(&pos) => pos,
            None => panic!("unknown node id {id}"),
        }
    }
}
