//! Graph model for Ja-be-Ja.
//!
//! A static, undirected graph whose nodes carry a mutable color (partition
//! label). Topology is fixed after construction; only colors change while
//! the simulation runs.
//!
//! Graphs are usually read from METIS adjacency files with
//! [`load_metis`] and then colored with an [`InitColorPolicy`].

mod coloring;
mod loader;
mod types;

pub use coloring::InitColorPolicy;
pub use loader::{load_metis, parse_metis};
pub use types::{Color, Graph, Node, NodeId};
