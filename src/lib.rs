//! Ja-be-Ja graph partitioning.
//!
//! Simulates the decentralized Ja-be-Ja heuristic on a single process:
//! every node holds a color, and nodes repeatedly swap colors with a
//! partner to reduce the number of edges between colors, accepting
//! swaps through a simulated-annealing rule.
//!
//! - **Graph**: nodes, colors and adjacency; METIS loading and initial
//!   color policies.
//! - **Sampling**: local-neighbor, uniform-random and color-biased
//!   candidate generators.
//! - **Ja-be-Ja**: partner selection, the annealing schedule and the
//!   round-based driver.
//! - **Report**: edge cut and migration metrics with pluggable sinks.
//!
//! # Example
//!
//! ```
//! use jabeja::graph::{Graph, Node};
//! use jabeja::jabeja::{JabejaConfig, JabejaRunner};
//!
//! let mut graph = Graph::from_nodes(vec![
//!     Node::new(0, 0, vec![1, 3]),
//!     Node::new(1, 0, vec![0, 2]),
//!     Node::new(2, 1, vec![1, 3]),
//!     Node::new(3, 1, vec![2, 0]),
//! ])
//! .unwrap();
//!
//! let config = JabejaConfig::default().with_rounds(10).with_seed(42);
//! let result = JabejaRunner::run(&mut graph, &config).unwrap();
//! assert_eq!(result.edge_cut_history.len(), 10);
//! ```

pub mod error;
pub mod graph;
pub mod jabeja;
pub mod report;
pub mod sampling;

pub use error::{JabejaError, Result};
