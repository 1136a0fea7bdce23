//! Initial color assignment.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::types::Graph;
use crate::error::{JabejaError, Result};

/// How colors are handed out before the first round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InitColorPolicy {
    /// Node at position `i` gets color `i % k`.
    #[default]
    RoundRobin,
    /// Uniform random color per node.
    Random,
    /// Contiguous blocks of `ceil(n / k)` nodes share a color.
    Batch,
}

impl InitColorPolicy {
    /// Colors every node of `graph` with one of `partitions` colors.
    ///
    /// Sets both the current and the initial color, so migrations are
    /// counted from this assignment.
    pub fn apply<R: Rng>(&self, graph: &mut Graph, partitions: usize, rng: &mut R) -> Result<()> {
        if partitions == 0 {
            return Err(JabejaError::InvalidConfig(
                "number of partitions must be at least 1".into(),
            ));
        }
        let block = graph.len().div_ceil(partitions).max(1);
        for (i, node) in graph.nodes_mut().iter_mut().enumerate() {
            let color = match self {
                InitColorPolicy::RoundRobin => i % partitions,
                InitColorPolicy::Random => rng.random_range(0..partitions),
                InitColorPolicy::Batch => i / block,
            };
            node.assign_initial_color(color);
        }
        Ok(())
    }
}

impl fmt::Display for InitColorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            InitColorPolicy::RoundRobin => "ROUND_ROBIN",
            InitColorPolicy::Random => "RANDOM",
            InitColorPolicy::Batch => "BATCH",
        })
    }
}

impl FromStr for InitColorPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "round_robin" => Ok(InitColorPolicy::RoundRobin),
            "random" => Ok(InitColorPolicy::Random),
            "batch" => Ok(InitColorPolicy::Batch),
            other => Err(format!("unknown initial color policy {other:?}")),
        }
    }
}
