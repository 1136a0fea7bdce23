//! Sampling policy selectors.

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use super::sampler::{color_biased_sample, uniform_sample};
use crate::graph::{Graph, NodeId};

/// Which candidate sets a node consults when looking for a partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NodeSelectionPolicy {
    /// Neighbors first, then one global sample if no neighbor is accepted.
    #[default]
    Hybrid,
    /// Neighbors only.
    Local,
    /// Global sample only.
    Random,
}

/// Generator used for the global (non-neighbor) candidate set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SamplingPolicy {
    /// Uniform over the whole population.
    #[default]
    Uniform,
    /// Biased towards the requester's own color.
    ColorBiased,
}

impl SamplingPolicy {
    /// Draws a global candidate set of at most `k` ids for `node`.
    pub fn sample<R: Rng>(&self, graph: &Graph, node: NodeId, k: usize, rng: &mut R) -> Vec<NodeId> {
        match self {
            SamplingPolicy::Uniform => uniform_sample(graph, node, k, rng),
            SamplingPolicy::ColorBiased => {
                color_biased_sample(graph, node, graph.color_of(node), k, rng)
            }
        }
    }
}

impl fmt::Display for NodeSelectionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            NodeSelectionPolicy::Hybrid => "HYBRID",
            NodeSelectionPolicy::Local => "LOCAL",
            NodeSelectionPolicy::Random => "RANDOM",
        })
    }
}

impl FromStr for NodeSelectionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hybrid" => Ok(NodeSelectionPolicy::Hybrid),
            "local" => Ok(NodeSelectionPolicy::Local),
            "random" => Ok(NodeSelectionPolicy::Random),
            other => Err(format!("unknown node selection policy {other:?}")),
        }
    }
}

impl fmt::Display for SamplingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SamplingPolicy::Uniform => "UNIFORM",
            SamplingPolicy::ColorBiased => "BIASED",
        })
    }
}

impl FromStr for SamplingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "uniform" => Ok(SamplingPolicy::Uniform),
            "biased" | "color_biased" => Ok(SamplingPolicy::ColorBiased),
            other => Err(format!("unknown sampling policy {other:?}")),
        }
    }
}
