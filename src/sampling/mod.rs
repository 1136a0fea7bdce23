//! Candidate partner generation.
//!
//! Three samplers produce the candidate sets that partner selection
//! scores:
//!
//! - [`local_sample`]: a random subset of the node's own neighbors.
//! - [`uniform_sample`]: a uniform subset of the whole population,
//!   standing in for a peer-sampling service.
//! - [`color_biased_sample`]: a 70/30 mix of same-color and other-color
//!   nodes.
//!
//! All samplers return distinct ids, never include the requesting node,
//! and terminate even when fewer eligible nodes exist than requested.

mod policy;
mod sampler;

pub use policy::{NodeSelectionPolicy, SamplingPolicy};
pub use sampler::{color_biased_sample, local_sample, uniform_sample, SAME_COLOR_PERCENT};
