//! Run configuration.

use crate::sampling::{NodeSelectionPolicy, SamplingPolicy};

/// Configuration for a Ja-be-Ja run.
///
/// Immutable once the run starts.
///
/// # Examples
///
/// ```
/// use jabeja::jabeja::JabejaConfig;
/// use jabeja::sampling::{NodeSelectionPolicy, SamplingPolicy};
///
/// let config = JabejaConfig::default()
///     .with_rounds(500)
///     .with_temperature(2.0)
///     .with_delta(0.003)
///     .with_node_selection(NodeSelectionPolicy::Hybrid)
///     .with_sampling(SamplingPolicy::ColorBiased)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct JabejaConfig {
    /// Number of rounds to run. Every round visits every node once.
    pub rounds: usize,

    /// Starting temperature, also the value restored on restart.
    pub temperature: f64,

    /// Geometric decay rate in `[0, 1)`. Zero disables cooling.
    pub delta: f64,

    /// Number of neighbors sampled for the local stage (k1).
    pub random_neighbor_sample_size: usize,

    /// Number of nodes sampled for the global stage (k2).
    pub uniform_random_sample_size: usize,

    /// Which candidate sets each node consults.
    pub node_selection: NodeSelectionPolicy,

    /// Generator used for the global stage.
    pub sampling: SamplingPolicy,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for JabejaConfig {
    fn default() -> Self {
        Self {
            rounds: 1000,
            temperature: 2.0,
            delta: 0.003,
            random_neighbor_sample_size: 3,
            uniform_random_sample_size: 6,
            node_selection: NodeSelectionPolicy::default(),
            sampling: SamplingPolicy::default(),
            seed: None,
        }
    }
}

impl JabejaConfig {
    pub fn with_rounds(mut self, n: usize) -> Self {
        self.rounds = n;
        self
    }

    pub fn with_temperature(mut self, t: f64) -> Self {
        self.temperature = t;
        self
    }

    pub fn with_delta(mut self, delta: f64) -> Self {
        self.delta = delta;
        self
    }

    pub fn with_random_neighbor_sample_size(mut self, k: usize) -> Self {
        self.random_neighbor_sample_size = k;
        self
    }

    pub fn with_uniform_random_sample_size(mut self, k: usize) -> Self {
        self.uniform_random_sample_size = k;
        self
    }

    pub fn with_node_selection(mut self, policy: NodeSelectionPolicy) -> Self {
        self.node_selection = policy;
        self
    }

    pub fn with_sampling(mut self, policy: SamplingPolicy) -> Self {
        self.sampling = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.rounds == 0 {
            return Err("rounds must be positive".into());
        }
        if !(self.temperature > 0.0 && self.temperature.is_finite()) {
            return Err(format!(
                "temperature must be positive and finite, got {}",
                self.temperature
            ));
        }
        if !(0.0..1.0).contains(&self.delta) {
            return Err(format!("delta must be in [0, 1), got {}", self.delta));
        }
        Ok(())
    }
}
