//! Round-based simulation driver.

use rand::rngs::StdRng;
use rand::SeedableRng;

use super::annealing::AnnealingSchedule;
use super::config::JabejaConfig;
use super::selection::select_partner;
use crate::error::{JabejaError, Result};
use crate::graph::{Graph, NodeId};
use crate::report::{NullSink, ReportSink, RoundReport};
use crate::sampling::{local_sample, NodeSelectionPolicy};

/// Result of a Ja-be-Ja run.
#[derive(Debug, Clone, PartialEq)]
pub struct JabejaResult {
    /// Rounds executed.
    pub rounds: usize,

    /// Total color swaps performed.
    pub swaps: usize,

    /// Edge cut after the last round.
    pub edge_cut: usize,

    /// Migrated nodes after the last round.
    pub migrations: usize,

    /// Temperature after the last cooling step.
    pub final_temperature: f64,

    /// Number of temperature restarts.
    pub restarts: usize,

    /// Edge cut at the end of each round.
    pub edge_cut_history: Vec<usize>,
}

/// Where a [`Simulation`] is in its life cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No round has run yet.
    Idle,
    /// `next_round` rounds have completed and more remain.
    Running { next_round: usize },
    /// Every configured round has completed.
    Done,
}

/// One Ja-be-Ja run over a borrowed graph.
///
/// The graph is mutated in place. Nodes are visited in the graph's
/// creation order each round, and a swap is visible to every node
/// visited after it.
pub struct Simulation<'a> {
    graph: &'a mut Graph,
    config: &'a JabejaConfig,
    rng: StdRng,
    schedule: AnnealingSchedule,
    round: usize,
    swaps: usize,
}

impl<'a> Simulation<'a> {
    /// Prepares a run. Fails if the configuration is invalid.
    pub fn new(graph: &'a mut Graph, config: &'a JabejaConfig) -> Result<Self> {
        config.validate().map_err(JabejaError::InvalidConfig)?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        Ok(Self {
            graph,
            config,
            rng,
            schedule: AnnealingSchedule::new(config.temperature, config.delta),
            round: 0,
            swaps: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        if self.round >= self.config.rounds {
            Phase::Done
        } else if self.round == 0 {
            Phase::Idle
        } else {
            Phase::Running {
                next_round: self.round,
            }
        }
    }

    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    pub fn temperature(&self) -> f64 {
        self.schedule.temperature()
    }

    pub fn schedule(&self) -> &AnnealingSchedule {
        &self.schedule
    }

    /// Swaps performed so far.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Runs one full round: every node tries one swap, then the
    /// temperature cools and the round is measured.
    ///
    /// Returns `None` once all configured rounds have run.
    pub fn step_round(&mut self) -> Option<RoundReport> {
        if self.phase() == Phase::Done {
            return None;
        }

        for i in 0..self.graph.len() {
            let node = self.graph.node_ids()[i];
            self.sample_and_swap(node);
        }

        if self.schedule.cool() {
            tracing::debug!(
                round = self.round,
                temperature = self.schedule.temperature(),
                "temperature restarted"
            );
        }

        let report = RoundReport::measure(self.graph, self.round, self.swaps);
        tracing::info!(
            round = report.round,
            edge_cut = report.edge_cut,
            swaps = report.swaps,
            migrations = report.migrations,
            "round complete"
        );
        self.round += 1;
        Some(report)
    }

    /// Looks for a partner for `node` and swaps colors with it.
    ///
    /// Under [`NodeSelectionPolicy::Hybrid`] the neighbor sample is tried
    /// first and the global sample once if no neighbor was accepted.
    /// Returns the partner if a swap happened.
    pub fn sample_and_swap(&mut self, node: NodeId) -> Option<NodeId> {
        let temperature = self.schedule.temperature();
        let partner = match self.config.node_selection {
            NodeSelectionPolicy::Hybrid => self
                .local_partner(node, temperature)
                .or_else(|| self.global_partner(node, temperature)),
            NodeSelectionPolicy::Local => self.local_partner(node, temperature),
            NodeSelectionPolicy::Random => self.global_partner(node, temperature),
        }?;

        self.graph.swap_colors(node, partner);
        self.swaps += 1;
        tracing::trace!(node, partner, "swapped colors");
        Some(partner)
    }

    fn local_partner(&mut self, node: NodeId, temperature: f64) -> Option<NodeId> {
        let candidates = local_sample(
            self.graph,
            node,
            self.config.random_neighbor_sample_size,
            &mut self.rng,
        );
        select_partner(self.graph, node, &candidates, temperature)
    }

    fn global_partner(&mut self, node: NodeId, temperature: f64) -> Option<NodeId> {
        let candidates = self.config.sampling.sample(
            self.graph,
            node,
            self.config.uniform_random_sample_size,
            &mut self.rng,
        );
        select_partner(self.graph, node, &candidates, temperature)
    }

    fn into_result(self, edge_cut_history: Vec<usize>) -> JabejaResult {
        let last = RoundReport::measure(self.graph, self.round, self.swaps);
        JabejaResult {
            rounds: self.round,
            swaps: self.swaps,
            edge_cut: last.edge_cut,
            migrations: last.migrations,
            final_temperature: self.schedule.temperature(),
            restarts: self.schedule.restarts(),
            edge_cut_history,
        }
    }
}

/// Executes a complete Ja-be-Ja run.
pub struct JabejaRunner;

impl JabejaRunner {
    /// Runs every configured round without persisting reports.
    ///
    /// The edge cut series is still available in
    /// [`JabejaResult::edge_cut_history`].
    pub fn run(graph: &mut Graph, config: &JabejaConfig) -> Result<JabejaResult> {
        Self::run_with_sink(graph, config, &mut NullSink)
    }

    /// Runs every configured round, handing each report to `sink`.
    ///
    /// A sink failure aborts the run; the graph keeps the colors it had
    /// at that point.
    pub fn run_with_sink<S: ReportSink + ?Sized>(
        graph: &mut Graph,
        config: &JabejaConfig,
        sink: &mut S,
    ) -> Result<JabejaResult> {
        let mut sim = Simulation::new(graph, config)?;
        tracing::info!(
            nodes = sim.graph().len(),
            edges = sim.graph().edge_count(),
            rounds = config.rounds,
            temperature = config.temperature,
            delta = config.delta,
            policy = %config.node_selection,
            sampling = %config.sampling,
            "starting ja-be-ja"
        );

        let mut edge_cut_history = Vec::with_capacity(config.rounds);
        while let Some(report) = sim.step_round() {
            sink.record(&report)?;
            edge_cut_history.push(report.edge_cut);
        }
        sink.finish()?;

        let result = sim.into_result(edge_cut_history);
        tracing::info!(
            edge_cut = result.edge_cut,
            swaps = result.swaps,
            migrations = result.migrations,
            restarts = result.restarts,
            "finished ja-be-ja"
        );
        Ok(result)
    }
}
