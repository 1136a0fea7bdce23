//! Report records and their destinations.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use super::metrics::{edge_cut, migrations};
use crate::error::Result;
use crate::graph::{Graph, InitColorPolicy};
use crate::jabeja::{JabejaConfig, ALPHA};

const DELIMITER: &str = "\t\t";

/// Metrics for one completed round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoundReport {
    /// Zero-based round index.
    pub round: usize,
    /// Edges whose endpoints hold different colors.
    pub edge_cut: usize,
    /// Swaps performed since the run started.
    pub swaps: usize,
    /// Nodes whose color differs from their initial color.
    pub migrations: usize,
}

impl RoundReport {
    /// Measures `graph` after round `round`.
    pub fn measure(graph: &Graph, round: usize, swaps: usize) -> Self {
        Self {
            round,
            edge_cut: edge_cut(graph),
            swaps,
            migrations: migrations(graph),
        }
    }
}

/// Destination for per-round reports.
///
/// The driver calls [`record`](ReportSink::record) once per completed
/// round, in round order, and [`finish`](ReportSink::finish) once after
/// the last round. An error from either ends the run.
pub trait ReportSink {
    fn record(&mut self, report: &RoundReport) -> Result<()>;

    fn finish(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Keeps every report in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    reports: Vec<RoundReport>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> &[RoundReport] {
        &self.reports
    }

    pub fn into_reports(self) -> Vec<RoundReport> {
        self.reports
    }
}

impl ReportSink for MemorySink {
    fn record(&mut self, report: &RoundReport) -> Result<()> {
        self.reports.push(*report);
        Ok(())
    }
}

/// Drops every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn record(&mut self, _report: &RoundReport) -> Result<()> {
        Ok(())
    }
}

/// Result file name for a run, encoding its parameters.
pub fn output_file_name(graph_path: &Path, config: &JabejaConfig, init: InitColorPolicy) -> String {
    let graph_name = graph_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "graph".to_string());
    format!(
        "{}_NS_{}_SP_{}_GICP_{}_T_{:?}_D_{:?}_RNSS_{}_URSS_{}_A_{:?}_R_{}.txt",
        graph_name,
        config.node_selection,
        config.sampling,
        init,
        config.temperature,
        config.delta,
        config.random_neighbor_sample_size,
        config.uniform_random_sample_size,
        ALPHA,
        config.rounds,
    )
}

/// Appends reports to a double-tab separated text file.
///
/// The file, and its directory if missing, is created with a header on
/// the first record. Each row is flushed as it is written.
#[derive(Debug)]
pub struct TsvFileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl TsvFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            writer: None,
        }
    }

    /// Sink in `output_dir` named after the run, see [`output_file_name`].
    pub fn for_run(
        output_dir: impl AsRef<Path>,
        graph_path: &Path,
        config: &JabejaConfig,
        init: InitColorPolicy,
    ) -> Self {
        Self::new(
            output_dir
                .as_ref()
                .join(output_file_name(graph_path, config, init)),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open(&mut self) -> Result<&mut BufWriter<File>> {
        let writer = match self.writer.take() {
            Some(writer) => writer,
            None => {
                if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
                    fs::create_dir_all(dir)?;
                }
                let mut writer = BufWriter::new(File::create(&self.path)?);
                writeln!(writer, "# Migration is number of nodes that have changed color.")?;
                writeln!(writer)?;
                writeln!(
                    writer,
                    "{}",
                    ["Round", "Edge-Cut", "Swaps", "Migrations"].join(DELIMITER)
                )?;
                writer
            }
        };
        Ok(self.writer.insert(writer))
    }
}

impl ReportSink for TsvFileSink {
    fn record(&mut self, report: &RoundReport) -> Result<()> {
        let writer = self.open()?;
        writeln!(
            writer,
            "{}{DELIMITER}{}{DELIMITER}{}{DELIMITER}{}",
            report.round, report.edge_cut, report.swaps, report.migrations
        )?;
        writer.flush()?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(writer) = self.writer.as_mut() {
            writer.flush()?;
        }
        Ok(())
    }
}

/// Writes one JSON object per report.
#[cfg(feature = "serde")]
#[derive(Debug)]
pub struct JsonlSink<W: Write> {
    writer: W,
}

#[cfg(feature = "serde")]
impl<W: Write> JsonlSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(feature = "serde")]
impl JsonlSink<BufWriter<File>> {
    /// Creates (or truncates) `path`, making its directory if needed.
    pub fn create(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

#[cfg(feature = "serde")]
impl<W: Write> ReportSink for JsonlSink<W> {
    fn record(&mut self, report: &RoundReport) -> Result<()> {
        serde_json::to_writer(&mut self.writer, report)?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
