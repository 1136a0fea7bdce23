//! Per-round metrics and report sinks.
//!
//! After each round the driver measures the edge cut and the number of
//! migrated nodes and hands a [`RoundReport`] to a [`ReportSink`].

mod metrics;
mod sink;

pub use metrics::{cut_pairs, edge_cut, migrations};
#[cfg(feature = "serde")]
pub use sink::JsonlSink;
pub use sink::{
    output_file_name, MemorySink, NullSink, ReportSink, RoundReport, TsvFileSink,
};
