//! Command-line front end for Ja-be-Ja.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use jabeja::graph::{load_metis, InitColorPolicy};
use jabeja::jabeja::{JabejaConfig, JabejaRunner};
#[cfg(feature = "serde")]
use jabeja::report::JsonlSink;
use jabeja::report::{edge_cut, output_file_name, TsvFileSink};
use jabeja::sampling::{NodeSelectionPolicy, SamplingPolicy};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Tsv,
    Jsonl,
}

#[derive(Parser, Debug)]
#[command(version, about = "Ja-be-Ja graph partitioning", long_about = None)]
struct Args {
    /// Path of the METIS graph file
    graph: PathBuf,

    /// Directory receiving the per-round report
    #[arg(short, long, default_value = "output")]
    output_dir: PathBuf,

    /// Number of rounds
    #[arg(short, long, default_value_t = 1000)]
    rounds: usize,

    /// Starting temperature
    #[arg(short, long, default_value_t = 2.0)]
    temperature: f64,

    /// Cooling rate per round, in [0, 1)
    #[arg(short, long, default_value_t = 0.003)]
    delta: f64,

    /// Neighbors sampled in the local stage
    #[arg(long, default_value_t = 3)]
    rnss: usize,

    /// Nodes sampled in the global stage
    #[arg(long, default_value_t = 6)]
    urss: usize,

    /// Node selection policy: hybrid, local or random
    #[arg(long, default_value = "hybrid")]
    node_selection: NodeSelectionPolicy,

    /// Global sampling policy: uniform or biased
    #[arg(long, default_value = "uniform")]
    sampling: SamplingPolicy,

    /// Initial color policy: round-robin, random or batch
    #[arg(long, default_value = "round-robin")]
    init_color: InitColorPolicy,

    /// Number of partitions (colors)
    #[arg(short = 'k', long, default_value_t = 4)]
    partitions: usize,

    /// Random seed
    #[arg(short, long)]
    seed: Option<u64>,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let mut config = JabejaConfig::default()
        .with_rounds(args.rounds)
        .with_temperature(args.temperature)
        .with_delta(args.delta)
        .with_random_neighbor_sample_size(args.rnss)
        .with_uniform_random_sample_size(args.urss)
        .with_node_selection(args.node_selection)
        .with_sampling(args.sampling);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    config.validate()?;

    let mut graph = load_metis(&args.graph)?;
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };
    args.init_color
        .apply(&mut graph, args.partitions, &mut rng)?;
    info!(
        graph = %args.graph.display(),
        nodes = graph.len(),
        edges = graph.edge_count(),
        initial_edge_cut = edge_cut(&graph),
        "graph loaded"
    );

    let result = match args.format {
        OutputFormat::Tsv => {
            let mut sink =
                TsvFileSink::for_run(&args.output_dir, &args.graph, &config, args.init_color);
            info!(path = %sink.path().display(), "writing report");
            JabejaRunner::run_with_sink(&mut graph, &config, &mut sink)?
        }
        #[cfg(feature = "serde")]
        OutputFormat::Jsonl => {
            let name = output_file_name(&args.graph, &config, args.init_color);
            let path = args.output_dir.join(name).with_extension("jsonl");
            info!(path = %path.display(), "writing report");
            let mut sink = JsonlSink::create(&path)?;
            JabejaRunner::run_with_sink(&mut graph, &config, &mut sink)?
        }
        #[cfg(not(feature = "serde"))]
        OutputFormat::Jsonl => {
            let name = output_file_name(&args.graph, &config, args.init_color);
            return Err(format!("jsonl output for {name} needs the `serde` feature").into());
        }
    };

    println!("Edge cut {}", result.edge_cut);
    println!("Swaps {}", result.swaps);
    println!("Migrations {}", result.migrations);
    println!("Restarts {}", result.restarts);
    Ok(())
}
