use random_path::{
    markers::{scatter_markers, CsvMarkerSink},
    random::RngSource,
    GenerationParameters, PathGenerator, Quality,
};

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

extern crate nalgebra as na;
use na::Vector2;

use anyhow::Context;
use clap::Parser;
use tracing::info;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// YAML file with generation parameters
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of decisions, overrides the config file
    #[arg(short, long)]
    decisions: Option<usize>,
    /// Anchor x position
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start_x: f64,
    /// Anchor z position, becomes the second path coordinate
    #[arg(long, default_value_t = 0.0, allow_negative_numbers = true)]
    start_z: f64,
    /// Starting heading in degrees
    #[arg(short = 'a', long, default_value_t = 0.0, allow_negative_numbers = true)]
    start_angle: f64,
    /// Path quality: low, medium, high or a custom divisor
    #[arg(short, long)]
    quality: Option<Quality>,
    /// Seed for reproducible paths
    #[arg(long)]
    seed: Option<u64>,
    /// Parameter step between two markers
    #[arg(long, default_value_t = 0.001)]
    step: f64,
    /// Output CSV file with one marker per row
    #[arg(short, long, default_value = "random_path.csv")]
    output: PathBuf,
}

fn load_params(path: &std::path::Path) -> anyhow::Result<GenerationParameters> {
    let f = File::open(path).with_context(|| format!("could not open {}", path.display()))?;
    let params = serde_yaml::from_reader(f)
        .with_context(|| format!("could not parse {}", path.display()))?;
    Ok(params)
}

fn main() -> anyhow::Result<()> {
    // Default: WARN for everything, INFO for random_path.
    // Override with RUST_LOG (e.g. RUST_LOG=random_path=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("random_path=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let args = Args::parse();

    let mut params = match &args.config {
        Some(path) => load_params(path)?,
        None => GenerationParameters::default(),
    };
    if let Some(decisions) = args.decisions {
        params.number_of_decisions = decisions;
    }
    if let Some(quality) = args.quality {
        params.quality = quality;
    }
    info!("Generation parameters: {:?}", params);

    let mut rng = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let start = Vector2::new(args.start_x, args.start_z);
    let number_of_decisions = params.number_of_decisions;
    let generator = PathGenerator::new(params);
    let path = generator.generate(start, number_of_decisions, args.start_angle, &mut rng);
    info!(
        "Generated {} points over {} decisions, length {:.3}",
        path.len(),
        path.decisions().len(),
        path.length()
    );

    let f = File::create(&args.output)
        .with_context(|| format!("could not create {}", args.output.display()))?;
    let mut sink = CsvMarkerSink::new(BufWriter::new(f))?;
    let placed = scatter_markers(&path, args.step, &mut sink)?;
    sink.flush()?;

    info!("Wrote {} markers to {}", placed, args.output.display());
    Ok(())
}
