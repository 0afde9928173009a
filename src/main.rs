use std::path::PathBuf;

use clap::{Parser, Subcommand};
use log::info;

use searchbench::bench::{BenchmarkSuite, PreprocessingAnalyzer};
use searchbench::check::{run_scenarios, verify_store};
use searchbench::config::BenchConfig;
use searchbench::data::{DatasetGenerator, DatasetStore};
use searchbench::error::user_friendly_message;
use searchbench::util::units::format_count;
use searchbench::Result;

/// Search algorithm assignment: datasets, correctness checks and benchmarks
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Directory holding the dataset and test-case files
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Seed for dataset generation and target shuffling
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Configuration file (defaults to the user config directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Do not draw progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the four datasets and their test cases
    Generate,
    /// Run the correctness checks
    Check,
    /// Benchmark every algorithm on every dataset
    Bench {
        /// Also write the run as JSON
        #[arg(long)]
        json: Option<PathBuf>,
    },
    /// Find when sorting pays off compared to linear search
    Analyze,
    /// Check, benchmark and analyze, generating datasets if missing
    All,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .init();

    let args = Args::parse();
    if let Err(err) = run(args) {
        eprintln!("Error: {}", err);
        eprintln!("{}", user_friendly_message(&err));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = resolve_config(&args)?;
    info!("using data directory {}", config.data_dir.display());

    match args.command.unwrap_or(Command::All) {
        Command::Generate => generate(&config),
        Command::Check => check(&config),
        Command::Bench { json } => bench(&config, json),
        Command::Analyze => analyze(&config),
        Command::All => {
            let store = DatasetStore::new(config.data_dir.clone());
            if !store.is_complete() {
                generate(&config)?;
            }
            check(&config)?;
            bench(&config, None)?;
            analyze(&config)
        }
    }
}

fn resolve_config(args: &Args) -> Result<BenchConfig> {
    let mut config = match &args.config {
        Some(path) => BenchConfig::load_from(path)?,
        None => BenchConfig::load()?,
    };
    if let Some(dir) = &args.data_dir {
        config = config.with_data_dir(dir.clone());
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }
    if args.no_progress {
        config = config.with_progress(false);
    }
    config.validate()?;
    Ok(config)
}

fn banner(title: &str) {
    println!("{}", "=".repeat(70));
    println!("{}", title);
    println!("{}\n", "=".repeat(70));
}

fn generate(config: &BenchConfig) -> Result<()> {
    let mut generator = DatasetGenerator::new(config.seed);
    println!("Generating search datasets (seed {})...\n", generator.seed());
    let store = DatasetStore::new(config.data_dir.clone());
    let summary = generator.generate_all(&store)?;

    for (spec, path) in &summary.datasets {
        println!("Dataset: {}", spec.description);
        println!("  Scenario: {}", spec.scenario);
        println!("  Size: {} entries", format_count(spec.size as u64));
        println!("  Stored: {}", if spec.sorted { "sorted" } else { "unsorted" });
        println!("  ✓ Generated: {}\n", path.display());
    }
    println!("✓ Test cases generated: {}\n", summary.test_cases.display());
    Ok(())
}

fn check(config: &BenchConfig) -> Result<()> {
    banner("TESTING SEARCH CORRECTNESS");
    for outcome in run_scenarios() {
        println!("{}\n", outcome.render());
    }

    let store = DatasetStore::new(config.data_dir.clone());
    if store.is_complete() {
        println!("Dataset agreement:");
        for report in verify_store(&store)? {
            println!("  {}", report.render());
        }
        println!();
    }
    Ok(())
}

fn bench(config: &BenchConfig, json: Option<PathBuf>) -> Result<()> {
    banner("BENCHMARKING SEARCH ALGORITHMS");
    let run = BenchmarkSuite::new(config.clone())?.run()?;
    for report in &run.reports {
        println!("{}\n", report.render());
    }
    println!("{}\n", run.summary());

    if let Some(path) = json {
        run.save_json(&path)?;
        println!("Report written to {}\n", path.display());
    }
    Ok(())
}

fn analyze(config: &BenchConfig) -> Result<()> {
    banner("PREPROCESSING COST ANALYSIS");
    let analysis = PreprocessingAnalyzer::new(config.clone())?.run()?;
    println!("{}\n", analysis.render());
    Ok(())
}
