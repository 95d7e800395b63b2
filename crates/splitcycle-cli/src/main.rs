//! SplitCycle CLI - determine election winners from ranked ballots.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use splitcycle_ballots::{impartial_culture, spatial};
use splitcycle_core::{BallotSet, Election, ElectionConfig, SearchStrategy};

#[derive(Parser)]
#[command(name = "splitcycle")]
#[command(about = "SplitCycle - majority-cycle-aware election winners")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run an election from a ballots file
    Run {
        /// JSON file holding an array of rank rows (one per voter)
        ballots: PathBuf,
        /// Comma-separated candidate names (defaults to indices)
        #[arg(short, long)]
        names: Option<String>,
        /// Use breadth-first search instead of depth-first
        #[arg(long)]
        bfs: bool,
        /// Worker count (defaults to available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,
    },
    /// Simulate an election over synthetic ballots
    Simulate {
        /// Number of voters
        #[arg(short, long, default_value_t = 100)]
        voters: usize,
        /// Number of candidates
        #[arg(short, long, default_value_t = 5)]
        candidates: usize,
        /// Ballot model
        #[arg(short, long, value_enum, default_value_t = Model::Ic)]
        model: Model,
        /// Dimensionality of the spatial model
        #[arg(short, long, default_value_t = 2)]
        dimensions: usize,
        /// RNG seed (random when omitted)
        #[arg(short, long)]
        seed: Option<u64>,
        /// Use breadth-first search instead of depth-first
        #[arg(long)]
        bfs: bool,
        /// Worker count (defaults to available parallelism)
        #[arg(short, long)]
        workers: Option<usize>,
    },
}

/// Synthetic ballot model.
#[derive(Clone, Copy, ValueEnum)]
enum Model {
    /// Impartial culture, strict rankings
    Ic,
    /// Impartial culture with ties
    IcTies,
    /// Euclidean spatial model
    Spatial,
}

fn config(bfs: bool, workers: Option<usize>) -> ElectionConfig {
    let strategy = if bfs {
        SearchStrategy::BreadthFirst
    } else {
        SearchStrategy::DepthFirst
    };
    let config = ElectionConfig::new().with_strategy(strategy);
    match workers {
        Some(workers) => config.with_workers(workers),
        None => config,
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            ballots,
            names,
            bfs,
            workers,
        } => {
            let rows: Vec<Vec<i32>> = serde_json::from_str(&std::fs::read_to_string(&ballots)?)?;
            let ballots = BallotSet::new(rows)?;
            let names: Vec<String> = match names {
                Some(names) => names.split(',').map(str::to_string).collect(),
                None => (0..ballots.candidate_count()).map(|i| i.to_string()).collect(),
            };
            let winners = Election::new(config(bfs, workers)).elect(&ballots, &names)?;
            println!("Winners: {}", winners.join(", "));
        }
        Commands::Simulate {
            voters,
            candidates,
            model,
            dimensions,
            seed,
            bfs,
            workers,
        } => {
            let seed = seed.unwrap_or_else(rand::random);
            let mut rng = StdRng::seed_from_u64(seed);
            let ballots = match model {
                Model::Ic => impartial_culture(&mut rng, voters, candidates, false)?,
                Model::IcTies => impartial_culture(&mut rng, voters, candidates, true)?,
                Model::Spatial => spatial(&mut rng, voters, candidates, dimensions)?,
            };
            let names: Vec<String> = (0..candidates).map(|i| i.to_string()).collect();
            let winners = Election::new(config(bfs, workers)).elect(&ballots, &names)?;
            println!(
                "Seed {}: {} voters, {} candidates -> winners: {}",
                seed,
                voters,
                candidates,
                winners.join(", ")
            );
        }
    }

    Ok(())
}
