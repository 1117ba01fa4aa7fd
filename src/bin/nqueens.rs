//! N-Queens solver CLI
//!
//! Runs several independent genetic searches for the same board size and
//! prints every solution found.
//!
//! Usage:
//!   nqueens --size 8
//!   nqueens                      # asks for the board size on stdin
//!   nqueens --size 10 --trials 3 --seed 42 -v

use std::io::{self, BufRead, Write};

use clap::{Parser, ValueEnum};
use nqueens_ga::{
    error::{GeneticError, Result, ResultExt},
    evolution::{
        Challenge, EvolutionOptions, EvolutionResult, GeneticAlgorithm, LogLevel, PairConflicts,
        RowConflicts,
    },
    rng::RandomNumberGenerator,
    selection::TournamentSelection,
    strategy::GenerationalStrategy,
};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Place N queens on an N×N board so that none attack each other.
#[derive(Parser, Debug)]
#[command(name = "nqueens")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Board size; prompted for on stdin when omitted
    #[arg(short, long)]
    size: Option<usize>,

    /// Boards per generation
    #[arg(short, long, default_value_t = 1000)]
    population: usize,

    /// Generation budget per trial
    #[arg(short, long, default_value_t = 10_000)]
    generations: usize,

    /// Initial crossover probability
    #[arg(long, default_value_t = 0.7)]
    crossover: f64,

    /// Initial mutation probability
    #[arg(long, default_value_t = 0.1)]
    mutation: f64,

    /// Boards drawn per tournament
    #[arg(long, default_value_t = 5)]
    tournament_size: usize,

    /// Keep crossover and mutation probabilities fixed
    #[arg(long)]
    no_decay: bool,

    /// Conflict measure used as fitness
    #[arg(long, value_enum, default_value_t = Fitness::Pairs)]
    fitness: Fitness,

    /// Number of independent searches
    #[arg(short, long, default_value_t = 10)]
    trials: usize,

    /// Seed for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Fitness {
    /// Count every attacking pair
    Pairs,
    /// Count rows that attack a later row
    Rows,
}

fn main() {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run(cli) {
        eprintln!("An error occurred: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let size = match cli.size {
        Some(size) => size,
        None => prompt_board_size()?,
    };

    let builder = EvolutionOptions::builder()
        .board_size(size)
        .population_size(cli.population)
        .num_generations(cli.generations)
        .crossover_probability(cli.crossover)
        .mutation_probability(cli.mutation)
        .tournament_size(cli.tournament_size)
        .log_level(match cli.verbose {
            0 | 1 => LogLevel::None,
            2 => LogLevel::Minimal,
            _ => LogLevel::Verbose,
        });
    let builder = if cli.no_decay {
        builder.constant_rates()
    } else {
        builder.decaying_rates()
    };
    let options = builder.build();

    let mut rng = match cli.seed {
        Some(seed) => RandomNumberGenerator::from_seed(seed),
        None => RandomNumberGenerator::new(),
    };

    match cli.fitness {
        Fitness::Pairs => run_trials(options, PairConflicts, cli.trials, &mut rng),
        Fitness::Rows => run_trials(options, RowConflicts, cli.trials, &mut rng),
    }
}

fn run_trials<C>(
    options: EvolutionOptions,
    challenge: C,
    trials: usize,
    rng: &mut RandomNumberGenerator,
) -> Result<()>
where
    C: Challenge,
{
    let selection = TournamentSelection::new(options.get_tournament_size())?;
    let ga = GeneticAlgorithm::with_parts(options, GenerationalStrategy::new(selection), challenge)?;

    let mut solved = 0;
    for trial in 1..=trials {
        info!(trial, "starting search");
        let result = ga.run(rng)?;
        report(trial, &result);
        if result.is_solved() {
            solved += 1;
        }
    }

    println!("Solved {} of {} trials", solved, trials);
    Ok(())
}

fn report(trial: usize, result: &EvolutionResult) {
    match result.solution() {
        Some(board) => {
            println!(
                "Trial {}: solution found after {} generations",
                trial, result.generations
            );
            print!("{}", board);
        }
        None => println!(
            "Trial {}: no solution within {} generations (best board has {} conflicts)",
            trial, result.generations, result.best_score
        ),
    }
    println!();
}

fn prompt_board_size() -> Result<usize> {
    print!("Enter your Queens Number: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Err(GeneticError::Configuration(
            "No board size given".to_string(),
        ));
    }

    line.trim()
        .parse::<usize>()
        .context("Board size must be a positive integer")
}
