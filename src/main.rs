//! Word Ladder - CLI
//!
//! Builds a word graph from a dictionary and answers shortest-ladder queries,
//! interactively or one at a time.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use word_ladder::{
    commands::{build_graph, find_words, graph_report, run_benchmark, run_simple, sample_pairs},
    config::LadderConfig,
    core::WordStore,
    output::{print_benchmark_result, print_find_result, print_graph_report},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Find the shortest word ladder between two words",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'builtin' (default, bundled demo list) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "builtin")]
    dictionary: String,

    /// Rules to apply, in order: substitute, insert, swap
    #[arg(
        short,
        long,
        global = true,
        value_delimiter = ',',
        default_value = "substitute,insert,swap"
    )]
    rules: Vec<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Line-oriented interactive mode (default)
    Simple,

    /// Interactive TUI mode
    Play,

    /// Find a single ladder
    Find {
        /// Word to start from
        start: String,

        /// Word to reach
        end: String,
    },

    /// Show how the graph was built and its shape
    Stats,

    /// Time random ladder queries
    Benchmark {
        /// Number of random word pairs to query
        #[arg(short = 'n', long, default_value = "1000")]
        count: usize,

        /// Seed for choosing word pairs
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = LadderConfig::from_args(&cli.dictionary, &cli.rules)?;
    let build = build_graph(&config)?;

    // Default to the line-oriented loop if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => run_simple(&build.store).map_err(Into::into),
        Commands::Play => run_play_command(&build.store),
        Commands::Find { start, end } => {
            print_find_result(&find_words(&build.store, &start, &end)?);
            Ok(())
        }
        Commands::Stats => {
            print_graph_report(&graph_report(&build));
            Ok(())
        }
        Commands::Benchmark { count, seed } => {
            run_benchmark_command(&build.store, count, seed);
            Ok(())
        }
    }
}

fn run_benchmark_command(store: &WordStore, count: usize, seed: u64) {
    println!("Running {count} random ladder queries (seed {seed})...");

    let pairs = sample_pairs(store, count, seed);
    let result = run_benchmark(store, &pairs, true);
    print_benchmark_result(&result);
}

fn run_play_command(store: &WordStore) -> Result<()> {
    use word_ladder::interactive::{App, run_tui};

    let app = App::new(store);
    run_tui(app)
}
