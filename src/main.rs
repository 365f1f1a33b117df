use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::info;
use tracing_subscriber::filter::LevelFilter;

use jugsearch::domain::Problem;
use jugsearch::domain::water_jug::{JugAction, JugState, WaterJug};
use jugsearch::search::{BreadthFirstSearch, IterativeDeepeningSearch, Search, SearchLimits,
                        SearchOutcome, SearchStats};
use jugsearch::trace::render_outcome;

#[derive(Parser)]
#[command(name = "jugsearch")]
#[command(version, about = "Shortest solutions to two-jug puzzles by uninformed search", long_about = None)]
struct Cli {
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve one puzzle and print the step table (the default)
    Solve(SolveArgs),

    /// Solve randomly generated puzzles and report aggregate statistics
    Bench(BenchArgs),
}

#[derive(Args)]
struct SolveArgs {
    /// Start from a registered puzzle; explicit options below override it
    #[arg(long)]
    puzzle: Option<String>,

    #[arg(long)]
    capacity_a: Option<u32>,

    #[arg(long)]
    capacity_b: Option<u32>,

    /// Amount wanted in jug A
    #[arg(long)]
    target: Option<u32>,

    /// Initial amounts, e.g. "(0, 0)"
    #[arg(long, default_value = "(0, 0)")]
    initial: String,

    #[arg(long, value_enum, default_value_t = Strategy::Bfs)]
    strategy: Strategy,

    #[command(flatten)]
    limits: LimitArgs,
}

impl Default for SolveArgs {
    fn default() -> SolveArgs {
        SolveArgs {
            puzzle: None,
            capacity_a: None,
            capacity_b: None,
            target: None,
            initial: String::from("(0, 0)"),
            strategy: Strategy::Bfs,
            limits: LimitArgs::default(),
        }
    }
}

#[derive(Args)]
struct BenchArgs {
    #[arg(long, default_value_t = 100)]
    problems: u64,

    #[arg(long, default_value_t = 12)]
    max_capacity: u32,

    #[arg(long, value_enum, default_value_t = Strategy::Bfs)]
    strategy: Strategy,

    #[command(flatten)]
    limits: LimitArgs,
}

#[derive(Args, Default)]
struct LimitArgs {
    /// Stop after expanding this many nodes
    #[arg(long)]
    max_expansions: Option<usize>,

    /// Never generate nodes deeper than this
    #[arg(long)]
    max_depth: Option<usize>,
}

impl From<&LimitArgs> for SearchLimits {
    fn from(args: &LimitArgs) -> SearchLimits {
        SearchLimits { max_expansions: args.max_expansions, max_depth: args.max_depth }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Strategy {
    Bfs,
    Iddfs,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> LevelFilter {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE,
        }
    }
}

fn run_strategy(strategy: Strategy, limits: SearchLimits, d: &WaterJug)
                -> (SearchOutcome<JugState, JugAction>, SearchStats) {
    match strategy {
        Strategy::Bfs => {
            let mut engine = BreadthFirstSearch::new(limits);
            let outcome = engine.search(d);
            (outcome, *engine.stats())
        },
        Strategy::Iddfs => {
            let mut engine = IterativeDeepeningSearch::new(limits);
            let outcome = engine.search(d);
            (outcome, *engine.stats())
        },
    }
}

fn build_problem(args: &SolveArgs) -> Result<WaterJug> {
    let base = match &args.puzzle {
        Some(name) => (*jugsearch::puzzle(name)?).clone(),
        None => (*jugsearch::puzzle(jugsearch::DEFAULT_PUZZLE)?).clone(),
    };

    let initial = JugState::from_str(&args.initial)
        .with_context(|| format!("invalid --initial value '{}'", args.initial))?;

    let d = WaterJug::new(args.capacity_a.unwrap_or(base.capacity_a()),
                          args.capacity_b.unwrap_or(base.capacity_b()),
                          args.target.unwrap_or(base.target()));

    Ok(d.with_initial(initial)?)
}

fn solve(args: SolveArgs) -> Result<()> {
    let d = build_problem(&args)?;
    let limits = SearchLimits::from(&args.limits);

    println!("Searching for a solution...\n");

    let (outcome, stats) = run_strategy(args.strategy, limits, &d);
    info!(expanded = stats.expanded, generated = stats.generated, revisits = stats.revisits,
          max_frontier = stats.max_frontier, "search finished");

    let (ja, jb) = d.jug_names();
    println!("{}", render_outcome(&d, &outcome, &format!("Current State ({}, {})", ja, jb)));

    Ok(())
}

fn bench(args: BenchArgs) -> Result<()> {
    let limits = SearchLimits::from(&args.limits);

    let mut n_solved: u64 = 0;
    let mut n_exhausted: u64 = 0;
    let mut n_bounded: u64 = 0;
    let mut branching_factor: f64 = 0.0;
    let mut solution_depth: f64 = 0.0;
    let mut expansions: f64 = 0.0;

    println!("Benchmarking {} problems with capacities up to {}...", args.problems, args.max_capacity);

    for seed in 0..args.problems {
        let d = WaterJug::generate(seed, args.max_capacity);
        branching_factor += d.actions(&d.initial_state()).len() as f64;

        let (outcome, stats) = run_strategy(args.strategy, limits, &d);
        expansions += stats.expanded as f64;

        match outcome {
            SearchOutcome::Solved(goal) => {
                n_solved += 1;
                solution_depth += goal.depth() as f64;
            },
            SearchOutcome::Exhausted => n_exhausted += 1,
            SearchOutcome::Bounded(_) => n_bounded += 1,
        }
    }

    let n = args.problems.max(1) as f64;
    println!("Success rate: {}, Exhausted: {}, Bounded: {}",
             n_solved as f64 / n, n_exhausted, n_bounded);
    println!("Avg. Branching Factor: {}, Avg. Solution Depth: {}, Avg. Expansions: {}",
             branching_factor / n,
             if n_solved > 0 { solution_depth / n_solved as f64 } else { 0.0 },
             expansions / n);

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(LevelFilter::from(cli.log_level))
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Some(Commands::Solve(args)) => solve(args),
        Some(Commands::Bench(args)) => bench(args),
        None => solve(SolveArgs::default()),
    }
}
