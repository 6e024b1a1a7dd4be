use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use life_engine::{
    LifeError, RlePattern, RuleRegistry, Simulation, SimulationConfig, StepMode, codec, presets,
};
use tracing::{error, warn};
use tracing_subscriber::EnvFilter;

/// Run a generational cellular automaton without a display
#[derive(Parser, Debug)]
#[command(name = "life", version, about)]
struct Args {
    /// JSON configuration file; flags below override its fields
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board height
    #[arg(short, long)]
    rows: Option<usize>,

    /// Board width
    #[arg(short, long)]
    cols: Option<usize>,

    /// Grow at the edges instead of wrapping around
    #[arg(short, long)]
    dynamic: bool,

    /// Rule name (Conway, HighLife, ...) or rule string (B36/S23)
    #[arg(long)]
    rule: Option<String>,

    /// Library pattern to start from
    #[arg(short, long)]
    pattern: Option<String>,

    /// RLE file to start from; its rule replaces --rule
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Generations to run
    #[arg(short = 'n', long)]
    generations: Option<u64>,

    /// Step with a worker pool instead of the calling thread
    #[arg(long)]
    concurrent: bool,

    /// Write the resulting RLE here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the effective configuration to this file and exit
    #[arg(long)]
    save_config: Option<PathBuf>,

    /// List built-in rules and patterns
    #[arg(long)]
    list: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    exit(match inner_main(Args::parse()) {
        Ok(()) => 0,
        Err(err) => {
            error!("{err}");
            1
        }
    })
}

fn effective_config(args: &Args) -> Result<SimulationConfig, LifeError> {
    let mut config = match &args.config {
        Some(path) => SimulationConfig::load(path)?,
        None => SimulationConfig::default(),
    };
    if let Some(rows) = args.rows {
        config.rows = rows;
    }
    if let Some(cols) = args.cols {
        config.cols = cols;
    }
    if args.dynamic {
        config.dynamic = true;
    }
    if let Some(rule) = &args.rule {
        config.rule = rule.clone();
    }
    if let Some(pattern) = &args.pattern {
        config.pattern = Some(pattern.clone());
    }
    if let Some(generations) = args.generations {
        config.generations = generations;
    }
    if args.concurrent {
        config.step_mode = StepMode::Concurrent;
    }
    Ok(config)
}

fn list_builtins() {
    let registry = RuleRegistry::with_builtins();
    println!("Rules:");
    for name in registry.names() {
        if let Ok(rule_set) = registry.get(name) {
            println!("  {name:<12} {rule_set}");
        }
    }
    println!("Patterns:");
    for pattern in presets::all_patterns() {
        println!("  {:<20} {}", pattern.name, pattern.description);
    }
    println!("Step modes:");
    for mode in StepMode::all() {
        println!("  {:<12} {}", mode.name(), mode.description());
    }
}

fn inner_main(args: Args) -> Result<(), LifeError> {
    // Listing needs no configuration, so a broken one cannot hide it
    if args.list {
        list_builtins();
        return Ok(());
    }

    let config = effective_config(&args)?;
    if let Some(path) = &args.save_config {
        return config.save(path);
    }

    let mut simulation = Simulation::from_config(&config).inspect_err(|err| {
        if let LifeError::UnknownRule(name) = err {
            warn!(%name, "rule is neither registered nor a valid rule string");
        }
    })?;
    if let Some(path) = &args.input {
        let pattern: RlePattern = codec::decode(&std::fs::read_to_string(path)?)?;
        if let Some(name) = pattern.name() {
            tracing::info!(%name, "loaded pattern");
        }
        simulation.load_rle(&pattern)?;
    }

    simulation.run(config.generations)?;

    let board = &simulation.board;
    let bb = board.bounding_box();
    let rule = board.rule_set();
    eprintln!(
        "rule {} | generation {} | alive {} | board {}x{} | pattern {}x{} | last step {:.3} ms",
        simulation.registry.name_of(rule).unwrap_or(rule.rule_string()),
        board.generation(),
        board.alive_count(),
        board.rows(),
        board.cols(),
        bb.height(),
        bb.width(),
        simulation.last_step_time_ms,
    );

    let text = codec::encode(&simulation.extract_rle());
    match &args.output {
        Some(path) => std::fs::write(path, text)?,
        None => print!("{text}"),
    }
    Ok(())
}
