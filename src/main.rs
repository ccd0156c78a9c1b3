use anyhow::{Context, Result};
use cave_explorer::config::Config;
use cave_explorer::report::result_message;
use cave_explorer::{GoalApproach, PathFinder, SolveReport};
use clap::Parser;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

/// Find a way through a cave to the mirror pool
#[derive(Parser, Debug)]
#[command(name = "cave_explorer", version, about)]
struct Cli {
    /// Cave file ("<rows> <cols>" header, then one line per row).
    /// Falls back to the configured file, then to the built-in cave.
    cave_file: Option<PathBuf>,

    /// Configuration file [default: config.toml, ignored if unreadable]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print a JSON report instead of the text layout
    #[arg(long)]
    json: bool,

    /// Only finish the walk when standing on the mirror pool
    #[arg(long)]
    strict_goal: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let (config, config_error) = match &cli.config {
        Some(path) => {
            let config = Config::load_from(path)
                .with_context(|| format!("loading {}", path.display()))?;
            (config, None)
        }
        None => Config::load(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    if let Some(e) = config_error {
        warn!("{:#}; using default configuration", anyhow::Error::from(e));
    }

    let goal_approach = if cli.strict_goal {
        GoalApproach::Enter
    } else {
        config.search.goal_approach
    };

    let finder = match cli.cave_file.as_ref().or(config.cave.grid_file.as_ref()) {
        Some(path) => PathFinder::from_file(path)
            .with_context(|| format!("loading cave {}", path.display()))?,
        None => {
            info!("no cave file given, using the built-in cave");
            PathFinder::default_cave()
        }
    }
    .with_goal_approach(goal_approach);

    if cli.json || config.output.json {
        let report = SolveReport::from_finder(&finder);
        println!("{}", report.to_json()?);
        return Ok(());
    }

    println!("Starting CaveExplorer");
    println!("Initial Layout:");
    println!("{}", finder.render());

    let has_path = finder.solve();

    println!("Final Layout:");
    println!("{}", finder.render());
    let path = if has_path { finder.get_path() } else { String::new() };
    println!("{}", result_message(&path));

    println!("Finished CaveExplorer");
    Ok(())
}
