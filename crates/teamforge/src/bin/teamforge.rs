//! TeamForge CLI: search the built-in roster for the best teams.
//!
//! Settings come from an optional TOML or YAML file; command-line flags
//! override it.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use owo_colors::OwoColorize;
use teamforge::{
    run, ConfigError, GateMode, OptimizerConfig, RunError, RunReport, SearchStrategy, ThreadCount,
};

#[derive(Parser)]
#[command(
    name = "teamforge",
    version,
    about = "Find the highest-scoring Magic Chess team compositions"
)]
struct Cli {
    /// Path to a TOML or YAML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of heroes per team.
    #[arg(long)]
    team_size: Option<usize>,

    /// Hero required in every team (repeatable).
    #[arg(long = "core", value_name = "HERO")]
    core: Vec<String>,

    /// Reject repeated core hero names instead of ignoring them.
    #[arg(long, default_value_t = false)]
    strict_core: bool,

    /// Special-ability hero (give two, or none).
    #[arg(long = "special", value_name = "HERO")]
    special: Vec<String>,

    /// Enhanced trait (repeatable; repeats accumulate).
    #[arg(long = "crystal", value_name = "TRAIT")]
    crystal: Vec<String>,

    /// Number of ranked teams to print.
    #[arg(long)]
    top_k: Option<usize>,

    /// Worker threads; 0 picks one per core.
    #[arg(long)]
    threads: Option<usize>,

    #[arg(long, value_enum)]
    strategy: Option<StrategyArg>,

    #[arg(long, value_enum)]
    gate_mode: Option<GateModeArg>,

    /// Wall-clock limit in seconds.
    #[arg(long)]
    time_limit: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum StrategyArg {
    Pruned,
    Exhaustive,
}

#[derive(Clone, Copy, ValueEnum)]
enum GateModeArg {
    Enforce,
    Penalty,
}

fn load_config(path: &Path) -> Result<OptimizerConfig, ConfigError> {
    match path.extension().and_then(|e| e.to_str()) {
        Some("yaml" | "yml") => OptimizerConfig::from_yaml_file(path),
        _ => OptimizerConfig::from_toml_file(path),
    }
}

fn build_config(cli: Cli) -> Result<OptimizerConfig, ConfigError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => OptimizerConfig::default(),
    };

    if let Some(team_size) = cli.team_size {
        config.team_size = team_size;
    }
    if let Some(top_k) = cli.top_k {
        config.top_k = top_k;
    }
    if !cli.core.is_empty() {
        config.core_heroes = cli.core;
    }
    if cli.strict_core {
        config.allow_duplicate_core = false;
    }
    if !cli.special.is_empty() {
        config.special_ability = cli.special;
    }
    if !cli.crystal.is_empty() {
        config.enhancements = cli.crystal;
    }
    if let Some(threads) = cli.threads {
        config.search.thread_count = match threads {
            0 => ThreadCount::Auto,
            1 => ThreadCount::None,
            n => ThreadCount::Count(n),
        };
    }
    if let Some(strategy) = cli.strategy {
        config.search.strategy = match strategy {
            StrategyArg::Pruned => SearchStrategy::Pruned,
            StrategyArg::Exhaustive => SearchStrategy::Exhaustive,
        };
    }
    if let Some(gate_mode) = cli.gate_mode {
        config.search.gate_mode = match gate_mode {
            GateModeArg::Enforce => GateMode::Enforce,
            GateModeArg::Penalty => GateMode::Penalty,
        };
    }
    if let Some(seconds) = cli.time_limit {
        config = config.with_termination_seconds(seconds);
    }
    Ok(config)
}

// Why a finished search produced no team.
fn empty_reason(config: &OptimizerConfig, report: &RunReport) -> &'static str {
    if report.catalog().hero_count() < config.team_size {
        "Not enough heroes to fill the team."
    } else if config.search.gate_mode == GateMode::Enforce {
        "No team satisfies the Metro Zero requirement."
    } else {
        "No team could be built."
    }
}

fn print_report(config: &OptimizerConfig, report: &RunReport) {
    let outcome = report.outcome();
    if outcome.is_empty() {
        println!("{}", empty_reason(config, report).bright_red());
    }

    for (rank, team) in report.teams().iter().enumerate() {
        println!(
            "\n{} {} {}",
            format!("#{}", rank + 1).bright_cyan().bold(),
            "score".bright_black(),
            team.score.to_string().bright_green().bold()
        );
        println!("   {}", report.hero_names(team).join(", ").white());
        let tiers: Vec<String> = report
            .tiers(team)
            .into_iter()
            .map(|(name, tier)| format!("{name}: {tier}"))
            .collect();
        println!("   {}", tiers.join(" │ ").bright_black());
    }

    println!(
        "\n{} {:.3}s",
        "Elapsed".bright_black(),
        outcome.elapsed.as_secs_f64()
    );
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match build_config(cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    teamforge::console::init();

    match run(&config) {
        Ok(report) => {
            print_report(&config, &report);
            ExitCode::SUCCESS
        }
        Err(RunError::Engine(teamforge::TeamForgeError::Cancelled)) => {
            eprintln!("{}", "Search stopped at the time limit.".yellow());
            ExitCode::FAILURE
        }
        Err(err) => {
            eprintln!("{} {}", "error:".bright_red().bold(), err);
            ExitCode::FAILURE
        }
    }
}
