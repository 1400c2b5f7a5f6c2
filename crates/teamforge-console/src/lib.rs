//! Colored console output for search events.
//!
//! Provides a custom `tracing` layer that renders the engine's search
//! lifecycle with colors and thousands separators.
//!
//! ## Log Levels
//!
//! - **INFO**: Search start, infeasible pre-pass and search end
//! - **DEBUG**: Pre-pass bounds and per-branch totals of a parallel search
//! - **WARN**: Cancellation and thread pool fallback

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::OnceLock;
use std::time::Instant;
use tracing::field::{Field, Visit};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();
static EPOCH: OnceLock<Instant> = OnceLock::new();
static SEARCH_START_NANOS: AtomicU64 = AtomicU64::new(0);

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Filter used when `RUST_LOG` is unset or unparsable.
pub const DEFAULT_DIRECTIVE: &str = "teamforge_solver=info";

/// Initializes console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the banner and installs the global subscriber; if another
/// subscriber is already installed it is left in place.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter = match EnvFilter::try_from_default_env() {
            Ok(filter) => filter,
            Err(_) => EnvFilter::new(DEFAULT_DIRECTIVE),
        };

        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(TeamConsoleLayer)
            .try_init();
    });
}

// Marks the start of a search for elapsed time tracking.
fn mark_search_start() {
    let epoch = EPOCH.get_or_init(Instant::now);
    let nanos = epoch.elapsed().as_nanos() as u64;
    SEARCH_START_NANOS.store(nanos, Ordering::Relaxed);
}

fn elapsed_secs() -> f64 {
    let Some(epoch) = EPOCH.get() else {
        return 0.0;
    };
    let start_nanos = SEARCH_START_NANOS.load(Ordering::Relaxed);
    let now_nanos = epoch.elapsed().as_nanos() as u64;
    now_nanos.saturating_sub(start_nanos) as f64 / 1_000_000_000.0
}

fn print_banner() {
    let banner = r#"
 _____                    _____
|_   _|__  __ _ _ __ ___ |  ___|__  _ __ __ _  ___
  | |/ _ \/ _` | '_ ` _ \| |_ / _ \| '__/ _` |/ _ \
  | |  __/ (_| | | | | | |  _| (_) | | | (_| |  __/
  |_|\___|\__,_|_| |_| |_|_|  \___/|_|  \__, |\___|
                                        |___/
"#;

    let version_line = format!("              v{} - Team Composition Search\n", VERSION);

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct TeamConsoleLayer;

impl<S: Subscriber> Layer<S> for TeamConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        if !metadata.target().starts_with("teamforge") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_event(&visitor, *metadata.level());
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Default)]
struct EventVisitor {
    event: Option<String>,
    message: Option<String>,
    strategy: Option<String>,
    gate_mode: Option<String>,
    best_score: Option<String>,
    error: Option<String>,
    team_size: Option<u64>,
    core_size: Option<u64>,
    pool_size: Option<u64>,
    gate_eligible: Option<u64>,
    candidate_teams: Option<u64>,
    top_k: Option<u64>,
    threads: Option<u64>,
    gate_needed: Option<u64>,
    gate_credit_available: Option<u64>,
    slots: Option<u64>,
    branch: Option<u64>,
    nodes: Option<u64>,
    leaves: Option<u64>,
    results: Option<u64>,
    gate_pruned: Option<u64>,
    capacity_pruned: Option<u64>,
    gate_rejected: Option<u64>,
    duration_ms: Option<u64>,
    elapsed_ms: Option<u64>,
    speed: Option<u64>,
    feasible: Option<bool>,
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.record_str(field, s.trim_matches('"'));
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        let slot = match field.name() {
            "team_size" => &mut self.team_size,
            "core_size" => &mut self.core_size,
            "pool_size" => &mut self.pool_size,
            "gate_eligible" => &mut self.gate_eligible,
            "candidate_teams" => &mut self.candidate_teams,
            "top_k" => &mut self.top_k,
            "threads" => &mut self.threads,
            "gate_needed" => &mut self.gate_needed,
            "gate_credit_available" => &mut self.gate_credit_available,
            "slots" => &mut self.slots,
            "branch" => &mut self.branch,
            "nodes" => &mut self.nodes,
            "leaves" => &mut self.leaves,
            "results" => &mut self.results,
            "gate_pruned" => &mut self.gate_pruned,
            "capacity_pruned" => &mut self.capacity_pruned,
            "gate_rejected" => &mut self.gate_rejected,
            "duration_ms" => &mut self.duration_ms,
            "elapsed_ms" => &mut self.elapsed_ms,
            "speed" => &mut self.speed,
            _ => return,
        };
        *slot = Some(value);
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_bool(&mut self, field: &Field, value: bool) {
        if field.name() == "feasible" {
            self.feasible = Some(value);
        }
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        let slot = match field.name() {
            "event" => &mut self.event,
            "message" => &mut self.message,
            "strategy" => &mut self.strategy,
            "gate_mode" => &mut self.gate_mode,
            "best_score" => &mut self.best_score,
            "error" => &mut self.error,
            _ => return,
        };
        *slot = Some(value.to_string());
    }
}

fn format_event(v: &EventVisitor, level: Level) -> String {
    match v.event.as_deref() {
        Some("search_start") => format_search_start(v),
        Some("prepass") => format_prepass(v),
        Some("search_infeasible") => format_search_infeasible(v),
        Some("branch_end") => format_branch_end(v),
        Some("search_end") => format_search_end(v),
        _ if level <= Level::WARN => format_warning(v),
        _ => String::new(),
    }
}

fn format_elapsed() -> String {
    format!("{:>7.3}s", elapsed_secs())
        .bright_black()
        .to_string()
}

fn count(n: u64) -> String {
    n.to_formatted_string(&Locale::en)
}

fn format_search_start(v: &EventVisitor) -> String {
    mark_search_start();
    let strategy = v.strategy.as_deref().unwrap_or("pruned");
    let gate_mode = v.gate_mode.as_deref().unwrap_or("enforce");

    let mut output = format!(
        "{} {} Searching │ {} {} │ team of {} │ {} free heroes ({} gate) │ {} candidate teams",
        format_elapsed(),
        "▶".bright_green().bold(),
        strategy.white().bold(),
        gate_mode.white(),
        count(v.team_size.unwrap_or(0)).bright_yellow(),
        count(v.pool_size.unwrap_or(0)).bright_yellow(),
        count(v.gate_eligible.unwrap_or(0)).bright_yellow(),
        count(v.candidate_teams.unwrap_or(0)).bright_magenta(),
    );

    if let Some(core) = v.core_size.filter(|&c| c > 0) {
        output.push_str(&format!(" │ {} core", count(core).bright_yellow()));
    }
    if let Some(threads) = v.threads.filter(|&t| t > 1) {
        output.push_str(&format!(" │ {} threads", count(threads).bright_yellow()));
    }

    output
}

fn format_prepass(v: &EventVisitor) -> String {
    let feasible = v.feasible.unwrap_or(true);
    let verdict = if feasible {
        "reachable".bright_green().to_string()
    } else {
        "unreachable".bright_red().to_string()
    };

    format!(
        "{} {} Pre-pass │ gate needs {} │ {} credit available │ {}",
        format_elapsed(),
        "◆".bright_blue(),
        count(v.gate_needed.unwrap_or(0)).white(),
        count(v.gate_credit_available.unwrap_or(0)).white(),
        verdict,
    )
}

fn format_search_infeasible(v: &EventVisitor) -> String {
    format!(
        "{} {} No team possible │ {} slots │ {} free heroes │ gate needs {}",
        format_elapsed(),
        "✗".bright_red().bold(),
        count(v.slots.unwrap_or(0)).bright_yellow(),
        count(v.pool_size.unwrap_or(0)).bright_yellow(),
        count(v.gate_needed.unwrap_or(0)).bright_yellow(),
    )
}

fn format_branch_end(v: &EventVisitor) -> String {
    format!(
        "{} {} Branch {:>4} │ {:>12} nodes │ {:>12} teams",
        format_elapsed(),
        "◀".bright_blue(),
        count(v.branch.unwrap_or(0)).bright_black(),
        count(v.nodes.unwrap_or(0)).white(),
        count(v.leaves.unwrap_or(0)).white(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let score = v.best_score.as_deref().unwrap_or("none");

    let mut output = format!(
        "{} {} Search complete │ {} │ best {} │ {} teams/s",
        format_elapsed(),
        "■".bright_cyan().bold(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        format_score(score),
        count(v.speed.unwrap_or(0)).bright_magenta().bold(),
    );

    output.push_str(&format!(
        "\n{:>9} {} nodes │ {} teams scored │ {} gate pruned │ {} capacity pruned",
        "",
        count(v.nodes.unwrap_or(0)).white(),
        count(v.leaves.unwrap_or(0)).white(),
        count(v.gate_pruned.unwrap_or(0)).white(),
        count(v.capacity_pruned.unwrap_or(0)).white(),
    ));
    if let Some(rejected) = v.gate_rejected.filter(|&r| r > 0) {
        output.push_str(&format!(" │ {} gate rejected", count(rejected).white()));
    }

    output
}

fn format_warning(v: &EventVisitor) -> String {
    let mut output = format!(
        "{} {} {}",
        format_elapsed(),
        "!".bright_yellow().bold(),
        v.message.as_deref().unwrap_or("warning").yellow(),
    );
    if let Some(ms) = v.elapsed_ms {
        output.push_str(&format!(" │ after {}", format_duration_ms(ms)));
    }
    if let Some(ref error) = v.error {
        output.push_str(&format!(" │ {}", error.bright_black()));
    }
    output
}

fn format_duration_ms(ms: u64) -> String {
    if ms < 1000 {
        format!("{}ms", ms)
    } else if ms < 60_000 {
        format!("{:.2}s", ms as f64 / 1000.0)
    } else {
        let mins = ms / 60_000;
        let secs = (ms % 60_000) / 1000;
        format!("{}m {}s", mins, secs)
    }
}

fn format_score(score: &str) -> String {
    match score.parse::<i64>() {
        Ok(n) if n < 0 => score.bright_red().to_string(),
        Ok(_) => score.bright_green().bold().to_string(),
        Err(_) => score.white().to_string(),
    }
}
