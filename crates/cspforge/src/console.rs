//! Colorful console output for search events.
//!
//! Provides a custom `tracing` layer that formats search events with colors.
//! Initialized by [`run_solver`](crate::run_solver) when the `console`
//! feature is enabled.

use num_format::{Locale, ToFormattedString};
use owo_colors::OwoColorize;
use std::io::{self, Write};
use std::sync::OnceLock;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::Context;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

static INIT: OnceLock<()> = OnceLock::new();

/// Package version for banner display.
const VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_FILTER: &str = "cspforge_solver=info,cspforge_models=info";

/// Width of the summary box, borders excluded.
const BOX_WIDTH: usize = 58;

/// Initializes the search console output.
///
/// Safe to call multiple times - only the first call has effect.
/// Prints the CspForge banner and sets up tracing. If another global
/// subscriber is already installed it is left in place and the refusal is
/// reported through that subscriber at debug level.
pub fn init() {
    INIT.get_or_init(|| {
        print_banner();

        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        if let Err(err) = tracing_subscriber::registry()
            .with(filter)
            .with(SearchConsoleLayer)
            .try_init()
        {
            tracing::debug!(event = "console_skipped", error = %err);
        }
    });
}

fn print_banner() {
    let banner = r#"
   ____           _____
  / ___|___ _ __ |  ___|__  _ __ __ _  ___
 | |   / __| '_ \| |_ / _ \| '__/ _` |/ _ \
 | |___\__ \ |_) |  _| (_) | | | (_| |  __/
  \____|___/ .__/|_|  \___/|_|  \__, |\___|
           |_|                  |___/
"#;

    let version_line = format!("            v{VERSION} - Table Constraint Solver\n");

    let mut stdout = io::stdout().lock();
    let _ = writeln!(stdout, "{}", banner.bright_cyan());
    let _ = writeln!(stdout, "{}", version_line.bright_white().bold());
    let _ = stdout.flush();
}

/// A tracing layer that formats search events with colors.
pub struct SearchConsoleLayer;

impl<S: Subscriber> Layer<S> for SearchConsoleLayer {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let target = event.metadata().target();
        if !target.starts_with("cspforge_solver") && !target.starts_with("cspforge_models") {
            return;
        }

        let mut visitor = EventVisitor::default();
        event.record(&mut visitor);

        let output = format_search_event(&visitor);
        if !output.is_empty() {
            let _ = writeln!(io::stdout(), "{}", output);
        }
    }
}

#[derive(Debug, Default)]
struct EventVisitor {
    event: Option<String>,
    csp: Option<String>,
    model: Option<String>,
    propagator: Option<String>,
    status: Option<String>,
    variable_count: Option<u64>,
    constraint_count: Option<u64>,
    solution: Option<u64>,
    solutions: Option<u64>,
    nodes: Option<u64>,
    prunings: Option<u64>,
    dead_ends: Option<u64>,
    duration_ms: Option<u64>,
    speed: Option<u64>,
}

impl EventVisitor {
    fn set_str(&mut self, field: &Field, value: String) {
        match field.name() {
            "event" => self.event = Some(value),
            "csp" => self.csp = Some(value),
            "model" => self.model = Some(value),
            "propagator" => self.propagator = Some(value),
            "status" => self.status = Some(value),
            _ => {}
        }
    }
}

impl Visit for EventVisitor {
    fn record_debug(&mut self, field: &Field, value: &dyn std::fmt::Debug) {
        let s = format!("{:?}", value);
        self.set_str(field, s.trim_matches('"').to_string());
    }

    fn record_u64(&mut self, field: &Field, value: u64) {
        match field.name() {
            "variable_count" => self.variable_count = Some(value),
            "constraint_count" => self.constraint_count = Some(value),
            "solution" => self.solution = Some(value),
            "solutions" => self.solutions = Some(value),
            "nodes" => self.nodes = Some(value),
            "prunings" => self.prunings = Some(value),
            "dead_ends" => self.dead_ends = Some(value),
            "duration_ms" => self.duration_ms = Some(value),
            "speed" => self.speed = Some(value),
            _ => {}
        }
    }

    fn record_i64(&mut self, field: &Field, value: i64) {
        self.record_u64(field, value.max(0) as u64);
    }

    fn record_str(&mut self, field: &Field, value: &str) {
        self.set_str(field, value.to_string());
    }
}

fn format_search_event(v: &EventVisitor) -> String {
    match v.event.as_deref().unwrap_or("") {
        "model_built" => format_model_built(v),
        "search_start" => format_search_start(v),
        "root_dead_end" => format_root_dead_end(v),
        "solution" => format_solution(v),
        "search_end" => format_search_end(v),
        _ => String::new(),
    }
}

fn format_model_built(v: &EventVisitor) -> String {
    format!(
        "{} {} {} {} built: variable count ({}), constraint count ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Model]".bright_cyan(),
        v.model.as_deref().unwrap_or("model").white().bold(),
        count(v.variable_count).bright_yellow(),
        count(v.constraint_count).bright_yellow(),
    )
}

fn format_search_start(v: &EventVisitor) -> String {
    format!(
        "{} {} {} Search started on {} with {}: variable count ({}), constraint count ({})",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        v.csp.as_deref().unwrap_or("csp").white().bold(),
        v.propagator.as_deref().unwrap_or("?").bright_magenta(),
        count(v.variable_count).bright_yellow(),
        count(v.constraint_count).bright_yellow(),
    )
}

fn format_root_dead_end(v: &EventVisitor) -> String {
    format!(
        "    {} Refuted before the first assignment ({} prunings)",
        "x".bright_red(),
        count(v.prunings).white(),
    )
}

fn format_solution(v: &EventVisitor) -> String {
    format!(
        "    {} Solution {:>5} | nodes {}",
        "->".bright_blue(),
        count(v.solution).white(),
        count(v.nodes).bright_yellow(),
    )
}

fn format_search_end(v: &EventVisitor) -> String {
    let solutions = v.solutions.unwrap_or(0);
    let status = v.status.as_deref().unwrap_or("Exhausted");

    let mut output = format!(
        "{} {} {} Search ended ({}): time spent ({}), nodes ({}), prunings ({}), dead ends ({}), node speed ({}/sec)",
        timestamp().bright_black(),
        "INFO".bright_green(),
        "[Search]".bright_cyan(),
        status.white(),
        format_duration_ms(v.duration_ms.unwrap_or(0)).yellow(),
        count(v.nodes).white(),
        count(v.prunings).white(),
        count(v.dead_ends).white(),
        count(v.speed).bright_magenta().bold(),
    );

    let status_text = summary_text(status, solutions);
    let status_colored = if solutions > 0 {
        format!("  {}  ", status_text).bright_green().bold().to_string()
    } else if status == "Exhausted" {
        format!("  {}  ", status_text).bright_red().bold().to_string()
    } else {
        format!("  {}  ", status_text).yellow().bold().to_string()
    };
    let padding = BOX_WIDTH.saturating_sub(status_text.len() + 4);
    let left_pad = padding / 2;
    let right_pad = padding - left_pad;
    let rule = "═".repeat(BOX_WIDTH);

    output.push_str("\n\n");
    output.push_str(&format!("╔{rule}╗").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}{}{}{}{}",
        "║".bright_cyan(),
        " ".repeat(left_pad),
        status_colored,
        " ".repeat(right_pad),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╠{rule}╣").bright_cyan().to_string());
    output.push('\n');
    output.push_str(&format!(
        "{}  {:<18}{:>36}  {}",
        "║".bright_cyan(),
        "Solutions:",
        solutions.to_formatted_string(&Locale::en),
        "║".bright_cyan()
    ));
    output.push('\n');
    output.push_str(&format!("╚{rule}╝").bright_cyan().to_string());
    output.push('\n');

    output
}

fn summary_text(status: &str, solutions: u64) -> String {
    match (solutions, status) {
        (0, "Exhausted") => "UNSATISFIABLE".to_string(),
        (0, _) => "STOPPED WITHOUT A SOLUTION".to_string(),
        (1, _) => "SOLUTION FOUND".to_string(),
        (n, "Exhausted") => format!("ALL {} SOLUTIONS FOUND", n.to_formatted_string(&Locale::en)),
        (n, _) => format!("{} SOLUTIONS FOUND", n.to_formatted_string(&Locale::en)),
    }
}

fn count(value: Option<u64>) -> String {
    value.unwrap_or(0).to_formatted_string(&Locale::en)
}

fn timestamp() -> String {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| {
            let secs = d.as_secs() % 100000;
            let millis = d.subsec_millis();
            format!("{:5}.{:03}", secs, millis)
        })
        .unwrap_or_else(|_| "    0.000".to_string())
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

#[cfg(test)]
mod tests {
    use super::*;

    fn visitor(event: &str) -> EventVisitor {
        EventVisitor {
            event: Some(event.to_string()),
            ..EventVisitor::default()
        }
    }

    #[test]
    fn test_unknown_events_are_silent() {
        assert!(format_search_event(&visitor("prune")).is_empty());
        assert!(format_search_event(&EventVisitor::default()).is_empty());
    }

    #[test]
    fn test_search_start_shows_counts() {
        let v = EventVisitor {
            csp: Some("Warehouse-9".to_string()),
            propagator: Some("GAC".to_string()),
            variable_count: Some(81),
            constraint_count: Some(1_296),
            ..visitor("search_start")
        };
        let out = format_search_event(&v);
        assert!(out.contains("Warehouse-9"));
        assert!(out.contains("GAC"));
        assert!(out.contains("81"));
        assert!(out.contains("1,296"));
    }

    #[test]
    fn test_search_end_summary() {
        let v = EventVisitor {
            status: Some("Exhausted".to_string()),
            solutions: Some(12),
            nodes: Some(25_000),
            ..visitor("search_end")
        };
        let out = format_search_event(&v);
        assert!(out.contains("ALL 12 SOLUTIONS FOUND"));
        assert!(out.contains("25,000"));
    }

    #[test]
    fn test_summary_text() {
        assert_eq!(summary_text("Exhausted", 0), "UNSATISFIABLE");
        assert_eq!(summary_text("Terminated", 0), "STOPPED WITHOUT A SOLUTION");
        assert_eq!(summary_text("SolutionLimitReached", 1), "SOLUTION FOUND");
        assert_eq!(summary_text("Terminated", 3), "3 SOLUTIONS FOUND");
    }

    #[test]
    fn test_init_keeps_existing_subscriber() {
        // another test may already have installed one
        let _ = tracing::subscriber::set_global_default(tracing_subscriber::registry());
        init();
        init();
        assert!(INIT.get().is_some());
    }

    #[test]
    fn test_format_duration_ms() {
        assert_eq!(format_duration_ms(250), "250ms");
        assert_eq!(format_duration_ms(1500), "1.50s");
        assert_eq!(format_duration_ms(125_000), "2m 5s");
    }
}
