//! Structured logging setup.
//!
//! Env contract:
//! - `RUST_LOG` wins when set; otherwise `AXUM_LOG_LEVEL` (default `debug`),
//!   with sqlx query logging held at `warn`
//! - `AXUM_SPAN_EVENTS`: `full`, `enter_exit`, anything else closes only
//! - `FORCE_COLOR`: `1|true|yes` on, `0|false|no` off, else TTY detection

use std::env;

use is_terminal::IsTerminal;
use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::FmtSpan;

// ---

const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const DEFAULT_LEVEL: &str = "debug";

/// Filter directive for a requested level; unknown levels fall back to
/// `debug`.
pub fn filter_directive(level: Option<&str>) -> String {
    // ---
    let level = level
        .map(|l| l.trim().to_ascii_lowercase())
        .filter(|l| LEVELS.contains(&l.as_str()))
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string());
    format!("{level},sqlx::query=warn")
}

pub fn span_events(mode: Option<&str>) -> FmtSpan {
    match mode {
        Some("full") => FmtSpan::FULL,
        Some("enter_exit") => FmtSpan::ENTER | FmtSpan::EXIT,
        _ => FmtSpan::CLOSE,
    }
}

/// Explicit color choice, or `None` to defer to TTY detection.
pub fn forced_color(value: Option<&str>) -> Option<bool> {
    match value.map(str::trim) {
        Some("1" | "true" | "yes") => Some(true),
        Some("0" | "false" | "no") => Some(false),
        _ => None,
    }
}

/// Install the global subscriber. Call once, before anything logs.
pub fn init_tracing() {
    // ---
    let var = |name: &str| env::var(name).ok();

    let env_filter = match var("RUST_LOG") {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(filter_directive(var("AXUM_LOG_LEVEL").as_deref())),
    };
    let use_color = forced_color(var("FORCE_COLOR").as_deref())
        .unwrap_or_else(|| std::io::stdout().is_terminal());

    tracing_subscriber::fmt()
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_span_events(span_events(var("AXUM_SPAN_EVENTS").as_deref()))
        .with_env_filter(env_filter)
        .with_ansi(use_color)
        .compact()
        .init();
}
