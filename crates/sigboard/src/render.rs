//! Terminal rendering for the dashboard.
//!
//! Everything here consumes the computed `Statistics` and row orders from
//! `sigboard_sessions::view`; no counting or sorting happens in this module.

use colored::{ColoredString, Colorize};

use sigboard_sessions::{view, FilterState, SessionRecord, Statistics, Status};

/// Width of a full signal-type bar, in block characters.
const SIGNAL_BAR_WIDTH: usize = 30;

/// Width of a full country distribution bar, in block characters.
const STACKED_BAR_WIDTH: usize = 24;

/// Placeholder for absent fields.
const DASH: &str = "\u{2014}";

pub fn render_dashboard(
    stats: &Statistics,
    sessions: &[SessionRecord],
    state: &FilterState,
    limit: usize,
) {
    println!();
    summary_cards(stats);
    println!();
    signal_bars(stats);
    println!();
    country_table(stats, state);
    println!();
    session_table(sessions, state, limit);
    println!();
    last_ingest_line(sessions);
}

pub fn summary_cards(stats: &Statistics) {
    println!(
        "  {}  {}    {}  {}    {}  {}  {}",
        "Sessions:".dimmed(),
        stats.total.to_string().bold(),
        "Pass:".dimmed(),
        stats.pass.to_string().bright_green().bold(),
        "Issues Detected:".dimmed(),
        stats.signal.to_string().bright_red().bold(),
        format!("(warnings: {})", stats.warn).bright_yellow()
    );
}

pub fn signal_bars(stats: &Statistics) {
    println!("{}", "Signal Breakdown".bold());

    let rows = view::signal_type_rows(stats);
    if rows.is_empty() {
        println!("  {}", "No diagnostic signals detected".dimmed());
        return;
    }

    let label_width = rows.iter().map(|r| r.name.len()).max().unwrap_or(0);

    for row in rows {
        let filled = (row.ratio * SIGNAL_BAR_WIDTH as f64).round() as usize;
        println!(
            "  {:<width$}  {} {}",
            row.name,
            "\u{2588}".repeat(filled).bright_red(),
            row.count,
            width = label_width
        );
    }
}

pub fn country_table(stats: &Statistics, state: &FilterState) {
    println!("{}", "Country Breakdown".bold());

    let rows = view::country_rows(stats, state);
    if rows.is_empty() {
        println!("  {}", "No country data available".dimmed());
        return;
    }

    println!(
        "  {:<10} {:>8} {:>6} {:>6} {:>6}  {}",
        "COUNTRY".dimmed(),
        "SESSIONS".dimmed(),
        "PASS".dimmed(),
        "WARN".dimmed(),
        "FAIL".dimmed(),
        "DISTRIBUTION".dimmed(),
    );

    for row in rows {
        let marker = if row.selected { ">" } else { " " };
        let code = if row.selected {
            row.country.bold().to_string()
        } else {
            row.country.clone()
        };

        println!(
            "{} {} {:<6} {:>8} {:>6} {:>6} {:>6}  {}",
            marker.bright_cyan(),
            country_flag(&row.country),
            code,
            row.sessions,
            row.pass.to_string().bright_green(),
            row.warn.to_string().bright_yellow(),
            row.fail.to_string().bright_red(),
            stacked_bar(row.pass_ratio, row.warn_ratio, row.fail_ratio),
        );
    }
}

pub fn session_table(sessions: &[SessionRecord], state: &FilterState, limit: usize) {
    print!("{}", "Recent Sessions".bold());
    if let Some(ref code) = state.selected_country {
        print!(
            "  {}",
            format!("[{} {}]", country_flag(code), code).bright_cyan()
        );
    }
    println!();

    let rows = view::recent_sessions(sessions, state, limit);
    if rows.is_empty() {
        println!("  {}", "No sessions found.".dimmed());
        return;
    }

    println!(
        "  {:<24} {:<8} {:<6} {}",
        "SESSION".dimmed(),
        "COUNTRY".dimmed(),
        "TIER".dimmed(),
        "STATUS".dimmed(),
    );

    for session in rows {
        let status = session.status();
        println!(
            "  {:<24} {:<8} {:<6} {}",
            session.session_id.as_deref().unwrap_or(DASH),
            session.country.as_deref().unwrap_or(DASH),
            session.tier.as_deref().unwrap_or(DASH),
            status_cell(status),
        );
    }
}

pub fn last_ingest_line(sessions: &[SessionRecord]) {
    match view::last_ingest(sessions) {
        Some(ts) => println!("{}", format!("Last ingest: {}", ts).dimmed()),
        None => println!("{}", "No data".dimmed()),
    }
}

/// The single user-visible error line shown when the load fails. No
/// statistics are rendered alongside it.
pub fn error_banner(message: &str) {
    eprintln!("{}", format!("ERROR: {}", message).bright_red().bold());
}

fn status_cell(status: Status) -> ColoredString {
    let text = format!("{} {}", status.icon(), status.label());
    match status {
        Status::Pass => text.bright_green(),
        Status::Warn => text.bright_yellow(),
        Status::Signal => text.bright_red(),
        Status::Unknown => text.dimmed(),
    }
}

fn stacked_bar(pass_ratio: f64, warn_ratio: f64, fail_ratio: f64) -> String {
    let pass = (pass_ratio * STACKED_BAR_WIDTH as f64).round() as usize;
    let warn = (warn_ratio * STACKED_BAR_WIDTH as f64).round() as usize;
    let fail = (fail_ratio * STACKED_BAR_WIDTH as f64).round() as usize;

    format!(
        "{}{}{}",
        "\u{2588}".repeat(pass).bright_green(),
        "\u{2588}".repeat(warn).bright_yellow(),
        "\u{2588}".repeat(fail).bright_red(),
    )
}

/// Convert a 2-letter country code to its regional-indicator flag emoji.
/// Anything else renders as the white flag.
pub fn country_flag(code: &str) -> String {
    let chars: Vec<char> = code.chars().collect();
    if chars.len() != 2 || !chars.iter().all(|c| c.is_ascii_alphabetic()) {
        return "\u{1F3F3}\u{FE0F}".to_string();
    }

    chars
        .iter()
        .map(|c| {
            char::from_u32(0x1F1E6 + (c.to_ascii_uppercase() as u32 - 'A' as u32))
                .unwrap_or('\u{1F3F3}')
        })
        .collect()
}
