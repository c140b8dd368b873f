use anyhow::Result;
use colored::Colorize;

use sigboard_sessions::{summarize, view, FilterState, SessionLoader, Statistics};

use crate::render;

pub async fn handle_stats_command(loader: &SessionLoader, json: bool) -> Result<()> {
    let sessions = match loader.load_all().await {
        Ok(sessions) => sessions,
        Err(e) => {
            render::error_banner(&e.to_string());
            std::process::exit(1);
        }
    };

    let stats = summarize(&sessions);

    if json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&stats);
    }

    Ok(())
}

fn print_stats(stats: &Statistics) {
    println!("{}", "=== Session Statistics ===".bright_blue().bold());
    println!("{}  {}", "Total Sessions:".dimmed(), stats.total);
    println!("{}  {}", "Pass:".dimmed(), stats.pass);
    println!("{}  {}", "Warn:".dimmed(), stats.warn);
    println!("{}  {}", "Signals:".dimmed(), stats.signal);
    if stats.unknown() > 0 {
        println!("{}  {}", "Unknown:".dimmed(), stats.unknown());
    }

    let signal_rows = view::signal_type_rows(stats);
    if !signal_rows.is_empty() {
        println!();
        println!("{}", "By Signal Type:".dimmed());
        for row in signal_rows {
            println!("  {:<20} {}", row.name, row.count);
        }
    }

    let country_rows = view::country_rows(stats, &FilterState::default());
    if !country_rows.is_empty() {
        println!();
        println!("{}", "By Country:".dimmed());
        for row in country_rows {
            println!(
                "  {:<6} {} sessions, {} pass, {} warn, {} fail",
                row.country, row.sessions, row.pass, row.warn, row.fail
            );
        }
    }
}
