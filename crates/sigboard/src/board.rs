use anyhow::Result;

use sigboard_sessions::{summarize, view, FilterController, SessionLoader, SessionRecord, Statistics};

use crate::render;

pub async fn handle_board_command(
    loader: &SessionLoader,
    country: Option<String>,
    interactive: bool,
    json: bool,
    limit: usize,
) -> Result<()> {
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
        return Ok(());
    }

    let mut controller = FilterController::new();
    if let Some(ref code) = country {
        controller.toggle(code);
    }

    render::render_dashboard(&stats, &sessions, controller.state(), limit);

    if interactive {
        interactive_loop(&stats, &sessions, &mut controller, limit)?;
    }

    Ok(())
}

/// Prompt-toggle-rerender loop. Each selection toggles the country filter
/// and re-renders every dependent view before the next prompt, so the
/// breakdown highlight, the session table, and the indicator never disagree.
fn interactive_loop(
    stats: &Statistics,
    sessions: &[SessionRecord],
    controller: &mut FilterController,
    limit: usize,
) -> Result<()> {
    loop {
        let rows = view::country_rows(stats, controller.state());

        let mut items: Vec<String> = rows
            .iter()
            .map(|r| {
                format!(
                    "{} {}  ({} sessions, {} signals){}",
                    render::country_flag(&r.country),
                    r.country,
                    r.sessions,
                    r.fail,
                    if r.selected { "  [selected]" } else { "" }
                )
            })
            .collect();
        items.push("Clear filter".to_string());
        items.push("Quit".to_string());

        let selection = dialoguer::FuzzySelect::new()
            .with_prompt("Toggle country filter")
            .items(&items)
            .default(0)
            .interact()?;

        if selection == rows.len() {
            controller.clear();
        } else if selection == rows.len() + 1 {
            break;
        } else {
            controller.toggle(&rows[selection].country);
        }

        render::render_dashboard(stats, sessions, controller.state(), limit);
    }

    Ok(())
}
