use color_eyre::Result;
use crossterm::event::{self, Event};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::Stdout;

use crate::app::{handle_input, App};
use crate::domain::{metric_average, weighted_total, Metric};

/// Run the application in headless mode (no UI)
pub async fn run_headless(app: &mut App, json: bool) -> Result<()> {
    app.initialize().await?;

    if json {
        render_headless_json(app)?;
    } else {
        render_headless_stats(app);
    }

    Ok(())
}

fn render_headless_stats(app: &App) {
    let stats = build_headless_stats(app);

    println!("\nCountry Prospect Stats");
    println!("======================");
    println!("Backend: {}", stats.backend);
    println!("Generated: {}", stats.generated_at);
    println!("Total countries: {}", stats.total_countries);

    println!("\nAverage by metric:");
    for (label, average) in &stats.metric_averages {
        println!("- {label}: {average:.2}");
    }

    println!("\nStandings (client-side weighted totals):");
    for (position, entry) in stats.standings.iter().enumerate() {
        println!("{:>3}. {} | {:.2}", position + 1, entry.name, entry.total);
    }
}

fn render_headless_json(app: &App) -> Result<()> {
    let stats = build_headless_stats(app);
    let json = serde_json::to_string_pretty(&stats)?;
    println!("{json}");
    Ok(())
}

fn build_headless_stats(app: &App) -> HeadlessStats {
    let metric_averages = Metric::ALL
        .iter()
        .map(|metric| {
            (
                metric.label().to_string(),
                metric_average(&app.countries, *metric),
            )
        })
        .collect();

    let mut standings: Vec<HeadlessCountry> = app
        .countries
        .iter()
        .map(|country| HeadlessCountry {
            name: country.name.clone(),
            total: weighted_total(country),
        })
        .collect();
    standings.sort_by(|a, b| {
        b.total
            .partial_cmp(&a.total)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    HeadlessStats {
        backend: app.actions.base_url.clone(),
        generated_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        total_countries: app.countries.len(),
        metric_averages,
        standings,
    }
}

#[derive(serde::Serialize)]
struct HeadlessStats {
    backend: String,
    generated_at: String,
    total_countries: usize,
    metric_averages: Vec<(String, f64)>,
    standings: Vec<HeadlessCountry>,
}

#[derive(serde::Serialize)]
struct HeadlessCountry {
    name: String,
    total: f64,
}

/// Run the main application event loop
pub async fn run(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    // Configure event poll timeout (ms)
    const EVENT_POLL_TIMEOUT: u64 = 50;

    loop {
        // Update animations
        app.update();

        // Draw the UI with better error context
        if let Err(e) = terminal.draw(|f| crate::ui::ui(app, f)) {
            return Err(color_eyre::eyre::eyre!("Terminal draw error: {e}"));
        }

        // Handle events with improved error context
        if matches!(
            event::poll(std::time::Duration::from_millis(EVENT_POLL_TIMEOUT)),
            Ok(true)
        ) {
            match event::read() {
                Ok(Event::Key(key)) => {
                    handle_input(app, key.code).await;
                    if !app.running {
                        break;
                    }
                }
                Ok(Event::Resize(_, _)) => {
                    // Force a redraw after resize
                    if terminal.draw(|f| crate::ui::ui(app, f)).is_err() {
                        // Non-fatal redraw error
                    }
                }
                Ok(Event::Mouse(_) | Event::FocusGained | Event::FocusLost | Event::Paste(_))
                | Err(_) => {
                    // Ignore non-key events for now
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::build_headless_stats;
    use crate::api::models::Country;
    use crate::app::App;

    fn country(id: i64, name: &str, scores: [f64; 6]) -> Country {
        Country {
            id,
            name: name.to_string(),
            geological_score: scores[0],
            political_score: scores[1],
            legal_score: scores[2],
            economic_score: scores[3],
            market_access_score: scores[4],
            security_score: scores[5],
        }
    }

    #[test]
    fn standings_are_sorted_best_first() {
        let mut app = App::new();
        app.countries = vec![
            country(1, "Low", [1.0; 6]),
            country(2, "High", [9.0; 6]),
            country(3, "Mid", [5.0; 6]),
        ];

        let stats = build_headless_stats(&app);
        let names: Vec<&str> = stats
            .standings
            .iter()
            .map(|entry| entry.name.as_str())
            .collect();

        assert_eq!(names, vec!["High", "Mid", "Low"]);
        assert_eq!(stats.total_countries, 3);
    }

    #[test]
    fn empty_cache_produces_empty_standings() {
        let app = App::new();
        let stats = build_headless_stats(&app);

        assert_eq!(stats.total_countries, 0);
        assert!(stats.standings.is_empty());
        assert_eq!(stats.metric_averages.len(), 6);
    }
}
