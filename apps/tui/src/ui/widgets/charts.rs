use crate::api::models::Country;
use crate::domain::{metric_average, Metric};
use crate::ui::widgets::radar::metric_color;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line as TextLine;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;

/// Bar chart of one country's six subscores, scale 0-10.
pub fn render_metric_barchart(f: &mut Frame<'_>, area: Rect, country: &Country) {
    let values: Vec<(Metric, f64)> = Metric::ALL
        .iter()
        .map(|metric| (*metric, country.metric(*metric)))
        .collect();

    render_barchart(f, area, "Metric Scores", &values);
}

/// Bar chart of per-metric averages across the cache.
pub fn render_average_barchart(f: &mut Frame<'_>, area: Rect, countries: &[Country]) {
    if countries.is_empty() {
        let block = Block::default()
            .title("Metric Averages")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("No countries yet.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let values: Vec<(Metric, f64)> = Metric::ALL
        .iter()
        .map(|metric| (*metric, metric_average(countries, *metric)))
        .collect();

    render_barchart(f, area, "Metric Averages", &values);
}

fn render_barchart(f: &mut Frame<'_>, area: Rect, title: &str, values: &[(Metric, f64)]) {
    let bars: Vec<Bar<'_>> = values
        .iter()
        .map(|(metric, value)| {
            // Bars carry tenths so a 0-10 score still has resolution
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let scaled = (value.clamp(0.0, 10.0) * 10.0).round() as u64;

            Bar::default()
                .value(scaled)
                .text_value(format!("{value:.1}"))
                .label(TextLine::from(metric.short_label()))
                .style(Style::default().fg(metric_color(*metric)))
                .value_style(
                    Style::default()
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(1)
        .bar_width(5);

    f.render_widget(chart, area);
}
