use crate::api::models::Country;
use crate::app::state::CompareSlot;
use crate::app::App;
use crate::domain::{metric_deltas, weighted_total};
use crate::ui::widgets::radar::{render_comparison_radar, COUNTRY_A_COLOR, COUNTRY_B_COLOR};
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_compare(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9), // Selectors
            Constraint::Min(10),   // Comparison cards and radar
            Constraint::Length(3), // Message / help
        ])
        .split(area);

    render_selectors(app, f, chunks[0]);
    render_comparison(app, f, chunks[1]);
    render_message_line(app, f, chunks[2]);
}

fn render_selectors(app: &App, f: &mut Frame<'_>, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    render_selector(
        app,
        f,
        columns[0],
        "Country A",
        app.compare_a_index,
        app.compare_slot == CompareSlot::A,
    );
    render_selector(
        app,
        f,
        columns[1],
        "Country B",
        app.compare_b_index,
        app.compare_slot == CompareSlot::B,
    );
}

fn render_selector(
    app: &App,
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    selected_index: usize,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(title.to_string())
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.countries.is_empty() {
        let paragraph = Paragraph::new("No countries yet.").alignment(Alignment::Center);
        f.render_widget(paragraph, inner);
        return;
    }

    let max_visible_rows = inner.height as usize;
    let offset = scroll_offset(app.countries.len(), max_visible_rows, selected_index);

    let lines: Vec<TextLine<'_>> = app
        .countries
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .enumerate()
        .map(|(i, country)| {
            let is_selected = i + offset == selected_index;
            let style = if is_selected && focused {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else if is_selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            let prefix = if is_selected { ">" } else { " " };

            TextLine::from(Span::styled(format!("{prefix} {}", country.name), style))
        })
        .collect();

    f.render_widget(Paragraph::new(lines), inner);
}

fn render_comparison(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some((a, b)) = app.compared_countries() else {
        let block = Block::default()
            .title("Comparison")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("Press Enter to compare the selected countries.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Percentage(30),
            Constraint::Percentage(40),
        ])
        .split(area);

    render_comparison_card(f, columns[0], "Country A", a, b, "Diff (A-B)");
    render_comparison_card(f, columns[1], "Country B", b, a, "Diff (B-A)");
    render_radar_panel(f, columns[2], a, b);
}

fn render_comparison_card(
    f: &mut Frame<'_>,
    area: Rect,
    title: &str,
    country: &Country,
    other: &Country,
    diff_header: &str,
) {
    let block = Block::default()
        .title(format!("{title}: {}", country.name))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(4)])
        .split(inner);

    let total_line = TextLine::from(vec![
        Span::styled("Total Score: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("{:.2}", weighted_total(country)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    f.render_widget(Paragraph::new(total_line), sections[0]);

    let header = Row::new(vec![
        Cell::from("Metric"),
        Cell::from("Value"),
        Cell::from(diff_header.to_string()),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let rows = metric_deltas(country, other).map(|(metric, delta)| {
        let delta_style = if delta > 0.0 {
            Style::default().fg(Color::Green)
        } else if delta < 0.0 {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        };

        Row::new(vec![
            Cell::from(metric.label()),
            Cell::from(format!("{:.2}", country.metric(metric))),
            Cell::from(Span::styled(format!("{delta:.2}"), delta_style)),
        ])
    });

    let widths = [
        Constraint::Length(14),
        Constraint::Length(7),
        Constraint::Length(10),
    ];

    let table = Table::new(rows, widths).header(header).column_spacing(1);
    f.render_widget(table, sections[1]);
}

fn render_radar_panel(f: &mut Frame<'_>, area: Rect, a: &Country, b: &Country) {
    let block = Block::default()
        .title("Radar")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(6), Constraint::Length(2)])
        .split(inner);

    render_comparison_radar(f, sections[0], a, b);

    let legend = vec![
        TextLine::from(vec![
            Span::styled("■ ", Style::default().fg(COUNTRY_A_COLOR)),
            Span::raw(a.name.clone()),
        ]),
        TextLine::from(vec![
            Span::styled("■ ", Style::default().fg(COUNTRY_B_COLOR)),
            Span::raw(b.name.clone()),
        ]),
    ];
    f.render_widget(Paragraph::new(legend), sections[1]);
}

fn render_message_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let line = if app.compare_message.is_empty() {
        TextLine::from(vec![
            Span::styled("Tab/←/→", key_style),
            Span::raw(": Switch column   "),
            Span::styled("↑/↓", key_style),
            Span::raw(": Select   "),
            Span::styled("Enter", key_style),
            Span::raw(": Compare   "),
            Span::styled("r", key_style),
            Span::raw(": Refresh   "),
            Span::styled("ESC", key_style),
            Span::raw(": Back"),
        ])
    } else {
        TextLine::from(Span::styled(
            app.compare_message.as_str(),
            Style::default().fg(Color::Red),
        ))
    };

    let paragraph = Paragraph::new(line)
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(paragraph, area);
}
