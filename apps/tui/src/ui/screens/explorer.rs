use crate::app::state::filter_country_indices;
use crate::app::App;
use crate::domain::{weighted_total, Metric};
use crate::ui::widgets::charts::render_metric_barchart;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

pub fn render_explorer(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[0]);

    let visible = filter_country_indices(&app.countries, &app.explorer_filter);

    render_country_table(app, f, columns[0], &visible);
    render_detail_panel(app, f, columns[1], &visible);
    render_help_line(app, f, chunks[1]);
}

fn render_country_table(app: &App, f: &mut Frame<'_>, area: Rect, visible: &[usize]) {
    let (list_area, filter_area) = if app.explorer_searching || !app.explorer_filter.is_empty() {
        let split = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(3)])
            .split(area);

        (split[1], Some(split[0]))
    } else {
        (area, None)
    };

    if let Some(filter_area) = filter_area {
        let cursor = if app.explorer_searching { "█" } else { "" };
        let filter_line = Paragraph::new(TextLine::from(vec![
            Span::styled("/", Style::default().fg(Color::Yellow)),
            Span::styled(
                format!("{}{cursor}", app.explorer_filter),
                Style::default().fg(Color::White),
            ),
        ]));
        f.render_widget(filter_line, filter_area);
    }

    if app.countries.is_empty() {
        let block = Block::default()
            .title("Countries")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No countries yet.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, list_area);
        return;
    }

    let header = Row::new(vec![Cell::from("Name"), Cell::from("Total")]).style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = visible.len();
    let max_visible_rows = list_area.height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.explorer_index);

    let rows = visible
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .enumerate()
        .map(|(i, &country_index)| {
            let country = &app.countries[country_index];
            let is_selected = i + offset == app.explorer_index;
            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(country.name.clone()),
                Cell::from(format!("{:.2}", weighted_total(country))),
            ])
            .style(style)
        });

    let widths = [Constraint::Min(20), Constraint::Length(8)];

    let title = if total_rows == 0 {
        "Countries (no match)".to_string()
    } else {
        format!("Countries ({} of {})", app.explorer_index + 1, total_rows)
    };

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);

    f.render_widget(table, list_area);
}

fn render_detail_panel(app: &App, f: &mut Frame<'_>, area: Rect, visible: &[usize]) {
    let selected = visible
        .get(app.explorer_index)
        .and_then(|&index| app.countries.get(index));

    let Some(country) = selected else {
        let block = Block::default()
            .title("Details")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let paragraph = Paragraph::new("Select a country to view details.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    };

    let panels = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(11), Constraint::Min(6)])
        .split(area);

    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::Yellow);

    let mut lines = vec![
        TextLine::from(Span::styled(
            country.name.clone(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
    ];

    for metric in Metric::ALL {
        lines.push(TextLine::from(vec![
            Span::styled(format!("{}: ", metric.label()), label_style),
            Span::styled(format!("{:.2}", country.metric(metric)), value_style),
        ]));
    }

    lines.push(TextLine::from(vec![
        Span::styled("Total Score: ", label_style),
        Span::styled(
            format!("{:.2}", weighted_total(country)),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ]));

    let details = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title("Details")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: true });

    f.render_widget(details, panels[0]);
    render_metric_barchart(f, panels[1], country);
}

fn render_help_line(app: &App, f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = if app.explorer_searching {
        vec![
            Span::styled("Enter", key_style),
            Span::raw(": Apply filter   "),
            Span::styled("ESC", key_style),
            Span::raw(": Clear filter"),
        ]
    } else {
        vec![
            Span::styled("ESC", key_style),
            Span::raw(": Back   "),
            Span::styled("↑/↓", key_style),
            Span::raw(": Navigate   "),
            Span::styled("PgUp/PgDn", key_style),
            Span::raw(": Jump 5 rows   "),
            Span::styled("/", key_style),
            Span::raw(": Filter   "),
            Span::styled("r", key_style),
            Span::raw(": Refresh   "),
            Span::styled("q", key_style),
            Span::raw(": Quit"),
        ]
    };

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
