use crate::app::App;
use crate::ui::widgets::tables::scroll_offset;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;

pub fn render_ranking(app: &App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(5), Constraint::Length(3)])
        .split(area);

    if app.ranking.is_empty() {
        let block = Block::default()
            .title("Server Ranking")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let paragraph = Paragraph::new("No ranking yet. Press r to fetch.")
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, chunks[0]);
        render_help_line(f, chunks[1]);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Rank"),
        Cell::from("Country"),
        Cell::from("Score"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.ranking.len();
    let max_visible_rows = chunks[0].height.saturating_sub(4) as usize;
    let offset = scroll_offset(total_rows, max_visible_rows, app.ranking_index);

    let rows = app
        .ranking
        .iter()
        .skip(offset)
        .take(max_visible_rows)
        .enumerate()
        .map(|(i, entry)| {
            let rank = i + offset + 1;
            let is_selected = i + offset == app.ranking_index;
            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else if rank == 1 {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Row::new(vec![
                Cell::from(rank.to_string()),
                Cell::from(entry.name.clone()),
                Cell::from(format!("{:.2}", entry.score)),
            ])
            .style(style)
        });

    let title = app.ranking_fetched_at.as_ref().map_or_else(
        || format!("Server Ranking ({total_rows} countries)"),
        |fetched_at| format!("Server Ranking ({total_rows} countries, fetched {fetched_at})"),
    );

    let widths = [
        Constraint::Length(5),
        Constraint::Min(20),
        Constraint::Length(8),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().title(title).borders(Borders::ALL))
        .column_spacing(1);

    f.render_widget(table, chunks[0]);
    render_help_line(f, chunks[1]);
}

fn render_help_line(f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let help_text = vec![
        Span::styled("ESC", key_style),
        Span::raw(": Back   "),
        Span::styled("↑/↓", key_style),
        Span::raw(": Navigate   "),
        Span::styled("r", key_style),
        Span::raw(": Refetch   "),
        Span::styled("q", key_style),
        Span::raw(": Quit"),
    ];

    let help_paragraph = Paragraph::new(TextLine::from(help_text))
        .block(Block::default().borders(Borders::TOP))
        .alignment(Alignment::Center);

    f.render_widget(help_paragraph, area);
}
