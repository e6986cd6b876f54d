use crate::app::App;
use crate::domain::weighted_total;
use crate::ui::widgets::charts::render_average_barchart;
use crate::ui::widgets::popup::{centered_rect, ClearWidget};
use crate::ui::widgets::radar::render_mini_radar;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Margin, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

const MENU_ITEMS: [&str; 4] = [
    "Add country",
    "Explore details",
    "Compare countries",
    "Server ranking",
];

pub fn render_main(app: &App, f: &mut Frame<'_>) {
    let main_layout = build_main_layout(f);

    render_title_section(app, f, main_layout[0]);
    render_content_section(app, f, main_layout[1]);
    render_status_section(app, f, main_layout[2]);
    render_shortcuts(f, main_layout[3]);
}

fn build_main_layout(f: &Frame<'_>) -> Vec<Rect> {
    Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Title area
            Constraint::Min(5),    // Content area
            Constraint::Length(3), // Status area
            Constraint::Length(1), // Shortcuts hint
        ])
        .split(f.area().inner(Margin::new(2, 1)))
        .to_vec()
}

fn render_title_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let title_block = Block::default()
        .title("== Country Prospect Radar ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    f.render_widget(title_block, area);

    let title_inner = area.inner(Margin::new(1, 1));
    let title_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(title_inner);

    let title_paragraph = Paragraph::new(Text::from(vec![TextLine::from(vec![
        Span::styled(
            "Country ",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "Prospect Radar",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
    ])]))
    .alignment(Alignment::Left);
    f.render_widget(title_paragraph, title_chunks[0]);

    render_mini_radar(f, title_chunks[1], app.animation_counter);
}

fn render_content_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let content_block = Block::default()
        .title(" Dashboard ")
        .title_style(Style::default().fg(Color::Green))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    f.render_widget(content_block, area);

    let content_inner = area.inner(Margin::new(1, 1));
    let horizontal_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(content_inner);

    let mut content_lines = vec![TextLine::from(Span::styled(
        "Select a view (Use Up/Down and Enter)",
        Style::default().fg(Color::Green),
    ))];
    content_lines.push(TextLine::from(""));

    for (index, label) in MENU_ITEMS.iter().enumerate() {
        let is_selected = index == app.menu_index;
        let style = if is_selected {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let prefix = if is_selected { ">" } else { " " };
        content_lines.push(TextLine::from(Span::styled(
            format!("{prefix} {label}"),
            style,
        )));
    }

    content_lines.push(TextLine::from(""));
    content_lines.extend(summary_lines(app));

    let content_paragraph = Paragraph::new(Text::from(content_lines)).wrap(Wrap { trim: true });
    f.render_widget(content_paragraph, horizontal_split[0]);

    render_average_barchart(f, horizontal_split[1], &app.countries);
}

fn summary_lines(app: &App) -> Vec<TextLine<'_>> {
    let label_style = Style::default().fg(Color::Gray);
    let value_style = Style::default().fg(Color::Yellow);

    let mut lines = vec![TextLine::from(vec![
        Span::styled("Countries tracked: ", label_style),
        Span::styled(app.countries.len().to_string(), value_style),
    ])];

    let top = app.countries.iter().max_by(|a, b| {
        weighted_total(a)
            .partial_cmp(&weighted_total(b))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    if let Some(country) = top {
        lines.push(TextLine::from(vec![
            Span::styled("Top prospect: ", label_style),
            Span::styled(
                format!("{} ({:.2})", country.name, weighted_total(country)),
                value_style,
            ),
        ]));
    }

    lines
}

fn render_status_section(app: &App, f: &mut Frame<'_>, area: Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let status_text = if app.status_message.is_empty() {
        Text::from("")
    } else {
        let style = if app.status_message.starts_with("Error")
            || app.status_message.starts_with("Failed")
            || app.status_message.starts_with("Unable")
        {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Green)
        };

        Text::from(Span::styled(&app.status_message, style))
    };

    let status_paragraph = Paragraph::new(status_text)
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(status_paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("F1", key_style),
        Span::styled(": Help | ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(": Open view | ", text_style),
        Span::styled("a", key_style),
        Span::styled(": Add | ", text_style),
        Span::styled("e", key_style),
        Span::styled(": Explore | ", text_style),
        Span::styled("c", key_style),
        Span::styled(": Compare | ", text_style),
        Span::styled("r", key_style),
        Span::styled(": Ranking | ", text_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", text_style),
    ]);

    let shortcuts_paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(shortcuts_paragraph, area);
}

pub fn render_help_popup(f: &mut Frame<'_>) {
    let area = centered_rect(80, 80, f.area());
    f.render_widget(ClearWidget, area);

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let bold = Style::default().add_modifier(Modifier::BOLD);

    let help_text = vec![
        TextLine::from(Span::styled(
            "Country Prospect Radar",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Track country prospects scored on six metrics, compare them on a radar, and pull the server ranking.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled("Keyboard Shortcuts:", bold)),
        TextLine::from(vec![
            Span::styled("  F1", key_style),
            Span::raw(" - Toggle this help screen"),
        ]),
        TextLine::from(vec![
            Span::styled("  Esc", key_style),
            Span::raw(" - Cancel current input / Go back"),
        ]),
        TextLine::from(vec![
            Span::styled("  Enter", key_style),
            Span::raw(" - Confirm / Open"),
        ]),
        TextLine::from(vec![
            Span::styled("  a", key_style),
            Span::raw(" - Add a country"),
        ]),
        TextLine::from(vec![
            Span::styled("  e", key_style),
            Span::raw(" - Explore one country's scores"),
        ]),
        TextLine::from(vec![
            Span::styled("  c", key_style),
            Span::raw(" - Compare two countries"),
        ]),
        TextLine::from(vec![
            Span::styled("  r", key_style),
            Span::raw(" - Fetch the server ranking"),
        ]),
        TextLine::from(vec![
            Span::styled("  /", key_style),
            Span::raw(" - Filter the country list (Explorer)"),
        ]),
        TextLine::from(vec![
            Span::styled("  q", key_style),
            Span::raw(" - Quit application"),
        ]),
        TextLine::from(""),
        TextLine::from(Span::styled("Metrics:", bold)),
        TextLine::from("  Geological (25%), Political (20%), Legal (15%),"),
        TextLine::from("  Economic (15%), Market Access (15%), Security (10%)"),
        TextLine::from(""),
        TextLine::from(
            "Scores are 0-10. The total is the weighted sum; the ranking is computed by the server.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )),
    ];

    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });

    f.render_widget(help_paragraph, area);
}
