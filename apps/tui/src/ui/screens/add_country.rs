use crate::app::state::FormField;
use crate::app::App;
use crate::domain::Metric;
use crate::ui::widgets::popup::{anchored_rect, ClearWidget};
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_add_country(app: &App, f: &mut Frame<'_>) {
    let area = f.area();
    let form_state = &app.add_state;

    let form_area = anchored_rect(60, 17, area);
    f.render_widget(ClearWidget, form_area);

    let block = Block::default()
        .title(" Add Country ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(block, form_area);

    let form_chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(1), // Name
            Constraint::Length(1), // Geological
            Constraint::Length(1), // Political
            Constraint::Length(1), // Legal
            Constraint::Length(1), // Economic
            Constraint::Length(1), // Market Access
            Constraint::Length(1), // Security
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Error
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help text
        ])
        .split(form_area);

    let field_style = |field: FormField| {
        let is_selected = form_state.field == field;
        let is_editing = is_selected && form_state.editing;

        if is_editing {
            Style::default()
                .fg(Color::White)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else if is_selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        }
    };

    let field_label = |name: &str, field: FormField| {
        let style = field_style(field);
        let prefix = if form_state.field == field && form_state.editing {
            "► "
        } else if form_state.field == field {
            "> "
        } else {
            "  "
        };

        Span::styled(format!("{prefix}{name}: "), style)
    };

    let name_text = TextLine::from(vec![
        field_label("Name", FormField::Name),
        Span::styled(&form_state.name, field_style(FormField::Name)),
    ]);
    f.render_widget(Paragraph::new(name_text), form_chunks[0]);

    for (index, metric) in Metric::ALL.iter().enumerate() {
        let field = FormField::Score(*metric);
        let score_text = TextLine::from(vec![
            field_label(metric.label(), field),
            Span::styled(form_state.score_input(*metric), field_style(field)),
        ]);
        f.render_widget(Paragraph::new(score_text), form_chunks[index + 1]);
    }

    let submit_style = field_style(FormField::Submit);
    let submit_block = Block::default()
        .borders(Borders::ALL)
        .border_style(submit_style);
    let submit = Paragraph::new(Span::styled("Submit", submit_style))
        .block(submit_block)
        .alignment(Alignment::Center);
    f.render_widget(submit, form_chunks[7]);

    if !form_state.error.is_empty() {
        let error_line = Paragraph::new(Span::styled(
            form_state.error.as_str(),
            Style::default().fg(Color::Red),
        ))
        .alignment(Alignment::Center);
        f.render_widget(error_line, form_chunks[8]);
    }

    let status_text = if form_state.editing {
        "Editing mode: Type to edit, Enter to confirm, Esc to cancel"
    } else {
        "Navigation mode: Up/Down to select field, Enter to edit, Esc to exit"
    };

    let status_line = Paragraph::new(status_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Gray));
    f.render_widget(status_line, form_chunks[9]);

    let help_text = TextLine::from(vec![
        Span::styled(
            "ESC",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(": Back   "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" on Submit: Save"),
    ]);
    f.render_widget(
        Paragraph::new(help_text).alignment(Alignment::Center),
        form_chunks[10],
    );
}
