use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Clear, Padding, Paragraph},
};

use crate::app::App;

/// Confirmation popup shown when submitting with unanswered questions.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let popup = centered(area, 52, 9);
    frame.render_widget(Clear, popup);

    let unanswered = app.session().unanswered_count();
    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "SUBMIT QUIZ?",
            Style::default().fg(Color::Yellow).bold(),
        )),
        Line::from(""),
        Line::from(format!("{} question(s) still unanswered.", unanswered).fg(Color::Gray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("ENTER", Style::default().fg(Color::Green).bold()),
            Span::raw(" submit anyway    "),
            Span::styled("ESC", Style::default().fg(Color::Cyan).bold()),
            Span::raw(" continue quiz"),
        ]),
    ];

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Color::Yellow)
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(widget, popup);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let vertical = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(height),
        Constraint::Fill(1),
    ])
    .split(area);
    Layout::horizontal([
        Constraint::Fill(1),
        Constraint::Length(width),
        Constraint::Fill(1),
    ])
    .split(vertical[1])[1]
}
