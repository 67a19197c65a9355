use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Full-page blocking error for a failed roadmap/skill resolution.
/// The only action offered is returning.
pub fn render(frame: &mut Frame, message: &str) {
    let area = frame.area();
    let chunks = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(9),
        Constraint::Fill(1),
    ])
    .split(area);

    let content = vec![
        Line::from(""),
        Line::from(Span::styled(
            "QUIZ UNAVAILABLE",
            Style::default().fg(Color::Red).bold(),
        )),
        Line::from(""),
        Line::from(message.to_string().fg(Color::Gray)),
        Line::from(""),
        Line::from(vec![
            Span::styled("ENTER", Style::default().fg(Color::Green).bold()),
            Span::raw(" to return"),
        ]),
    ];

    let widget = Paragraph::new(content)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Color::Red),
        );
    frame.render_widget(widget, chunks[1]);
}
