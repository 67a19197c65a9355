use ratatui::{
    prelude::*,
    widgets::{Gauge, Paragraph, Wrap},
};

use crate::app::App;
use crate::timer::TimePressure;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(4),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .margin(2)
    .split(area);

    render_header(frame, chunks[0], app);
    render_progress(frame, chunks[1], app);
    render_question_text(frame, chunks[3], &app.current_question().prompt);
    render_options(frame, chunks[4], app);
    render_controls(frame, chunks[5]);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::horizontal([Constraint::Fill(1), Constraint::Length(12)]).split(area);

    let position = format!(
        "Question {}/{}",
        app.cursor() + 1,
        app.session().total_questions()
    );
    let mut left_spans = vec![Span::styled(position, Style::default().fg(Color::DarkGray))];
    if app.used_fallback() {
        left_spans.push(Span::styled(
            "  ·  mixed-skill question set",
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(left_spans)), halves[0]);

    let timer = app.session().timer();
    let style = match timer.pressure() {
        TimePressure::Normal => Style::default().fg(Color::Gray),
        TimePressure::Warning => Style::default().fg(Color::Yellow).bold(),
        TimePressure::Critical => Style::default()
            .fg(Color::Red)
            .bold()
            .add_modifier(Modifier::SLOW_BLINK),
    };
    let widget = Paragraph::new(Span::styled(timer.display(), style)).alignment(Alignment::Right);
    frame.render_widget(widget, halves[1]);
}

fn render_progress(frame: &mut Frame, area: Rect, app: &App) {
    let session = app.session();
    let label = format!(
        "{}/{} answered",
        session.answered_count(),
        session.total_questions()
    );
    let widget = Gauge::default()
        .ratio(session.progress())
        .label(label)
        .gauge_style(Style::default().fg(Color::Cyan).bg(Color::DarkGray));
    frame.render_widget(widget, area);
}

fn render_question_text(frame: &mut Frame, area: Rect, prompt: &str) {
    let widget = Paragraph::new(prompt)
        .wrap(Wrap { trim: true })
        .fg(Color::White)
        .bold();
    frame.render_widget(widget, area);
}

fn render_options(frame: &mut Frame, area: Rect, app: &App) {
    let question = app.current_question();
    let answered_key = app.session().answer_for(question.id);
    let mut lines: Vec<Line> = Vec::with_capacity(question.options.len() * 2);

    for (index, option) in question.options.iter().enumerate() {
        let is_highlighted = index == app.highlighted();
        let is_answered = answered_key == Some(option.key.as_str());

        let style = if is_highlighted {
            Style::default().fg(Color::Cyan).bold()
        } else if is_answered {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::Gray)
        };
        let marker = if is_highlighted { ">" } else { " " };
        let answered_marker = if is_answered { "●" } else { " " };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} {} ", marker, answered_marker), style),
            Span::styled(format!("{}. ", option_label(index)), style),
            Span::styled(option.text.as_str(), style),
        ]));
        lines.push(Line::from(""));
    }

    frame.render_widget(Paragraph::new(lines), area);
}

fn option_label(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new(
        "j/k options  ·  h/l questions  ·  enter answer  ·  n next unanswered  ·  s submit  ·  q quit",
    )
    .alignment(Alignment::Center)
    .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
