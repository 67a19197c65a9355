use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Padding, Paragraph},
};

use crate::app::App;
use crate::score::{ScoreResult, Verdict};

const COURSE_BAR_WIDTH: usize = 20;
const PROMPT_PREVIEW_LENGTH: usize = 48;

pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let Some(result) = app.session().result() else {
        return;
    };

    let chunks = Layout::vertical([
        Constraint::Length(7),
        Constraint::Length(result.courses.len() as u16 + 2),
        Constraint::Fill(1),
        Constraint::Length(2),
    ])
    .margin(1)
    .split(area);

    render_summary(frame, chunks[0], result, app.save_notice());
    render_courses(frame, chunks[1], result);
    render_review(frame, chunks[2], result, app.result_scroll());
    render_controls(frame, chunks[3]);
}

fn grade_color(percent: f64) -> Color {
    match percent as u32 {
        90..=100 => Color::Green,
        70..=89 => Color::Cyan,
        50..=69 => Color::Yellow,
        _ => Color::Red,
    }
}

fn render_summary(frame: &mut Frame, area: Rect, result: &ScoreResult, notice: Option<&str>) {
    let mut content = vec![
        Line::from(Span::styled(
            if result.timed_out {
                "TIME UP — RESULTS"
            } else {
                "RESULTS"
            },
            Style::default().fg(Color::Cyan).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            format!("{:.0}%", result.percent),
            Style::default().fg(grade_color(result.percent)).bold(),
        )),
        Line::from(
            format!(
                "{} correct · {} incorrect · {} unattempted",
                result.correct, result.incorrect, result.unattempted
            )
            .fg(Color::Gray),
        ),
    ];
    if let Some(notice) = notice {
        content.push(Line::from(Span::styled(
            notice.to_string(),
            Style::default().fg(Color::Red),
        )));
    }

    let widget = Paragraph::new(content).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Color::DarkGray),
    );
    frame.render_widget(widget, area);
}

fn render_courses(frame: &mut Frame, area: Rect, result: &ScoreResult) {
    let lines: Vec<Line> = result
        .courses
        .iter()
        .map(|course| {
            let filled = if course.total > 0 {
                course.correct * COURSE_BAR_WIDTH / course.total
            } else {
                0
            };
            let bar = format!(
                "{}{}",
                "█".repeat(filled),
                "░".repeat(COURSE_BAR_WIDTH - filled)
            );
            Line::from(vec![
                Span::styled(format!("{:<12}", course.course), Style::default().fg(Color::White)),
                Span::styled(bar, Style::default().fg(Color::Cyan)),
                Span::styled(
                    format!("  {}/{}", course.correct, course.total),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        })
        .collect();

    let widget = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
    frame.render_widget(widget, area);
}

fn render_review(frame: &mut Frame, area: Rect, result: &ScoreResult, scroll: usize) {
    let mut lines: Vec<Line> = Vec::with_capacity(result.reviews.len() * 2);

    for review in &result.reviews {
        let (symbol, color) = match review.verdict {
            Verdict::Correct => ("+", Color::Green),
            Verdict::Incorrect => ("-", Color::Red),
            Verdict::Unattempted => ("·", Color::DarkGray),
        };

        lines.push(Line::from(vec![
            Span::styled(format!(" {} ", symbol), Style::default().fg(color)),
            Span::styled(
                format!("{:2}. ", review.question_id),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(truncate(&review.prompt), Style::default().fg(Color::Gray)),
        ]));

        let answer_line = match (&review.chosen_text, review.verdict) {
            (Some(chosen), Verdict::Correct) => format!("your answer: {chosen}"),
            (Some(chosen), _) => {
                format!("your answer: {chosen}  →  correct: {}", review.correct_text)
            }
            (None, _) => format!("unattempted  →  correct: {}", review.correct_text),
        };
        lines.push(Line::from(Span::styled(
            format!("       {answer_line}"),
            Style::default().fg(Color::DarkGray),
        )));
    }

    let widget = Paragraph::new(lines)
        .block(Block::default().padding(Padding::horizontal(1)))
        .scroll((scroll as u16 * 2, 0));
    frame.render_widget(widget, area);
}

fn truncate(text: &str) -> String {
    let char_count = text.chars().count();
    if char_count > PROMPT_PREVIEW_LENGTH {
        let truncated: String = text.chars().take(PROMPT_PREVIEW_LENGTH).collect();
        format!("{}...", truncated)
    } else {
        text.to_string()
    }
}

fn render_controls(frame: &mut Frame, area: Rect) {
    let widget = Paragraph::new("j/k scroll  ·  q quit")
        .alignment(Alignment::Center)
        .fg(Color::DarkGray);
    frame.render_widget(widget, area);
}
