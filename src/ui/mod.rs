mod confirm;
pub mod error;
mod quiz;
mod result;

use ratatui::{prelude::*, widgets::Block};

use crate::app::{App, View};

pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    frame.render_widget(Block::default().bg(Color::Reset), area);

    match app.view {
        View::Quiz => quiz::render(frame, area, app),
        View::ConfirmSubmit => {
            quiz::render(frame, area, app);
            confirm::render(frame, area, app);
        }
        View::Results => result::render(frame, area, app),
    }
}
