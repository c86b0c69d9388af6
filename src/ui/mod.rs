mod answer_box;
mod feedback;
mod grid_area;
mod help_overlay;
mod layout;
mod setup_panel;
mod status_bar;
mod theme;

use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let app_layout = layout::compute_layout(area);

    setup_panel::render(frame, app_layout.setup_panel, state);
    grid_area::render(frame, app_layout.grid_area, state);
    answer_box::render(frame, app_layout.answer_box, state);
    feedback::render(frame, app_layout.feedback, state);
    status_bar::render(frame, app_layout.status_bar, state);

    // Drawn last so it sits on top of everything
    help_overlay::render(frame, state);
}
