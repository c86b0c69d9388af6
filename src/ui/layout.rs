use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct AppLayout {
    pub setup_panel: Rect,
    pub grid_area: Rect,
    pub answer_box: Rect,
    pub feedback: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Main vertical split: content | status bar
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(10),   // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let content = main_chunks[0];
    let status_bar = main_chunks[1];

    // Horizontal: setup panel | visualization column
    let h_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .spacing(1)
        .constraints([
            Constraint::Length(30), // Problem setup
            Constraint::Min(40),    // Grid, answer, feedback
        ])
        .split(content);

    let setup_panel = h_chunks[0];
    let right_panel = h_chunks[1];

    // Right column: grid | answer input | feedback log
    let right_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(9),    // Grid needs up to 12 rows
            Constraint::Length(3), // Answer input
            Constraint::Length(8), // Feedback
        ])
        .split(right_panel);

    let grid_area = right_chunks[0];
    let answer_box = right_chunks[1];
    let feedback = right_chunks[2];

    AppLayout {
        setup_panel,
        grid_area,
        answer_box,
        feedback,
        status_bar,
    }
}
