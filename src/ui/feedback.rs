use crate::app::state::{AppState, FeedbackKind, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{
    Block, Borders, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState,
};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Feedback;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" 기록 ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = state.feedback.lines.len();
    let height = inner.height as usize;

    // Newest lines stick to the bottom; scroll_offset counts lines back from it
    let end = total.saturating_sub(state.feedback.scroll_offset);
    let start = end.saturating_sub(height);

    let lines: Vec<Line> = state.feedback.lines[start..end]
        .iter()
        .map(|fl| {
            let text_style = match fl.kind {
                FeedbackKind::System => Theme::system_message(),
                FeedbackKind::Success => Theme::success_message(),
                FeedbackKind::Error => Theme::error_message(),
            };
            Line::from(vec![
                Span::styled(fl.timestamp.clone(), Theme::timestamp()),
                Span::raw(" "),
                Span::styled(fl.text.clone(), text_style),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);

    if total > height {
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight);
        let mut scrollbar_state = ScrollbarState::new(total.saturating_sub(height)).position(start);
        frame.render_stateful_widget(scrollbar, inner, &mut scrollbar_state);
    }
}
