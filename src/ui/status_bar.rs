use crate::app::state::{AppState, FocusPanel};
use crate::session::Phase;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    // Phase badge
    let (phase_text, phase_fg) = match state.session.phase() {
        Phase::Idle => ("대기", Color::Gray),
        Phase::Visualized => ("풀이 중", Color::Yellow),
        Phase::Checked => {
            if state.session.last_result == Some(true) {
                ("채점 완료", Color::Green)
            } else {
                ("채점 완료", Color::Red)
            }
        }
    };
    parts.push(Span::styled(
        format!(" [{}] ", phase_text),
        Style::default().fg(phase_fg).bg(Color::DarkGray),
    ));

    // Status text
    parts.push(Span::styled(
        format!(" {} ", state.status_line()),
        Theme::status_bar(),
    ));

    // Key hints
    parts.push(Span::styled(
        " Tab 이동 | V 시각화 | R 초기화 | ? 도움말 | Q 종료 ",
        Style::default().fg(Theme::TEXT_SECONDARY).bg(Color::DarkGray),
    ));

    // Focus indicator, right-aligned
    let focus_name = match state.focus {
        FocusPanel::Rows => "행",
        FocusPanel::Cols => "열",
        FocusPanel::Picture => "그림",
        FocusPanel::Answer => "정답",
        FocusPanel::Feedback => "기록",
    };
    let focus_text = format!(" [{}] ", focus_name);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + focus_text.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        focus_text,
        Style::default().fg(Color::Cyan).bg(Color::DarkGray),
    ));

    let line = Line::from(parts);
    let paragraph = Paragraph::new(line);
    frame.render_widget(paragraph, area);
}
