use crate::app::state::{AppState, FocusPanel};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = state.focus == FocusPanel::Answer;
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" 정답 입력 ")
        .title_style(if focused { Theme::title() } else { Theme::border() })
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // The submission control never appears before a problem is on display
    if !state.session.visualized {
        let paragraph =
            Paragraph::new(Span::styled("시각화 후 입력할 수 있습니다.", Theme::hint()));
        frame.render_widget(paragraph, inner);
        return;
    }

    let mut spans = vec![
        Span::styled("❯ ", Style::default().fg(Theme::ACCENT_TEAL)),
        Span::styled(state.answer.text.as_str(), Theme::input_text()),
    ];
    if state.session.checked {
        let mark = match state.session.last_result {
            Some(true) => Span::styled("  ✓ 정답", Theme::success_message()),
            _ => Span::styled("  ✗ 오답", Theme::error_message()),
        };
        spans.push(mark);
    }
    let paragraph = Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, inner);

    if focused {
        // Cursor offset: padding(1) + chevron "❯ " (2 chars)
        let prompt_offset = 2u16;
        let cursor_x = inner.x + prompt_offset + state.answer.cursor as u16;
        let cursor_y = inner.y;
        frame.set_cursor_position((cursor_x.min(inner.right().saturating_sub(1)), cursor_y));
    }
}
