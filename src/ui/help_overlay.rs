use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

pub fn render(frame: &mut Frame, state: &AppState) {
    if !state.help_visible {
        return;
    }

    let area = frame.area();

    // Centered popup: 60% width, min 44x16
    let popup_w = (area.width * 60 / 100)
        .max(44)
        .min(area.width.saturating_sub(4));
    let popup_h = (area.height * 70 / 100)
        .max(16)
        .min(area.height.saturating_sub(2));
    let popup_x = (area.width.saturating_sub(popup_w)) / 2;
    let popup_y = (area.height.saturating_sub(popup_h)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_w, popup_h);

    frame.render_widget(Clear, popup_area);

    let block = Block::default()
        .title(" 도움말 — Esc로 닫기 ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type_focused())
        .border_style(Theme::border_focused())
        .padding(Padding::horizontal(1));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    for (keys, what) in [
        ("Tab / Shift+Tab", "패널 이동"),
        ("↑ / ↓, + / -", "숫자 조절 (1~12)"),
        ("← / →, 1~5", "그림 선택"),
        ("V 또는 Enter", "시각화"),
        ("숫자 입력 후 Enter", "정답 확인"),
        ("R", "초기화"),
        ("Q", "종료"),
    ] {
        lines.push(Line::from(vec![
            Span::styled(
                format!("  {:<20}", keys),
                Style::default()
                    .fg(Theme::ACCENT_TEAL)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(what, Style::default().fg(Theme::TEXT_SECONDARY)),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "학습 팁: 왜 이렇게 시각화하나요?",
        Theme::title(),
    )));
    lines.push(Line::from(Span::styled(
        "행×열로 배열을 그리면 곱셈이 덧셈의 반복임을 쉽게 이해할 수 있습니다.",
        Style::default().fg(Theme::TEXT_SECONDARY),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "사용법: 숫자를 선택 → 그림 선택 → 시각화 → 결과 입력 → 정답 확인",
        Theme::hint(),
    )));

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, popup_area);
}
