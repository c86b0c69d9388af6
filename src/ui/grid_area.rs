use crate::app::state::AppState;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let block = Block::default()
        .title(" 시각화 ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if !state.session.visualized {
        render_idle(frame, inner);
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!("문제: {} × {} = ?", state.session.rows, state.session.cols),
        Theme::headline(),
    )));
    lines.push(Line::from(Span::styled(
        "아래 그림을 보며 곱셈의 의미(행 × 열)를 이해해보세요.",
        Theme::label(),
    )));
    lines.push(Line::from(""));

    // Emoji are two terminal cells wide; center each row by hand
    let emoji = state.session.picture.emoji();
    let token_width = emoji.width() + 1;
    for row in state.session.grid() {
        let row_width = row.len() * token_width;
        let pad = (inner.width as usize).saturating_sub(row_width) / 2;
        let mut text = " ".repeat(pad);
        for token in row {
            text.push_str(token.emoji());
            text.push(' ');
        }
        lines.push(Line::from(text));
    }

    if state.celebrating() {
        lines.push(Line::from(""));
        lines.push(celebration_line(inner.width, state.tick_count));
    }

    let paragraph = Paragraph::new(lines);
    frame.render_widget(paragraph, inner);
}

fn render_idle(frame: &mut Frame, inner: Rect) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "왼쪽에서 두 수를 고르고 V를 눌러 시작하세요.",
            Style::default().fg(Theme::TEXT_SECONDARY),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "그림이 행 × 열로 배열되어 곱셈 결과를 보여줍니다.",
            Theme::hint(),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

const CELEBRATION_TEXT: &str = "정답입니다!";

fn celebration_line(width: u16, tick: u64) -> Line<'static> {
    let text_width = CELEBRATION_TEXT.width();
    let pad = (width as usize).saturating_sub(text_width) / 2;
    let mut spans: Vec<Span> = vec![Span::raw(" ".repeat(pad))];
    let mut col = 0u16;
    for c in CELEBRATION_TEXT.chars() {
        spans.push(Span::styled(
            c.to_string(),
            Style::default()
                .fg(wave_color(col, tick))
                .add_modifier(Modifier::BOLD),
        ));
        col += c.to_string().width() as u16;
    }
    Line::from(spans)
}

fn wave_color(col: u16, tick: u64) -> Color {
    let gradient: [(f64, f64, f64); 5] = [
        (230.0, 180.0, 80.0),  // amber
        (90.0, 210.0, 130.0),  // green
        (80.0, 200.0, 210.0),  // teal
        (175.0, 140.0, 220.0), // lavender
        (220.0, 150.0, 180.0), // pink
    ];
    let len = gradient.len() as f64;
    let phase = (col as f64 * 0.3 - tick as f64 * 0.2).rem_euclid(len);
    let idx = phase.floor() as usize;
    let frac = phase - phase.floor();
    let (r1, g1, b1) = gradient[idx % gradient.len()];
    let (r2, g2, b2) = gradient[(idx + 1) % gradient.len()];
    Color::Rgb(
        (r1 + (r2 - r1) * frac) as u8,
        (g1 + (g2 - g1) * frac) as u8,
        (b1 + (b2 - b1) * frac) as u8,
    )
}
