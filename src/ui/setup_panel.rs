use crate::app::state::{AppState, FocusPanel};
use crate::session::picture;
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::block::Padding;
use ratatui::widgets::{Block, Borders, Paragraph};

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let focused = matches!(
        state.focus,
        FocusPanel::Rows | FocusPanel::Cols | FocusPanel::Picture
    );
    let (border_style, border_type) = if focused {
        (Theme::border_focused(), Theme::border_type_focused())
    } else {
        (Theme::border(), Theme::border_type())
    };

    let block = Block::default()
        .title(" 문제 설정 ")
        .title_style(Theme::title())
        .borders(Borders::ALL)
        .border_type(border_type)
        .border_style(border_style)
        .padding(Padding::horizontal(1));

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(""));
    lines.push(spinner_line(
        "첫 번째 수 (행)",
        state.rows_input,
        state.focus == FocusPanel::Rows,
    ));
    lines.push(Line::from(""));
    lines.push(spinner_line(
        "두 번째 수 (열)",
        state.cols_input,
        state.focus == FocusPanel::Cols,
    ));
    lines.push(Line::from(""));

    let picture_focused = state.focus == FocusPanel::Picture;
    lines.push(Line::from(Span::styled(
        "그림 선택 (1-5, ←/→)",
        if picture_focused {
            Theme::spinner_focused()
        } else {
            Theme::label()
        },
    )));

    // One token per cell, the selected one bracketed
    let mut token_spans: Vec<Span> = Vec::new();
    for pic in picture::ALL {
        let selected = pic == state.session.picture;
        let text = if selected {
            format!("[{}]", pic.emoji())
        } else {
            format!(" {} ", pic.emoji())
        };
        token_spans.push(Span::styled(
            text,
            if selected {
                Theme::picture_selected()
            } else {
                Style::default()
            },
        ));
    }
    lines.push(Line::from(token_spans));

    let selected = state.session.picture;
    lines.push(Line::from(vec![
        Span::styled("선택한 그림: ", Theme::label()),
        Span::styled(
            format!("{} {}", selected.label(), selected.emoji()),
            Theme::value(),
        ),
    ]));

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled("V 시각화   R 초기화", Theme::hint())));
    lines.push(Line::from(Span::styled("Tab 이동   ? 도움말", Theme::hint())));

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}

fn spinner_line(label: &str, value: u8, focused: bool) -> Line<'_> {
    let arrow_style = if focused { Theme::spinner_focused() } else { Theme::hint() };
    let value_style = if focused { Theme::spinner_focused() } else { Theme::value() };
    Line::from(vec![
        Span::styled(format!("{}  ", label), Theme::label()),
        Span::styled("◀ ", arrow_style),
        Span::styled(format!("{:>2}", value), value_style),
        Span::styled(" ▶", arrow_style),
    ])
}
