use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crate::session::picture;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyModifiers};
use tracing::debug;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    if state.celebration_ticks > 0 {
        state.celebration_ticks -= 1;
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Resize(_, _) => vec![],
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // Help overlay captures all input when visible
    if state.help_visible {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::F(1)
        ) {
            state.help_visible = false;
        }
        return vec![];
    }

    match key.code {
        KeyCode::F(1) | KeyCode::Char('?') => {
            state.help_visible = true;
            return vec![];
        }
        KeyCode::Tab => {
            state.cycle_focus();
            return vec![];
        }
        KeyCode::BackTab => {
            state.cycle_focus_back();
            return vec![];
        }
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char('r') => {
            reset_session(state);
            return vec![];
        }
        KeyCode::Char('v') => {
            visualize(state);
            return vec![];
        }
        _ => {}
    }

    match state.focus {
        FocusPanel::Rows => handle_spinner_key(state, key, true),
        FocusPanel::Cols => handle_spinner_key(state, key, false),
        FocusPanel::Picture => handle_picture_key(state, key),
        FocusPanel::Answer => handle_answer_key(state, key),
        FocusPanel::Feedback => handle_feedback_key(state, key),
    }
}

fn handle_spinner_key(state: &mut AppState, key: KeyEvent, rows: bool) -> Vec<Action> {
    let delta = match key.code {
        KeyCode::Up | KeyCode::Char('+') | KeyCode::Char('k') => 1,
        KeyCode::Down | KeyCode::Char('-') | KeyCode::Char('j') => -1,
        KeyCode::Enter => {
            visualize(state);
            return vec![];
        }
        _ => return vec![],
    };
    if rows {
        state.adjust_rows(delta);
    } else {
        state.adjust_cols(delta);
    }
    vec![]
}

fn handle_picture_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Left => {
            let prev = state.session.picture.prev();
            state.session.select_picture(prev);
        }
        KeyCode::Right => {
            let next = state.session.picture.next();
            state.session.select_picture(next);
        }
        // Direct selection, one key per token
        KeyCode::Char(c @ '1'..='5') => {
            let idx = c as usize - '1' as usize;
            state.session.select_picture(picture::ALL[idx]);
        }
        KeyCode::Enter => visualize(state),
        _ => {}
    }
    vec![]
}

fn handle_answer_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char(c) if c.is_ascii_digit() => state.answer.insert_char(c),
        KeyCode::Backspace => state.answer.delete_back(),
        KeyCode::Delete => state.answer.delete_forward(),
        KeyCode::Left => state.answer.move_left(),
        KeyCode::Right => state.answer.move_right(),
        KeyCode::Home => state.answer.move_home(),
        KeyCode::End => state.answer.move_end(),
        KeyCode::Enter => return submit_answer(state),
        _ => {}
    }
    vec![]
}

fn handle_feedback_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Up => state.feedback.scroll_up(1),
        KeyCode::Down => state.feedback.scroll_down(1),
        KeyCode::PageUp => state.feedback.scroll_up(10),
        KeyCode::PageDown => state.feedback.scroll_down(10),
        KeyCode::Home => state.feedback.scroll_up(usize::MAX / 2),
        KeyCode::End => state.feedback.scroll_offset = 0,
        _ => {}
    }
    vec![]
}

/// Commit the staged factors into the session and move focus to the answer box.
fn visualize(state: &mut AppState) {
    let (rows, cols) = (state.rows_input, state.cols_input);
    state.session.visualize(rows, cols);
    state.focus = FocusPanel::Answer;
    state.system_message(format!(
        "문제: {} × {} = ? — 그림을 보고 답을 입력하세요.",
        rows, cols
    ));
    debug!(rows, cols, picture = %state.session.picture, "problem visualized");
}

fn submit_answer(state: &mut AppState) -> Vec<Action> {
    let answer = state.answer.value();
    match state.session.submit_answer(answer) {
        Some(grading) => vec![Action::Announce(grading)],
        None => {
            debug!(answer, "answer submitted before visualization; ignored");
            vec![]
        }
    }
}

fn reset_session(state: &mut AppState) {
    state.session.reset();
    state.session.select_picture(state.config.practice.default_picture);
    state.rows_input = state.config.practice.default_rows;
    state.cols_input = state.config.practice.default_cols;
    state.answer.clear();
    state.feedback.lines.clear();
    state.feedback.scroll_offset = 0;
    state.celebration_ticks = 0;
    state.focus = FocusPanel::Rows;
    state.system_message("모든 학습 상태를 초기화했습니다.".to_string());
    debug!("session reset");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::session::{Grading, Phase, Picture};

    fn press(state: &mut AppState, code: KeyCode) -> Vec<Action> {
        let key = KeyEvent::new(code, KeyModifiers::NONE);
        handle_event(state, AppEvent::Terminal(CEvent::Key(key)))
    }

    fn new_state() -> AppState {
        AppState::new(AppConfig::default())
    }

    #[test]
    fn test_visualize_commits_staged_factors() {
        let mut state = new_state();
        state.adjust_rows(2); // 3 -> 5
        state.adjust_cols(-1); // 4 -> 3
        press(&mut state, KeyCode::Char('v'));

        assert_eq!(state.session.phase(), Phase::Visualized);
        assert_eq!((state.session.rows, state.session.cols), (5, 3));
        assert_eq!(state.focus, FocusPanel::Answer);

        // Staged changes after commit stay staged
        state.adjust_rows(1);
        assert_eq!(state.session.rows, 5);
    }

    #[test]
    fn test_typed_answer_is_graded() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('v')); // 3 × 4 by default
        press(&mut state, KeyCode::Char('1'));
        press(&mut state, KeyCode::Char('2'));
        let actions = press(&mut state, KeyCode::Enter);

        assert_eq!(actions.len(), 1);
        match &actions[0] {
            Action::Announce(grading) => {
                assert!(grading.is_correct());
                assert_eq!(grading.message(), "정답입니다! 3 × 4 = 12");
            }
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(state.session.phase(), Phase::Checked);
    }

    #[test]
    fn test_wrong_answer_announces_hint() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('v'));
        press(&mut state, KeyCode::Char('7'));
        let actions = press(&mut state, KeyCode::Enter);

        match &actions[0] {
            Action::Announce(Grading::Incorrect { correct, .. }) => assert_eq!(*correct, 12),
            other => panic!("unexpected action: {:?}", other),
        }
        assert_eq!(state.session.last_result, Some(false));
    }

    #[test]
    fn test_picture_keys() {
        let mut state = new_state();
        state.focus = FocusPanel::Picture;
        press(&mut state, KeyCode::Right);
        assert_eq!(state.session.picture, Picture::Star);
        press(&mut state, KeyCode::Char('5'));
        assert_eq!(state.session.picture, Picture::Butterfly);
        press(&mut state, KeyCode::Left);
        assert_eq!(state.session.picture, Picture::Ball);
    }

    #[test]
    fn test_reset_key_restores_defaults() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('v'));
        press(&mut state, KeyCode::Char('9'));
        press(&mut state, KeyCode::Enter);

        press(&mut state, KeyCode::Char('r'));
        assert_eq!(state.session.phase(), Phase::Idle);
        assert_eq!(state.rows_input, state.config.practice.default_rows);
        assert_eq!(state.cols_input, state.config.practice.default_cols);
        assert!(state.answer.text.is_empty());
        assert_eq!(state.focus, FocusPanel::Rows);
    }

    #[test]
    fn test_quit_keys() {
        let mut state = new_state();
        assert!(matches!(press(&mut state, KeyCode::Char('q'))[0], Action::Quit));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        let actions = handle_event(&mut state, AppEvent::Terminal(CEvent::Key(ctrl_c)));
        assert!(matches!(actions[0], Action::Quit));
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        let mut state = new_state();
        press(&mut state, KeyCode::Char('?'));
        assert!(state.help_visible);

        // Keys other than the close set are swallowed
        press(&mut state, KeyCode::Char('v'));
        assert_eq!(state.session.phase(), Phase::Idle);

        press(&mut state, KeyCode::Esc);
        assert!(!state.help_visible);
    }
}
