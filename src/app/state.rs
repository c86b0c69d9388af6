use crate::config::AppConfig;
use crate::session::{SessionState, MAX_FACTOR, MIN_FACTOR};
use chrono::Local;

/// Celebration length on a correct answer, in UI ticks (50ms each).
const CELEBRATION_TICKS: u8 = 60;

/// Answers are at most three digits (12 × 12 = 144).
const MAX_ANSWER_DIGITS: usize = 3;

#[derive(Debug, Clone, PartialEq)]
pub enum FeedbackKind {
    System,
    Success,
    Error,
}

#[derive(Debug, Clone)]
pub struct FeedbackLine {
    pub timestamp: String,
    pub text: String,
    pub kind: FeedbackKind,
}

#[derive(Debug, Default)]
pub struct FeedbackLog {
    pub lines: Vec<FeedbackLine>,
    pub scroll_offset: usize,
}

impl FeedbackLog {
    pub fn add_line(&mut self, line: FeedbackLine, max_scrollback: usize) {
        self.lines.push(line);
        if self.lines.len() > max_scrollback {
            self.lines.remove(0);
            if self.scroll_offset > 0 {
                self.scroll_offset = self.scroll_offset.saturating_sub(1);
            }
        }
    }

    pub fn scroll_up(&mut self, amount: usize) {
        let max = self.lines.len().saturating_sub(1);
        self.scroll_offset = (self.scroll_offset + amount).min(max);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(amount);
    }
}

/// Digit-only line editor for the answer box.
#[derive(Debug, Default)]
pub struct AnswerInput {
    pub text: String,
    pub cursor: usize,
}

impl AnswerInput {
    pub fn insert_char(&mut self, c: char) {
        if !c.is_ascii_digit() || self.text.len() >= MAX_ANSWER_DIGITS {
            return;
        }
        self.text.insert(self.cursor, c);
        self.cursor += 1;
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Submitted value. An empty box grades as 0.
    pub fn value(&self) -> u32 {
        self.text.parse().unwrap_or(0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FocusPanel {
    Rows,
    Cols,
    Picture,
    Answer,
    Feedback,
}

pub struct AppState {
    pub config: AppConfig,
    pub session: SessionState,
    /// Staged factor selectors. Committed into the session only by visualize.
    pub rows_input: u8,
    pub cols_input: u8,
    pub answer: AnswerInput,
    pub feedback: FeedbackLog,
    pub focus: FocusPanel,
    pub help_visible: bool,
    pub should_quit: bool,
    pub dirty: bool,
    pub pending_bell: bool,
    pub tick_count: u64,
    pub celebration_ticks: u8,
    pub timestamp_format: String,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let timestamp_format = config.ui.timestamp_format.clone();
        let mut session = SessionState::new();
        session.select_picture(config.practice.default_picture);
        Self {
            rows_input: config.practice.default_rows,
            cols_input: config.practice.default_cols,
            config,
            session,
            answer: AnswerInput::default(),
            feedback: FeedbackLog::default(),
            focus: FocusPanel::Rows,
            help_visible: false,
            should_quit: false,
            dirty: true,
            pending_bell: false,
            tick_count: 0,
            celebration_ticks: 0,
            timestamp_format,
        }
    }

    pub fn adjust_rows(&mut self, delta: i8) {
        self.rows_input = step_factor(self.rows_input, delta);
        self.dirty = true;
    }

    pub fn adjust_cols(&mut self, delta: i8) {
        self.cols_input = step_factor(self.cols_input, delta);
        self.dirty = true;
    }

    /// The answer and feedback panels only join the cycle once a problem is
    /// on display; before that the submission control is not reachable.
    pub fn cycle_focus(&mut self) {
        self.focus = if self.session.visualized {
            match self.focus {
                FocusPanel::Rows => FocusPanel::Cols,
                FocusPanel::Cols => FocusPanel::Picture,
                FocusPanel::Picture => FocusPanel::Answer,
                FocusPanel::Answer => FocusPanel::Feedback,
                FocusPanel::Feedback => FocusPanel::Rows,
            }
        } else {
            match self.focus {
                FocusPanel::Rows => FocusPanel::Cols,
                FocusPanel::Cols => FocusPanel::Picture,
                _ => FocusPanel::Rows,
            }
        };
        self.dirty = true;
    }

    pub fn cycle_focus_back(&mut self) {
        self.focus = if self.session.visualized {
            match self.focus {
                FocusPanel::Rows => FocusPanel::Feedback,
                FocusPanel::Cols => FocusPanel::Rows,
                FocusPanel::Picture => FocusPanel::Cols,
                FocusPanel::Answer => FocusPanel::Picture,
                FocusPanel::Feedback => FocusPanel::Answer,
            }
        } else {
            match self.focus {
                FocusPanel::Rows => FocusPanel::Picture,
                FocusPanel::Cols => FocusPanel::Rows,
                _ => FocusPanel::Cols,
            }
        };
        self.dirty = true;
    }

    fn push_feedback(&mut self, text: String, kind: FeedbackKind) {
        let line = FeedbackLine {
            timestamp: Local::now().format(&self.timestamp_format).to_string(),
            text,
            kind,
        };
        let max = self.config.ui.max_scrollback;
        self.feedback.add_line(line, max);
        self.dirty = true;
    }

    pub fn system_message(&mut self, text: String) {
        self.push_feedback(text, FeedbackKind::System);
    }

    pub fn success_message(&mut self, text: String) {
        self.push_feedback(text, FeedbackKind::Success);
    }

    pub fn error_message(&mut self, text: String) {
        self.push_feedback(text, FeedbackKind::Error);
    }

    pub fn start_celebration(&mut self) {
        self.celebration_ticks = CELEBRATION_TICKS;
        self.dirty = true;
    }

    pub fn celebrating(&self) -> bool {
        self.celebration_ticks > 0
    }

    pub fn status_line(&self) -> String {
        use crate::session::Phase;
        match self.session.phase() {
            Phase::Idle => format!("준비: {} × {}", self.rows_input, self.cols_input),
            Phase::Visualized => {
                format!("문제: {} × {} = ?", self.session.rows, self.session.cols)
            }
            Phase::Checked => {
                let mark = if self.session.last_result == Some(true) { "정답" } else { "오답" };
                format!("{} ({})", self.session.equation(), mark)
            }
        }
    }
}

fn step_factor(value: u8, delta: i8) -> u8 {
    let stepped = value.saturating_add_signed(delta);
    stepped.clamp(MIN_FACTOR, MAX_FACTOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_input_digits_only() {
        let mut input = AnswerInput::default();
        input.insert_char('1');
        input.insert_char('x');
        input.insert_char('2');
        assert_eq!(input.text, "12");
        assert_eq!(input.value(), 12);

        input.insert_char('0');
        input.insert_char('9');
        assert_eq!(input.text, "120");

        input.delete_back();
        assert_eq!(input.value(), 12);
        input.clear();
        assert_eq!(input.value(), 0);
    }

    #[test]
    fn test_factor_stepping_clamps() {
        assert_eq!(step_factor(1, -1), 1);
        assert_eq!(step_factor(12, 1), 12);
        assert_eq!(step_factor(5, 1), 6);
        assert_eq!(step_factor(5, -1), 4);
    }

    #[test]
    fn test_focus_cycle_gated_on_visualization() {
        let mut state = AppState::new(AppConfig::default());
        assert_eq!(state.focus, FocusPanel::Rows);
        state.cycle_focus();
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Picture);
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Rows);

        state.session.visualize(3, 4);
        state.cycle_focus();
        state.cycle_focus();
        state.cycle_focus();
        assert_eq!(state.focus, FocusPanel::Answer);
        state.cycle_focus_back();
        assert_eq!(state.focus, FocusPanel::Picture);
    }
}
