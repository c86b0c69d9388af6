use crate::session::picture::Picture;

/// Factor bounds. Values outside never reach the session: the spinner
/// widgets clamp and the config loader validates.
pub const MIN_FACTOR: u8 = 1;
pub const MAX_FACTOR: u8 = 12;

/// Where the session currently is. Derived from the flags, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// No problem committed yet.
    Idle,
    /// A problem is on display, not yet graded.
    Visualized,
    /// The current problem has been graded at least once.
    Checked,
}

/// Grading signal handed back to the host on every accepted submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Grading {
    Correct { equation: String },
    Incorrect { equation: String, correct: u32 },
}

impl Grading {
    pub fn is_correct(&self) -> bool {
        matches!(self, Grading::Correct { .. })
    }

    /// User-facing grading text.
    pub fn message(&self) -> String {
        match self {
            Grading::Correct { equation } => format!("정답입니다! {}", equation),
            Grading::Incorrect { equation, .. } => {
                format!("틀렸어요. 다시 시도해보세요. (힌트: {})", equation)
            }
        }
    }
}

/// All mutable state of one practice session.
///
/// `rows` and `cols` are only meaningful while `visualized` is set; they are
/// committed exclusively by [`SessionState::visualize`], so staged selector
/// changes on the host side never leak into a displayed problem.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionState {
    pub rows: u8,
    pub cols: u8,
    pub picture: Picture,
    pub visualized: bool,
    pub checked: bool,
    pub last_result: Option<bool>,
    pub user_answer: u32,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phase(&self) -> Phase {
        if self.checked {
            Phase::Checked
        } else if self.visualized {
            Phase::Visualized
        } else {
            Phase::Idle
        }
    }

    /// Product of the committed problem.
    pub fn product(&self) -> u32 {
        self.rows as u32 * self.cols as u32
    }

    pub fn equation(&self) -> String {
        format!("{} × {} = {}", self.rows, self.cols, self.product())
    }

    /// Change the picture token. Allowed in any phase; an already committed
    /// grid repaints with the new token but nothing else moves.
    pub fn select_picture(&mut self, picture: Picture) {
        self.picture = picture;
    }

    /// Commit a problem for display. Any prior grading is discarded.
    pub fn visualize(&mut self, rows: u8, cols: u8) {
        debug_assert!((MIN_FACTOR..=MAX_FACTOR).contains(&rows));
        debug_assert!((MIN_FACTOR..=MAX_FACTOR).contains(&cols));
        self.rows = rows;
        self.cols = cols;
        self.visualized = true;
        self.checked = false;
        self.last_result = None;
    }

    /// Grade an answer against the committed problem. Returns `None` (and
    /// leaves the state untouched) when nothing has been visualized yet;
    /// re-grading an already checked problem overwrites the prior result.
    pub fn submit_answer(&mut self, answer: u32) -> Option<Grading> {
        if !self.visualized {
            return None;
        }
        let correct = self.product();
        self.user_answer = answer;
        self.checked = true;
        let is_correct = answer == correct;
        self.last_result = Some(is_correct);
        let equation = self.equation();
        Some(if is_correct {
            Grading::Correct { equation }
        } else {
            Grading::Incorrect { equation, correct }
        })
    }

    /// Clear everything back to a fresh session.
    pub fn reset(&mut self) {
        *self = SessionState::default();
    }

    /// Row-major grid of identical tokens for the host to lay out; empty
    /// until a problem has been committed.
    pub fn grid(&self) -> Vec<Vec<Picture>> {
        if !self.visualized {
            return Vec::new();
        }
        vec![vec![self.picture; self.cols as usize]; self.rows as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_dimensions_all_factors() {
        for rows in MIN_FACTOR..=MAX_FACTOR {
            for cols in MIN_FACTOR..=MAX_FACTOR {
                let mut s = SessionState::new();
                s.visualize(rows, cols);
                let grid = s.grid();
                assert_eq!(grid.len(), rows as usize);
                assert!(grid.iter().all(|r| r.len() == cols as usize));
                assert_eq!(s.product(), rows as u32 * cols as u32);
            }
        }
    }

    #[test]
    fn test_visualize_discards_prior_grading() {
        let mut s = SessionState::new();
        s.visualize(2, 5);
        s.submit_answer(10);
        assert_eq!(s.phase(), Phase::Checked);

        s.visualize(7, 8);
        assert_eq!(s.phase(), Phase::Visualized);
        assert!(!s.checked);
        assert_eq!(s.last_result, None);
        assert_eq!((s.rows, s.cols), (7, 8));
    }

    #[test]
    fn test_correct_answer() {
        let mut s = SessionState::new();
        s.visualize(3, 4);
        assert_eq!(s.grid().iter().map(Vec::len).sum::<usize>(), 12);

        let grading = s.submit_answer(12).unwrap();
        assert!(grading.is_correct());
        assert_eq!(grading.message(), "정답입니다! 3 × 4 = 12");
        assert_eq!(s.last_result, Some(true));
        assert!(s.checked);
        assert_eq!(s.user_answer, 12);
    }

    #[test]
    fn test_incorrect_answer() {
        let mut s = SessionState::new();
        s.visualize(5, 6);
        let grading = s.submit_answer(20).unwrap();
        assert!(!grading.is_correct());
        assert!(grading.message().contains("5 × 6 = 30"));
        assert_eq!(grading, Grading::Incorrect { equation: "5 × 6 = 30".into(), correct: 30 });
        assert_eq!(s.last_result, Some(false));
        assert!(s.checked);
    }

    #[test]
    fn test_premature_submission_is_a_no_op() {
        let mut s = SessionState::new();
        let before = s.clone();
        assert_eq!(s.submit_answer(42), None);
        assert_eq!(s, before);
        assert_eq!(s.phase(), Phase::Idle);
    }

    #[test]
    fn test_regrading_overwrites() {
        let mut s = SessionState::new();
        s.visualize(4, 4);
        assert!(!s.submit_answer(15).unwrap().is_correct());
        assert_eq!(s.last_result, Some(false));

        assert!(s.submit_answer(16).unwrap().is_correct());
        assert_eq!(s.last_result, Some(true));
        assert_eq!(s.user_answer, 16);
        assert_eq!(s.phase(), Phase::Checked);
    }

    #[test]
    fn test_select_picture_touches_nothing_else() {
        let mut s = SessionState::new();
        s.visualize(6, 2);
        s.submit_answer(12);
        let before = s.clone();

        s.select_picture(Picture::Butterfly);
        assert_eq!(s.picture, Picture::Butterfly);
        assert_eq!((s.rows, s.cols), (before.rows, before.cols));
        assert_eq!(s.visualized, before.visualized);
        assert_eq!(s.checked, before.checked);
        assert_eq!(s.last_result, before.last_result);
        assert!(s.grid().iter().flatten().all(|p| *p == Picture::Butterfly));
    }

    #[test]
    fn test_reset_from_every_phase() {
        let mut idle = SessionState::new();
        idle.reset();
        assert_eq!(idle, SessionState::default());

        let mut checked = SessionState::new();
        checked.select_picture(Picture::Cat);
        checked.visualize(9, 9);
        checked.submit_answer(80);
        checked.reset();
        assert_eq!(checked, SessionState::default());
        assert_eq!(checked.phase(), Phase::Idle);
        assert!(checked.grid().is_empty());
    }
}
