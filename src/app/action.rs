use crate::session::Grading;

#[derive(Debug)]
pub enum Action {
    /// Surface a grading outcome: feedback line, bell and celebration on success.
    Announce(Grading),
    Quit,
}
