//! Practice session logic: the multiplication problem state machine.
//!
//! Everything in here is independent of the terminal UI. The host owns one
//! `SessionState` per run, feeds user events into its transition methods,
//! and renders from the returned snapshots and `Grading` signals.

pub mod picture;
pub mod state;

pub use picture::Picture;
pub use state::{Grading, Phase, SessionState, MAX_FACTOR, MIN_FACTOR};
