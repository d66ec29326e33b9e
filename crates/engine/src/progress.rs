// crates/engine/src/progress.rs
//! Progress reporting hooks.
//!
//! A reporter receives, in order: at most one `collecting()`, any number of
//! `update()` calls with a non-decreasing step, then exactly one `complete()`.

use crate::stats::ProgressState;

pub trait ProgressReporter {
    /// Candidate discovery started.
    fn collecting(&mut self) {}

    /// Candidate discovery finished (successfully or not).
    fn collected(&mut self, _found: usize) {}

    fn update(&mut self, state: &ProgressState);

    /// Clears any transient display. The summary is not the reporter's job.
    fn complete(&mut self, success: bool);
}

/// Reporter for runs without a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn update(&mut self, _state: &ProgressState) {}

    fn complete(&mut self, _success: bool) {}
}

/// Records every call; handy for tests and for callers that render later.
#[derive(Debug, Default, Clone)]
pub struct RecordingProgress {
    pub collecting: bool,
    pub found: Option<usize>,
    pub updates: Vec<ProgressState>,
    pub completed: Option<bool>,
}

impl ProgressReporter for RecordingProgress {
    fn collecting(&mut self) {
        self.collecting = true;
    }

    fn collected(&mut self, found: usize) {
        self.found = Some(found);
    }

    fn update(&mut self, state: &ProgressState) {
        self.updates.push(state.clone());
    }

    fn complete(&mut self, success: bool) {
        self.completed = Some(success);
    }
}
