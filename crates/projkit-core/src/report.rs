//! Progress reporting seam between the workflow and the terminal

use crate::scaffold::Stage;

/// Receives progress from the workflow
pub trait Reporter {
    /// A stage is starting
    fn stage(&self, stage: Stage);

    /// A conditional stage does not apply to this project
    fn skipped(&self, stage: Stage, reason: &str) {
        self.info(&format!("{} skipped: {}", stage, reason));
    }

    fn info(&self, message: &str);

    fn warn(&self, message: &str);

    fn success(&self, message: &str);
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentReporter;

impl Reporter for SilentReporter {
    fn stage(&self, _stage: Stage) {}
    fn skipped(&self, _stage: Stage, _reason: &str) {}
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn success(&self, _message: &str) {}
}
