//! Test doubles for the runner and the reporter

use crate::error::ExecutionError;
use crate::report::Reporter;
use crate::runner::{CommandRunner, Invocation};
use crate::scaffold::Stage;
use std::cell::RefCell;
use std::collections::HashMap;

/// Records every invocation and answers from canned responses.
///
/// Responses are keyed by the invocation's command line. Anything without a
/// canned response succeeds with empty output.
#[derive(Default)]
pub struct RecordingRunner {
    pub calls: RefCell<Vec<Invocation>>,
    outputs: HashMap<String, String>,
    failures: HashMap<String, String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `command_line` print `stdout` when captured
    pub fn with_output(mut self, command_line: &str, stdout: &str) -> Self {
        self.outputs
            .insert(command_line.to_string(), stdout.to_string());
        self
    }

    /// Make `command_line` exit non-zero with `stderr`
    pub fn with_failure(mut self, command_line: &str, stderr: &str) -> Self {
        self.failures
            .insert(command_line.to_string(), stderr.to_string());
        self
    }

    pub fn command_lines(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(Invocation::command_line)
            .collect()
    }

    fn answer(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        self.calls.borrow_mut().push(invocation.clone());
        let line = invocation.command_line();
        if let Some(stderr) = self.failures.get(&line) {
            return Err(ExecutionError::new(
                invocation.failure_message.clone(),
                stderr.clone(),
            ));
        }
        Ok(self.outputs.get(&line).cloned().unwrap_or_default())
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, invocation: &Invocation) -> Result<(), ExecutionError> {
        self.answer(invocation).map(|_| ())
    }

    fn capture(&self, invocation: &Invocation) -> Result<String, ExecutionError> {
        self.answer(invocation)
    }
}

/// Keeps every event, for assertions
#[derive(Debug, Default)]
pub struct MemoryReporter {
    pub stages: RefCell<Vec<Stage>>,
    pub skipped: RefCell<Vec<Stage>>,
    pub messages: RefCell<Vec<String>>,
    pub warnings: RefCell<Vec<String>>,
}

impl Reporter for MemoryReporter {
    fn stage(&self, stage: Stage) {
        self.stages.borrow_mut().push(stage);
    }

    fn skipped(&self, stage: Stage, reason: &str) {
        self.skipped.borrow_mut().push(stage);
        self.messages.borrow_mut().push(reason.to_string());
    }

    fn info(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }

    fn warn(&self, message: &str) {
        self.warnings.borrow_mut().push(message.to_string());
    }

    fn success(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
