//! Workflow progress rendered with cliclack

use crate::report::Reporter;
use crate::scaffold::{ScaffoldOutcome, Stage};
use anyhow::Result;
use colored::Colorize;

/// Prints each workflow event as a cliclack log line
#[derive(Debug, Default, Clone, Copy)]
pub struct ClackReporter;

// Output errors are not worth aborting a half-created project over
impl Reporter for ClackReporter {
    fn stage(&self, stage: Stage) {
        let _ = cliclack::log::step(stage.display_name());
    }

    fn skipped(&self, stage: Stage, reason: &str) {
        let _ = cliclack::log::remark(format!("{} skipped ({})", stage, reason));
    }

    fn info(&self, message: &str) {
        let _ = cliclack::log::info(message);
    }

    fn warn(&self, message: &str) {
        let _ = cliclack::log::warning(message);
    }

    fn success(&self, message: &str) {
        let _ = cliclack::log::success(message);
    }
}

pub fn intro(title: &str) -> Result<()> {
    cliclack::intro(title.on_cyan().black().to_string())?;
    Ok(())
}

/// Print the next steps of a finished project
pub fn print_next_steps(outcome: &ScaffoldOutcome) -> Result<()> {
    println!();
    println!("  {}", "Next steps".bold());
    println!();

    for (i, step) in outcome.next_steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step.cyan());
    }
    println!();

    Ok(())
}

pub fn finish(message: &str) -> Result<()> {
    cliclack::outro(message)?;
    Ok(())
}
