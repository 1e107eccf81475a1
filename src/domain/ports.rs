use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

/// A self-contained scenario: compute a report, then render it.
pub trait Demo {
    type Report: Serialize;

    fn name(&self) -> &'static str;

    /// Runs the computations. Recoverable failures are captured in the report.
    fn execute(&self) -> Self::Report;

    /// Human-readable rendering; recovered errors go to `err`.
    fn render_text(
        &self,
        report: &Self::Report,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()>;

    /// Messages for errors that were recovered during `execute`.
    fn recovered_errors(&self, _report: &Self::Report) -> Vec<String> {
        Vec::new()
    }
}
