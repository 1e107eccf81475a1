use crate::core::Demo;
use crate::utils::error::Result;
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub struct DemoRunner<D: Demo> {
    demo: D,
    format: OutputFormat,
}

impl<D: Demo> DemoRunner<D> {
    pub fn new(demo: D) -> Self {
        Self {
            demo,
            format: OutputFormat::Text,
        }
    }

    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Executes the demo and writes its report. Errors recovered inside the
    /// demo are written to `err` and do not fail the run; only a broken
    /// writer does.
    pub fn run(&self, out: &mut dyn Write, err: &mut dyn Write) -> Result<D::Report> {
        tracing::info!("Starting demo: {}", self.demo.name());

        let report = self.demo.execute();

        match self.format {
            OutputFormat::Text => {
                tracing::debug!("Rendering text report");
                self.demo.render_text(&report, out, err)?;
            }
            OutputFormat::Json => {
                tracing::debug!("Rendering JSON report");
                serde_json::to_writer_pretty(&mut *out, &report)?;
                writeln!(out)?;
                for message in self.demo.recovered_errors(&report) {
                    writeln!(err, "Error: {}", message)?;
                }
            }
        }

        let recovered = self.demo.recovered_errors(&report).len();
        if recovered > 0 {
            tracing::warn!(
                "Demo {} recovered from {} error(s)",
                self.demo.name(),
                recovered
            );
        }
        tracing::info!("Demo {} finished", self.demo.name());

        Ok(report)
    }

    /// Convenience wrapper over [`run`](Self::run) using the process streams.
    pub fn run_to_stdio(&self) -> Result<D::Report> {
        let stdout = std::io::stdout();
        let stderr = std::io::stderr();
        let mut out = stdout.lock();
        let mut err = stderr.lock();
        let report = self.run(&mut out, &mut err)?;
        out.flush()?;
        Ok(report)
    }
}
