use crate::core::{Demo, Result, ValueHolder};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValueReport {
    pub value: i32,
    pub positive: bool,
}

pub struct ValueDemo {
    holder: ValueHolder,
}

impl ValueDemo {
    pub fn new(holder: ValueHolder) -> Self {
        Self { holder }
    }
}

impl Default for ValueDemo {
    fn default() -> Self {
        Self::new(ValueHolder::new(42))
    }
}

impl Demo for ValueDemo {
    type Report = ValueReport;

    fn name(&self) -> &'static str {
        "value_holder"
    }

    fn execute(&self) -> ValueReport {
        ValueReport {
            value: self.holder.value(),
            positive: self.holder.is_positive(),
        }
    }

    fn render_text(
        &self,
        report: &ValueReport,
        out: &mut dyn Write,
        _err: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "Value: {}", report.value)?;
        if report.positive {
            writeln!(out, "Positive value")?;
        } else {
            writeln!(out, "Non-positive value")?;
        }
        Ok(())
    }
}
