use crate::core::calculator::Calculator;
use crate::core::{Demo, Result};
use crate::domain::services;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DivisionOutcome {
    Value(f64),
    Error(String),
}

impl DivisionOutcome {
    fn from_result(result: Result<f64>) -> Self {
        match result {
            Ok(value) => DivisionOutcome::Value(value),
            Err(e) => {
                tracing::warn!("Division failed: {} ({})", e, e.recovery_suggestion());
                DivisionOutcome::Error(e.to_string())
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorReport {
    pub add: i32,
    pub subtract: i32,
    pub multiply: i32,
    pub divide: DivisionOutcome,
    pub divide_by_zero: DivisionOutcome,
    pub numbers: Vec<i32>,
    pub sum: i64,
}

pub struct CalculatorDemo {
    calc: Calculator,
    a: i32,
    b: i32,
    numbers: Vec<i32>,
}

impl CalculatorDemo {
    pub fn new(a: i32, b: i32, numbers: Vec<i32>) -> Self {
        Self {
            calc: Calculator::new(),
            a,
            b,
            numbers,
        }
    }
}

impl Default for CalculatorDemo {
    fn default() -> Self {
        Self::new(20, 10, vec![1, 2, 3, 4, 5])
    }
}

impl Demo for CalculatorDemo {
    type Report = CalculatorReport;

    fn name(&self) -> &'static str {
        "calculator"
    }

    fn execute(&self) -> CalculatorReport {
        let (a, b) = (self.a, self.b);
        CalculatorReport {
            add: self.calc.add(a, b),
            subtract: self.calc.subtract(a, b),
            multiply: self.calc.multiply(a, b),
            divide: DivisionOutcome::from_result(self.calc.divide(f64::from(a), f64::from(b))),
            divide_by_zero: DivisionOutcome::from_result(self.calc.divide(f64::from(a), 0.0)),
            numbers: self.numbers.clone(),
            sum: services::sum_indexed(&self.numbers),
        }
    }

    fn render_text(
        &self,
        report: &CalculatorReport,
        out: &mut dyn Write,
        err: &mut dyn Write,
    ) -> Result<()> {
        writeln!(out, "Add: {}", report.add)?;
        writeln!(out, "Subtract: {}", report.subtract)?;
        writeln!(out, "Multiply: {}", report.multiply)?;

        for (label, outcome) in [
            ("Divide", &report.divide),
            ("Divide by zero", &report.divide_by_zero),
        ] {
            match outcome {
                DivisionOutcome::Value(value) => writeln!(out, "{}: {}", label, value)?,
                DivisionOutcome::Error(message) => writeln!(err, "Error: {}", message)?,
            }
        }

        let numbers: Vec<String> = report.numbers.iter().map(i32::to_string).collect();
        writeln!(out, "Numbers: {}", numbers.join(" "))?;
        writeln!(out, "Sum: {}", report.sum)?;
        Ok(())
    }

    fn recovered_errors(&self, report: &CalculatorReport) -> Vec<String> {
        [&report.divide, &report.divide_by_zero]
            .into_iter()
            .filter_map(|outcome| match outcome {
                DivisionOutcome::Error(message) => Some(message.clone()),
                DivisionOutcome::Value(_) => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_report() {
        let report = CalculatorDemo::default().execute();
        assert_eq!(report.add, 30);
        assert_eq!(report.subtract, 10);
        assert_eq!(report.multiply, 200);
        assert_eq!(report.divide, DivisionOutcome::Value(2.0));
        assert_eq!(
            report.divide_by_zero,
            DivisionOutcome::Error("Division by zero!".to_string())
        );
        assert_eq!(report.sum, 15);
    }

    #[test]
    fn test_zero_b_fails_both_divisions() {
        let demo = CalculatorDemo::new(7, 0, vec![]);
        let report = demo.execute();
        assert_eq!(report.add, 7);
        assert_eq!(report.sum, 0);
        assert_eq!(demo.recovered_errors(&report).len(), 2);
    }
}
