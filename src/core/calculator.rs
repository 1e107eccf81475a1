use crate::utils::error::{DemoError, Result};

/// Stateless four-function calculator. Integer operations wrap on overflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct Calculator;

impl Calculator {
    pub fn new() -> Self {
        Self
    }

    pub fn add(&self, a: i32, b: i32) -> i32 {
        a.wrapping_add(b)
    }

    pub fn subtract(&self, a: i32, b: i32) -> i32 {
        a.wrapping_sub(b)
    }

    pub fn multiply(&self, a: i32, b: i32) -> i32 {
        a.wrapping_mul(b)
    }

    /// Fails with [`DemoError::DivisionByZero`] when `b` is zero (either sign).
    pub fn divide(&self, a: f64, b: f64) -> Result<f64> {
        if b == 0.0 {
            return Err(DemoError::DivisionByZero);
        }
        Ok(a / b)
    }
}
