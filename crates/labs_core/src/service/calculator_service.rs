//! Stateless calculator service over the arithmetic guards.

use crate::guard::arithmetic::{self, ArithmeticResult};
use log::debug;

/// Addition/subtraction with operand validation.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalculatorService;

impl CalculatorService {
    pub fn new() -> Self {
        Self
    }

    /// Sums two non-negative operands.
    pub fn sum(&self, a: i64, b: i64) -> ArithmeticResult {
        let result = arithmetic::sum(a, b);
        debug!(
            "event=calc_sum module=service status={}",
            status_label(&result)
        );
        result
    }

    /// Subtracts with negativity and ordering checks.
    pub fn difference(&self, minuend: i64, subtrahend: i64) -> ArithmeticResult {
        let result = arithmetic::difference(minuend, subtrahend);
        debug!(
            "event=calc_difference module=service status={}",
            status_label(&result)
        );
        result
    }
}

fn status_label(result: &ArithmeticResult) -> &'static str {
    if result.is_ok() {
        "ok"
    } else {
        "rejected"
    }
}
