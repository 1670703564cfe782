//! Operand guards for the two calculator operations.
//!
//! # Invariants
//! - Negativity is checked before ordering in `difference`.
//! - Results never wrap; an unrepresentable sum is reported as `Overflow`.

use thiserror::Error;

/// Failure kinds for arithmetic operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// At least one operand is negative.
    #[error("No se permiten números negativos")]
    InvalidOperand,
    /// Minuend is smaller than subtrahend.
    #[error("El minuendo debe ser mayor o igual al sustraendo")]
    InvalidOrder,
    /// Result does not fit in `i64`.
    #[error("el resultado excede el rango representable")]
    Overflow,
}

pub type ArithmeticResult = Result<i64, ArithmeticError>;

/// Adds two non-negative operands.
pub fn sum(a: i64, b: i64) -> ArithmeticResult {
    ensure_non_negative(a, b)?;
    a.checked_add(b).ok_or(ArithmeticError::Overflow)
}

/// Subtracts `subtrahend` from `minuend`.
///
/// Both operands must be non-negative and `minuend >= subtrahend`.
pub fn difference(minuend: i64, subtrahend: i64) -> ArithmeticResult {
    ensure_non_negative(minuend, subtrahend)?;
    if minuend < subtrahend {
        return Err(ArithmeticError::InvalidOrder);
    }
    Ok(minuend - subtrahend)
}

fn ensure_non_negative(a: i64, b: i64) -> Result<(), ArithmeticError> {
    if a < 0 || b < 0 {
        return Err(ArithmeticError::InvalidOperand);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{difference, sum, ArithmeticError};

    #[test]
    fn sum_rejects_overflow_instead_of_wrapping() {
        assert_eq!(sum(i64::MAX, 1), Err(ArithmeticError::Overflow));
        assert_eq!(sum(i64::MAX, 0), Ok(i64::MAX));
    }

    #[test]
    fn negativity_wins_over_ordering() {
        assert_eq!(difference(-1, 5), Err(ArithmeticError::InvalidOperand));
        assert_eq!(difference(3, -2), Err(ArithmeticError::InvalidOperand));
    }

    #[test]
    fn equal_operands_yield_zero() {
        assert_eq!(difference(7, 7), Ok(0));
    }
}
