use labs_core::{ArithmeticError, CalculatorService};
use rstest::rstest;

#[rstest]
#[case(1, 2, 3)]
#[case(0, 0, 0)]
#[case(0, 9, 9)]
#[case(1_000_000, 2_500_000, 3_500_000)]
fn sum_adds_non_negative_operands(#[case] a: i64, #[case] b: i64, #[case] expected: i64) {
    assert_eq!(CalculatorService::new().sum(a, b), Ok(expected));
}

#[rstest]
#[case(-1, 2)]
#[case(2, -1)]
#[case(-3, -4)]
fn sum_rejects_negative_operands(#[case] a: i64, #[case] b: i64) {
    assert_eq!(
        CalculatorService::new().sum(a, b),
        Err(ArithmeticError::InvalidOperand)
    );
}

#[rstest]
#[case(5, 3, 2)]
#[case(3, 3, 0)]
#[case(10, 0, 10)]
fn difference_subtracts_when_ordered(
    #[case] minuend: i64,
    #[case] subtrahend: i64,
    #[case] expected: i64,
) {
    assert_eq!(
        CalculatorService::new().difference(minuend, subtrahend),
        Ok(expected)
    );
}

#[rstest]
#[case(-1, 3)]
#[case(3, -1)]
#[case(-5, -1)]
#[case(-1, 10)]
fn difference_rejects_negative_even_when_out_of_order(
    #[case] minuend: i64,
    #[case] subtrahend: i64,
) {
    assert_eq!(
        CalculatorService::new().difference(minuend, subtrahend),
        Err(ArithmeticError::InvalidOperand)
    );
}

#[rstest]
#[case(3, 5)]
#[case(0, 1)]
fn difference_rejects_minuend_below_subtrahend(#[case] minuend: i64, #[case] subtrahend: i64) {
    assert_eq!(
        CalculatorService::new().difference(minuend, subtrahend),
        Err(ArithmeticError::InvalidOrder)
    );
}

#[test]
fn errors_carry_original_messages() {
    assert_eq!(
        ArithmeticError::InvalidOperand.to_string(),
        "No se permiten números negativos"
    );
    assert_eq!(
        ArithmeticError::InvalidOrder.to_string(),
        "El minuendo debe ser mayor o igual al sustraendo"
    );
}
