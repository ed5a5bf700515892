//! FILENAME: tests/common/mod.rs
//! Shared assertions for calc-parser integration tests.

use calc_parser::{calculate, CalcError};

/// Tolerance for decimals that have no exact f64 representation.
pub const EPSILON: f64 = 1e-10;

/// Asserts that `input` evaluates to exactly `expected`.
pub fn assert_value(input: &str, expected: f64) {
    match calculate(input) {
        Ok(value) => assert_eq!(value, expected, "calculate({:?})", input),
        Err(e) => panic!("calculate({:?}) failed: {}", input, e),
    }
}

/// Asserts that `input` evaluates to within EPSILON of `expected`.
pub fn assert_close(input: &str, expected: f64) {
    match calculate(input) {
        Ok(value) => assert!(
            (value - expected).abs() < EPSILON,
            "calculate({:?}) = {}, expected about {}",
            input,
            value,
            expected
        ),
        Err(e) => panic!("calculate({:?}) failed: {}", input, e),
    }
}

/// Asserts that `input` is rejected and returns the error.
pub fn assert_rejected(input: &str) -> CalcError {
    match calculate(input) {
        Ok(value) => panic!("calculate({:?}) should fail, got {}", input, value),
        Err(e) => e,
    }
}
