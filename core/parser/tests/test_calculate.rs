//! FILENAME: tests/test_calculate.rs
//! Integration tests for the public calculate() entry point.

mod common;

use calc_parser::{calculate, CalcError};
use common::{assert_close, assert_rejected, assert_value};

// ============================================================================
// ADDITION AND SUBTRACTION
// ============================================================================

#[test]
fn test_basic_addition() {
    assert_value("1 + 2", 3.0);
    assert_value("0 + 0", 0.0);
    assert_value("10 + 20 + 30", 60.0);
    assert_value("123456 + 654321", 777777.0);
    assert_close("3.14 + 2.86", 6.0);
}

#[test]
fn test_basic_subtraction() {
    assert_value("100 - 50", 50.0);
    assert_value("1 - 100", -99.0);
    assert_value("100 - 20 - 30", 50.0);
    assert_value("5.5 - 2.5", 3.0);
    assert_close("1.1 - 0.1", 1.0);
}

#[test]
fn test_mixed_operations() {
    assert_value("5 + 3 - 2", 6.0);
    assert_value("1 + 2 - 3 + 4", 4.0);
    assert_value("1 - 2 + 3 - 4 + 5", 3.0);
    assert_value("10 + 5 - 3 + 2 - 1", 13.0);
    assert_value("10.25 - 3.75 + 2.5", 9.0);
    assert_close("5.5 + 2.3 - 1.8", 6.0);
    assert_close("1.5 + 2.7", 4.2);
}

#[test]
fn test_operations_with_zero() {
    assert_value("0 + 5", 5.0);
    assert_value("5 + 0", 5.0);
    assert_value("0 - 5", -5.0);
    assert_value("5 - 0", 5.0);
    assert_value("0 - 0", 0.0);
}

#[test]
fn test_left_associativity() {
    // (1 - 2) - 3, not 1 - (2 - 3)
    assert_value("1 - 2 - 3", -4.0);
    assert_value("7 - 5 - 1", 1.0);
    assert_value("10 - 5 + 2 - 3", 4.0);
}

#[test]
fn test_decimal_literals() {
    assert_value("1.0", 1.0);
    assert_value("0.5", 0.5);
    assert_value("999.999", 999.999);
    assert_value("0.0001", 0.0001);
    assert_value("1000000.123456", 1000000.123456);
}

#[test]
fn test_results_are_finite() {
    for input in ["1", "1 + 2", "10 - 5", "1 + 2 - 3", "5.5 + 4.5"] {
        let value = calculate(input).unwrap();
        assert!(value.is_finite(), "{:?}", input);
    }
}

#[test]
fn test_out_of_range_literals() {
    let huge = format!("1{}", "0".repeat(400));

    assert_value(&huge, f64::INFINITY);
    assert_value(&format!("{} + 1", huge), f64::INFINITY);
    assert!(calculate(&format!("{} - {}", huge, huge)).unwrap().is_nan());
    assert_value(&format!("1 + 0.{}1", "0".repeat(400)), 1.0);
}

// ============================================================================
// WHITESPACE
// ============================================================================

#[test]
fn test_whitespace_patterns() {
    for input in ["1+2", "1 +2", "1+ 2", "1  +  2", "  1 + 2  ", "\t  1 + 2\t  "] {
        assert_value(input, 3.0);
    }
    assert_value("5    -    3", 2.0);
    assert_value("10\t+\t5", 15.0);
}

// ============================================================================
// REJECTION
// ============================================================================

#[test]
fn test_rejects_invalid_characters() {
    for input in ["abc", "1 + abc", "a + b", "1 @ 2", "1 # 2", "1 $ 2", "1 & 2"] {
        let err = assert_rejected(input);
        assert!(matches!(err, CalcError::Lexical(_)), "{:?}: {}", input, err);
    }
}

#[test]
fn test_rejects_unsupported_operators() {
    for input in ["1 * 2", "1 / 2", "1 ^ 2", "1 % 2", "(1 + 2)"] {
        assert_eq!(assert_rejected(input).kind(), "lexical", "{:?}", input);
    }
}

#[test]
fn test_rejects_malformed_expressions() {
    for input in ["", "   ", "\t", "1 +", "+ 1", "- 5", "+", "-", "1 + + 2", "1 + - 2", "1 2"] {
        assert_eq!(assert_rejected(input).kind(), "syntax", "{:?}", input);
    }
}

#[test]
fn test_rejects_malformed_numbers() {
    for input in ["1.", ".5", "1.2.3", "\n"] {
        assert_eq!(assert_rejected(input).kind(), "lexical", "{:?}", input);
    }
}

// ============================================================================
// INDEPENDENCE OF CALLS
// ============================================================================

#[test]
fn test_each_call_is_independent() {
    assert_value("1 + 2", 3.0);
    assert_value("5 - 3", 2.0);

    assert_rejected("invalid");
    assert_value("2 + 2", 4.0);

    assert_rejected("1 +");
    assert_value("3 + 3", 6.0);
}

#[test]
fn test_concurrent_calls() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("{} + {} - 1", i, i);
                (calculate(&input).unwrap(), calculate("1 +").is_err())
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let (value, failed) = handle.join().unwrap();
        assert_eq!(value, (2 * i) as f64 - 1.0);
        assert!(failed);
    }
}
