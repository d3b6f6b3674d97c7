use super::*;

use alloc::format;

#[test]
fn display_length() {
    let err = Error::Length {
        context: "TQC-135 block",
        expected: 135,
        actual: 16,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid length for TQC-135 block: expected 135, got 16"
    );
}

#[test]
fn display_digit() {
    let err = Error::Digit {
        context: "TQC-135 key",
        index: 7,
        value: 9,
    };
    assert_eq!(
        format!("{}", err),
        "Invalid digit in TQC-135 key: value 9 at position 7 is not in 0..=4"
    );
}

#[test]
fn display_zero_inverse() {
    let err = Error::ZeroInverse {
        context: "field inversion",
    };
    assert_eq!(
        format!("{}", err),
        "Multiplicative inverse of zero requested in field inversion"
    );
}

#[test]
fn display_unsupported_symbol() {
    let err = Error::UnsupportedSymbol { symbol: '~' };
    assert_eq!(format!("{}", err), "Unsupported symbol '~'");
}

#[test]
fn param_shorthand() {
    let err = Error::param("rounds", "must be non-negative");
    assert!(matches!(err, Error::Parameter { name: "rounds", .. }));
}

#[test]
fn validate_length_accepts_match() {
    assert!(validate::length("block", 135, 135).is_ok());
}

#[test]
fn validate_digits_rejects_out_of_range() {
    let result = validate::digits("block", &[0, 1, 2, 5]);
    assert!(matches!(
        result,
        Err(Error::Digit {
            index: 3,
            value: 5,
            ..
        })
    ));
}

#[test]
fn error_equality() {
    assert_eq!(
        Error::UnsupportedSymbol { symbol: '^' },
        Error::UnsupportedSymbol { symbol: '^' }
    );
    assert_ne!(
        Error::ZeroInverse { context: "a" },
        Error::ZeroInverse { context: "b" }
    );
}
