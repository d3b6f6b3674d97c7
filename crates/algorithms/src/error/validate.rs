//! Validation utilities for cipher and codec inputs

use params::field::FIELD_BASE;

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate that every digit is a base-5 digit
#[inline(always)]
pub fn digits(context: &'static str, digits: &[u8]) -> Result<()> {
    for (index, &value) in digits.iter().enumerate() {
        if value >= FIELD_BASE {
            return Err(Error::Digit {
                context,
                index,
                value,
            });
        }
    }
    Ok(())
}
