//! Arithmetic in the extension field GF(5^45)
//!
//! Elements are polynomials of degree < 45 over GF(5), stored as 45 mod-5
//! coefficients with index `i` holding the coefficient of x^i. Every
//! operation returns a reduced element; products are computed in a 90-digit
//! working buffer and reduced modulo the fixed irreducible modulus from
//! [`params::field`] before they leave this module.
//!
//! Inversion uses the identity 1/p = q / (-r), where dividing the field
//! modulus by `p` yields quotient `q` and remainder `r`, applied iteratively
//! until the running divisor degenerates to a nonzero constant. The loop is
//! bounded by the field degree.

use params::field::{ELEMENT_DIGITS, FIELD_BASE, FIELD_DEGREE, FIELD_MODULUS, GF5_INVERSE};

use crate::error::{validate, Error, Result};

/// Width of the working buffers holding unreduced products and dividends.
const WIDE_DIGITS: usize = 2 * FIELD_DEGREE;

/// The field modulus widened to the working-buffer size.
const MODULUS_WIDE: [u8; WIDE_DIGITS] = {
    let mut wide = [0u8; WIDE_DIGITS];
    let mut i = 0;
    while i <= FIELD_DEGREE {
        wide[i] = FIELD_MODULUS[i];
        i += 1;
    }
    wide
};

/// An element of GF(5^45): a polynomial of degree < 45 over GF(5).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldElement {
    digits: [u8; ELEMENT_DIGITS],
}

impl FieldElement {
    /// The additive identity.
    pub const ZERO: Self = Self {
        digits: [0; ELEMENT_DIGITS],
    };

    /// The multiplicative identity.
    pub const ONE: Self = {
        let mut digits = [0u8; ELEMENT_DIGITS];
        digits[0] = 1;
        Self { digits }
    };

    /// Creates an element from 45 coefficients, rejecting digits outside
    /// the base-5 range.
    pub fn new(digits: [u8; ELEMENT_DIGITS]) -> Result<Self> {
        validate::digits("field element", &digits)?;
        Ok(Self { digits })
    }

    /// Creates an element from a slice of exactly 45 base-5 digits.
    pub fn from_slice(digits: &[u8]) -> Result<Self> {
        validate::length("field element", digits.len(), ELEMENT_DIGITS)?;
        validate::digits("field element", digits)?;
        let mut owned = [0u8; ELEMENT_DIGITS];
        owned.copy_from_slice(digits);
        Ok(Self { digits: owned })
    }

    /// Wraps coefficients that are already known to be reduced base-5
    /// digits, e.g. slices of a validated cipher state.
    pub(crate) fn from_reduced(digits: [u8; ELEMENT_DIGITS]) -> Self {
        debug_assert!(digits.iter().all(|&d| d < FIELD_BASE));
        Self { digits }
    }

    /// The coefficient array, index `i` holding the coefficient of x^i.
    pub fn digits(&self) -> &[u8; ELEMENT_DIGITS] {
        &self.digits
    }

    /// Index of the highest nonzero coefficient; 0 for constants and for
    /// the zero element.
    pub fn degree(&self) -> usize {
        degree_of(&self.digits)
    }

    /// Whether this is the zero element.
    pub fn is_zero(&self) -> bool {
        self.digits.iter().all(|&d| d == 0)
    }

    /// Coefficient-wise addition mod 5.
    pub fn add(&self, other: &Self) -> Self {
        let mut digits = [0u8; ELEMENT_DIGITS];
        for (i, digit) in digits.iter_mut().enumerate() {
            *digit = (self.digits[i] + other.digits[i]) % FIELD_BASE;
        }
        Self { digits }
    }

    /// Coefficient-wise subtraction mod 5.
    pub fn sub(&self, other: &Self) -> Self {
        let mut digits = [0u8; ELEMENT_DIGITS];
        for (i, digit) in digits.iter_mut().enumerate() {
            *digit = (self.digits[i] + FIELD_BASE - other.digits[i]) % FIELD_BASE;
        }
        Self { digits }
    }

    /// The additive inverse: coefficient-wise negation mod 5.
    pub fn neg(&self) -> Self {
        let mut digits = [0u8; ELEMENT_DIGITS];
        for (i, digit) in digits.iter_mut().enumerate() {
            *digit = (FIELD_BASE - self.digits[i]) % FIELD_BASE;
        }
        Self { digits }
    }

    /// Field multiplication: convolution of the coefficient sequences
    /// followed by reduction modulo the field modulus.
    pub fn mul(&self, other: &Self) -> Result<Self> {
        let mut product = [0u8; WIDE_DIGITS];
        for i in 0..ELEMENT_DIGITS {
            if self.digits[i] == 0 {
                continue;
            }
            for j in 0..ELEMENT_DIGITS {
                product[i + j] = (product[i + j] + self.digits[i] * other.digits[j]) % FIELD_BASE;
            }
        }

        let (_, remainder) = divmod(&product, &MODULUS_WIDE)?;
        debug_assert!(degree_of(&remainder) < FIELD_DEGREE);
        Ok(Self::from_reduced(narrow(&remainder)))
    }

    /// The multiplicative inverse.
    ///
    /// Fails with [`Error::ZeroInverse`] for the zero element. A nonzero
    /// constant is inverted by table lookup; for every other element the
    /// quotient/remainder identity above is applied until the divisor
    /// drops to a nonzero constant, accumulating the quotients into the
    /// result. A zero divisor along the way would mean the modulus is
    /// reducible and fails hard with [`Error::ReductionFailure`].
    pub fn inverse(&self) -> Result<Self> {
        if self.is_zero() {
            return Err(Error::ZeroInverse {
                context: "field inversion",
            });
        }
        if self.degree() == 0 {
            let mut digits = [0u8; ELEMENT_DIGITS];
            digits[0] = GF5_INVERSE[self.digits[0] as usize];
            return Ok(Self::from_reduced(digits));
        }

        let mut acc = Self::ONE;
        let mut divisor = widen(&self.digits);
        loop {
            let (quotient, remainder) = divmod(&MODULUS_WIDE, &divisor)?;
            debug_assert!(degree_of(&quotient) < FIELD_DEGREE);
            acc = acc.mul(&Self::from_reduced(narrow(&quotient)))?;

            divisor = negate_wide(&remainder);
            if degree_of(&divisor) == 0 {
                let constant = divisor[0];
                if constant == 0 {
                    return Err(Error::ReductionFailure {
                        operation: "field inversion",
                    });
                }
                let mut scale = [0u8; ELEMENT_DIGITS];
                scale[0] = GF5_INVERSE[constant as usize];
                return acc.mul(&Self::from_reduced(scale));
            }
        }
    }
}

/// Index of the highest nonzero coefficient, or 0 when there is none.
fn degree_of(digits: &[u8]) -> usize {
    for (index, &digit) in digits.iter().enumerate().rev() {
        if digit != 0 {
            return index;
        }
    }
    0
}

/// Copies an element into a zero-padded working buffer.
fn widen(digits: &[u8; ELEMENT_DIGITS]) -> [u8; WIDE_DIGITS] {
    let mut wide = [0u8; WIDE_DIGITS];
    wide[..ELEMENT_DIGITS].copy_from_slice(digits);
    wide
}

/// Truncates a reduced working buffer back to element width.
fn narrow(wide: &[u8; WIDE_DIGITS]) -> [u8; ELEMENT_DIGITS] {
    debug_assert!(wide[ELEMENT_DIGITS..].iter().all(|&d| d == 0));
    let mut digits = [0u8; ELEMENT_DIGITS];
    digits.copy_from_slice(&wide[..ELEMENT_DIGITS]);
    digits
}

/// Coefficient-wise negation of a working buffer.
fn negate_wide(wide: &[u8; WIDE_DIGITS]) -> [u8; WIDE_DIGITS] {
    let mut negated = [0u8; WIDE_DIGITS];
    for (i, digit) in negated.iter_mut().enumerate() {
        *digit = (FIELD_BASE - wide[i]) % FIELD_BASE;
    }
    negated
}

/// Polynomial long division over GF(5): returns `(quotient, remainder)`
/// with `dividend = divisor * quotient + remainder` and
/// `degree(remainder) < degree(divisor)`.
///
/// Reaching the zero polynomial while the loop condition still demands
/// reduction means the divisor cannot cancel the remainder's leading term;
/// that is reported as a [`Error::ReductionFailure`], never ignored.
fn divmod(
    dividend: &[u8; WIDE_DIGITS],
    divisor: &[u8; WIDE_DIGITS],
) -> Result<([u8; WIDE_DIGITS], [u8; WIDE_DIGITS])> {
    let mut quotient = [0u8; WIDE_DIGITS];
    let mut remainder = *dividend;
    let divisor_degree = degree_of(divisor);
    if divisor_degree == 0 && divisor[0] == 0 {
        return Err(Error::param("divisor", "division by the zero polynomial"));
    }
    let leading_inverse = GF5_INVERSE[divisor[divisor_degree] as usize];

    loop {
        let remainder_degree = degree_of(&remainder);
        if remainder_degree < divisor_degree {
            break;
        }
        if remainder_degree == 0 && remainder[0] == 0 {
            return Err(Error::ReductionFailure {
                operation: "long division",
            });
        }

        // Scale factor that cancels the remainder's leading coefficient
        // against a copy of the divisor shifted up by `shift` positions.
        let shift = remainder_degree - divisor_degree;
        let factor = (leading_inverse * remainder[remainder_degree]) % FIELD_BASE;
        quotient[shift] = (quotient[shift] + factor) % FIELD_BASE;
        for i in 0..=divisor_degree {
            let scaled = (divisor[i] * factor) % FIELD_BASE;
            remainder[i + shift] = (remainder[i + shift] + FIELD_BASE - scaled) % FIELD_BASE;
        }
    }

    Ok((quotient, remainder))
}
