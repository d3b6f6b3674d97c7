//! Constants for arithmetic in GF(5^45).

/// Characteristic of the base field GF(5).
pub const FIELD_BASE: u8 = 5;

/// Degree of the extension field GF(5^45).
pub const FIELD_DEGREE: usize = 45;

/// Number of digits in a field element (one mod-5 coefficient per degree).
pub const ELEMENT_DIGITS: usize = FIELD_DEGREE;

/// Multiplicative inverses in GF(5), indexed by element.
///
/// Index 0 is a placeholder; the zero element has no inverse and callers
/// must reject it before the lookup.
pub const GF5_INVERSE: [u8; 5] = [0, 1, 3, 2, 4];

/// The fixed monic irreducible polynomial of degree 45 over GF(5).
///
/// Coefficient `i` is the coefficient of x^i; index 45 holds the leading 1.
/// Reducing products modulo this polynomial realizes multiplication in
/// GF(5^45).
pub const FIELD_MODULUS: [u8; FIELD_DEGREE + 1] = [
    2, 2, 3, 4, 3, 3, 2, 2, 4, 4, 1, 0, 0, 4, 3, 1,
    3, 1, 4, 0, 2, 4, 2, 0, 1, 4, 2, 1, 0, 2, 1, 2,
    1, 2, 1, 4, 0, 1, 3, 1, 2, 2, 1, 0, 1, 1,
];
