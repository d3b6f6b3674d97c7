//! Constants for the TQC-135 quinary block cipher.
//!
//! Every table the cipher depends on lives here as an immutable `const`:
//! the field modulus defining GF(5^45), the substitution offset GAMMA, the
//! key-schedule tap vector, the GF(5) inverse table, block geometry, and the
//! 125-symbol GSM alphabet used by the codec layer. Nothing in this crate is
//! ever computed or mutated at runtime.

#![no_std]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod cipher;
pub mod field;
pub mod gsm;
