//! Key material types with guaranteed zeroization

use core::fmt;

use rand::{CryptoRng, Rng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

use params::cipher::BLOCK_DIGITS;
use params::field::FIELD_BASE;

use crate::error::{validate, Result};

/// A TQC-135 key: 135 validated base-5 digits, zeroized on drop.
///
/// The digits are never printed; `Debug` output is redacted.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct QuinaryKey {
    digits: [u8; BLOCK_DIGITS],
}

impl QuinaryKey {
    /// Creates a key from 135 digits, rejecting values outside {0..4}.
    pub fn new(digits: [u8; BLOCK_DIGITS]) -> Result<Self> {
        validate::digits("TQC-135 key", &digits)?;
        Ok(Self { digits })
    }

    /// Creates a key from a slice of exactly 135 base-5 digits.
    pub fn from_slice(digits: &[u8]) -> Result<Self> {
        validate::length("TQC-135 key", digits.len(), BLOCK_DIGITS)?;
        validate::digits("TQC-135 key", digits)?;
        let mut owned = [0u8; BLOCK_DIGITS];
        owned.copy_from_slice(digits);
        Ok(Self { digits: owned })
    }

    /// Generates a key of uniformly random base-5 digits.
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut digits = [0u8; BLOCK_DIGITS];
        for digit in digits.iter_mut() {
            *digit = rng.gen_range(0..FIELD_BASE);
        }
        Self { digits }
    }

    /// The key digits.
    pub(crate) fn digits(&self) -> &[u8; BLOCK_DIGITS] {
        &self.digits
    }
}

impl fmt::Debug for QuinaryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "QuinaryKey([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::format;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn new_rejects_invalid_digits() {
        let mut digits = [0u8; BLOCK_DIGITS];
        digits[134] = 7;
        assert!(matches!(
            QuinaryKey::new(digits),
            Err(Error::Digit {
                index: 134,
                value: 7,
                ..
            })
        ));
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(matches!(
            QuinaryKey::from_slice(&[1, 2, 3]),
            Err(Error::Length { .. })
        ));
    }

    #[test]
    fn generate_stays_in_range() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let key = QuinaryKey::generate(&mut rng);
        assert!(key.digits().iter().all(|&d| d < FIELD_BASE));
    }

    #[test]
    fn debug_is_redacted() {
        let key = QuinaryKey::new([0; BLOCK_DIGITS]).unwrap();
        assert_eq!(format!("{:?}", key), "QuinaryKey([REDACTED])");
    }
}
