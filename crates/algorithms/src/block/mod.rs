//! Block cipher traits and the TQC-135 implementation

use rand::{CryptoRng, RngCore};

use crate::error::Result;

pub mod tqc135;
pub use tqc135::{Tqc135, Tqc135Algorithm};

/// Type-level constants describing a block cipher algorithm.
pub trait CipherAlgorithm {
    /// Block size in quinary digits.
    const BLOCK_SIZE: usize;

    /// Key size in quinary digits.
    const KEY_SIZE: usize;

    /// Human-readable algorithm name.
    fn name() -> &'static str;
}

/// A block cipher operating in place on fixed-size digit blocks.
///
/// Implementations guarantee that `decrypt_block` is the exact inverse of
/// `encrypt_block` for the same instance, and that a failed call leaves the
/// block untouched.
pub trait BlockCipher: Sized {
    /// The algorithm this cipher implements.
    type Algorithm: CipherAlgorithm;

    /// The key type for this cipher.
    type Key;

    /// Creates a cipher instance from a key, deriving whatever round
    /// material the algorithm needs.
    fn new(key: &Self::Key) -> Result<Self>;

    /// Encrypts one block in place.
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Decrypts one block in place.
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()>;

    /// Generates a random key.
    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key;
}
