//! # tqc
//!
//! TQC-135: a quinary block cipher for SMS-length messages, built on
//! arithmetic in the finite field GF(5^45).
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! tqc = "0.1"
//! ```
//!
//! Encrypt and decrypt one 135-digit block:
//!
//! ```
//! use tqc::prelude::*;
//!
//! let mut rng = rand::thread_rng();
//! let key = Tqc135::generate_key(&mut rng);
//! let cipher = Tqc135::new(&key).unwrap();
//!
//! let mut block = tqc::algorithms::codec::encode_str("Hello").unwrap();
//! let original = block;
//!
//! cipher.encrypt_block(&mut block).unwrap();
//! assert_ne!(block, original);
//!
//! cipher.decrypt_block(&mut block).unwrap();
//! assert_eq!(block, original);
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from the workspace
//! members:
//!
//! - [`tqc-algorithms`]: field arithmetic, the cipher, and the text codec
//! - [`tqc-params`]: the fixed constant tables
//!
//! [`tqc-algorithms`]: algorithms
//! [`tqc-params`]: params

#![cfg_attr(not(feature = "std"), no_std)]

pub use tqc_algorithms as algorithms;
pub use tqc_params as params;

/// Common imports for tqc users
pub mod prelude {
    pub use tqc_algorithms::block::{BlockCipher, CipherAlgorithm, Tqc135};
    pub use tqc_algorithms::types::QuinaryKey;
    pub use tqc_algorithms::{Error, Result};
}
