//! Cryptographic primitives for the TQC-135 quinary block cipher
//!
//! This crate implements the cipher core: arithmetic in the extension field
//! GF(5^45), the substitution-permutation round primitives, the nonlinear
//! key schedule, and the block cipher orchestrator, together with the
//! quinary text codec that sits in front of them. The library is designed to
//! be usable in both `std` and `no_std` environments.
//!
//! Encryption and decryption are exact algebraic inverses for every valid
//! block, key, and round count; all operations validate their inputs before
//! touching any state and report failures through [`Error`].

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result};

// Field arithmetic engine
pub mod gf;
pub use gf::FieldElement;

// Block cipher implementation
pub mod block;
pub use block::{BlockCipher, CipherAlgorithm, Tqc135};

// Quinary text codec
pub mod codec;

// Type system
pub mod types;
pub use types::QuinaryKey;
