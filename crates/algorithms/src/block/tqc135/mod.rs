//! TQC-135 block cipher
//!
//! A substitution-permutation network over 135-digit quinary blocks. The
//! state is viewed as a 9x15 grid of sub-blocks (3 rows of 3 columns); each
//! round adds a round key digit-wise mod 5, substitutes every column by
//! inverting it in GF(5^45) and offsetting it with GAMMA, and rotates two
//! groups of sub-blocks. Round keys come from a nonlinear feedback register
//! driven by a fixed tap vector.
//!
//! Every instance precomputes its full round-key stream at construction, so
//! encryption and decryption consume identical keys by construction and
//! `decrypt_block(encrypt_block(m)) == m` holds for every valid block and
//! round count.

use zeroize::{Zeroize, ZeroizeOnDrop};

use alloc::vec::Vec;
use core::ops::Range;

use params::cipher::{
    BLOCK_DIGITS, DEFAULT_ROUNDS, GAMMA, KEY_SCHEDULE_PASSES, KEY_TAPS, STATE_COLS, STATE_ROWS,
    SUB_BLOCKS, SUB_BLOCK_DIGITS,
};
use params::field::{ELEMENT_DIGITS, FIELD_BASE};
use rand::{CryptoRng, RngCore};

use super::{BlockCipher, CipherAlgorithm};
use crate::error::{validate, Result};
use crate::gf::FieldElement;
use crate::types::QuinaryKey;

/// One cipher state or round key.
type State = [u8; BLOCK_DIGITS];

/// Forward sub-block permutation: destination `i` takes source `map[i]`.
/// Rotates {3,4,5} -> {4,5,3} and {6,7,8} -> {8,6,7}; the first row stays.
const SHIFT_ROWS: [usize; SUB_BLOCKS] = [0, 1, 2, 4, 5, 3, 8, 6, 7];

/// Inverse of [`SHIFT_ROWS`].
const SHIFT_ROWS_INV: [usize; SUB_BLOCKS] = [0, 1, 2, 5, 3, 4, 7, 8, 6];

/// Type-level constants for TQC-135
pub enum Tqc135Algorithm {}

impl CipherAlgorithm for Tqc135Algorithm {
    const BLOCK_SIZE: usize = BLOCK_DIGITS;
    const KEY_SIZE: usize = BLOCK_DIGITS;

    fn name() -> &'static str {
        "TQC-135"
    }
}

/// The derived round-key stream, zeroized on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
struct RoundKeys(Vec<State>);

/// TQC-135 block cipher
#[derive(Clone)]
pub struct Tqc135 {
    round_keys: RoundKeys,
    rounds: usize,
}

impl Tqc135 {
    /// Creates a cipher with the reference round count of 5.
    pub fn new(key: &QuinaryKey) -> Result<Self> {
        Self::with_rounds(key, DEFAULT_ROUNDS)
    }

    /// Creates a cipher with a custom round count.
    ///
    /// Derives the round-key stream k0..k_{rounds+1} up front; a cipher
    /// over `rounds` rounds consumes `rounds + 2` keys.
    pub fn with_rounds(key: &QuinaryKey, rounds: usize) -> Result<Self> {
        let mut keys: Vec<State> = Vec::with_capacity(rounds + 2);
        keys.push(*key.digits());
        while keys.len() < rounds + 2 {
            let next = next_key(&keys[keys.len() - 1])?;
            keys.push(next);
        }
        Ok(Self {
            round_keys: RoundKeys(keys),
            rounds,
        })
    }

    /// The round count this instance was built with.
    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

impl BlockCipher for Tqc135 {
    type Algorithm = Tqc135Algorithm;
    type Key = QuinaryKey;

    fn new(key: &Self::Key) -> Result<Self> {
        Tqc135::new(key)
    }

    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("TQC-135 block", block.len(), BLOCK_DIGITS)?;
        validate::digits("TQC-135 block", block)?;

        let mut state = [0u8; BLOCK_DIGITS];
        state.copy_from_slice(block);
        let keys = &self.round_keys.0;

        for key in &keys[..self.rounds] {
            add_round_key(&mut state, key);
            substitute_columns(&mut state)?;
            shift_rows(&mut state);
        }
        add_round_key(&mut state, &keys[self.rounds]);
        substitute_columns(&mut state)?;
        add_round_key(&mut state, &keys[self.rounds + 1]);

        block.copy_from_slice(&state);
        Ok(())
    }

    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("TQC-135 block", block.len(), BLOCK_DIGITS)?;
        validate::digits("TQC-135 block", block)?;

        let mut state = [0u8; BLOCK_DIGITS];
        state.copy_from_slice(block);
        let keys = &self.round_keys.0;

        add_round_key_inv(&mut state, &keys[self.rounds + 1]);
        substitute_columns_inv(&mut state)?;
        add_round_key_inv(&mut state, &keys[self.rounds]);
        for key in keys[..self.rounds].iter().rev() {
            shift_rows_inv(&mut state);
            substitute_columns_inv(&mut state)?;
            add_round_key_inv(&mut state, key);
        }

        block.copy_from_slice(&state);
        Ok(())
    }

    fn generate_key<R: RngCore + CryptoRng>(rng: &mut R) -> Self::Key {
        QuinaryKey::generate(rng)
    }
}

/// Digit range of sub-block `index` within a state.
#[inline(always)]
fn sub_block(index: usize) -> Range<usize> {
    let start = index * SUB_BLOCK_DIGITS;
    start..start + SUB_BLOCK_DIGITS
}

/// Reassembles column `col` into one field element: the 15-digit slice at
/// that column position from each of the three rows, concatenated.
fn column(state: &State, col: usize) -> [u8; ELEMENT_DIGITS] {
    let mut digits = [0u8; ELEMENT_DIGITS];
    for row in 0..STATE_ROWS {
        let dst = row * SUB_BLOCK_DIGITS..(row + 1) * SUB_BLOCK_DIGITS;
        digits[dst].copy_from_slice(&state[sub_block(row * STATE_COLS + col)]);
    }
    digits
}

/// Scatters a field element back into column `col`.
fn set_column(state: &mut State, col: usize, digits: &[u8; ELEMENT_DIGITS]) {
    for row in 0..STATE_ROWS {
        let src = row * SUB_BLOCK_DIGITS..(row + 1) * SUB_BLOCK_DIGITS;
        state[sub_block(row * STATE_COLS + col)].copy_from_slice(&digits[src]);
    }
}

/// Digit-wise mod-5 addition of a round key.
fn add_round_key(state: &mut State, key: &State) {
    for (digit, &k) in state.iter_mut().zip(key.iter()) {
        *digit = (*digit + k) % FIELD_BASE;
    }
}

/// Digit-wise mod-5 subtraction of a round key.
fn add_round_key_inv(state: &mut State, key: &State) {
    for (digit, &k) in state.iter_mut().zip(key.iter()) {
        *digit = (*digit + FIELD_BASE - k) % FIELD_BASE;
    }
}

/// The nonlinear substitution layer: each column is inverted in GF(5^45)
/// (zero passes through) and offset by GAMMA.
fn substitute_columns(state: &mut State) -> Result<()> {
    let gamma = FieldElement::from_reduced(GAMMA);
    for col in 0..STATE_COLS {
        let element = FieldElement::from_reduced(column(state, col));
        let element = if element.is_zero() {
            element
        } else {
            element.inverse()?
        };
        set_column(state, col, element.add(&gamma).digits());
    }
    Ok(())
}

/// Inverse substitution: the GAMMA offset is removed first, then each
/// nonzero column is inverted.
fn substitute_columns_inv(state: &mut State) -> Result<()> {
    let gamma = FieldElement::from_reduced(GAMMA);
    for col in 0..STATE_COLS {
        let element = FieldElement::from_reduced(column(state, col)).sub(&gamma);
        let element = if element.is_zero() {
            element
        } else {
            element.inverse()?
        };
        set_column(state, col, element.digits());
    }
    Ok(())
}

/// Applies a sub-block permutation map to the state.
fn permute_sub_blocks(state: &mut State, map: &[usize; SUB_BLOCKS]) {
    let source = *state;
    for (dst, &src) in map.iter().enumerate() {
        state[sub_block(dst)].copy_from_slice(&source[sub_block(src)]);
    }
}

/// The fixed row permutation.
fn shift_rows(state: &mut State) {
    permute_sub_blocks(state, &SHIFT_ROWS);
}

/// Inverse of [`shift_rows`].
fn shift_rows_inv(state: &mut State) {
    permute_sub_blocks(state, &SHIFT_ROWS_INV);
}

/// Advances the key schedule by one step.
///
/// Each step composes ten passes of {shift_rows; substitute_columns;
/// tap feedback}. The feedback takes the register's last digit `v`, shifts
/// every digit right by one (a zero enters at the front), then subtracts
/// `taps[i] * v` mod 5 at every position.
fn next_key(key: &State) -> Result<State> {
    let mut register = *key;
    for _ in 0..KEY_SCHEDULE_PASSES {
        shift_rows(&mut register);
        substitute_columns(&mut register)?;

        let feedback = register[BLOCK_DIGITS - 1];
        register.copy_within(0..BLOCK_DIGITS - 1, 1);
        register[0] = 0;
        for (digit, &tap) in register.iter_mut().zip(KEY_TAPS.iter()) {
            *digit = (*digit + FIELD_BASE - (tap * feedback) % FIELD_BASE) % FIELD_BASE;
        }
    }
    Ok(register)
}
