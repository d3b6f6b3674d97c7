//! Quinary text codec
//!
//! Maps text to cipher blocks and back through the fixed 125-symbol
//! alphabet: each symbol corresponds to one base-5 triple with value
//! `d0 + 5*d1 + 25*d2`. The codec validates everything it is handed before
//! the cipher core is ever invoked; messages shorter than a full block are
//! padded with zero digits, as in the reference cipher.

use alloc::string::String;

use params::cipher::BLOCK_DIGITS;
use params::gsm::{ALPHABET, SYMBOL_DIGITS};

use crate::error::{validate, Error, Result};

/// Maximum number of symbols in one block.
pub const MAX_SYMBOLS: usize = BLOCK_DIGITS / SYMBOL_DIGITS;

/// Encodes text into a zero-padded 135-digit block.
///
/// Fails with [`Error::UnsupportedSymbol`] for characters outside the
/// alphabet and with [`Error::Length`] for messages longer than 45 symbols,
/// in both cases before any digits are produced for the caller.
pub fn encode_str(text: &str) -> Result<[u8; BLOCK_DIGITS]> {
    let mut digits = [0u8; BLOCK_DIGITS];
    let mut offset = 0;
    for symbol in text.chars() {
        if offset == BLOCK_DIGITS {
            return Err(Error::Length {
                context: "message",
                expected: MAX_SYMBOLS,
                actual: text.chars().count(),
            });
        }
        let value = symbol_value(symbol)?;
        digits[offset] = (value % 5) as u8;
        digits[offset + 1] = (value / 5 % 5) as u8;
        digits[offset + 2] = (value / 25) as u8;
        offset += SYMBOL_DIGITS;
    }
    Ok(digits)
}

/// Decodes a digit sequence back into text.
///
/// Accepts any sequence of whole triples; every triple of valid base-5
/// digits names exactly one symbol, so decoding cannot fail once the
/// digits themselves validate.
pub fn decode_digits(digits: &[u8]) -> Result<String> {
    validate::parameter(
        digits.len() % SYMBOL_DIGITS == 0,
        "digits",
        "length must be a multiple of 3",
    )?;
    validate::digits("digit block", digits)?;

    let mut text = String::with_capacity(digits.len() / SYMBOL_DIGITS);
    for triple in digits.chunks_exact(SYMBOL_DIGITS) {
        let value = triple[0] as usize + 5 * triple[1] as usize + 25 * triple[2] as usize;
        text.push(ALPHABET[value]);
    }
    Ok(text)
}

/// Renders digits the way the reference tool prints them: grouped into
/// triples, each group preceded by a space.
pub fn format_digits(digits: &[u8]) -> String {
    let mut rendered = String::with_capacity(digits.len() + digits.len() / SYMBOL_DIGITS);
    for (index, &digit) in digits.iter().enumerate() {
        if index % SYMBOL_DIGITS == 0 {
            rendered.push(' ');
        }
        rendered.push(char::from(b'0' + digit));
    }
    rendered
}

/// Position of a symbol in the alphabet.
fn symbol_value(symbol: char) -> Result<usize> {
    ALPHABET
        .iter()
        .position(|&entry| entry == symbol)
        .ok_or(Error::UnsupportedSymbol { symbol })
}
