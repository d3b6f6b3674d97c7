//! Constants for the TQC-135 substitution-permutation network.

use crate::field::ELEMENT_DIGITS;

/// Number of quinary digits in a cipher state or key block.
pub const BLOCK_DIGITS: usize = 135;

/// Number of digits per sub-block (the unit the row permutation moves).
pub const SUB_BLOCK_DIGITS: usize = 15;

/// Number of sub-blocks in a state (3 rows of 3 columns).
pub const SUB_BLOCKS: usize = 9;

/// Rows in the 9x15 view of the state; each row is one field element.
pub const STATE_ROWS: usize = 3;

/// Columns in the 9x15 view of the state; each column reassembles one
/// field element from a 15-digit slice of every row.
pub const STATE_COLS: usize = 3;

/// Round count used by the reference cipher.
pub const DEFAULT_ROUNDS: usize = 5;

/// Iterations of the {permute, substitute, tap-feedback} step per key
/// schedule advance.
pub const KEY_SCHEDULE_PASSES: usize = 10;

/// The substitution offset: 0,1,2,3,4 tiled across one field element.
/// Added to every column after inversion in the substitution layer.
pub const GAMMA: [u8; ELEMENT_DIGITS] = [
    0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2, 3,
    4, 0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2, 3, 4, 0, 1, 2,
    3, 4, 0, 1, 2, 3, 4,
];

/// Tap coefficients of the key schedule's feedback step.
///
/// After the register shifts right by one digit, `taps[i] * v` (mod 5) is
/// subtracted at position `i`, where `v` is the digit shifted out.
pub const KEY_TAPS: [u8; BLOCK_DIGITS] = [
    3, 0, 3, 4, 2, 4, 2, 4, 4, 0, 4, 3, 4, 0, 0,
    0, 4, 2, 1, 2, 0, 2, 2, 4, 3, 0, 3, 1, 0, 2,
    2, 3, 0, 2, 4, 2, 3, 1, 4, 2, 3, 3, 2, 3, 0,
    2, 0, 0, 0, 2, 2, 0, 1, 1, 4, 4, 3, 4, 2, 3,
    2, 4, 4, 2, 3, 3, 1, 1, 2, 0, 0, 0, 1, 2, 3,
    1, 2, 4, 3, 4, 3, 2, 4, 4, 3, 1, 0, 2, 0, 2,
    2, 4, 3, 3, 1, 1, 2, 0, 4, 1, 0, 4, 1, 3, 3,
    2, 0, 2, 1, 0, 1, 1, 3, 3, 2, 1, 1, 2, 0, 3,
    1, 0, 3, 4, 3, 1, 2, 2, 1, 3, 3, 4, 4, 0, 2,
];
