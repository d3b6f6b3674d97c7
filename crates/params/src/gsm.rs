//! The 125-symbol alphabet shared by the quinary codec.

/// Quinary digits per encoded symbol.
pub const SYMBOL_DIGITS: usize = 3;

/// Number of symbols in the alphabet (5^3, one per base-5 triple).
pub const ALPHABET_SIZE: usize = 125;

/// The symbol table, indexed by triple value `d0 + 5*d1 + 25*d2`.
///
/// This is the GSM 03.38 basic character set restricted to 125 entries so
/// that symbols and base-5 triples are in bijection.
pub const ALPHABET: [char; ALPHABET_SIZE] = [
    '@', '£', '$', '¥', 'è', 'é', 'ù', 'ì', 'ò', 'Ç',
    'ñ', 'Ø', 'ø', 'ü', 'Å', 'å', 'Δ', '_', 'Φ', 'Γ',
    'Λ', 'Ω', 'Π', 'Ψ', 'Σ', 'Θ', 'Ξ', 'à', 'Æ', 'æ',
    'ß', 'É', ' ', '!', '"', '#', '¤', '%', '&', '\'',
    '(', ')', '*', '+', ',', '-', '.', '/', '0', '1',
    '2', '3', '4', '5', '6', '7', '8', '9', ':', ';',
    '<', '=', '>', '?', '¡', 'A', 'B', 'C', 'D', 'E',
    'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O',
    'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y',
    'Z', 'Ä', 'Ö', 'Ñ', 'Ü', '§', '¿', 'a', 'b', 'c',
    'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w',
    'x', 'y', 'z', 'ä', 'ö',
];
