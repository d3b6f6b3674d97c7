//! Property-based round-trip tests for the TQC-135 cipher

use proptest::prelude::*;
use tqc::prelude::*;

/// Generate one 135-digit base-5 block
fn digit_block() -> impl Strategy<Value = [u8; 135]> {
    prop::collection::vec(0u8..5, 135).prop_map(|digits| {
        let mut block = [0u8; 135];
        block.copy_from_slice(&digits);
        block
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn roundtrip_reference_rounds(message in digit_block(), key in digit_block()) {
        let key = QuinaryKey::new(key).unwrap();
        let cipher = Tqc135::new(&key).unwrap();

        let mut block = message;
        cipher.encrypt_block(&mut block).unwrap();
        cipher.decrypt_block(&mut block).unwrap();

        prop_assert_eq!(block, message);
    }

    #[test]
    fn roundtrip_across_round_counts(
        message in digit_block(),
        key in digit_block(),
        rounds in prop::sample::select(vec![0usize, 1, 5, 10])
    ) {
        let key = QuinaryKey::new(key).unwrap();
        let cipher = Tqc135::with_rounds(&key, rounds).unwrap();

        let mut block = message;
        cipher.encrypt_block(&mut block).unwrap();
        cipher.decrypt_block(&mut block).unwrap();

        prop_assert_eq!(block, message);
    }
}
