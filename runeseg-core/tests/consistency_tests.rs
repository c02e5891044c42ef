//! Property tests for the ill-formed input policy

use proptest::prelude::*;
use runeseg_core::convert::{self, ErrorPolicy};
use runeseg_core::iter;
use runeseg_core::{Utf8, REPLACEMENT_CHARACTER};
use std::cmp::Ordering;

fn decoded(bytes: &[u8]) -> Vec<char> {
    iter::utf8(bytes).collect()
}

proptest! {
    #[test]
    fn compare_matches_decoded_comparison(
        a in proptest::collection::vec(any::<u8>(), 0..24),
        b in proptest::collection::vec(any::<u8>(), 0..24),
    ) {
        let expected = decoded(&a).cmp(&decoded(&b));
        prop_assert_eq!(convert::compare_utf8(&a, &b), expected);

        let a16 = convert::utf8_to_utf16(&a);
        let b16 = convert::utf8_to_utf16(&b);
        prop_assert_eq!(convert::compare_utf16(&a16, &b16), expected);

        let a32 = convert::utf8_to_utf32(&a);
        let b32 = convert::utf8_to_utf32(&b);
        prop_assert_eq!(convert::compare_utf32(&a32, &b32), expected);
    }

    #[test]
    fn reverse_decoding_mirrors_forward(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        let forward = decoded(&bytes);
        let mut backward: Vec<char> = iter::utf8(&bytes).rev().collect();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }

    #[test]
    fn wide_storage_decodes_identically(
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
        noise in any::<u32>(),
    ) {
        // upper bits are ignored, not rejected
        let wide: Vec<u32> = bytes.iter().map(|&b| (noise << 8) | b as u32).collect();
        prop_assert_eq!(convert::utf8_to_string(&wide), convert::utf8_to_string(&bytes));
        prop_assert_eq!(
            convert::count_replacements::<Utf8, u32>(&wide),
            convert::count_replacements::<Utf8, u8>(&bytes)
        );
    }

    #[test]
    fn replacement_count_is_stable_across_encodings(
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let text = convert::utf8_to_string(&bytes);
        let substituted = text.matches(REPLACEMENT_CHARACTER).count();
        // input may already carry encoded U+FFFD
        prop_assert!(substituted >= convert::count_replacements::<Utf8, u8>(&bytes));
        prop_assert_eq!(
            convert::decode_and_count::<Utf8, u8>(&bytes),
            text.chars().count()
        );

        let utf16 = convert::utf8_to_utf16(&bytes);
        prop_assert_eq!(convert::utf16_to_string(&utf16), text.clone());
        prop_assert_eq!(convert::utf8_to_string(text.as_bytes()), text);
    }

    #[test]
    fn strict_error_offset_matches_first_replacement(
        bytes in proptest::collection::vec(any::<u8>(), 0..32),
    ) {
        let mut prefix = String::new();
        match convert::decode::<Utf8, u8, _>(&bytes, ErrorPolicy::Strict, &mut prefix) {
            Ok(_) => prop_assert!(std::str::from_utf8(&bytes).is_ok()),
            Err(err) => {
                prop_assert_eq!(&bytes[..err.position()], prefix.as_bytes());
                prop_assert!(std::str::from_utf8(&bytes[..err.position()]).is_ok());
            }
        }
    }

    #[test]
    fn agrees_with_std_lossy_decoding(bytes in proptest::collection::vec(any::<u8>(), 0..32)) {
        prop_assert_eq!(
            convert::utf8_to_string(&bytes),
            String::from_utf8_lossy(&bytes).into_owned()
        );
    }
}

#[test]
fn test_valid_input_is_idempotent() {
    let text = "plain ascii, ünïcödé, 中文, 😀";
    let once = convert::utf8_to_string(text.as_bytes());
    let twice = convert::utf8_to_string(once.as_bytes());
    assert_eq!(once, text);
    assert_eq!(twice, once);
}

#[test]
fn test_ill_formed_bytes_compare_equal() {
    assert_eq!(convert::compare_utf8(b"\x80", b"\x81"), Ordering::Equal);
    assert_eq!(convert::compare_utf8(b"a\xC0", b"a\xFF"), Ordering::Equal);
    assert_eq!(convert::compare_utf8(b"a\xC0", b"a"), Ordering::Greater);
}
