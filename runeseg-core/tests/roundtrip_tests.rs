//! Exhaustive encode/decode checks over the whole code space

use runeseg_core::codec::{utf16, utf8};
use runeseg_core::{convert, is_scalar, Encoding, Utf16, Utf32, Utf8, DECODE_ERROR};

#[test]
fn test_every_scalar_round_trips() {
    let mut buf8 = Vec::with_capacity(4);
    let mut buf16 = Vec::with_capacity(2);
    for cp in 0..=0x10FFFFu32 {
        let Some(c) = char::from_u32(cp) else {
            continue;
        };

        buf8.clear();
        Utf8::encode(c, &mut buf8);
        assert_eq!(buf8.len(), Utf8::encoded_len(c));
        let mut pos = 0;
        assert_eq!(utf8::decode_next(&buf8, &mut pos), cp);
        assert_eq!(pos, buf8.len());

        buf16.clear();
        Utf16::encode(c, &mut buf16);
        assert_eq!(buf16.len(), Utf16::encoded_len(c));
        let mut pos = 0;
        assert_eq!(utf16::decode_next(&buf16, &mut pos), cp);
        assert_eq!(pos, buf16.len());
    }
}

#[test]
fn test_non_scalars_encode_as_replacement() {
    for cp in (0xD800..=0xDFFFu32).chain([0x110000, 0x7FFF_FFFF, DECODE_ERROR]) {
        assert!(!is_scalar(cp));

        let mut out8 = Vec::new();
        Utf8::encode_lossy(cp, &mut out8);
        assert_eq!(out8, [0xEF, 0xBF, 0xBD], "{cp:#X}");

        let mut out16 = Vec::new();
        Utf16::encode_lossy(cp, &mut out16);
        assert_eq!(out16, [0xFFFD], "{cp:#X}");

        let mut out32 = Vec::new();
        Utf32::encode_lossy(cp, &mut out32);
        assert_eq!(out32, [0xFFFD], "{cp:#X}");
    }
}

#[test]
fn test_encoded_surrogates_never_decode() {
    for cp in 0xD800..=0xDFFFu32 {
        // the generalized 3-byte form a careless encoder would produce
        let bytes = [
            0xE0 | (cp >> 12) as u8,
            0x80 | ((cp >> 6) & 0x3F) as u8,
            0x80 | (cp & 0x3F) as u8,
        ];
        assert!(convert::validate_utf8(&bytes).is_err());
        assert_eq!(convert::utf8_to_string(&bytes), "\u{FFFD}\u{FFFD}\u{FFFD}");
    }
}

#[test]
fn test_utf32_round_trip_through_utf8() {
    let all: Vec<u32> = (0..=0x10FFFFu32).filter(|&cp| is_scalar(cp)).collect();
    let utf8 = convert::try_utf32_to_utf8(&all).unwrap();
    assert_eq!(convert::try_utf8_to_utf32(&utf8).unwrap(), all);
    let utf16 = convert::try_utf32_to_utf16(&all).unwrap();
    assert_eq!(convert::try_utf16_to_utf32(&utf16).unwrap(), all);
}
