//! Raw bytes viewed as code units of the configured encoding

use crate::config::Encoding;
use runeseg_core::convert;

/// Code units of one input, byte order already resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Units {
    Utf8(Vec<u8>),
    Utf16(Vec<u16>),
    Utf32(Vec<u32>),
}

/// Full code units plus the count of bytes too short to form one
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct SourceUnits {
    pub(crate) units: Units,
    pub(crate) trailing: usize,
}

impl SourceUnits {
    pub(crate) fn from_bytes(bytes: Vec<u8>, encoding: Encoding) -> Self {
        let trailing = bytes.len() % encoding.unit_size();
        let units = match encoding {
            Encoding::Utf8 => Units::Utf8(bytes),
            Encoding::Utf16Le => Units::Utf16(
                bytes
                    .chunks_exact(2)
                    .map(|c| u16::from_le_bytes([c[0], c[1]]))
                    .collect(),
            ),
            Encoding::Utf16Be => Units::Utf16(
                bytes
                    .chunks_exact(2)
                    .map(|c| u16::from_be_bytes([c[0], c[1]]))
                    .collect(),
            ),
            Encoding::Utf32Le => Units::Utf32(
                bytes
                    .chunks_exact(4)
                    .map(|c| u32::from_le_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
            ),
            Encoding::Utf32Be => Units::Utf32(
                bytes
                    .chunks_exact(4)
                    .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
                    .collect(),
            ),
        };
        Self { units, trailing }
    }

    /// Number of full code units
    pub(crate) fn len(&self) -> usize {
        match &self.units {
            Units::Utf8(u) => u.len(),
            Units::Utf16(u) => u.len(),
            Units::Utf32(u) => u.len(),
        }
    }

    /// Length in code units, a trailing partial unit counting as one
    pub(crate) fn reported_len(&self) -> usize {
        self.len() + usize::from(self.trailing > 0)
    }
}

/// Encode `text` as `target`, without a byte order mark
pub(crate) fn encode_text(text: &str, target: Encoding) -> Vec<u8> {
    let utf8 = text.as_bytes();
    match target {
        Encoding::Utf8 => utf8.to_vec(),
        Encoding::Utf16Le => convert::utf8_to_utf16(utf8)
            .into_iter()
            .flat_map(u16::to_le_bytes)
            .collect(),
        Encoding::Utf16Be => convert::utf8_to_utf16(utf8)
            .into_iter()
            .flat_map(u16::to_be_bytes)
            .collect(),
        Encoding::Utf32Le => convert::utf8_to_utf32(utf8)
            .into_iter()
            .flat_map(u32::to_le_bytes)
            .collect(),
        Encoding::Utf32Be => convert::utf8_to_utf32(utf8)
            .into_iter()
            .flat_map(u32::to_be_bytes)
            .collect(),
    }
}

/// Call a generic `fn<E: Encoding, U: CodeUnit>(&[U], ..)` on whichever
/// unit width a [`Units`] holds
macro_rules! dispatch {
    ($units:expr, $func:ident($($arg:expr),*)) => {
        match $units {
            $crate::units::Units::Utf8(u) => $func::<runeseg_core::Utf8, u8>(u, $($arg),*),
            $crate::units::Units::Utf16(u) => $func::<runeseg_core::Utf16, u16>(u, $($arg),*),
            $crate::units::Units::Utf32(u) => $func::<runeseg_core::Utf32, u32>(u, $($arg),*),
        }
    };
}

pub(crate) use dispatch;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_order() {
        let le = SourceUnits::from_bytes(vec![0x41, 0x00, 0x3D, 0xD8], Encoding::Utf16Le);
        assert_eq!(le.units, Units::Utf16(vec![0x0041, 0xD83D]));
        let be = SourceUnits::from_bytes(vec![0x00, 0x41], Encoding::Utf16Be);
        assert_eq!(be.units, Units::Utf16(vec![0x0041]));
        let be32 = SourceUnits::from_bytes(vec![0, 1, 0xF6, 0x00], Encoding::Utf32Be);
        assert_eq!(be32.units, Units::Utf32(vec![0x1F600]));
    }

    #[test]
    fn test_trailing_bytes() {
        let units = SourceUnits::from_bytes(vec![0x41, 0x00, 0x42], Encoding::Utf16Le);
        assert_eq!(units.len(), 1);
        assert_eq!(units.trailing, 1);
        assert_eq!(units.reported_len(), 2);

        let utf8 = SourceUnits::from_bytes(b"abc".to_vec(), Encoding::Utf8);
        assert_eq!(utf8.trailing, 0);
    }

    #[test]
    fn test_encode_text_without_bom() {
        assert_eq!(encode_text("A\u{1F600}", Encoding::Utf8), "A\u{1F600}".as_bytes());
        assert_eq!(
            encode_text("A\u{1F600}", Encoding::Utf16Le),
            vec![0x41, 0x00, 0x3D, 0xD8, 0x00, 0xDE]
        );
        assert_eq!(
            encode_text("A", Encoding::Utf32Be),
            vec![0x00, 0x00, 0x00, 0x41]
        );
    }
}
