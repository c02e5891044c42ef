// Generated from the Unicode Character Database (version 14.0.0) with
// Extended_Pictographic and Prepend ranges from emoji-data / GraphemeBreakProperty.
// Do not edit by hand.

use super::{GraphemeBreak, WordBreak};

pub(crate) const GRAPHEME_BREAK_RANGES: &[(u32, u32, GraphemeBreak)] = &[
    (0x0000, 0x0009, GraphemeBreak::Control),
    (0x000A, 0x000A, GraphemeBreak::Lf),
    (0x000B, 0x000C, GraphemeBreak::Control),
    (0x000D, 0x000D, GraphemeBreak::Cr),
    (0x000E, 0x001F, GraphemeBreak::Control),
    (0x007F, 0x009F, GraphemeBreak::Control),
    (0x00A9, 0x00A9, GraphemeBreak::ExtendedPictographic),
    (0x00AD, 0x00AD, GraphemeBreak::Control),
    (0x00AE, 0x00AE, GraphemeBreak::ExtendedPictographic),
    (0x0300, 0x036F, GraphemeBreak::Extend),
    (0x0483, 0x0489, GraphemeBreak::Extend),
    (0x0591, 0x05BD, GraphemeBreak::Extend),
    (0x05BF, 0x05BF, GraphemeBreak::Extend),
    (0x05C1, 0x05C2, GraphemeBreak::Extend),
    (0x05C4, 0x05C5, GraphemeBreak::Extend),
    (0x05C7, 0x05C7, GraphemeBreak::Extend),
    (0x0600, 0x0605, GraphemeBreak::Prepend),
    (0x0610, 0x061A, GraphemeBreak::Extend),
    (0x061C, 0x061C, GraphemeBreak::Control),
    (0x064B, 0x065F, GraphemeBreak::Extend),
    (0x0670, 0x0670, GraphemeBreak::Extend),
    (0x06D6, 0x06DC, GraphemeBreak::Extend),
    (0x06DD, 0x06DD, GraphemeBreak::Prepend),
    (0x06DF, 0x06E4, GraphemeBreak::Extend),
    (0x06E7, 0x06E8, GraphemeBreak::Extend),
    (0x06EA, 0x06ED, GraphemeBreak::Extend),
    (0x070F, 0x070F, GraphemeBreak::Prepend),
    (0x0711, 0x0711, GraphemeBreak::Extend),
    (0x0730, 0x074A, GraphemeBreak::Extend),
    (0x07A6, 0x07B0, GraphemeBreak::Extend),
    (0x07EB, 0x07F3, GraphemeBreak::Extend),
    (0x07FD, 0x07FD, GraphemeBreak::Extend),
    (0x0816, 0x0819, GraphemeBreak::Extend),
    (0x081B, 0x0823, GraphemeBreak::Extend),
    (0x0825, 0x0827, GraphemeBreak::Extend),
    (0x0829, 0x082D, GraphemeBreak::Extend),
    (0x0859, 0x085B, GraphemeBreak::Extend),
    (0x0890, 0x0891, GraphemeBreak::Prepend),
    (0x0898, 0x089F, GraphemeBreak::Extend),
    (0x08CA, 0x08E1, GraphemeBreak::Extend),
    (0x08E2, 0x08E2, GraphemeBreak::Prepend),
    (0x08E3, 0x0902, GraphemeBreak::Extend),
    (0x0903, 0x0903, GraphemeBreak::SpacingMark),
    (0x093A, 0x093A, GraphemeBreak::Extend),
    (0x093B, 0x093B, GraphemeBreak::SpacingMark),
    (0x093C, 0x093C, GraphemeBreak::Extend),
    (0x093E, 0x0940, GraphemeBreak::SpacingMark),
    (0x0941, 0x0948, GraphemeBreak::Extend),
    (0x0949, 0x094C, GraphemeBreak::SpacingMark),
    (0x094D, 0x094D, GraphemeBreak::Extend),
    (0x094E, 0x094F, GraphemeBreak::SpacingMark),
    (0x0951, 0x0957, GraphemeBreak::Extend),
    (0x0962, 0x0963, GraphemeBreak::Extend),
    (0x0981, 0x0981, GraphemeBreak::Extend),
    (0x0982, 0x0983, GraphemeBreak::SpacingMark),
    (0x09BC, 0x09BC, GraphemeBreak::Extend),
    (0x09BE, 0x09BE, GraphemeBreak::Extend),
    (0x09BF, 0x09C0, GraphemeBreak::SpacingMark),
    (0x09C1, 0x09C4, GraphemeBreak::Extend),
    (0x09C7, 0x09C8, GraphemeBreak::SpacingMark),
    (0x09CB, 0x09CC, GraphemeBreak::SpacingMark),
    (0x09CD, 0x09CD, GraphemeBreak::Extend),
    (0x09D7, 0x09D7, GraphemeBreak::Extend),
    (0x09E2, 0x09E3, GraphemeBreak::Extend),
    (0x09FE, 0x09FE, GraphemeBreak::Extend),
    (0x0A01, 0x0A02, GraphemeBreak::Extend),
    (0x0A03, 0x0A03, GraphemeBreak::SpacingMark),
    (0x0A3C, 0x0A3C, GraphemeBreak::Extend),
    (0x0A3E, 0x0A40, GraphemeBreak::SpacingMark),
    (0x0A41, 0x0A42, GraphemeBreak::Extend),
    (0x0A47, 0x0A48, GraphemeBreak::Extend),
    (0x0A4B, 0x0A4D, GraphemeBreak::Extend),
    (0x0A51, 0x0A51, GraphemeBreak::Extend),
    (0x0A70, 0x0A71, GraphemeBreak::Extend),
    (0x0A75, 0x0A75, GraphemeBreak::Extend),
    (0x0A81, 0x0A82, GraphemeBreak::Extend),
    (0x0A83, 0x0A83, GraphemeBreak::SpacingMark),
    (0x0ABC, 0x0ABC, GraphemeBreak::Extend),
    (0x0ABE, 0x0AC0, GraphemeBreak::SpacingMark),
    (0x0AC1, 0x0AC5, GraphemeBreak::Extend),
    (0x0AC7, 0x0AC8, GraphemeBreak::Extend),
    (0x0AC9, 0x0AC9, GraphemeBreak::SpacingMark),
    (0x0ACB, 0x0ACC, GraphemeBreak::SpacingMark),
    (0x0ACD, 0x0ACD, GraphemeBreak::Extend),
    (0x0AE2, 0x0AE3, GraphemeBreak::Extend),
    (0x0AFA, 0x0AFF, GraphemeBreak::Extend),
    (0x0B01, 0x0B01, GraphemeBreak::Extend),
    (0x0B02, 0x0B03, GraphemeBreak::SpacingMark),
    (0x0B3C, 0x0B3C, GraphemeBreak::Extend),
    (0x0B3E, 0x0B3F, GraphemeBreak::Extend),
    (0x0B40, 0x0B40, GraphemeBreak::SpacingMark),
    (0x0B41, 0x0B44, GraphemeBreak::Extend),
    (0x0B47, 0x0B48, GraphemeBreak::SpacingMark),
    (0x0B4B, 0x0B4C, GraphemeBreak::SpacingMark),
    (0x0B4D, 0x0B4D, GraphemeBreak::Extend),
    (0x0B55, 0x0B57, GraphemeBreak::Extend),
    (0x0B62, 0x0B63, GraphemeBreak::Extend),
    (0x0B82, 0x0B82, GraphemeBreak::Extend),
    (0x0BBE, 0x0BBE, GraphemeBreak::Extend),
    (0x0BBF, 0x0BBF, GraphemeBreak::SpacingMark),
    (0x0BC0, 0x0BC0, GraphemeBreak::Extend),
    (0x0BC1, 0x0BC2, GraphemeBreak::SpacingMark),
    (0x0BC6, 0x0BC8, GraphemeBreak::SpacingMark),
    (0x0BCA, 0x0BCC, GraphemeBreak::SpacingMark),
    (0x0BCD, 0x0BCD, GraphemeBreak::Extend),
    (0x0BD7, 0x0BD7, GraphemeBreak::Extend),
    (0x0C00, 0x0C00, GraphemeBreak::Extend),
    (0x0C01, 0x0C03, GraphemeBreak::SpacingMark),
    (0x0C04, 0x0C04, GraphemeBreak::Extend),
    (0x0C3C, 0x0C3C, GraphemeBreak::Extend),
    (0x0C3E, 0x0C40, GraphemeBreak::Extend),
    (0x0C41, 0x0C44, GraphemeBreak::SpacingMark),
    (0x0C46, 0x0C48, GraphemeBreak::Extend),
    (0x0C4A, 0x0C4D, GraphemeBreak::Extend),
    (0x0C55, 0x0C56, GraphemeBreak::Extend),
    (0x0C62, 0x0C63, GraphemeBreak::Extend),
    (0x0C81, 0x0C81, GraphemeBreak::Extend),
    (0x0C82, 0x0C83, GraphemeBreak::SpacingMark),
    (0x0CBC, 0x0CBC, GraphemeBreak::Extend),
    (0x0CBE, 0x0CBE, GraphemeBreak::SpacingMark),
    (0x0CBF, 0x0CBF, GraphemeBreak::Extend),
    (0x0CC0, 0x0CC1, GraphemeBreak::SpacingMark),
    (0x0CC2, 0x0CC2, GraphemeBreak::Extend),
    (0x0CC3, 0x0CC4, GraphemeBreak::SpacingMark),
    (0x0CC6, 0x0CC6, GraphemeBreak::Extend),
    (0x0CC7, 0x0CC8, GraphemeBreak::SpacingMark),
    (0x0CCA, 0x0CCB, GraphemeBreak::SpacingMark),
    (0x0CCC, 0x0CCD, GraphemeBreak::Extend),
    (0x0CD5, 0x0CD6, GraphemeBreak::Extend),
    (0x0CE2, 0x0CE3, GraphemeBreak::Extend),
    (0x0D00, 0x0D01, GraphemeBreak::Extend),
    (0x0D02, 0x0D03, GraphemeBreak::SpacingMark),
    (0x0D3B, 0x0D3C, GraphemeBreak::Extend),
    (0x0D3E, 0x0D3E, GraphemeBreak::Extend),
    (0x0D3F, 0x0D40, GraphemeBreak::SpacingMark),
    (0x0D41, 0x0D44, GraphemeBreak::Extend),
    (0x0D46, 0x0D48, GraphemeBreak::SpacingMark),
    (0x0D4A, 0x0D4C, GraphemeBreak::SpacingMark),
    (0x0D4D, 0x0D4D, GraphemeBreak::Extend),
    (0x0D4E, 0x0D4E, GraphemeBreak::Prepend),
    (0x0D57, 0x0D57, GraphemeBreak::Extend),
    (0x0D62, 0x0D63, GraphemeBreak::Extend),
    (0x0D81, 0x0D81, GraphemeBreak::Extend),
    (0x0D82, 0x0D83, GraphemeBreak::SpacingMark),
    (0x0DCA, 0x0DCA, GraphemeBreak::Extend),
    (0x0DCF, 0x0DCF, GraphemeBreak::Extend),
    (0x0DD0, 0x0DD1, GraphemeBreak::SpacingMark),
    (0x0DD2, 0x0DD4, GraphemeBreak::Extend),
    (0x0DD6, 0x0DD6, GraphemeBreak::Extend),
    (0x0DD8, 0x0DDE, GraphemeBreak::SpacingMark),
    (0x0DDF, 0x0DDF, GraphemeBreak::Extend),
    (0x0DF2, 0x0DF3, GraphemeBreak::SpacingMark),
    (0x0E31, 0x0E31, GraphemeBreak::Extend),
    (0x0E33, 0x0E33, GraphemeBreak::SpacingMark),
    (0x0E34, 0x0E3A, GraphemeBreak::Extend),
    (0x0E47, 0x0E4E, GraphemeBreak::Extend),
    (0x0EB1, 0x0EB1, GraphemeBreak::Extend),
    (0x0EB3, 0x0EB3, GraphemeBreak::SpacingMark),
    (0x0EB4, 0x0EBC, GraphemeBreak::Extend),
    (0x0EC8, 0x0ECD, GraphemeBreak::Extend),
    (0x0F18, 0x0F19, GraphemeBreak::Extend),
    (0x0F35, 0x0F35, GraphemeBreak::Extend),
    (0x0F37, 0x0F37, GraphemeBreak::Extend),
    (0x0F39, 0x0F39, GraphemeBreak::Extend),
    (0x0F3E, 0x0F3F, GraphemeBreak::SpacingMark),
    (0x0F71, 0x0F7E, GraphemeBreak::Extend),
    (0x0F7F, 0x0F7F, GraphemeBreak::SpacingMark),
    (0x0F80, 0x0F84, GraphemeBreak::Extend),
    (0x0F86, 0x0F87, GraphemeBreak::Extend),
    (0x0F8D, 0x0F97, GraphemeBreak::Extend),
    (0x0F99, 0x0FBC, GraphemeBreak::Extend),
    (0x0FC6, 0x0FC6, GraphemeBreak::Extend),
    (0x102D, 0x1030, GraphemeBreak::Extend),
    (0x1031, 0x1031, GraphemeBreak::SpacingMark),
    (0x1032, 0x1037, GraphemeBreak::Extend),
    (0x1039, 0x103A, GraphemeBreak::Extend),
    (0x103B, 0x103C, GraphemeBreak::SpacingMark),
    (0x103D, 0x103E, GraphemeBreak::Extend),
    (0x1056, 0x1057, GraphemeBreak::SpacingMark),
    (0x1058, 0x1059, GraphemeBreak::Extend),
    (0x105E, 0x1060, GraphemeBreak::Extend),
    (0x1071, 0x1074, GraphemeBreak::Extend),
    (0x1082, 0x1082, GraphemeBreak::Extend),
    (0x1084, 0x1084, GraphemeBreak::SpacingMark),
    (0x1085, 0x1086, GraphemeBreak::Extend),
    (0x108D, 0x108D, GraphemeBreak::Extend),
    (0x109D, 0x109D, GraphemeBreak::Extend),
    (0x1100, 0x115F, GraphemeBreak::L),
    (0x1160, 0x11A7, GraphemeBreak::V),
    (0x11A8, 0x11FF, GraphemeBreak::T),
    (0x135D, 0x135F, GraphemeBreak::Extend),
    (0x1712, 0x1714, GraphemeBreak::Extend),
    (0x1715, 0x1715, GraphemeBreak::SpacingMark),
    (0x1732, 0x1733, GraphemeBreak::Extend),
    (0x1734, 0x1734, GraphemeBreak::SpacingMark),
    (0x1752, 0x1753, GraphemeBreak::Extend),
    (0x1772, 0x1773, GraphemeBreak::Extend),
    (0x17B4, 0x17B5, GraphemeBreak::Extend),
    (0x17B6, 0x17B6, GraphemeBreak::SpacingMark),
    (0x17B7, 0x17BD, GraphemeBreak::Extend),
    (0x17BE, 0x17C5, GraphemeBreak::SpacingMark),
    (0x17C6, 0x17C6, GraphemeBreak::Extend),
    (0x17C7, 0x17C8, GraphemeBreak::SpacingMark),
    (0x17C9, 0x17D3, GraphemeBreak::Extend),
    (0x17DD, 0x17DD, GraphemeBreak::Extend),
    (0x180B, 0x180D, GraphemeBreak::Extend),
    (0x180E, 0x180E, GraphemeBreak::Control),
    (0x180F, 0x180F, GraphemeBreak::Extend),
    (0x1885, 0x1886, GraphemeBreak::Extend),
    (0x18A9, 0x18A9, GraphemeBreak::Extend),
    (0x1920, 0x1922, GraphemeBreak::Extend),
    (0x1923, 0x1926, GraphemeBreak::SpacingMark),
    (0x1927, 0x1928, GraphemeBreak::Extend),
    (0x1929, 0x192B, GraphemeBreak::SpacingMark),
    (0x1930, 0x1931, GraphemeBreak::SpacingMark),
    (0x1932, 0x1932, GraphemeBreak::Extend),
    (0x1933, 0x1938, GraphemeBreak::SpacingMark),
    (0x1939, 0x193B, GraphemeBreak::Extend),
    (0x1A17, 0x1A18, GraphemeBreak::Extend),
    (0x1A19, 0x1A1A, GraphemeBreak::SpacingMark),
    (0x1A1B, 0x1A1B, GraphemeBreak::Extend),
    (0x1A55, 0x1A55, GraphemeBreak::SpacingMark),
    (0x1A56, 0x1A56, GraphemeBreak::Extend),
    (0x1A57, 0x1A57, GraphemeBreak::SpacingMark),
    (0x1A58, 0x1A5E, GraphemeBreak::Extend),
    (0x1A60, 0x1A60, GraphemeBreak::Extend),
    (0x1A62, 0x1A62, GraphemeBreak::Extend),
    (0x1A65, 0x1A6C, GraphemeBreak::Extend),
    (0x1A6D, 0x1A72, GraphemeBreak::SpacingMark),
    (0x1A73, 0x1A7C, GraphemeBreak::Extend),
    (0x1A7F, 0x1A7F, GraphemeBreak::Extend),
    (0x1AB0, 0x1ACE, GraphemeBreak::Extend),
    (0x1B00, 0x1B03, GraphemeBreak::Extend),
    (0x1B04, 0x1B04, GraphemeBreak::SpacingMark),
    (0x1B34, 0x1B3A, GraphemeBreak::Extend),
    (0x1B3B, 0x1B3B, GraphemeBreak::SpacingMark),
    (0x1B3C, 0x1B3C, GraphemeBreak::Extend),
    (0x1B3D, 0x1B41, GraphemeBreak::SpacingMark),
    (0x1B42, 0x1B42, GraphemeBreak::Extend),
    (0x1B43, 0x1B44, GraphemeBreak::SpacingMark),
    (0x1B6B, 0x1B73, GraphemeBreak::Extend),
    (0x1B80, 0x1B81, GraphemeBreak::Extend),
    (0x1B82, 0x1B82, GraphemeBreak::SpacingMark),
    (0x1BA1, 0x1BA1, GraphemeBreak::SpacingMark),
    (0x1BA2, 0x1BA5, GraphemeBreak::Extend),
    (0x1BA6, 0x1BA7, GraphemeBreak::SpacingMark),
    (0x1BA8, 0x1BA9, GraphemeBreak::Extend),
    (0x1BAA, 0x1BAA, GraphemeBreak::SpacingMark),
    (0x1BAB, 0x1BAD, GraphemeBreak::Extend),
    (0x1BE6, 0x1BE6, GraphemeBreak::Extend),
    (0x1BE7, 0x1BE7, GraphemeBreak::SpacingMark),
    (0x1BE8, 0x1BE9, GraphemeBreak::Extend),
    (0x1BEA, 0x1BEC, GraphemeBreak::SpacingMark),
    (0x1BED, 0x1BED, GraphemeBreak::Extend),
    (0x1BEE, 0x1BEE, GraphemeBreak::SpacingMark),
    (0x1BEF, 0x1BF1, GraphemeBreak::Extend),
    (0x1BF2, 0x1BF3, GraphemeBreak::SpacingMark),
    (0x1C24, 0x1C2B, GraphemeBreak::SpacingMark),
    (0x1C2C, 0x1C33, GraphemeBreak::Extend),
    (0x1C34, 0x1C35, GraphemeBreak::SpacingMark),
    (0x1C36, 0x1C37, GraphemeBreak::Extend),
    (0x1CD0, 0x1CD2, GraphemeBreak::Extend),
    (0x1CD4, 0x1CE0, GraphemeBreak::Extend),
    (0x1CE1, 0x1CE1, GraphemeBreak::SpacingMark),
    (0x1CE2, 0x1CE8, GraphemeBreak::Extend),
    (0x1CED, 0x1CED, GraphemeBreak::Extend),
    (0x1CF4, 0x1CF4, GraphemeBreak::Extend),
    (0x1CF7, 0x1CF7, GraphemeBreak::SpacingMark),
    (0x1CF8, 0x1CF9, GraphemeBreak::Extend),
    (0x1DC0, 0x1DFF, GraphemeBreak::Extend),
    (0x200B, 0x200B, GraphemeBreak::Control),
    (0x200C, 0x200C, GraphemeBreak::Extend),
    (0x200D, 0x200D, GraphemeBreak::Zwj),
    (0x200E, 0x200F, GraphemeBreak::Control),
    (0x2028, 0x202E, GraphemeBreak::Control),
    (0x203C, 0x203C, GraphemeBreak::ExtendedPictographic),
    (0x2049, 0x2049, GraphemeBreak::ExtendedPictographic),
    (0x2060, 0x2064, GraphemeBreak::Control),
    (0x2066, 0x206F, GraphemeBreak::Control),
    (0x20D0, 0x20F0, GraphemeBreak::Extend),
    (0x2122, 0x2122, GraphemeBreak::ExtendedPictographic),
    (0x2139, 0x2139, GraphemeBreak::ExtendedPictographic),
    (0x2194, 0x2199, GraphemeBreak::ExtendedPictographic),
    (0x21A9, 0x21AA, GraphemeBreak::ExtendedPictographic),
    (0x231A, 0x231B, GraphemeBreak::ExtendedPictographic),
    (0x2328, 0x2328, GraphemeBreak::ExtendedPictographic),
    (0x2388, 0x2388, GraphemeBreak::ExtendedPictographic),
    (0x23CF, 0x23CF, GraphemeBreak::ExtendedPictographic),
    (0x23E9, 0x23F3, GraphemeBreak::ExtendedPictographic),
    (0x23F8, 0x23FA, GraphemeBreak::ExtendedPictographic),
    (0x24C2, 0x24C2, GraphemeBreak::ExtendedPictographic),
    (0x25AA, 0x25AB, GraphemeBreak::ExtendedPictographic),
    (0x25B6, 0x25B6, GraphemeBreak::ExtendedPictographic),
    (0x25C0, 0x25C0, GraphemeBreak::ExtendedPictographic),
    (0x25FB, 0x25FE, GraphemeBreak::ExtendedPictographic),
    (0x2600, 0x2605, GraphemeBreak::ExtendedPictographic),
    (0x2607, 0x2612, GraphemeBreak::ExtendedPictographic),
    (0x2614, 0x2685, GraphemeBreak::ExtendedPictographic),
    (0x2690, 0x2705, GraphemeBreak::ExtendedPictographic),
    (0x2708, 0x2712, GraphemeBreak::ExtendedPictographic),
    (0x2714, 0x2714, GraphemeBreak::ExtendedPictographic),
    (0x2716, 0x2716, GraphemeBreak::ExtendedPictographic),
    (0x271D, 0x271D, GraphemeBreak::ExtendedPictographic),
    (0x2721, 0x2721, GraphemeBreak::ExtendedPictographic),
    (0x2728, 0x2728, GraphemeBreak::ExtendedPictographic),
    (0x2733, 0x2734, GraphemeBreak::ExtendedPictographic),
    (0x2744, 0x2744, GraphemeBreak::ExtendedPictographic),
    (0x2747, 0x2747, GraphemeBreak::ExtendedPictographic),
    (0x274C, 0x274C, GraphemeBreak::ExtendedPictographic),
    (0x274E, 0x274E, GraphemeBreak::ExtendedPictographic),
    (0x2753, 0x2755, GraphemeBreak::ExtendedPictographic),
    (0x2757, 0x2757, GraphemeBreak::ExtendedPictographic),
    (0x2763, 0x2767, GraphemeBreak::ExtendedPictographic),
    (0x2795, 0x2797, GraphemeBreak::ExtendedPictographic),
    (0x27A1, 0x27A1, GraphemeBreak::ExtendedPictographic),
    (0x27B0, 0x27B0, GraphemeBreak::ExtendedPictographic),
    (0x27BF, 0x27BF, GraphemeBreak::ExtendedPictographic),
    (0x2934, 0x2935, GraphemeBreak::ExtendedPictographic),
    (0x2B05, 0x2B07, GraphemeBreak::ExtendedPictographic),
    (0x2B1B, 0x2B1C, GraphemeBreak::ExtendedPictographic),
    (0x2B50, 0x2B50, GraphemeBreak::ExtendedPictographic),
    (0x2B55, 0x2B55, GraphemeBreak::ExtendedPictographic),
    (0x2CEF, 0x2CF1, GraphemeBreak::Extend),
    (0x2D7F, 0x2D7F, GraphemeBreak::Extend),
    (0x2DE0, 0x2DFF, GraphemeBreak::Extend),
    (0x302A, 0x302F, GraphemeBreak::Extend),
    (0x3030, 0x3030, GraphemeBreak::ExtendedPictographic),
    (0x303D, 0x303D, GraphemeBreak::ExtendedPictographic),
    (0x3099, 0x309A, GraphemeBreak::Extend),
    (0x3297, 0x3297, GraphemeBreak::ExtendedPictographic),
    (0x3299, 0x3299, GraphemeBreak::ExtendedPictographic),
    (0xA66F, 0xA672, GraphemeBreak::Extend),
    (0xA674, 0xA67D, GraphemeBreak::Extend),
    (0xA69E, 0xA69F, GraphemeBreak::Extend),
    (0xA6F0, 0xA6F1, GraphemeBreak::Extend),
    (0xA802, 0xA802, GraphemeBreak::Extend),
    (0xA806, 0xA806, GraphemeBreak::Extend),
    (0xA80B, 0xA80B, GraphemeBreak::Extend),
    (0xA823, 0xA824, GraphemeBreak::SpacingMark),
    (0xA825, 0xA826, GraphemeBreak::Extend),
    (0xA827, 0xA827, GraphemeBreak::SpacingMark),
    (0xA82C, 0xA82C, GraphemeBreak::Extend),
    (0xA880, 0xA881, GraphemeBreak::SpacingMark),
    (0xA8B4, 0xA8C3, GraphemeBreak::SpacingMark),
    (0xA8C4, 0xA8C5, GraphemeBreak::Extend),
    (0xA8E0, 0xA8F1, GraphemeBreak::Extend),
    (0xA8FF, 0xA8FF, GraphemeBreak::Extend),
    (0xA926, 0xA92D, GraphemeBreak::Extend),
    (0xA947, 0xA951, GraphemeBreak::Extend),
    (0xA952, 0xA953, GraphemeBreak::SpacingMark),
    (0xA960, 0xA97C, GraphemeBreak::L),
    (0xA980, 0xA982, GraphemeBreak::Extend),
    (0xA983, 0xA983, GraphemeBreak::SpacingMark),
    (0xA9B3, 0xA9B3, GraphemeBreak::Extend),
    (0xA9B4, 0xA9B5, GraphemeBreak::SpacingMark),
    (0xA9B6, 0xA9B9, GraphemeBreak::Extend),
    (0xA9BA, 0xA9BB, GraphemeBreak::SpacingMark),
    (0xA9BC, 0xA9BD, GraphemeBreak::Extend),
    (0xA9BE, 0xA9C0, GraphemeBreak::SpacingMark),
    (0xA9E5, 0xA9E5, GraphemeBreak::Extend),
    (0xAA29, 0xAA2E, GraphemeBreak::Extend),
    (0xAA2F, 0xAA30, GraphemeBreak::SpacingMark),
    (0xAA31, 0xAA32, GraphemeBreak::Extend),
    (0xAA33, 0xAA34, GraphemeBreak::SpacingMark),
    (0xAA35, 0xAA36, GraphemeBreak::Extend),
    (0xAA43, 0xAA43, GraphemeBreak::Extend),
    (0xAA4C, 0xAA4C, GraphemeBreak::Extend),
    (0xAA4D, 0xAA4D, GraphemeBreak::SpacingMark),
    (0xAA7C, 0xAA7C, GraphemeBreak::Extend),
    (0xAAB0, 0xAAB0, GraphemeBreak::Extend),
    (0xAAB2, 0xAAB4, GraphemeBreak::Extend),
    (0xAAB7, 0xAAB8, GraphemeBreak::Extend),
    (0xAABE, 0xAABF, GraphemeBreak::Extend),
    (0xAAC1, 0xAAC1, GraphemeBreak::Extend),
    (0xAAEB, 0xAAEB, GraphemeBreak::SpacingMark),
    (0xAAEC, 0xAAED, GraphemeBreak::Extend),
    (0xAAEE, 0xAAEF, GraphemeBreak::SpacingMark),
    (0xAAF5, 0xAAF5, GraphemeBreak::SpacingMark),
    (0xAAF6, 0xAAF6, GraphemeBreak::Extend),
    (0xABE3, 0xABE4, GraphemeBreak::SpacingMark),
    (0xABE5, 0xABE5, GraphemeBreak::Extend),
    (0xABE6, 0xABE7, GraphemeBreak::SpacingMark),
    (0xABE8, 0xABE8, GraphemeBreak::Extend),
    (0xABE9, 0xABEA, GraphemeBreak::SpacingMark),
    (0xABEC, 0xABEC, GraphemeBreak::SpacingMark),
    (0xABED, 0xABED, GraphemeBreak::Extend),
    (0xAC00, 0xAC00, GraphemeBreak::Lv),
    (0xAC01, 0xAC1B, GraphemeBreak::Lvt),
    (0xAC1C, 0xAC1C, GraphemeBreak::Lv),
    (0xAC1D, 0xAC37, GraphemeBreak::Lvt),
    (0xAC38, 0xAC38, GraphemeBreak::Lv),
    (0xAC39, 0xAC53, GraphemeBreak::Lvt),
    (0xAC54, 0xAC54, GraphemeBreak::Lv),
    (0xAC55, 0xAC6F, GraphemeBreak::Lvt),
    (0xAC70, 0xAC70, GraphemeBreak::Lv),
    (0xAC71, 0xAC8B, GraphemeBreak::Lvt),
    (0xAC8C, 0xAC8C, GraphemeBreak::Lv),
    (0xAC8D, 0xACA7, GraphemeBreak::Lvt),
    (0xACA8, 0xACA8, GraphemeBreak::Lv),
    (0xACA9, 0xACC3, GraphemeBreak::Lvt),
    (0xACC4, 0xACC4, GraphemeBreak::Lv),
    (0xACC5, 0xACDF, GraphemeBreak::Lvt),
    (0xACE0, 0xACE0, GraphemeBreak::Lv),
    (0xACE1, 0xACFB, GraphemeBreak::Lvt),
    (0xACFC, 0xACFC, GraphemeBreak::Lv),
    (0xACFD, 0xAD17, GraphemeBreak::Lvt),
    (0xAD18, 0xAD18, GraphemeBreak::Lv),
    (0xAD19, 0xAD33, GraphemeBreak::Lvt),
    (0xAD34, 0xAD34, GraphemeBreak::Lv),
    (0xAD35, 0xAD4F, GraphemeBreak::Lvt),
    (0xAD50, 0xAD50, GraphemeBreak::Lv),
    (0xAD51, 0xAD6B, GraphemeBreak::Lvt),
    (0xAD6C, 0xAD6C, GraphemeBreak::Lv),
    (0xAD6D, 0xAD87, GraphemeBreak::Lvt),
    (0xAD88, 0xAD88, GraphemeBreak::Lv),
    (0xAD89, 0xADA3, GraphemeBreak::Lvt),
    (0xADA4, 0xADA4, GraphemeBreak::Lv),
    (0xADA5, 0xADBF, GraphemeBreak::Lvt),
    (0xADC0, 0xADC0, GraphemeBreak::Lv),
    (0xADC1, 0xADDB, GraphemeBreak::Lvt),
    (0xADDC, 0xADDC, GraphemeBreak::Lv),
    (0xADDD, 0xADF7, GraphemeBreak::Lvt),
    (0xADF8, 0xADF8, GraphemeBreak::Lv),
    (0xADF9, 0xAE13, GraphemeBreak::Lvt),
    (0xAE14, 0xAE14, GraphemeBreak::Lv),
    (0xAE15, 0xAE2F, GraphemeBreak::Lvt),
    (0xAE30, 0xAE30, GraphemeBreak::Lv),
    (0xAE31, 0xAE4B, GraphemeBreak::Lvt),
    (0xAE4C, 0xAE4C, GraphemeBreak::Lv),
    (0xAE4D, 0xAE67, GraphemeBreak::Lvt),
    (0xAE68, 0xAE68, GraphemeBreak::Lv),
    (0xAE69, 0xAE83, GraphemeBreak::Lvt),
    (0xAE84, 0xAE84, GraphemeBreak::Lv),
    (0xAE85, 0xAE9F, GraphemeBreak::Lvt),
    (0xAEA0, 0xAEA0, GraphemeBreak::Lv),
    (0xAEA1, 0xAEBB, GraphemeBreak::Lvt),
    (0xAEBC, 0xAEBC, GraphemeBreak::Lv),
    (0xAEBD, 0xAED7, GraphemeBreak::Lvt),
    (0xAED8, 0xAED8, GraphemeBreak::Lv),
    (0xAED9, 0xAEF3, GraphemeBreak::Lvt),
    (0xAEF4, 0xAEF4, GraphemeBreak::Lv),
    (0xAEF5, 0xAF0F, GraphemeBreak::Lvt),
    (0xAF10, 0xAF10, GraphemeBreak::Lv),
    (0xAF11, 0xAF2B, GraphemeBreak::Lvt),
    (0xAF2C, 0xAF2C, GraphemeBreak::Lv),
    (0xAF2D, 0xAF47, GraphemeBreak::Lvt),
    (0xAF48, 0xAF48, GraphemeBreak::Lv),
    (0xAF49, 0xAF63, GraphemeBreak::Lvt),
    (0xAF64, 0xAF64, GraphemeBreak::Lv),
    (0xAF65, 0xAF7F, GraphemeBreak::Lvt),
    (0xAF80, 0xAF80, GraphemeBreak::Lv),
    (0xAF81, 0xAF9B, GraphemeBreak::Lvt),
    (0xAF9C, 0xAF9C, GraphemeBreak::Lv),
    (0xAF9D, 0xAFB7, GraphemeBreak::Lvt),
    (0xAFB8, 0xAFB8, GraphemeBreak::Lv),
    (0xAFB9, 0xAFD3, GraphemeBreak::Lvt),
    (0xAFD4, 0xAFD4, GraphemeBreak::Lv),
    (0xAFD5, 0xAFEF, GraphemeBreak::Lvt),
    (0xAFF0, 0xAFF0, GraphemeBreak::Lv),
    (0xAFF1, 0xB00B, GraphemeBreak::Lvt),
    (0xB00C, 0xB00C, GraphemeBreak::Lv),
    (0xB00D, 0xB027, GraphemeBreak::Lvt),
    (0xB028, 0xB028, GraphemeBreak::Lv),
    (0xB029, 0xB043, GraphemeBreak::Lvt),
    (0xB044, 0xB044, GraphemeBreak::Lv),
    (0xB045, 0xB05F, GraphemeBreak::Lvt),
    (0xB060, 0xB060, GraphemeBreak::Lv),
    (0xB061, 0xB07B, GraphemeBreak::Lvt),
    (0xB07C, 0xB07C, GraphemeBreak::Lv),
    (0xB07D, 0xB097, GraphemeBreak::Lvt),
    (0xB098, 0xB098, GraphemeBreak::Lv),
    (0xB099, 0xB0B3, GraphemeBreak::Lvt),
    (0xB0B4, 0xB0B4, GraphemeBreak::Lv),
    (0xB0B5, 0xB0CF, GraphemeBreak::Lvt),
    (0xB0D0, 0xB0D0, GraphemeBreak::Lv),
    (0xB0D1, 0xB0EB, GraphemeBreak::Lvt),
    (0xB0EC, 0xB0EC, GraphemeBreak::Lv),
    (0xB0ED, 0xB107, GraphemeBreak::Lvt),
    (0xB108, 0xB108, GraphemeBreak::Lv),
    (0xB109, 0xB123, GraphemeBreak::Lvt),
    (0xB124, 0xB124, GraphemeBreak::Lv),
    (0xB125, 0xB13F, GraphemeBreak::Lvt),
    (0xB140, 0xB140, GraphemeBreak::Lv),
    (0xB141, 0xB15B, GraphemeBreak::Lvt),
    (0xB15C, 0xB15C, GraphemeBreak::Lv),
    (0xB15D, 0xB177, GraphemeBreak::Lvt),
    (0xB178, 0xB178, GraphemeBreak::Lv),
    (0xB179, 0xB193, GraphemeBreak::Lvt),
    (0xB194, 0xB194, GraphemeBreak::Lv),
    (0xB195, 0xB1AF, GraphemeBreak::Lvt),
    (0xB1B0, 0xB1B0, GraphemeBreak::Lv),
    (0xB1B1, 0xB1CB, GraphemeBreak::Lvt),
    (0xB1CC, 0xB1CC, GraphemeBreak::Lv),
    (0xB1CD, 0xB1E7, GraphemeBreak::Lvt),
    (0xB1E8, 0xB1E8, GraphemeBreak::Lv),
    (0xB1E9, 0xB203, GraphemeBreak::Lvt),
    (0xB204, 0xB204, GraphemeBreak::Lv),
    (0xB205, 0xB21F, GraphemeBreak::Lvt),
    (0xB220, 0xB220, GraphemeBreak::Lv),
    (0xB221, 0xB23B, GraphemeBreak::Lvt),
    (0xB23C, 0xB23C, GraphemeBreak::Lv),
    (0xB23D, 0xB257, GraphemeBreak::Lvt),
    (0xB258, 0xB258, GraphemeBreak::Lv),
    (0xB259, 0xB273, GraphemeBreak::Lvt),
    (0xB274, 0xB274, GraphemeBreak::Lv),
    (0xB275, 0xB28F, GraphemeBreak::Lvt),
    (0xB290, 0xB290, GraphemeBreak::Lv),
    (0xB291, 0xB2AB, GraphemeBreak::Lvt),
    (0xB2AC, 0xB2AC, GraphemeBreak::Lv),
    (0xB2AD, 0xB2C7, GraphemeBreak::Lvt),
    (0xB2C8, 0xB2C8, GraphemeBreak::Lv),
    (0xB2C9, 0xB2E3, GraphemeBreak::Lvt),
    (0xB2E4, 0xB2E4, GraphemeBreak::Lv),
    (0xB2E5, 0xB2FF, GraphemeBreak::Lvt),
    (0xB300, 0xB300, GraphemeBreak::Lv),
    (0xB301, 0xB31B, GraphemeBreak::Lvt),
    (0xB31C, 0xB31C, GraphemeBreak::Lv),
    (0xB31D, 0xB337, GraphemeBreak::Lvt),
    (0xB338, 0xB338, GraphemeBreak::Lv),
    (0xB339, 0xB353, GraphemeBreak::Lvt),
    (0xB354, 0xB354, GraphemeBreak::Lv),
    (0xB355, 0xB36F, GraphemeBreak::Lvt),
    (0xB370, 0xB370, GraphemeBreak::Lv),
    (0xB371, 0xB38B, GraphemeBreak::Lvt),
    (0xB38C, 0xB38C, GraphemeBreak::Lv),
    (0xB38D, 0xB3A7, GraphemeBreak::Lvt),
    (0xB3A8, 0xB3A8, GraphemeBreak::Lv),
    (0xB3A9, 0xB3C3, GraphemeBreak::Lvt),
    (0xB3C4, 0xB3C4, GraphemeBreak::Lv),
    (0xB3C5, 0xB3DF, GraphemeBreak::Lvt),
    (0xB3E0, 0xB3E0, GraphemeBreak::Lv),
    (0xB3E1, 0xB3FB, GraphemeBreak::Lvt),
    (0xB3FC, 0xB3FC, GraphemeBreak::Lv),
    (0xB3FD, 0xB417, GraphemeBreak::Lvt),
    (0xB418, 0xB418, GraphemeBreak::Lv),
    (0xB419, 0xB433, GraphemeBreak::Lvt),
    (0xB434, 0xB434, GraphemeBreak::Lv),
    (0xB435, 0xB44F, GraphemeBreak::Lvt),
    (0xB450, 0xB450, GraphemeBreak::Lv),
    (0xB451, 0xB46B, GraphemeBreak::Lvt),
    (0xB46C, 0xB46C, GraphemeBreak::Lv),
    (0xB46D, 0xB487, GraphemeBreak::Lvt),
    (0xB488, 0xB488, GraphemeBreak::Lv),
    (0xB489, 0xB4A3, GraphemeBreak::Lvt),
    (0xB4A4, 0xB4A4, GraphemeBreak::Lv),
    (0xB4A5, 0xB4BF, GraphemeBreak::Lvt),
    (0xB4C0, 0xB4C0, GraphemeBreak::Lv),
    (0xB4C1, 0xB4DB, GraphemeBreak::Lvt),
    (0xB4DC, 0xB4DC, GraphemeBreak::Lv),
    (0xB4DD, 0xB4F7, GraphemeBreak::Lvt),
    (0xB4F8, 0xB4F8, GraphemeBreak::Lv),
    (0xB4F9, 0xB513, GraphemeBreak::Lvt),
    (0xB514, 0xB514, GraphemeBreak::Lv),
    (0xB515, 0xB52F, GraphemeBreak::Lvt),
    (0xB530, 0xB530, GraphemeBreak::Lv),
    (0xB531, 0xB54B, GraphemeBreak::Lvt),
    (0xB54C, 0xB54C, GraphemeBreak::Lv),
    (0xB54D, 0xB567, GraphemeBreak::Lvt),
    (0xB568, 0xB568, GraphemeBreak::Lv),
    (0xB569, 0xB583, GraphemeBreak::Lvt),
    (0xB584, 0xB584, GraphemeBreak::Lv),
    (0xB585, 0xB59F, GraphemeBreak::Lvt),
    (0xB5A0, 0xB5A0, GraphemeBreak::Lv),
    (0xB5A1, 0xB5BB, GraphemeBreak::Lvt),
    (0xB5BC, 0xB5BC, GraphemeBreak::Lv),
    (0xB5BD, 0xB5D7, GraphemeBreak::Lvt),
    (0xB5D8, 0xB5D8, GraphemeBreak::Lv),
    (0xB5D9, 0xB5F3, GraphemeBreak::Lvt),
    (0xB5F4, 0xB5F4, GraphemeBreak::Lv),
    (0xB5F5, 0xB60F, GraphemeBreak::Lvt),
    (0xB610, 0xB610, GraphemeBreak::Lv),
    (0xB611, 0xB62B, GraphemeBreak::Lvt),
    (0xB62C, 0xB62C, GraphemeBreak::Lv),
    (0xB62D, 0xB647, GraphemeBreak::Lvt),
    (0xB648, 0xB648, GraphemeBreak::Lv),
    (0xB649, 0xB663, GraphemeBreak::Lvt),
    (0xB664, 0xB664, GraphemeBreak::Lv),
    (0xB665, 0xB67F, GraphemeBreak::Lvt),
    (0xB680, 0xB680, GraphemeBreak::Lv),
    (0xB681, 0xB69B, GraphemeBreak::Lvt),
    (0xB69C, 0xB69C, GraphemeBreak::Lv),
    (0xB69D, 0xB6B7, GraphemeBreak::Lvt),
    (0xB6B8, 0xB6B8, GraphemeBreak::Lv),
    (0xB6B9, 0xB6D3, GraphemeBreak::Lvt),
    (0xB6D4, 0xB6D4, GraphemeBreak::Lv),
    (0xB6D5, 0xB6EF, GraphemeBreak::Lvt),
    (0xB6F0, 0xB6F0, GraphemeBreak::Lv),
    (0xB6F1, 0xB70B, GraphemeBreak::Lvt),
    (0xB70C, 0xB70C, GraphemeBreak::Lv),
    (0xB70D, 0xB727, GraphemeBreak::Lvt),
    (0xB728, 0xB728, GraphemeBreak::Lv),
    (0xB729, 0xB743, GraphemeBreak::Lvt),
    (0xB744, 0xB744, GraphemeBreak::Lv),
    (0xB745, 0xB75F, GraphemeBreak::Lvt),
    (0xB760, 0xB760, GraphemeBreak::Lv),
    (0xB761, 0xB77B, GraphemeBreak::Lvt),
    (0xB77C, 0xB77C, GraphemeBreak::Lv),
    (0xB77D, 0xB797, GraphemeBreak::Lvt),
    (0xB798, 0xB798, GraphemeBreak::Lv),
    (0xB799, 0xB7B3, GraphemeBreak::Lvt),
    (0xB7B4, 0xB7B4, GraphemeBreak::Lv),
    (0xB7B5, 0xB7CF, GraphemeBreak::Lvt),
    (0xB7D0, 0xB7D0, GraphemeBreak::Lv),
    (0xB7D1, 0xB7EB, GraphemeBreak::Lvt),
    (0xB7EC, 0xB7EC, GraphemeBreak::Lv),
    (0xB7ED, 0xB807, GraphemeBreak::Lvt),
    (0xB808, 0xB808, GraphemeBreak::Lv),
    (0xB809, 0xB823, GraphemeBreak::Lvt),
    (0xB824, 0xB824, GraphemeBreak::Lv),
    (0xB825, 0xB83F, GraphemeBreak::Lvt),
    (0xB840, 0xB840, GraphemeBreak::Lv),
    (0xB841, 0xB85B, GraphemeBreak::Lvt),
    (0xB85C, 0xB85C, GraphemeBreak::Lv),
    (0xB85D, 0xB877, GraphemeBreak::Lvt),
    (0xB878, 0xB878, GraphemeBreak::Lv),
    (0xB879, 0xB893, GraphemeBreak::Lvt),
    (0xB894, 0xB894, GraphemeBreak::Lv),
    (0xB895, 0xB8AF, GraphemeBreak::Lvt),
    (0xB8B0, 0xB8B0, GraphemeBreak::Lv),
    (0xB8B1, 0xB8CB, GraphemeBreak::Lvt),
    (0xB8CC, 0xB8CC, GraphemeBreak::Lv),
    (0xB8CD, 0xB8E7, GraphemeBreak::Lvt),
    (0xB8E8, 0xB8E8, GraphemeBreak::Lv),
    (0xB8E9, 0xB903, GraphemeBreak::Lvt),
    (0xB904, 0xB904, GraphemeBreak::Lv),
    (0xB905, 0xB91F, GraphemeBreak::Lvt),
    (0xB920, 0xB920, GraphemeBreak::Lv),
    (0xB921, 0xB93B, GraphemeBreak::Lvt),
    (0xB93C, 0xB93C, GraphemeBreak::Lv),
    (0xB93D, 0xB957, GraphemeBreak::Lvt),
    (0xB958, 0xB958, GraphemeBreak::Lv),
    (0xB959, 0xB973, GraphemeBreak::Lvt),
    (0xB974, 0xB974, GraphemeBreak::Lv),
    (0xB975, 0xB98F, GraphemeBreak::Lvt),
    (0xB990, 0xB990, GraphemeBreak::Lv),
    (0xB991, 0xB9AB, GraphemeBreak::Lvt),
    (0xB9AC, 0xB9AC, GraphemeBreak::Lv),
    (0xB9AD, 0xB9C7, GraphemeBreak::Lvt),
    (0xB9C8, 0xB9C8, GraphemeBreak::Lv),
    (0xB9C9, 0xB9E3, GraphemeBreak::Lvt),
    (0xB9E4, 0xB9E4, GraphemeBreak::Lv),
    (0xB9E5, 0xB9FF, GraphemeBreak::Lvt),
    (0xBA00, 0xBA00, GraphemeBreak::Lv),
    (0xBA01, 0xBA1B, GraphemeBreak::Lvt),
    (0xBA1C, 0xBA1C, GraphemeBreak::Lv),
    (0xBA1D, 0xBA37, GraphemeBreak::Lvt),
    (0xBA38, 0xBA38, GraphemeBreak::Lv),
    (0xBA39, 0xBA53, GraphemeBreak::Lvt),
    (0xBA54, 0xBA54, GraphemeBreak::Lv),
    (0xBA55, 0xBA6F, GraphemeBreak::Lvt),
    (0xBA70, 0xBA70, GraphemeBreak::Lv),
    (0xBA71, 0xBA8B, GraphemeBreak::Lvt),
    (0xBA8C, 0xBA8C, GraphemeBreak::Lv),
    (0xBA8D, 0xBAA7, GraphemeBreak::Lvt),
    (0xBAA8, 0xBAA8, GraphemeBreak::Lv),
    (0xBAA9, 0xBAC3, GraphemeBreak::Lvt),
    (0xBAC4, 0xBAC4, GraphemeBreak::Lv),
    (0xBAC5, 0xBADF, GraphemeBreak::Lvt),
    (0xBAE0, 0xBAE0, GraphemeBreak::Lv),
    (0xBAE1, 0xBAFB, GraphemeBreak::Lvt),
    (0xBAFC, 0xBAFC, GraphemeBreak::Lv),
    (0xBAFD, 0xBB17, GraphemeBreak::Lvt),
    (0xBB18, 0xBB18, GraphemeBreak::Lv),
    (0xBB19, 0xBB33, GraphemeBreak::Lvt),
    (0xBB34, 0xBB34, GraphemeBreak::Lv),
    (0xBB35, 0xBB4F, GraphemeBreak::Lvt),
    (0xBB50, 0xBB50, GraphemeBreak::Lv),
    (0xBB51, 0xBB6B, GraphemeBreak::Lvt),
    (0xBB6C, 0xBB6C, GraphemeBreak::Lv),
    (0xBB6D, 0xBB87, GraphemeBreak::Lvt),
    (0xBB88, 0xBB88, GraphemeBreak::Lv),
    (0xBB89, 0xBBA3, GraphemeBreak::Lvt),
    (0xBBA4, 0xBBA4, GraphemeBreak::Lv),
    (0xBBA5, 0xBBBF, GraphemeBreak::Lvt),
    (0xBBC0, 0xBBC0, GraphemeBreak::Lv),
    (0xBBC1, 0xBBDB, GraphemeBreak::Lvt),
    (0xBBDC, 0xBBDC, GraphemeBreak::Lv),
    (0xBBDD, 0xBBF7, GraphemeBreak::Lvt),
    (0xBBF8, 0xBBF8, GraphemeBreak::Lv),
    (0xBBF9, 0xBC13, GraphemeBreak::Lvt),
    (0xBC14, 0xBC14, GraphemeBreak::Lv),
    (0xBC15, 0xBC2F, GraphemeBreak::Lvt),
    (0xBC30, 0xBC30, GraphemeBreak::Lv),
    (0xBC31, 0xBC4B, GraphemeBreak::Lvt),
    (0xBC4C, 0xBC4C, GraphemeBreak::Lv),
    (0xBC4D, 0xBC67, GraphemeBreak::Lvt),
    (0xBC68, 0xBC68, GraphemeBreak::Lv),
    (0xBC69, 0xBC83, GraphemeBreak::Lvt),
    (0xBC84, 0xBC84, GraphemeBreak::Lv),
    (0xBC85, 0xBC9F, GraphemeBreak::Lvt),
    (0xBCA0, 0xBCA0, GraphemeBreak::Lv),
    (0xBCA1, 0xBCBB, GraphemeBreak::Lvt),
    (0xBCBC, 0xBCBC, GraphemeBreak::Lv),
    (0xBCBD, 0xBCD7, GraphemeBreak::Lvt),
    (0xBCD8, 0xBCD8, GraphemeBreak::Lv),
    (0xBCD9, 0xBCF3, GraphemeBreak::Lvt),
    (0xBCF4, 0xBCF4, GraphemeBreak::Lv),
    (0xBCF5, 0xBD0F, GraphemeBreak::Lvt),
    (0xBD10, 0xBD10, GraphemeBreak::Lv),
    (0xBD11, 0xBD2B, GraphemeBreak::Lvt),
    (0xBD2C, 0xBD2C, GraphemeBreak::Lv),
    (0xBD2D, 0xBD47, GraphemeBreak::Lvt),
    (0xBD48, 0xBD48, GraphemeBreak::Lv),
    (0xBD49, 0xBD63, GraphemeBreak::Lvt),
    (0xBD64, 0xBD64, GraphemeBreak::Lv),
    (0xBD65, 0xBD7F, GraphemeBreak::Lvt),
    (0xBD80, 0xBD80, GraphemeBreak::Lv),
    (0xBD81, 0xBD9B, GraphemeBreak::Lvt),
    (0xBD9C, 0xBD9C, GraphemeBreak::Lv),
    (0xBD9D, 0xBDB7, GraphemeBreak::Lvt),
    (0xBDB8, 0xBDB8, GraphemeBreak::Lv),
    (0xBDB9, 0xBDD3, GraphemeBreak::Lvt),
    (0xBDD4, 0xBDD4, GraphemeBreak::Lv),
    (0xBDD5, 0xBDEF, GraphemeBreak::Lvt),
    (0xBDF0, 0xBDF0, GraphemeBreak::Lv),
    (0xBDF1, 0xBE0B, GraphemeBreak::Lvt),
    (0xBE0C, 0xBE0C, GraphemeBreak::Lv),
    (0xBE0D, 0xBE27, GraphemeBreak::Lvt),
    (0xBE28, 0xBE28, GraphemeBreak::Lv),
    (0xBE29, 0xBE43, GraphemeBreak::Lvt),
    (0xBE44, 0xBE44, GraphemeBreak::Lv),
    (0xBE45, 0xBE5F, GraphemeBreak::Lvt),
    (0xBE60, 0xBE60, GraphemeBreak::Lv),
    (0xBE61, 0xBE7B, GraphemeBreak::Lvt),
    (0xBE7C, 0xBE7C, GraphemeBreak::Lv),
    (0xBE7D, 0xBE97, GraphemeBreak::Lvt),
    (0xBE98, 0xBE98, GraphemeBreak::Lv),
    (0xBE99, 0xBEB3, GraphemeBreak::Lvt),
    (0xBEB4, 0xBEB4, GraphemeBreak::Lv),
    (0xBEB5, 0xBECF, GraphemeBreak::Lvt),
    (0xBED0, 0xBED0, GraphemeBreak::Lv),
    (0xBED1, 0xBEEB, GraphemeBreak::Lvt),
    (0xBEEC, 0xBEEC, GraphemeBreak::Lv),
    (0xBEED, 0xBF07, GraphemeBreak::Lvt),
    (0xBF08, 0xBF08, GraphemeBreak::Lv),
    (0xBF09, 0xBF23, GraphemeBreak::Lvt),
    (0xBF24, 0xBF24, GraphemeBreak::Lv),
    (0xBF25, 0xBF3F, GraphemeBreak::Lvt),
    (0xBF40, 0xBF40, GraphemeBreak::Lv),
    (0xBF41, 0xBF5B, GraphemeBreak::Lvt),
    (0xBF5C, 0xBF5C, GraphemeBreak::Lv),
    (0xBF5D, 0xBF77, GraphemeBreak::Lvt),
    (0xBF78, 0xBF78, GraphemeBreak::Lv),
    (0xBF79, 0xBF93, GraphemeBreak::Lvt),
    (0xBF94, 0xBF94, GraphemeBreak::Lv),
    (0xBF95, 0xBFAF, GraphemeBreak::Lvt),
    (0xBFB0, 0xBFB0, GraphemeBreak::Lv),
    (0xBFB1, 0xBFCB, GraphemeBreak::Lvt),
    (0xBFCC, 0xBFCC, GraphemeBreak::Lv),
    (0xBFCD, 0xBFE7, GraphemeBreak::Lvt),
    (0xBFE8, 0xBFE8, GraphemeBreak::Lv),
    (0xBFE9, 0xC003, GraphemeBreak::Lvt),
    (0xC004, 0xC004, GraphemeBreak::Lv),
    (0xC005, 0xC01F, GraphemeBreak::Lvt),
    (0xC020, 0xC020, GraphemeBreak::Lv),
    (0xC021, 0xC03B, GraphemeBreak::Lvt),
    (0xC03C, 0xC03C, GraphemeBreak::Lv),
    (0xC03D, 0xC057, GraphemeBreak::Lvt),
    (0xC058, 0xC058, GraphemeBreak::Lv),
    (0xC059, 0xC073, GraphemeBreak::Lvt),
    (0xC074, 0xC074, GraphemeBreak::Lv),
    (0xC075, 0xC08F, GraphemeBreak::Lvt),
    (0xC090, 0xC090, GraphemeBreak::Lv),
    (0xC091, 0xC0AB, GraphemeBreak::Lvt),
    (0xC0AC, 0xC0AC, GraphemeBreak::Lv),
    (0xC0AD, 0xC0C7, GraphemeBreak::Lvt),
    (0xC0C8, 0xC0C8, GraphemeBreak::Lv),
    (0xC0C9, 0xC0E3, GraphemeBreak::Lvt),
    (0xC0E4, 0xC0E4, GraphemeBreak::Lv),
    (0xC0E5, 0xC0FF, GraphemeBreak::Lvt),
    (0xC100, 0xC100, GraphemeBreak::Lv),
    (0xC101, 0xC11B, GraphemeBreak::Lvt),
    (0xC11C, 0xC11C, GraphemeBreak::Lv),
    (0xC11D, 0xC137, GraphemeBreak::Lvt),
    (0xC138, 0xC138, GraphemeBreak::Lv),
    (0xC139, 0xC153, GraphemeBreak::Lvt),
    (0xC154, 0xC154, GraphemeBreak::Lv),
    (0xC155, 0xC16F, GraphemeBreak::Lvt),
    (0xC170, 0xC170, GraphemeBreak::Lv),
    (0xC171, 0xC18B, GraphemeBreak::Lvt),
    (0xC18C, 0xC18C, GraphemeBreak::Lv),
    (0xC18D, 0xC1A7, GraphemeBreak::Lvt),
    (0xC1A8, 0xC1A8, GraphemeBreak::Lv),
    (0xC1A9, 0xC1C3, GraphemeBreak::Lvt),
    (0xC1C4, 0xC1C4, GraphemeBreak::Lv),
    (0xC1C5, 0xC1DF, GraphemeBreak::Lvt),
    (0xC1E0, 0xC1E0, GraphemeBreak::Lv),
    (0xC1E1, 0xC1FB, GraphemeBreak::Lvt),
    (0xC1FC, 0xC1FC, GraphemeBreak::Lv),
    (0xC1FD, 0xC217, GraphemeBreak::Lvt),
    (0xC218, 0xC218, GraphemeBreak::Lv),
    (0xC219, 0xC233, GraphemeBreak::Lvt),
    (0xC234, 0xC234, GraphemeBreak::Lv),
    (0xC235, 0xC24F, GraphemeBreak::Lvt),
    (0xC250, 0xC250, GraphemeBreak::Lv),
    (0xC251, 0xC26B, GraphemeBreak::Lvt),
    (0xC26C, 0xC26C, GraphemeBreak::Lv),
    (0xC26D, 0xC287, GraphemeBreak::Lvt),
    (0xC288, 0xC288, GraphemeBreak::Lv),
    (0xC289, 0xC2A3, GraphemeBreak::Lvt),
    (0xC2A4, 0xC2A4, GraphemeBreak::Lv),
    (0xC2A5, 0xC2BF, GraphemeBreak::Lvt),
    (0xC2C0, 0xC2C0, GraphemeBreak::Lv),
    (0xC2C1, 0xC2DB, GraphemeBreak::Lvt),
    (0xC2DC, 0xC2DC, GraphemeBreak::Lv),
    (0xC2DD, 0xC2F7, GraphemeBreak::Lvt),
    (0xC2F8, 0xC2F8, GraphemeBreak::Lv),
    (0xC2F9, 0xC313, GraphemeBreak::Lvt),
    (0xC314, 0xC314, GraphemeBreak::Lv),
    (0xC315, 0xC32F, GraphemeBreak::Lvt),
    (0xC330, 0xC330, GraphemeBreak::Lv),
    (0xC331, 0xC34B, GraphemeBreak::Lvt),
    (0xC34C, 0xC34C, GraphemeBreak::Lv),
    (0xC34D, 0xC367, GraphemeBreak::Lvt),
    (0xC368, 0xC368, GraphemeBreak::Lv),
    (0xC369, 0xC383, GraphemeBreak::Lvt),
    (0xC384, 0xC384, GraphemeBreak::Lv),
    (0xC385, 0xC39F, GraphemeBreak::Lvt),
    (0xC3A0, 0xC3A0, GraphemeBreak::Lv),
    (0xC3A1, 0xC3BB, GraphemeBreak::Lvt),
    (0xC3BC, 0xC3BC, GraphemeBreak::Lv),
    (0xC3BD, 0xC3D7, GraphemeBreak::Lvt),
    (0xC3D8, 0xC3D8, GraphemeBreak::Lv),
    (0xC3D9, 0xC3F3, GraphemeBreak::Lvt),
    (0xC3F4, 0xC3F4, GraphemeBreak::Lv),
    (0xC3F5, 0xC40F, GraphemeBreak::Lvt),
    (0xC410, 0xC410, GraphemeBreak::Lv),
    (0xC411, 0xC42B, GraphemeBreak::Lvt),
    (0xC42C, 0xC42C, GraphemeBreak::Lv),
    (0xC42D, 0xC447, GraphemeBreak::Lvt),
    (0xC448, 0xC448, GraphemeBreak::Lv),
    (0xC449, 0xC463, GraphemeBreak::Lvt),
    (0xC464, 0xC464, GraphemeBreak::Lv),
    (0xC465, 0xC47F, GraphemeBreak::Lvt),
    (0xC480, 0xC480, GraphemeBreak::Lv),
    (0xC481, 0xC49B, GraphemeBreak::Lvt),
    (0xC49C, 0xC49C, GraphemeBreak::Lv),
    (0xC49D, 0xC4B7, GraphemeBreak::Lvt),
    (0xC4B8, 0xC4B8, GraphemeBreak::Lv),
    (0xC4B9, 0xC4D3, GraphemeBreak::Lvt),
    (0xC4D4, 0xC4D4, GraphemeBreak::Lv),
    (0xC4D5, 0xC4EF, GraphemeBreak::Lvt),
    (0xC4F0, 0xC4F0, GraphemeBreak::Lv),
    (0xC4F1, 0xC50B, GraphemeBreak::Lvt),
    (0xC50C, 0xC50C, GraphemeBreak::Lv),
    (0xC50D, 0xC527, GraphemeBreak::Lvt),
    (0xC528, 0xC528, GraphemeBreak::Lv),
    (0xC529, 0xC543, GraphemeBreak::Lvt),
    (0xC544, 0xC544, GraphemeBreak::Lv),
    (0xC545, 0xC55F, GraphemeBreak::Lvt),
    (0xC560, 0xC560, GraphemeBreak::Lv),
    (0xC561, 0xC57B, GraphemeBreak::Lvt),
    (0xC57C, 0xC57C, GraphemeBreak::Lv),
    (0xC57D, 0xC597, GraphemeBreak::Lvt),
    (0xC598, 0xC598, GraphemeBreak::Lv),
    (0xC599, 0xC5B3, GraphemeBreak::Lvt),
    (0xC5B4, 0xC5B4, GraphemeBreak::Lv),
    (0xC5B5, 0xC5CF, GraphemeBreak::Lvt),
    (0xC5D0, 0xC5D0, GraphemeBreak::Lv),
    (0xC5D1, 0xC5EB, GraphemeBreak::Lvt),
    (0xC5EC, 0xC5EC, GraphemeBreak::Lv),
    (0xC5ED, 0xC607, GraphemeBreak::Lvt),
    (0xC608, 0xC608, GraphemeBreak::Lv),
    (0xC609, 0xC623, GraphemeBreak::Lvt),
    (0xC624, 0xC624, GraphemeBreak::Lv),
    (0xC625, 0xC63F, GraphemeBreak::Lvt),
    (0xC640, 0xC640, GraphemeBreak::Lv),
    (0xC641, 0xC65B, GraphemeBreak::Lvt),
    (0xC65C, 0xC65C, GraphemeBreak::Lv),
    (0xC65D, 0xC677, GraphemeBreak::Lvt),
    (0xC678, 0xC678, GraphemeBreak::Lv),
    (0xC679, 0xC693, GraphemeBreak::Lvt),
    (0xC694, 0xC694, GraphemeBreak::Lv),
    (0xC695, 0xC6AF, GraphemeBreak::Lvt),
    (0xC6B0, 0xC6B0, GraphemeBreak::Lv),
    (0xC6B1, 0xC6CB, GraphemeBreak::Lvt),
    (0xC6CC, 0xC6CC, GraphemeBreak::Lv),
    (0xC6CD, 0xC6E7, GraphemeBreak::Lvt),
    (0xC6E8, 0xC6E8, GraphemeBreak::Lv),
    (0xC6E9, 0xC703, GraphemeBreak::Lvt),
    (0xC704, 0xC704, GraphemeBreak::Lv),
    (0xC705, 0xC71F, GraphemeBreak::Lvt),
    (0xC720, 0xC720, GraphemeBreak::Lv),
    (0xC721, 0xC73B, GraphemeBreak::Lvt),
    (0xC73C, 0xC73C, GraphemeBreak::Lv),
    (0xC73D, 0xC757, GraphemeBreak::Lvt),
    (0xC758, 0xC758, GraphemeBreak::Lv),
    (0xC759, 0xC773, GraphemeBreak::Lvt),
    (0xC774, 0xC774, GraphemeBreak::Lv),
    (0xC775, 0xC78F, GraphemeBreak::Lvt),
    (0xC790, 0xC790, GraphemeBreak::Lv),
    (0xC791, 0xC7AB, GraphemeBreak::Lvt),
    (0xC7AC, 0xC7AC, GraphemeBreak::Lv),
    (0xC7AD, 0xC7C7, GraphemeBreak::Lvt),
    (0xC7C8, 0xC7C8, GraphemeBreak::Lv),
    (0xC7C9, 0xC7E3, GraphemeBreak::Lvt),
    (0xC7E4, 0xC7E4, GraphemeBreak::Lv),
    (0xC7E5, 0xC7FF, GraphemeBreak::Lvt),
    (0xC800, 0xC800, GraphemeBreak::Lv),
    (0xC801, 0xC81B, GraphemeBreak::Lvt),
    (0xC81C, 0xC81C, GraphemeBreak::Lv),
    (0xC81D, 0xC837, GraphemeBreak::Lvt),
    (0xC838, 0xC838, GraphemeBreak::Lv),
    (0xC839, 0xC853, GraphemeBreak::Lvt),
    (0xC854, 0xC854, GraphemeBreak::Lv),
    (0xC855, 0xC86F, GraphemeBreak::Lvt),
    (0xC870, 0xC870, GraphemeBreak::Lv),
    (0xC871, 0xC88B, GraphemeBreak::Lvt),
    (0xC88C, 0xC88C, GraphemeBreak::Lv),
    (0xC88D, 0xC8A7, GraphemeBreak::Lvt),
    (0xC8A8, 0xC8A8, GraphemeBreak::Lv),
    (0xC8A9, 0xC8C3, GraphemeBreak::Lvt),
    (0xC8C4, 0xC8C4, GraphemeBreak::Lv),
    (0xC8C5, 0xC8DF, GraphemeBreak::Lvt),
    (0xC8E0, 0xC8E0, GraphemeBreak::Lv),
    (0xC8E1, 0xC8FB, GraphemeBreak::Lvt),
    (0xC8FC, 0xC8FC, GraphemeBreak::Lv),
    (0xC8FD, 0xC917, GraphemeBreak::Lvt),
    (0xC918, 0xC918, GraphemeBreak::Lv),
    (0xC919, 0xC933, GraphemeBreak::Lvt),
    (0xC934, 0xC934, GraphemeBreak::Lv),
    (0xC935, 0xC94F, GraphemeBreak::Lvt),
    (0xC950, 0xC950, GraphemeBreak::Lv),
    (0xC951, 0xC96B, GraphemeBreak::Lvt),
    (0xC96C, 0xC96C, GraphemeBreak::Lv),
    (0xC96D, 0xC987, GraphemeBreak::Lvt),
    (0xC988, 0xC988, GraphemeBreak::Lv),
    (0xC989, 0xC9A3, GraphemeBreak::Lvt),
    (0xC9A4, 0xC9A4, GraphemeBreak::Lv),
    (0xC9A5, 0xC9BF, GraphemeBreak::Lvt),
    (0xC9C0, 0xC9C0, GraphemeBreak::Lv),
    (0xC9C1, 0xC9DB, GraphemeBreak::Lvt),
    (0xC9DC, 0xC9DC, GraphemeBreak::Lv),
    (0xC9DD, 0xC9F7, GraphemeBreak::Lvt),
    (0xC9F8, 0xC9F8, GraphemeBreak::Lv),
    (0xC9F9, 0xCA13, GraphemeBreak::Lvt),
    (0xCA14, 0xCA14, GraphemeBreak::Lv),
    (0xCA15, 0xCA2F, GraphemeBreak::Lvt),
    (0xCA30, 0xCA30, GraphemeBreak::Lv),
    (0xCA31, 0xCA4B, GraphemeBreak::Lvt),
    (0xCA4C, 0xCA4C, GraphemeBreak::Lv),
    (0xCA4D, 0xCA67, GraphemeBreak::Lvt),
    (0xCA68, 0xCA68, GraphemeBreak::Lv),
    (0xCA69, 0xCA83, GraphemeBreak::Lvt),
    (0xCA84, 0xCA84, GraphemeBreak::Lv),
    (0xCA85, 0xCA9F, GraphemeBreak::Lvt),
    (0xCAA0, 0xCAA0, GraphemeBreak::Lv),
    (0xCAA1, 0xCABB, GraphemeBreak::Lvt),
    (0xCABC, 0xCABC, GraphemeBreak::Lv),
    (0xCABD, 0xCAD7, GraphemeBreak::Lvt),
    (0xCAD8, 0xCAD8, GraphemeBreak::Lv),
    (0xCAD9, 0xCAF3, GraphemeBreak::Lvt),
    (0xCAF4, 0xCAF4, GraphemeBreak::Lv),
    (0xCAF5, 0xCB0F, GraphemeBreak::Lvt),
    (0xCB10, 0xCB10, GraphemeBreak::Lv),
    (0xCB11, 0xCB2B, GraphemeBreak::Lvt),
    (0xCB2C, 0xCB2C, GraphemeBreak::Lv),
    (0xCB2D, 0xCB47, GraphemeBreak::Lvt),
    (0xCB48, 0xCB48, GraphemeBreak::Lv),
    (0xCB49, 0xCB63, GraphemeBreak::Lvt),
    (0xCB64, 0xCB64, GraphemeBreak::Lv),
    (0xCB65, 0xCB7F, GraphemeBreak::Lvt),
    (0xCB80, 0xCB80, GraphemeBreak::Lv),
    (0xCB81, 0xCB9B, GraphemeBreak::Lvt),
    (0xCB9C, 0xCB9C, GraphemeBreak::Lv),
    (0xCB9D, 0xCBB7, GraphemeBreak::Lvt),
    (0xCBB8, 0xCBB8, GraphemeBreak::Lv),
    (0xCBB9, 0xCBD3, GraphemeBreak::Lvt),
    (0xCBD4, 0xCBD4, GraphemeBreak::Lv),
    (0xCBD5, 0xCBEF, GraphemeBreak::Lvt),
    (0xCBF0, 0xCBF0, GraphemeBreak::Lv),
    (0xCBF1, 0xCC0B, GraphemeBreak::Lvt),
    (0xCC0C, 0xCC0C, GraphemeBreak::Lv),
    (0xCC0D, 0xCC27, GraphemeBreak::Lvt),
    (0xCC28, 0xCC28, GraphemeBreak::Lv),
    (0xCC29, 0xCC43, GraphemeBreak::Lvt),
    (0xCC44, 0xCC44, GraphemeBreak::Lv),
    (0xCC45, 0xCC5F, GraphemeBreak::Lvt),
    (0xCC60, 0xCC60, GraphemeBreak::Lv),
    (0xCC61, 0xCC7B, GraphemeBreak::Lvt),
    (0xCC7C, 0xCC7C, GraphemeBreak::Lv),
    (0xCC7D, 0xCC97, GraphemeBreak::Lvt),
    (0xCC98, 0xCC98, GraphemeBreak::Lv),
    (0xCC99, 0xCCB3, GraphemeBreak::Lvt),
    (0xCCB4, 0xCCB4, GraphemeBreak::Lv),
    (0xCCB5, 0xCCCF, GraphemeBreak::Lvt),
    (0xCCD0, 0xCCD0, GraphemeBreak::Lv),
    (0xCCD1, 0xCCEB, GraphemeBreak::Lvt),
    (0xCCEC, 0xCCEC, GraphemeBreak::Lv),
    (0xCCED, 0xCD07, GraphemeBreak::Lvt),
    (0xCD08, 0xCD08, GraphemeBreak::Lv),
    (0xCD09, 0xCD23, GraphemeBreak::Lvt),
    (0xCD24, 0xCD24, GraphemeBreak::Lv),
    (0xCD25, 0xCD3F, GraphemeBreak::Lvt),
    (0xCD40, 0xCD40, GraphemeBreak::Lv),
    (0xCD41, 0xCD5B, GraphemeBreak::Lvt),
    (0xCD5C, 0xCD5C, GraphemeBreak::Lv),
    (0xCD5D, 0xCD77, GraphemeBreak::Lvt),
    (0xCD78, 0xCD78, GraphemeBreak::Lv),
    (0xCD79, 0xCD93, GraphemeBreak::Lvt),
    (0xCD94, 0xCD94, GraphemeBreak::Lv),
    (0xCD95, 0xCDAF, GraphemeBreak::Lvt),
    (0xCDB0, 0xCDB0, GraphemeBreak::Lv),
    (0xCDB1, 0xCDCB, GraphemeBreak::Lvt),
    (0xCDCC, 0xCDCC, GraphemeBreak::Lv),
    (0xCDCD, 0xCDE7, GraphemeBreak::Lvt),
    (0xCDE8, 0xCDE8, GraphemeBreak::Lv),
    (0xCDE9, 0xCE03, GraphemeBreak::Lvt),
    (0xCE04, 0xCE04, GraphemeBreak::Lv),
    (0xCE05, 0xCE1F, GraphemeBreak::Lvt),
    (0xCE20, 0xCE20, GraphemeBreak::Lv),
    (0xCE21, 0xCE3B, GraphemeBreak::Lvt),
    (0xCE3C, 0xCE3C, GraphemeBreak::Lv),
    (0xCE3D, 0xCE57, GraphemeBreak::Lvt),
    (0xCE58, 0xCE58, GraphemeBreak::Lv),
    (0xCE59, 0xCE73, GraphemeBreak::Lvt),
    (0xCE74, 0xCE74, GraphemeBreak::Lv),
    (0xCE75, 0xCE8F, GraphemeBreak::Lvt),
    (0xCE90, 0xCE90, GraphemeBreak::Lv),
    (0xCE91, 0xCEAB, GraphemeBreak::Lvt),
    (0xCEAC, 0xCEAC, GraphemeBreak::Lv),
    (0xCEAD, 0xCEC7, GraphemeBreak::Lvt),
    (0xCEC8, 0xCEC8, GraphemeBreak::Lv),
    (0xCEC9, 0xCEE3, GraphemeBreak::Lvt),
    (0xCEE4, 0xCEE4, GraphemeBreak::Lv),
    (0xCEE5, 0xCEFF, GraphemeBreak::Lvt),
    (0xCF00, 0xCF00, GraphemeBreak::Lv),
    (0xCF01, 0xCF1B, GraphemeBreak::Lvt),
    (0xCF1C, 0xCF1C, GraphemeBreak::Lv),
    (0xCF1D, 0xCF37, GraphemeBreak::Lvt),
    (0xCF38, 0xCF38, GraphemeBreak::Lv),
    (0xCF39, 0xCF53, GraphemeBreak::Lvt),
    (0xCF54, 0xCF54, GraphemeBreak::Lv),
    (0xCF55, 0xCF6F, GraphemeBreak::Lvt),
    (0xCF70, 0xCF70, GraphemeBreak::Lv),
    (0xCF71, 0xCF8B, GraphemeBreak::Lvt),
    (0xCF8C, 0xCF8C, GraphemeBreak::Lv),
    (0xCF8D, 0xCFA7, GraphemeBreak::Lvt),
    (0xCFA8, 0xCFA8, GraphemeBreak::Lv),
    (0xCFA9, 0xCFC3, GraphemeBreak::Lvt),
    (0xCFC4, 0xCFC4, GraphemeBreak::Lv),
    (0xCFC5, 0xCFDF, GraphemeBreak::Lvt),
    (0xCFE0, 0xCFE0, GraphemeBreak::Lv),
    (0xCFE1, 0xCFFB, GraphemeBreak::Lvt),
    (0xCFFC, 0xCFFC, GraphemeBreak::Lv),
    (0xCFFD, 0xD017, GraphemeBreak::Lvt),
    (0xD018, 0xD018, GraphemeBreak::Lv),
    (0xD019, 0xD033, GraphemeBreak::Lvt),
    (0xD034, 0xD034, GraphemeBreak::Lv),
    (0xD035, 0xD04F, GraphemeBreak::Lvt),
    (0xD050, 0xD050, GraphemeBreak::Lv),
    (0xD051, 0xD06B, GraphemeBreak::Lvt),
    (0xD06C, 0xD06C, GraphemeBreak::Lv),
    (0xD06D, 0xD087, GraphemeBreak::Lvt),
    (0xD088, 0xD088, GraphemeBreak::Lv),
    (0xD089, 0xD0A3, GraphemeBreak::Lvt),
    (0xD0A4, 0xD0A4, GraphemeBreak::Lv),
    (0xD0A5, 0xD0BF, GraphemeBreak::Lvt),
    (0xD0C0, 0xD0C0, GraphemeBreak::Lv),
    (0xD0C1, 0xD0DB, GraphemeBreak::Lvt),
    (0xD0DC, 0xD0DC, GraphemeBreak::Lv),
    (0xD0DD, 0xD0F7, GraphemeBreak::Lvt),
    (0xD0F8, 0xD0F8, GraphemeBreak::Lv),
    (0xD0F9, 0xD113, GraphemeBreak::Lvt),
    (0xD114, 0xD114, GraphemeBreak::Lv),
    (0xD115, 0xD12F, GraphemeBreak::Lvt),
    (0xD130, 0xD130, GraphemeBreak::Lv),
    (0xD131, 0xD14B, GraphemeBreak::Lvt),
    (0xD14C, 0xD14C, GraphemeBreak::Lv),
    (0xD14D, 0xD167, GraphemeBreak::Lvt),
    (0xD168, 0xD168, GraphemeBreak::Lv),
    (0xD169, 0xD183, GraphemeBreak::Lvt),
    (0xD184, 0xD184, GraphemeBreak::Lv),
    (0xD185, 0xD19F, GraphemeBreak::Lvt),
    (0xD1A0, 0xD1A0, GraphemeBreak::Lv),
    (0xD1A1, 0xD1BB, GraphemeBreak::Lvt),
    (0xD1BC, 0xD1BC, GraphemeBreak::Lv),
    (0xD1BD, 0xD1D7, GraphemeBreak::Lvt),
    (0xD1D8, 0xD1D8, GraphemeBreak::Lv),
    (0xD1D9, 0xD1F3, GraphemeBreak::Lvt),
    (0xD1F4, 0xD1F4, GraphemeBreak::Lv),
    (0xD1F5, 0xD20F, GraphemeBreak::Lvt),
    (0xD210, 0xD210, GraphemeBreak::Lv),
    (0xD211, 0xD22B, GraphemeBreak::Lvt),
    (0xD22C, 0xD22C, GraphemeBreak::Lv),
    (0xD22D, 0xD247, GraphemeBreak::Lvt),
    (0xD248, 0xD248, GraphemeBreak::Lv),
    (0xD249, 0xD263, GraphemeBreak::Lvt),
    (0xD264, 0xD264, GraphemeBreak::Lv),
    (0xD265, 0xD27F, GraphemeBreak::Lvt),
    (0xD280, 0xD280, GraphemeBreak::Lv),
    (0xD281, 0xD29B, GraphemeBreak::Lvt),
    (0xD29C, 0xD29C, GraphemeBreak::Lv),
    (0xD29D, 0xD2B7, GraphemeBreak::Lvt),
    (0xD2B8, 0xD2B8, GraphemeBreak::Lv),
    (0xD2B9, 0xD2D3, GraphemeBreak::Lvt),
    (0xD2D4, 0xD2D4, GraphemeBreak::Lv),
    (0xD2D5, 0xD2EF, GraphemeBreak::Lvt),
    (0xD2F0, 0xD2F0, GraphemeBreak::Lv),
    (0xD2F1, 0xD30B, GraphemeBreak::Lvt),
    (0xD30C, 0xD30C, GraphemeBreak::Lv),
    (0xD30D, 0xD327, GraphemeBreak::Lvt),
    (0xD328, 0xD328, GraphemeBreak::Lv),
    (0xD329, 0xD343, GraphemeBreak::Lvt),
    (0xD344, 0xD344, GraphemeBreak::Lv),
    (0xD345, 0xD35F, GraphemeBreak::Lvt),
    (0xD360, 0xD360, GraphemeBreak::Lv),
    (0xD361, 0xD37B, GraphemeBreak::Lvt),
    (0xD37C, 0xD37C, GraphemeBreak::Lv),
    (0xD37D, 0xD397, GraphemeBreak::Lvt),
    (0xD398, 0xD398, GraphemeBreak::Lv),
    (0xD399, 0xD3B3, GraphemeBreak::Lvt),
    (0xD3B4, 0xD3B4, GraphemeBreak::Lv),
    (0xD3B5, 0xD3CF, GraphemeBreak::Lvt),
    (0xD3D0, 0xD3D0, GraphemeBreak::Lv),
    (0xD3D1, 0xD3EB, GraphemeBreak::Lvt),
    (0xD3EC, 0xD3EC, GraphemeBreak::Lv),
    (0xD3ED, 0xD407, GraphemeBreak::Lvt),
    (0xD408, 0xD408, GraphemeBreak::Lv),
    (0xD409, 0xD423, GraphemeBreak::Lvt),
    (0xD424, 0xD424, GraphemeBreak::Lv),
    (0xD425, 0xD43F, GraphemeBreak::Lvt),
    (0xD440, 0xD440, GraphemeBreak::Lv),
    (0xD441, 0xD45B, GraphemeBreak::Lvt),
    (0xD45C, 0xD45C, GraphemeBreak::Lv),
    (0xD45D, 0xD477, GraphemeBreak::Lvt),
    (0xD478, 0xD478, GraphemeBreak::Lv),
    (0xD479, 0xD493, GraphemeBreak::Lvt),
    (0xD494, 0xD494, GraphemeBreak::Lv),
    (0xD495, 0xD4AF, GraphemeBreak::Lvt),
    (0xD4B0, 0xD4B0, GraphemeBreak::Lv),
    (0xD4B1, 0xD4CB, GraphemeBreak::Lvt),
    (0xD4CC, 0xD4CC, GraphemeBreak::Lv),
    (0xD4CD, 0xD4E7, GraphemeBreak::Lvt),
    (0xD4E8, 0xD4E8, GraphemeBreak::Lv),
    (0xD4E9, 0xD503, GraphemeBreak::Lvt),
    (0xD504, 0xD504, GraphemeBreak::Lv),
    (0xD505, 0xD51F, GraphemeBreak::Lvt),
    (0xD520, 0xD520, GraphemeBreak::Lv),
    (0xD521, 0xD53B, GraphemeBreak::Lvt),
    (0xD53C, 0xD53C, GraphemeBreak::Lv),
    (0xD53D, 0xD557, GraphemeBreak::Lvt),
    (0xD558, 0xD558, GraphemeBreak::Lv),
    (0xD559, 0xD573, GraphemeBreak::Lvt),
    (0xD574, 0xD574, GraphemeBreak::Lv),
    (0xD575, 0xD58F, GraphemeBreak::Lvt),
    (0xD590, 0xD590, GraphemeBreak::Lv),
    (0xD591, 0xD5AB, GraphemeBreak::Lvt),
    (0xD5AC, 0xD5AC, GraphemeBreak::Lv),
    (0xD5AD, 0xD5C7, GraphemeBreak::Lvt),
    (0xD5C8, 0xD5C8, GraphemeBreak::Lv),
    (0xD5C9, 0xD5E3, GraphemeBreak::Lvt),
    (0xD5E4, 0xD5E4, GraphemeBreak::Lv),
    (0xD5E5, 0xD5FF, GraphemeBreak::Lvt),
    (0xD600, 0xD600, GraphemeBreak::Lv),
    (0xD601, 0xD61B, GraphemeBreak::Lvt),
    (0xD61C, 0xD61C, GraphemeBreak::Lv),
    (0xD61D, 0xD637, GraphemeBreak::Lvt),
    (0xD638, 0xD638, GraphemeBreak::Lv),
    (0xD639, 0xD653, GraphemeBreak::Lvt),
    (0xD654, 0xD654, GraphemeBreak::Lv),
    (0xD655, 0xD66F, GraphemeBreak::Lvt),
    (0xD670, 0xD670, GraphemeBreak::Lv),
    (0xD671, 0xD68B, GraphemeBreak::Lvt),
    (0xD68C, 0xD68C, GraphemeBreak::Lv),
    (0xD68D, 0xD6A7, GraphemeBreak::Lvt),
    (0xD6A8, 0xD6A8, GraphemeBreak::Lv),
    (0xD6A9, 0xD6C3, GraphemeBreak::Lvt),
    (0xD6C4, 0xD6C4, GraphemeBreak::Lv),
    (0xD6C5, 0xD6DF, GraphemeBreak::Lvt),
    (0xD6E0, 0xD6E0, GraphemeBreak::Lv),
    (0xD6E1, 0xD6FB, GraphemeBreak::Lvt),
    (0xD6FC, 0xD6FC, GraphemeBreak::Lv),
    (0xD6FD, 0xD717, GraphemeBreak::Lvt),
    (0xD718, 0xD718, GraphemeBreak::Lv),
    (0xD719, 0xD733, GraphemeBreak::Lvt),
    (0xD734, 0xD734, GraphemeBreak::Lv),
    (0xD735, 0xD74F, GraphemeBreak::Lvt),
    (0xD750, 0xD750, GraphemeBreak::Lv),
    (0xD751, 0xD76B, GraphemeBreak::Lvt),
    (0xD76C, 0xD76C, GraphemeBreak::Lv),
    (0xD76D, 0xD787, GraphemeBreak::Lvt),
    (0xD788, 0xD788, GraphemeBreak::Lv),
    (0xD789, 0xD7A3, GraphemeBreak::Lvt),
    (0xD7B0, 0xD7C6, GraphemeBreak::V),
    (0xD7CB, 0xD7FB, GraphemeBreak::T),
    (0xFB1E, 0xFB1E, GraphemeBreak::Extend),
    (0xFE00, 0xFE0F, GraphemeBreak::Extend),
    (0xFE20, 0xFE2F, GraphemeBreak::Extend),
    (0xFEFF, 0xFEFF, GraphemeBreak::Control),
    (0xFF9E, 0xFF9F, GraphemeBreak::Extend),
    (0xFFF9, 0xFFFB, GraphemeBreak::Control),
    (0x101FD, 0x101FD, GraphemeBreak::Extend),
    (0x102E0, 0x102E0, GraphemeBreak::Extend),
    (0x10376, 0x1037A, GraphemeBreak::Extend),
    (0x10A01, 0x10A03, GraphemeBreak::Extend),
    (0x10A05, 0x10A06, GraphemeBreak::Extend),
    (0x10A0C, 0x10A0F, GraphemeBreak::Extend),
    (0x10A38, 0x10A3A, GraphemeBreak::Extend),
    (0x10A3F, 0x10A3F, GraphemeBreak::Extend),
    (0x10AE5, 0x10AE6, GraphemeBreak::Extend),
    (0x10D24, 0x10D27, GraphemeBreak::Extend),
    (0x10EAB, 0x10EAC, GraphemeBreak::Extend),
    (0x10F46, 0x10F50, GraphemeBreak::Extend),
    (0x10F82, 0x10F85, GraphemeBreak::Extend),
    (0x11000, 0x11000, GraphemeBreak::SpacingMark),
    (0x11001, 0x11001, GraphemeBreak::Extend),
    (0x11002, 0x11002, GraphemeBreak::SpacingMark),
    (0x11038, 0x11046, GraphemeBreak::Extend),
    (0x11070, 0x11070, GraphemeBreak::Extend),
    (0x11073, 0x11074, GraphemeBreak::Extend),
    (0x1107F, 0x11081, GraphemeBreak::Extend),
    (0x11082, 0x11082, GraphemeBreak::SpacingMark),
    (0x110B0, 0x110B2, GraphemeBreak::SpacingMark),
    (0x110B3, 0x110B6, GraphemeBreak::Extend),
    (0x110B7, 0x110B8, GraphemeBreak::SpacingMark),
    (0x110B9, 0x110BA, GraphemeBreak::Extend),
    (0x110BD, 0x110BD, GraphemeBreak::Prepend),
    (0x110C2, 0x110C2, GraphemeBreak::Extend),
    (0x110CD, 0x110CD, GraphemeBreak::Prepend),
    (0x11100, 0x11102, GraphemeBreak::Extend),
    (0x11127, 0x1112B, GraphemeBreak::Extend),
    (0x1112C, 0x1112C, GraphemeBreak::SpacingMark),
    (0x1112D, 0x11134, GraphemeBreak::Extend),
    (0x11145, 0x11146, GraphemeBreak::SpacingMark),
    (0x11173, 0x11173, GraphemeBreak::Extend),
    (0x11180, 0x11181, GraphemeBreak::Extend),
    (0x11182, 0x11182, GraphemeBreak::SpacingMark),
    (0x111B3, 0x111B5, GraphemeBreak::SpacingMark),
    (0x111B6, 0x111BE, GraphemeBreak::Extend),
    (0x111BF, 0x111C0, GraphemeBreak::SpacingMark),
    (0x111C2, 0x111C3, GraphemeBreak::Prepend),
    (0x111C9, 0x111CC, GraphemeBreak::Extend),
    (0x111CE, 0x111CE, GraphemeBreak::SpacingMark),
    (0x111CF, 0x111CF, GraphemeBreak::Extend),
    (0x1122C, 0x1122E, GraphemeBreak::SpacingMark),
    (0x1122F, 0x11231, GraphemeBreak::Extend),
    (0x11232, 0x11233, GraphemeBreak::SpacingMark),
    (0x11234, 0x11234, GraphemeBreak::Extend),
    (0x11235, 0x11235, GraphemeBreak::SpacingMark),
    (0x11236, 0x11237, GraphemeBreak::Extend),
    (0x1123E, 0x1123E, GraphemeBreak::Extend),
    (0x112DF, 0x112DF, GraphemeBreak::Extend),
    (0x112E0, 0x112E2, GraphemeBreak::SpacingMark),
    (0x112E3, 0x112EA, GraphemeBreak::Extend),
    (0x11300, 0x11301, GraphemeBreak::Extend),
    (0x11302, 0x11303, GraphemeBreak::SpacingMark),
    (0x1133B, 0x1133C, GraphemeBreak::Extend),
    (0x1133E, 0x1133E, GraphemeBreak::Extend),
    (0x1133F, 0x1133F, GraphemeBreak::SpacingMark),
    (0x11340, 0x11340, GraphemeBreak::Extend),
    (0x11341, 0x11344, GraphemeBreak::SpacingMark),
    (0x11347, 0x11348, GraphemeBreak::SpacingMark),
    (0x1134B, 0x1134D, GraphemeBreak::SpacingMark),
    (0x11357, 0x11357, GraphemeBreak::Extend),
    (0x11362, 0x11363, GraphemeBreak::SpacingMark),
    (0x11366, 0x1136C, GraphemeBreak::Extend),
    (0x11370, 0x11374, GraphemeBreak::Extend),
    (0x11435, 0x11437, GraphemeBreak::SpacingMark),
    (0x11438, 0x1143F, GraphemeBreak::Extend),
    (0x11440, 0x11441, GraphemeBreak::SpacingMark),
    (0x11442, 0x11444, GraphemeBreak::Extend),
    (0x11445, 0x11445, GraphemeBreak::SpacingMark),
    (0x11446, 0x11446, GraphemeBreak::Extend),
    (0x1145E, 0x1145E, GraphemeBreak::Extend),
    (0x114B0, 0x114B0, GraphemeBreak::Extend),
    (0x114B1, 0x114B2, GraphemeBreak::SpacingMark),
    (0x114B3, 0x114B8, GraphemeBreak::Extend),
    (0x114B9, 0x114B9, GraphemeBreak::SpacingMark),
    (0x114BA, 0x114BA, GraphemeBreak::Extend),
    (0x114BB, 0x114BC, GraphemeBreak::SpacingMark),
    (0x114BD, 0x114BD, GraphemeBreak::Extend),
    (0x114BE, 0x114BE, GraphemeBreak::SpacingMark),
    (0x114BF, 0x114C0, GraphemeBreak::Extend),
    (0x114C1, 0x114C1, GraphemeBreak::SpacingMark),
    (0x114C2, 0x114C3, GraphemeBreak::Extend),
    (0x115AF, 0x115AF, GraphemeBreak::Extend),
    (0x115B0, 0x115B1, GraphemeBreak::SpacingMark),
    (0x115B2, 0x115B5, GraphemeBreak::Extend),
    (0x115B8, 0x115BB, GraphemeBreak::SpacingMark),
    (0x115BC, 0x115BD, GraphemeBreak::Extend),
    (0x115BE, 0x115BE, GraphemeBreak::SpacingMark),
    (0x115BF, 0x115C0, GraphemeBreak::Extend),
    (0x115DC, 0x115DD, GraphemeBreak::Extend),
    (0x11630, 0x11632, GraphemeBreak::SpacingMark),
    (0x11633, 0x1163A, GraphemeBreak::Extend),
    (0x1163B, 0x1163C, GraphemeBreak::SpacingMark),
    (0x1163D, 0x1163D, GraphemeBreak::Extend),
    (0x1163E, 0x1163E, GraphemeBreak::SpacingMark),
    (0x1163F, 0x11640, GraphemeBreak::Extend),
    (0x116AB, 0x116AB, GraphemeBreak::Extend),
    (0x116AC, 0x116AC, GraphemeBreak::SpacingMark),
    (0x116AD, 0x116AD, GraphemeBreak::Extend),
    (0x116AE, 0x116AF, GraphemeBreak::SpacingMark),
    (0x116B0, 0x116B5, GraphemeBreak::Extend),
    (0x116B6, 0x116B6, GraphemeBreak::SpacingMark),
    (0x116B7, 0x116B7, GraphemeBreak::Extend),
    (0x1171D, 0x1171F, GraphemeBreak::Extend),
    (0x11722, 0x11725, GraphemeBreak::Extend),
    (0x11726, 0x11726, GraphemeBreak::SpacingMark),
    (0x11727, 0x1172B, GraphemeBreak::Extend),
    (0x1182C, 0x1182E, GraphemeBreak::SpacingMark),
    (0x1182F, 0x11837, GraphemeBreak::Extend),
    (0x11838, 0x11838, GraphemeBreak::SpacingMark),
    (0x11839, 0x1183A, GraphemeBreak::Extend),
    (0x11930, 0x11930, GraphemeBreak::Extend),
    (0x11931, 0x11935, GraphemeBreak::SpacingMark),
    (0x11937, 0x11938, GraphemeBreak::SpacingMark),
    (0x1193B, 0x1193C, GraphemeBreak::Extend),
    (0x1193D, 0x1193D, GraphemeBreak::SpacingMark),
    (0x1193E, 0x1193E, GraphemeBreak::Extend),
    (0x1193F, 0x1193F, GraphemeBreak::Prepend),
    (0x11940, 0x11940, GraphemeBreak::SpacingMark),
    (0x11941, 0x11941, GraphemeBreak::Prepend),
    (0x11942, 0x11942, GraphemeBreak::SpacingMark),
    (0x11943, 0x11943, GraphemeBreak::Extend),
    (0x119D1, 0x119D3, GraphemeBreak::SpacingMark),
    (0x119D4, 0x119D7, GraphemeBreak::Extend),
    (0x119DA, 0x119DB, GraphemeBreak::Extend),
    (0x119DC, 0x119DF, GraphemeBreak::SpacingMark),
    (0x119E0, 0x119E0, GraphemeBreak::Extend),
    (0x119E4, 0x119E4, GraphemeBreak::SpacingMark),
    (0x11A01, 0x11A0A, GraphemeBreak::Extend),
    (0x11A33, 0x11A38, GraphemeBreak::Extend),
    (0x11A39, 0x11A39, GraphemeBreak::SpacingMark),
    (0x11A3A, 0x11A3A, GraphemeBreak::Prepend),
    (0x11A3B, 0x11A3E, GraphemeBreak::Extend),
    (0x11A47, 0x11A47, GraphemeBreak::Extend),
    (0x11A51, 0x11A56, GraphemeBreak::Extend),
    (0x11A57, 0x11A58, GraphemeBreak::SpacingMark),
    (0x11A59, 0x11A5B, GraphemeBreak::Extend),
    (0x11A84, 0x11A89, GraphemeBreak::Prepend),
    (0x11A8A, 0x11A96, GraphemeBreak::Extend),
    (0x11A97, 0x11A97, GraphemeBreak::SpacingMark),
    (0x11A98, 0x11A99, GraphemeBreak::Extend),
    (0x11C2F, 0x11C2F, GraphemeBreak::SpacingMark),
    (0x11C30, 0x11C36, GraphemeBreak::Extend),
    (0x11C38, 0x11C3D, GraphemeBreak::Extend),
    (0x11C3E, 0x11C3E, GraphemeBreak::SpacingMark),
    (0x11C3F, 0x11C3F, GraphemeBreak::Extend),
    (0x11C92, 0x11CA7, GraphemeBreak::Extend),
    (0x11CA9, 0x11CA9, GraphemeBreak::SpacingMark),
    (0x11CAA, 0x11CB0, GraphemeBreak::Extend),
    (0x11CB1, 0x11CB1, GraphemeBreak::SpacingMark),
    (0x11CB2, 0x11CB3, GraphemeBreak::Extend),
    (0x11CB4, 0x11CB4, GraphemeBreak::SpacingMark),
    (0x11CB5, 0x11CB6, GraphemeBreak::Extend),
    (0x11D31, 0x11D36, GraphemeBreak::Extend),
    (0x11D3A, 0x11D3A, GraphemeBreak::Extend),
    (0x11D3C, 0x11D3D, GraphemeBreak::Extend),
    (0x11D3F, 0x11D45, GraphemeBreak::Extend),
    (0x11D46, 0x11D46, GraphemeBreak::Prepend),
    (0x11D47, 0x11D47, GraphemeBreak::Extend),
    (0x11D8A, 0x11D8E, GraphemeBreak::SpacingMark),
    (0x11D90, 0x11D91, GraphemeBreak::Extend),
    (0x11D93, 0x11D94, GraphemeBreak::SpacingMark),
    (0x11D95, 0x11D95, GraphemeBreak::Extend),
    (0x11D96, 0x11D96, GraphemeBreak::SpacingMark),
    (0x11D97, 0x11D97, GraphemeBreak::Extend),
    (0x11EF3, 0x11EF4, GraphemeBreak::Extend),
    (0x11EF5, 0x11EF6, GraphemeBreak::SpacingMark),
    (0x13430, 0x13438, GraphemeBreak::Control),
    (0x16AF0, 0x16AF4, GraphemeBreak::Extend),
    (0x16B30, 0x16B36, GraphemeBreak::Extend),
    (0x16F4F, 0x16F4F, GraphemeBreak::Extend),
    (0x16F51, 0x16F87, GraphemeBreak::SpacingMark),
    (0x16F8F, 0x16F92, GraphemeBreak::Extend),
    (0x16FE4, 0x16FE4, GraphemeBreak::Extend),
    (0x16FF0, 0x16FF1, GraphemeBreak::SpacingMark),
    (0x1BC9D, 0x1BC9E, GraphemeBreak::Extend),
    (0x1BCA0, 0x1BCA3, GraphemeBreak::Control),
    (0x1CF00, 0x1CF2D, GraphemeBreak::Extend),
    (0x1CF30, 0x1CF46, GraphemeBreak::Extend),
    (0x1D165, 0x1D165, GraphemeBreak::Extend),
    (0x1D166, 0x1D166, GraphemeBreak::SpacingMark),
    (0x1D167, 0x1D169, GraphemeBreak::Extend),
    (0x1D16D, 0x1D16D, GraphemeBreak::SpacingMark),
    (0x1D16E, 0x1D172, GraphemeBreak::Extend),
    (0x1D173, 0x1D17A, GraphemeBreak::Control),
    (0x1D17B, 0x1D182, GraphemeBreak::Extend),
    (0x1D185, 0x1D18B, GraphemeBreak::Extend),
    (0x1D1AA, 0x1D1AD, GraphemeBreak::Extend),
    (0x1D242, 0x1D244, GraphemeBreak::Extend),
    (0x1DA00, 0x1DA36, GraphemeBreak::Extend),
    (0x1DA3B, 0x1DA6C, GraphemeBreak::Extend),
    (0x1DA75, 0x1DA75, GraphemeBreak::Extend),
    (0x1DA84, 0x1DA84, GraphemeBreak::Extend),
    (0x1DA9B, 0x1DA9F, GraphemeBreak::Extend),
    (0x1DAA1, 0x1DAAF, GraphemeBreak::Extend),
    (0x1E000, 0x1E006, GraphemeBreak::Extend),
    (0x1E008, 0x1E018, GraphemeBreak::Extend),
    (0x1E01B, 0x1E021, GraphemeBreak::Extend),
    (0x1E023, 0x1E024, GraphemeBreak::Extend),
    (0x1E026, 0x1E02A, GraphemeBreak::Extend),
    (0x1E130, 0x1E136, GraphemeBreak::Extend),
    (0x1E2AE, 0x1E2AE, GraphemeBreak::Extend),
    (0x1E2EC, 0x1E2EF, GraphemeBreak::Extend),
    (0x1E8D0, 0x1E8D6, GraphemeBreak::Extend),
    (0x1E944, 0x1E94A, GraphemeBreak::Extend),
    (0x1F000, 0x1F0FF, GraphemeBreak::ExtendedPictographic),
    (0x1F10D, 0x1F10F, GraphemeBreak::ExtendedPictographic),
    (0x1F12F, 0x1F12F, GraphemeBreak::ExtendedPictographic),
    (0x1F16C, 0x1F171, GraphemeBreak::ExtendedPictographic),
    (0x1F17E, 0x1F17F, GraphemeBreak::ExtendedPictographic),
    (0x1F18E, 0x1F18E, GraphemeBreak::ExtendedPictographic),
    (0x1F191, 0x1F19A, GraphemeBreak::ExtendedPictographic),
    (0x1F1AD, 0x1F1E5, GraphemeBreak::ExtendedPictographic),
    (0x1F1E6, 0x1F1FF, GraphemeBreak::RegionalIndicator),
    (0x1F201, 0x1F20F, GraphemeBreak::ExtendedPictographic),
    (0x1F21A, 0x1F21A, GraphemeBreak::ExtendedPictographic),
    (0x1F22F, 0x1F22F, GraphemeBreak::ExtendedPictographic),
    (0x1F232, 0x1F23A, GraphemeBreak::ExtendedPictographic),
    (0x1F23C, 0x1F23F, GraphemeBreak::ExtendedPictographic),
    (0x1F249, 0x1F3FA, GraphemeBreak::ExtendedPictographic),
    (0x1F3FB, 0x1F3FF, GraphemeBreak::Extend),
    (0x1F400, 0x1F53D, GraphemeBreak::ExtendedPictographic),
    (0x1F546, 0x1F64F, GraphemeBreak::ExtendedPictographic),
    (0x1F680, 0x1F6FF, GraphemeBreak::ExtendedPictographic),
    (0x1F774, 0x1F77F, GraphemeBreak::ExtendedPictographic),
    (0x1F7D5, 0x1F7FF, GraphemeBreak::ExtendedPictographic),
    (0x1F80C, 0x1F80F, GraphemeBreak::ExtendedPictographic),
    (0x1F848, 0x1F84F, GraphemeBreak::ExtendedPictographic),
    (0x1F85A, 0x1F85F, GraphemeBreak::ExtendedPictographic),
    (0x1F888, 0x1F88F, GraphemeBreak::ExtendedPictographic),
    (0x1F8AE, 0x1F8FF, GraphemeBreak::ExtendedPictographic),
    (0x1F90C, 0x1F93A, GraphemeBreak::ExtendedPictographic),
    (0x1F93C, 0x1F945, GraphemeBreak::ExtendedPictographic),
    (0x1F947, 0x1FAFF, GraphemeBreak::ExtendedPictographic),
    (0x1FC00, 0x1FFFD, GraphemeBreak::ExtendedPictographic),
    (0xE0001, 0xE0001, GraphemeBreak::Control),
    (0xE0020, 0xE007F, GraphemeBreak::Extend),
    (0xE0100, 0xE01EF, GraphemeBreak::Extend),
];

pub(crate) const WORD_BREAK_RANGES: &[(u32, u32, WordBreak)] = &[
    (0x000A, 0x000A, WordBreak::Lf),
    (0x000B, 0x000C, WordBreak::Newline),
    (0x000D, 0x000D, WordBreak::Cr),
    (0x0020, 0x0020, WordBreak::WSegSpace),
    (0x0022, 0x0022, WordBreak::DoubleQuote),
    (0x0027, 0x0027, WordBreak::SingleQuote),
    (0x002C, 0x002C, WordBreak::MidNum),
    (0x002E, 0x002E, WordBreak::MidNumLet),
    (0x0030, 0x0039, WordBreak::Numeric),
    (0x003A, 0x003A, WordBreak::MidLetter),
    (0x003B, 0x003B, WordBreak::MidNum),
    (0x0041, 0x005A, WordBreak::ALetter),
    (0x005F, 0x005F, WordBreak::ExtendNumLet),
    (0x0061, 0x007A, WordBreak::ALetter),
    (0x0085, 0x0085, WordBreak::Newline),
    (0x00A9, 0x00A9, WordBreak::ExtendedPictographic),
    (0x00AA, 0x00AA, WordBreak::ALetter),
    (0x00AD, 0x00AD, WordBreak::Format),
    (0x00AE, 0x00AE, WordBreak::ExtendedPictographic),
    (0x00B5, 0x00B5, WordBreak::ALetter),
    (0x00B7, 0x00B7, WordBreak::MidLetter),
    (0x00BA, 0x00BA, WordBreak::ALetter),
    (0x00C0, 0x00D6, WordBreak::ALetter),
    (0x00D8, 0x00F6, WordBreak::ALetter),
    (0x00F8, 0x02D7, WordBreak::ALetter),
    (0x02E0, 0x02E4, WordBreak::ALetter),
    (0x02EC, 0x02EC, WordBreak::ALetter),
    (0x02EE, 0x02EE, WordBreak::ALetter),
    (0x0300, 0x036F, WordBreak::Extend),
    (0x0370, 0x0374, WordBreak::ALetter),
    (0x0376, 0x0377, WordBreak::ALetter),
    (0x037A, 0x037D, WordBreak::ALetter),
    (0x037E, 0x037E, WordBreak::MidNum),
    (0x037F, 0x037F, WordBreak::ALetter),
    (0x0386, 0x0386, WordBreak::ALetter),
    (0x0387, 0x0387, WordBreak::MidLetter),
    (0x0388, 0x038A, WordBreak::ALetter),
    (0x038C, 0x038C, WordBreak::ALetter),
    (0x038E, 0x03A1, WordBreak::ALetter),
    (0x03A3, 0x03F5, WordBreak::ALetter),
    (0x03F7, 0x0481, WordBreak::ALetter),
    (0x0483, 0x0489, WordBreak::Extend),
    (0x048A, 0x052F, WordBreak::ALetter),
    (0x0531, 0x0556, WordBreak::ALetter),
    (0x0559, 0x0559, WordBreak::ALetter),
    (0x055F, 0x055F, WordBreak::MidLetter),
    (0x0560, 0x0588, WordBreak::ALetter),
    (0x0589, 0x0589, WordBreak::MidNum),
    (0x0591, 0x05BD, WordBreak::Extend),
    (0x05BF, 0x05BF, WordBreak::Extend),
    (0x05C1, 0x05C2, WordBreak::Extend),
    (0x05C4, 0x05C5, WordBreak::Extend),
    (0x05C7, 0x05C7, WordBreak::Extend),
    (0x05D0, 0x05EA, WordBreak::HebrewLetter),
    (0x05EF, 0x05F2, WordBreak::HebrewLetter),
    (0x05F3, 0x05F3, WordBreak::ALetter),
    (0x05F4, 0x05F4, WordBreak::MidLetter),
    (0x0600, 0x0605, WordBreak::Format),
    (0x060C, 0x060D, WordBreak::MidNum),
    (0x0610, 0x061A, WordBreak::Extend),
    (0x061C, 0x061C, WordBreak::Format),
    (0x0620, 0x064A, WordBreak::ALetter),
    (0x064B, 0x065F, WordBreak::Extend),
    (0x0660, 0x0669, WordBreak::Numeric),
    (0x066B, 0x066B, WordBreak::Numeric),
    (0x066C, 0x066C, WordBreak::MidNum),
    (0x066E, 0x066F, WordBreak::ALetter),
    (0x0670, 0x0670, WordBreak::Extend),
    (0x0671, 0x06D3, WordBreak::ALetter),
    (0x06D5, 0x06D5, WordBreak::ALetter),
    (0x06D6, 0x06DC, WordBreak::Extend),
    (0x06DD, 0x06DD, WordBreak::Format),
    (0x06DF, 0x06E4, WordBreak::Extend),
    (0x06E5, 0x06E6, WordBreak::ALetter),
    (0x06E7, 0x06E8, WordBreak::Extend),
    (0x06EA, 0x06ED, WordBreak::Extend),
    (0x06EE, 0x06EF, WordBreak::ALetter),
    (0x06F0, 0x06F9, WordBreak::Numeric),
    (0x06FA, 0x06FC, WordBreak::ALetter),
    (0x06FF, 0x06FF, WordBreak::ALetter),
    (0x070F, 0x070F, WordBreak::Format),
    (0x0710, 0x0710, WordBreak::ALetter),
    (0x0711, 0x0711, WordBreak::Extend),
    (0x0712, 0x072F, WordBreak::ALetter),
    (0x0730, 0x074A, WordBreak::Extend),
    (0x074D, 0x07A5, WordBreak::ALetter),
    (0x07A6, 0x07B0, WordBreak::Extend),
    (0x07B1, 0x07B1, WordBreak::ALetter),
    (0x07C0, 0x07C9, WordBreak::Numeric),
    (0x07CA, 0x07EA, WordBreak::ALetter),
    (0x07EB, 0x07F3, WordBreak::Extend),
    (0x07F4, 0x07F5, WordBreak::ALetter),
    (0x07F8, 0x07F8, WordBreak::MidNum),
    (0x07FA, 0x07FA, WordBreak::ALetter),
    (0x07FD, 0x07FD, WordBreak::Extend),
    (0x0800, 0x0815, WordBreak::ALetter),
    (0x0816, 0x0819, WordBreak::Extend),
    (0x081A, 0x081A, WordBreak::ALetter),
    (0x081B, 0x0823, WordBreak::Extend),
    (0x0824, 0x0824, WordBreak::ALetter),
    (0x0825, 0x0827, WordBreak::Extend),
    (0x0828, 0x0828, WordBreak::ALetter),
    (0x0829, 0x082D, WordBreak::Extend),
    (0x0840, 0x0858, WordBreak::ALetter),
    (0x0859, 0x085B, WordBreak::Extend),
    (0x0860, 0x086A, WordBreak::ALetter),
    (0x0870, 0x0887, WordBreak::ALetter),
    (0x0889, 0x088E, WordBreak::ALetter),
    (0x0890, 0x0891, WordBreak::Format),
    (0x0898, 0x089F, WordBreak::Extend),
    (0x08A0, 0x08C9, WordBreak::ALetter),
    (0x08CA, 0x08E1, WordBreak::Extend),
    (0x08E2, 0x08E2, WordBreak::Format),
    (0x08E3, 0x0903, WordBreak::Extend),
    (0x0904, 0x0939, WordBreak::ALetter),
    (0x093A, 0x093C, WordBreak::Extend),
    (0x093D, 0x093D, WordBreak::ALetter),
    (0x093E, 0x094F, WordBreak::Extend),
    (0x0950, 0x0950, WordBreak::ALetter),
    (0x0951, 0x0957, WordBreak::Extend),
    (0x0958, 0x0961, WordBreak::ALetter),
    (0x0962, 0x0963, WordBreak::Extend),
    (0x0966, 0x096F, WordBreak::Numeric),
    (0x0971, 0x0980, WordBreak::ALetter),
    (0x0981, 0x0983, WordBreak::Extend),
    (0x0985, 0x098C, WordBreak::ALetter),
    (0x098F, 0x0990, WordBreak::ALetter),
    (0x0993, 0x09A8, WordBreak::ALetter),
    (0x09AA, 0x09B0, WordBreak::ALetter),
    (0x09B2, 0x09B2, WordBreak::ALetter),
    (0x09B6, 0x09B9, WordBreak::ALetter),
    (0x09BC, 0x09BC, WordBreak::Extend),
    (0x09BD, 0x09BD, WordBreak::ALetter),
    (0x09BE, 0x09C4, WordBreak::Extend),
    (0x09C7, 0x09C8, WordBreak::Extend),
    (0x09CB, 0x09CD, WordBreak::Extend),
    (0x09CE, 0x09CE, WordBreak::ALetter),
    (0x09D7, 0x09D7, WordBreak::Extend),
    (0x09DC, 0x09DD, WordBreak::ALetter),
    (0x09DF, 0x09E1, WordBreak::ALetter),
    (0x09E2, 0x09E3, WordBreak::Extend),
    (0x09E6, 0x09EF, WordBreak::Numeric),
    (0x09F0, 0x09F1, WordBreak::ALetter),
    (0x09FC, 0x09FC, WordBreak::ALetter),
    (0x09FE, 0x09FE, WordBreak::Extend),
    (0x0A01, 0x0A03, WordBreak::Extend),
    (0x0A05, 0x0A0A, WordBreak::ALetter),
    (0x0A0F, 0x0A10, WordBreak::ALetter),
    (0x0A13, 0x0A28, WordBreak::ALetter),
    (0x0A2A, 0x0A30, WordBreak::ALetter),
    (0x0A32, 0x0A33, WordBreak::ALetter),
    (0x0A35, 0x0A36, WordBreak::ALetter),
    (0x0A38, 0x0A39, WordBreak::ALetter),
    (0x0A3C, 0x0A3C, WordBreak::Extend),
    (0x0A3E, 0x0A42, WordBreak::Extend),
    (0x0A47, 0x0A48, WordBreak::Extend),
    (0x0A4B, 0x0A4D, WordBreak::Extend),
    (0x0A51, 0x0A51, WordBreak::Extend),
    (0x0A59, 0x0A5C, WordBreak::ALetter),
    (0x0A5E, 0x0A5E, WordBreak::ALetter),
    (0x0A66, 0x0A6F, WordBreak::Numeric),
    (0x0A70, 0x0A71, WordBreak::Extend),
    (0x0A72, 0x0A74, WordBreak::ALetter),
    (0x0A75, 0x0A75, WordBreak::Extend),
    (0x0A81, 0x0A83, WordBreak::Extend),
    (0x0A85, 0x0A8D, WordBreak::ALetter),
    (0x0A8F, 0x0A91, WordBreak::ALetter),
    (0x0A93, 0x0AA8, WordBreak::ALetter),
    (0x0AAA, 0x0AB0, WordBreak::ALetter),
    (0x0AB2, 0x0AB3, WordBreak::ALetter),
    (0x0AB5, 0x0AB9, WordBreak::ALetter),
    (0x0ABC, 0x0ABC, WordBreak::Extend),
    (0x0ABD, 0x0ABD, WordBreak::ALetter),
    (0x0ABE, 0x0AC5, WordBreak::Extend),
    (0x0AC7, 0x0AC9, WordBreak::Extend),
    (0x0ACB, 0x0ACD, WordBreak::Extend),
    (0x0AD0, 0x0AD0, WordBreak::ALetter),
    (0x0AE0, 0x0AE1, WordBreak::ALetter),
    (0x0AE2, 0x0AE3, WordBreak::Extend),
    (0x0AE6, 0x0AEF, WordBreak::Numeric),
    (0x0AF9, 0x0AF9, WordBreak::ALetter),
    (0x0AFA, 0x0AFF, WordBreak::Extend),
    (0x0B01, 0x0B03, WordBreak::Extend),
    (0x0B05, 0x0B0C, WordBreak::ALetter),
    (0x0B0F, 0x0B10, WordBreak::ALetter),
    (0x0B13, 0x0B28, WordBreak::ALetter),
    (0x0B2A, 0x0B30, WordBreak::ALetter),
    (0x0B32, 0x0B33, WordBreak::ALetter),
    (0x0B35, 0x0B39, WordBreak::ALetter),
    (0x0B3C, 0x0B3C, WordBreak::Extend),
    (0x0B3D, 0x0B3D, WordBreak::ALetter),
    (0x0B3E, 0x0B44, WordBreak::Extend),
    (0x0B47, 0x0B48, WordBreak::Extend),
    (0x0B4B, 0x0B4D, WordBreak::Extend),
    (0x0B55, 0x0B57, WordBreak::Extend),
    (0x0B5C, 0x0B5D, WordBreak::ALetter),
    (0x0B5F, 0x0B61, WordBreak::ALetter),
    (0x0B62, 0x0B63, WordBreak::Extend),
    (0x0B66, 0x0B6F, WordBreak::Numeric),
    (0x0B71, 0x0B71, WordBreak::ALetter),
    (0x0B82, 0x0B82, WordBreak::Extend),
    (0x0B83, 0x0B83, WordBreak::ALetter),
    (0x0B85, 0x0B8A, WordBreak::ALetter),
    (0x0B8E, 0x0B90, WordBreak::ALetter),
    (0x0B92, 0x0B95, WordBreak::ALetter),
    (0x0B99, 0x0B9A, WordBreak::ALetter),
    (0x0B9C, 0x0B9C, WordBreak::ALetter),
    (0x0B9E, 0x0B9F, WordBreak::ALetter),
    (0x0BA3, 0x0BA4, WordBreak::ALetter),
    (0x0BA8, 0x0BAA, WordBreak::ALetter),
    (0x0BAE, 0x0BB9, WordBreak::ALetter),
    (0x0BBE, 0x0BC2, WordBreak::Extend),
    (0x0BC6, 0x0BC8, WordBreak::Extend),
    (0x0BCA, 0x0BCD, WordBreak::Extend),
    (0x0BD0, 0x0BD0, WordBreak::ALetter),
    (0x0BD7, 0x0BD7, WordBreak::Extend),
    (0x0BE6, 0x0BEF, WordBreak::Numeric),
    (0x0C00, 0x0C04, WordBreak::Extend),
    (0x0C05, 0x0C0C, WordBreak::ALetter),
    (0x0C0E, 0x0C10, WordBreak::ALetter),
    (0x0C12, 0x0C28, WordBreak::ALetter),
    (0x0C2A, 0x0C39, WordBreak::ALetter),
    (0x0C3C, 0x0C3C, WordBreak::Extend),
    (0x0C3D, 0x0C3D, WordBreak::ALetter),
    (0x0C3E, 0x0C44, WordBreak::Extend),
    (0x0C46, 0x0C48, WordBreak::Extend),
    (0x0C4A, 0x0C4D, WordBreak::Extend),
    (0x0C55, 0x0C56, WordBreak::Extend),
    (0x0C58, 0x0C5A, WordBreak::ALetter),
    (0x0C5D, 0x0C5D, WordBreak::ALetter),
    (0x0C60, 0x0C61, WordBreak::ALetter),
    (0x0C62, 0x0C63, WordBreak::Extend),
    (0x0C66, 0x0C6F, WordBreak::Numeric),
    (0x0C80, 0x0C80, WordBreak::ALetter),
    (0x0C81, 0x0C83, WordBreak::Extend),
    (0x0C85, 0x0C8C, WordBreak::ALetter),
    (0x0C8E, 0x0C90, WordBreak::ALetter),
    (0x0C92, 0x0CA8, WordBreak::ALetter),
    (0x0CAA, 0x0CB3, WordBreak::ALetter),
    (0x0CB5, 0x0CB9, WordBreak::ALetter),
    (0x0CBC, 0x0CBC, WordBreak::Extend),
    (0x0CBD, 0x0CBD, WordBreak::ALetter),
    (0x0CBE, 0x0CC4, WordBreak::Extend),
    (0x0CC6, 0x0CC8, WordBreak::Extend),
    (0x0CCA, 0x0CCD, WordBreak::Extend),
    (0x0CD5, 0x0CD6, WordBreak::Extend),
    (0x0CDD, 0x0CDE, WordBreak::ALetter),
    (0x0CE0, 0x0CE1, WordBreak::ALetter),
    (0x0CE2, 0x0CE3, WordBreak::Extend),
    (0x0CE6, 0x0CEF, WordBreak::Numeric),
    (0x0CF1, 0x0CF2, WordBreak::ALetter),
    (0x0D00, 0x0D03, WordBreak::Extend),
    (0x0D04, 0x0D0C, WordBreak::ALetter),
    (0x0D0E, 0x0D10, WordBreak::ALetter),
    (0x0D12, 0x0D3A, WordBreak::ALetter),
    (0x0D3B, 0x0D3C, WordBreak::Extend),
    (0x0D3D, 0x0D3D, WordBreak::ALetter),
    (0x0D3E, 0x0D44, WordBreak::Extend),
    (0x0D46, 0x0D48, WordBreak::Extend),
    (0x0D4A, 0x0D4D, WordBreak::Extend),
    (0x0D4E, 0x0D4E, WordBreak::ALetter),
    (0x0D54, 0x0D56, WordBreak::ALetter),
    (0x0D57, 0x0D57, WordBreak::Extend),
    (0x0D5F, 0x0D61, WordBreak::ALetter),
    (0x0D62, 0x0D63, WordBreak::Extend),
    (0x0D66, 0x0D6F, WordBreak::Numeric),
    (0x0D7A, 0x0D7F, WordBreak::ALetter),
    (0x0D81, 0x0D83, WordBreak::Extend),
    (0x0D85, 0x0D96, WordBreak::ALetter),
    (0x0D9A, 0x0DB1, WordBreak::ALetter),
    (0x0DB3, 0x0DBB, WordBreak::ALetter),
    (0x0DBD, 0x0DBD, WordBreak::ALetter),
    (0x0DC0, 0x0DC6, WordBreak::ALetter),
    (0x0DCA, 0x0DCA, WordBreak::Extend),
    (0x0DCF, 0x0DD4, WordBreak::Extend),
    (0x0DD6, 0x0DD6, WordBreak::Extend),
    (0x0DD8, 0x0DDF, WordBreak::Extend),
    (0x0DE6, 0x0DEF, WordBreak::Numeric),
    (0x0DF2, 0x0DF3, WordBreak::Extend),
    (0x0E31, 0x0E31, WordBreak::Extend),
    (0x0E34, 0x0E3A, WordBreak::Extend),
    (0x0E47, 0x0E4E, WordBreak::Extend),
    (0x0EB1, 0x0EB1, WordBreak::Extend),
    (0x0EB4, 0x0EBC, WordBreak::Extend),
    (0x0EC8, 0x0ECD, WordBreak::Extend),
    (0x0F00, 0x0F00, WordBreak::ALetter),
    (0x0F18, 0x0F19, WordBreak::Extend),
    (0x0F20, 0x0F29, WordBreak::Numeric),
    (0x0F35, 0x0F35, WordBreak::Extend),
    (0x0F37, 0x0F37, WordBreak::Extend),
    (0x0F39, 0x0F39, WordBreak::Extend),
    (0x0F3E, 0x0F3F, WordBreak::Extend),
    (0x0F40, 0x0F47, WordBreak::ALetter),
    (0x0F49, 0x0F6C, WordBreak::ALetter),
    (0x0F71, 0x0F84, WordBreak::Extend),
    (0x0F86, 0x0F87, WordBreak::Extend),
    (0x0F88, 0x0F8C, WordBreak::ALetter),
    (0x0F8D, 0x0F97, WordBreak::Extend),
    (0x0F99, 0x0FBC, WordBreak::Extend),
    (0x0FC6, 0x0FC6, WordBreak::Extend),
    (0x102B, 0x103E, WordBreak::Extend),
    (0x1056, 0x1059, WordBreak::Extend),
    (0x105E, 0x1060, WordBreak::Extend),
    (0x1062, 0x1064, WordBreak::Extend),
    (0x1067, 0x106D, WordBreak::Extend),
    (0x1071, 0x1074, WordBreak::Extend),
    (0x1082, 0x108D, WordBreak::Extend),
    (0x108F, 0x108F, WordBreak::Extend),
    (0x109A, 0x109D, WordBreak::Extend),
    (0x10A0, 0x10C5, WordBreak::ALetter),
    (0x10C7, 0x10C7, WordBreak::ALetter),
    (0x10CD, 0x10CD, WordBreak::ALetter),
    (0x10D0, 0x10FA, WordBreak::ALetter),
    (0x10FC, 0x1248, WordBreak::ALetter),
    (0x124A, 0x124D, WordBreak::ALetter),
    (0x1250, 0x1256, WordBreak::ALetter),
    (0x1258, 0x1258, WordBreak::ALetter),
    (0x125A, 0x125D, WordBreak::ALetter),
    (0x1260, 0x1288, WordBreak::ALetter),
    (0x128A, 0x128D, WordBreak::ALetter),
    (0x1290, 0x12B0, WordBreak::ALetter),
    (0x12B2, 0x12B5, WordBreak::ALetter),
    (0x12B8, 0x12BE, WordBreak::ALetter),
    (0x12C0, 0x12C0, WordBreak::ALetter),
    (0x12C2, 0x12C5, WordBreak::ALetter),
    (0x12C8, 0x12D6, WordBreak::ALetter),
    (0x12D8, 0x1310, WordBreak::ALetter),
    (0x1312, 0x1315, WordBreak::ALetter),
    (0x1318, 0x135A, WordBreak::ALetter),
    (0x135D, 0x135F, WordBreak::Extend),
    (0x1380, 0x138F, WordBreak::ALetter),
    (0x13A0, 0x13F5, WordBreak::ALetter),
    (0x13F8, 0x13FD, WordBreak::ALetter),
    (0x1401, 0x166C, WordBreak::ALetter),
    (0x166F, 0x167F, WordBreak::ALetter),
    (0x1680, 0x1680, WordBreak::WSegSpace),
    (0x1681, 0x169A, WordBreak::ALetter),
    (0x16A0, 0x16EA, WordBreak::ALetter),
    (0x16EE, 0x16F8, WordBreak::ALetter),
    (0x1700, 0x1711, WordBreak::ALetter),
    (0x1712, 0x1715, WordBreak::Extend),
    (0x171F, 0x1731, WordBreak::ALetter),
    (0x1732, 0x1734, WordBreak::Extend),
    (0x1740, 0x1751, WordBreak::ALetter),
    (0x1752, 0x1753, WordBreak::Extend),
    (0x1760, 0x176C, WordBreak::ALetter),
    (0x176E, 0x1770, WordBreak::ALetter),
    (0x1772, 0x1773, WordBreak::Extend),
    (0x17B4, 0x17D3, WordBreak::Extend),
    (0x17DD, 0x17DD, WordBreak::Extend),
    (0x180B, 0x180D, WordBreak::Extend),
    (0x180E, 0x180E, WordBreak::Format),
    (0x180F, 0x180F, WordBreak::Extend),
    (0x1810, 0x1819, WordBreak::Numeric),
    (0x1820, 0x1878, WordBreak::ALetter),
    (0x1880, 0x1884, WordBreak::ALetter),
    (0x1885, 0x1886, WordBreak::Extend),
    (0x1887, 0x18A8, WordBreak::ALetter),
    (0x18A9, 0x18A9, WordBreak::Extend),
    (0x18AA, 0x18AA, WordBreak::ALetter),
    (0x18B0, 0x18F5, WordBreak::ALetter),
    (0x1900, 0x191E, WordBreak::ALetter),
    (0x1920, 0x192B, WordBreak::Extend),
    (0x1930, 0x193B, WordBreak::Extend),
    (0x1946, 0x194F, WordBreak::Numeric),
    (0x1A00, 0x1A16, WordBreak::ALetter),
    (0x1A17, 0x1A1B, WordBreak::Extend),
    (0x1A55, 0x1A5E, WordBreak::Extend),
    (0x1A60, 0x1A7C, WordBreak::Extend),
    (0x1A7F, 0x1A7F, WordBreak::Extend),
    (0x1AB0, 0x1ACE, WordBreak::Extend),
    (0x1B00, 0x1B04, WordBreak::Extend),
    (0x1B05, 0x1B33, WordBreak::ALetter),
    (0x1B34, 0x1B44, WordBreak::Extend),
    (0x1B45, 0x1B4C, WordBreak::ALetter),
    (0x1B50, 0x1B59, WordBreak::Numeric),
    (0x1B6B, 0x1B73, WordBreak::Extend),
    (0x1B80, 0x1B82, WordBreak::Extend),
    (0x1B83, 0x1BA0, WordBreak::ALetter),
    (0x1BA1, 0x1BAD, WordBreak::Extend),
    (0x1BAE, 0x1BAF, WordBreak::ALetter),
    (0x1BB0, 0x1BB9, WordBreak::Numeric),
    (0x1BBA, 0x1BE5, WordBreak::ALetter),
    (0x1BE6, 0x1BF3, WordBreak::Extend),
    (0x1C00, 0x1C23, WordBreak::ALetter),
    (0x1C24, 0x1C37, WordBreak::Extend),
    (0x1C40, 0x1C49, WordBreak::Numeric),
    (0x1C4D, 0x1C4F, WordBreak::ALetter),
    (0x1C50, 0x1C59, WordBreak::Numeric),
    (0x1C5A, 0x1C7D, WordBreak::ALetter),
    (0x1C80, 0x1C88, WordBreak::ALetter),
    (0x1C90, 0x1CBA, WordBreak::ALetter),
    (0x1CBD, 0x1CBF, WordBreak::ALetter),
    (0x1CD0, 0x1CD2, WordBreak::Extend),
    (0x1CD4, 0x1CE8, WordBreak::Extend),
    (0x1CE9, 0x1CEC, WordBreak::ALetter),
    (0x1CED, 0x1CED, WordBreak::Extend),
    (0x1CEE, 0x1CF3, WordBreak::ALetter),
    (0x1CF4, 0x1CF4, WordBreak::Extend),
    (0x1CF5, 0x1CF6, WordBreak::ALetter),
    (0x1CF7, 0x1CF9, WordBreak::Extend),
    (0x1CFA, 0x1CFA, WordBreak::ALetter),
    (0x1D00, 0x1DBF, WordBreak::ALetter),
    (0x1DC0, 0x1DFF, WordBreak::Extend),
    (0x1E00, 0x1F15, WordBreak::ALetter),
    (0x1F18, 0x1F1D, WordBreak::ALetter),
    (0x1F20, 0x1F45, WordBreak::ALetter),
    (0x1F48, 0x1F4D, WordBreak::ALetter),
    (0x1F50, 0x1F57, WordBreak::ALetter),
    (0x1F59, 0x1F59, WordBreak::ALetter),
    (0x1F5B, 0x1F5B, WordBreak::ALetter),
    (0x1F5D, 0x1F5D, WordBreak::ALetter),
    (0x1F5F, 0x1F7D, WordBreak::ALetter),
    (0x1F80, 0x1FB4, WordBreak::ALetter),
    (0x1FB6, 0x1FBC, WordBreak::ALetter),
    (0x1FBE, 0x1FBE, WordBreak::ALetter),
    (0x1FC2, 0x1FC4, WordBreak::ALetter),
    (0x1FC6, 0x1FCC, WordBreak::ALetter),
    (0x1FD0, 0x1FD3, WordBreak::ALetter),
    (0x1FD6, 0x1FDB, WordBreak::ALetter),
    (0x1FE0, 0x1FEC, WordBreak::ALetter),
    (0x1FF2, 0x1FF4, WordBreak::ALetter),
    (0x1FF6, 0x1FFC, WordBreak::ALetter),
    (0x2000, 0x2006, WordBreak::WSegSpace),
    (0x2008, 0x200A, WordBreak::WSegSpace),
    (0x200C, 0x200C, WordBreak::Extend),
    (0x200D, 0x200D, WordBreak::Zwj),
    (0x200E, 0x200F, WordBreak::Format),
    (0x2018, 0x2019, WordBreak::MidNumLet),
    (0x2024, 0x2024, WordBreak::MidNumLet),
    (0x2027, 0x2027, WordBreak::MidLetter),
    (0x2028, 0x2029, WordBreak::Newline),
    (0x202A, 0x202E, WordBreak::Format),
    (0x202F, 0x202F, WordBreak::ExtendNumLet),
    (0x203C, 0x203C, WordBreak::ExtendedPictographic),
    (0x203F, 0x2040, WordBreak::ExtendNumLet),
    (0x2044, 0x2044, WordBreak::MidNum),
    (0x2049, 0x2049, WordBreak::ExtendedPictographic),
    (0x2054, 0x2054, WordBreak::ExtendNumLet),
    (0x205F, 0x205F, WordBreak::WSegSpace),
    (0x2060, 0x2064, WordBreak::Format),
    (0x2066, 0x206F, WordBreak::Format),
    (0x2071, 0x2071, WordBreak::ALetter),
    (0x207F, 0x207F, WordBreak::ALetter),
    (0x2090, 0x209C, WordBreak::ALetter),
    (0x20D0, 0x20F0, WordBreak::Extend),
    (0x2102, 0x2102, WordBreak::ALetter),
    (0x2107, 0x2107, WordBreak::ALetter),
    (0x210A, 0x2113, WordBreak::ALetter),
    (0x2115, 0x2115, WordBreak::ALetter),
    (0x2119, 0x211D, WordBreak::ALetter),
    (0x2122, 0x2122, WordBreak::ExtendedPictographic),
    (0x2124, 0x2124, WordBreak::ALetter),
    (0x2126, 0x2126, WordBreak::ALetter),
    (0x2128, 0x2128, WordBreak::ALetter),
    (0x212A, 0x212D, WordBreak::ALetter),
    (0x212F, 0x2139, WordBreak::ALetter),
    (0x213C, 0x213F, WordBreak::ALetter),
    (0x2145, 0x2149, WordBreak::ALetter),
    (0x214E, 0x214E, WordBreak::ALetter),
    (0x2160, 0x2188, WordBreak::ALetter),
    (0x2194, 0x2199, WordBreak::ExtendedPictographic),
    (0x21A9, 0x21AA, WordBreak::ExtendedPictographic),
    (0x231A, 0x231B, WordBreak::ExtendedPictographic),
    (0x2328, 0x2328, WordBreak::ExtendedPictographic),
    (0x2388, 0x2388, WordBreak::ExtendedPictographic),
    (0x23CF, 0x23CF, WordBreak::ExtendedPictographic),
    (0x23E9, 0x23F3, WordBreak::ExtendedPictographic),
    (0x23F8, 0x23FA, WordBreak::ExtendedPictographic),
    (0x24B6, 0x24E9, WordBreak::ALetter),
    (0x25AA, 0x25AB, WordBreak::ExtendedPictographic),
    (0x25B6, 0x25B6, WordBreak::ExtendedPictographic),
    (0x25C0, 0x25C0, WordBreak::ExtendedPictographic),
    (0x25FB, 0x25FE, WordBreak::ExtendedPictographic),
    (0x2600, 0x2605, WordBreak::ExtendedPictographic),
    (0x2607, 0x2612, WordBreak::ExtendedPictographic),
    (0x2614, 0x2685, WordBreak::ExtendedPictographic),
    (0x2690, 0x2705, WordBreak::ExtendedPictographic),
    (0x2708, 0x2712, WordBreak::ExtendedPictographic),
    (0x2714, 0x2714, WordBreak::ExtendedPictographic),
    (0x2716, 0x2716, WordBreak::ExtendedPictographic),
    (0x271D, 0x271D, WordBreak::ExtendedPictographic),
    (0x2721, 0x2721, WordBreak::ExtendedPictographic),
    (0x2728, 0x2728, WordBreak::ExtendedPictographic),
    (0x2733, 0x2734, WordBreak::ExtendedPictographic),
    (0x2744, 0x2744, WordBreak::ExtendedPictographic),
    (0x2747, 0x2747, WordBreak::ExtendedPictographic),
    (0x274C, 0x274C, WordBreak::ExtendedPictographic),
    (0x274E, 0x274E, WordBreak::ExtendedPictographic),
    (0x2753, 0x2755, WordBreak::ExtendedPictographic),
    (0x2757, 0x2757, WordBreak::ExtendedPictographic),
    (0x2763, 0x2767, WordBreak::ExtendedPictographic),
    (0x2795, 0x2797, WordBreak::ExtendedPictographic),
    (0x27A1, 0x27A1, WordBreak::ExtendedPictographic),
    (0x27B0, 0x27B0, WordBreak::ExtendedPictographic),
    (0x27BF, 0x27BF, WordBreak::ExtendedPictographic),
    (0x2934, 0x2935, WordBreak::ExtendedPictographic),
    (0x2B05, 0x2B07, WordBreak::ExtendedPictographic),
    (0x2B1B, 0x2B1C, WordBreak::ExtendedPictographic),
    (0x2B50, 0x2B50, WordBreak::ExtendedPictographic),
    (0x2B55, 0x2B55, WordBreak::ExtendedPictographic),
    (0x2C00, 0x2CE4, WordBreak::ALetter),
    (0x2CEB, 0x2CEE, WordBreak::ALetter),
    (0x2CEF, 0x2CF1, WordBreak::Extend),
    (0x2CF2, 0x2CF3, WordBreak::ALetter),
    (0x2D00, 0x2D25, WordBreak::ALetter),
    (0x2D27, 0x2D27, WordBreak::ALetter),
    (0x2D2D, 0x2D2D, WordBreak::ALetter),
    (0x2D30, 0x2D67, WordBreak::ALetter),
    (0x2D6F, 0x2D6F, WordBreak::ALetter),
    (0x2D7F, 0x2D7F, WordBreak::Extend),
    (0x2D80, 0x2D96, WordBreak::ALetter),
    (0x2DA0, 0x2DA6, WordBreak::ALetter),
    (0x2DA8, 0x2DAE, WordBreak::ALetter),
    (0x2DB0, 0x2DB6, WordBreak::ALetter),
    (0x2DB8, 0x2DBE, WordBreak::ALetter),
    (0x2DC0, 0x2DC6, WordBreak::ALetter),
    (0x2DC8, 0x2DCE, WordBreak::ALetter),
    (0x2DD0, 0x2DD6, WordBreak::ALetter),
    (0x2DD8, 0x2DDE, WordBreak::ALetter),
    (0x2DE0, 0x2DFF, WordBreak::Extend),
    (0x2E2F, 0x2E2F, WordBreak::ALetter),
    (0x3000, 0x3000, WordBreak::WSegSpace),
    (0x3005, 0x3005, WordBreak::ALetter),
    (0x302A, 0x302F, WordBreak::Extend),
    (0x3030, 0x3030, WordBreak::ExtendedPictographic),
    (0x3031, 0x3035, WordBreak::Katakana),
    (0x303B, 0x303C, WordBreak::ALetter),
    (0x303D, 0x303D, WordBreak::ExtendedPictographic),
    (0x3099, 0x309A, WordBreak::Extend),
    (0x309B, 0x309C, WordBreak::Katakana),
    (0x30A0, 0x30FA, WordBreak::Katakana),
    (0x30FC, 0x30FF, WordBreak::Katakana),
    (0x3105, 0x312F, WordBreak::ALetter),
    (0x3131, 0x318E, WordBreak::ALetter),
    (0x31A0, 0x31BF, WordBreak::ALetter),
    (0x31F0, 0x31FF, WordBreak::Katakana),
    (0x3297, 0x3297, WordBreak::ExtendedPictographic),
    (0x3299, 0x3299, WordBreak::ExtendedPictographic),
    (0x32D0, 0x32FE, WordBreak::Katakana),
    (0x3300, 0x3357, WordBreak::Katakana),
    (0xA000, 0xA48C, WordBreak::ALetter),
    (0xA4D0, 0xA4FD, WordBreak::ALetter),
    (0xA500, 0xA60C, WordBreak::ALetter),
    (0xA610, 0xA61F, WordBreak::ALetter),
    (0xA620, 0xA629, WordBreak::Numeric),
    (0xA62A, 0xA62B, WordBreak::ALetter),
    (0xA640, 0xA66E, WordBreak::ALetter),
    (0xA66F, 0xA672, WordBreak::Extend),
    (0xA674, 0xA67D, WordBreak::Extend),
    (0xA67F, 0xA69D, WordBreak::ALetter),
    (0xA69E, 0xA69F, WordBreak::Extend),
    (0xA6A0, 0xA6EF, WordBreak::ALetter),
    (0xA6F0, 0xA6F1, WordBreak::Extend),
    (0xA717, 0xA71F, WordBreak::ALetter),
    (0xA722, 0xA788, WordBreak::ALetter),
    (0xA78B, 0xA7CA, WordBreak::ALetter),
    (0xA7D0, 0xA7D1, WordBreak::ALetter),
    (0xA7D3, 0xA7D3, WordBreak::ALetter),
    (0xA7D5, 0xA7D9, WordBreak::ALetter),
    (0xA7F2, 0xA801, WordBreak::ALetter),
    (0xA802, 0xA802, WordBreak::Extend),
    (0xA803, 0xA805, WordBreak::ALetter),
    (0xA806, 0xA806, WordBreak::Extend),
    (0xA807, 0xA80A, WordBreak::ALetter),
    (0xA80B, 0xA80B, WordBreak::Extend),
    (0xA80C, 0xA822, WordBreak::ALetter),
    (0xA823, 0xA827, WordBreak::Extend),
    (0xA82C, 0xA82C, WordBreak::Extend),
    (0xA840, 0xA873, WordBreak::ALetter),
    (0xA880, 0xA881, WordBreak::Extend),
    (0xA882, 0xA8B3, WordBreak::ALetter),
    (0xA8B4, 0xA8C5, WordBreak::Extend),
    (0xA8D0, 0xA8D9, WordBreak::Numeric),
    (0xA8E0, 0xA8F1, WordBreak::Extend),
    (0xA8F2, 0xA8F7, WordBreak::ALetter),
    (0xA8FB, 0xA8FB, WordBreak::ALetter),
    (0xA8FD, 0xA8FE, WordBreak::ALetter),
    (0xA8FF, 0xA8FF, WordBreak::Extend),
    (0xA900, 0xA909, WordBreak::Numeric),
    (0xA90A, 0xA925, WordBreak::ALetter),
    (0xA926, 0xA92D, WordBreak::Extend),
    (0xA930, 0xA946, WordBreak::ALetter),
    (0xA947, 0xA953, WordBreak::Extend),
    (0xA960, 0xA97C, WordBreak::ALetter),
    (0xA980, 0xA983, WordBreak::Extend),
    (0xA984, 0xA9B2, WordBreak::ALetter),
    (0xA9B3, 0xA9C0, WordBreak::Extend),
    (0xA9CF, 0xA9CF, WordBreak::ALetter),
    (0xA9D0, 0xA9D9, WordBreak::Numeric),
    (0xA9E5, 0xA9E5, WordBreak::Extend),
    (0xAA00, 0xAA28, WordBreak::ALetter),
    (0xAA29, 0xAA36, WordBreak::Extend),
    (0xAA40, 0xAA42, WordBreak::ALetter),
    (0xAA43, 0xAA43, WordBreak::Extend),
    (0xAA44, 0xAA4B, WordBreak::ALetter),
    (0xAA4C, 0xAA4D, WordBreak::Extend),
    (0xAA50, 0xAA59, WordBreak::Numeric),
    (0xAA7B, 0xAA7D, WordBreak::Extend),
    (0xAAB0, 0xAAB0, WordBreak::Extend),
    (0xAAB2, 0xAAB4, WordBreak::Extend),
    (0xAAB7, 0xAAB8, WordBreak::Extend),
    (0xAABE, 0xAABF, WordBreak::Extend),
    (0xAAC1, 0xAAC1, WordBreak::Extend),
    (0xAAE0, 0xAAEA, WordBreak::ALetter),
    (0xAAEB, 0xAAEF, WordBreak::Extend),
    (0xAAF2, 0xAAF4, WordBreak::ALetter),
    (0xAAF5, 0xAAF6, WordBreak::Extend),
    (0xAB01, 0xAB06, WordBreak::ALetter),
    (0xAB09, 0xAB0E, WordBreak::ALetter),
    (0xAB11, 0xAB16, WordBreak::ALetter),
    (0xAB20, 0xAB26, WordBreak::ALetter),
    (0xAB28, 0xAB2E, WordBreak::ALetter),
    (0xAB30, 0xAB5A, WordBreak::ALetter),
    (0xAB5C, 0xAB69, WordBreak::ALetter),
    (0xAB70, 0xABE2, WordBreak::ALetter),
    (0xABE3, 0xABEA, WordBreak::Extend),
    (0xABEC, 0xABED, WordBreak::Extend),
    (0xABF0, 0xABF9, WordBreak::Numeric),
    (0xAC00, 0xD7A3, WordBreak::ALetter),
    (0xD7B0, 0xD7C6, WordBreak::ALetter),
    (0xD7CB, 0xD7FB, WordBreak::ALetter),
    (0xFB00, 0xFB06, WordBreak::ALetter),
    (0xFB13, 0xFB17, WordBreak::ALetter),
    (0xFB1D, 0xFB1D, WordBreak::HebrewLetter),
    (0xFB1E, 0xFB1E, WordBreak::Extend),
    (0xFB1F, 0xFB28, WordBreak::HebrewLetter),
    (0xFB2A, 0xFB36, WordBreak::HebrewLetter),
    (0xFB38, 0xFB3C, WordBreak::HebrewLetter),
    (0xFB3E, 0xFB3E, WordBreak::HebrewLetter),
    (0xFB40, 0xFB41, WordBreak::HebrewLetter),
    (0xFB43, 0xFB44, WordBreak::HebrewLetter),
    (0xFB46, 0xFB4F, WordBreak::HebrewLetter),
    (0xFB50, 0xFBB1, WordBreak::ALetter),
    (0xFBD3, 0xFD3D, WordBreak::ALetter),
    (0xFD50, 0xFD8F, WordBreak::ALetter),
    (0xFD92, 0xFDC7, WordBreak::ALetter),
    (0xFDF0, 0xFDFB, WordBreak::ALetter),
    (0xFE00, 0xFE0F, WordBreak::Extend),
    (0xFE10, 0xFE10, WordBreak::MidNum),
    (0xFE13, 0xFE13, WordBreak::MidLetter),
    (0xFE14, 0xFE14, WordBreak::MidNum),
    (0xFE20, 0xFE2F, WordBreak::Extend),
    (0xFE33, 0xFE34, WordBreak::ExtendNumLet),
    (0xFE4D, 0xFE4F, WordBreak::ExtendNumLet),
    (0xFE50, 0xFE50, WordBreak::MidNum),
    (0xFE52, 0xFE52, WordBreak::MidNumLet),
    (0xFE54, 0xFE54, WordBreak::MidNum),
    (0xFE55, 0xFE55, WordBreak::MidLetter),
    (0xFE70, 0xFE74, WordBreak::ALetter),
    (0xFE76, 0xFEFC, WordBreak::ALetter),
    (0xFEFF, 0xFEFF, WordBreak::Format),
    (0xFF07, 0xFF07, WordBreak::MidNumLet),
    (0xFF0C, 0xFF0C, WordBreak::MidNum),
    (0xFF0E, 0xFF0E, WordBreak::MidNumLet),
    (0xFF1A, 0xFF1A, WordBreak::MidLetter),
    (0xFF1B, 0xFF1B, WordBreak::MidNum),
    (0xFF21, 0xFF3A, WordBreak::ALetter),
    (0xFF3F, 0xFF3F, WordBreak::ExtendNumLet),
    (0xFF41, 0xFF5A, WordBreak::ALetter),
    (0xFF66, 0xFF9D, WordBreak::Katakana),
    (0xFF9E, 0xFF9F, WordBreak::Extend),
    (0xFFA0, 0xFFBE, WordBreak::ALetter),
    (0xFFC2, 0xFFC7, WordBreak::ALetter),
    (0xFFCA, 0xFFCF, WordBreak::ALetter),
    (0xFFD2, 0xFFD7, WordBreak::ALetter),
    (0xFFDA, 0xFFDC, WordBreak::ALetter),
    (0xFFF9, 0xFFFB, WordBreak::Format),
    (0x10000, 0x1000B, WordBreak::ALetter),
    (0x1000D, 0x10026, WordBreak::ALetter),
    (0x10028, 0x1003A, WordBreak::ALetter),
    (0x1003C, 0x1003D, WordBreak::ALetter),
    (0x1003F, 0x1004D, WordBreak::ALetter),
    (0x10050, 0x1005D, WordBreak::ALetter),
    (0x10080, 0x100FA, WordBreak::ALetter),
    (0x10140, 0x10174, WordBreak::ALetter),
    (0x101FD, 0x101FD, WordBreak::Extend),
    (0x10280, 0x1029C, WordBreak::ALetter),
    (0x102A0, 0x102D0, WordBreak::ALetter),
    (0x102E0, 0x102E0, WordBreak::Extend),
    (0x10300, 0x1031F, WordBreak::ALetter),
    (0x1032D, 0x1034A, WordBreak::ALetter),
    (0x10350, 0x10375, WordBreak::ALetter),
    (0x10376, 0x1037A, WordBreak::Extend),
    (0x10380, 0x1039D, WordBreak::ALetter),
    (0x103A0, 0x103C3, WordBreak::ALetter),
    (0x103C8, 0x103CF, WordBreak::ALetter),
    (0x103D1, 0x103D5, WordBreak::ALetter),
    (0x10400, 0x1049D, WordBreak::ALetter),
    (0x104A0, 0x104A9, WordBreak::Numeric),
    (0x104B0, 0x104D3, WordBreak::ALetter),
    (0x104D8, 0x104FB, WordBreak::ALetter),
    (0x10500, 0x10527, WordBreak::ALetter),
    (0x10530, 0x10563, WordBreak::ALetter),
    (0x10570, 0x1057A, WordBreak::ALetter),
    (0x1057C, 0x1058A, WordBreak::ALetter),
    (0x1058C, 0x10592, WordBreak::ALetter),
    (0x10594, 0x10595, WordBreak::ALetter),
    (0x10597, 0x105A1, WordBreak::ALetter),
    (0x105A3, 0x105B1, WordBreak::ALetter),
    (0x105B3, 0x105B9, WordBreak::ALetter),
    (0x105BB, 0x105BC, WordBreak::ALetter),
    (0x10600, 0x10736, WordBreak::ALetter),
    (0x10740, 0x10755, WordBreak::ALetter),
    (0x10760, 0x10767, WordBreak::ALetter),
    (0x10780, 0x10785, WordBreak::ALetter),
    (0x10787, 0x107B0, WordBreak::ALetter),
    (0x107B2, 0x107BA, WordBreak::ALetter),
    (0x10800, 0x10805, WordBreak::ALetter),
    (0x10808, 0x10808, WordBreak::ALetter),
    (0x1080A, 0x10835, WordBreak::ALetter),
    (0x10837, 0x10838, WordBreak::ALetter),
    (0x1083C, 0x1083C, WordBreak::ALetter),
    (0x1083F, 0x10855, WordBreak::ALetter),
    (0x10860, 0x10876, WordBreak::ALetter),
    (0x10880, 0x1089E, WordBreak::ALetter),
    (0x108E0, 0x108F2, WordBreak::ALetter),
    (0x108F4, 0x108F5, WordBreak::ALetter),
    (0x10900, 0x10915, WordBreak::ALetter),
    (0x10920, 0x10939, WordBreak::ALetter),
    (0x10980, 0x109B7, WordBreak::ALetter),
    (0x109BE, 0x109BF, WordBreak::ALetter),
    (0x10A00, 0x10A00, WordBreak::ALetter),
    (0x10A01, 0x10A03, WordBreak::Extend),
    (0x10A05, 0x10A06, WordBreak::Extend),
    (0x10A0C, 0x10A0F, WordBreak::Extend),
    (0x10A10, 0x10A13, WordBreak::ALetter),
    (0x10A15, 0x10A17, WordBreak::ALetter),
    (0x10A19, 0x10A35, WordBreak::ALetter),
    (0x10A38, 0x10A3A, WordBreak::Extend),
    (0x10A3F, 0x10A3F, WordBreak::Extend),
    (0x10A60, 0x10A7C, WordBreak::ALetter),
    (0x10A80, 0x10A9C, WordBreak::ALetter),
    (0x10AC0, 0x10AC7, WordBreak::ALetter),
    (0x10AC9, 0x10AE4, WordBreak::ALetter),
    (0x10AE5, 0x10AE6, WordBreak::Extend),
    (0x10B00, 0x10B35, WordBreak::ALetter),
    (0x10B40, 0x10B55, WordBreak::ALetter),
    (0x10B60, 0x10B72, WordBreak::ALetter),
    (0x10B80, 0x10B91, WordBreak::ALetter),
    (0x10C00, 0x10C48, WordBreak::ALetter),
    (0x10C80, 0x10CB2, WordBreak::ALetter),
    (0x10CC0, 0x10CF2, WordBreak::ALetter),
    (0x10D00, 0x10D23, WordBreak::ALetter),
    (0x10D24, 0x10D27, WordBreak::Extend),
    (0x10D30, 0x10D39, WordBreak::Numeric),
    (0x10E80, 0x10EA9, WordBreak::ALetter),
    (0x10EAB, 0x10EAC, WordBreak::Extend),
    (0x10EB0, 0x10EB1, WordBreak::ALetter),
    (0x10F00, 0x10F1C, WordBreak::ALetter),
    (0x10F27, 0x10F27, WordBreak::ALetter),
    (0x10F30, 0x10F45, WordBreak::ALetter),
    (0x10F46, 0x10F50, WordBreak::Extend),
    (0x10F70, 0x10F81, WordBreak::ALetter),
    (0x10F82, 0x10F85, WordBreak::Extend),
    (0x10FB0, 0x10FC4, WordBreak::ALetter),
    (0x10FE0, 0x10FF6, WordBreak::ALetter),
    (0x11000, 0x11002, WordBreak::Extend),
    (0x11003, 0x11037, WordBreak::ALetter),
    (0x11038, 0x11046, WordBreak::Extend),
    (0x11066, 0x1106F, WordBreak::Numeric),
    (0x11070, 0x11070, WordBreak::Extend),
    (0x11071, 0x11072, WordBreak::ALetter),
    (0x11073, 0x11074, WordBreak::Extend),
    (0x11075, 0x11075, WordBreak::ALetter),
    (0x1107F, 0x11082, WordBreak::Extend),
    (0x11083, 0x110AF, WordBreak::ALetter),
    (0x110B0, 0x110BA, WordBreak::Extend),
    (0x110BD, 0x110BD, WordBreak::Format),
    (0x110C2, 0x110C2, WordBreak::Extend),
    (0x110CD, 0x110CD, WordBreak::Format),
    (0x110D0, 0x110E8, WordBreak::ALetter),
    (0x110F0, 0x110F9, WordBreak::Numeric),
    (0x11100, 0x11102, WordBreak::Extend),
    (0x11103, 0x11126, WordBreak::ALetter),
    (0x11127, 0x11134, WordBreak::Extend),
    (0x11136, 0x1113F, WordBreak::Numeric),
    (0x11144, 0x11144, WordBreak::ALetter),
    (0x11145, 0x11146, WordBreak::Extend),
    (0x11147, 0x11147, WordBreak::ALetter),
    (0x11150, 0x11172, WordBreak::ALetter),
    (0x11173, 0x11173, WordBreak::Extend),
    (0x11176, 0x11176, WordBreak::ALetter),
    (0x11180, 0x11182, WordBreak::Extend),
    (0x11183, 0x111B2, WordBreak::ALetter),
    (0x111B3, 0x111C0, WordBreak::Extend),
    (0x111C1, 0x111C4, WordBreak::ALetter),
    (0x111C9, 0x111CC, WordBreak::Extend),
    (0x111CE, 0x111CF, WordBreak::Extend),
    (0x111D0, 0x111D9, WordBreak::Numeric),
    (0x111DA, 0x111DA, WordBreak::ALetter),
    (0x111DC, 0x111DC, WordBreak::ALetter),
    (0x11200, 0x11211, WordBreak::ALetter),
    (0x11213, 0x1122B, WordBreak::ALetter),
    (0x1122C, 0x11237, WordBreak::Extend),
    (0x1123E, 0x1123E, WordBreak::Extend),
    (0x11280, 0x11286, WordBreak::ALetter),
    (0x11288, 0x11288, WordBreak::ALetter),
    (0x1128A, 0x1128D, WordBreak::ALetter),
    (0x1128F, 0x1129D, WordBreak::ALetter),
    (0x1129F, 0x112A8, WordBreak::ALetter),
    (0x112B0, 0x112DE, WordBreak::ALetter),
    (0x112DF, 0x112EA, WordBreak::Extend),
    (0x112F0, 0x112F9, WordBreak::Numeric),
    (0x11300, 0x11303, WordBreak::Extend),
    (0x11305, 0x1130C, WordBreak::ALetter),
    (0x1130F, 0x11310, WordBreak::ALetter),
    (0x11313, 0x11328, WordBreak::ALetter),
    (0x1132A, 0x11330, WordBreak::ALetter),
    (0x11332, 0x11333, WordBreak::ALetter),
    (0x11335, 0x11339, WordBreak::ALetter),
    (0x1133B, 0x1133C, WordBreak::Extend),
    (0x1133D, 0x1133D, WordBreak::ALetter),
    (0x1133E, 0x11344, WordBreak::Extend),
    (0x11347, 0x11348, WordBreak::Extend),
    (0x1134B, 0x1134D, WordBreak::Extend),
    (0x11350, 0x11350, WordBreak::ALetter),
    (0x11357, 0x11357, WordBreak::Extend),
    (0x1135D, 0x11361, WordBreak::ALetter),
    (0x11362, 0x11363, WordBreak::Extend),
    (0x11366, 0x1136C, WordBreak::Extend),
    (0x11370, 0x11374, WordBreak::Extend),
    (0x11400, 0x11434, WordBreak::ALetter),
    (0x11435, 0x11446, WordBreak::Extend),
    (0x11447, 0x1144A, WordBreak::ALetter),
    (0x11450, 0x11459, WordBreak::Numeric),
    (0x1145E, 0x1145E, WordBreak::Extend),
    (0x1145F, 0x11461, WordBreak::ALetter),
    (0x11480, 0x114AF, WordBreak::ALetter),
    (0x114B0, 0x114C3, WordBreak::Extend),
    (0x114C4, 0x114C5, WordBreak::ALetter),
    (0x114C7, 0x114C7, WordBreak::ALetter),
    (0x114D0, 0x114D9, WordBreak::Numeric),
    (0x11580, 0x115AE, WordBreak::ALetter),
    (0x115AF, 0x115B5, WordBreak::Extend),
    (0x115B8, 0x115C0, WordBreak::Extend),
    (0x115D8, 0x115DB, WordBreak::ALetter),
    (0x115DC, 0x115DD, WordBreak::Extend),
    (0x11600, 0x1162F, WordBreak::ALetter),
    (0x11630, 0x11640, WordBreak::Extend),
    (0x11644, 0x11644, WordBreak::ALetter),
    (0x11650, 0x11659, WordBreak::Numeric),
    (0x11680, 0x116AA, WordBreak::ALetter),
    (0x116AB, 0x116B7, WordBreak::Extend),
    (0x116B8, 0x116B8, WordBreak::ALetter),
    (0x116C0, 0x116C9, WordBreak::Numeric),
    (0x1171D, 0x1172B, WordBreak::Extend),
    (0x11800, 0x1182B, WordBreak::ALetter),
    (0x1182C, 0x1183A, WordBreak::Extend),
    (0x118A0, 0x118DF, WordBreak::ALetter),
    (0x118E0, 0x118E9, WordBreak::Numeric),
    (0x118FF, 0x11906, WordBreak::ALetter),
    (0x11909, 0x11909, WordBreak::ALetter),
    (0x1190C, 0x11913, WordBreak::ALetter),
    (0x11915, 0x11916, WordBreak::ALetter),
    (0x11918, 0x1192F, WordBreak::ALetter),
    (0x11930, 0x11935, WordBreak::Extend),
    (0x11937, 0x11938, WordBreak::Extend),
    (0x1193B, 0x1193E, WordBreak::Extend),
    (0x1193F, 0x1193F, WordBreak::ALetter),
    (0x11940, 0x11940, WordBreak::Extend),
    (0x11941, 0x11941, WordBreak::ALetter),
    (0x11942, 0x11943, WordBreak::Extend),
    (0x11950, 0x11959, WordBreak::Numeric),
    (0x119A0, 0x119A7, WordBreak::ALetter),
    (0x119AA, 0x119D0, WordBreak::ALetter),
    (0x119D1, 0x119D7, WordBreak::Extend),
    (0x119DA, 0x119E0, WordBreak::Extend),
    (0x119E1, 0x119E1, WordBreak::ALetter),
    (0x119E3, 0x119E3, WordBreak::ALetter),
    (0x119E4, 0x119E4, WordBreak::Extend),
    (0x11A00, 0x11A00, WordBreak::ALetter),
    (0x11A01, 0x11A0A, WordBreak::Extend),
    (0x11A0B, 0x11A32, WordBreak::ALetter),
    (0x11A33, 0x11A39, WordBreak::Extend),
    (0x11A3A, 0x11A3A, WordBreak::ALetter),
    (0x11A3B, 0x11A3E, WordBreak::Extend),
    (0x11A47, 0x11A47, WordBreak::Extend),
    (0x11A50, 0x11A50, WordBreak::ALetter),
    (0x11A51, 0x11A5B, WordBreak::Extend),
    (0x11A5C, 0x11A89, WordBreak::ALetter),
    (0x11A8A, 0x11A99, WordBreak::Extend),
    (0x11A9D, 0x11A9D, WordBreak::ALetter),
    (0x11AB0, 0x11AF8, WordBreak::ALetter),
    (0x11C00, 0x11C08, WordBreak::ALetter),
    (0x11C0A, 0x11C2E, WordBreak::ALetter),
    (0x11C2F, 0x11C36, WordBreak::Extend),
    (0x11C38, 0x11C3F, WordBreak::Extend),
    (0x11C40, 0x11C40, WordBreak::ALetter),
    (0x11C50, 0x11C59, WordBreak::Numeric),
    (0x11C72, 0x11C8F, WordBreak::ALetter),
    (0x11C92, 0x11CA7, WordBreak::Extend),
    (0x11CA9, 0x11CB6, WordBreak::Extend),
    (0x11D00, 0x11D06, WordBreak::ALetter),
    (0x11D08, 0x11D09, WordBreak::ALetter),
    (0x11D0B, 0x11D30, WordBreak::ALetter),
    (0x11D31, 0x11D36, WordBreak::Extend),
    (0x11D3A, 0x11D3A, WordBreak::Extend),
    (0x11D3C, 0x11D3D, WordBreak::Extend),
    (0x11D3F, 0x11D45, WordBreak::Extend),
    (0x11D46, 0x11D46, WordBreak::ALetter),
    (0x11D47, 0x11D47, WordBreak::Extend),
    (0x11D50, 0x11D59, WordBreak::Numeric),
    (0x11D60, 0x11D65, WordBreak::ALetter),
    (0x11D67, 0x11D68, WordBreak::ALetter),
    (0x11D6A, 0x11D89, WordBreak::ALetter),
    (0x11D8A, 0x11D8E, WordBreak::Extend),
    (0x11D90, 0x11D91, WordBreak::Extend),
    (0x11D93, 0x11D97, WordBreak::Extend),
    (0x11D98, 0x11D98, WordBreak::ALetter),
    (0x11DA0, 0x11DA9, WordBreak::Numeric),
    (0x11EE0, 0x11EF2, WordBreak::ALetter),
    (0x11EF3, 0x11EF6, WordBreak::Extend),
    (0x11FB0, 0x11FB0, WordBreak::ALetter),
    (0x12000, 0x12399, WordBreak::ALetter),
    (0x12400, 0x1246E, WordBreak::ALetter),
    (0x12480, 0x12543, WordBreak::ALetter),
    (0x12F90, 0x12FF0, WordBreak::ALetter),
    (0x13000, 0x1342E, WordBreak::ALetter),
    (0x13430, 0x13438, WordBreak::Format),
    (0x14400, 0x14646, WordBreak::ALetter),
    (0x16800, 0x16A38, WordBreak::ALetter),
    (0x16A40, 0x16A5E, WordBreak::ALetter),
    (0x16A60, 0x16A69, WordBreak::Numeric),
    (0x16A70, 0x16ABE, WordBreak::ALetter),
    (0x16AC0, 0x16AC9, WordBreak::Numeric),
    (0x16AD0, 0x16AED, WordBreak::ALetter),
    (0x16AF0, 0x16AF4, WordBreak::Extend),
    (0x16B00, 0x16B2F, WordBreak::ALetter),
    (0x16B30, 0x16B36, WordBreak::Extend),
    (0x16B40, 0x16B43, WordBreak::ALetter),
    (0x16B50, 0x16B59, WordBreak::Numeric),
    (0x16B63, 0x16B77, WordBreak::ALetter),
    (0x16B7D, 0x16B8F, WordBreak::ALetter),
    (0x16E40, 0x16E7F, WordBreak::ALetter),
    (0x16F00, 0x16F4A, WordBreak::ALetter),
    (0x16F4F, 0x16F4F, WordBreak::Extend),
    (0x16F50, 0x16F50, WordBreak::ALetter),
    (0x16F51, 0x16F87, WordBreak::Extend),
    (0x16F8F, 0x16F92, WordBreak::Extend),
    (0x16F93, 0x16F9F, WordBreak::ALetter),
    (0x16FE0, 0x16FE1, WordBreak::ALetter),
    (0x16FE3, 0x16FE3, WordBreak::ALetter),
    (0x16FE4, 0x16FE4, WordBreak::Extend),
    (0x16FF0, 0x16FF1, WordBreak::Extend),
    (0x18D00, 0x18D08, WordBreak::ALetter),
    (0x1AFF0, 0x1B000, WordBreak::Katakana),
    (0x1B001, 0x1B122, WordBreak::ALetter),
    (0x1B150, 0x1B152, WordBreak::ALetter),
    (0x1B164, 0x1B167, WordBreak::Katakana),
    (0x1BC00, 0x1BC6A, WordBreak::ALetter),
    (0x1BC70, 0x1BC7C, WordBreak::ALetter),
    (0x1BC80, 0x1BC88, WordBreak::ALetter),
    (0x1BC90, 0x1BC99, WordBreak::ALetter),
    (0x1BC9D, 0x1BC9E, WordBreak::Extend),
    (0x1BCA0, 0x1BCA3, WordBreak::Format),
    (0x1CF00, 0x1CF2D, WordBreak::Extend),
    (0x1CF30, 0x1CF46, WordBreak::Extend),
    (0x1D165, 0x1D169, WordBreak::Extend),
    (0x1D16D, 0x1D172, WordBreak::Extend),
    (0x1D173, 0x1D17A, WordBreak::Format),
    (0x1D17B, 0x1D182, WordBreak::Extend),
    (0x1D185, 0x1D18B, WordBreak::Extend),
    (0x1D1AA, 0x1D1AD, WordBreak::Extend),
    (0x1D242, 0x1D244, WordBreak::Extend),
    (0x1D400, 0x1D454, WordBreak::ALetter),
    (0x1D456, 0x1D49C, WordBreak::ALetter),
    (0x1D49E, 0x1D49F, WordBreak::ALetter),
    (0x1D4A2, 0x1D4A2, WordBreak::ALetter),
    (0x1D4A5, 0x1D4A6, WordBreak::ALetter),
    (0x1D4A9, 0x1D4AC, WordBreak::ALetter),
    (0x1D4AE, 0x1D4B9, WordBreak::ALetter),
    (0x1D4BB, 0x1D4BB, WordBreak::ALetter),
    (0x1D4BD, 0x1D4C3, WordBreak::ALetter),
    (0x1D4C5, 0x1D505, WordBreak::ALetter),
    (0x1D507, 0x1D50A, WordBreak::ALetter),
    (0x1D50D, 0x1D514, WordBreak::ALetter),
    (0x1D516, 0x1D51C, WordBreak::ALetter),
    (0x1D51E, 0x1D539, WordBreak::ALetter),
    (0x1D53B, 0x1D53E, WordBreak::ALetter),
    (0x1D540, 0x1D544, WordBreak::ALetter),
    (0x1D546, 0x1D546, WordBreak::ALetter),
    (0x1D54A, 0x1D550, WordBreak::ALetter),
    (0x1D552, 0x1D6A5, WordBreak::ALetter),
    (0x1D6A8, 0x1D6C0, WordBreak::ALetter),
    (0x1D6C2, 0x1D6DA, WordBreak::ALetter),
    (0x1D6DC, 0x1D6FA, WordBreak::ALetter),
    (0x1D6FC, 0x1D714, WordBreak::ALetter),
    (0x1D716, 0x1D734, WordBreak::ALetter),
    (0x1D736, 0x1D74E, WordBreak::ALetter),
    (0x1D750, 0x1D76E, WordBreak::ALetter),
    (0x1D770, 0x1D788, WordBreak::ALetter),
    (0x1D78A, 0x1D7A8, WordBreak::ALetter),
    (0x1D7AA, 0x1D7C2, WordBreak::ALetter),
    (0x1D7C4, 0x1D7CB, WordBreak::ALetter),
    (0x1D7CE, 0x1D7FF, WordBreak::Numeric),
    (0x1DA00, 0x1DA36, WordBreak::Extend),
    (0x1DA3B, 0x1DA6C, WordBreak::Extend),
    (0x1DA75, 0x1DA75, WordBreak::Extend),
    (0x1DA84, 0x1DA84, WordBreak::Extend),
    (0x1DA9B, 0x1DA9F, WordBreak::Extend),
    (0x1DAA1, 0x1DAAF, WordBreak::Extend),
    (0x1DF00, 0x1DF1E, WordBreak::ALetter),
    (0x1E000, 0x1E006, WordBreak::Extend),
    (0x1E008, 0x1E018, WordBreak::Extend),
    (0x1E01B, 0x1E021, WordBreak::Extend),
    (0x1E023, 0x1E024, WordBreak::Extend),
    (0x1E026, 0x1E02A, WordBreak::Extend),
    (0x1E100, 0x1E12C, WordBreak::ALetter),
    (0x1E130, 0x1E136, WordBreak::Extend),
    (0x1E137, 0x1E13D, WordBreak::ALetter),
    (0x1E140, 0x1E149, WordBreak::Numeric),
    (0x1E14E, 0x1E14E, WordBreak::ALetter),
    (0x1E290, 0x1E2AD, WordBreak::ALetter),
    (0x1E2AE, 0x1E2AE, WordBreak::Extend),
    (0x1E2C0, 0x1E2EB, WordBreak::ALetter),
    (0x1E2EC, 0x1E2EF, WordBreak::Extend),
    (0x1E2F0, 0x1E2F9, WordBreak::Numeric),
    (0x1E7E0, 0x1E7E6, WordBreak::ALetter),
    (0x1E7E8, 0x1E7EB, WordBreak::ALetter),
    (0x1E7ED, 0x1E7EE, WordBreak::ALetter),
    (0x1E7F0, 0x1E7FE, WordBreak::ALetter),
    (0x1E800, 0x1E8C4, WordBreak::ALetter),
    (0x1E8D0, 0x1E8D6, WordBreak::Extend),
    (0x1E900, 0x1E943, WordBreak::ALetter),
    (0x1E944, 0x1E94A, WordBreak::Extend),
    (0x1E94B, 0x1E94B, WordBreak::ALetter),
    (0x1E950, 0x1E959, WordBreak::Numeric),
    (0x1EE00, 0x1EE03, WordBreak::ALetter),
    (0x1EE05, 0x1EE1F, WordBreak::ALetter),
    (0x1EE21, 0x1EE22, WordBreak::ALetter),
    (0x1EE24, 0x1EE24, WordBreak::ALetter),
    (0x1EE27, 0x1EE27, WordBreak::ALetter),
    (0x1EE29, 0x1EE32, WordBreak::ALetter),
    (0x1EE34, 0x1EE37, WordBreak::ALetter),
    (0x1EE39, 0x1EE39, WordBreak::ALetter),
    (0x1EE3B, 0x1EE3B, WordBreak::ALetter),
    (0x1EE42, 0x1EE42, WordBreak::ALetter),
    (0x1EE47, 0x1EE47, WordBreak::ALetter),
    (0x1EE49, 0x1EE49, WordBreak::ALetter),
    (0x1EE4B, 0x1EE4B, WordBreak::ALetter),
    (0x1EE4D, 0x1EE4F, WordBreak::ALetter),
    (0x1EE51, 0x1EE52, WordBreak::ALetter),
    (0x1EE54, 0x1EE54, WordBreak::ALetter),
    (0x1EE57, 0x1EE57, WordBreak::ALetter),
    (0x1EE59, 0x1EE59, WordBreak::ALetter),
    (0x1EE5B, 0x1EE5B, WordBreak::ALetter),
    (0x1EE5D, 0x1EE5D, WordBreak::ALetter),
    (0x1EE5F, 0x1EE5F, WordBreak::ALetter),
    (0x1EE61, 0x1EE62, WordBreak::ALetter),
    (0x1EE64, 0x1EE64, WordBreak::ALetter),
    (0x1EE67, 0x1EE6A, WordBreak::ALetter),
    (0x1EE6C, 0x1EE72, WordBreak::ALetter),
    (0x1EE74, 0x1EE77, WordBreak::ALetter),
    (0x1EE79, 0x1EE7C, WordBreak::ALetter),
    (0x1EE7E, 0x1EE7E, WordBreak::ALetter),
    (0x1EE80, 0x1EE89, WordBreak::ALetter),
    (0x1EE8B, 0x1EE9B, WordBreak::ALetter),
    (0x1EEA1, 0x1EEA3, WordBreak::ALetter),
    (0x1EEA5, 0x1EEA9, WordBreak::ALetter),
    (0x1EEAB, 0x1EEBB, WordBreak::ALetter),
    (0x1F000, 0x1F0FF, WordBreak::ExtendedPictographic),
    (0x1F10D, 0x1F10F, WordBreak::ExtendedPictographic),
    (0x1F12F, 0x1F12F, WordBreak::ExtendedPictographic),
    (0x1F16C, 0x1F171, WordBreak::ExtendedPictographic),
    (0x1F17E, 0x1F17F, WordBreak::ExtendedPictographic),
    (0x1F18E, 0x1F18E, WordBreak::ExtendedPictographic),
    (0x1F191, 0x1F19A, WordBreak::ExtendedPictographic),
    (0x1F1AD, 0x1F1E5, WordBreak::ExtendedPictographic),
    (0x1F1E6, 0x1F1FF, WordBreak::RegionalIndicator),
    (0x1F201, 0x1F20F, WordBreak::ExtendedPictographic),
    (0x1F21A, 0x1F21A, WordBreak::ExtendedPictographic),
    (0x1F22F, 0x1F22F, WordBreak::ExtendedPictographic),
    (0x1F232, 0x1F23A, WordBreak::ExtendedPictographic),
    (0x1F23C, 0x1F23F, WordBreak::ExtendedPictographic),
    (0x1F249, 0x1F3FA, WordBreak::ExtendedPictographic),
    (0x1F3FB, 0x1F3FF, WordBreak::Extend),
    (0x1F400, 0x1F53D, WordBreak::ExtendedPictographic),
    (0x1F546, 0x1F64F, WordBreak::ExtendedPictographic),
    (0x1F680, 0x1F6FF, WordBreak::ExtendedPictographic),
    (0x1F774, 0x1F77F, WordBreak::ExtendedPictographic),
    (0x1F7D5, 0x1F7FF, WordBreak::ExtendedPictographic),
    (0x1F80C, 0x1F80F, WordBreak::ExtendedPictographic),
    (0x1F848, 0x1F84F, WordBreak::ExtendedPictographic),
    (0x1F85A, 0x1F85F, WordBreak::ExtendedPictographic),
    (0x1F888, 0x1F88F, WordBreak::ExtendedPictographic),
    (0x1F8AE, 0x1F8FF, WordBreak::ExtendedPictographic),
    (0x1F90C, 0x1F93A, WordBreak::ExtendedPictographic),
    (0x1F93C, 0x1F945, WordBreak::ExtendedPictographic),
    (0x1F947, 0x1FAFF, WordBreak::ExtendedPictographic),
    (0x1FBF0, 0x1FBF9, WordBreak::Numeric),
    (0x1FC00, 0x1FFFD, WordBreak::ExtendedPictographic),
    (0xE0001, 0xE0001, WordBreak::Format),
    (0xE0020, 0xE007F, WordBreak::Extend),
    (0xE0100, 0xE01EF, WordBreak::Extend),
];
