//! The Khazad substitution box, in both lookup-table and compact forms.

/// The Khazad substitution table.
///
/// Substitutes one byte for another via a fixed, non-linear mapping. Khazad
/// is unusual in that this table is also reused as the source of
/// [round constants](add_round_const), and that it can alternatively be
/// computed on the fly from the much smaller [`MINI`] table via [`compact`].
pub const LUT: [u8; 256] = [
    0xBA, 0x54, 0x2F, 0x74, 0x53, 0xD3, 0xD2, 0x4D, 0x50, 0xAC, 0x8D, 0xBF, 0x70, 0x52, 0x9A, 0x4C,
    0xEA, 0xD5, 0x97, 0xD1, 0x33, 0x51, 0x5B, 0xA6, 0xDE, 0x48, 0xA8, 0x99, 0xDB, 0x32, 0xB7, 0xFC,
    0xE3, 0x9E, 0x91, 0x9B, 0xE2, 0xBB, 0x41, 0x6E, 0xA5, 0xCB, 0x6B, 0x95, 0xA1, 0xF3, 0xB1, 0x02,
    0xCC, 0xC4, 0x1D, 0x14, 0xC3, 0x63, 0xDA, 0x5D, 0x5F, 0xDC, 0x7D, 0xCD, 0x7F, 0x5A, 0x6C, 0x5C,
    0xF7, 0x26, 0xFF, 0xED, 0xE8, 0x9D, 0x6F, 0x8E, 0x19, 0xA0, 0xF0, 0x89, 0x0F, 0x07, 0xAF, 0xFB,
    0x08, 0x15, 0x0D, 0x04, 0x01, 0x64, 0xDF, 0x76, 0x79, 0xDD, 0x3D, 0x16, 0x3F, 0x37, 0x6D, 0x38,
    0xB9, 0x73, 0xE9, 0x35, 0x55, 0x71, 0x7B, 0x8C, 0x72, 0x88, 0xF6, 0x2A, 0x3E, 0x5E, 0x27, 0x46,
    0x0C, 0x65, 0x68, 0x61, 0x03, 0xC1, 0x57, 0xD6, 0xD9, 0x58, 0xD8, 0x66, 0xD7, 0x3A, 0xC8, 0x3C,
    0xFA, 0x96, 0xA7, 0x98, 0xEC, 0xB8, 0xC7, 0xAE, 0x69, 0x4B, 0xAB, 0xA9, 0x67, 0x0A, 0x47, 0xF2,
    0xB5, 0x22, 0xE5, 0xEE, 0xBE, 0x2B, 0x81, 0x12, 0x83, 0x1B, 0x0E, 0x23, 0xF5, 0x45, 0x21, 0xCE,
    0x49, 0x2C, 0xF9, 0xE6, 0xB6, 0x28, 0x17, 0x82, 0x1A, 0x8B, 0xFE, 0x8A, 0x09, 0xC9, 0x87, 0x4E,
    0xE1, 0x2E, 0xE4, 0xE0, 0xEB, 0x90, 0xA4, 0x1E, 0x85, 0x60, 0x00, 0x25, 0xF4, 0xF1, 0x94, 0x0B,
    0xE7, 0x75, 0xEF, 0x34, 0x31, 0xD4, 0xD0, 0x86, 0x7E, 0xAD, 0xFD, 0x29, 0x30, 0x3B, 0x9F, 0xF8,
    0xC6, 0x13, 0x06, 0x05, 0xC5, 0x11, 0x77, 0x7C, 0x7A, 0x78, 0x36, 0x1C, 0x39, 0x59, 0x18, 0x56,
    0xB3, 0xB0, 0x24, 0x20, 0xB2, 0x92, 0xA3, 0xC0, 0x44, 0x62, 0x10, 0xB4, 0x84, 0x43, 0x93, 0xC2,
    0x4A, 0xBD, 0x8F, 0x2D, 0xBC, 0x9C, 0x6A, 0x40, 0xCF, 0xA2, 0x80, 0x4F, 0x1F, 0xCA, 0xAA, 0x42,
];

/// The 16-entry table from which both 4-bit boxes used by [`compact`] are
/// drawn: the high nibble of `MINI[i]` is `P[i]`, the low nibble is `Q[i]`.
///
/// This is the entire secret-dependent lookup table touched by the
/// [compact](compact) substitution path; at 16 bytes it fits in a single cache
/// line on essentially any target, which is the point of using it instead of
/// [`LUT`] on a device where cache-timing side channels matter.
pub const MINI: [u8; 16] = [
    0x39, 0xFE, 0xE5, 0x06, 0x5A, 0x42, 0xB3, 0xCC, 0xDF, 0xA0, 0x94, 0x6D, 0x77, 0x8B, 0x21, 0x18,
];

/// Substitute `x` using the [lookup table](LUT).
pub fn lut(x: u8) -> u8 {
    LUT[x as usize]
}

/// Substitute `x` by computing it from the [compact `P`/`Q` tables](MINI)
/// instead of looking it up in the full [256-byte table](LUT).
///
/// The byte is processed as two nibbles through three layers of 4-bit
/// lookups, with a fixed bit permutation applied between layers that swaps
/// bits 2–3 with bits 4–5 (and, between the first and second layer, a full
/// nibble swap). `lut(x) == compact(x)` for every `x`; which form to use is a
/// code-size/cache-footprint trade-off, not a behavioral choice.
pub fn compact(x: u8) -> u8 {
    let mut work = x;
    work = apply_mini(work);
    work = bit_perm(work);
    work = work.rotate_left(4);
    work = apply_mini(work);
    work = work.rotate_left(4);
    work = bit_perm(work);
    apply_mini(work)
}

fn bit_perm(x: u8) -> u8 {
    (x & 0xC3) | ((x & 0x30) >> 2) | ((x & 0x0C) << 2)
}

fn apply_mini(x: u8) -> u8 {
    (MINI[(x >> 4) as usize] & 0xF0) | (MINI[(x & 0xF) as usize] & 0x0F)
}

/// Substitute every byte of `block` in place via [`lut`].
pub fn apply_block(block: &mut [u8; 8]) {
    for b in block.iter_mut() {
        *b = lut(*b);
    }
}

/// XOR the round constant for round `r` into `block`.
///
/// The constant reuses [`LUT`] as its source: round `r`'s constant is the
/// 8-byte slice `LUT[8*r .. 8*r + 8]`. This is a size optimization — an
/// implementation carrying only the [compact](compact) `P`/`Q` form must
/// instead compute these bytes by applying [`lut`] to `8*r, 8*r+1, ..., 8*r+7`.
pub fn add_round_const(block: &mut [u8; 8], r: usize) {
    for (i, b) in block.iter_mut().enumerate() {
        *b ^= LUT[r * 8 + i];
    }
}

#[cfg(test)]
mod test {
    use super::{compact, lut};

    #[test]
    fn compact_matches_lut() {
        for x in 0..=255u8 {
            assert_eq!(compact(x), lut(x), "mismatch for x = {x:#04x}");
        }
    }

    #[test]
    fn is_an_involution() {
        for x in 0..=255u8 {
            assert_eq!(lut(lut(x)), x, "sbox is not an involution at x = {x:#04x}");
        }
    }
}
