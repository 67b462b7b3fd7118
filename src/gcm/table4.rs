//! Precomputed, nibble-at-a-time $GF(2^{64})$ multiplication.

use super::{bitwise, field::xor_into, reduce::block_mul256};

/// Like [`Table8`](super::table8::Table8), but split into two 15-entry tables
/// keyed by nibble instead of one 255-entry table keyed by byte: `hi[n - 1]`
/// holds `(n * 16) * key`, `lo[n - 1]` holds `n * key`, for `n` in `1..=15`.
/// 240 bytes total against 2040 for the 8-bit table, at the cost of twice as
/// many table lookups per block.
#[derive(Clone)]
pub struct Table4 {
    hi: [[u8; 8]; 15],
    lo: [[u8; 8]; 15],
}

impl Table4 {
    /// Build the nibble-multiple tables of `key`.
    pub fn build(key: [u8; 8]) -> Self {
        let mut hi = [[0u8; 8]; 15];
        let mut lo = [[0u8; 8]; 15];
        for bit in 0..8 {
            let i_bit = 1u8 << bit;
            let mut seed = [0u8; 8];
            seed[0] = i_bit;
            let contribution = bitwise::mul(seed, key);
            if i_bit >= 0x10 {
                let shifted = i_bit >> 4;
                for j in 1u8..=15 {
                    if j & shifted != 0 {
                        xor_into(&mut hi[(j - 1) as usize], &contribution);
                    }
                }
            } else {
                for j in 1u8..=15 {
                    if j & i_bit != 0 {
                        xor_into(&mut lo[(j - 1) as usize], &contribution);
                    }
                }
            }
        }
        Self { hi, lo }
    }

    /// Multiply `accum` by this table's key in $GF(2^{64})$.
    pub fn mul(&self, accum: [u8; 8]) -> [u8; 8] {
        let mut result = [0u8; 8];
        let mut first = true;
        for &v in accum.iter().rev() {
            if !first {
                result = block_mul256(result);
            }
            first = false;
            let hi_nibble = v >> 4;
            let lo_nibble = v & 0xF;
            if hi_nibble != 0 {
                xor_into(&mut result, &self.hi[(hi_nibble - 1) as usize]);
            }
            if lo_nibble != 0 {
                xor_into(&mut result, &self.lo[(lo_nibble - 1) as usize]);
            }
        }
        result
    }
}

#[cfg(test)]
mod test {
    use {super::Table4, crate::gcm::bitwise, rand::Rng};

    #[test]
    fn matches_bitwise_multiply() {
        for _ in 0..16 {
            let key: [u8; 8] = rand::thread_rng().gen();
            let accum: [u8; 8] = rand::thread_rng().gen();
            let table = Table4::build(key);
            assert_eq!(table.mul(accum), bitwise::mul(accum, key));
        }
    }

    #[test]
    fn matches_table8() {
        let a = [0x95, 0x2B, 0x2A, 0x56, 0xA5, 0x60, 0x4A, 0xC0];
        let b = [0xDF, 0xA6, 0xBF, 0x4D, 0xED, 0x81, 0xDB, 0x03];
        let t4 = Table4::build(b);
        let t8 = super::super::table8::Table8::build(b);
        assert_eq!(t4.mul(a), t8.mul(a));
    }
}
