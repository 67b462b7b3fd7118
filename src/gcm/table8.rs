//! Precomputed, byte-at-a-time $GF(2^{64})$ multiplication.

use super::{bitwise, field::xor_into, reduce::block_mul256};

/// A table of `key`-multiples indexed by byte value, built once per key and
/// reused across every block multiplied by that key.
///
/// `table[v - 1]` holds `v * key` for `v` in `1..=255`; the implicit `v == 0`
/// entry is never stored, since it contributes nothing to the XOR sum in
/// [`mul`]. At 255 blocks (2040 bytes) this is the largest and fastest of the
/// three representations; [`Table4`](super::table4::Table4) is the same idea
/// at half the table width and less than an eighth of the memory.
#[derive(Clone)]
pub struct Table8 {
    entries: [[u8; 8]; 255],
}

impl Table8 {
    /// Build the table of every nonzero byte multiple of `key`.
    pub fn build(key: [u8; 8]) -> Self {
        let mut entries = [[0u8; 8]; 255];
        for bit in 0..8 {
            let i_bit = 1u8 << bit;
            let mut seed = [0u8; 8];
            seed[0] = i_bit;
            let contribution = bitwise::mul(seed, key);
            for j in 1u16..=255 {
                if (j as u8) & i_bit != 0 {
                    xor_into(&mut entries[(j - 1) as usize], &contribution);
                }
            }
        }
        Self { entries }
    }

    /// Multiply `accum` by this table's key in $GF(2^{64})$.
    ///
    /// Processes `accum` from its most significant byte down, folding in the
    /// precomputed multiple for each nonzero byte and doubling the running
    /// result by $2^8$ (via [`block_mul256`]) between bytes.
    pub fn mul(&self, accum: [u8; 8]) -> [u8; 8] {
        let mut result = [0u8; 8];
        let mut first = true;
        for &v in accum.iter().rev() {
            if !first {
                result = block_mul256(result);
            }
            first = false;
            if v != 0 {
                xor_into(&mut result, &self.entries[(v - 1) as usize]);
            }
        }
        result
    }
}

#[cfg(test)]
mod test {
    use {super::Table8, crate::gcm::bitwise, rand::Rng};

    #[test]
    fn matches_bitwise_multiply() {
        for _ in 0..16 {
            let key: [u8; 8] = rand::thread_rng().gen();
            let accum: [u8; 8] = rand::thread_rng().gen();
            let table = Table8::build(key);
            assert_eq!(table.mul(accum), bitwise::mul(accum, key));
        }
    }

    #[test]
    fn known_answer() {
        let a = [0x95, 0x2B, 0x2A, 0x56, 0xA5, 0x60, 0x4A, 0xC0];
        let b = [0xDF, 0xA6, 0xBF, 0x4D, 0xED, 0x81, 0xDB, 0x03];
        let table = Table8::build(b);
        assert_eq!(table.mul(a), bitwise::mul(a, b));
    }
}
