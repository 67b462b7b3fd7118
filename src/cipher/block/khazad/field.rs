//! Arithmetic in the Galois field used by the [Khazad cipher](super).

use docext::docext;

/// Multiply `b` by `0x02` in the Galois field $GF(2^8)$ used by
/// [Khazad](super), reduced modulo $m(x) = x^8 + x^4 + x^3 + x^2 + 1 \equiv
/// \mathrm{1D_{16}}$.
///
/// The shift-and-conditional-XOR by the reduction polynomial is the same
/// construction used by any $GF(2^8)$ doubling operation; only the constant
/// changes between fields. Here it is written without a data-dependent
/// branch, by turning the sign bit of `b` into an all-ones or all-zeros mask:
///
/// $$
/// \mathrm{mul2}(b) = (b \ll 1) \oplus \big(-(b \gg 7) \mathbin{\&}
/// \mathrm{1D_{16}}\big)
/// $$
///
/// Evaluating `-(b >> 7)` in two's complement arithmetic over a byte produces
/// `0xFF` when the high bit of `b` was set and `0x00` otherwise, so the AND
/// either passes the reduction constant through unchanged or zeroes it out.
/// This avoids branching and avoids indexing a table with a secret value,
/// both of which are timing side channels on constrained hardware.
#[docext]
pub fn mul2(b: u8) -> u8 {
    let mask = 0u8.wrapping_sub(b >> 7);
    (b << 1) ^ (mask & 0x1D)
}

#[cfg(test)]
mod test {
    use super::mul2;

    #[test]
    fn matches_reference_definition() {
        for b in 0..=255u8 {
            let expected = if b & 0x80 != 0 {
                (b << 1) ^ 0x1D
            } else {
                b << 1
            };
            assert_eq!(mul2(b), expected, "mismatch for b = {b:#04x}");
        }
    }
}
