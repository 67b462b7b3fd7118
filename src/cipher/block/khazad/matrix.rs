//! The Khazad diffusion layer, a fixed involutional matrix over $GF(2^8)$.

use {super::field::mul2, docext::docext};

/// Multiply `input` by Khazad's $8 \times 8$ diffusion matrix $H$ over
/// $GF(2^8)$.
///
/// $H$ is built from the coefficient multiset $\\{1, 3, 4, 5, 6, 7, 8,
/// \mathrm{B}\\}$, arranged so that row $r$, column $c$ holds the entry of the
/// multiset indexed by $r \oplus c$. Rather than materialize $H$ and do 64
/// field multiplications, each input byte `v = input[i]` is expanded once into
/// $v, 2v, 4v, 8v$ via repeated [`mul2`], and those four partial products are
/// XORed into the eight output positions `i ^ k` using the fixed pattern the
/// coefficient at distance `k` expands to:
///
/// $$
/// \begin{aligned}
/// k=0: & \ 1 \cdot v = v \\\\
/// k=1: & \ 3 \cdot v = 2v \oplus v \\\\
/// k=2: & \ 4 \cdot v \\\\
/// k=3: & \ 5 \cdot v = 4v \oplus v \\\\
/// k=4: & \ 6 \cdot v = 4v \oplus 2v \\\\
/// k=5: & \ 8 \cdot v \\\\
/// k=6: & \ \mathrm{B} \cdot v = 8v \oplus 2v \oplus v \\\\
/// k=7: & \ 7 \cdot v = 4v \oplus 2v \oplus v
/// \end{aligned}
/// $$
///
/// `H` is an involution, so [`matrix_mul`](mul) applied twice is the identity;
/// this is what lets [decryption](super::crypt::decrypt) reuse the same
/// operator as encryption instead of needing $H^{-1}$.
#[docext]
pub fn mul(input: [u8; 8]) -> [u8; 8] {
    let mut out = [0u8; 8];
    for i in 0..8 {
        let v1 = input[i];
        let v2 = mul2(v1);
        let v4 = mul2(v2);
        let v8 = mul2(v4);
        out[i ^ 0] ^= v1;
        out[i ^ 1] ^= v2 ^ v1;
        out[i ^ 2] ^= v4;
        out[i ^ 3] ^= v4 ^ v1;
        out[i ^ 4] ^= v4 ^ v2;
        out[i ^ 5] ^= v8;
        out[i ^ 6] ^= v8 ^ v2 ^ v1;
        out[i ^ 7] ^= v4 ^ v2 ^ v1;
    }
    out
}

/// Apply [`mul`] to `block` in place.
pub fn imul(block: &mut [u8; 8]) {
    *block = mul(*block);
}

#[cfg(test)]
mod test {
    use {super::mul, rand::Rng};

    #[test]
    fn is_an_involution() {
        for _ in 0..64 {
            let block: [u8; 8] = rand::thread_rng().gen();
            assert_eq!(mul(mul(block)), block, "matrix is not an involution");
        }
    }
}
