//! The three round transformations Khazad is built from.
//!
//! Because the [S-box](super::sbox) and [diffusion matrix](super::matrix) are
//! both involutions, the decryption round is the encryption round with its
//! steps reversed, rather than a distinct transformation.

use super::{matrix, sbox};

/// One encryption round: substitute, diffuse, then XOR in the round key.
pub fn encrypt(block: &mut [u8; 8], round_key: &[u8; 8]) {
    sbox::apply_block(block);
    *block = matrix::mul(*block);
    xor_into(block, round_key);
}

/// One round of the key schedule recurrence: substitute, diffuse, then XOR in
/// the round constant for round `r`.
pub fn ks_round(mut block: [u8; 8], r: usize) -> [u8; 8] {
    sbox::apply_block(&mut block);
    block = matrix::mul(block);
    sbox::add_round_const(&mut block, r);
    block
}

/// One decryption round, the mirror image of [`encrypt`]: XOR in the round
/// key, diffuse, then substitute.
pub fn decrypt(block: &mut [u8; 8], round_key: &[u8; 8]) {
    xor_into(block, round_key);
    *block = matrix::mul(*block);
    sbox::apply_block(block);
}

pub(super) fn xor_into(block: &mut [u8; 8], other: &[u8; 8]) {
    for (b, o) in block.iter_mut().zip(other) {
        *b ^= o;
    }
}
