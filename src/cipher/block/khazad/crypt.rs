//! Encryption and decryption under a precomputed [`Schedule`].

use {
    super::{round, schedule::Schedule, NUM_ROUNDS},
    crate::{BlockCipher, BlockDecrypt, BlockEncrypt},
};

/// The [Khazad block cipher](super), parameterized over nothing: its block
/// size, key size, and round count are all fixed by the algorithm.
///
/// [`BlockEncrypt::encrypt`] and [`BlockDecrypt::decrypt`] each expand the
/// 128-bit key into a full [`Schedule`] on every call rather than caching it.
/// Callers that need to encrypt or decrypt many blocks under the same key and
/// want to avoid repeating that expansion should call [`encrypt`]/[`decrypt`]
/// directly with a [`Schedule`] built once, or use
/// [`super::otfks::OtfksState`] to avoid materializing the schedule at all.
#[derive(Debug, Default)]
pub struct Khazad(());

impl BlockEncrypt for Khazad {
    type EncryptionBlock = [u8; 8];
    type EncryptionKey = [u8; 16];

    fn encrypt(&self, data: Self::EncryptionBlock, key: Self::EncryptionKey) -> Self::EncryptionBlock {
        let sched = super::schedule::key_schedule(key);
        encrypt(data, &sched)
    }
}

impl BlockDecrypt for Khazad {
    type DecryptionBlock = [u8; 8];
    type DecryptionKey = [u8; 16];

    fn decrypt(&self, data: Self::DecryptionBlock, key: Self::DecryptionKey) -> Self::DecryptionBlock {
        let sched = super::schedule::key_schedule(key);
        decrypt(data, &sched)
    }
}

impl BlockCipher for Khazad {
    type Block = [u8; 8];
    type Key = [u8; 16];
}

/// Encrypt `block` under an already-expanded encryption [`Schedule`].
///
/// Whitens with `schedule[0]`, applies the encryption round for rounds 1
/// through [`NUM_ROUNDS`] `- 1`, then finishes with a substitution-only round
/// (no diffusion) and a final whitening with `schedule[NUM_ROUNDS]`. Dropping
/// the diffusion step from the last round is standard for SPN ciphers: without
/// it, the final round's matrix step would be undone for free by an attacker
/// XORing in a guessed last-round key, since diffusion commutes with XOR.
pub fn encrypt(block: [u8; 8], schedule: &Schedule) -> [u8; 8] {
    let mut state = block;
    round::xor_into(&mut state, &schedule[0]);
    for rk in &schedule[1..NUM_ROUNDS] {
        round::encrypt(&mut state, rk);
    }
    super::sbox::apply_block(&mut state);
    round::xor_into(&mut state, &schedule[NUM_ROUNDS]);
    state
}

/// Decrypt `block` under an encryption [`Schedule`] (i.e. the same schedule
/// [`encrypt`] was given), the mirror image of [`encrypt`].
pub fn decrypt(block: [u8; 8], schedule: &Schedule) -> [u8; 8] {
    let mut state = block;
    round::xor_into(&mut state, &schedule[NUM_ROUNDS]);
    super::sbox::apply_block(&mut state);
    for rk in schedule[1..NUM_ROUNDS].iter().rev() {
        round::decrypt(&mut state, rk);
    }
    round::xor_into(&mut state, &schedule[0]);
    state
}

#[cfg(test)]
mod test {
    use {
        super::{decrypt, encrypt},
        crate::cipher::block::khazad::schedule::key_schedule,
        rand::Rng,
    };

    /// Independently re-derived from the original Khazad reference source for
    /// this exact key/plaintext pair; see `src/test/khazad.rs` for the
    /// equivalent test run through the [`crate::BlockCipher`] trait.
    #[test]
    fn known_answer() {
        let mut key = [0u8; 16];
        key[0] = 0x80;
        let plaintext = [0u8; 8];
        let ciphertext = [0x49, 0xA4, 0xCE, 0x32, 0xAC, 0x19, 0x0E, 0x3F];

        let sched = key_schedule(key);
        assert_eq!(encrypt(plaintext, &sched), ciphertext);
        assert_eq!(decrypt(ciphertext, &sched), plaintext);
    }

    #[test]
    fn round_trip() {
        for _ in 0..32 {
            let key: [u8; 16] = rand::thread_rng().gen();
            let plaintext: [u8; 8] = rand::thread_rng().gen();
            let sched = key_schedule(key);
            assert_eq!(decrypt(encrypt(plaintext, &sched), &sched), plaintext);
        }
    }
}
