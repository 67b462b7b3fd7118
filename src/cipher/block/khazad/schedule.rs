//! Precomputed Khazad key schedules.

use super::{matrix, round, NUM_ROUNDS};

/// A fully expanded Khazad key schedule: one 8-byte round key for each of the
/// [`NUM_ROUNDS`] rounds, plus the initial and final whitening keys.
pub type Schedule = [[u8; 8]; NUM_ROUNDS + 1];

/// Expand `key` into an encryption [`Schedule`].
///
/// The schedule is built by the recurrence $K_r = \mathrm{ks\\_round}(K_{r-1},
/// r) \oplus K_{r-2}$, seeded with $K_{-2}, K_{-1}$ taken directly from the two
/// halves of `key`. This is exactly the recurrence
/// [`crate::cipher::block::khazad::otfks`] evaluates incrementally from a
/// 2-block rolling window instead of materializing all nine blocks at once.
pub fn key_schedule(key: [u8; 16]) -> Schedule {
    let mut prev2: [u8; 8] = key[0..8].try_into().unwrap();
    let mut prev1: [u8; 8] = key[8..16].try_into().unwrap();
    let mut schedule = [[0u8; 8]; NUM_ROUNDS + 1];
    for (r, slot) in schedule.iter_mut().enumerate() {
        let mut block = round::ks_round(prev1, r);
        round::xor_into(&mut block, &prev2);
        *slot = block;
        prev2 = prev1;
        prev1 = block;
    }
    schedule
}

/// Expand `key` into a [`Schedule`] usable for decryption via
/// [`crate::cipher::block::khazad::crypt::encrypt`].
///
/// Built from the encryption schedule by reversing the block order (so that
/// the schedule is consumed in the same forward direction a generic encrypt
/// pass walks it) and applying [`matrix::imul`] to the seven interior blocks,
/// undoing the diffusion step the encryption rounds would otherwise apply an
/// extra time relative to decryption.
pub fn decrypt_key_schedule(key: [u8; 16]) -> Schedule {
    let mut schedule = key_schedule(key);
    schedule.reverse();
    for block in &mut schedule[1..NUM_ROUNDS] {
        matrix::imul(block);
    }
    schedule
}

#[cfg(test)]
mod test {
    use {
        super::{decrypt_key_schedule, key_schedule},
        crate::cipher::block::khazad::crypt::{decrypt, encrypt},
        rand::Rng,
    };

    #[test]
    fn decrypt_schedule_inverts_via_encrypt() {
        for _ in 0..16 {
            let key: [u8; 16] = rand::thread_rng().gen();
            let plaintext: [u8; 8] = rand::thread_rng().gen();
            let sched = key_schedule(key);
            let dsched = decrypt_key_schedule(key);
            let ciphertext = encrypt(plaintext, &sched);
            assert_eq!(
                encrypt(ciphertext, &dsched),
                plaintext,
                "encrypting under the decryption schedule did not invert encryption"
            );
            assert_eq!(decrypt(ciphertext, &sched), plaintext);
        }
    }
}
