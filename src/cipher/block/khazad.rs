//! Khazad is a 64-bit block cipher with a 128-bit key, designed for
//! constrained hardware such as smartcards.
//!
//! Khazad is built as an 8-round involutional substitution-permutation
//! network: every round applies the same [substitution box](sbox) and
//! [diffusion matrix](matrix), both of which are involutions, so decryption
//! reuses the encryption round structure rather than needing an inverse
//! cipher. This lets an implementation offer three interchangeable ways to
//! handle round keys, trading ROM and RAM for latency:
//!
//! - a precomputed encryption [`Schedule`](schedule::Schedule), built by
//!   [`schedule::key_schedule`] and consumed by [`crypt::encrypt`] /
//!   [`crypt::decrypt`];
//! - a precomputed decryption schedule, built by
//!   [`schedule::decrypt_key_schedule`] and consumed by [`crypt::encrypt`]
//!   (decryption becomes an encryption call under the transformed schedule);
//! - an [on-the-fly key schedule](otfks), which never materializes more than
//!   two round-key blocks at a time.
//!
//! This cipher, including its test vectors, was designed by Barreto and
//! Rijmen and submitted to the NESSIE project.

pub mod crypt;
mod field;
pub mod matrix;
pub mod otfks;
pub mod round;
pub mod sbox;
pub mod schedule;

pub use {
    crypt::{decrypt, encrypt, Khazad},
    otfks::OtfksState,
    schedule::{decrypt_key_schedule, key_schedule, Schedule},
};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;

/// Key size in bytes.
pub const KEY_SIZE: usize = 16;

/// Number of rounds.
pub const NUM_ROUNDS: usize = 8;
