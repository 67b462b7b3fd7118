//! Khazad is a block cipher designed for constrained hardware: smartcards and
//! small microcontrollers with little RAM and no hardware multiplier.
//!
//! Khazad works on 64-bit blocks with a 128-bit key, applying 8 rounds of
//! substitution and diffusion to the block, XORing in a different round key
//! each round. Unusually, both the substitution and diffusion steps are
//! involutions — applying either twice is the identity — so the same round
//! structure serves for both encryption and decryption. This achieves
//! [confusion](crate::doc::encryption#confusion) via the
//! [substitution box](crate::cipher::block::khazad::sbox) and
//! [diffusion](crate::doc::encryption#diffusion) via the
//! [matrix multiplication](crate::cipher::block::khazad::matrix).
//!
//! The involutional design is what makes three different ways of supplying
//! round keys possible without three different implementations of the round
//! function itself:
//!
//! - a [precomputed schedule](crate::cipher::block::khazad::schedule) built
//!   once and reused for every block;
//! - the same schedule, reversed and partially re-diffused, for decryption
//!   via the encryption round function;
//! - an [on-the-fly schedule](crate::cipher::block::khazad::otfks) that
//!   derives each round key from the previous two as it goes, so only 16
//!   bytes of key material are ever resident at once instead of the full
//!   72-byte schedule.
//!
//! Khazad was designed by Paulo Barreto and Vincent Rijmen (who also designed
//! [AES](https://doi.org/10.6028/NIST.FIPS.197)) as a submission to the NESSIE
//! project.
