//! A 64-bit-block variant of the field multiplication behind GCM's GHASH
//! authentication step.
//!
//! GHASH accumulates a running value in $GF(2^{64})$ by repeatedly
//! multiplying it with a fixed hash subkey. That multiplication is the only
//! piece modeled here; assembling it into full authenticated encryption,
//! handling arbitrary-length associated data, and the rest of GCM are outside
//! this crate's scope.
//!
//! Three interchangeable implementations of the multiply are provided, the
//! same RAM/speed trade-off [Khazad's key schedule](crate::cipher::block::khazad)
//! offers for round keys:
//!
//! - [`bitwise::mul`], which needs no precomputed state;
//! - [`Table4`], a pair of 15-entry nibble tables;
//! - [`Table8`], a single 255-entry byte table.
//!
//! All three agree bit-for-bit for every key and every accumulator value; see
//! the equivalence tests alongside each implementation.

pub mod bitwise;
mod field;
mod reduce;
pub mod table4;
pub mod table8;

pub use {table4::Table4, table8::Table8};

/// Block size in bytes.
pub const BLOCK_SIZE: usize = 8;
