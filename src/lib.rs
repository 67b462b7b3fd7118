//! Compact cryptographic primitives for constrained targets: smartcards and
//! small microcontrollers.
//!
//! Two primitives are implemented, each with multiple interchangeable forms
//! trading ROM/RAM footprint against speed:
//!
//! - [`khazad`], the Khazad block cipher;
//! - [`gcm`], the $GF(2^{64})$ field multiplication behind GCM's GHASH
//!   authentication step.
//!
//! Both are total, branchless-where-it-matters functions over fixed-size byte
//! arrays: there is no allocation, no I/O, and no recoverable error condition
//! anywhere in this crate.

#[cfg(test)]
mod test;

#[cfg(doc)]
pub mod doc;

mod cipher;
pub mod gcm;

pub use cipher::{
    block::khazad,
    BlockCipher,
    BlockDecrypt,
    BlockEncrypt,
    Khazad,
};
