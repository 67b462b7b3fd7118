pub mod block;

pub use block::{BlockCipher, BlockDecrypt, BlockEncrypt, Khazad};
