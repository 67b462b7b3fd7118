//! Exercises [`Khazad`] through the generic [`BlockCipher`] trait, the same
//! way `test/cipher.rs` exercises AES-family ciphers in the original crate
//! this one grew from.

use {
    crate::{BlockCipher, BlockDecrypt, BlockEncrypt, Khazad},
    rand::Rng,
};

#[test]
fn round_trip() {
    test::<Khazad>();
}

fn test<Cip: BlockCipher<Block = [u8; 8], Key = [u8; 16]> + Default>() {
    let cip = Cip::default();
    for _ in 0..32 {
        let key: [u8; 16] = rand::thread_rng().gen();
        let plaintext: [u8; 8] = rand::thread_rng().gen();
        let ciphertext = cip.encrypt(plaintext, key);
        let decrypted = cip.decrypt(ciphertext, key);
        assert_eq!(
            decrypted, plaintext,
            "decrypted plaintext did not match\nkey: {key:?}\nciphertext: {ciphertext:?}"
        );
    }
}

#[test]
fn known_answer_via_trait() {
    let cip = Khazad::default();
    let mut key = [0u8; 16];
    key[0] = 0x80;
    let plaintext = [0u8; 8];
    let ciphertext = [0x49, 0xA4, 0xCE, 0x32, 0xAC, 0x19, 0x0E, 0x3F];

    assert_eq!(cip.encrypt(plaintext, key), ciphertext);
    assert_eq!(cip.decrypt(ciphertext, key), plaintext);
}
