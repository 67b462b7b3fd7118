//! Cross-checks all three $GF(2^{64})$ multiplication implementations against
//! each other and against a set of literal reference vectors.

use crate::gcm::{bitwise, Table4, Table8};

const VECTOR_A: [u8; 8] = [0x95, 0x2B, 0x2A, 0x56, 0xA5, 0x60, 0x4A, 0xC0];
const VECTOR_B: [u8; 8] = [0xDF, 0xA6, 0xBF, 0x4D, 0xED, 0x81, 0xDB, 0x03];
const VECTOR_RESULT: [u8; 8] = [0x64, 0xEC, 0x76, 0x9A, 0x3F, 0x2E, 0xA4, 0x8A];

#[test]
fn all_implementations_agree_on_reference_vector() {
    let bit = bitwise::mul(VECTOR_A, VECTOR_B);
    let tab8 = Table8::build(VECTOR_B).mul(VECTOR_A);
    let tab4 = Table4::build(VECTOR_B).mul(VECTOR_A);

    assert_eq!(bit, VECTOR_RESULT);
    assert_eq!(tab8, VECTOR_RESULT);
    assert_eq!(tab4, VECTOR_RESULT);
}

#[test]
fn all_implementations_agree_on_random_inputs() {
    use rand::Rng;

    for _ in 0..32 {
        let key: [u8; 8] = rand::thread_rng().gen();
        let accum: [u8; 8] = rand::thread_rng().gen();

        let bit = bitwise::mul(accum, key);
        let tab8 = Table8::build(key).mul(accum);
        let tab4 = Table4::build(key).mul(accum);

        assert_eq!(tab8, bit, "table8 disagreed with bitwise multiply");
        assert_eq!(tab4, bit, "table4 disagreed with bitwise multiply");
    }
}

#[test]
fn identity_and_scaling_vectors() {
    let identity = [0x80, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(bitwise::mul(identity, identity), identity);

    let half = [0x40, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(bitwise::mul(identity, half), half);

    let shifted = [0x00, 0x80, 0, 0, 0, 0, 0, 0];
    assert_eq!(bitwise::mul(identity, shifted), shifted);
}

#[test]
fn zero_absorbs_under_every_implementation() {
    let key = VECTOR_B;
    assert_eq!(bitwise::mul([0; 8], key), [0; 8]);
    assert_eq!(Table8::build(key).mul([0; 8]), [0; 8]);
    assert_eq!(Table4::build(key).mul([0; 8]), [0; 8]);
}
