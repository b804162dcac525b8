//! Implements the basic TEA cipher round function as described in the
//! paper (http://en.wikipedia.org/wiki/Tiny_Encryption_Algorithm).
//! These functions only deal with a single 64-bit block of data at a
//! time.

use super::rounds::Rounds;
use super::{Block, Key};

/// Key schedule constant, derived from the golden ratio.
pub const DELTA: u32 = 0x9E37_79B9;

/// Encrypts 64 bits of `input` using the `key` with the reference 32
/// rounds.
///
/// # Example:
/// ```
/// use tea_engine::cipher;
///
/// let key = [0x11111111, 0x22222222, 0x33333333, 0x44444444];
/// let plaintext = [0x11223344, 0x55667788];
/// assert_eq!(cipher::encipher(&key, &plaintext), [0xA228B7FC, 0xCA5E0FD5]);
/// ```
pub fn encipher(key: &Key, input: &Block) -> Block {
    mix(key, input, Rounds::REFERENCE.get())
}

/// Encrypts 64 bits of `input` using the `key` with a configurable
/// number of rounds.
///
/// # Example:
/// ```
/// use tea_engine::{cipher, Rounds};
///
/// let key = [5, 6, 7, 8];
/// let plaintext = [128, 256];
/// assert_eq!(cipher::encipher_with_rounds(&key, &plaintext, Rounds::REFERENCE),
///            cipher::encipher(&key, &plaintext));
/// ```
pub fn encipher_with_rounds(key: &Key, input: &Block, rounds: Rounds) -> Block {
    mix(key, input, rounds.get())
}

// Total over `rounds`: zero rounds hands back the input.
fn mix(key: &Key, input: &Block, rounds: u32) -> Block {
    let [mut v0, mut v1] = *input;
    let [k0, k1, k2, k3] = *key;
    let mut sum: u32 = 0;
    for _ in 0..rounds {
        sum = sum.wrapping_add(DELTA);
        v0 = v0.wrapping_add(feistel(v1, sum, k0, k1));
        // Reads the v0 written just above.
        v1 = v1.wrapping_add(feistel(v0, sum, k2, k3));
    }
    [v0, v1]
}

#[inline(always)]
fn feistel(v: u32, sum: u32, ka: u32, kb: u32) -> u32 {
    (v << 4).wrapping_add(ka) ^ v.wrapping_add(sum) ^ (v >> 5).wrapping_add(kb)
}

#[test]
fn it_works() {
    let key: Key = [10, 20, 30, 42];
    let plaintext: Block = [300, 400];
    let ciphertext = encipher(&key, &plaintext);
    assert!(plaintext != ciphertext);
    assert_eq!(ciphertext, encipher(&key, &plaintext));
}

#[test]
fn zero_rounds_is_identity() {
    let key: Key = [0xDEADBEEF, 1, 2, 3];
    let plaintext: Block = [0x01234567, 0x89ABCDEF];
    assert_eq!(mix(&key, &plaintext, 0), plaintext);
}

#[test]
fn one_round_by_hand() {
    // sum = DELTA, then v0 and v1 each take one Feistel step.
    assert_eq!(mix(&[0; 4], &[0, 0], 1), [0x9E3779B9, 0xDBE8D32F]);
}

#[test]
fn updates_are_sequential() {
    // Updating v1 from the old v0 would be a different function.
    let key: Key = [1, 2, 3, 4];
    let [v0, v1] = [0x11223344u32, 0x55667788u32];
    let sum = DELTA;
    let new_v0 = v0.wrapping_add(feistel(v1, sum, key[0], key[1]));
    let stale_v1 = v1.wrapping_add(feistel(v0, sum, key[2], key[3]));
    let [got_v0, got_v1] = mix(&key, &[v0, v1], 1);
    assert_eq!(got_v0, new_v0);
    assert!(got_v1 != stale_v1);
}

#[test]
fn key_is_untouched() {
    let key: Key = [0x11223344, 0x55667788, 0x99AABBCC, 0xDDEEFF00];
    let copy = key;
    encipher(&key, &[0xDEADBEEF, 0xFEEDFACE]);
    assert_eq!(key, copy);
}
