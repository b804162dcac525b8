//! Word twiddling utilities, so far just for viewing a `Block` as a
//! single 64-bit value with `v0` in the high half.

use super::Block;

/// Packs a `Block` into a `u64`, `v0` first.
pub fn join(block: &Block) -> u64 {
    (u64::from(block[0]) << 32) | u64::from(block[1])
}

/// Number of bit positions where `a` and `b` differ.
pub fn bit_distance(a: &Block, b: &Block) -> u32 {
    (join(a) ^ join(b)).count_ones()
}

#[test]
fn it_works() {
    let block: Block = [0x1D19A4E6, 0x3A2E6E29];
    assert_eq!(join(&block), 0x1D19A4E6_3A2E6E29);
    assert_eq!(bit_distance(&block, &block), 0);
    assert_eq!(bit_distance(&[0, 0], &[u32::MAX, 1]), 33);
}
