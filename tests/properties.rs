use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tea_engine::vectors::TestVector;
use tea_engine::{cipher, Block, Key, Rounds};

fn distance(a: &Block, b: &Block) -> u32 {
    (a[0] ^ b[0]).count_ones() + (a[1] ^ b[1]).count_ones()
}

proptest! {
    #[test]
    fn test_deterministic(block in any::<[u32; 2]>(), key in any::<[u32; 4]>()) {
        prop_assert_eq!(cipher::encipher(&key, &block), cipher::encipher(&key, &block));
    }

    #[test]
    fn test_not_self_inverse(block in any::<[u32; 2]>(), key in any::<[u32; 4]>()) {
        let once = cipher::encipher(&key, &block);
        prop_assert_ne!(cipher::encipher(&key, &once), block);
    }

    #[test]
    fn test_block_bit_flip_diffuses(
        block in any::<[u32; 2]>(),
        key in any::<[u32; 4]>(),
        bit in 0usize..64,
    ) {
        let mut flipped = block;
        flipped[bit / 32] ^= 1 << (bit % 32);
        let d = distance(&cipher::encipher(&key, &block), &cipher::encipher(&key, &flipped));
        prop_assert!(d >= 8, "only {} output bits changed", d);
    }

    #[test]
    fn test_key_bit_flip_diffuses(
        block in any::<[u32; 2]>(),
        key in any::<[u32; 4]>(),
        bit in 0usize..128,
    ) {
        let mut flipped: Key = key;
        flipped[bit / 32] ^= 1 << (bit % 32);
        let d = distance(&cipher::encipher(&key, &block), &cipher::encipher(&flipped, &block));
        prop_assert!(d >= 8, "only {} output bits changed", d);
    }

    #[test]
    fn test_reduced_rounds_are_flagged(rounds in 1u32..64) {
        let parsed = Rounds::new(rounds).unwrap();
        prop_assert_eq!(parsed.get(), rounds);
        prop_assert_eq!(parsed.is_reduced(), rounds < Rounds::MINIMUM_RECOMMENDED);
    }
}

#[test]
fn test_average_avalanche() {
    let mut rng = StdRng::seed_from_u64(0);
    const SAMPLES: u32 = 4096;
    let mut total = 0;
    for _ in 0..SAMPLES {
        let v = TestVector::random(&mut rng);
        let bit = rng.gen_range(0..64);
        let mut flipped = v.block;
        flipped[bit / 32] ^= 1 << (bit % 32);
        total += distance(&cipher::encipher(&v.key, &v.block), &cipher::encipher(&v.key, &flipped));
    }
    let mean = f64::from(total) / f64::from(SAMPLES);
    assert!((30.0..34.0).contains(&mean), "mean avalanche {} is far from 32", mean);
}

#[test]
fn test_concurrent_calls_agree() {
    let v = TestVector::new([0xDEADBEEF, 0xFEEDFACE], [0x11223344, 0x55667788, 0x99AABBCC, 0xDDEEFF00]);
    let expected = cipher::encipher(&v.key, &v.block);
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(move || cipher::encipher(&v.key, &v.block)))
        .collect();
    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}
