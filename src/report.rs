//! Formats a vector and its ciphertext as hexadecimal for diagnostic
//! display.  Nothing here is part of the cipher itself.

use std::fmt;

use super::mem;
use super::vectors::TestVector;
use super::Block;

/// One enciphered vector, ready to print.
///
/// # Example:
/// ```
/// use tea_engine::report::Report;
/// use tea_engine::vectors::TestVector;
///
/// let vector = TestVector::new([0x11223344, 0x55667788], [1, 2, 3, 4]);
/// let report = Report::new("demo", vector, [0xA228B7FC, 0xCA5E0FD5]);
/// assert!(report.to_string().contains("ciphertext: v0: a228b7fc, v1: ca5e0fd5"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub label: String,
    pub vector: TestVector,
    pub result: Block,
}

impl Report {
    pub fn new(label: impl Into<String>, vector: TestVector, result: Block) -> Report {
        Report {
            label: label.into(),
            vector,
            result,
        }
    }

    /// The ciphertext as 64 binary digits, `v0` first.
    pub fn result_bits(&self) -> String {
        format!("{:064b}", mem::join(&self.result))
    }

    /// How many bits of the block the cipher flipped.
    pub fn changed_bits(&self) -> u32 {
        mem::bit_distance(&self.vector.block, &self.result)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let [p0, p1] = self.vector.block;
        let [k0, k1, k2, k3] = self.vector.key;
        let [c0, c1] = self.result;
        writeln!(f, "{}:", self.label)?;
        writeln!(f, "  plaintext:  v0: {:08x}, v1: {:08x}", p0, p1)?;
        writeln!(f, "  key:        {:08x} {:08x} {:08x} {:08x}", k0, k1, k2, k3)?;
        write!(f, "  ciphertext: v0: {:08x}, v1: {:08x}", c0, c1)
    }
}

#[test]
fn it_works() {
    let vector = TestVector::new([0x11223344, 0x55667788],
                                 [0x11111111, 0x22222222, 0x33333333, 0x44444444]);
    let report = Report::new("Test case 1", vector, [0xA228B7FC, 0xCA5E0FD5]);
    assert_eq!(report.to_string(),
               "Test case 1:\n\
                \x20 plaintext:  v0: 11223344, v1: 55667788\n\
                \x20 key:        11111111 22222222 33333333 44444444\n\
                \x20 ciphertext: v0: a228b7fc, v1: ca5e0fd5");
    assert_eq!(report.result_bits(),
               "1010001000101000101101111111110011001010010111100000111111010101");
}

#[test]
fn pads_small_words() {
    let report = Report::new("small", TestVector::new([1, 2], [0; 4]), [0, 0xF]);
    let text = report.to_string();
    assert!(text.contains("v0: 00000001, v1: 00000002"));
    assert!(text.contains("00000000 00000000 00000000 00000000"));
    assert!(text.contains("v0: 00000000, v1: 0000000f"));
    assert_eq!(report.changed_bits(), 4);
}
