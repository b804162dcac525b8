//! Implements the TEA block transform, whose reference source is
//! public domain.  This code is also public domain.
//!
//! Only the forward transform of a single 64-bit block is provided.
//! There is no mode of operation and no decryption here, so this is a
//! primitive to build on, not something to encrypt messages with.

/// A key is 128 bits.  We don't seem to need SIMD anywhere so it's
/// just an array.
pub type Key = [u32; 4];

/// TEA uses 64-bit blocks; for simplicity and to match the reference
/// source, we use an array here too.
pub type Block = [u32; 2];

pub mod cipher;
pub mod error;
pub mod report;
pub mod rounds;
pub mod vectors;
mod mem;

pub use error::Error;
pub use rounds::Rounds;
