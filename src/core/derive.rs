//! Turns secure random bytes into a single fixed-width decimal PIN.
//!
//! Each candidate is `SHA3-512(64 random bytes)` read as a big-endian
//! integer, reduced modulo `10^length` and zero-padded. The digest space
//! (2^512) dwarfs every supported `10^length`, so modulo bias is negligible.
//! Swapping the digest changes the output distribution.

use crate::domain::model::Pin;
use crate::domain::ports::EntropySource;
use crate::utils::error::Result;
use crate::utils::validation::validate_length;
use sha3::{Digest, Sha3_512};

/// Random bytes drawn per candidate, independent of the PIN length.
pub const ENTROPY_BYTES: usize = 64;

/// Longest PIN whose value space `10^length` still fits in a `u64`.
pub const MAX_PIN_LENGTH: u32 = 18;

/// Number of distinct PINs of `length` digits, i.e. `10^length`.
pub fn max_unique_pins(length: u32) -> u64 {
    10u64.saturating_pow(length)
}

pub fn derive_pin<E: EntropySource>(source: &mut E, length: u32) -> Result<Pin> {
    validate_length(length)?;

    let mut buf = [0u8; ENTROPY_BYTES];
    source.fill(&mut buf)?;

    let digest = Sha3_512::digest(buf);
    Ok(pin_from_digest(&digest, length))
}

fn pin_from_digest(digest: &[u8], length: u32) -> Pin {
    let modulus = u128::from(max_unique_pins(length));
    // acc < 10^18, so acc * 256 + 255 stays well inside u128
    let value = digest
        .iter()
        .fold(0u128, |acc, &byte| (acc * 256 + u128::from(byte)) % modulus);

    Pin::from_digits(format!("{:0width$}", value, width = length as usize))
}
