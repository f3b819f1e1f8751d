use crate::core::derive::derive_pin;
use crate::domain::model::PinSet;
use crate::domain::ports::EntropySource;
use crate::utils::error::Result;
use crate::utils::validation::validate_count;
use std::collections::HashSet;

/// Generate exactly `count` distinct PINs of `length` digits.
///
/// Duplicates are discarded and drawn again, with no retry cap. A count
/// above `10^length` is rejected before any entropy is consumed.
pub fn generate_unique_pins<E: EntropySource>(
    source: &mut E,
    length: u32,
    count: i64,
) -> Result<PinSet> {
    let target = validate_count(length, count)?;

    let mut pins = HashSet::with_capacity(target);
    let mut discarded: u64 = 0;

    while pins.len() < target {
        if !pins.insert(derive_pin(source, length)?) {
            discarded += 1;
        }
    }

    tracing::debug!(
        "Generated {} unique {}-digit PINs ({} duplicates discarded)",
        target,
        length,
        discarded
    );

    Ok(PinSet::new(length, pins.into_iter().collect()))
}
