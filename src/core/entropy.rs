use crate::domain::ports::EntropySource;
use crate::utils::error::{PinError, Result};
use rand::{rngs::OsRng, TryRngCore};

/// Operating system CSPRNG (`getrandom` under the hood).
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&mut self, buf: &mut [u8]) -> Result<()> {
        OsRng
            .try_fill_bytes(buf)
            .map_err(|e| PinError::EntropySourceUnavailable {
                reason: e.to_string(),
            })
    }
}
