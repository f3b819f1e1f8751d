use crate::domain::model::LengthRequest;
use crate::utils::error::Result;

/// Supplier of cryptographically secure random bytes.
pub trait EntropySource {
    /// Fill `buf` completely or fail with `EntropySourceUnavailable`.
    fn fill(&mut self, buf: &mut [u8]) -> Result<()>;
}

pub trait Storage {
    /// Replace the contents of `path` with `data`.
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn requests(&self) -> Vec<LengthRequest>;
    fn output_path(&self) -> &str;
}
