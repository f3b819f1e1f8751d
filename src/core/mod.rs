pub mod derive;
pub mod document;
pub mod engine;
pub mod entropy;
pub mod generator;

pub use crate::domain::model::{LengthRequest, OutputDocument, Pin, PinSet};
pub use crate::domain::ports::{ConfigProvider, EntropySource, Storage};
pub use crate::utils::error::Result;
