use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed-width decimal PIN. Leading zeros are significant.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pin(String);

impl Pin {
    pub(crate) fn from_digits(digits: String) -> Self {
        debug_assert!(digits.bytes().all(|b| b.is_ascii_digit()));
        Self(digits)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Pin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct PINs of one length, in ascending order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PinSet {
    length: u32,
    pins: Vec<Pin>,
}

impl PinSet {
    pub(crate) fn new(length: u32, mut pins: Vec<Pin>) -> Self {
        pins.sort_unstable();
        Self { length, pins }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn len(&self) -> usize {
        self.pins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pins.is_empty()
    }

    pub fn pins(&self) -> &[Pin] {
        &self.pins
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pin> {
        self.pins.iter()
    }
}

/// How many PINs of a given length a run should produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthRequest {
    pub length: u32,
    pub count: i64,
}

impl LengthRequest {
    pub fn new(length: u32, count: i64) -> Self {
        Self { length, count }
    }
}

#[derive(Debug, Clone)]
pub struct OutputDocument {
    pub generated_at: NaiveDateTime,
    pub groups: Vec<PinSet>,
}

impl OutputDocument {
    pub fn total_pins(&self) -> usize {
        self.groups.iter().map(PinSet::len).sum()
    }
}
