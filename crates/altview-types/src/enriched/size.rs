use serde::{Deserialize, Serialize};
use std::fmt;

/// Display units for byte counts, smallest first
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SizeUnit {
    B,
    KB,
    MB,
    GB,
}

impl SizeUnit {
    pub fn label(self) -> &'static str {
        match self {
            SizeUnit::B => "B",
            SizeUnit::KB => "KB",
            SizeUnit::MB => "MB",
            SizeUnit::GB => "GB",
        }
    }

    /// Next larger unit, or `None` at the top of the scale
    pub fn next(self) -> Option<SizeUnit> {
        match self {
            SizeUnit::B => Some(SizeUnit::KB),
            SizeUnit::KB => Some(SizeUnit::MB),
            SizeUnit::MB => Some(SizeUnit::GB),
            SizeUnit::GB => None,
        }
    }
}

impl fmt::Display for SizeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A byte count scaled to a display unit
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizeMagnitude {
    pub value: f64,
    pub unit: SizeUnit,
}

impl fmt::Display for SizeMagnitude {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.unit {
            // Raw byte counts are whole numbers and print without a fraction
            SizeUnit::B => write!(f, "{} {}", self.value as u64, self.unit),
            _ => write!(f, "{:.1} {}", self.value, self.unit),
        }
    }
}
