use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// How byte totals are rendered in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeFormat {
    /// SI magnitudes (`1.2 kB`, `34 MB`).
    #[default]
    Decimal,
    /// 1024-based magnitudes with two decimals (`1.50 KB`).
    Binary,
    /// Plain byte count (`1536 B`).
    Raw,
}

impl SizeFormat {
    #[must_use]
    pub fn format(self, bytes: u64) -> String {
        match self {
            Self::Decimal => format_decimal(bytes),
            Self::Binary => format_bytes(bytes),
            Self::Raw => format!("{bytes} B"),
        }
    }
}

impl FromStr for SizeFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "decimal" | "si" => Ok(Self::Decimal),
            "binary" | "iec" => Ok(Self::Binary),
            "raw" | "bytes" => Ok(Self::Raw),
            _ => Err(format!("Unknown size format: {s}")),
        }
    }
}

impl fmt::Display for SizeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Decimal => write!(f, "decimal"),
            Self::Binary => write!(f, "binary"),
            Self::Raw => write!(f, "raw"),
        }
    }
}

#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", size as u64, UNITS[unit_index])
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Formats `bytes` with SI units, keeping one decimal only for values below ten.
///
/// The magnitude is picked with integer arithmetic so exact powers of 1000
/// always land on the larger unit (`1000000` is `1.0 MB`, never `1000 kB`).
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn format_decimal(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "kB", "MB", "GB", "TB", "PB", "EB"];

    if bytes < 10 {
        return format!("{bytes} B");
    }

    let mut divisor: u64 = 1;
    let mut unit_index = 0;
    while unit_index < UNITS.len() - 1 && bytes / divisor >= 1000 {
        divisor *= 1000;
        unit_index += 1;
    }

    let value = ((bytes as f64 / divisor as f64) * 10.0 + 0.5).floor() / 10.0;
    if value < 10.0 {
        format!("{value:.1} {}", UNITS[unit_index])
    } else {
        format!("{value:.0} {}", UNITS[unit_index])
    }
}
