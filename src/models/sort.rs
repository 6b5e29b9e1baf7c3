use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, str::FromStr};

use crate::models::CountSize;

/// Display order for keyed [`CountSize`] tables.
///
/// Count and size orders fall back to ascending key order on ties so the
/// report is identical across runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "key")]
    Key,
    #[serde(rename = "count")]
    CountDesc,
    #[serde(rename = "count-asc")]
    CountAsc,
    #[serde(rename = "size")]
    SizeDesc,
    #[serde(rename = "size-asc")]
    SizeAsc,
}

impl SortOrder {
    #[must_use]
    pub fn compare<K: Ord + ?Sized>(self, a: (&K, &CountSize), b: (&K, &CountSize)) -> Ordering {
        let (key_a, cs_a) = a;
        let (key_b, cs_b) = b;
        let primary = match self {
            Self::Key => Ordering::Equal,
            Self::CountDesc => cs_b.count.cmp(&cs_a.count),
            Self::CountAsc => cs_a.count.cmp(&cs_b.count),
            Self::SizeDesc => cs_b.size.cmp(&cs_a.size),
            Self::SizeAsc => cs_a.size.cmp(&cs_b.size),
        };
        primary.then_with(|| key_a.cmp(key_b))
    }
}

impl FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "key" | "name" | "extension" => Ok(Self::Key),
            "count" | "count-desc" => Ok(Self::CountDesc),
            "count-asc" | "count<" => Ok(Self::CountAsc),
            "size" | "size-desc" => Ok(Self::SizeDesc),
            "size-asc" | "size<" => Ok(Self::SizeAsc),
            _ => Err(format!("Unknown sort order: {s}")),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Key => write!(f, "key"),
            Self::CountDesc => write!(f, "count"),
            Self::CountAsc => write!(f, "count-asc"),
            Self::SizeDesc => write!(f, "size"),
            Self::SizeAsc => write!(f, "size-asc"),
        }
    }
}
