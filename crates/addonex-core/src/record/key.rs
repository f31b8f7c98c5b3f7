use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Cross-file record identifier: local id plus the owning plugin file.
///
/// Rendered as `XXXXXX:File.esm`. Plugin names compare case-insensitively,
/// in equality and hashing alike.
#[derive(Debug, Clone)]
pub struct RecordKey {
    pub id: u32,
    pub file: String,
}

impl RecordKey {
    /// Largest local id a plugin can carry (the top byte is the load-order slot)
    pub const MAX_LOCAL_ID: u32 = 0x00FF_FFFF;

    pub fn new(id: u32, file: impl Into<String>) -> Self {
        Self {
            id,
            file: file.into(),
        }
    }

    /// Build a key from a numeric id and plugin name as stored in script data.
    ///
    /// Returns `None` when the id is negative or wider than a local id, or
    /// the plugin name is blank.
    pub fn from_parts(id: i64, file: &str) -> Option<Self> {
        let file = file.trim();
        if file.is_empty() {
            return None;
        }
        let id = u32::try_from(id).ok()?;
        if id > Self::MAX_LOCAL_ID {
            return None;
        }
        Some(Self::new(id, file))
    }

    /// Check whether this record is owned by the given plugin file
    pub fn is_from(&self, file: &str) -> bool {
        self.file.eq_ignore_ascii_case(file)
    }
}

impl PartialEq for RecordKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id && self.is_from(&other.file)
    }
}

impl Eq for RecordKey {}

impl Hash for RecordKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
        for b in self.file.bytes() {
            state.write_u8(b.to_ascii_lowercase());
        }
        state.write_u8(0xFF);
    }
}

impl fmt::Display for RecordKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:06X}:{}", self.id, self.file)
    }
}

impl FromStr for RecordKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || Error::InvalidRecordKey(s.to_string());

        let (id, file) = s.trim().split_once(':').ok_or_else(invalid)?;
        let id = id.trim_start_matches("0x").trim_start_matches("0X");
        if id.is_empty() || id.len() > 8 {
            return Err(invalid());
        }
        let id = i64::from_str_radix(id, 16).map_err(|_| invalid())?;

        Self::from_parts(id, file).ok_or_else(invalid)
    }
}

impl Serialize for RecordKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RecordKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
