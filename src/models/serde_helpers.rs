//! Serde helpers for strict transport-format checks

use serde::{Deserialize, Deserializer};

/// Deserialize a canvas dimension, rejecting zero
pub fn deserialize_positive<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = u32::deserialize(deserializer)?;
    if n == 0 {
        return Err(serde::de::Error::custom("canvas dimension must be greater than 0"));
    }
    Ok(n)
}
