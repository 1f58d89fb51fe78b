//! Forgiving field decoders for profile bodies.
//!
//! The profile is whatever the user has filled in so far, so a badly typed or
//! `null` field degrades to its default instead of failing the whole load.
//! Each helper reads a [`Value`] first and coerces it:
//!
//! | Helper | Accepts | Otherwise |
//! |--------|---------|-----------|
//! | [`string`] / [`opt_string`] | strings, numbers, booleans | `""` / `None` |
//! | [`boolean`] | booleans | `false` |
//! | [`opt_integer`] | integers, whole or fractional floats (truncated), numeric strings | `None` |
//! | [`count`] | as [`opt_integer`], clamped to `0..=u32::MAX` | `0` |
//! | [`opt_list`] | arrays; entries that fail to decode are dropped | `None` |

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub(crate) fn opt_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(flag) => Some(flag.to_string()),
        _ => None,
    })
}

pub(crate) fn string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(opt_string(deserializer)?.unwrap_or_default())
}

pub(crate) fn boolean<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(matches!(Value::deserialize(deserializer)?, Value::Bool(true)))
}

fn whole_number(value: &Value) -> Option<i64> {
    let float = match value {
        Value::Number(number) => {
            if let Some(n) = number.as_i64() {
                return Some(n);
            }
            number.as_f64()?
        }
        Value::String(text) => text.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    // `as` saturates at the i64 bounds
    float.is_finite().then(|| float.trunc() as i64)
}

pub(crate) fn opt_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(whole_number(&Value::deserialize(deserializer)?))
}

pub(crate) fn count<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let n = whole_number(&Value::deserialize(deserializer)?).unwrap_or(0);
    Ok(n.clamp(0, i64::from(u32::MAX)) as u32)
}

pub(crate) fn opt_list<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let Value::Array(entries) = Value::deserialize(deserializer)? else {
        return Ok(None);
    };
    let items = entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::debug!("Skipping unreadable profile entry: {e}");
                None
            }
        })
        .collect();
    Ok(Some(items))
}
