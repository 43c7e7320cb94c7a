//! Lenient field decoders for registry payloads.
//!
//! The registry encodes integers and decimals as JSON strings in some
//! deployments and as numbers in others.

use serde::de::Error;
use serde::{Deserialize, Deserializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(serde_json::Number),
    Text(String),
}

pub(crate) fn height<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<NumberOrText>::deserialize(deserializer)? {
        None => Ok(0),
        Some(NumberOrText::Number(n)) => n
            .as_u64()
            .ok_or_else(|| D::Error::custom(format!("invalid height: {n}"))),
        Some(NumberOrText::Text(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                return Ok(0);
            }
            trimmed
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid height: {s:?}")))
        }
    }
}

pub(crate) fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<NumberOrText>::deserialize(deserializer)?.map(|raw| match raw {
            NumberOrText::Number(n) => n.to_string(),
            NumberOrText::Text(s) => s,
        }),
    )
}

pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<bool>::deserialize(deserializer)?.unwrap_or(false))
}
