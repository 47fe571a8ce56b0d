use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer};

/// Identifier returned as either JSON string or JSON number, kept as text.
///
/// Numbers keep their raw token, so `206` becomes `"206"`.
pub fn deserialize_opt_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<Box<serde_json::value::RawValue>> = Option::deserialize(deserializer)?;
    let Some(raw) = raw else {
        return Ok(None);
    };
    let token = raw.get();

    match token.as_bytes().first().copied() {
        Some(b'"') => {
            let parsed = serde_json::from_str::<String>(token).map_err(D::Error::custom)?;
            Ok(Some(parsed))
        }
        Some(b'-' | b'0'..=b'9') => Ok(Some(token.to_owned())),
        _ => Err(D::Error::custom(
            "expected id field to be JSON string or number",
        )),
    }
}
