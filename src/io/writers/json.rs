//! JSON documents written to stdout: parsed releases and error records.
use serde::Serialize;
use serde_json::Value;

use crate::core::params::OutputParams;
use crate::core::release::Release;
use crate::error::Result;

/// Message reported when fewer than two inputs were supplied.
pub const INSUFFICIENT_ARGUMENTS: &str = "Insufficient arguments provided.";

/// `{"error": "..."}`
#[derive(Debug, Clone, Serialize)]
pub struct ErrorRecord<'a> {
    pub error: &'a str,
}

/// Convert a release into the JSON object that gets printed, applying the
/// output parameters.
pub fn release_to_value(release: &Release, params: &OutputParams) -> Result<Value> {
    let mut value = serde_json::to_value(release)?;
    if let Value::Object(map) = &mut value {
        if params.omit_null {
            map.retain(|_, v| !v.is_null());
        }
        if params.announce_section {
            map.insert(
                "announce_section".to_string(),
                Value::String(release.announce_section().as_str().to_string()),
            );
        }
    }
    Ok(value)
}

pub fn render_release(release: &Release, params: &OutputParams) -> Result<String> {
    let value = release_to_value(release, params)?;
    to_json(&value, params.pretty)
}

pub fn render_error(message: &str, params: &OutputParams) -> Result<String> {
    to_json(&ErrorRecord { error: message }, params.pretty)
}

fn to_json<T: Serialize + ?Sized>(value: &T, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    Ok(json)
}
