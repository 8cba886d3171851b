//! Output parameter config files.
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::core::params::OutputParams;
use crate::error::{Error, Result};

/// Load `OutputParams` from a JSON file. Missing keys fall back to their
/// defaults, unknown keys are ignored.
pub fn load_params(path: impl AsRef<Path>) -> Result<OutputParams> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::config(path, e))?;
    let params: OutputParams = serde_json::from_str(&text).map_err(|e| Error::config(path, e))?;
    debug!(path = %path.display(), ?params, "loaded output params");
    Ok(params)
}
