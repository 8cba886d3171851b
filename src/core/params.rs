use serde::{Deserialize, Serialize};

/// Output parameters suitable for config files and CLI flags
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputParams {
    /// Indented JSON instead of a single line
    pub pretty: bool,
    /// Drop keys whose value is null
    pub omit_null: bool,
    /// Append the pre-announce section label as `announce_section`
    pub announce_section: bool,
}

impl OutputParams {
    /// Combine with another set of parameters; a flag set in either is set.
    pub fn merge(self, other: OutputParams) -> OutputParams {
        OutputParams {
            pretty: self.pretty || other.pretty,
            omit_null: self.omit_null || other.omit_null,
            announce_section: self.announce_section || other.announce_section,
        }
    }
}
