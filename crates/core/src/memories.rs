use std::fmt::{Display, Formatter};

use serde::Deserialize;

/// A memorized shell command together with its human-readable description.
///
/// Memories are loaded once at startup from the memories YAML file and are
/// immutable afterwards.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq, Default)]
pub struct Memory {
    pub command: String,
    #[serde(default)]
    pub description: String,
}

impl Display for Memory {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> std::fmt::Result {
        if self.description.is_empty() {
            formatter.write_str(&self.command)
        } else {
            write!(formatter, "{} ({})", self.command, self.description)
        }
    }
}
