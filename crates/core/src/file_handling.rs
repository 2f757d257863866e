//! Loading the memory catalog from disk.
//!
//! The catalog is a YAML list of `{command, description}` entries, read once
//! at startup.

use std::fs::File;

use log::debug;

use crate::error::{Error, Result};
use crate::memories::Memory;

fn get_reader(file_description: &str, path: &str) -> Result<File> {
    match File::open(path) {
        Ok(reader) => Ok(reader),
        Err(e) => Err(Error::io_error(
            file_description.to_string(),
            path.to_string(),
            e,
        )),
    }
}

/// Loads memories from the YAML file at `memories_path`.
///
/// An empty list is a valid catalog; the selection page simply starts with no
/// entries.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be opened or read
/// - The YAML is malformed or doesn't match the expected structure
pub fn get_memories(memories_path: &str) -> Result<Vec<Memory>> {
    let reader = get_reader("memories", memories_path)?;

    let parsing_result: serde_yaml::Result<Vec<Memory>> = serde_yaml::from_reader(reader);

    let memories = parsing_result.map_err(|e| {
        Error::yaml_error(
            "reading".to_string(),
            "memories".to_string(),
            memories_path.to_string(),
            e,
        )
    })?;

    debug!("Loaded {} memories from `{}`", memories.len(), memories_path);

    Ok(memories)
}
