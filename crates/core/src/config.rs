//! Application option resolution for recall.
//!
//! Each option resolves with the same precedence: explicit CLI flag, then
//! environment variable, then built-in default. Resolution takes an explicit
//! environment map so it can be tested without touching process state.

use std::collections::HashMap;

use crate::error::{Error, Result};

/// Default path for the memories YAML file
const DEFAULT_MEMORIES_PATH: &str = "~/.config/recall/memories.yml";
/// Default truncation width for commands in the selection list
pub const DEFAULT_COMMAND_PRINT_LENGTH: usize = 75;

pub const MEMORIES_FILE_ENV: &str = "RECALL_MEMORIES_FILE";
pub const COMMAND_PRINT_LENGTH_ENV: &str = "RECALL_COMMAND_PRINT_LENGTH";
pub const EDIT_PLACEHOLDERS_ENV: &str = "RECALL_EDIT_PLACEHOLDERS";

/// Resolved options for one program run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppOptions {
    /// Path to the memories YAML file, shell expansions resolved.
    pub memories_file: String,
    /// How many characters of each command the selection list prints.
    pub command_print_length: usize,
    /// Whether selecting a command with placeholders opens the edit page.
    pub edit_placeholders: bool,
}

/// Resolves [`AppOptions`] from CLI flag values and an environment map.
///
/// # Errors
///
/// Returns an error if `RECALL_COMMAND_PRINT_LENGTH` is set but is not a
/// valid unsigned integer.
pub fn resolve_app_options(
    memories_file_arg: Option<&String>,
    command_print_length_arg: Option<usize>,
    edit_placeholders_arg: bool,
    env: &HashMap<String, String>,
) -> Result<AppOptions> {
    let memories_file = match memories_file_arg.or_else(|| env.get(MEMORIES_FILE_ENV)) {
        Some(path) => path.clone(),
        None => DEFAULT_MEMORIES_PATH.to_string(),
    };

    let command_print_length = match command_print_length_arg {
        Some(length) => length,
        None => match env.get(COMMAND_PRINT_LENGTH_ENV) {
            Some(value) => value.parse::<usize>().map_err(|_| {
                Error::invalid_option(COMMAND_PRINT_LENGTH_ENV.to_string(), value.clone())
            })?,
            None => DEFAULT_COMMAND_PRINT_LENGTH,
        },
    };

    let edit_placeholders = edit_placeholders_arg
        || env
            .get(EDIT_PLACEHOLDERS_ENV)
            .is_some_and(|value| value == "1" || value == "true");

    Ok(AppOptions {
        memories_file: shellexpand::tilde(&memories_file).to_string(),
        command_print_length,
        edit_placeholders,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env_with(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect()
    }

    #[test]
    fn test_all_default_values() {
        let options = resolve_app_options(None, None, false, &HashMap::new()).unwrap();

        assert!(options.memories_file.contains(".config/recall/memories.yml"));
        assert!(!options.memories_file.starts_with('~'));
        assert_eq!(options.command_print_length, DEFAULT_COMMAND_PRINT_LENGTH);
        assert!(!options.edit_placeholders);
    }

    #[test]
    fn test_env_used_when_flags_absent() {
        let env = env_with(&[
            (MEMORIES_FILE_ENV, "/foo"),
            (COMMAND_PRINT_LENGTH_ENV, "40"),
            (EDIT_PLACEHOLDERS_ENV, "1"),
        ]);

        let options = resolve_app_options(None, None, false, &env).unwrap();

        assert_eq!(options.memories_file, "/foo");
        assert_eq!(options.command_print_length, 40);
        assert!(options.edit_placeholders);
    }

    #[test]
    fn test_flags_have_preference_over_env() {
        let env = env_with(&[(MEMORIES_FILE_ENV, "/foo"), (COMMAND_PRINT_LENGTH_ENV, "40")]);
        let memories_file = "/bar".to_string();

        let options = resolve_app_options(Some(&memories_file), Some(999), false, &env).unwrap();

        assert_eq!(options.memories_file, "/bar");
        assert_eq!(options.command_print_length, 999);
    }

    #[test]
    fn test_tilde_is_expanded() {
        let memories_file = "~/my-memories.yml".to_string();
        let options = resolve_app_options(Some(&memories_file), None, false, &HashMap::new()).unwrap();

        assert!(!options.memories_file.starts_with('~'));
        assert!(options.memories_file.ends_with("my-memories.yml"));
    }

    #[test]
    fn test_invalid_print_length_env_errors() {
        let env = env_with(&[(COMMAND_PRINT_LENGTH_ENV, "a")]);
        let result = resolve_app_options(None, None, false, &env);
        assert!(matches!(result, Err(Error::InvalidOption { .. })));
    }

    #[test]
    fn test_edit_placeholders_env_values() {
        for (value, expected) in [("1", true), ("true", true), ("0", false), ("", false)] {
            let env = env_with(&[(EDIT_PLACEHOLDERS_ENV, value)]);
            let options = resolve_app_options(None, None, false, &env).unwrap();
            assert_eq!(options.edit_placeholders, expected, "env value `{value}`");
        }
    }
}
