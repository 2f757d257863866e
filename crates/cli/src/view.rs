//! Textual rendering of the two pages.
//!
//! [`render_view`] produces a plain multi-line string; the terminal loop in
//! [`crate::tui`] only positions and prints it.

use crate::app::{render_command, App, Page};

/// Renders the page-appropriate view of the current state.
pub fn render_view(state: &App) -> String {
    match state.page {
        Page::Select => render_selection(state),
        Page::Edit => render_edit(state),
    }
}

/// The selection page: header, query line, separator, then two lines per
/// match. The first line carries the cursor marker and the command truncated
/// to the configured print length; the second carries the description.
fn render_selection(state: &App) -> String {
    let mut body = String::from("Please select a command\n");
    body.push_str(&format!("> {}\n", state.query));
    body.push_str("----------------------\n");

    let width = state.options.command_print_length;
    for (i, result) in state.matches.iter().enumerate() {
        let cursor = if i == state.match_cursor { ">>" } else { "" };
        body.push_str(&format!(
            "{cursor:<2} {command:<width$.width$}\n",
            command = result.memory.command,
        ));
        body.push_str(&format!("      |{}\n", result.memory.description));
    }

    body
}

/// The edit page: the live-rendered command, then one line per placeholder
/// field with a marker on the focused one.
fn render_edit(state: &App) -> String {
    let mut body = format!("Command: {}\n", render_command(state));

    let focus = state.focused_field_index();
    for (i, field) in state.edit_fields.iter().enumerate() {
        let marker = if i == focus { ">" } else { " " };
        body.push_str(&format!("{marker} {}: {}\n", field.name, field.value));
    }

    body
}
