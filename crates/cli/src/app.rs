//! The interaction state machine.
//!
//! [`update`] is the single entry point: it consumes the current [`App`]
//! value and one [`Event`], and produces the next state plus an optional
//! terminal [`Outcome`]. No transition can fail and no state is mutated in
//! place; each event yields a fresh value.

use recall_core::config::AppOptions;
use recall_core::match_cache::MatchCache;
use recall_core::matching::Match;
use recall_core::memories::Memory;
use recall_core::placeholders::{count_placeholders, get_placeholders, render, RenderOpts};

/// The two interaction pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Select,
    Edit,
}

/// A discrete input event from the surrounding event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Quit,
    MoveUp,
    MoveDown,
    Confirm,
    /// The active text buffer changed; carries the new full value. On the
    /// selection page this is the search query, on the edit page the focused
    /// placeholder field.
    TextChanged(String),
    MemoriesLoaded(Vec<Memory>),
    MemoriesLoadFailed(String),
}

/// How the program ends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The user quit without choosing anything.
    NoOutput,
    /// A command string to emit on stdout.
    Output(String),
    /// A startup failure reason to report on stderr.
    Failure(String),
}

/// One placeholder input on the edit page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditField {
    pub name: String,
    pub value: String,
}

/// The complete session state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct App {
    pub options: AppOptions,
    pub page: Page,
    pub query: String,
    pub memories: Vec<Memory>,
    pub matches: Vec<Match>,
    pub match_cursor: usize,
    pub selected_memory: Option<Memory>,
    pub edit_fields: Vec<EditField>,
    pub edit_focus: usize,
    cache: MatchCache,
}

impl App {
    pub fn new(options: AppOptions) -> Self {
        Self {
            options,
            page: Page::Select,
            query: String::new(),
            memories: Vec::new(),
            matches: Vec::new(),
            match_cursor: 0,
            selected_memory: None,
            edit_fields: Vec::new(),
            edit_focus: 0,
            cache: MatchCache::new(),
        }
    }

    /// Index of the focused edit field, falling back to the first field when
    /// the stored focus is out of range. That state should not normally
    /// occur, but the fallback keeps every transition total.
    pub fn focused_field_index(&self) -> usize {
        if self.edit_focus < self.edit_fields.len() {
            self.edit_focus
        } else {
            0
        }
    }
}

/// Returns true if the memory's command needs the edit page before emission.
pub fn needs_edit(options: &AppOptions, memory: &Memory) -> bool {
    options.edit_placeholders && count_placeholders(&memory.command) > 0
}

/// Processes one event, producing the next state and an optional terminal
/// outcome. A `Some` outcome ends the session.
pub fn update(state: App, event: Event) -> (App, Option<Outcome>) {
    match event {
        Event::Quit => (state, Some(Outcome::NoOutput)),
        Event::MemoriesLoadFailed(reason) => (state, Some(Outcome::Failure(reason))),
        Event::MemoriesLoaded(memories) => {
            let mut state = state;
            state.memories = memories;
            // The catalog changed underneath the query, so the cached query
            // must not count as a hit.
            (refresh_matches(state, true), None)
        }
        Event::MoveDown => {
            let mut state = state;
            if state.page == Page::Select {
                let last = state.matches.len().saturating_sub(1);
                state.match_cursor = (state.match_cursor + 1).min(last);
                // Keystroke-adjacent events re-enter the refresh path; the
                // cache turns this into a no-op since the query is unchanged.
                state = refresh_matches(state, false);
            }
            (state, None)
        }
        Event::MoveUp => {
            let mut state = state;
            if state.page == Page::Select {
                state.match_cursor = state.match_cursor.saturating_sub(1);
                state = refresh_matches(state, false);
            }
            (state, None)
        }
        Event::Confirm => match state.page {
            Page::Select => confirm_selection(state),
            Page::Edit => submit_edit_field(state),
        },
        Event::TextChanged(value) => match state.page {
            Page::Select => {
                let mut state = state;
                state.query = value;
                (refresh_matches(state, false), None)
            }
            Page::Edit => {
                let mut state = state;
                let focus = state.focused_field_index();
                if let Some(field) = state.edit_fields.get_mut(focus) {
                    field.value = value;
                }
                (state, None)
            }
        },
    }
}

/// Re-ranks matches through the cache, leaving them untouched on a cache hit.
fn refresh_matches(mut state: App, force_recompute: bool) -> App {
    if let Some(matches) = state
        .cache
        .update(&state.query, &state.memories, force_recompute)
    {
        state.matches = matches;
        // A shrinking match list must not leave the cursor out of range.
        state.match_cursor = state
            .match_cursor
            .min(state.matches.len().saturating_sub(1));
    }
    state
}

fn confirm_selection(mut state: App) -> (App, Option<Outcome>) {
    let Some(selected) = state.matches.get(state.match_cursor) else {
        // Nothing to confirm on an empty match list.
        return (state, None);
    };

    let memory = selected.memory.clone();
    state.selected_memory = Some(memory.clone());

    if !needs_edit(&state.options, &memory) {
        return (state, Some(Outcome::Output(memory.command)));
    }

    state.edit_fields = get_placeholders(&memory.command)
        .into_iter()
        .map(|placeholder| EditField {
            name: placeholder.name,
            value: String::new(),
        })
        .collect();
    state.edit_focus = 0;
    state.page = Page::Edit;
    (state, None)
}

fn submit_edit_field(mut state: App) -> (App, Option<Outcome>) {
    let focus = state.focused_field_index();

    if focus + 1 < state.edit_fields.len() {
        state.edit_focus = focus + 1;
        return (state, None);
    }

    let rendered = render_command(&state);
    (state, Some(Outcome::Output(rendered)))
}

/// Renders the selected command with the edit buffers collected so far.
///
/// Fields use default render options, so an empty non-optional value leaves
/// its `{{name}}` marker in the output rather than silently dropping it.
pub fn render_command(state: &App) -> String {
    let template = state
        .selected_memory
        .as_ref()
        .map_or("", |memory| memory.command.as_str());
    let values: Vec<String> = state
        .edit_fields
        .iter()
        .map(|field| field.value.clone())
        .collect();
    let opts = vec![RenderOpts::default(); state.edit_fields.len()];

    render(template, &values, &opts)
}
