//! The crossterm event loop.
//!
//! Drawing happens on stderr so that stdout stays clean for the emitted
//! command; `$(rcl)` works from subshells that way. One terminal event is
//! fully translated and processed before the next is read.

use std::io::{stderr, Write};

use crossterm::cursor::MoveTo;
use crossterm::event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::style::Print;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{cursor, queue, ExecutableCommand};
use log::debug;

use recall_core::config::AppOptions;
use recall_core::error::Result;
use recall_core::file_handling;

use crate::app::{update, App, Event, Outcome, Page};
use crate::view::render_view;

struct RawModeGuard;

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        // Disable raw mode on drop
        let _ = disable_raw_mode();
        let _ = stderr().execute(LeaveAlternateScreen);
    }
}

/// Runs the interactive session to completion and returns its outcome.
///
/// The catalog is loaded exactly once, before the terminal is touched, and
/// fed to the state machine as an ordinary event; a failed load therefore
/// terminates without any page being shown.
pub fn run(options: AppOptions) -> Result<Outcome> {
    let load_event = match file_handling::get_memories(&options.memories_file) {
        Ok(memories) => Event::MemoriesLoaded(memories),
        Err(e) => Event::MemoriesLoadFailed(e.to_string()),
    };

    let (mut state, outcome) = update(App::new(options), load_event);
    if let Some(outcome) = outcome {
        return Ok(outcome);
    }

    let mut stderr = stderr();
    enable_raw_mode()?;
    // From here on the guard owns cleanup; if entering the alternate screen
    // fails, raw mode is still undone on the way out.
    let _raw_mode_guard = RawModeGuard;
    stderr.execute(EnterAlternateScreen)?;

    loop {
        draw(&mut stderr, &state)?;

        let Some(input) = next_event(&state)? else {
            continue;
        };
        debug!("Processing event: {input:?}");

        let (next_state, outcome) = update(state, input);
        state = next_state;
        if let Some(outcome) = outcome {
            return Ok(outcome);
        }
    }
}

fn draw(output: &mut impl Write, state: &App) -> Result<()> {
    queue!(output, Clear(ClearType::All), MoveTo(0, 0))?;
    for line in render_view(state).lines() {
        queue!(output, Print(line), cursor::MoveToNextLine(1))?;
    }
    output.flush()?;
    Ok(())
}

/// Blocks for the next terminal event and translates it, skipping events the
/// state machine has no transition for.
fn next_event(state: &App) -> Result<Option<Event>> {
    match event::read()? {
        TermEvent::Key(key) if key.kind != KeyEventKind::Release => {
            Ok(translate_key(state, key))
        }
        _ => Ok(None),
    }
}

fn translate_key(state: &App, key: KeyEvent) -> Option<Event> {
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Event::Quit),
        KeyCode::Char('q') => Some(Event::Quit),
        KeyCode::Up => Some(Event::MoveUp),
        KeyCode::Down => Some(Event::MoveDown),
        KeyCode::Enter => Some(Event::Confirm),
        KeyCode::Backspace => {
            let mut buffer = active_buffer(state);
            buffer.pop();
            Some(Event::TextChanged(buffer))
        }
        KeyCode::Char(c) => {
            let mut buffer = active_buffer(state);
            buffer.push(c);
            Some(Event::TextChanged(buffer))
        }
        _ => None,
    }
}

/// The text buffer the next typed character lands in.
fn active_buffer(state: &App) -> String {
    match state.page {
        Page::Select => state.query.clone(),
        Page::Edit => state
            .edit_fields
            .get(state.focused_field_index())
            .map(|field| field.value.clone())
            .unwrap_or_default(),
    }
}
