//! Event loop for the password form.

use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use rand::Rng;
use tracing::{info, warn};
use zeroize::Zeroize;

use super::input::{Command, Focus, command};
use super::text::{Status, render};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::form::{Action, FormState};
use crate::pass::Generator;
use crate::settings::Settings;
use crate::terminal::{RawModeGuard, clear, flush, hide_cursor, reset_terminal};

fn draw(lines: &mut Vec<String>) {
    clear();
    for l in lines.iter() {
        println!("{l}");
    }
    flush();
    lines.zeroize();
}

/// Block for the next key press. `None` means redraw (e.g. after a resize).
fn read_key() -> Result<Option<KeyEvent>> {
    let _guard = RawModeGuard::new()?;
    loop {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => return Ok(Some(key)),
            Event::Resize(..) => return Ok(None),
            _ => {}
        }
    }
}

fn copy(clipboard: &mut Clipboard, state: &FormState) -> Status {
    if !state.is_generated() {
        return Status::NothingToCopy;
    }
    match clipboard.copy(state.password()) {
        Ok(()) => Status::Copied,
        Err(e) => {
            warn!(error = %e, "copy failed");
            Status::Failed(e.to_string())
        }
    }
}

/// Apply a form or focus command. Reset sends focus back to the length
/// field; moving focus leaves the form untouched.
fn advance<R: Rng>(
    state: FormState,
    focus: Focus,
    cmd: Command,
    generator: &mut Generator<R>,
) -> (FormState, Focus) {
    match cmd {
        Command::Act(Action::Reset) => (state.reduce(Action::Reset, generator), Focus::Length),
        Command::Act(action) => (state.reduce(action, generator), focus),
        Command::Next => (state, focus.next()),
        Command::Prev => (state, focus.prev()),
        Command::Copy | Command::Quit => (state, focus),
    }
}

pub fn run_form() -> Result<()> {
    let settings = Settings::load_from_file().unwrap_or_else(|e| {
        warn!(error = %e, "failed to load settings, using defaults");
        Settings::default()
    });
    info!(sampling = ?settings.sampling, "starting form");

    let mut generator = Generator::from_settings(&settings);
    let mut clipboard = Clipboard::new();
    let mut state = FormState::default();
    let mut focus = Focus::Length;
    let mut status: Option<Status> = None;

    hide_cursor();
    loop {
        let pool_size = generator.pool_size(&state.classes());
        draw(&mut render(&state, focus, pool_size, status.as_ref()));

        let Some(key) = read_key()? else {
            continue;
        };
        let Some(cmd) = command(focus, state.length_input(), key) else {
            continue;
        };

        status = None;
        match cmd {
            Command::Copy => status = Some(copy(&mut clipboard, &state)),
            Command::Quit => break,
            cmd => (state, focus) = advance(state, focus, cmd, &mut generator),
        }
    }

    clear();
    reset_terminal();
    Ok(())
}
