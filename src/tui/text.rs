//! Screen layout for the password form.

use super::input::Focus;
use crate::form::FormState;
use crate::pass::entropy;
use crate::terminal::{
    GREEN, GREY, RED, RESET, bottom, checkbox, focused, line, line_center, row, top,
};

const PLACEHOLDER: &str = "Ex. 8";

/// One-line feedback under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    Copied,
    NothingToCopy,
    Failed(String),
}

fn length_field(input: &str) -> String {
    if input.is_empty() {
        format!("[ {GREY}{PLACEHOLDER}{RESET} ]")
    } else {
        format!("[ {:<5} ]", input)
    }
}

fn button(label: &str, focus: bool, disabled: bool) -> String {
    let text = format!("[ {label} ]");
    if disabled {
        format!("{GREY}{text}{RESET}")
    } else {
        focused(&text, focus)
    }
}

fn result_card(state: &FormState, pool_size: usize, lines: &mut Vec<String>) {
    let password = state.password();
    let bits = entropy::bits(password.chars().count(), pool_size);

    lines.push(String::new());
    lines.push(top("Generated password"));
    lines.push(line(&format!("{GREY}Press c to copy{RESET}")));
    lines.push(line(""));
    if password.is_empty() {
        lines.push(line_center(&format!("{GREY}(empty){RESET}")));
    } else {
        lines.push(line_center(password));
    }
    lines.push(line(""));
    lines.push(line(&format!(
        "Entropy: {:.1} bits ({})",
        bits,
        entropy::strength(bits)
    )));
    lines.push(bottom());
}

/// Lay out the whole screen, top to bottom.
pub fn render(
    state: &FormState,
    focus: Focus,
    pool_size: usize,
    status: Option<&Status>,
) -> Vec<String> {
    let mut lines = vec![top("Password Generator"), line("")];

    lines.push(row(
        "Password Length",
        &focused(&length_field(state.length_input()), focus == Focus::Length),
    ));
    if let Some(err) = state.length_error() {
        lines.push(line(&format!("{RED}{err}{RESET}")));
    }
    lines.push(line(""));

    let classes = state.classes();
    for (label, checked, target) in [
        ("Include lowercase", classes.lower, Focus::Lower),
        ("Include uppercase", classes.upper, Focus::Upper),
        ("Include numbers", classes.digits, Focus::Digits),
        ("Include special characters", classes.symbols, Focus::Symbols),
    ] {
        lines.push(row(label, &focused(&checkbox(checked), focus == target)));
    }
    lines.push(line(""));

    let disabled = state.length_error().is_some();
    lines.push(line_center(&format!(
        "{}   {}",
        button("Generate password", focus == Focus::Generate, disabled),
        button("Reset", focus == Focus::Reset, false)
    )));
    lines.push(bottom());

    if state.is_generated() {
        result_card(state, pool_size, &mut lines);
    }

    lines.push(String::new());
    lines.push(format!(
        "{GREY}Tab/↑↓ move · Space toggle · Enter select · Ctrl-R reset · Esc quit{RESET}"
    ));
    match status {
        Some(Status::Copied) => lines.push(format!("{GREEN}Copied to clipboard{RESET}")),
        Some(Status::NothingToCopy) => lines.push("Nothing to copy yet".to_string()),
        Some(Status::Failed(msg)) => lines.push(format!("{RED}{msg}{RESET}")),
        None => {}
    }

    lines
}
