//! Terminal output utilities.
//!
//! Box drawing, form rows and ANSI helpers.

use crossterm::terminal::disable_raw_mode;
use std::io::{self, Write};

// ============================================================================
// ANSI Color/Style Constants
// ============================================================================

pub const RESET: &str = "\x1b[0m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;36m";
pub const GREY: &str = "\x1b[90m";
pub const REVERSE: &str = "\x1b[7m";

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Reset terminal to sane state (fixes staggered text issues).
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}\x1b[?25h");
    flush();
}

pub fn hide_cursor() {
    print!("\x1b[?25l");
    flush();
}

// ============================================================================
// Box Drawing (56 char width)
// ============================================================================

pub const BOX_WIDTH: usize = 56;
const INNER_WIDTH: usize = BOX_WIDTH - 4;

/// ┌─ Title ───────────────────────────┐
pub fn top(title: &str) -> String {
    if title.is_empty() {
        format!("┌{}┐", "─".repeat(BOX_WIDTH - 2))
    } else {
        let title_part = format!("─ {} ", title);
        let remaining = (BOX_WIDTH - 2).saturating_sub(console_width(&title_part));
        format!("┌{}{}┐", title_part, "─".repeat(remaining))
    }
}

/// └───────────────────────────────────┘
pub fn bottom() -> String {
    format!("└{}┘", "─".repeat(BOX_WIDTH - 2))
}

/// │ content                           │
pub fn line(content: &str) -> String {
    let padding = INNER_WIDTH.saturating_sub(console_width(content));
    format!("│ {}{} │", content, " ".repeat(padding))
}

/// │          content          │
pub fn line_center(content: &str) -> String {
    let total_padding = INNER_WIDTH.saturating_sub(console_width(content));
    let left_pad = total_padding / 2;
    let right_pad = total_padding - left_pad;
    format!(
        "│ {}{}{} │",
        " ".repeat(left_pad),
        content,
        " ".repeat(right_pad)
    )
}

/// │ label                       value │
pub fn row(label: &str, value: &str) -> String {
    let used = console_width(label) + console_width(value);
    let gap = INNER_WIDTH.saturating_sub(used).max(1);
    format!("│ {}{}{} │", label, " ".repeat(gap), value)
}

pub fn checkbox(checked: bool) -> String {
    if checked {
        format!("[{GREEN}x{RESET}]")
    } else {
        "[ ]".to_string()
    }
}

/// Highlight `text` when focused.
pub fn focused(text: &str, focus: bool) -> String {
    if focus {
        format!("{REVERSE}{text}{RESET}")
    } else {
        text.to_string()
    }
}

/// Display width ignoring ANSI escape sequences.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut in_escape = false;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape {
            if c.is_ascii_alphabetic() {
                in_escape = false;
            }
        } else {
            width += 1;
        }
    }
    width
}
