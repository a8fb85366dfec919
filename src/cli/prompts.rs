//! Warning and prompt messages for CLI output.

use std::io::Write;
use std::path::Path;

use super::quiet;

const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Yellow warning on stderr, suppressed in quiet mode.
pub fn warn(msg: &str) {
    if !quiet::enabled() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Red error on stderr, always shown.
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

pub fn clipboard_copied(count: usize) {
    if !quiet::enabled() {
        println!("*** {count} password(s) copied to clipboard ***");
    }
}

pub fn settings_saved(path: &Path) {
    if !quiet::enabled() {
        println!("Settings saved \u{2192} {}", path.display());
    }
}

/// Ask whether to print instead when the clipboard can't be used. Quiet or
/// non-interactive runs fall back to printing without asking.
pub fn clipboard_fallback_prompt(err: &str) -> bool {
    if quiet::skip_prompt() {
        return true;
    }

    eprint!("{err}. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            eprintln!();
            return true;
        }
    } else {
        return true;
    }

    eprintln!("\nAborted.");
    false
}
