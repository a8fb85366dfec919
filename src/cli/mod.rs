//! Flag-driven CLI mode.

mod context;
mod flags;
mod prompts;
mod quiet;

use clap::Parser;

pub use context::Context;
pub use flags::CliFlags;

/// Parse `args` and generate. Exits the process on error.
pub fn run(args: Vec<String>) {
    let flags = CliFlags::parse_from(args);
    if let Err(e) = Context::new(flags).run() {
        prompts::error(&e.to_string());
        std::process::exit(e.exit_code());
    }
}
