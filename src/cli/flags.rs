//! Command-line flags.

use clap::Parser;

use crate::pass::{CharacterClasses, Sampling};

/// Generate passwords from selected character classes.
///
/// Run without arguments to open the interactive form.
#[derive(Debug, Parser)]
#[command(name = "passform", version)]
pub struct CliFlags {
    /// Characters per password (4-16)
    #[arg(short, long, value_name = "N", allow_hyphen_values = true)]
    pub length: Option<String>,

    /// Include lowercase letters (the default when no class is given)
    #[arg(long)]
    pub lower: bool,

    /// Include uppercase letters
    #[arg(long)]
    pub upper: bool,

    /// Include digits
    #[arg(long)]
    pub digits: bool,

    /// Include special characters
    #[arg(long)]
    pub symbols: bool,

    /// Include every character class
    #[arg(short, long)]
    pub all: bool,

    /// How many passwords to generate
    #[arg(short, long, value_name = "N", default_value_t = 1)]
    pub number: usize,

    /// Override the special character set
    #[arg(long, value_name = "CHARS")]
    pub symbol_set: Option<String>,

    /// How pool indexes are drawn
    #[arg(long, value_enum)]
    pub sampling: Option<Sampling>,

    /// Copy to clipboard instead of printing
    #[arg(short = 'b', long = "board")]
    pub clipboard: bool,

    /// Suppress all output except passwords
    #[arg(short, long)]
    pub quiet: bool,

    /// Save --symbol-set and --sampling to the settings file
    #[arg(long)]
    pub save: bool,
}

impl CliFlags {
    /// Selected classes, falling back to the form default when none is given.
    pub fn classes(&self) -> CharacterClasses {
        if self.all {
            return CharacterClasses::ALL;
        }
        let picked = CharacterClasses {
            lower: self.lower,
            upper: self.upper,
            digits: self.digits,
            symbols: self.symbols,
        };
        if picked.is_empty() {
            CharacterClasses::default()
        } else {
            picked
        }
    }
}
