//! CLI context - bundles settings and flags.

use std::io::Write;

use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

use super::{CliFlags, prompts, quiet};
use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::form::validate_length;
use crate::pass::{CharacterClasses, Generator};
use crate::settings::Settings;

/// Application context for CLI mode.
pub struct Context {
    pub settings: Settings,
    pub flags: CliFlags,
}

impl Context {
    /// Load saved settings and layer the flag overrides on top.
    pub fn new(flags: CliFlags) -> Self {
        quiet::set(flags.quiet);

        let mut settings = Settings::load_from_file().unwrap_or_else(|e| {
            prompts::warn(&format!("Failed to load settings: {e}"));
            Settings::default()
        });
        if let Some(ref symbols) = flags.symbol_set {
            settings.symbols = symbols.clone();
        }
        if let Some(sampling) = flags.sampling {
            settings.sampling = sampling;
        }

        Self { settings, flags }
    }

    pub fn run(&self) -> Result<()> {
        if self.flags.save {
            let path = self.settings.save_to_file()?;
            prompts::settings_saved(&path);
            if self.flags.length.is_none() {
                return Ok(());
            }
        }

        let length = validate_length(self.flags.length.as_deref().unwrap_or(""))?;
        let mut generator = Generator::from_settings(&self.settings);
        let passwords = batch(
            &mut generator,
            &self.flags.classes(),
            length,
            self.flags.number,
        );

        if self.flags.clipboard {
            match Clipboard::new().copy(passwords.trim_end()) {
                Ok(()) => {
                    prompts::clipboard_copied(self.flags.number);
                    return Ok(());
                }
                Err(e) => {
                    if !prompts::clipboard_fallback_prompt(&e.to_string()) {
                        return Ok(());
                    }
                }
            }
        }

        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        out.write_all(passwords.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}

/// `count` passwords, one per line.
fn batch<R: Rng>(
    generator: &mut Generator<R>,
    classes: &CharacterClasses,
    length: usize,
    count: usize,
) -> Zeroizing<String> {
    let mut passwords = Zeroizing::new(String::with_capacity(count * (length + 1)));
    for _ in 0..count {
        let password = generator.password(classes, length);
        passwords.push_str(&password);
        passwords.push('\n');
    }
    debug!(count, length, sampling = ?generator.sampling(), "batch generated");
    passwords
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::{DEFAULT_SYMBOLS, Sampling};

    #[test]
    fn batch_has_one_line_per_password() {
        let mut generator = Generator::new(DEFAULT_SYMBOLS, Sampling::Uniform, StdRng::seed_from_u64(4));
        let classes = CharacterClasses {
            upper: true,
            ..CharacterClasses::NONE
        };
        let out = batch(&mut generator, &classes, 10, 5);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 5);
        for l in lines {
            assert_eq!(l.len(), 10);
            assert!(l.chars().all(|c| c.is_ascii_uppercase()));
        }
    }

    #[test]
    fn empty_pool_prints_blank_lines() {
        let mut generator = Generator::new(DEFAULT_SYMBOLS, Sampling::Rounded, StdRng::seed_from_u64(4));
        let out = batch(&mut generator, &CharacterClasses::NONE, 8, 3);
        assert_eq!(out.as_str(), "\n\n\n");
    }
}
