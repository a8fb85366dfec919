//! Character pools and password generation.

pub mod charset;
pub mod entropy;
mod generate;

pub use charset::{CharacterClass, CharacterClasses, DEFAULT_SYMBOLS, assemble_pool};
pub use generate::{Generator, Sampling, generate};
