//! Password form: character-class selection, length validation and
//! generation, driven from an interactive terminal screen or from flags.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod exits;
pub mod form;
pub mod pass;
pub mod settings;
pub mod terminal;
pub mod tui;

pub use error::{Error, Result};
