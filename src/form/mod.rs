//! Form state for the password screen.
//!
//! The screen owns one [`FormState`] and replaces it with the result of
//! [`FormState::reduce`] on every user action.

mod state;
mod validate;

pub use state::{Action, FormState};
pub use validate::{LengthError, MAX_LENGTH, MIN_LENGTH, validate_length};
