//! Form state record and its reducer.

use std::fmt;

use rand::Rng;
use tracing::debug;
use zeroize::Zeroizing;

use super::validate::{LengthError, validate_length};
use crate::pass::{CharacterClass, CharacterClasses, Generator};

/// Everything the password screen displays.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct FormState {
    length_input: String,
    length_touched: bool,
    classes: CharacterClasses,
    generated: bool,
    password: Zeroizing<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    EditLength(String),
    Toggle(CharacterClass),
    Submit,
    Reset,
}

impl FormState {
    /// Apply `action`, returning the next state. Only `Submit` draws from the
    /// generator, and only when the length validates.
    pub fn reduce<R: Rng>(&self, action: Action, generator: &mut Generator<R>) -> Self {
        match action {
            Action::EditLength(text) => Self {
                length_input: text,
                ..self.clone()
            },
            Action::Toggle(class) => Self {
                classes: self.classes.toggle(class),
                ..self.clone()
            },
            Action::Submit => {
                let touched = Self {
                    length_touched: true,
                    ..self.clone()
                };
                match validate_length(&self.length_input) {
                    Ok(length) => Self {
                        generated: true,
                        password: generator.password(&self.classes, length),
                        ..touched
                    },
                    Err(e) => {
                        debug!(error = %e, "submit rejected");
                        touched
                    }
                }
            }
            Action::Reset => Self::default(),
        }
    }

    pub fn length_input(&self) -> &str {
        &self.length_input
    }

    pub fn classes(&self) -> CharacterClasses {
        self.classes
    }

    pub fn is_generated(&self) -> bool {
        self.generated
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn is_valid(&self) -> bool {
        validate_length(&self.length_input).is_ok()
    }

    /// Inline error for the length field, once a submit has touched it.
    pub fn length_error(&self) -> Option<LengthError> {
        if !self.length_touched {
            return None;
        }
        validate_length(&self.length_input).err()
    }
}

impl fmt::Debug for FormState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormState")
            .field("length_input", &self.length_input)
            .field("length_touched", &self.length_touched)
            .field("classes", &self.classes)
            .field("generated", &self.generated)
            .field("password", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::{DEFAULT_SYMBOLS, Sampling};

    fn generator() -> Generator<StdRng> {
        Generator::new(DEFAULT_SYMBOLS, Sampling::Uniform, StdRng::seed_from_u64(5))
    }

    fn run(actions: Vec<Action>) -> FormState {
        let mut generator = generator();
        actions
            .into_iter()
            .fold(FormState::default(), |state, action| state.reduce(action, &mut generator))
    }

    #[test]
    fn starts_lowercase_only_and_empty() {
        let state = FormState::default();
        assert_eq!(state.classes(), CharacterClasses::default());
        assert!(!state.is_generated());
        assert_eq!(state.password(), "");
        assert_eq!(state.length_error(), None);
    }

    #[test]
    fn error_hidden_until_touched() {
        let state = run(vec![Action::EditLength("2".into())]);
        assert_eq!(state.length_error(), None);
        assert!(!state.is_valid());

        let state = run(vec![Action::EditLength("2".into()), Action::Submit]);
        assert_eq!(state.length_error(), Some(LengthError::TooShort));

        let state = run(vec![
            Action::EditLength("2".into()),
            Action::Submit,
            Action::EditLength("20".into()),
        ]);
        assert_eq!(state.length_error(), Some(LengthError::TooLong));
    }

    #[test]
    fn invalid_submit_only_touches() {
        let state = run(vec![Action::Submit]);
        assert_eq!(state.length_error(), Some(LengthError::Required));
        assert!(!state.is_generated());
        assert_eq!(state.password(), "");
    }

    #[test]
    fn valid_submit_generates() {
        let state = run(vec![
            Action::EditLength("12".into()),
            Action::Toggle(CharacterClass::Digits),
            Action::Submit,
        ]);
        assert!(state.is_generated());
        assert_eq!(state.password().len(), 12);
        assert!(
            state
                .password()
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn nothing_selected_generates_empty() {
        let state = run(vec![
            Action::EditLength("8".into()),
            Action::Toggle(CharacterClass::Lower),
            Action::Submit,
        ]);
        assert!(state.is_generated());
        assert_eq!(state.password(), "");
    }

    #[test]
    fn resubmit_replaces_password() {
        let mut generator = generator();
        let state = FormState::default()
            .reduce(Action::EditLength("16".into()), &mut generator)
            .reduce(Action::Submit, &mut generator);
        let first = state.password().to_string();
        let state = state.reduce(Action::Submit, &mut generator);
        assert_ne!(state.password(), first);
    }

    #[test]
    fn reset_restores_defaults() {
        let state = run(vec![
            Action::EditLength("10".into()),
            Action::Toggle(CharacterClass::Upper),
            Action::Toggle(CharacterClass::Digits),
            Action::Toggle(CharacterClass::Symbols),
            Action::Toggle(CharacterClass::Lower),
            Action::Submit,
            Action::Reset,
        ]);
        assert_eq!(state, FormState::default());
        let classes = state.classes();
        assert!(classes.lower && !classes.upper && !classes.digits && !classes.symbols);
        assert!(!state.is_generated());
        assert_eq!(state.password(), "");
        assert_eq!(state.length_input(), "");
    }

    #[test]
    fn debug_hides_password() {
        let state = run(vec![Action::EditLength("8".into()), Action::Submit]);
        let shown = format!("{state:?}");
        assert!(shown.contains("<redacted>"));
        assert!(!shown.contains(state.password()));
    }
}
