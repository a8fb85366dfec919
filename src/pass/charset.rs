//! Character pool assembly for password generation.

const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Default symbol alphabet.
pub const DEFAULT_SYMBOLS: &str = "!@#$%^&*()-+";

/// Which character classes feed the pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lower: bool,
    pub upper: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub const ALL: Self = Self {
        lower: true,
        upper: true,
        digits: true,
        symbols: true,
    };

    pub const NONE: Self = Self {
        lower: false,
        upper: false,
        digits: false,
        symbols: false,
    };

    pub fn is_empty(&self) -> bool {
        !(self.lower || self.upper || self.digits || self.symbols)
    }

    pub fn toggle(mut self, class: CharacterClass) -> Self {
        match class {
            CharacterClass::Lower => self.lower = !self.lower,
            CharacterClass::Upper => self.upper = !self.upper,
            CharacterClass::Digits => self.digits = !self.digits,
            CharacterClass::Symbols => self.symbols = !self.symbols,
        }
        self
    }
}

/// Lowercase only, the state a fresh or reset form starts in.
impl Default for CharacterClasses {
    fn default() -> Self {
        Self {
            lower: true,
            ..Self::NONE
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharacterClass {
    Lower,
    Upper,
    Digits,
    Symbols,
}

/// Concatenate the enabled alphabets in the order upper, lower, digits,
/// symbols. Nothing enabled gives an empty pool.
pub fn assemble_pool(classes: &CharacterClasses, symbols: &str) -> Vec<char> {
    let mut chars: Vec<char> = Vec::new();

    if classes.upper {
        chars.extend(UPPERCASE.chars());
    }

    if classes.lower {
        chars.extend(UPPERCASE.to_ascii_lowercase().chars());
    }

    if classes.digits {
        chars.extend(DIGITS);
    }

    if classes.symbols {
        chars.extend(symbols.chars());
    }

    chars
}
