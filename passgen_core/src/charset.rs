/// Built-in character pools a password can draw from.
///
/// The declaration order is also the order in which classes are checked, both when
/// validating the ignore set and when the generator decides which class still needs a
/// representative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CharacterClass {
    Numbers,
    Lowercase,
    Uppercase,
    Symbols,
}

const NUMBERS: &[char] = &['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

const LOWERCASE: &[char] = &[
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm', 'n', 'o', 'p', 'q', 'r',
    's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

const UPPERCASE: &[char] = &[
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M', 'N', 'O', 'P', 'Q', 'R',
    'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
];

/// `'"!@#$%&*()-_+=[]{}?\/;:><.,|`
const SYMBOLS: &[char] = &[
    '\'', '"', '!', '@', '#', '$', '%', '&', '*', '(', ')', '-', '_', '+', '=', '[', ']', '{',
    '}', '?', '\\', '/', ';', ':', '>', '<', '.', ',', '|',
];

impl CharacterClass {
    /// All classes in check order.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Numbers,
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Symbols,
    ];

    /// The fixed, distinct members of this class.
    pub fn members(self) -> &'static [char] {
        match self {
            CharacterClass::Numbers => NUMBERS,
            CharacterClass::Lowercase => LOWERCASE,
            CharacterClass::Uppercase => UPPERCASE,
            CharacterClass::Symbols => SYMBOLS,
        }
    }

    /// Label used in `IgnoreCharacter` error messages.
    pub fn label(self) -> &'static str {
        match self {
            CharacterClass::Numbers => "numbers",
            CharacterClass::Lowercase => "lower",
            CharacterClass::Uppercase => "upper",
            CharacterClass::Symbols => "symbol",
        }
    }

    pub fn contains(self, c: char) -> bool {
        match self {
            CharacterClass::Numbers => c.is_ascii_digit(),
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Symbols => SYMBOLS.contains(&c),
        }
    }
}

/// Every built-in class concatenated in check order.
pub fn full_alphabet() -> Vec<char> {
    CharacterClass::ALL
        .iter()
        .flat_map(|class| class.members().iter().copied())
        .collect()
}
