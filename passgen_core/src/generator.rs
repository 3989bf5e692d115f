use crate::charset::{self, CharacterClass};
use crate::config::{MAX_LENGTH, MIN_CUSTOM_CHARACTERS, MIN_LENGTH, PasswordConfig};
use crate::error::PasswordError;
use crate::ignore::IgnoreSet;
use rand::Rng;
use rand_core::RngCore;
use tracing::{debug, trace};

/// Label reported when every character of the custom pool is ignored.
const CUSTOM_POOL_LABEL: &str = "characters";
/// Label reported when no class is enabled and the whole alphabet is ignored.
const FULL_ALPHABET_LABEL: &str = "all";
/// Characters stripped from both ends of a custom pool before its length is checked.
const TRIMMED_CHARACTERS: [char; 6] = [' ', '\t', '\n', '\r', '\0', '\x0B'];

/// Generates passwords from a validated `PasswordConfig`.
///
/// Construction runs every validation rule up front, so a `PasswordGenerator` that exists
/// can always produce a password. It holds no mutable state and can be shared freely;
/// each call to `generate` is independent.
#[derive(Debug, Clone)]
pub struct PasswordGenerator {
    config: PasswordConfig,
    ignore: IgnoreSet,
    /// Untrimmed custom pool, empty when class-based generation is used.
    custom_pool: Vec<char>,
    /// Enabled classes concatenated in check order, or the full alphabet if none is enabled.
    combined_pool: Vec<char>,
}

impl PasswordGenerator {
    /// Validates `config` and builds a generator from it.
    ///
    /// Checks run in a fixed order and the first failure is returned:
    /// 1. length within `MIN_LENGTH..=MAX_LENGTH`;
    /// 2. a non-empty custom pool keeps at least `MIN_CUSTOM_CHARACTERS` once trimmed;
    /// 3. no enabled built-in class is entirely ignored (checked even when a custom pool
    ///    is set);
    /// 4. the pool drawn from after coverage (custom pool or, with no class enabled, the
    ///    full alphabet) is not entirely ignored.
    pub fn new(config: PasswordConfig) -> Result<Self, PasswordError> {
        match Self::build(config) {
            Ok(generator) => {
                debug!(
                    length = generator.config.length,
                    custom = !generator.custom_pool.is_empty(),
                    ignored = generator.ignore.len(),
                    "password generator ready"
                );
                Ok(generator)
            }
            Err(e) => {
                debug!(error = %e, "rejected password configuration");
                Err(e)
            }
        }
    }

    fn build(config: PasswordConfig) -> Result<Self, PasswordError> {
        if !(MIN_LENGTH..=MAX_LENGTH).contains(&config.length) {
            return Err(PasswordError::InvalidLength);
        }

        if !config.custom_characters.is_empty()
            && config
                .custom_characters
                .trim_matches(TRIMMED_CHARACTERS)
                .chars()
                .count() < MIN_CUSTOM_CHARACTERS
        {
            return Err(PasswordError::CharactersLength);
        }

        let ignore = IgnoreSet::from_entries(config.ignore_characters.iter().copied());

        for class in CharacterClass::ALL {
            if config.is_class_enabled(class) && ignore.covers(class.members()) {
                return Err(PasswordError::IgnoreCharacter(class.label().to_string()));
            }
        }

        let custom_pool: Vec<char> = config.custom_characters.chars().collect();
        let combined_pool: Vec<char> = if config.no_class_enabled() {
            charset::full_alphabet()
        } else {
            CharacterClass::ALL
                .iter()
                .filter(|class| config.is_class_enabled(**class))
                .flat_map(|class| class.members().iter().copied())
                .collect()
        };

        if !custom_pool.is_empty() {
            if ignore.covers(&custom_pool) {
                return Err(PasswordError::IgnoreCharacter(CUSTOM_POOL_LABEL.to_string()));
            }
        } else if config.no_class_enabled() && ignore.covers(&combined_pool) {
            return Err(PasswordError::IgnoreCharacter(FULL_ALPHABET_LABEL.to_string()));
        }

        Ok(Self {
            config,
            ignore,
            custom_pool,
            combined_pool,
        })
    }

    pub fn config(&self) -> &PasswordConfig {
        &self.config
    }

    pub fn length(&self) -> usize {
        self.config.length
    }

    pub fn ignore_set(&self) -> &IgnoreSet {
        &self.ignore
    }

    /// Generates a password using the thread-local random generator.
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::rng())
    }

    /// Generates a password drawing every index from `rng`.
    ///
    /// For a fixed seed the output is reproducible: one index is drawn per loop pass,
    /// including passes whose character turns out to be ignored.
    pub fn generate_with(&self, rng: &mut dyn RngCore) -> String {
        let length = self.config.length;
        let mut password: Vec<char> = Vec::with_capacity(length);
        let mut draws = 0usize;

        while password.len() < length {
            let pool = self.source_pool(&password);
            let index = rng.random_range(0..=pool.len() - 1);
            let c = pool[index];
            draws += 1;

            if !self.ignore.contains(c) {
                password.push(c);
            }
        }

        trace!(length, draws, "generated password");
        password.into_iter().collect()
    }

    /// Generates `count` independent passwords with the thread-local random generator.
    pub fn generate_batch(&self, count: usize) -> Vec<String> {
        let mut rng = rand::rng();
        self.generate_batch_with(&mut rng, count)
    }

    pub fn generate_batch_with(&self, rng: &mut dyn RngCore, count: usize) -> Vec<String> {
        (0..count).map(|_| self.generate_with(&mut *rng)).collect()
    }

    /// Picks the pool for the next draw: the custom pool if set, otherwise the first
    /// enabled class with no representative in `password`, otherwise the combined pool.
    fn source_pool(&self, password: &[char]) -> &[char] {
        if !self.custom_pool.is_empty() {
            return &self.custom_pool;
        }

        let uncovered = CharacterClass::ALL.iter().find(|class| {
            self.config.is_class_enabled(**class) && !password.iter().any(|c| class.contains(*c))
        });

        match uncovered {
            Some(class) => class.members(),
            None => &self.combined_pool,
        }
    }
}
