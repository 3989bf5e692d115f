use crate::charset::CharacterClass;
use crate::ignore::IgnoreCharacter;
use serde::Deserialize;
use std::path::Path;

pub const MIN_LENGTH: usize = 3;
pub const MAX_LENGTH: usize = 512;
pub const DEFAULT_LENGTH: usize = 32;
/// Minimum trimmed character count of a non-empty custom pool.
pub const MIN_CUSTOM_CHARACTERS: usize = 5;

/// Parameters of a password generator.
///
/// Parsing a config never validates it; `PasswordGenerator::new` does.
#[derive(Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
#[serde(deny_unknown_fields)]
pub struct PasswordConfig {
    /// Explicit pool that replaces class-based generation when non-empty.
    #[serde(default)]
    pub custom_characters: String,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_enabled")]
    pub use_numbers: bool,
    #[serde(default = "default_enabled")]
    pub use_lowercase: bool,
    #[serde(default = "default_enabled")]
    pub use_uppercase: bool,
    #[serde(default = "default_enabled")]
    pub use_symbols: bool,
    #[serde(default)]
    pub ignore_characters: Vec<IgnoreCharacter>,
}

pub fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_enabled() -> bool {
    true
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            custom_characters: String::new(),
            length: default_length(),
            use_numbers: default_enabled(),
            use_lowercase: default_enabled(),
            use_uppercase: default_enabled(),
            use_symbols: default_enabled(),
            ignore_characters: Vec::new(),
        }
    }
}

impl PasswordConfig {
    pub fn is_class_enabled(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Numbers => self.use_numbers,
            CharacterClass::Lowercase => self.use_lowercase,
            CharacterClass::Uppercase => self.use_uppercase,
            CharacterClass::Symbols => self.use_symbols,
        }
    }

    /// Returns `true` if no built-in class is enabled.
    pub fn no_class_enabled(&self) -> bool {
        !CharacterClass::ALL
            .iter()
            .any(|class| self.is_class_enabled(*class))
    }

    pub fn from_toml_str(content: &str) -> Result<Self, anyhow::Error> {
        toml::from_str(content).map_err(|e| anyhow::anyhow!("Failed to parse TOML config: {}", e))
    }

    pub fn load_from_file(path: &Path) -> Result<Self, anyhow::Error> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read config file at {:?}: {}", path, e))?;

        let config: PasswordConfig = toml::from_str(&content).map_err(|e| {
            anyhow::anyhow!("Failed to parse TOML from config file {:?}: {}", path, e)
        })?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ignore::IgnoreSet;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn empty_document_yields_defaults() {
        let config = PasswordConfig::from_toml_str("").unwrap();
        assert_eq!(config, PasswordConfig::default());
        assert_eq!(config.length, 32);
        assert!(config.custom_characters.is_empty());
        assert!(CharacterClass::ALL.iter().all(|c| config.is_class_enabled(*c)));
    }

    #[test]
    fn parses_kebab_case_fields() {
        let config = PasswordConfig::from_toml_str(
            r#"
            length = 15
            use-lowercase = false
            use-symbols = false
            ignore-characters = [1, 2, "A"]
            "#,
        )
        .unwrap();

        assert_eq!(config.length, 15);
        assert!(config.use_numbers);
        assert!(!config.use_lowercase);
        assert!(config.use_uppercase);
        assert!(!config.use_symbols);
        assert_eq!(
            config.ignore_characters,
            vec![
                IgnoreCharacter::Digit(1),
                IgnoreCharacter::Digit(2),
                IgnoreCharacter::Char('A'),
            ]
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = PasswordConfig::from_toml_str("lenght = 12").unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML config"));
    }

    #[test]
    fn invalid_ignore_entries_are_rejected() {
        assert!(PasswordConfig::from_toml_str("ignore-characters = [1.5]").is_err());
        assert!(PasswordConfig::from_toml_str("ignore-characters = [false]").is_err());
    }

    #[test]
    fn large_integer_ignore_entries_load_and_are_dropped() {
        let config = PasswordConfig::from_toml_str("ignore-characters = [300, 1]").unwrap();
        assert_eq!(
            config.ignore_characters,
            vec![IgnoreCharacter::Digit(300), IgnoreCharacter::Digit(1)]
        );

        let set = IgnoreSet::from_entries(config.ignore_characters.iter().copied());
        assert_eq!(set.iter().collect::<Vec<_>>(), vec!['1']);
    }

    #[test]
    fn no_class_enabled_only_when_all_flags_are_off() {
        let mut config = PasswordConfig {
            use_numbers: false,
            use_lowercase: false,
            use_uppercase: false,
            use_symbols: false,
            ..PasswordConfig::default()
        };
        assert!(config.no_class_enabled());
        config.use_symbols = true;
        assert!(!config.no_class_enabled());
    }

    #[test]
    fn load_from_file_reads_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "custom-characters = \"abcdef\"\nlength = 40").unwrap();

        let config = PasswordConfig::load_from_file(file.path()).unwrap();
        assert_eq!(config.custom_characters, "abcdef");
        assert_eq!(config.length, 40);
    }

    #[test]
    fn load_from_missing_file_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        let err = PasswordConfig::load_from_file(&missing).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }
}
