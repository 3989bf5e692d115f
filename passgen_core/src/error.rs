use thiserror::Error;

/// Validation failures raised while constructing a `PasswordGenerator`.
///
/// Every variant is detected before any random draw happens; generation itself never fails.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PasswordError {
    /// The requested length is outside `MIN_LENGTH..=MAX_LENGTH`.
    #[error("Password must be between 3 and 512 characters")]
    InvalidLength,

    /// A custom character pool was given but has fewer than five characters once trimmed.
    #[error("Characters must have minimum 5 character")]
    CharactersLength,

    /// The ignore set removes every character of a pool the generator is required to
    /// draw from. Carries the pool label (`numbers`, `lower`, `upper`, `symbol`,
    /// `characters` or `all`).
    #[error("Not allowed ignore all characters of [{0}]")]
    IgnoreCharacter(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_stable() {
        assert_eq!(
            PasswordError::InvalidLength.to_string(),
            "Password must be between 3 and 512 characters"
        );
        assert_eq!(
            PasswordError::CharactersLength.to_string(),
            "Characters must have minimum 5 character"
        );
        assert_eq!(
            PasswordError::IgnoreCharacter("symbol".to_string()).to_string(),
            "Not allowed ignore all characters of [symbol]"
        );
    }
}
