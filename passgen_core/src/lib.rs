pub mod charset;
pub mod config;
pub mod error;
pub mod generator;
pub mod ignore;

pub use charset::CharacterClass;
pub use config::{DEFAULT_LENGTH, MAX_LENGTH, MIN_CUSTOM_CHARACTERS, MIN_LENGTH, PasswordConfig};
pub use error::PasswordError;
pub use generator::PasswordGenerator;
pub use ignore::{IgnoreCharacter, IgnoreSet};
