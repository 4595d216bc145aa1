//! Strong password generator.

use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use secrecy::SecretString;
use thiserror::Error;

const LOWERCASE: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPERCASE: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const PUNCTUATION: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    #[error("invalid length {requested}: at least {minimum} characters are required")]
    InvalidLength { requested: usize, minimum: usize },
}

/// Options for [`generate_password`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub length: usize,
    pub include_special: bool,
    pub include_numbers: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: 14,
            include_special: true,
            include_numbers: true,
        }
    }
}

impl GeneratorConfig {
    pub fn with_length(mut self, length: usize) -> Self {
        self.length = length;
        self
    }

    /// Number of mandatory characters: one lowercase, one uppercase, plus one
    /// per enabled optional class.
    pub fn minimum_length(&self) -> usize {
        2 + usize::from(self.include_numbers) + usize::from(self.include_special)
    }

    fn alphabet(&self) -> Vec<u8> {
        let mut alphabet = Vec::with_capacity(94);
        alphabet.extend_from_slice(LOWERCASE);
        alphabet.extend_from_slice(UPPERCASE);
        if self.include_numbers {
            alphabet.extend_from_slice(DIGITS);
        }
        if self.include_special {
            alphabet.extend_from_slice(PUNCTUATION);
        }
        alphabet
    }
}

/// Generates a random password using the thread-local CSPRNG.
///
/// # Errors
///
/// Returns [`GeneratorError::InvalidLength`] if `config.length` cannot hold
/// the mandatory characters.
pub fn generate_password(config: &GeneratorConfig) -> Result<SecretString, GeneratorError> {
    generate_password_with(config, &mut rand::rng())
}

/// Generates a random password from the given RNG.
///
/// The output holds exactly `config.length` characters, with at least one
/// lowercase and one uppercase letter, one digit if `include_numbers` and one
/// punctuation character if `include_special`, at random positions.
pub fn generate_password_with<R>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> Result<SecretString, GeneratorError>
where
    R: Rng + ?Sized,
{
    let minimum = config.minimum_length();
    if config.length < minimum {
        #[cfg(feature = "tracing")]
        tracing::warn!(requested = config.length, minimum, "password length rejected");
        return Err(GeneratorError::InvalidLength {
            requested: config.length,
            minimum,
        });
    }

    let mut mandatory = vec![LOWERCASE, UPPERCASE];
    if config.include_numbers {
        mandatory.push(DIGITS);
    }
    if config.include_special {
        mandatory.push(PUNCTUATION);
    }

    let alphabet = config.alphabet();
    let mut password: Vec<u8> = Vec::with_capacity(config.length);
    // Charsets are non-empty constants, so `choose` always yields.
    password.extend(mandatory.iter().filter_map(|set| set.choose(rng)));
    password.extend((password.len()..config.length).filter_map(|_| alphabet.choose(rng)));
    password.shuffle(rng);

    let password: String = password.into_iter().map(char::from).collect();
    Ok(SecretString::new(password.into()))
}
