//! Common password set
//!
//! Holds the denylist of known-weak passwords used by the evaluator.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable pointing to a newline-separated password list.
pub const COMMON_PASSWORDS_PATH_ENV: &str = "PWD_COMMON_PASSWORDS_PATH";

const BUILTIN: &[&str] = &[
    "password", "123456", "qwerty", "abc123", "letmein", "admin", "welcome",
    "monkey", "password1", "12345678", "123456789", "baseball", "football",
    "jennifer", "iloveyou", "1234567", "1234567890", "superman", "sunshine",
];

#[derive(Error, Debug)]
pub enum CommonPasswordsError {
    #[error("Common password file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read common password file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Common password file is empty")]
    EmptyFile,
}

/// Read-only, case-insensitive set of known-weak passwords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommonPasswords {
    entries: HashSet<String>,
}

impl CommonPasswords {
    /// Builds a set from arbitrary entries.
    ///
    /// Entries are trimmed and lowercased; blank entries are dropped.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let entries = entries
            .into_iter()
            .map(|e| e.as_ref().trim().to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self { entries }
    }

    /// The built-in list of the most common passwords.
    pub fn builtin() -> Self {
        Self::new(BUILTIN)
    }

    /// Loads the set from a file with one password per line.
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - File does not exist
    /// - File cannot be read
    /// - File has no non-blank line
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CommonPasswordsError> {
        let path = path.as_ref();

        if !path.exists() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: FileNotFound {:?}", path);
            return Err(CommonPasswordsError::FileNotFound(path.to_path_buf()));
        }

        let content = std::fs::read_to_string(path)?;

        if content.trim().is_empty() {
            #[cfg(feature = "tracing")]
            tracing::error!("Common password list FAILED: Empty file {:?}", path);
            return Err(CommonPasswordsError::EmptyFile);
        }

        let set = Self::new(content.lines());

        #[cfg(feature = "tracing")]
        tracing::info!("Common password list loaded: {} passwords from {:?}", set.len(), path);

        Ok(set)
    }

    /// Loads the set from `PWD_COMMON_PASSWORDS_PATH`, or falls back to
    /// [`CommonPasswords::builtin`] when the variable is unset.
    pub fn from_env() -> Result<Self, CommonPasswordsError> {
        match std::env::var_os(COMMON_PASSWORDS_PATH_ENV) {
            Some(path) => Self::from_path(PathBuf::from(path)),
            None => Ok(Self::builtin()),
        }
    }

    /// Case-insensitive membership test of the full password.
    pub fn contains(&self, password: &str) -> bool {
        self.entries.contains(&password.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for CommonPasswords {
    fn default() -> Self {
        Self::builtin()
    }
}
