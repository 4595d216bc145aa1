//! Password strength meter library
//!
//! Scores passwords from 0 to 10 with human-readable feedback, and generates
//! strong random passwords.
//!
//! # Features
//!
//! - `async` (default): Enables debounced, cancellable evaluation over a channel
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_COMMON_PASSWORDS_PATH`: Custom common password list read by
//!   [`CommonPasswords::from_env`] (default: built-in list)
//!
//! # Example
//!
//! ```rust
//! use pwd_meter::{Evaluator, GeneratorConfig, generate_password};
//! use secrecy::{ExposeSecret, SecretString};
//!
//! let evaluator = Evaluator::new();
//! let password = SecretString::new("Tr0ub4dor&3".to_string().into());
//! let evaluation = evaluator.evaluate(&password);
//!
//! println!("Score: {}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//! for point in &evaluation.feedback.negative {
//!     println!("- {}", point);
//! }
//!
//! let suggestion = generate_password(&GeneratorConfig::default()).expect("default length is valid");
//! assert_eq!(suggestion.expose_secret().len(), 14);
//! ```

// Internal modules
mod common_passwords;
mod evaluator;
mod generator;
mod sections;
mod types;

#[cfg(feature = "async")]
mod async_eval;

// Public API
pub use common_passwords::{COMMON_PASSWORDS_PATH_ENV, CommonPasswords, CommonPasswordsError};
pub use evaluator::{Evaluator, evaluate_password_strength};
pub use generator::{GeneratorConfig, GeneratorError, generate_password, generate_password_with};
pub use sections::{
    MAX_CONSECUTIVE, MIN_SEQ_LENGTH, check_consecutive, check_date_pattern, check_sequential,
};
pub use types::{Feedback, MAX_SCORE, PasswordEvaluation, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use async_eval::{DEBOUNCE, evaluate_password_strength_tx};
