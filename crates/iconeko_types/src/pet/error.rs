//! Error types for the pet simulation.

use thiserror::Error;

/// Errors raised when building a simulation.
///
/// A running simulation has no error channel; everything that can go wrong is
/// caught here, at construction time.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PetError {
	/// A configuration field holds a value the simulation cannot run with
	#[error("invalid config field `{field}`: {message}")]
	InvalidConfig {
		/// Field name
		field: &'static str,
		/// Description of the problem
		message: String,
	},

	/// An unknown state value
	#[error("invalid state value: {0}")]
	InvalidState(u8),

	/// An unknown behavior name
	#[error("unknown behavior: {0}")]
	UnknownBehavior(String),
}

impl PetError {
	/// Shorthand for [`PetError::InvalidConfig`].
	pub fn invalid_config(field: &'static str, message: impl Into<String>) -> Self {
		Self::InvalidConfig {
			field,
			message: message.into(),
		}
	}
}
