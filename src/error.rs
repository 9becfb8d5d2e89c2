//! Error types for the faktory crate.
//!
//! This module defines the error types used throughout the crate.

use thiserror::Error;

/// Errors that can occur while resolving or persisting factory records.
#[derive(Debug, Error)]
pub enum FaktoryError {
	/// The host persistence call reported a failure.
	#[error("Persistence error: {0}")]
	Persistence(String),

	/// Validation failed for a specific field.
	#[error("Validation error: {field}: {message}")]
	Validation {
		/// Field that failed validation.
		field: String,
		/// Validation error message.
		message: String,
	},

	/// A definition file exists but does not hold a usable definition.
	#[error("Invalid definition: {0}")]
	InvalidDefinition(String),

	/// I/O operation failed.
	#[error("IO error: {0}")]
	IoError(#[from] std::io::Error),

	/// JSON serialization/deserialization error.
	#[error("JSON error: {0}")]
	JsonError(#[from] serde_json::Error),
}

/// Result type alias for faktory operations.
pub type FaktoryResult<T> = Result<T, FaktoryError>;
