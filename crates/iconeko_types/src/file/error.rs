//! Error types for container parsing and icon decoding.

use std::fmt::Display;

use thiserror::Error;

/// Kind of data an error was raised for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FileType {
	/// MZ/PE/NE executable container
	Exe,
	/// Icon container (`.ico`)
	Ico,
	/// Raw device-independent bitmap
	Bitmap,
}

impl Display for FileType {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Exe => write!(f, "EXE"),
			Self::Ico => write!(f, "ICO"),
			Self::Bitmap => write!(f, "DIB"),
		}
	}
}

/// Errors raised while reading containers or decoding icon resources.
///
/// Extraction itself never surfaces these for individual resources; they are
/// logged and the resource is skipped. Only failing to read the input is
/// returned to the caller.
#[derive(Debug, Error)]
pub enum IconFileError {
	/// Not enough data to parse
	#[error("{file_type}: insufficient data, expected {expected} bytes, got {actual} bytes")]
	InsufficientData {
		/// Data kind
		file_type: FileType,
		/// Expected number of bytes
		expected: usize,
		/// Actual number of bytes
		actual: usize,
	},

	/// A computed offset or length points outside the buffer
	#[error("{file_type}: range {offset:#X}+{length:#X} exceeds buffer of {available} bytes")]
	OutOfRange {
		/// Data kind
		file_type: FileType,
		/// Start of the requested range
		offset: usize,
		/// Length of the requested range
		length: usize,
		/// Buffer length
		available: usize,
	},

	/// A header field holds a value the decoder refuses to repair
	#[error("{file_type}: invalid header: {message}")]
	InvalidHeader {
		/// Data kind
		file_type: FileType,
		/// Description of the problem
		message: String,
	},

	/// IO error
	#[error(transparent)]
	IOError(#[from] std::io::Error),
}

impl IconFileError {
	/// Shorthand for [`IconFileError::InsufficientData`].
	pub fn insufficient_data(file_type: FileType, expected: usize, actual: usize) -> Self {
		Self::InsufficientData {
			file_type,
			expected,
			actual,
		}
	}

	/// Shorthand for [`IconFileError::OutOfRange`].
	pub fn out_of_range(file_type: FileType, offset: usize, length: usize, available: usize) -> Self {
		Self::OutOfRange {
			file_type,
			offset,
			length,
			available,
		}
	}
}
