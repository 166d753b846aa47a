use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while resolving shapes and converting field values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CodecError {
	/// Scalar target received a source with more than one element.
	#[error("value size mismatch: expected {expected} element, got {actual}")]
	ValueSizeMismatch {
		/// Element count the scalar target accepts.
		expected: usize,
		/// Element count found in the stored value.
		actual: usize,
	},
	/// Stored value kind cannot satisfy the requested shape, or the shape itself is malformed.
	#[error("type mismatch: expected {expected}, got {actual}")]
	TypeMismatch {
		/// Requested shape label.
		expected: String,
		/// Stored kind (or descriptor) that was presented.
		actual: String,
	},
	/// Textual shape declaration could not be parsed.
	#[error("invalid shape declaration: {decl:?}")]
	InvalidShapeDecl {
		/// Original declaration text.
		decl: String,
	},
	/// Numeric code point is not a Unicode scalar value.
	#[error("invalid code point {value}")]
	InvalidCodePoint {
		/// Offending numeric value as written.
		value: String,
	},
	/// JSON value kind has no stored or typed counterpart.
	#[error("unsupported json {kind}")]
	UnsupportedJson {
		/// JSON kind that was rejected.
		kind: &'static str,
	},
	/// Record declared the same field name twice.
	#[error("duplicate field {field}")]
	DuplicateField {
		/// Repeated field name.
		field: String,
	},
	/// Conversion of one record field failed.
	#[error("field {field}: {source}")]
	Field {
		/// Field name being converted.
		field: String,
		/// Unmodified codec failure.
		source: Box<CodecError>,
	},
}

impl CodecError {
	pub(crate) fn type_mismatch(expected: impl Into<String>, actual: impl Into<String>) -> Self {
		let (expected, actual) = (expected.into(), actual.into());
		tracing::debug!(%expected, %actual, "stored value does not fit requested shape");
		Self::TypeMismatch { expected, actual }
	}

	/// Strip record-level field context and return the underlying codec failure.
	pub fn root_cause(&self) -> &CodecError {
		match self {
			Self::Field { source, .. } => source.root_cause(),
			other => other,
		}
	}
}
