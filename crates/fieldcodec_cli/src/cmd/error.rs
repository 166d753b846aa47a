use fieldcodec::codec::CodecError;
use thiserror::Error;

/// Command result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Shape, conversion, or JSON mapping failure.
	#[error(transparent)]
	Codec(#[from] CodecError),
	/// Argument was not valid JSON.
	#[error("invalid json argument: {0}")]
	Json(#[from] serde_json::Error),
	/// Encode-then-decode produced a different value.
	#[error("round trip mismatch: decoded {decoded}")]
	RoundTripMismatch {
		/// Rendered decoded value.
		decoded: String,
	},
}
