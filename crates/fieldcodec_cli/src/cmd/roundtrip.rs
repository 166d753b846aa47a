use fieldcodec::codec::{stored_to_json, typed_from_json, typed_to_json};

use crate::cmd::CliError;
use crate::cmd::util::{codec_for_decl, emit_json, parse_json_arg};

#[derive(clap::Args)]
pub struct Args {
	/// Field shape declaration.
	#[arg(long)]
	pub shape: String,
	/// Typed value as JSON.
	pub value: String,
}

#[derive(serde::Serialize)]
struct RoundTripJson {
	shape: String,
	stored: serde_json::Value,
	decoded: serde_json::Value,
	equal: bool,
}

/// Encode then decode a typed value; fails when the decoded value differs.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args { shape, value } = args;
	let codec = codec_for_decl(&shape)?;
	let value = typed_from_json(&parse_json_arg(&value)?, codec.shape())?;
	let stored = codec.encode(&value)?;
	let decoded = codec.decode(&stored)?;
	let equal = decoded == value;

	let decoded = typed_to_json(&decoded);
	emit_json(&RoundTripJson {
		shape: codec.shape().to_string(),
		stored: stored_to_json(&stored),
		decoded: decoded.clone(),
		equal,
	})?;

	if equal {
		Ok(())
	} else {
		Err(CliError::RoundTripMismatch { decoded: decoded.to_string() })
	}
}
