use fieldcodec::codec::{stored_to_json, typed_from_json};

use crate::cmd::util::{codec_for_decl, emit_json, parse_json_arg};

#[derive(clap::Args)]
pub struct Args {
	/// Field shape declaration, e.g. `list<char[]>`.
	#[arg(long)]
	pub shape: String,
	/// Typed value as JSON (one-character strings, `null`, nested arrays).
	pub value: String,
}

#[derive(serde::Serialize)]
struct EncodeJson {
	shape: String,
	stored: serde_json::Value,
}

/// Encode a typed JSON value and print its stored form.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args { shape, value } = args;
	let codec = codec_for_decl(&shape)?;
	let value = typed_from_json(&parse_json_arg(&value)?, codec.shape())?;
	let stored = codec.encode(&value)?;

	emit_json(&EncodeJson {
		shape: codec.shape().to_string(),
		stored: stored_to_json(&stored),
	})
}
