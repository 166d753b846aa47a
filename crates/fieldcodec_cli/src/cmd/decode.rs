use fieldcodec::codec::{stored_from_json, typed_to_json};

use crate::cmd::util::{codec_for_decl, emit_json, parse_json_arg};

#[derive(clap::Args)]
pub struct Args {
	/// Field shape declaration, e.g. `char?[]`.
	#[arg(long)]
	pub shape: String,
	/// Stored value as JSON (`null`, code point, string, or array).
	pub stored: String,
}

#[derive(serde::Serialize)]
struct DecodeJson {
	shape: String,
	value: serde_json::Value,
}

/// Decode a stored JSON value into the typed shape and print it.
pub fn run(args: Args) -> crate::cmd::Result<()> {
	let Args { shape, stored } = args;
	let codec = codec_for_decl(&shape)?;
	let stored = stored_from_json(&parse_json_arg(&stored)?)?;
	let value = codec.decode(&stored)?;

	emit_json(&DecodeJson {
		shape: codec.shape().to_string(),
		value: typed_to_json(&value),
	})
}
