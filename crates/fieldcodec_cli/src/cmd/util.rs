use fieldcodec::codec::{FieldCodec, parse_shape_decl};

use crate::cmd::Result;

/// Parse a shape declaration argument into a bound field codec.
pub(crate) fn codec_for_decl(decl: &str) -> Result<FieldCodec> {
	let shape = parse_shape_decl(decl)?;
	tracing::debug!(decl, %shape, "parsed shape argument");
	Ok(FieldCodec::new(shape)?)
}

/// Parse a JSON literal argument.
pub(crate) fn parse_json_arg(raw: &str) -> Result<serde_json::Value> {
	Ok(serde_json::from_str(raw)?)
}

/// Print a serializable value as one line of JSON.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	println!("{}", serde_json::to_string(value)?);
	Ok(())
}
