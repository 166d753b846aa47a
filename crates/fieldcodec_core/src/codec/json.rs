use serde_json::{Number, Value as JsonValue};

use crate::codec::dispatch::Route;
use crate::codec::{ArrayValue, CodecError, Result, Scalar, ShapeDescriptor, StoredValue, TypedValue};

/// Map a JSON document value onto the stored value model.
///
/// `null` is absent, integers are code points, strings are char sequences, arrays are sequences.
pub fn stored_from_json(json: &JsonValue) -> Result<StoredValue> {
	match json {
		JsonValue::Null => Ok(StoredValue::Absent),
		JsonValue::Number(number) => code_point_from_number(number).map(StoredValue::RawScalar),
		JsonValue::String(text) => Ok(StoredValue::CharSequence(text.clone())),
		JsonValue::Array(items) => items.iter().map(stored_from_json).collect::<Result<Vec<_>>>().map(StoredValue::Sequence),
		JsonValue::Bool(_) | JsonValue::Object(_) => Err(CodecError::UnsupportedJson { kind: json_kind(json) }),
	}
}

/// Render a stored value as JSON using the same mapping as [`stored_from_json`].
pub fn stored_to_json(stored: &StoredValue) -> JsonValue {
	match stored {
		StoredValue::Absent => JsonValue::Null,
		StoredValue::RawScalar(ch) => serde_json::json!(u32::from(*ch)),
		StoredValue::CharSequence(text) => serde_json::json!(text),
		StoredValue::Sequence(items) => JsonValue::Array(items.iter().map(stored_to_json).collect()),
	}
}

/// Render a typed value: scalars as one-character strings or `null`, arrays as nested JSON arrays.
pub fn typed_to_json(value: &TypedValue) -> JsonValue {
	match value {
		TypedValue::Scalar(scalar) => scalar_to_json(*scalar),
		TypedValue::Array(array) => array_to_json(array),
		TypedValue::Collection(items) => JsonValue::Array(items.iter().map(array_to_json).collect()),
	}
}

/// Read a typed value for `shape` back from its [`typed_to_json`] rendering.
///
/// Depth-1 arrays may also be written as a plain string.
pub fn typed_from_json(json: &JsonValue, shape: &ShapeDescriptor) -> Result<TypedValue> {
	match Route::for_shape(shape)? {
		Route::Scalar => scalar_from_json(json).map(TypedValue::Scalar),
		Route::Array { depth } => array_from_json(json, depth).map(TypedValue::Array),
		Route::Collection { depth } => match json {
			JsonValue::Array(items) => items
				.iter()
				.map(|item| array_from_json(item, depth))
				.collect::<Result<Vec<_>>>()
				.map(TypedValue::Collection),
			other => Err(CodecError::type_mismatch("json array of arrays", json_kind(other))),
		},
	}
}

fn code_point_from_number(number: &Number) -> Result<char> {
	if number.is_f64() {
		return Err(CodecError::UnsupportedJson { kind: "float" });
	}
	number
		.as_u64()
		.and_then(|value| u32::try_from(value).ok())
		.and_then(char::from_u32)
		.ok_or_else(|| CodecError::InvalidCodePoint { value: number.to_string() })
}

fn scalar_to_json(scalar: Scalar) -> JsonValue {
	match scalar {
		Scalar::Char(ch) => JsonValue::String(ch.to_string()),
		Scalar::Absent => JsonValue::Null,
	}
}

fn array_to_json(array: &ArrayValue) -> JsonValue {
	match array {
		ArrayValue::Flat(items) => JsonValue::Array(items.iter().copied().map(scalar_to_json).collect()),
		ArrayValue::Nested(items) => JsonValue::Array(items.iter().map(array_to_json).collect()),
	}
}

fn scalar_from_json(json: &JsonValue) -> Result<Scalar> {
	match json {
		JsonValue::Null => Ok(Scalar::Absent),
		JsonValue::String(text) => {
			let mut chars = text.chars();
			match (chars.next(), chars.next()) {
				(Some(ch), None) => Ok(Scalar::Char(ch)),
				_ => Err(CodecError::type_mismatch("one-character json string", format!("string of length {}", text.chars().count()))),
			}
		}
		other => Err(CodecError::type_mismatch("one-character json string", json_kind(other))),
	}
}

fn array_from_json(json: &JsonValue, depth: u32) -> Result<ArrayValue> {
	match (json, depth) {
		(JsonValue::String(text), 1) => Ok(ArrayValue::from_chars(text)),
		(JsonValue::Array(items), 1) => items.iter().map(scalar_from_json).collect::<Result<Vec<_>>>().map(ArrayValue::Flat),
		(JsonValue::Array(items), depth) => items
			.iter()
			.map(|item| array_from_json(item, depth - 1))
			.collect::<Result<Vec<_>>>()
			.map(ArrayValue::Nested),
		(other, depth) => Err(CodecError::type_mismatch(format!("json array(depth={depth})"), json_kind(other))),
	}
}

fn json_kind(json: &JsonValue) -> &'static str {
	match json {
		JsonValue::Null => "null",
		JsonValue::Bool(_) => "bool",
		JsonValue::Number(_) => "number",
		JsonValue::String(_) => "string",
		JsonValue::Array(_) => "array",
		JsonValue::Object(_) => "object",
	}
}

#[cfg(test)]
mod tests;
