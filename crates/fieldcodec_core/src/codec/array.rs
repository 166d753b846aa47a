use crate::codec::scalar::{decode_scalar, encode_scalar};
use crate::codec::{ArrayValue, CodecError, Result, Scalar, ScalarKind, StoredValue};

/// Expected-shape label for array targets of `depth`.
pub(crate) fn array_label(depth: u32) -> String {
	format!("array(depth={depth})")
}

const ELEMENT_LABEL: &str = "single-character array element";

/// Encode an array of `depth` into nested `Sequence` values.
///
/// The array variant must agree with `depth`: `Flat` at depth 1, `Nested` above it.
pub fn encode_array(value: &ArrayValue, depth: u32) -> Result<StoredValue> {
	match (value, depth) {
		(ArrayValue::Flat(items), 1) => Ok(StoredValue::Sequence(items.iter().copied().map(encode_scalar).collect())),
		(ArrayValue::Nested(items), depth) if depth >= 2 => items
			.iter()
			.map(|item| encode_array(item, depth - 1))
			.collect::<Result<Vec<_>>>()
			.map(StoredValue::Sequence),
		(ArrayValue::Flat(_), depth) => Err(CodecError::type_mismatch(array_label(depth), "flat array")),
		(ArrayValue::Nested(_), depth) => Err(CodecError::type_mismatch(array_label(depth), "nested array")),
	}
}

/// Decode a stored value into an array of `depth` holding `kind` scalars.
///
/// A char sequence and a sequence are both accepted at every level; absent decodes to an empty
/// array. Element counts are never checked.
pub fn decode_array(stored: &StoredValue, kind: ScalarKind, depth: u32) -> Result<ArrayValue> {
	if depth == 0 {
		return Err(CodecError::type_mismatch(array_label(depth), "scalar descriptor"));
	}
	if matches!(stored, StoredValue::Absent) {
		return Ok(ArrayValue::empty(depth));
	}
	let Some(elements) = stored.elements() else {
		return Err(CodecError::type_mismatch(array_label(depth), stored.kind()));
	};

	if depth == 1 {
		elements
			.map(|element| decode_element(&element, kind))
			.collect::<Result<Vec<_>>>()
			.map(ArrayValue::Flat)
	} else {
		elements
			.map(|element| decode_array(&element, kind, depth - 1))
			.collect::<Result<Vec<_>>>()
			.map(ArrayValue::Nested)
	}
}

/// Decode one depth-1 slot; grouped elements of two or more characters are rejected.
fn decode_element(element: &StoredValue, kind: ScalarKind) -> Result<Scalar> {
	match element.sequence_len() {
		Some(len) if len >= 2 => Err(CodecError::type_mismatch(ELEMENT_LABEL, format!("{} of length {len}", element.kind()))),
		_ => decode_scalar(element, kind),
	}
}
