use crate::codec::array::{decode_array, encode_array};
use crate::codec::{ArrayValue, CodecError, Result, ScalarKind, StoredValue};

/// Expected-shape label for collection targets whose elements have `depth`.
pub(crate) fn collection_label(depth: u32) -> String {
	format!("collection(depth={depth})")
}

/// Encode a collection of arrays of `depth` as a `Sequence`.
pub fn encode_collection(items: &[ArrayValue], depth: u32) -> Result<StoredValue> {
	items
		.iter()
		.map(|item| encode_array(item, depth))
		.collect::<Result<Vec<_>>>()
		.map(StoredValue::Sequence)
}

/// Decode a stored `Sequence` into a collection of arrays of `depth`.
///
/// Only a sequence qualifies: a char sequence is an array source, never a collection source.
pub fn decode_collection(stored: &StoredValue, kind: ScalarKind, depth: u32) -> Result<Vec<ArrayValue>> {
	match stored {
		StoredValue::Absent => Ok(Vec::new()),
		StoredValue::Sequence(items) => items.iter().map(|item| decode_array(item, kind, depth)).collect(),
		StoredValue::RawScalar(_) | StoredValue::CharSequence(_) => Err(CodecError::type_mismatch(collection_label(depth), stored.kind())),
	}
}
