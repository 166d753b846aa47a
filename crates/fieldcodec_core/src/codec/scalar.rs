use crate::codec::{CodecError, Result, Scalar, ScalarKind, StoredValue};

/// Expected-shape label for scalar targets.
pub(crate) const SCALAR_LABEL: &str = "scalar";

/// Encode one scalar; absent values become `Absent`.
pub fn encode_scalar(value: Scalar) -> StoredValue {
	match value {
		Scalar::Char(ch) => StoredValue::RawScalar(ch),
		Scalar::Absent => StoredValue::Absent,
	}
}

/// Decode one stored value into a scalar of `kind`.
///
/// Empty sources (absent, `""`, `[]`) decode to the kind's empty value. Sources holding two or more
/// elements fail with [`CodecError::ValueSizeMismatch`] rather than picking one.
pub fn decode_scalar(stored: &StoredValue, kind: ScalarKind) -> Result<Scalar> {
	match stored {
		StoredValue::Absent => Ok(kind.empty_value()),
		StoredValue::RawScalar(ch) => Ok(Scalar::Char(*ch)),
		StoredValue::CharSequence(text) => {
			let mut chars = text.chars();
			match (chars.next(), chars.next()) {
				(None, _) => Ok(kind.empty_value()),
				(Some(ch), None) => Ok(Scalar::Char(ch)),
				(Some(_), Some(_)) => Err(size_mismatch(kind, text.chars().count())),
			}
		}
		StoredValue::Sequence(items) => match items.as_slice() {
			[] => Ok(kind.empty_value()),
			[only] => decode_scalar(only, kind),
			_ => Err(size_mismatch(kind, items.len())),
		},
	}
}

fn size_mismatch(kind: ScalarKind, actual: usize) -> CodecError {
	tracing::debug!(?kind, actual, "scalar decode rejected multi-element source");
	CodecError::ValueSizeMismatch { expected: 1, actual }
}

#[cfg(test)]
mod tests;
