use super::{decode_scalar, encode_scalar};
use crate::codec::{CodecError, Scalar, ScalarKind, StoredValue};

#[test]
fn single_char_round_trips_through_raw_scalar() {
	let stored = encode_scalar(Scalar::Char('a'));
	assert_eq!(stored, StoredValue::RawScalar('a'));
	assert_eq!(decode_scalar(&stored, ScalarKind::UnboxedChar), Ok(Scalar::Char('a')));
}

#[test]
fn code_points_round_trip_for_both_kinds() {
	for ch in ['\0', 'a', ' ', '*', '\u{4824}', '\u{8888}', '\u{10FFFF}', '😀'] {
		for kind in [ScalarKind::UnboxedChar, ScalarKind::NullableChar] {
			let stored = encode_scalar(Scalar::Char(ch));
			assert_eq!(decode_scalar(&stored, kind), Ok(Scalar::Char(ch)), "code point {:?}", ch);
		}
	}
}

#[test]
fn absent_nullable_encodes_to_absent() {
	assert_eq!(encode_scalar(Scalar::Absent), StoredValue::Absent);
}

#[test]
fn empty_sources_decode_to_zero_for_unboxed() {
	for stored in [StoredValue::Absent, StoredValue::from(""), StoredValue::Sequence(Vec::new())] {
		assert_eq!(decode_scalar(&stored, ScalarKind::UnboxedChar), Ok(Scalar::ZERO));
	}
}

#[test]
fn empty_sources_decode_to_absent_for_nullable() {
	for stored in [StoredValue::Absent, StoredValue::from(""), StoredValue::Sequence(Vec::new())] {
		assert_eq!(decode_scalar(&stored, ScalarKind::NullableChar), Ok(Scalar::Absent));
	}
}

#[test]
fn single_char_string_decodes_to_that_char() {
	assert_eq!(decode_scalar(&StoredValue::from("a"), ScalarKind::UnboxedChar), Ok(Scalar::Char('a')));
	assert_eq!(decode_scalar(&StoredValue::from("a"), ScalarKind::NullableChar), Ok(Scalar::Char('a')));
}

#[test]
fn multi_char_string_is_rejected_with_its_length() {
	for len in [2_usize, 3, 100] {
		let text: String = "ab".chars().cycle().take(len).collect();
		for kind in [ScalarKind::UnboxedChar, ScalarKind::NullableChar] {
			let err = decode_scalar(&StoredValue::CharSequence(text.clone()), kind).expect_err("multi-char string must fail");
			assert_eq!(err, CodecError::ValueSizeMismatch { expected: 1, actual: len });
		}
	}
}

#[test]
fn multi_char_length_counts_code_points_not_bytes() {
	let err = decode_scalar(&StoredValue::from("\u{8888}\u{4824}"), ScalarKind::UnboxedChar).expect_err("two chars must fail");
	assert_eq!(err, CodecError::ValueSizeMismatch { expected: 1, actual: 2 });
}

#[test]
fn single_element_sequence_recurses_into_element() {
	let stored = StoredValue::Sequence(vec![StoredValue::from("z")]);
	assert_eq!(decode_scalar(&stored, ScalarKind::UnboxedChar), Ok(Scalar::Char('z')));

	let stored = StoredValue::Sequence(vec![StoredValue::Absent]);
	assert_eq!(decode_scalar(&stored, ScalarKind::NullableChar), Ok(Scalar::Absent));
}

#[test]
fn multi_element_sequence_is_rejected_with_its_length() {
	let stored = StoredValue::Sequence(vec!['a'.into(), 'b'.into(), 'c'.into()]);
	let err = decode_scalar(&stored, ScalarKind::NullableChar).expect_err("sequence of three must fail");
	assert_eq!(err, CodecError::ValueSizeMismatch { expected: 1, actual: 3 });
}

#[test]
fn nested_single_element_propagates_inner_mismatch() {
	let stored = StoredValue::Sequence(vec![StoredValue::from("ab")]);
	let err = decode_scalar(&stored, ScalarKind::UnboxedChar).expect_err("inner string must fail");
	assert_eq!(err, CodecError::ValueSizeMismatch { expected: 1, actual: 2 });
}
