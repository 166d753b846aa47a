use serde_json::json;

use super::{stored_from_json, stored_to_json, typed_from_json, typed_to_json};
use crate::codec::{ArrayValue, CodecError, Scalar, ScalarKind, ShapeDescriptor, StoredValue, TypedValue};

#[test]
fn native_values_map_onto_stored_kinds() {
	let stored = stored_from_json(&json!([null, 97, "bc", [100]])).expect("json maps");
	assert_eq!(
		stored,
		StoredValue::Sequence(vec![
			StoredValue::Absent,
			StoredValue::RawScalar('a'),
			StoredValue::from("bc"),
			StoredValue::Sequence(vec![StoredValue::RawScalar('d')]),
		])
	);
	assert_eq!(stored_to_json(&stored), json!([null, 97, "bc", [100]]));
}

#[test]
fn unsupported_json_kinds_are_rejected() {
	assert_eq!(stored_from_json(&json!(true)), Err(CodecError::UnsupportedJson { kind: "bool" }));
	assert_eq!(stored_from_json(&json!({"a": 1})), Err(CodecError::UnsupportedJson { kind: "object" }));
	assert_eq!(stored_from_json(&json!(1.5)), Err(CodecError::UnsupportedJson { kind: "float" }));
}

#[test]
fn out_of_range_code_points_are_rejected() {
	for (json, text) in [(json!(-1), "-1"), (json!(0xD800), "55296"), (json!(0x11_0000), "1114112")] {
		assert_eq!(stored_from_json(&json), Err(CodecError::InvalidCodePoint { value: text.to_owned() }));
	}
}

#[test]
fn typed_values_render_as_strings_and_arrays() {
	assert_eq!(typed_to_json(&TypedValue::Scalar(Scalar::Char('b'))), json!("b"));
	assert_eq!(typed_to_json(&TypedValue::Scalar(Scalar::Absent)), json!(null));
	let nested = TypedValue::Array(ArrayValue::Nested(vec![ArrayValue::from_chars("5-"), ArrayValue::Flat(vec![Scalar::Absent])]));
	assert_eq!(typed_to_json(&nested), json!([["5", "-"], [null]]));
}

#[test]
fn typed_json_reads_back_for_each_route() {
	let cases = [
		(ShapeDescriptor::scalar(ScalarKind::NullableChar), json!("b")),
		(ShapeDescriptor::array(ScalarKind::UnboxedChar, 1), json!(["a", "b"])),
		(ShapeDescriptor::array(ScalarKind::NullableChar, 2), json!([["*", "$", "\u{4824}"], ["X", "y", "Z"]])),
		(ShapeDescriptor::collection(ScalarKind::UnboxedChar, 1), json!([["1", "d", "z"], []])),
	];
	for (shape, json) in cases {
		let typed = typed_from_json(&json, &shape).expect("typed json parses");
		assert_eq!(typed_to_json(&typed), json, "shape {shape}");
	}
}

#[test]
fn flat_array_accepts_plain_string() {
	let typed = typed_from_json(&json!("XyZ"), &ShapeDescriptor::array(ScalarKind::NullableChar, 1)).expect("string parses");
	assert_eq!(typed, TypedValue::Array(ArrayValue::from_chars("XyZ")));
}

#[test]
fn typed_scalar_must_be_one_character() {
	let err = typed_from_json(&json!("ab"), &ShapeDescriptor::scalar(ScalarKind::UnboxedChar)).expect_err("two chars must fail");
	assert!(matches!(err, CodecError::TypeMismatch { .. }));
}
