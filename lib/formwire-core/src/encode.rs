//! The form encoder.

use tracing::{debug, trace};

use crate::{EncodeConfig, Error, FieldValue, FormField, FormValue, FormValues, Result};

/// Encode a struct into form values using the default configuration.
///
/// Floats are rendered in their shortest round-trip form.
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `value` is not a struct.
///
/// # Example
///
/// ```
/// use formwire_core::{FieldValue, FormValue, RecordBuilder, encode};
///
/// struct Search {
///     query: String,
///     page: u32,
/// }
///
/// impl FormValue for Search {
///     fn form_value(&self) -> FieldValue<'_> {
///         RecordBuilder::new()
///             .field("q", &self.query)
///             .field("page,omitempty", &self.page)
///             .build()
///     }
/// }
///
/// let search = Search { query: "rust".to_string(), page: 0 };
/// let values = encode(&search).expect("encode");
/// assert_eq!(values.to_urlencoded().expect("render"), "q=rust");
///
/// assert!(encode(&"not a struct").is_err());
/// ```
pub fn encode<T: FormValue + ?Sized>(value: &T) -> Result<FormValues> {
    encode_with(value, &EncodeConfig::default())
}

/// Encode a struct into form values.
///
/// Each field carrying a non-empty wire name contributes at most one value,
/// in declaration order. Nested structs, collections and maps are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidInputKind`] if `value` is not a struct. A
/// top-level `Option` is rejected as well, even when it holds a struct.
pub fn encode_with<T: FormValue + ?Sized>(value: &T, config: &EncodeConfig) -> Result<FormValues> {
    let fields = match value.form_value() {
        FieldValue::Record(fields) => fields,
        other => {
            debug!(kind = %other.kind(), "rejecting non-struct form input");
            return Err(Error::invalid_input_kind(other.kind()));
        }
    };

    let mut values = FormValues::new();
    for field in &fields {
        if let Some(encoded) = encode_field(field, config) {
            values.add(field.tag.wire_name, encoded);
        }
    }

    trace!(
        fields = fields.len(),
        encoded = values.len(),
        precision = %config.float_precision,
        "encoded form values"
    );
    Ok(values)
}

/// Encode one field, or `None` when it contributes nothing.
fn encode_field(field: &FormField<'_>, config: &EncodeConfig) -> Option<String> {
    let FormField { tag, value } = field;
    if !tag.is_named() {
        return None;
    }
    let omit_empty = tag.omit_empty;

    let value = match value {
        FieldValue::Optional(None) if omit_empty => return None,
        FieldValue::Optional(None) => return Some(String::new()),
        FieldValue::Optional(Some(inner)) => &**inner,
        other => other,
    };

    match *value {
        FieldValue::Str(s) if s.is_empty() => zero("", omit_empty),
        FieldValue::Str(s) => Some(s.to_string()),
        FieldValue::Int(0) | FieldValue::Uint(0) => zero("0", omit_empty),
        FieldValue::Int(i) => Some(i.to_string()),
        FieldValue::Uint(u) => Some(u.to_string()),
        FieldValue::Bool(true) => Some("true".to_string()),
        FieldValue::Bool(false) => zero("false", omit_empty),
        FieldValue::F32(f) if f == 0.0 => zero("0", omit_empty),
        FieldValue::F32(f) => Some(config.float_precision.format_f32(f)),
        FieldValue::F64(f) if f == 0.0 => zero("0", omit_empty),
        FieldValue::F64(f) => Some(config.float_precision.format_f64(f)),
        FieldValue::Optional(_)
        | FieldValue::Record(_)
        | FieldValue::Sequence
        | FieldValue::Map
        | FieldValue::Unit => {
            debug!(
                field = tag.wire_name,
                kind = %value.kind(),
                "skipping form field of unsupported kind"
            );
            None
        }
    }
}

/// Canonical zero string, unless the field omits empty values.
fn zero(canonical: &str, omit_empty: bool) -> Option<String> {
    (!omit_empty).then(|| canonical.to_string())
}

#[cfg(test)]
mod tests {
    use assert2::{check, let_assert};

    use super::*;
    use crate::{FieldTag, FloatPrecision, RecordBuilder, ValueKind};

    struct Pair {
        string_field: String,
        int_field: i32,
        omit_empty: bool,
    }

    impl FormValue for Pair {
        fn form_value(&self) -> FieldValue<'_> {
            RecordBuilder::new()
                .field(FieldTag::new("str_field", self.omit_empty), &self.string_field)
                .field(FieldTag::new("int_field", self.omit_empty), &self.int_field)
                .build()
        }
    }

    fn pair(string_field: &str, int_field: i32, omit_empty: bool) -> Pair {
        Pair {
            string_field: string_field.to_string(),
            int_field,
            omit_empty,
        }
    }

    fn field(tag: &'static str, value: FieldValue<'static>) -> FormField<'static> {
        FormField {
            tag: FieldTag::parse(tag),
            value,
        }
    }

    fn encode_one(tag: &'static str, value: FieldValue<'static>) -> Option<String> {
        encode_field(&field(tag, value), &EncodeConfig::default())
    }

    #[test]
    fn encodes_tagged_fields_in_order() {
        let values = encode(&pair("abc", 123, false)).expect("encode");
        let pairs: Vec<_> = values.pairs().collect();
        assert_eq!(pairs, [("str_field", "abc"), ("int_field", "123")]);
    }

    #[test]
    fn empty_string_without_omit_empty() {
        let values = encode(&pair("", 123, false)).expect("encode");
        let pairs: Vec<_> = values.pairs().collect();
        assert_eq!(pairs, [("str_field", ""), ("int_field", "123")]);
    }

    #[test]
    fn zero_int_with_omit_empty() {
        let values = encode(&pair("abc", 0, true)).expect("encode");
        let pairs: Vec<_> = values.pairs().collect();
        assert_eq!(pairs, [("str_field", "abc")]);
    }

    #[test]
    fn encoding_is_idempotent() {
        let input = pair("abc", 7, false);
        let config = EncodeConfig::builder().fixed_float_digits(1).build();
        check!(encode_with(&input, &config).ok() == encode_with(&input, &config).ok());
    }

    #[test]
    fn rejects_non_struct_inputs() {
        let_assert!(Err(err) = encode("a string"));
        check!(err.kind() == Some(ValueKind::Str));

        let_assert!(Err(err) = encode(&42_i64));
        check!(err.kind() == Some(ValueKind::Int));

        let_assert!(Err(err) = encode(&vec![pair("a", 1, false)]));
        check!(err.kind() == Some(ValueKind::Sequence));

        let map = std::collections::HashMap::<String, String>::new();
        let_assert!(Err(err) = encode(&map));
        check!(err.kind() == Some(ValueKind::Map));
    }

    #[test]
    fn rejects_top_level_option() {
        let_assert!(Err(err) = encode(&Some(pair("abc", 1, false))));
        check!(err.is_invalid_input_kind());
        check!(err.kind() == Some(ValueKind::Optional));

        let none: Option<Pair> = None;
        let_assert!(Err(err) = encode(&none));
        check!(err.kind() == Some(ValueKind::Optional));
    }

    #[test]
    fn references_and_boxes_are_transparent() {
        let input = Box::new(pair("abc", 1, false));
        check!(encode(&&input).is_ok());
    }

    #[test]
    fn skips_unnamed_fields() {
        check!(encode_one("", FieldValue::Str("abc")) == None);
        check!(encode_one(",omitempty", FieldValue::Int(3)) == None);
        check!(encode_one("  ", FieldValue::Bool(true)) == None);
    }

    #[test]
    fn zero_values_without_omit_empty() {
        check!(encode_one("s", FieldValue::Str("")) == Some(String::new()));
        check!(encode_one("i", FieldValue::Int(0)) == Some("0".to_string()));
        check!(encode_one("u", FieldValue::Uint(0)) == Some("0".to_string()));
        check!(encode_one("b", FieldValue::Bool(false)) == Some("false".to_string()));
        check!(encode_one("f", FieldValue::F32(0.0)) == Some("0".to_string()));
        check!(encode_one("d", FieldValue::F64(-0.0)) == Some("0".to_string()));
    }

    #[test]
    fn zero_values_with_omit_empty() {
        check!(encode_one("s,omitempty", FieldValue::Str("")) == None);
        check!(encode_one("i,omitempty", FieldValue::Int(0)) == None);
        check!(encode_one("u,omitempty", FieldValue::Uint(0)) == None);
        check!(encode_one("b,omitempty", FieldValue::Bool(false)) == None);
        check!(encode_one("f,omitempty", FieldValue::F32(0.0)) == None);
        check!(encode_one("d,omitempty", FieldValue::F64(0.0)) == None);
    }

    #[test]
    fn non_zero_scalars() {
        check!(encode_one("i", FieldValue::Int(-128)) == Some("-128".to_string()));
        check!(
            encode_one("u", FieldValue::Uint(u128::from(u64::MAX)))
                == Some("18446744073709551615".to_string())
        );
        check!(encode_one("b,omitempty", FieldValue::Bool(true)) == Some("true".to_string()));
        check!(encode_one("f", FieldValue::F32(1.23)) == Some("1.23".to_string()));
        check!(encode_one("d", FieldValue::F64(2.34)) == Some("2.34".to_string()));
    }

    #[test]
    fn null_optional() {
        check!(encode_one("p", FieldValue::Optional(None)) == Some(String::new()));
        check!(encode_one("p,omitempty", FieldValue::Optional(None)) == None);
    }

    #[test]
    fn set_optional_behaves_like_its_value() {
        let set = |value| FieldValue::Optional(Some(Box::new(value)));

        check!(encode_one("p", set(FieldValue::Int(0))) == Some("0".to_string()));
        check!(encode_one("p,omitempty", set(FieldValue::Int(0))) == None);
        check!(encode_one("p,omitempty", set(FieldValue::Str(""))) == None);
        check!(encode_one("p", set(FieldValue::Bool(false))) == Some("false".to_string()));
        check!(encode_one("p,omitempty", set(FieldValue::Uint(9))) == Some("9".to_string()));
    }

    #[test]
    fn unsupported_kinds_are_skipped() {
        let nested = FieldValue::Record(vec![field("inner", FieldValue::Str("x"))]);
        check!(encode_one("nested", nested) == None);
        check!(encode_one("seq", FieldValue::Sequence) == None);
        check!(encode_one("map", FieldValue::Map) == None);
        check!(encode_one("unit", FieldValue::Unit) == None);

        let double = FieldValue::Optional(Some(Box::new(FieldValue::Optional(None))));
        check!(encode_one("double", double) == None);
    }

    #[test]
    fn float_precision_is_configurable() {
        let fixed = EncodeConfig::builder()
            .float_precision(FloatPrecision::from_digits(2))
            .build();
        let shortest = EncodeConfig::builder()
            .float_precision(FloatPrecision::from_digits(-1))
            .build();

        let encode_f = |value, config: &EncodeConfig| encode_field(&field("f", value), config);

        check!(encode_f(FieldValue::F64(1.2345), &fixed) == Some("1.23".to_string()));
        check!(encode_f(FieldValue::F64(1.5), &shortest) == Some("1.5".to_string()));
        check!(encode_f(FieldValue::F32(0.0), &fixed) == Some("0".to_string()));
    }

    #[test]
    fn non_finite_floats() {
        let fixed = EncodeConfig::builder().fixed_float_digits(2).build();

        check!(encode_one("f", FieldValue::F64(f64::INFINITY)) == Some("+Inf".to_string()));
        check!(encode_one("f", FieldValue::F64(f64::NEG_INFINITY)) == Some("-Inf".to_string()));
        check!(encode_one("f,omitempty", FieldValue::F64(f64::NAN)) == Some("NaN".to_string()));
        check!(encode_one("f", FieldValue::F32(f32::NEG_INFINITY)) == Some("-Inf".to_string()));
        check!(
            encode_field(&field("f", FieldValue::F64(f64::INFINITY)), &fixed)
                == Some("+Inf".to_string())
        );
    }

    #[test]
    fn multimap_rendering() {
        let values = encode(&pair("a b&c", 5, false)).expect("encode");
        insta::assert_snapshot!(
            values.to_urlencoded().expect("render"),
            @"str_field=a+b%26c&int_field=5"
        );
    }
}
