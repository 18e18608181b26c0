//! Field metadata and record construction.

use crate::{FieldValue, FormValue};

/// Marker token enabling omit-empty behavior in a field tag.
pub const OMIT_EMPTY: &str = "omitempty";

/// Parsed form metadata of a single field.
///
/// A tag is written `"wire_name"` or `"wire_name,omitempty"`. Parsing never
/// fails: an empty wire name means the field is not encoded, and anything
/// other than exactly `omitempty` in the second segment is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct FieldTag<'a> {
    /// Key under which the field is emitted. Empty means "skip".
    pub wire_name: &'a str,
    /// Skip the field when it holds its zero value or an unset optional.
    pub omit_empty: bool,
}

impl<'a> FieldTag<'a> {
    /// Build a tag from its parts.
    #[must_use]
    pub const fn new(wire_name: &'a str, omit_empty: bool) -> Self {
        Self {
            wire_name,
            omit_empty,
        }
    }

    /// Parse a raw tag string such as `"page,omitempty"`.
    ///
    /// # Example
    ///
    /// ```
    /// use formwire_core::FieldTag;
    ///
    /// let tag = FieldTag::parse(" page , omitempty ");
    /// assert_eq!(tag.wire_name, "page");
    /// assert!(tag.omit_empty);
    ///
    /// assert!(!FieldTag::parse("page,OmitEmpty").omit_empty);
    /// ```
    #[must_use]
    pub fn parse(raw: &'a str) -> Self {
        let mut parts = raw.split(',');
        let wire_name = parts.next().map_or("", str::trim);
        let omit_empty = parts.next().is_some_and(|flag| flag.trim() == OMIT_EMPTY);
        Self {
            wire_name,
            omit_empty,
        }
    }

    /// Returns `true` if this tag names a wire key.
    #[must_use]
    pub const fn is_named(&self) -> bool {
        !self.wire_name.is_empty()
    }
}

impl<'a> From<&'a str> for FieldTag<'a> {
    fn from(raw: &'a str) -> Self {
        Self::parse(raw)
    }
}

/// One field of a record: its tag and a view of its value.
#[derive(Debug, Clone, PartialEq)]
pub struct FormField<'a> {
    /// Form metadata for the field.
    pub tag: FieldTag<'a>,
    /// Current value of the field.
    pub value: FieldValue<'a>,
}

impl<'a> FormField<'a> {
    /// Create a field from a tag and a value.
    #[must_use]
    pub fn new(tag: impl Into<FieldTag<'a>>, value: &'a (impl FormValue + ?Sized)) -> Self {
        Self {
            tag: tag.into(),
            value: value.form_value(),
        }
    }
}

/// Builder for [`FieldValue::Record`], for types that implement
/// [`FormValue`] by hand instead of deriving it.
///
/// # Example
///
/// ```
/// use formwire_core::{FieldValue, FormValue, RecordBuilder, encode};
///
/// struct Login {
///     user: String,
///     remember: bool,
/// }
///
/// impl FormValue for Login {
///     fn form_value(&self) -> FieldValue<'_> {
///         RecordBuilder::new()
///             .field("user", &self.user)
///             .field("remember,omitempty", &self.remember)
///             .build()
///     }
/// }
///
/// let login = Login { user: "alice".to_string(), remember: false };
/// let values = encode(&login).expect("encode");
/// assert_eq!(values.get("user"), Some("alice"));
/// assert!(!values.contains_key("remember"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder<'a> {
    fields: Vec<FormField<'a>>,
}

impl<'a> RecordBuilder<'a> {
    /// Create an empty record builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder with room for `capacity` fields.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Append a field. Fields are encoded in the order they are added.
    #[must_use]
    pub fn field(
        mut self,
        tag: impl Into<FieldTag<'a>>,
        value: &'a (impl FormValue + ?Sized),
    ) -> Self {
        self.fields.push(FormField::new(tag, value));
        self
    }

    /// Append an already built field.
    #[must_use]
    pub fn push(mut self, field: FormField<'a>) -> Self {
        self.fields.push(field);
        self
    }

    /// Finish the record.
    #[must_use]
    pub fn build(self) -> FieldValue<'a> {
        FieldValue::Record(self.fields)
    }
}
