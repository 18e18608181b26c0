//! Field values and the [`FormValue`] trait.
//!
//! Every type that can appear in a form record converts itself into a
//! [`FieldValue`], a borrowed view the encoder dispatches on. Scalars map to
//! the variant carrying their value; collections and maps report their kind
//! so the encoder can skip them.

use std::borrow::Cow;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use crate::FormField;

/// Kind of a [`FieldValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    /// String slice or owned string.
    Str,
    /// Signed integer of any width.
    Int,
    /// Unsigned integer of any width.
    Uint,
    /// Boolean.
    Bool,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// `Option<T>`.
    Optional,
    /// Struct with form fields.
    Record,
    /// `Vec<T>`, slices, arrays and sets.
    Sequence,
    /// Key/value maps.
    Map,
    /// The unit type.
    Unit,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str => write!(f, "string"),
            Self::Int => write!(f, "signed integer"),
            Self::Uint => write!(f, "unsigned integer"),
            Self::Bool => write!(f, "bool"),
            Self::F32 => write!(f, "f32"),
            Self::F64 => write!(f, "f64"),
            Self::Optional => write!(f, "optional"),
            Self::Record => write!(f, "record"),
            Self::Sequence => write!(f, "sequence"),
            Self::Map => write!(f, "map"),
            Self::Unit => write!(f, "unit"),
        }
    }
}

/// Borrowed view of a value the encoder knows how to dispatch on.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue<'a> {
    /// A string.
    Str(&'a str),
    /// A signed integer, widened to `i128`.
    Int(i128),
    /// An unsigned integer, widened to `u128`.
    Uint(u128),
    /// A boolean.
    Bool(bool),
    /// A 32-bit float, kept narrow so its shortest form stays short.
    F32(f32),
    /// A 64-bit float.
    F64(f64),
    /// An optional value; `None` is the null case.
    Optional(Option<Box<FieldValue<'a>>>),
    /// A struct, described by its tagged fields in declaration order.
    Record(Vec<FormField<'a>>),
    /// A collection. Never encoded.
    Sequence,
    /// A map. Never encoded.
    Map,
    /// The unit type. Never encoded.
    Unit,
}

impl FieldValue<'_> {
    /// The kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Str(_) => ValueKind::Str,
            Self::Int(_) => ValueKind::Int,
            Self::Uint(_) => ValueKind::Uint,
            Self::Bool(_) => ValueKind::Bool,
            Self::F32(_) => ValueKind::F32,
            Self::F64(_) => ValueKind::F64,
            Self::Optional(_) => ValueKind::Optional,
            Self::Record(_) => ValueKind::Record,
            Self::Sequence => ValueKind::Sequence,
            Self::Map => ValueKind::Map,
            Self::Unit => ValueKind::Unit,
        }
    }
}

/// Types that can be handed to the form encoder.
///
/// Implemented for strings, integers, booleans, floats, `Option<T>`, the
/// standard collections and maps, and by `#[derive(Form)]` for structs.
/// References, `Box`, `Rc`, `Arc` and `Cow` delegate to the value they hold.
///
/// # Example
///
/// ```
/// use formwire_core::{FieldValue, FormValue};
///
/// assert_eq!(42_u8.form_value(), FieldValue::Uint(42));
/// assert_eq!(Some("hi").form_value().kind().to_string(), "optional");
/// ```
pub trait FormValue {
    /// Borrow this value as a [`FieldValue`].
    fn form_value(&self) -> FieldValue<'_>;
}

impl FormValue for str {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self)
    }
}

impl FormValue for String {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Str(self.as_str())
    }
}

macro_rules! impl_form_value {
    ($variant:ident as $wide:ty => $($ty:ty),+ $(,)?) => {
        $(
            impl FormValue for $ty {
                fn form_value(&self) -> FieldValue<'_> {
                    FieldValue::$variant(<$wide>::from(*self))
                }
            }
        )+
    };
}

impl_form_value!(Int as i128 => i8, i16, i32, i64, i128);
impl_form_value!(Uint as u128 => u8, u16, u32, u64, u128);

impl FormValue for isize {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Int(*self as i128)
    }
}

impl FormValue for usize {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Uint(*self as u128)
    }
}

impl FormValue for bool {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Bool(*self)
    }
}

impl FormValue for f32 {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::F32(*self)
    }
}

impl FormValue for f64 {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::F64(*self)
    }
}

impl FormValue for () {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Unit
    }
}

impl<T: FormValue> FormValue for Option<T> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Optional(self.as_ref().map(|value| Box::new(value.form_value())))
    }
}

// Transparent wrappers: none of them can be null.

impl<T: FormValue + ?Sized> FormValue for &T {
    fn form_value(&self) -> FieldValue<'_> {
        (**self).form_value()
    }
}

impl<T: FormValue + ?Sized> FormValue for &mut T {
    fn form_value(&self) -> FieldValue<'_> {
        (**self).form_value()
    }
}

impl<T: FormValue + ?Sized> FormValue for Box<T> {
    fn form_value(&self) -> FieldValue<'_> {
        (**self).form_value()
    }
}

impl<T: FormValue + ?Sized> FormValue for Rc<T> {
    fn form_value(&self) -> FieldValue<'_> {
        (**self).form_value()
    }
}

impl<T: FormValue + ?Sized> FormValue for Arc<T> {
    fn form_value(&self) -> FieldValue<'_> {
        (**self).form_value()
    }
}

impl<T> FormValue for Cow<'_, T>
where
    T: FormValue + ToOwned + ?Sized,
{
    fn form_value(&self) -> FieldValue<'_> {
        (**self).form_value()
    }
}

// Collections are recognised but never encoded.

impl<T> FormValue for [T] {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence
    }
}

impl<T, const N: usize> FormValue for [T; N] {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence
    }
}

impl<T> FormValue for Vec<T> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence
    }
}

impl<T> FormValue for VecDeque<T> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence
    }
}

impl<T, S> FormValue for HashSet<T, S> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence
    }
}

impl<T> FormValue for BTreeSet<T> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Sequence
    }
}

impl<K, V, S> FormValue for HashMap<K, V, S> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Map
    }
}

impl<K, V> FormValue for BTreeMap<K, V> {
    fn form_value(&self) -> FieldValue<'_> {
        FieldValue::Map
    }
}
