//! Core types and encoder for formwire.
//!
//! This crate provides the foundational pieces used by formwire:
//! - [`FormValue`] - Trait for types the encoder can read, derived for structs
//! - [`FieldValue`] and [`ValueKind`] - The value view the encoder dispatches on
//! - [`FieldTag`], [`FormField`] and [`RecordBuilder`] - Per-field form metadata
//! - [`encode`] and [`encode_with`] - Struct to form values conversion
//! - [`EncodeConfig`] and [`FloatPrecision`] - Encoder configuration
//! - [`FormValues`] - Ordered multimap output with URL-encoded rendering
//! - [`Error`] and [`Result`] - Error handling

mod config;
mod encode;
mod error;
mod field;
pub mod prelude;
mod value;
mod values;

pub use config::{EncodeConfig, EncodeConfigBuilder, FloatPrecision};
pub use encode::{encode, encode_with};
pub use error::{Error, Result};
pub use field::{FieldTag, FormField, OMIT_EMPTY, RecordBuilder};
pub use value::{FieldValue, FormValue, ValueKind};
pub use values::{FORM_CONTENT_TYPE, FormValues};
