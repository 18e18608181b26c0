//! Encode Rust structs into URL-encoded form values.
//!
//! Annotate the fields of a struct with their wire names, derive [`Form`],
//! and [`encode`] it into ordered [`FormValues`] ready for an
//! `application/x-www-form-urlencoded` request body.
//!
//! # Example
//!
//! ```
//! use formwire::prelude::*;
//!
//! #[derive(Form)]
//! struct Login {
//!     #[form("username")]
//!     username: String,
//!     #[form("remember,omitempty")]
//!     remember: bool,
//!     #[form("otp,omitempty")]
//!     otp: Option<u32>,
//! }
//!
//! let login = Login { username: "alice".to_string(), remember: false, otp: None };
//! let values = encode(&login)?;
//! assert_eq!(values.to_urlencoded()?, "username=alice");
//! # Ok::<(), formwire::Error>(())
//! ```
//!
//! See the [tutorial][_tutorial] for a complete guide.

pub mod _tutorial;
pub mod prelude;

// Re-export core types
pub use formwire_core::{
    EncodeConfig, EncodeConfigBuilder, Error, FORM_CONTENT_TYPE, FieldTag, FieldValue,
    FloatPrecision, FormField, FormValue, FormValues, OMIT_EMPTY, RecordBuilder, Result, ValueKind,
    encode, encode_with,
};

// Re-export macros
pub use formwire_macro::Form;
