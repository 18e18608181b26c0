//! Procedural macros for formwire form encoding.
//!
//! This crate provides `#[derive(Form)]`, which implements
//! `formwire::FormValue` for a struct so it can be passed to
//! `formwire::encode`.
//!
//! # Example
//!
//! ```ignore
//! use formwire::prelude::*;
//!
//! #[derive(Form)]
//! struct Search {
//!     #[form("q")]
//!     query: String,
//!     #[form("page,omitempty")]
//!     page: Option<u32>,
//! }
//!
//! let values = encode(&Search { query: "rust".into(), page: None })?;
//! assert_eq!(values.to_urlencoded()?, "q=rust");
//! ```

mod form_derive;

use proc_macro::TokenStream;

/// Derive the `FormValue` trait for a struct.
///
/// Only fields carrying a `#[form(...)]` attribute are encoded, in
/// declaration order. Their types must implement `FormValue`; other fields
/// are ignored entirely.
///
/// # Field Attributes
///
/// - `#[form("name")]` - Emit the field under `name`
/// - `#[form("name,omitempty")]` - Same, but skip zero values and `None`
/// - `#[form(rename = "name")]` - Key/value spelling of `#[form("name")]`
/// - `#[form(rename = "name", omitempty)]` - Key/value spelling with omit-empty
///
/// A field whose type is itself a struct deriving `Form` is a nested record
/// and is never flattened into the output.
///
/// # Example
///
/// ```ignore
/// use formwire::Form;
///
/// #[derive(Form)]
/// struct Signup {
///     #[form("email")]
///     email: String,
///     #[form("age,omitempty")]
///     age: u8,
///     #[form(rename = "newsletter", omitempty)]
///     newsletter: bool,
///     // not part of the form
///     session: Session,
/// }
/// ```
#[proc_macro_derive(Form, attributes(form))]
pub fn derive_form(input: TokenStream) -> TokenStream {
    form_derive::expand_form_derive(input.into())
        .unwrap_or_else(|e| e.to_compile_error())
        .into()
}
