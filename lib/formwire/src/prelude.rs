//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types, functions, and macros
//! for easy glob importing:
//!
//! ```ignore
//! use formwire::prelude::*;
//! ```

pub use crate::{
    EncodeConfig, Error, FieldValue, FloatPrecision, Form, FormValue, FormValues, RecordBuilder,
    Result, encode, encode_with,
};
