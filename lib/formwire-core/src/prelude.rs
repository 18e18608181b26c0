//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions
//! for easy glob importing:
//!
//! ```ignore
//! use formwire_core::prelude::*;
//! ```

pub use crate::{
    EncodeConfig, Error, FieldValue, FloatPrecision, FormValue, FormValues, RecordBuilder, Result,
    encode, encode_with,
};
