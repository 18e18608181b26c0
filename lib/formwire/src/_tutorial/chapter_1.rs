//! # Chapter 1: Optional & Empty Fields
//!
//! ## Zero Values
//!
//! By default every tagged field is sent, zero values included: `""`, `"0"`
//! and `"false"`. Add `omitempty` to leave them out.
//!
//! ```
//! use formwire::prelude::*;
//!
//! #[derive(Form)]
//! struct Filter {
//!     #[form("q")]
//!     query: String,
//!     #[form("limit,omitempty")]
//!     limit: u32,
//!     #[form(rename = "archived", omitempty)]
//!     archived: bool,
//! }
//!
//! let filter = Filter { query: String::new(), limit: 0, archived: false };
//! assert_eq!(encode(&filter)?.to_urlencoded()?, "q=");
//! # Ok::<(), formwire::Error>(())
//! ```
//!
//! ## Optional Fields
//!
//! `None` is sent as an empty value, or left out with `omitempty`.
//! `Some(v)` behaves exactly like `v`.
//!
//! ```
//! use formwire::prelude::*;
//!
//! #[derive(Form)]
//! struct Profile {
//!     #[form("nickname")]
//!     nickname: Option<String>,
//!     #[form("age,omitempty")]
//!     age: Option<u8>,
//! }
//!
//! let profile = Profile { nickname: None, age: Some(0) };
//! assert_eq!(encode(&profile)?.to_urlencoded()?, "nickname=");
//! # Ok::<(), formwire::Error>(())
//! ```
//!
//! ## Float Precision
//!
//! Floats use their shortest exact form unless you pick a fixed number of
//! digits with [`EncodeConfig`][crate::EncodeConfig].
//!
//! ```
//! use formwire::prelude::*;
//!
//! #[derive(Form)]
//! struct Reading {
//!     #[form("value")]
//!     value: f64,
//! }
//!
//! let reading = Reading { value: 1.2345 };
//! assert_eq!(encode(&reading)?.get("value"), Some("1.2345"));
//!
//! let config = EncodeConfig::builder().fixed_float_digits(2).build();
//! assert_eq!(encode_with(&reading, &config)?.get("value"), Some("1.23"));
//! # Ok::<(), formwire::Error>(())
//! ```
