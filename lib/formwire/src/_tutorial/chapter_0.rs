//! # Chapter 0: Getting Started
//!
//! Your first form in 5 minutes.
//!
//! ## What You'll Learn
//!
//! - Tag struct fields with `#[form("...")]`
//! - Encode a value with [`encode`][crate::encode]
//! - Render the result as a request body
//!
//! ## Prerequisites
//!
//! Add to `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! formwire = "0.1"
//! ```
//!
//! ## Your First Form
//!
//! ```
//! use formwire::prelude::*;
//!
//! #[derive(Form)]
//! struct Comment {
//!     #[form("post_id")]
//!     post_id: u64,
//!     #[form("body")]
//!     body: String,
//!     // no tag: never sent
//!     draft_saved_at: u64,
//! }
//!
//! let comment = Comment { post_id: 7, body: "Nice & short".to_string(), draft_saved_at: 0 };
//! let values = encode(&comment)?;
//!
//! assert_eq!(values.get("post_id"), Some("7"));
//! assert!(!values.contains_key("draft_saved_at"));
//! assert_eq!(values.to_urlencoded()?, "post_id=7&body=Nice+%26+short");
//! # Ok::<(), formwire::Error>(())
//! ```
//!
//! ## What Gets Generated
//!
//! `#[derive(Form)]` implements [`FormValue`][crate::FormValue]: a table of
//! the tagged fields, in declaration order, that the encoder walks. Keys in
//! the output follow that order.
//!
//! Only structs can be encoded. Anything else is rejected:
//!
//! ```
//! use formwire::{ValueKind, encode};
//!
//! let err = encode("just a string").unwrap_err();
//! assert_eq!(err.kind(), Some(ValueKind::Str));
//! ```
//!
//! ## Next Steps
//!
//! - [Chapter 1: Optional & Empty Fields][super::chapter_1]
