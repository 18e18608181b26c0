//! # Tutorial: Encoding Forms with formwire
//!
//! Learn to turn structs into form bodies step by step.
//!
//! ## Chapters
//!
//! 1. [Getting Started][chapter_0] - Tag fields and encode them
//! 2. [Optional & Empty Fields][chapter_1] - `Option`, `omitempty` and floats
//!
//! Ready? Start with [Chapter 0: Getting Started][chapter_0].

pub mod chapter_0;
pub mod chapter_1;
