//! # Block Kinds
//!
//! One module per construct. Each owns its patterns and exposes a
//! `recognize*` function matching [`super::parser::Recognizer`].

pub mod fenced;
pub mod heading;
pub mod list;
pub mod quote;
pub mod rule;
pub mod table;
