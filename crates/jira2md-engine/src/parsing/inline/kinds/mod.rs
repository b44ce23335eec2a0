//! # Inline Kinds
//!
//! Inline-specific types that own their syntax: delimiters, patterns and the
//! small amount of interpretation that belongs to a single construct.
//!
//! ## Types
//!
//! - **`TextEffect`**: paired delimiters (`*`, `_`, `-`, `+`, `^`, `~`, `??`)
//! - **`TextBreak`**: `\\` line breaks and `--`/`---` dashes
//! - **`Monospace`**, **`Anchor`**, **`Color`**: `{`-introduced constructs
//! - **`Link`**, **`Mention`**, **`Checkbox`**: `[`-introduced constructs
//! - **`ImageRef`**: `!src|params!`
//! - **`StatusIcon`**: `(/)`, `(x)`, ...
//!
//! ## Design Principle
//!
//! The parser dispatches on the next character and calls into these types; it
//! never hardcodes a delimiter or a pattern itself.

pub mod brace;
pub mod effect;
pub mod image;
pub mod link;
pub mod status_icon;
pub mod text_break;

pub use brace::{Anchor, Color, Monospace};
pub use effect::TextEffect;
pub use image::ImageRef;
pub use link::{Checkbox, Link, Mention};
pub use status_icon::StatusIcon;
pub use text_break::TextBreak;
