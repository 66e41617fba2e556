//! The RGBA [`Color`] type used throughout pufferfish.
//!
//! Besides the plain four-float record, this crate provides packed 32-bit
//! encodings, HSV conversions, hex color codes, named colors and
//! componentwise arithmetic.
//!
//! # Features
//!
//! - `named` (default): [`Color::named`] and the built-in color name table.
//! - `serde`: `Serialize` and `Deserialize` for [`Color`].

#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]

pub mod color;
pub mod error;
mod util;

pub use color::Color;
pub use error::ColorError;
