//! Deck Templates - presentation template catalog and theme extraction
//!
//! This crate owns the catalog of slide templates used for deck export:
//! immutable built-ins, user templates extracted from uploaded `.pptx`
//! packages, and the persisted selection.

mod builtin;
mod catalog;
mod color;
mod error;
mod model;
mod settings;
mod storage;
pub mod pptx;

pub use builtin::*;
pub use catalog::*;
pub use color::*;
pub use error::*;
pub use model::*;
pub use settings::*;
pub use storage::*;

pub use pptx::{ThemeExtractor, THEME_PART, PRESENTATION_PART};
