//! Render plain text into a PDF using an embedded Unicode TrueType font.
//!
//! [`UnicodeDocument`] wraps a `printpdf` document and guarantees a Unicode
//! font is selected before anything is written; [`text_to_pdf`] is the one-call
//! renderer built on it.

pub mod config;
pub mod document;
pub mod error;
pub mod font;
pub mod layout;
pub mod render;
mod to_unicode;

pub use config::{
    DEFAULT_FONT_FAMILY, DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DEFAULT_LINE_HEIGHT, DocumentOptions, Margins,
    Orientation, PageSize,
};
pub use document::UnicodeDocument;
pub use error::{Error, Result};
pub use font::{FontStyle, UnicodeFont};
pub use render::{RenderOptions, render_to_bytes, render_to_file, text_to_pdf};
