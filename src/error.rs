// src/error.rs
use crate::font::FontStyle;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure the renderer can surface. Nothing is retried or swallowed;
/// callers receive these unchanged.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Failed to read font file '{}': {source}", path.display())]
    FontLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("'{}' is not a usable TrueType/OpenType font: {reason}", path.display())]
    FontParse { path: PathBuf, reason: String },

    #[error("Font '{family}' with style {style:?} has not been registered")]
    UnknownFont { family: String, style: FontStyle },

    #[error("No page open; add a page before writing text")]
    NoPageOpen,

    #[error("PDF post-processing error: {0}")]
    Pdf(#[from] lopdf::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
