#![allow(dead_code)]

pub mod fixtures;
pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use std::path::Path;
use unicode_pdf::{RenderOptions, render_to_bytes};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    /// Create a GeneratedPdf from raw bytes
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Reopen a PDF written to disk
    pub fn from_file(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        Self::from_bytes(std::fs::read(path)?)
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Extracted text, whitespace collapsed
    pub fn text(&self) -> lopdf::Result<String> {
        pdf_assertions::normalized_text(&self.doc)
    }
}

/// Options pointing at the test font
pub fn test_options() -> RenderOptions {
    RenderOptions::new().with_font_path(fixtures::unicode_font())
}

/// Render text with the test font and reopen it
pub fn render(text: &str) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    render_with(text, &test_options())
}

/// Render text with explicit options and reopen it
pub fn render_with(text: &str, options: &RenderOptions) -> Result<GeneratedPdf, Box<dyn std::error::Error>> {
    GeneratedPdf::from_bytes(render_to_bytes(text, options)?)
}
