// src/render.rs
use crate::config::{DEFAULT_LINE_HEIGHT, DocumentOptions};
use crate::document::UnicodeDocument;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Settings for a single rendering call.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Font file override; `None` uses `DEFAULT_FONT_PATH`.
    pub font_path: Option<PathBuf>,
    pub line_height: f32,
    pub document: DocumentOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            font_path: None,
            line_height: DEFAULT_LINE_HEIGHT,
            document: DocumentOptions::default(),
        }
    }
}

impl RenderOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_font_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.font_path = Some(path.into());
        self
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_document_options(mut self, document: DocumentOptions) -> Self {
        self.document = document;
        self
    }
}

fn build_document(text: &str, options: &RenderOptions) -> Result<UnicodeDocument> {
    let mut doc = UnicodeDocument::new(options.font_path.as_deref(), options.document.clone())?;
    doc.add_unicode_page();
    doc.write(options.line_height, text)?;
    log::debug!(
        "Laid out {} characters on {} page(s)",
        text.chars().count(),
        doc.page_count()
    );
    Ok(doc)
}

/// Renders `text` and returns the PDF bytes.
pub fn render_to_bytes(text: &str, options: &RenderOptions) -> Result<Vec<u8>> {
    build_document(text, options)?.to_bytes()
}

/// Renders `text` into the PDF at `output_path`, replacing any existing file.
///
/// The file is only created once the font has loaded and the text is laid out,
/// so a font failure leaves the destination untouched.
pub fn render_to_file(text: &str, output_path: impl AsRef<Path>, options: &RenderOptions) -> Result<()> {
    build_document(text, options)?.output(output_path)
}

/// Renders `text` to `output_path` with the Unicode font at `font_path`
/// (`DEFAULT_FONT_PATH` when `None`), one page, 5 mm line height.
///
/// ```rust,no_run
/// use unicode_pdf::text_to_pdf;
///
/// # fn main() -> unicode_pdf::Result<()> {
/// text_to_pdf("héllo wörld", "hello.pdf", None)?;
/// # Ok(())
/// # }
/// ```
pub fn text_to_pdf(text: &str, output_path: impl AsRef<Path>, font_path: Option<&Path>) -> Result<()> {
    let options = RenderOptions {
        font_path: font_path.map(Path::to_path_buf),
        ..RenderOptions::default()
    };
    render_to_file(text, output_path, &options)
}
