// src/document.rs
use crate::config::{
    CELL_PADDING, DEFAULT_FONT_FAMILY, DEFAULT_FONT_PATH, DEFAULT_FONT_SIZE, DocumentOptions, MM_PER_PT,
};
use crate::error::{Error, Result};
use crate::font::{FontStyle, UnicodeFont};
use crate::layout::flow_text;
use crate::to_unicode;
use printpdf::{FontId, Mm, Op, PdfDocument, PdfPage, PdfSaveOptions, Pt, TextItem, TextMatrix};
use std::path::Path;

/// A piece of text placed on a page. `x` and `baseline` are measured from the
/// top-left corner of the page.
#[derive(Debug, Clone)]
struct TextRun {
    font: usize,
    size: f32,
    x: f32,
    baseline: f32,
    text: String,
}

#[derive(Debug, Clone)]
struct PageContent {
    width: f32,
    height: f32,
    runs: Vec<TextRun>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct FontSelection {
    font: usize,
    size: f32,
}

/// A PDF document that always writes with a Unicode TrueType font.
///
/// The font is loaded and selected on construction, so every write has a font
/// able to encode arbitrary Unicode. Pages, cursor and font state live here;
/// the `printpdf` document is assembled from them when the document is output.
#[derive(Debug)]
pub struct UnicodeDocument {
    options: DocumentOptions,
    fonts: Vec<UnicodeFont>,
    selected: FontSelection,
    pages: Vec<PageContent>,
    x: f32,
    y: f32,
    last_line_height: f32,
}

impl UnicodeDocument {
    /// Loads the Unicode font (`DEFAULT_FONT_PATH` when `font_path` is `None`),
    /// registers it as `DejaVu` regular and selects it at 12 pt.
    ///
    /// # Errors
    ///
    /// `Error::FontLoad` if the font file cannot be read, `Error::FontParse` if
    /// it is not a usable font.
    pub fn new(font_path: Option<&Path>, options: DocumentOptions) -> Result<Self> {
        let font_path = font_path.unwrap_or_else(|| Path::new(DEFAULT_FONT_PATH));
        let font = UnicodeFont::load(DEFAULT_FONT_FAMILY, FontStyle::Regular, font_path)?;
        let margins = options.margins;

        Ok(Self {
            options,
            fonts: vec![font],
            selected: FontSelection {
                font: 0,
                size: DEFAULT_FONT_SIZE,
            },
            pages: Vec::new(),
            x: margins.left,
            y: margins.top,
            last_line_height: 0.0,
        })
    }

    /// Creates a document with default options.
    pub fn with_font(font_path: Option<&Path>) -> Result<Self> {
        Self::new(font_path, DocumentOptions::default())
    }

    pub fn options(&self) -> &DocumentOptions {
        &self.options
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.options.title = Some(title.into());
    }

    /// Registers another font file under `(family, style)`. Re-registering a
    /// pair replaces the earlier font for subsequent `set_font` calls.
    pub fn register_font(&mut self, family: &str, style: FontStyle, path: impl AsRef<Path>) -> Result<()> {
        let font = UnicodeFont::load(family, style, path)?;
        match self.find_font(family, style) {
            Some(index) => self.fonts[index] = font,
            None => self.fonts.push(font),
        }
        Ok(())
    }

    /// Selects a registered font. Family names compare case-insensitively.
    pub fn set_font(&mut self, family: &str, style: FontStyle, size: f32) -> Result<()> {
        let font = self.find_font(family, style).ok_or_else(|| Error::UnknownFont {
            family: family.to_string(),
            style,
        })?;
        self.selected = FontSelection { font, size };
        Ok(())
    }

    pub fn set_font_size(&mut self, size: f32) {
        self.selected.size = size;
    }

    /// The currently selected font and its size in points.
    pub fn current_font(&self) -> (&UnicodeFont, f32) {
        (&self.fonts[self.selected.font], self.selected.size)
    }

    /// Appends a page and moves the cursor to its top-left margin corner.
    pub fn add_page(&mut self) {
        let (width, height) = self.options.page_dimensions();
        self.pages.push(PageContent {
            width,
            height,
            runs: Vec::new(),
        });
        self.x = self.options.margins.left;
        self.y = self.options.margins.top;
        log::debug!("Added page {} ({}x{} mm)", self.pages.len(), width, height);
    }

    /// Appends a page and re-selects the Unicode font at its default size.
    pub fn add_unicode_page(&mut self) {
        self.add_page();
        self.selected = FontSelection {
            font: 0,
            size: DEFAULT_FONT_SIZE,
        };
    }

    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// One-based number of the page being written, 0 before the first page.
    ///
    /// Pages are only ever appended, so the page being written is always the
    /// last one and this equals `page_count`.
    pub fn page_no(&self) -> usize {
        self.pages.len()
    }

    pub fn x(&self) -> f32 {
        self.x
    }

    pub fn y(&self) -> f32 {
        self.y
    }

    /// Line break: back to the left margin, down by `height` or by the last
    /// written line height.
    pub fn ln(&mut self, height: Option<f32>) {
        self.x = self.options.margins.left;
        self.y += height.unwrap_or(self.last_line_height);
    }

    /// Writes flowing text from the current position with lines `line_height`
    /// millimetres apart, adding pages as the bottom break margin is reached.
    pub fn write(&mut self, line_height: f32, text: &str) -> Result<()> {
        if self.pages.is_empty() {
            return Err(Error::NoPageOpen);
        }
        let FontSelection { font, size } = self.selected;
        let unicode_font = &self.fonts[font];

        let missing = unicode_font.missing_glyphs(text);
        if !missing.is_empty() {
            log::warn!(
                "Font '{}' has no glyphs for {:?}; they will render as .notdef",
                unicode_font.family(),
                missing
            );
        }

        let (page_width, _) = self.options.page_dimensions();
        let right_edge = page_width - self.options.margins.right;
        let full_width = right_edge - self.options.margins.left - 2.0 * CELL_PADDING;
        let first_width = right_edge - self.x - 2.0 * CELL_PADDING;

        let lines = match unicode_font.metrics(size) {
            Some(metrics) => flow_text(text, first_width, full_width, |ch| metrics.advance(ch)),
            None => flow_text(text, first_width, full_width, |_| 0.0),
        };

        let ascent = 0.3 * size * MM_PER_PT;
        for line in lines {
            if self.options.auto_page_break && self.y + line_height > self.page_break_trigger() {
                let x = self.x;
                self.add_page();
                self.x = x;
            }

            if !line.text.is_empty() {
                let run = TextRun {
                    font,
                    size,
                    x: self.x + CELL_PADDING,
                    baseline: self.y + 0.5 * line_height + ascent,
                    text: line.text,
                };
                if let Some(page) = self.pages.last_mut() {
                    page.runs.push(run);
                }
            }

            if line.breaks {
                self.x = self.options.margins.left;
                self.y += line_height;
            } else {
                self.x += line.width;
            }
        }
        self.last_line_height = line_height;
        Ok(())
    }

    fn page_break_trigger(&self) -> f32 {
        let (_, height) = self.options.page_dimensions();
        height - self.options.break_margin
    }

    fn find_font(&self, family: &str, style: FontStyle) -> Option<usize> {
        self.fonts
            .iter()
            .position(|f| f.family().eq_ignore_ascii_case(family) && f.style() == style)
    }

    /// Serializes the document. Registered fonts are embedded as subsets with
    /// ToUnicode maps, so the text can be extracted again.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let title = self.options.title.as_deref().unwrap_or("");
        let mut pdf = PdfDocument::new(title);
        let font_ids: Vec<FontId> = self.fonts.iter().map(|f| pdf.add_font(f.parsed())).collect();

        for page in &self.pages {
            pdf.pages.push(PdfPage::new(
                Mm(page.width),
                Mm(page.height),
                page_ops(page, &font_ids),
            ));
        }

        let mut warnings = Vec::new();
        let bytes = pdf.save(&PdfSaveOptions::default(), &mut warnings);
        if !warnings.is_empty() {
            log::warn!("PDF generation warnings: {:?}", warnings);
        }
        to_unicode::normalize(&bytes)
    }

    /// Serializes the document and writes it to `path`, replacing any existing file.
    pub fn output(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let bytes = self.to_bytes()?;
        std::fs::write(path, &bytes)?;
        log::info!(
            "Wrote {} ({} pages, {} bytes)",
            path.display(),
            self.pages.len(),
            bytes.len()
        );
        Ok(())
    }
}

fn page_ops(page: &PageContent, font_ids: &[FontId]) -> Vec<Op> {
    if page.runs.is_empty() {
        return Vec::new();
    }

    // One text object per run; font state carries over between them.
    let mut ops = Vec::with_capacity(page.runs.len() * 5);
    let mut active: Option<FontSelection> = None;
    for run in &page.runs {
        ops.push(Op::StartTextSection);
        let selection = FontSelection {
            font: run.font,
            size: run.size,
        };
        if active != Some(selection) {
            ops.push(Op::SetFontSize {
                size: Pt(run.size),
                font: font_ids[run.font].clone(),
            });
            active = Some(selection);
        }
        ops.push(Op::SetTextMatrix {
            matrix: TextMatrix::Translate(Mm(run.x).into_pt(), Mm(page.height - run.baseline).into_pt()),
        });
        ops.push(Op::WriteText {
            items: vec![TextItem::Text(run.text.clone())],
            font: font_ids[run.font].clone(),
        });
        ops.push(Op::EndTextSection);
    }
    ops
}
