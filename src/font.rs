// src/font.rs
use crate::config::MM_PER_PT;
use crate::error::{Error, Result};
use printpdf::ParsedFont;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Style half of a font registration key.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontStyle {
    #[default]
    Regular,
    Bold,
    Italic,
    BoldItalic,
}

/// A TrueType/OpenType font loaded from disk, ready for embedding.
///
/// The raw outline data is kept so glyph advances can be measured with
/// `ttf-parser`, while printpdf gets its own parsed copy for subsetting.
pub struct UnicodeFont {
    family: String,
    style: FontStyle,
    path: PathBuf,
    data: Arc<Vec<u8>>,
    units_per_em: u16,
    parsed: ParsedFont,
}

impl fmt::Debug for UnicodeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnicodeFont")
            .field("family", &self.family)
            .field("style", &self.style)
            .field("path", &self.path)
            .field("data_len", &self.data.len())
            .finish()
    }
}

impl UnicodeFont {
    /// Reads and validates the font at `path`.
    pub fn load(family: impl Into<String>, style: FontStyle, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|source| Error::FontLoad {
            path: path.to_path_buf(),
            source,
        })?;

        let units_per_em = ttf_parser::Face::parse(&data, 0)
            .map_err(|e| Error::FontParse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?
            .units_per_em();

        let mut warnings = Vec::new();
        let parsed = ParsedFont::from_bytes(&data, 0, &mut warnings).ok_or_else(|| Error::FontParse {
            path: path.to_path_buf(),
            reason: "font tables could not be prepared for embedding".to_string(),
        })?;
        if !warnings.is_empty() {
            log::debug!("Font parser warnings for {}: {:?}", path.display(), warnings);
        }

        let family = family.into();
        log::debug!(
            "Loaded font '{}' ({:?}) from {} ({} bytes, {} units/em)",
            family,
            style,
            path.display(),
            data.len(),
            units_per_em
        );

        Ok(Self {
            family,
            style,
            path: path.to_path_buf(),
            data: Arc::new(data),
            units_per_em,
            parsed,
        })
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub(crate) fn parsed(&self) -> &ParsedFont {
        &self.parsed
    }

    /// Whether the font maps `ch` to a real glyph.
    pub fn has_glyph(&self, ch: char) -> bool {
        self.face()
            .map(|face| face.glyph_index(ch).is_some())
            .unwrap_or(false)
    }

    /// Distinct characters of `text` the font cannot draw. Control characters are ignored.
    pub fn missing_glyphs(&self, text: &str) -> Vec<char> {
        let Some(face) = self.face() else {
            return Vec::new();
        };
        let mut missing: Vec<char> = Vec::new();
        for ch in text.chars().filter(|c| !c.is_control()) {
            if face.glyph_index(ch).is_none() && !missing.contains(&ch) {
                missing.push(ch);
            }
        }
        missing
    }

    /// Width of `text` in millimetres at `size` points.
    pub fn text_width(&self, text: &str, size: f32) -> f32 {
        match self.metrics(size) {
            Some(metrics) => text.chars().map(|ch| metrics.advance(ch)).sum(),
            None => 0.0,
        }
    }

    /// Glyph advance lookup scaled to `size` points.
    pub fn metrics(&self, size: f32) -> Option<GlyphMetrics<'_>> {
        let face = self.face()?;
        Some(GlyphMetrics {
            face,
            scale: size * MM_PER_PT / f32::from(self.units_per_em.max(1)),
        })
    }

    // Re-parsing only reads the table directory, so no parsed face is cached.
    fn face(&self) -> Option<ttf_parser::Face<'_>> {
        ttf_parser::Face::parse(&self.data, 0).ok()
    }
}

/// Advances of a face at one point size.
pub struct GlyphMetrics<'a> {
    face: ttf_parser::Face<'a>,
    scale: f32,
}

impl GlyphMetrics<'_> {
    /// Horizontal advance of `ch` in millimetres. Unmapped characters use `.notdef`.
    pub fn advance(&self, ch: char) -> f32 {
        let glyph = self
            .face
            .glyph_index(ch)
            .unwrap_or(ttf_parser::GlyphId(0));
        let units = self.face.glyph_hor_advance(glyph).unwrap_or(0);
        f32::from(units) * self.scale
    }
}
