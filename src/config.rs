//! Document configuration and the fixed defaults of the renderer.
//!
//! All lengths are millimetres; font sizes are points.

/// Font used when the caller does not supply one. DejaVu Sans covers Latin,
/// Greek, Cyrillic and a broad range of symbols.
pub const DEFAULT_FONT_PATH: &str = "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf";

/// Logical name the Unicode font is registered under.
pub const DEFAULT_FONT_FAMILY: &str = "DejaVu";

/// Point size selected on construction and on every `add_unicode_page`.
pub const DEFAULT_FONT_SIZE: f32 = 12.0;

/// Line height used by the text renderer.
pub const DEFAULT_LINE_HEIGHT: f32 = 5.0;

/// Horizontal padding between a line's left edge and its first glyph.
pub const CELL_PADDING: f32 = 1.0;

pub(crate) const MM_PER_PT: f32 = 25.4 / 72.0;

/// Standard paper formats, portrait dimensions.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub enum PageSize {
    A3,
    #[default]
    A4,
    A5,
    Letter,
    Legal,
    Custom { width: f32, height: f32 },
}

impl PageSize {
    /// (width, height) in portrait orientation.
    pub fn dimensions(&self) -> (f32, f32) {
        match *self {
            PageSize::A3 => (297.0, 420.0),
            PageSize::A4 => (210.0, 297.0),
            PageSize::A5 => (148.0, 210.0),
            PageSize::Letter => (215.9, 279.4),
            PageSize::Legal => (215.9, 355.6),
            PageSize::Custom { width, height } => (width, height),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub left: f32,
    pub top: f32,
    pub right: f32,
}

impl Default for Margins {
    fn default() -> Self {
        Self {
            left: 10.0,
            top: 10.0,
            right: 10.0,
        }
    }
}

/// Options forwarded to the underlying document on construction.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentOptions {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    /// Start a new page when a line would cross `page height - break_margin`.
    pub auto_page_break: bool,
    pub break_margin: f32,
    pub title: Option<String>,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            page_size: PageSize::default(),
            orientation: Orientation::default(),
            margins: Margins::default(),
            auto_page_break: true,
            break_margin: 20.0,
            title: None,
        }
    }
}

impl DocumentOptions {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    /// Enables or disables automatic page breaks and sets the bottom margin that triggers them.
    pub fn with_auto_page_break(mut self, enabled: bool, break_margin: f32) -> Self {
        self.auto_page_break = enabled;
        self.break_margin = break_margin;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Page (width, height) after applying the orientation.
    pub fn page_dimensions(&self) -> (f32, f32) {
        let (w, h) = self.page_size.dimensions();
        match self.orientation {
            Orientation::Portrait => (w, h),
            Orientation::Landscape => (h, w),
        }
    }
}
