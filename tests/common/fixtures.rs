use printpdf::BuiltinFont;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use unicode_pdf::DEFAULT_FONT_PATH;

/// Environment variable pointing at a font to use for tests.
pub const TEST_FONT_ENV: &str = "UNICODE_PDF_TEST_FONT";

const SYSTEM_FONT_CANDIDATES: &[&str] = &[
    DEFAULT_FONT_PATH,
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial Unicode.ttf",
];

/// A font file usable by the renderer.
///
/// Prefers `UNICODE_PDF_TEST_FONT`, then well-known system locations, then
/// the Helvetica replacement bundled with printpdf written to the target tmp dir.
pub fn unicode_font() -> &'static Path {
    static FONT: OnceLock<PathBuf> = OnceLock::new();
    FONT.get_or_init(|| {
        if let Some(path) = std::env::var_os(TEST_FONT_ENV).map(PathBuf::from) {
            if path.is_file() {
                return path;
            }
        }
        if let Some(found) = SYSTEM_FONT_CANDIDATES.iter().map(PathBuf::from).find(|p| p.is_file()) {
            return found;
        }
        let path = Path::new(env!("CARGO_TARGET_TMPDIR")).join("unicode-pdf-test-font.ttf");
        let bytes = BuiltinFont::Helvetica.get_subset_font().bytes;
        std::fs::write(&path, bytes).expect("write bundled test font");
        path
    })
}

/// Whether the default system font exists on this machine.
pub fn default_font_available() -> bool {
    Path::new(DEFAULT_FONT_PATH).is_file()
}

/// Text long enough to need several A4 pages at 12 pt.
pub fn long_text(paragraphs: usize) -> String {
    (1..=paragraphs)
        .map(|i| {
            format!(
                "Paragraph {i} carries enough words to wrap across several lines of the page \
                 so that the renderer has to flow it and eventually break onto a new page."
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
