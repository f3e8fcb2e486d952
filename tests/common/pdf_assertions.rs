use lopdf::Document as LopdfDocument;

/// Extract all text content from a PDF document, one page after another.
/// Fails if any page's text cannot be decoded.
pub fn extract_text(doc: &LopdfDocument) -> lopdf::Result<String> {
    let mut text = String::new();
    let pages = doc.get_pages();
    for page_num in 1..=pages.len() {
        text.push_str(&doc.extract_text(&[page_num as u32])?);
        text.push('\n');
    }
    Ok(text)
}

/// Extracted text with runs of whitespace collapsed to single spaces.
pub fn normalized_text(doc: &LopdfDocument) -> lopdf::Result<String> {
    Ok(extract_text(doc)?.split_whitespace().collect::<Vec<_>>().join(" "))
}

/// Whether any font in the document carries an embedded font program.
pub fn has_embedded_font(doc: &LopdfDocument) -> bool {
    doc.objects.values().any(|object| {
        let Ok(dict) = object.as_dict() else {
            return false;
        };
        let is_descriptor = dict
            .get(b"Type")
            .and_then(|t| t.as_name())
            .map(|name| name == b"FontDescriptor")
            .unwrap_or(false);
        is_descriptor && (dict.has(b"FontFile2") || dict.has(b"FontFile3") || dict.has(b"FontFile"))
    })
}

/// Get page dimensions (width, height) in points
pub fn get_page_dimensions(doc: &LopdfDocument, page_num: u32) -> Option<(f32, f32)> {
    let pages = doc.get_pages();
    let page_id = pages.get(&page_num)?;
    let page_dict = doc.get_object(*page_id).ok()?.as_dict().ok()?;
    let arr = page_dict.get(b"MediaBox").ok()?.as_array().ok()?;
    if arr.len() < 4 {
        return None;
    }
    let width = arr[2].as_float().ok()? - arr[0].as_float().ok()?;
    let height = arr[3].as_float().ok()? - arr[1].as_float().ok()?;
    Some((width, height))
}

// ============================================================================
// Fluent Assertion Macros
// ============================================================================

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::normalized_text(&$pdf.doc)
            .unwrap_or_else(|e| panic!("Text extraction failed: {e}"));
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// Assert page dimensions within tolerance
#[macro_export]
macro_rules! assert_pdf_page_size {
    ($pdf:expr, $page:expr, $width:expr, $height:expr) => {
        let dims = $crate::common::pdf_assertions::get_page_dimensions(&$pdf.doc, $page);
        assert!(dims.is_some(), "Could not get dimensions for page {}", $page);
        let (w, h) = dims.unwrap();
        assert!(
            (w - $width).abs() < 1.0,
            "Page {} width expected ~{}, got {}",
            $page,
            $width,
            w
        );
        assert!(
            (h - $height).abs() < 1.0,
            "Page {} height expected ~{}, got {}",
            $page,
            $height,
            h
        );
    };
}
