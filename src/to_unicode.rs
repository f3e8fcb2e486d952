// src/to_unicode.rs
//! Rewrites the ToUnicode CMaps of embedded fonts into the plain
//! `bfchar` form text extractors (lopdf among them) can parse.
//!
//! printpdf maps every glyph of a subset font back to its character, but its
//! CMap carries PostScript resource comments and `/CMapVersion`/`/WMode`
//! entries that stricter parsers reject. The glyph to character pairs are
//! lifted out of that stream and written back in the minimal layout.

use crate::error::Result;
use lopdf::{Document, Object, ObjectId};

/// A CMap section may hold at most 100 entries.
const BFCHAR_CHUNK: usize = 100;

const CMAP_HEADER: &str = "/CIDInit /ProcSet findresource begin\n\
12 dict begin\n\
begincmap\n\
/CIDSystemInfo << /Registry (Adobe) /Ordering (UCS) /Supplement 0 >> def\n\
/CMapName /Adobe-Identity-UCS def\n\
/CMapType 2 def\n\
1 begincodespacerange\n\
<0000> <FFFF>\n\
endcodespacerange\n";

const CMAP_FOOTER: &str = "endcmap\n\
CMapName currentdict /CMap defineresource pop\n\
end\n\
end\n";

/// Reloads a serialized PDF, replaces every ToUnicode stream and serializes it again.
pub(crate) fn normalize(pdf: &[u8]) -> Result<Vec<u8>> {
    let mut doc = Document::load_mem(pdf)?;

    let mut cmap_ids: Vec<ObjectId> = doc
        .objects
        .values()
        .filter_map(|object| object.as_dict().ok())
        .filter_map(|dict| dict.get(b"ToUnicode").and_then(Object::as_reference).ok())
        .collect();
    cmap_ids.sort_unstable();
    cmap_ids.dedup();

    for id in &cmap_ids {
        let stream = doc.get_object_mut(*id)?.as_stream_mut()?;
        let mappings = parse_bfchar(&stream.get_plain_content()?);
        stream.set_plain_content(write_cmap(&mappings));
        stream.compress()?;
    }
    log::debug!("Rewrote {} ToUnicode CMap(s)", cmap_ids.len());

    let mut bytes = Vec::with_capacity(pdf.len());
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

/// Collects the `<glyph> <code point>` pairs of every `bfchar` section.
fn parse_bfchar(cmap: &[u8]) -> Vec<(u16, char)> {
    let text = String::from_utf8_lossy(cmap);
    let mut mappings = Vec::new();
    let mut in_section = false;

    for line in text.lines().map(str::trim) {
        if line.ends_with("beginbfchar") {
            in_section = true;
            continue;
        }
        if line == "endbfchar" {
            in_section = false;
            continue;
        }
        if !in_section {
            continue;
        }

        let mut tokens = line.split_whitespace().map(hex_token);
        if let (Some(Some(glyph)), Some(Some(code))) = (tokens.next(), tokens.next()) {
            let glyph = u16::try_from(glyph).ok();
            let ch = char::from_u32(code).filter(|ch| *ch != '\0');
            if let (Some(glyph), Some(ch)) = (glyph, ch) {
                mappings.push((glyph, ch));
            }
        }
    }
    mappings
}

fn hex_token(token: &str) -> Option<u32> {
    let inner = token.strip_prefix('<')?.strip_suffix('>')?;
    u32::from_str_radix(inner, 16).ok()
}

/// Writes a ToUnicode CMap with two-byte source codes and UTF-16BE targets.
fn write_cmap(mappings: &[(u16, char)]) -> Vec<u8> {
    let mut cmap = String::from(CMAP_HEADER);
    for chunk in mappings.chunks(BFCHAR_CHUNK) {
        cmap.push_str(&format!("{} beginbfchar\n", chunk.len()));
        for (glyph, ch) in chunk {
            let mut units = [0u16; 2];
            let target: String = ch.encode_utf16(&mut units).iter().map(|u| format!("{u:04X}")).collect();
            cmap.push_str(&format!("<{glyph:04X}> <{target}>\n"));
        }
        cmap.push_str("endbfchar\n");
    }
    cmap.push_str(CMAP_FOOTER);
    cmap.into_bytes()
}
