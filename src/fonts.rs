//! Font reference rewriting for WordprocessingML.
//!
//! TCVN3 text only renders correctly under the `.Vn*` font families, so after
//! transcoding, every reference to one of those fonts has to be retargeted to
//! an ordinary Unicode font. Font references live in `w:rFonts` attributes
//! scattered across document parts, the style sheet, the font table, and the
//! theme.

use memchr::memmem;

/// Legacy TCVN3 font families and their Unicode-capable replacements.
pub const FONT_SUBSTITUTIONS: &[(&str, &str)] = &[
    (".VnTime", "Times New Roman"),
    (".VnTimeH", "Times New Roman"),
    (".VnArial", "Arial"),
    (".VnArialH", "Arial"),
    (".VnCourier", "Courier New"),
    (".VnCourierH", "Courier New"),
];

/// The four attribute names WordprocessingML uses to declare run fonts
/// (ASCII, high-ANSI, East Asian, and complex-script ranges).
const FONT_ATTRS: &[&str] = &["w:ascii", "w:hAnsi", "w:eastAsia", "w:cs"];

/// Replace legacy font names in raw XML text.
///
/// Scans for the four recognized font attributes and compares each quoted
/// value against the substitution table. Matching is anchored on the quote
/// delimiters, so only values exactly equal to a legacy name are replaced;
/// a rule for `.VnTime` never touches `.VnTimeH`. Attribute names and quote
/// style are preserved. Returns a new string; the input is not mutated.
pub fn rewrite_font_refs(xml: &str, table: &[(&str, &str)]) -> String {
    let mut current = String::from(xml);
    for attr in FONT_ATTRS {
        current = rewrite_attr(&current, attr, table);
    }
    current
}

/// One pass over `xml` for a single attribute name, replacing quoted values
/// found in `table`.
fn rewrite_attr(xml: &str, attr: &str, table: &[(&str, &str)]) -> String {
    let bytes = xml.as_bytes();
    let finder = memmem::Finder::new(attr.as_bytes());
    let mut out = String::with_capacity(xml.len());
    let mut last = 0;

    for start in finder.find_iter(bytes) {
        // The attribute name must stand alone: preceded by whitespace and
        // followed directly by `="` or `='` (rules out e.g. `w:csb0`).
        if start > 0 && !bytes[start - 1].is_ascii_whitespace() {
            continue;
        }
        let mut i = start + attr.len();
        if i >= bytes.len() || bytes[i] != b'=' {
            continue;
        }
        i += 1;
        if i >= bytes.len() || (bytes[i] != b'"' && bytes[i] != b'\'') {
            continue;
        }
        let quote = bytes[i];
        let val_start = i + 1;
        let Some(rel) = memchr::memchr(quote, &bytes[val_start..]) else {
            continue;
        };
        let val_end = val_start + rel;
        let value = &xml[val_start..val_end];

        if let Some(&(_, replacement)) = table.iter().find(|(legacy, _)| *legacy == value) {
            out.push_str(&xml[last..val_start]);
            out.push_str(replacement);
            last = val_end;
        }
    }

    out.push_str(&xml[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replaces_known_font() {
        let xml = r#"<w:rFonts w:ascii=".VnTime" w:hAnsi=".VnTime"/>"#;
        let out = rewrite_font_refs(xml, FONT_SUBSTITUTIONS);
        assert_eq!(
            out,
            r#"<w:rFonts w:ascii="Times New Roman" w:hAnsi="Times New Roman"/>"#
        );
    }

    #[test]
    fn exact_match_does_not_touch_longer_names() {
        let table = &[("Legacy", "NewFont")];
        let xml = r#"<w:rFonts w:ascii="Legacy" w:cs="LegacyExt"/>"#;
        let out = rewrite_font_refs(xml, table);
        assert_eq!(out, r#"<w:rFonts w:ascii="NewFont" w:cs="LegacyExt"/>"#);
    }

    #[test]
    fn heading_variant_maps_independently() {
        let xml = r#"<w:rFonts w:ascii=".VnTimeH"/>"#;
        let out = rewrite_font_refs(xml, FONT_SUBSTITUTIONS);
        assert_eq!(out, r#"<w:rFonts w:ascii="Times New Roman"/>"#);
    }

    #[test]
    fn preserves_single_quote_style() {
        let xml = "<w:rFonts w:eastAsia='.VnArial'/>";
        let out = rewrite_font_refs(xml, FONT_SUBSTITUTIONS);
        assert_eq!(out, "<w:rFonts w:eastAsia='Arial'/>");
    }

    #[test]
    fn unknown_fonts_untouched() {
        let xml = r#"<w:rFonts w:ascii="Calibri" w:cs="Calibri"/>"#;
        assert_eq!(rewrite_font_refs(xml, FONT_SUBSTITUTIONS), xml);
    }

    #[test]
    fn ignores_unrecognized_attributes() {
        let xml = r#"<w:font w:name=".VnTime" w:csb0="00000000"/>"#;
        assert_eq!(rewrite_font_refs(xml, FONT_SUBSTITUTIONS), xml);
    }

    #[test]
    fn multiple_occurrences_in_one_part() {
        let xml = r#"<a w:ascii=".VnTime"/><b w:ascii=".VnCourier"/>"#;
        let out = rewrite_font_refs(xml, FONT_SUBSTITUTIONS);
        assert_eq!(out, r#"<a w:ascii="Times New Roman"/><b w:ascii="Courier New"/>"#);
    }
}
