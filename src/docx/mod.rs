//! DOCX archive traversal and conversion.
//!
//! A DOCX file is a zip container of XML parts. Conversion walks the
//! container once: content parts (body, headers, footers, notes) get their
//! text runs transcoded and their font references rewritten; the global
//! style/fontTable/theme parts carry font declarations but no document text,
//! so they only get the font rewrite; every other entry passes through
//! byte-identical. The container is then repacked in entry order.

mod part;

use std::io::{Cursor, Read, Seek, Write};
use std::path::Path;

use zip::ZipArchive;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

use crate::error::{Error, Result};
use crate::fonts::{self, FONT_SUBSTITUTIONS};
use crate::util::decode_text;

pub use part::{ProcessedPart, process_part};

/// Output of a successful conversion.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The converted document, repackaged as DOCX bytes.
    pub docx: Vec<u8>,
    /// Flattened, transcoded document text, suitable for display or for a
    /// downstream summarizer. Falls back to header/footer/note text when the
    /// body carries no visible text.
    pub preview: String,
}

/// How an archive entry participates in conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PartKind {
    /// The primary document body (`word/document.xml`).
    Body,
    /// Headers, footers, footnotes, endnotes.
    Auxiliary,
    /// Style sheet, font table, theme: font declarations, no text runs.
    Global,
    /// Everything else (images, relationships, properties) — untouched.
    Other,
}

const CONTENT_BASES: &[&str] = &["document", "header", "footer", "footnotes", "endnotes"];

fn classify(name: &str) -> PartKind {
    if let Some(stem) = name.strip_prefix("word/").and_then(|n| n.strip_suffix(".xml")) {
        for base in CONTENT_BASES {
            if let Some(suffix) = stem.strip_prefix(base)
                && suffix.chars().all(|c| c.is_ascii_digit())
            {
                return if *base == "document" {
                    PartKind::Body
                } else {
                    PartKind::Auxiliary
                };
            }
        }
    }

    match name {
        "word/styles.xml" | "word/fontTable.xml" | "word/theme/theme1.xml" => PartKind::Global,
        _ => PartKind::Other,
    }
}

struct Entry {
    name: String,
    data: Vec<u8>,
    is_dir: bool,
}

/// Convert a DOCX file on disk.
///
/// # Example
///
/// ```no_run
/// use vndocx::convert_docx;
///
/// let result = convert_docx("legacy.docx")?;
/// std::fs::write("converted.docx", &result.docx)?;
/// println!("{}", result.preview);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn convert_docx<P: AsRef<Path>>(path: P) -> Result<Conversion> {
    let data = std::fs::read(path)?;
    convert_docx_bytes(&data)
}

/// Convert a DOCX supplied as an in-memory byte buffer.
pub fn convert_docx_bytes(data: &[u8]) -> Result<Conversion> {
    convert_docx_from_reader(Cursor::new(data))
}

/// Convert a DOCX from any [`Read`] + [`Seek`] source.
///
/// The whole archive is materialized in memory, transformed, and repacked;
/// the entry set of the output is exactly that of the input.
pub fn convert_docx_from_reader<R: Read + Seek>(reader: R) -> Result<Conversion> {
    let mut archive = ZipArchive::new(reader)?;

    let mut entries = Vec::with_capacity(archive.len());
    for i in 0..archive.len() {
        let mut file = archive.by_index(i)?;
        let mut data = Vec::with_capacity(file.size() as usize);
        file.read_to_end(&mut data)?;
        entries.push(Entry {
            name: file.name().to_string(),
            data,
            is_dir: file.is_dir(),
        });
    }

    let mut body_text = String::new();
    let mut aux_text = String::new();
    let mut content_parts = 0usize;

    for entry in &mut entries {
        let kind = classify(&entry.name);
        match kind {
            PartKind::Body | PartKind::Auxiliary => {
                content_parts += 1;
                let xml = decode_text(&entry.data);
                let processed = part::process_part(&entry.name, &xml)?;
                entry.data = processed.xml.into_bytes();
                if kind == PartKind::Body {
                    body_text.push_str(&processed.text);
                } else {
                    aux_text.push_str(&processed.text);
                }
            }
            PartKind::Global => {
                let xml = decode_text(&entry.data);
                entry.data = fonts::rewrite_font_refs(&xml, FONT_SUBSTITUTIONS).into_bytes();
            }
            PartKind::Other => {}
        }
    }

    if content_parts == 0 {
        return Err(Error::NoDocumentBody);
    }
    log::debug!("converted {content_parts} content parts");

    let docx = repack(&entries)?;

    // Some documents carry all visible text in headers/footers/text boxes
    // with an empty or image-only body; fall back to the auxiliary text.
    let preview = if body_text.trim().is_empty() {
        aux_text
    } else {
        body_text
    };

    Ok(Conversion {
        docx,
        preview: preview.trim().to_string(),
    })
}

fn repack(entries: &[Entry]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
    let options =
        SimpleFileOptions::default().compression_method(zip::CompressionMethod::Deflated);

    for entry in entries {
        if entry.is_dir {
            zip.add_directory(entry.name.trim_end_matches('/'), options)?;
        } else {
            zip.start_file(&entry.name, options)?;
            zip.write_all(&entry.data)?;
        }
    }

    Ok(zip.finish()?.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_content_parts() {
        assert_eq!(classify("word/document.xml"), PartKind::Body);
        assert_eq!(classify("word/header1.xml"), PartKind::Auxiliary);
        assert_eq!(classify("word/footer12.xml"), PartKind::Auxiliary);
        assert_eq!(classify("word/footnotes.xml"), PartKind::Auxiliary);
        assert_eq!(classify("word/endnotes.xml"), PartKind::Auxiliary);
    }

    #[test]
    fn classifies_global_parts() {
        assert_eq!(classify("word/styles.xml"), PartKind::Global);
        assert_eq!(classify("word/fontTable.xml"), PartKind::Global);
        assert_eq!(classify("word/theme/theme1.xml"), PartKind::Global);
    }

    #[test]
    fn rejects_near_misses() {
        assert_eq!(classify("word/documentation.xml"), PartKind::Other);
        assert_eq!(classify("word/header.xml.rels"), PartKind::Other);
        assert_eq!(classify("word/media/image1.png"), PartKind::Other);
        assert_eq!(classify("word/_rels/document.xml.rels"), PartKind::Other);
        assert_eq!(classify("word/theme/theme2.xml"), PartKind::Other);
        assert_eq!(classify("document.xml"), PartKind::Other);
    }

    #[test]
    fn base_name_without_suffix_counts() {
        assert_eq!(classify("word/header.xml"), PartKind::Auxiliary);
    }
}
