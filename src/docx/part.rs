//! Per-part XML processing: transcode text runs, then rewrite font references.

use quick_xml::Reader;
use quick_xml::Writer;
use quick_xml::events::{BytesText, Event};

use crate::error::{Error, Result};
use crate::fonts::{self, FONT_SUBSTITUTIONS};
use crate::tcvn3;

/// Result of converting one content part.
#[derive(Debug)]
pub struct ProcessedPart {
    /// The part's XML with text runs transcoded and font references rewritten.
    pub xml: String,
    /// Transcoded text of every non-whitespace run, in document order, each
    /// followed by a single space.
    pub text: String,
}

/// Convert one content part (document body, header, footer, or notes).
///
/// Streams the XML event-by-event: every structural event (tags with their
/// raw attribute bytes, declarations, comments, CDATA) is forwarded verbatim,
/// so untouched markup round-trips byte-faithfully. Only character data
/// inside `w:t` elements is transcoded, in document order. Empty and
/// whitespace-only runs are emitted unchanged and contribute nothing to the
/// extracted text.
///
/// Fails with [`Error::MalformedMarkup`] naming the part when the bytes are
/// not well-formed XML.
pub fn process_part(name: &str, xml: &str) -> Result<ProcessedPart> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::new());
    let mut extracted = String::new();

    // Buffered state for the `w:t` element currently open, if any. Raw events
    // are kept alongside the decoded text so whitespace-only runs can be
    // replayed untouched.
    let mut run_text: Option<String> = None;
    let mut run_events: Vec<Event<'static>> = Vec::new();

    loop {
        let event = match reader.read_event() {
            Ok(event) => event,
            Err(source) => {
                return Err(Error::MalformedMarkup {
                    part: name.to_string(),
                    source,
                });
            }
        };

        match event {
            Event::Start(e) if e.name().as_ref() == b"w:t" => {
                if run_text.take().is_some() {
                    for ev in run_events.drain(..) {
                        writer.write_event(ev)?;
                    }
                }
                writer.write_event(Event::Start(e.into_owned()))?;
                run_text = Some(String::new());
            }
            Event::Text(ref e) if run_text.is_some() => {
                if let Some(buf) = run_text.as_mut() {
                    buf.push_str(&String::from_utf8_lossy(e.as_ref()));
                }
                run_events.push(event.into_owned());
            }
            Event::GeneralRef(ref e) if run_text.is_some() => {
                if let Some(buf) = run_text.as_mut()
                    && let Some(resolved) = resolve_entity(&String::from_utf8_lossy(e.as_ref()))
                {
                    buf.push_str(&resolved);
                }
                run_events.push(event.into_owned());
            }
            Event::End(e) if e.name().as_ref() == b"w:t" => {
                if let Some(buf) = run_text.take() {
                    if buf.trim().is_empty() {
                        for ev in run_events.drain(..) {
                            writer.write_event(ev)?;
                        }
                    } else {
                        let converted = tcvn3::transcode(&buf);
                        writer.write_event(Event::Text(BytesText::new(&converted)))?;
                        extracted.push_str(&converted);
                        extracted.push(' ');
                        run_events.clear();
                    }
                }
                writer.write_event(Event::End(e.into_owned()))?;
            }
            Event::Eof => break,
            other => {
                // A `w:t` holds character data only; if markup shows up
                // inside one, stop treating it as a text run and replay what
                // was buffered.
                if run_text.take().is_some() {
                    for ev in run_events.drain(..) {
                        writer.write_event(ev)?;
                    }
                }
                writer.write_event(other)?;
            }
        }
    }

    let xml = String::from_utf8(writer.into_inner())?;
    Ok(ProcessedPart {
        xml: fonts::rewrite_font_refs(&xml, FONT_SUBSTITUTIONS),
        text: extracted,
    })
}

/// Resolve a named or numeric character reference to its text.
fn resolve_entity(entity: &str) -> Option<String> {
    match entity {
        "apos" => return Some("'".to_string()),
        "quot" => return Some("\"".to_string()),
        "lt" => return Some("<".to_string()),
        "gt" => return Some(">".to_string()),
        "amp" => return Some("&".to_string()),
        _ => {}
    }

    if let Some(hex) = entity.strip_prefix("#x") {
        if let Ok(code) = u32::from_str_radix(hex, 16)
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    } else if let Some(dec) = entity.strip_prefix('#') {
        if let Ok(code) = dec.parse::<u32>()
            && let Some(c) = char::from_u32(code)
        {
            return Some(c.to_string());
        }
    }

    None
}
