//! Error types for document conversion.

use thiserror::Error;

/// Errors that can occur while converting a document.
///
/// Every kind is terminal for a single conversion: the pipeline is pure and
/// deterministic, so nothing is retried internally and no failure is
/// downgraded to a partial result.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The input bytes could not be opened as a DOCX (zip) container.
    #[error("unreadable document container: {0}")]
    UnreadableInput(#[from] zip::result::ZipError),

    /// A document part exists but its bytes are not well-formed XML.
    #[error("malformed XML in {part}: {source}")]
    MalformedMarkup {
        part: String,
        #[source]
        source: quick_xml::Error,
    },

    /// No archive entry matched the content-part naming convention; the
    /// input is not a recognizable Word document (distinct from a document
    /// whose body is merely empty).
    #[error("no valid document structure found (expected word/document.xml)")]
    NoDocumentBody,

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("UTF-8 decoding error: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, Error>;
