//! # vndocx
//!
//! Converts legacy TCVN3 (ABC)-encoded Vietnamese DOCX documents to Unicode.
//!
//! TCVN3 documents store Vietnamese text as extended-ASCII code units that
//! only render correctly under the proprietary `.Vn*` fonts. This crate
//! rewrites such documents in place:
//!
//! - Transcodes every text run to standard Unicode
//! - Retargets `.VnTime`/`.VnArial`/`.VnCourier` font references to
//!   Times New Roman / Arial / Courier New across all document parts,
//!   styles, the font table, and the theme
//! - Preserves all structure: tables, images, run formatting, namespaces
//! - Extracts a plain-text preview of the converted document
//!
//! ## Quick Start
//!
//! ```no_run
//! use vndocx::convert_docx;
//!
//! let result = convert_docx("legacy.docx")?;
//! std::fs::write("converted.docx", &result.docx)?;
//! println!("preview: {}", result.preview);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! For in-memory use (e.g. bytes received from an upload), see
//! [`convert_docx_bytes`].

pub mod docx;
pub mod error;
pub mod fonts;
pub mod tcvn3;
pub(crate) mod util;

pub use docx::{Conversion, convert_docx, convert_docx_bytes, convert_docx_from_reader};
pub use error::{Error, Result};
