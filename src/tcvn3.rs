//! TCVN3 (ABC) to Unicode transcoding.
//!
//! TCVN3 is a pre-Unicode 8-bit Vietnamese encoding: letters with diacritics
//! were placed at extended-ASCII code points and rendered correctly only by
//! matching `.Vn*` fonts. When such text is decoded as Windows-1252/Latin-1
//! (the common default for DOCX parts), each legacy code unit shows up as the
//! corresponding Latin-1 character; [`transcode`] maps those back to the
//! precomposed Vietnamese letters they stood for.

/// TCVN3 code units and their Unicode replacements.
///
/// These are the exact entries of the historical TCVN3 table: the lowercase
/// forms, `đ`, and the seven uppercase base letters that have their own code
/// points (`Ă Â Đ Ê Ô Ơ Ư`). Uppercase derived forms have no entries; case
/// fidelity relies on the identity pass-through. `\u{ad}` (soft hyphen in
/// Latin-1) is the TCVN3 slot for `ư`.
const PAIRS: &[(char, &str)] = &[
    ('µ', "à"),
    ('¸', "á"),
    ('¶', "ả"),
    ('·', "ã"),
    ('¹', "ạ"),
    ('¨', "ă"),
    ('»', "ằ"),
    ('¾', "ắ"),
    ('¼', "ẳ"),
    ('½', "ẵ"),
    ('Æ', "ặ"),
    ('©', "â"),
    ('Ç', "ầ"),
    ('Ê', "ấ"),
    ('È', "ẩ"),
    ('É', "ẫ"),
    ('Ë', "ậ"),
    ('®', "đ"),
    ('Ì', "è"),
    ('Ð', "é"),
    ('Î', "ẻ"),
    ('Ï', "ẽ"),
    ('Ñ', "ẹ"),
    ('ª', "ê"),
    ('Ò', "ề"),
    ('Õ', "ế"),
    ('Ó', "ể"),
    ('Ô', "ễ"),
    ('Ö', "ệ"),
    ('×', "ì"),
    ('Ý', "í"),
    ('Ø', "ỉ"),
    ('Ü', "ĩ"),
    ('Þ', "ị"),
    ('ß', "ò"),
    ('ã', "ó"),
    ('á', "ỏ"),
    ('â', "õ"),
    ('ä', "ọ"),
    ('«', "ô"),
    ('å', "ồ"),
    ('è', "ố"),
    ('æ', "ổ"),
    ('ç', "ỗ"),
    ('é', "ộ"),
    ('¬', "ơ"),
    ('ê', "ờ"),
    ('í', "ớ"),
    ('ë', "ở"),
    ('ì', "ỡ"),
    ('î', "ợ"),
    ('ï', "ù"),
    ('ó', "ú"),
    ('ñ', "ủ"),
    ('ò', "ũ"),
    ('ô', "ụ"),
    ('\u{ad}', "ư"),
    ('õ', "ừ"),
    ('ø', "ứ"),
    ('ö', "ử"),
    ('÷', "ữ"),
    ('ù', "ự"),
    ('ý', "ỳ"),
    ('ú', "ý"),
    ('û', "ỷ"),
    ('ü', "ỹ"),
    ('þ', "ỵ"),
    ('¡', "Ă"),
    ('¢', "Â"),
    ('§', "Đ"),
    ('£', "Ê"),
    ('¤', "Ô"),
    ('¥', "Ơ"),
    ('¦', "Ư"),
];

/// O(1) lookup table over the 8-bit TCVN3 domain, built at compile time.
static TABLE: [Option<&str>; 256] = build_table();

const fn build_table() -> [Option<&'static str>; 256] {
    let mut table = [None; 256];
    let mut i = 0;
    while i < PAIRS.len() {
        let (c, replacement) = PAIRS[i];
        table[c as usize] = Some(replacement);
        i += 1;
    }
    table
}

/// Look up the Unicode replacement for a single TCVN3 code unit.
///
/// Returns `None` for characters outside the table (plain ASCII, anything
/// above U+00FF), which callers pass through unchanged.
pub fn lookup(c: char) -> Option<&'static str> {
    let code = c as u32;
    if code < 256 { TABLE[code as usize] } else { None }
}

/// Convert a string from TCVN3 to Unicode.
///
/// Processes the input one character at a time in order. Mapped characters
/// emit their replacement (which may be more than one character); everything
/// else passes through unchanged, so the function is total over all input.
///
/// # Example
///
/// ```
/// use vndocx::tcvn3::transcode;
///
/// assert_eq!(transcode("Hµ Néi"), "Hà Nội");
/// assert_eq!(transcode("plain ASCII 123"), "plain ASCII 123");
/// ```
pub fn transcode(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match lookup(c) {
            Some(replacement) => out.push_str(replacement),
            None => out.push(c),
        }
    }
    out
}
