//! Unicode normalisation applied to metadata fields.

use unicode_normalization::{is_nfc, UnicodeNormalization};

/// Returns `text` in canonical composition form (NFC).
///
/// Already composed input, which is the common case, is copied without
/// running the composition pass.
pub fn nfc(text: &str) -> String {
    if is_nfc(text) {
        text.to_string()
    } else {
        text.nfc().collect()
    }
}
