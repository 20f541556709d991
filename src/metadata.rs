//! Metadata record extracted from the document head.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DESCRIPTION_NAME, KEYWORDS_NAME, META_CONTENT_ATTR, META_NAME_ATTR, META_TAG, TITLE_TAG,
};
use crate::dom::{Document, Matcher};
use crate::normalize::nfc;

const TITLE: Matcher<'static> = Matcher::tag(TITLE_TAG);
const DESCRIPTION: Matcher<'static> =
    Matcher::tag(META_TAG).with_attr(META_NAME_ATTR, DESCRIPTION_NAME);
const KEYWORDS: Matcher<'static> = Matcher::tag(META_TAG).with_attr(META_NAME_ATTR, KEYWORDS_NAME);

/// The fixed four-field summary of a document consumed by index builders.
///
/// Every field is a plain string; absent sources give an empty string rather
/// than an error. Title, description and keywords are always in Unicode
/// canonical composition form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Locator supplied by the caller, echoed unchanged. May be empty.
    pub url: String,

    /// Text content of the first `<title>` element in document order.
    pub title: String,

    /// `content` of the first `<meta name="description">`.
    pub description: String,

    /// `content` of the first `<meta name="keywords">`, kept as the raw
    /// comma/space separated string.
    pub keywords: String,
}

impl Metadata {
    /// Reads title, description and keywords from `document`.
    ///
    /// Attribute matching is exact: `<meta name="Description">` is not a
    /// description. A matching `<meta>` without a `content` attribute yields
    /// an empty string; later `<meta>` elements are not consulted.
    pub fn from_document(document: &Document, url: &str) -> Self {
        let title = document
            .find_first(&TITLE)
            .map(|title| title.text())
            .unwrap_or_default();
        let description = meta_content(document, &DESCRIPTION);
        let keywords = meta_content(document, &KEYWORDS);

        Self {
            url: url.to_string(),
            title: nfc(&title),
            description: nfc(description),
            keywords: nfc(keywords),
        }
    }
}

fn meta_content<'a>(document: &'a Document, matcher: &Matcher<'_>) -> &'a str {
    document
        .find_first(matcher)
        .and_then(|meta| meta.attr(META_CONTENT_ATTR))
        .unwrap_or_default()
}
