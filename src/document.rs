//! Output record of a full extraction.
//!
//! ## Example
//!
//! ```rust
//! use docfeatures::extract;
//!
//! let html = br#"<title>Example Site</title><p>The Quick Fox</p>"#;
//! let doc = extract(html, "https://example.com").unwrap();
//!
//! assert_eq!(doc.metadata.title, "Example Site");
//! assert_eq!(doc.tokens, ["quick", "fox"]);
//! println!("{}", serde_json::to_string_pretty(&doc).unwrap());
//! ```

use serde::{Deserialize, Serialize};

use crate::metadata::Metadata;

/// Metadata record and body token stream of one document.
///
/// The two parts are independent once the body text has been read: the
/// tokens come from the `<body>` element after noise removal, the metadata
/// from the untouched head lookups.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedDocument {
    pub metadata: Metadata,

    /// Lowercase `a`-`z` tokens in body order, stop words removed.
    pub tokens: Vec<String>,
}

impl ExtractedDocument {
    /// Tokens joined with `", "`, the layout used by the command-line output.
    pub fn joined_tokens(&self) -> String {
        self.tokens.join(", ")
    }
}
