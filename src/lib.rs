//! # docfeatures
//!
//! Ingestion-time "document to features" step for a crawler/indexer pipeline.
//!
//! ## Overview
//!
//! Given one raw HTML document and the URL the caller knows it by, docfeatures
//! produces two artifacts for a downstream search index:
//!
//! - a fixed-shape [`Metadata`] record: URL, title, description and keywords
//! - a normalized token stream of the document's body text: lowercase ASCII
//!   letter runs with stop words removed
//!
//! ## Basic Usage
//!
//! ```rust
//! use docfeatures::extract;
//!
//! let html = br#"
//!     <html>
//!     <head>
//!         <title>Example Site</title>
//!         <meta name="description" content="A demo page">
//!     </head>
//!     <body><p>The Quick Fox</p><script>ignored()</script></body>
//!     </html>
//! "#;
//!
//! let doc = extract(html, "https://example.com").unwrap();
//!
//! assert_eq!(doc.metadata.url, "https://example.com");
//! assert_eq!(doc.metadata.title, "Example Site");
//! assert_eq!(doc.metadata.description, "A demo page");
//! assert_eq!(doc.metadata.keywords, "");
//! assert_eq!(doc.tokens, ["quick", "fox"]);
//! ```
//!
//! ### Custom Options
//!
//! ```rust
//! use docfeatures::{ExtractOptions, Extractor};
//!
//! let options = ExtractOptions::builder()
//!     .extra_noise_tags(vec!["nav".to_string()])
//!     .build();
//!
//! let extractor = Extractor::new(Some(options));
//! let doc = extractor
//!     .extract(b"<nav>Menu</nav><p>Article text</p>", "")
//!     .unwrap();
//! assert_eq!(doc.tokens, ["article", "text"]);
//! ```
//!
//! ## Error Handling
//!
//! ```rust
//! use docfeatures::{extract_file, ExtractError};
//!
//! match extract_file("does/not/exist.html", "https://example.com") {
//!     Ok(doc) => println!("Tokens: {}", doc.joined_tokens()),
//!     Err(ExtractError::SourceRead { path, .. }) => {
//!         eprintln!("cannot read {}", path.display());
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```
//!
//! Missing `<title>`, `<meta>` or `<body>` elements are not errors. They give
//! empty strings and an empty token stream.
//!
//! ## Algorithm
//!
//! The document is parsed permissively with `html5ever` into an owned tree.
//! The title is the text of the first `<title>` element, description and
//! keywords are the `content` attributes of the first `<meta>` elements whose
//! `name` is exactly `description` or `keywords`; all three are
//! NFC-normalized. `script`, `style`, `img` and `iframe` subtrees are then
//! removed and the text of the `<body>` element is tokenized.
//!
//! ## Logging
//!
//! Diagnostics are emitted as `tracing` events. The library never installs a
//! subscriber.

mod constants;
pub mod dom;
mod document;
mod error;
mod extractor;
mod metadata;
mod normalize;
mod options;
mod tokenizer;

use std::path::Path;

// Public exports
pub use constants::{BINARY_SNIFF_LEN, NOISE_TAGS, STOP_WORDS};
pub use document::ExtractedDocument;
pub use error::{ExtractError, Result};
pub use extractor::Extractor;
pub use metadata::Metadata;
pub use normalize::nfc;
pub use options::{ExtractOptions, ExtractOptionsBuilder};
pub use tokenizer::{tokenize, Tokenizer};

/// Parses `bytes` and returns the metadata record and cleaned body text,
/// using default options.
pub fn extract_metadata(bytes: &[u8], url: &str) -> Result<(Metadata, String)> {
    Extractor::default().extract_metadata(bytes, url)
}

/// Metadata record and token stream of `bytes`, using default options.
pub fn extract(bytes: &[u8], url: &str) -> Result<ExtractedDocument> {
    Extractor::default().extract(bytes, url)
}

/// Reads the file at `path` and extracts it using default options.
pub fn extract_file(path: impl AsRef<Path>, url: &str) -> Result<ExtractedDocument> {
    Extractor::default().extract_file(path, url)
}
