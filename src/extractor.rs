//! Extraction pipeline: bytes to metadata record and token stream.
//!
//! ```text
//! bytes -> parse -> metadata lookup
//!                -> noise removal -> body text -> tokenize
//! ```
//!
//! ## Example
//!
//! ```rust,no_run
//! use docfeatures::Extractor;
//!
//! let extractor = Extractor::new(None);
//! let doc = extractor.extract_file("input/page.html", "https://example.com")?;
//!
//! println!("Title: {}", doc.metadata.title);
//! println!("Tokens: {}", doc.joined_tokens());
//! # Ok::<(), docfeatures::ExtractError>(())
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, instrument};

use crate::{
    constants::NOISE_TAGS,
    document::ExtractedDocument,
    dom::Document,
    error::{ExtractError, Result},
    metadata::Metadata,
    options::ExtractOptions,
    tokenizer::Tokenizer,
};

/// Turns raw HTML into a [`Metadata`] record and a token stream.
///
/// An `Extractor` holds no per-document state; one instance can serve any
/// number of documents, from any number of threads.
#[derive(Debug, Clone)]
pub struct Extractor {
    options: ExtractOptions,
    noise_tags: Vec<String>,
    tokenizer: Tokenizer,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new(None)
    }
}

impl Extractor {
    /// Create a new Extractor
    ///
    /// # Arguments
    /// * `options` - Optional configuration options
    pub fn new(options: Option<ExtractOptions>) -> Self {
        let options = options.unwrap_or_default();
        let noise_tags = NOISE_TAGS
            .iter()
            .map(|tag| tag.to_string())
            .chain(options.extra_noise_tags.iter().cloned())
            .collect();
        let tokenizer = Tokenizer::with_stop_words(&options.extra_stop_words);

        Self {
            options,
            noise_tags,
            tokenizer,
        }
    }

    pub fn options(&self) -> &ExtractOptions {
        &self.options
    }

    /// Parses `bytes`, reads the metadata record, strips noise subtrees and
    /// returns the text of the `<body>` element.
    ///
    /// A document without a body element yields empty body text.
    ///
    /// # Errors
    ///
    /// [`ExtractError::MalformedInput`] when `bytes` is binary content. Invalid
    /// UTF-8 sequences are replaced, not rejected.
    #[instrument(skip(self, bytes), fields(input_size = bytes.len()))]
    pub fn extract_metadata(&self, bytes: &[u8], url: &str) -> Result<(Metadata, String)> {
        let mut document = Document::parse(bytes)?;
        let metadata = Metadata::from_document(&document, url);

        let removed = document.remove_subtrees(self.noise_tags.as_slice());
        let body_text = match document.body() {
            Some(body) => body.text(),
            None => {
                debug!("document has no body element");
                String::new()
            }
        };
        debug!(removed, body_len = body_text.len(), "extracted body text");

        Ok((metadata, body_text))
    }

    /// Full extraction: metadata record plus tokenized body text.
    ///
    /// # Errors
    ///
    /// [`ExtractError::MalformedInput`] when `bytes` is binary content.
    pub fn extract(&self, bytes: &[u8], url: &str) -> Result<ExtractedDocument> {
        let (metadata, body_text) = self.extract_metadata(bytes, url)?;
        let tokens = self.tokenizer.tokenize(&body_text);
        debug!(tokens = tokens.len(), "tokenized body text");

        Ok(ExtractedDocument { metadata, tokens })
    }

    /// Reads the whole file at `path` and extracts it.
    ///
    /// # Errors
    ///
    /// [`ExtractError::SourceRead`] when the file cannot be read,
    /// [`ExtractError::MalformedInput`] when its content is binary.
    pub fn extract_file(&self, path: impl AsRef<Path>, url: &str) -> Result<ExtractedDocument> {
        let path = path.as_ref();
        let bytes = fs::read(path).map_err(|source| ExtractError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), size = bytes.len(), "read source");

        self.extract(&bytes, url)
    }

    /// Tokenizes `text` with this extractor's stop words.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenizer.tokenize(text)
    }
}
