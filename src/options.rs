//! Configuration options for extraction.
//!
//! This module provides [`ExtractOptions`] and [`ExtractOptionsBuilder`].
//! The built-in noise-tag and stop-word tables are never modified; options
//! only add entries for the [`Extractor`](crate::Extractor) they are given to.
//!
//! ## Example
//!
//! ```rust
//! use docfeatures::{ExtractOptions, Extractor};
//!
//! // Using default options
//! let extractor = Extractor::new(None);
//!
//! // Using builder for custom options
//! let options = ExtractOptions::builder()
//!     .extra_noise_tags(vec!["nav".to_string()])
//!     .extra_stop_words(vec!["an".to_string()])
//!     .build();
//!
//! let extractor = Extractor::new(Some(options));
//! ```

/// Configuration options for an [`Extractor`](crate::Extractor).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractOptions {
    /// Tag names removed from the body, in addition to `script`, `style`,
    /// `img` and `iframe`.
    ///
    /// Names are compared exactly against the lowercase names the HTML parser
    /// produces.
    ///
    /// Default: empty
    pub extra_noise_tags: Vec<String>,

    /// Words dropped from the token stream, in addition to the built-in
    /// stop words.
    ///
    /// Entries are folded to lowercase. Entries that contain anything other
    /// than ASCII letters can never match a token and are ignored.
    ///
    /// Default: empty
    pub extra_stop_words: Vec<String>,
}

impl ExtractOptions {
    /// Creates a new builder for ExtractOptions
    pub fn builder() -> ExtractOptionsBuilder {
        ExtractOptionsBuilder::default()
    }
}

/// Builder for [`ExtractOptions`].
#[derive(Default)]
pub struct ExtractOptionsBuilder {
    extra_noise_tags: Option<Vec<String>>,
    extra_stop_words: Option<Vec<String>>,
}

impl ExtractOptionsBuilder {
    /// Set additional noise tags
    pub fn extra_noise_tags(mut self, tags: Vec<String>) -> Self {
        self.extra_noise_tags = Some(tags);
        self
    }

    /// Set additional stop words
    pub fn extra_stop_words(mut self, words: Vec<String>) -> Self {
        self.extra_stop_words = Some(words);
        self
    }

    /// Build the ExtractOptions
    pub fn build(self) -> ExtractOptions {
        let defaults = ExtractOptions::default();
        ExtractOptions {
            extra_noise_tags: self.extra_noise_tags.unwrap_or(defaults.extra_noise_tags),
            extra_stop_words: self.extra_stop_words.unwrap_or(defaults.extra_stop_words),
        }
    }
}
