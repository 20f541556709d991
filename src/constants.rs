//! Fixed lookup tables shared by every extraction.
//!
//! All tables here are read-only and initialised at most once, so they can be
//! consulted from any number of threads without synchronisation.

use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Tags whose whole subtree is dropped before body text is read.
pub const NOISE_TAGS: [&str; 4] = ["script", "style", "img", "iframe"];

/// Words that never appear in a token stream.
pub static STOP_WORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ["the", "is", "and", "of", "a", "to"].into_iter().collect());

pub const TITLE_TAG: &str = "title";
pub const BODY_TAG: &str = "body";
pub const META_TAG: &str = "meta";
pub const META_NAME_ATTR: &str = "name";
pub const META_CONTENT_ATTR: &str = "content";
pub const DESCRIPTION_NAME: &str = "description";
pub const KEYWORDS_NAME: &str = "keywords";

/// Root element name used when the parser produced no element at all.
pub const ROOT_TAG: &str = "html";

/// Number of leading bytes checked for a NUL byte before input is treated as
/// binary content.
pub const BINARY_SNIFF_LEN: usize = 8000;
