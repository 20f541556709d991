//! Owned document tree built from permissively parsed HTML.
//!
//! Parsing is delegated to `html5ever`, which recovers from unclosed,
//! overlapping and unknown tags the same way browsers do. The resulting
//! `RcDom` is converted into a plain tagged-union tree ([`Node`]) that the
//! rest of the crate traverses and edits without reference counting.
//!
//! ## Example
//!
//! ```rust
//! use docfeatures::dom::{Document, Matcher};
//!
//! let mut doc = Document::parse_str("<p>Hello<script>x()</script> world</p>");
//! assert_eq!(doc.remove_subtrees(&["script"]), 1);
//!
//! let body = doc.find_first(&Matcher::tag("body")).unwrap();
//! assert_eq!(body.text(), "Hello world");
//! ```

use std::borrow::Cow;

use html5ever::parse_document;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};
use tracing::{instrument, warn};

use crate::constants::{BINARY_SNIFF_LEN, BODY_TAG, ROOT_TAG};
use crate::error::{ExtractError, Result};

/// A node of the document tree.
#[derive(Debug)]
pub enum Node {
    /// An element with its attributes and children
    Element(Element),
    /// A run of character data
    Text(String),
}

impl Node {
    /// Concatenated text of this node and all its descendants, in document order.
    pub fn text(&self) -> String {
        match self {
            Node::Text(text) => text.clone(),
            Node::Element(element) => element.text(),
        }
    }

    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        }
    }
}

/// An element node.
///
/// Attributes keep their source order. The HTML parser lowercases tag and
/// attribute names and keeps only the first occurrence of a duplicated
/// attribute; values are stored exactly as written.
///
/// Every walk over the tree uses an explicit work stack, so nesting depth is
/// bounded by memory rather than by the thread's stack.
#[derive(Debug)]
pub struct Element {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Creates an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Appends an attribute.
    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Appends a child element.
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(Node::Element(child));
        self
    }

    /// Appends a text child.
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn attrs(&self) -> &[(String, String)] {
        &self.attrs
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Value of the first attribute called `name`.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(attr_name, _)| attr_name == name)
            .map(|(_, value)| value.as_str())
    }

    /// First element matching `matcher` in a pre-order walk that starts with
    /// `self`.
    pub fn find_first(&self, matcher: &Matcher<'_>) -> Option<&Element> {
        let mut pending = vec![self];
        while let Some(element) = pending.pop() {
            if matcher.matches(element) {
                return Some(element);
            }
            pending.extend(element.children.iter().rev().filter_map(Node::as_element));
        }
        None
    }

    /// Concatenated text of every text descendant, in document order, with
    /// no separators added.
    pub fn text(&self) -> String {
        let mut out = String::new();
        let mut pending: Vec<&Node> = self.children.iter().rev().collect();
        while let Some(node) = pending.pop() {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Element(element) => pending.extend(element.children.iter().rev()),
            }
        }
        out
    }

    /// Detaches every descendant element whose name satisfies `is_removed`.
    /// Matches nested inside an already detached subtree are not visited.
    fn remove_descendants(&mut self, is_removed: &dyn Fn(&str) -> bool) -> usize {
        let mut removed = 0;
        let mut pending: Vec<&mut Element> = vec![self];
        while let Some(element) = pending.pop() {
            let before = element.children.len();
            element.children.retain(|child| match child {
                Node::Element(element) => !is_removed(element.name.as_str()),
                Node::Text(_) => true,
            });
            removed += before - element.children.len();

            pending.extend(element.children.iter_mut().filter_map(|child| match child {
                Node::Element(element) => Some(element),
                Node::Text(_) => None,
            }));
        }
        removed
    }
}

impl Drop for Element {
    fn drop(&mut self) {
        // Flatten descendants so each dropped element has no children left.
        let mut pending = std::mem::take(&mut self.children);
        while let Some(node) = pending.pop() {
            if let Node::Element(mut element) = node {
                pending.append(&mut element.children);
            }
        }
    }
}

/// Predicate selecting elements by tag name and, optionally, one attribute.
///
/// All comparisons are exact string equality: no case folding, no trimming.
///
/// ```rust
/// use docfeatures::dom::{Element, Matcher};
///
/// let meta = Element::new("meta").with_attr("name", "description");
/// assert!(Matcher::tag("meta").with_attr("name", "description").matches(&meta));
/// assert!(!Matcher::tag("meta").with_attr("name", "Description").matches(&meta));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Matcher<'a> {
    tag: &'a str,
    attr: Option<(&'a str, &'a str)>,
}

impl<'a> Matcher<'a> {
    /// Matches any element named `tag`.
    pub const fn tag(tag: &'a str) -> Self {
        Self { tag, attr: None }
    }

    /// Additionally requires attribute `name` to equal `value`.
    pub const fn with_attr(self, name: &'a str, value: &'a str) -> Self {
        Self {
            tag: self.tag,
            attr: Some((name, value)),
        }
    }

    pub fn matches(&self, element: &Element) -> bool {
        element.name == self.tag
            && self
                .attr
                .map_or(true, |(name, value)| element.attr(name) == Some(value))
    }
}

/// A parsed HTML document with exactly one root element.
#[derive(Debug)]
pub struct Document {
    root: Element,
}

impl Document {
    /// Decodes `bytes` as UTF-8 and parses them.
    ///
    /// Invalid UTF-8 sequences are replaced with U+FFFD and parsing goes on.
    ///
    /// # Errors
    ///
    /// Returns [`ExtractError::MalformedInput`] when the bytes are binary
    /// rather than text: a NUL byte within the first
    /// [`BINARY_SNIFF_LEN`](crate::BINARY_SNIFF_LEN) bytes. Unbalanced or
    /// unknown markup is never an error.
    #[instrument(level = "debug", skip(bytes), fields(input_size = bytes.len()))]
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        if let Some(offset) = bytes.iter().take(BINARY_SNIFF_LEN).position(|&b| b == 0) {
            warn!(offset, "input looks like binary content");
            return Err(ExtractError::MalformedInput { offset });
        }

        let html = String::from_utf8_lossy(bytes);
        if matches!(html, Cow::Owned(_)) {
            warn!("input is not valid UTF-8, invalid sequences replaced");
        }
        Ok(Self::parse_str(&html))
    }

    /// Parses already decoded markup. Never fails.
    pub fn parse_str(html: &str) -> Self {
        let html = html.strip_prefix('\u{feff}').unwrap_or(html);
        let dom = parse_document(RcDom::default(), Default::default()).one(html);

        let root = dom
            .document
            .children
            .borrow()
            .iter()
            .find_map(convert)
            .unwrap_or_else(|| Element::new(ROOT_TAG));

        Self { root }
    }

    /// Wraps a hand-built tree.
    pub fn from_root(root: Element) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    /// First element in document order matching `matcher`.
    pub fn find_first(&self, matcher: &Matcher<'_>) -> Option<&Element> {
        self.root.find_first(matcher)
    }

    /// The first `<body>` element, if any.
    pub fn body(&self) -> Option<&Element> {
        self.find_first(&Matcher::tag(BODY_TAG))
    }

    /// Removes every element named in `tag_names`, together with its
    /// descendants, anywhere below the root. Returns the number of subtrees
    /// removed. The root element itself is kept even if its name is listed.
    pub fn remove_subtrees<S: AsRef<str>>(&mut self, tag_names: &[S]) -> usize {
        self.root
            .remove_descendants(&|name: &str| tag_names.iter().any(|tag| tag.as_ref() == name))
    }

    /// Text content of the whole document.
    pub fn text(&self) -> String {
        self.root.text()
    }
}

/// An element being converted, with the parser handles of its children.
struct Frame {
    element: Element,
    handles: Vec<Handle>,
    next: usize,
}

impl Frame {
    fn new(handle: &Handle) -> Option<Self> {
        let NodeData::Element {
            ref name,
            ref attrs,
            ref template_contents,
            ..
        } = handle.data
        else {
            return None;
        };

        let attrs = attrs
            .borrow()
            .iter()
            .map(|attr| (attr.name.local.to_string(), attr.value.to_string()))
            .collect();

        // Template content lives in a separate fragment; it is read as the
        // template's children.
        let mut handles = handle.children.borrow().clone();
        if let Some(content) = template_contents.borrow().as_ref() {
            handles.extend(content.children.borrow().iter().cloned());
        }

        Some(Self {
            element: Element {
                name: name.local.to_string(),
                attrs,
                children: Vec::new(),
            },
            handles,
            next: 0,
        })
    }
}

/// Converts the element at `root` and its descendants. Text keeps its place
/// among siblings; comments, doctypes and processing instructions are
/// dropped. Returns `None` when `root` is not an element.
fn convert(root: &Handle) -> Option<Element> {
    let mut stack = vec![Frame::new(root)?];
    loop {
        let frame = stack.last_mut()?;
        match frame.handles.get(frame.next).cloned() {
            Some(handle) => {
                frame.next += 1;
                match handle.data {
                    NodeData::Text { ref contents } => frame
                        .element
                        .children
                        .push(Node::Text(contents.borrow().to_string())),
                    NodeData::Element { .. } => stack.extend(Frame::new(&handle)),
                    _ => {}
                }
            }
            None => {
                let finished = stack.pop()?.element;
                match stack.last_mut() {
                    Some(parent) => parent.element.children.push(Node::Element(finished)),
                    None => return Some(finished),
                }
            }
        }
    }
}
