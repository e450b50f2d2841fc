use std::fmt;

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use super::error::{InvalidInputError, InvalidItem};

/// Opaque reference to an annotation in the host's annotation store.
///
/// Only equality and ordering within a list matter; the token itself carries
/// no meaning here.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnnotationId(String);

impl AnnotationId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AnnotationId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for AnnotationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single user-perceived character with the ordered annotation list
/// applied to it.
///
/// `ch` holds one extended grapheme cluster, so `"e\u{301}"` or `"🇫🇷"` is
/// one character here, as it is one item in the host's linear data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedChar {
    pub ch: String,
    pub annotations: Vec<AnnotationId>,
}

impl AnnotatedChar {
    pub fn new(ch: impl Into<String>, annotations: Vec<AnnotationId>) -> Self {
        Self {
            ch: ch.into(),
            annotations,
        }
    }

    /// A character with no annotations
    pub fn plain(ch: impl Into<String>) -> Self {
        Self::new(ch, Vec::new())
    }
}

/// One item of the host's flat linear data, as handed over at the boundary.
///
/// The serialized forms mirror the host: `"a"`, `["a", ["h1", "h2"]]`, or an
/// element object such as `{"type": "inlineImage"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LinearItem {
    /// A bare character
    Text(String),
    /// A character with its annotation list
    Annotated(String, Vec<AnnotationId>),
    /// An inline node; never a character
    Element {
        #[serde(rename = "type")]
        element_type: String,
    },
}

impl LinearItem {
    /// Validates this item as a character, reporting `index` on failure.
    pub fn to_annotated_char(&self, index: usize) -> Result<AnnotatedChar, InvalidInputError> {
        match self {
            LinearItem::Text(s) => Ok(AnnotatedChar::plain(single_grapheme(s, index)?)),
            LinearItem::Annotated(s, annotations) => Ok(AnnotatedChar::new(
                single_grapheme(s, index)?,
                annotations.clone(),
            )),
            LinearItem::Element { element_type } => Err(InvalidInputError {
                index,
                reason: InvalidItem::Element(element_type.clone()),
            }),
        }
    }
}

impl From<char> for LinearItem {
    fn from(ch: char) -> Self {
        LinearItem::Text(ch.to_string())
    }
}

fn single_grapheme(s: &str, index: usize) -> Result<&str, InvalidInputError> {
    let mut graphemes = s.graphemes(true);
    match (graphemes.next(), graphemes.next()) {
        (Some(g), None) => Ok(g),
        _ => Err(InvalidInputError {
            index,
            reason: InvalidItem::NotSingleChar(s.to_string()),
        }),
    }
}

/// A run of text carrying annotations beyond the common prefix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chunk {
    /// Offset into [`ChunkedText::text`], in characters (grapheme clusters,
    /// one per input item)
    pub start: usize,
    pub text: String,
    pub annotations: Vec<AnnotationId>,
}

impl Chunk {
    /// Exclusive end offset, in characters
    pub fn end(&self) -> usize {
        self.start + self.text.graphemes(true).count()
    }
}

/// Annotated content chunked at annotation changes.
///
/// `text` is the full plain text. `common_annotations` is the longest
/// annotation prefix shared by every run, and `chunks` lists, in text order,
/// the runs that carry more annotations than that prefix.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChunkedText {
    pub text: String,
    pub common_annotations: Vec<AnnotationId>,
    pub chunks: Vec<Chunk>,
}

impl ChunkedText {
    pub fn new(text: String, common_annotations: Vec<AnnotationId>, chunks: Vec<Chunk>) -> Self {
        Self {
            text,
            common_annotations,
            chunks,
        }
    }

    /// The value for content with no characters: `("", [], [])`
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Length of `text` in characters
    pub fn char_len(&self) -> usize {
        self.text.graphemes(true).count()
    }

    /// Converts a character offset such as [`Chunk::start`] into a UTF-16
    /// code unit offset, for hosts that index strings that way.
    pub fn utf16_offset(&self, offset: usize) -> usize {
        self.text
            .graphemes(true)
            .take(offset)
            .map(|g| g.encode_utf16().count())
            .sum()
    }

    /// The annotations a chunk carries on top of `common_annotations`.
    pub fn extra_annotations<'a>(&self, chunk: &'a Chunk) -> &'a [AnnotationId] {
        let common = self.common_annotations.len().min(chunk.annotations.len());
        &chunk.annotations[common..]
    }
}
