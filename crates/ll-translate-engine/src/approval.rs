//! Last approved correspondence per content node.
//!
//! When a translator approves a pair of blocks, the chunked text of both
//! sides is recorded in one [`ApprovedPair`] keyed by language. The same
//! handle is stored on the paired node of each document, so either side can
//! look up its own text and the two stay identical.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;

use ll_translate_config::LanguagePair;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chunking::ChunkedText;

static EMPTY: ChunkedText = ChunkedText {
    text: String::new(),
    common_annotations: Vec::new(),
    chunks: Vec::new(),
};

/// A language code such as `en` or `fr`
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LangCode(String);

impl LangCode {
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for LangCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

impl From<String> for LangCode {
    fn from(code: String) -> Self {
        Self(code)
    }
}

impl fmt::Display for LangCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stable identifier for a content node within one document
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize)]
pub struct NodeId(pub Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

/// Shared handle to a last approved correspondence, keyed by language.
///
/// Cloning shares the underlying value; [`ApprovedPair::shares_with`] tells
/// whether two handles are the same approval.
#[derive(Debug, Clone)]
pub struct ApprovedPair(Arc<BTreeMap<LangCode, ChunkedText>>);

impl ApprovedPair {
    /// Pairs the two texts by language.
    ///
    /// If both codes are the same only `lang2_text` is kept.
    pub fn new(languages: &LanguagePair, lang1_text: ChunkedText, lang2_text: ChunkedText) -> Self {
        if languages.lang1 == languages.lang2 {
            log::warn!(
                "approved pair uses '{}' for both languages; keeping the second text",
                languages.lang1
            );
        }
        let mut by_lang = BTreeMap::new();
        by_lang.insert(LangCode::new(languages.lang1.as_str()), lang1_text);
        by_lang.insert(LangCode::new(languages.lang2.as_str()), lang2_text);
        Self(Arc::new(by_lang))
    }

    pub fn get(&self, lang: &LangCode) -> Option<&ChunkedText> {
        self.0.get(lang)
    }

    pub fn languages(&self) -> impl Iterator<Item = &LangCode> {
        self.0.keys()
    }

    /// True if both handles refer to the same approval
    pub fn shares_with(&self, other: &ApprovedPair) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

/// Per-document store of last approved pairs, keyed by node.
#[derive(Debug)]
pub struct ApprovalStore {
    lang: LangCode,
    approved: HashMap<NodeId, ApprovedPair>,
}

impl ApprovalStore {
    pub fn new(lang: impl Into<LangCode>) -> Self {
        Self {
            lang: lang.into(),
            approved: HashMap::new(),
        }
    }

    /// Language of the document this store belongs to
    pub fn lang(&self) -> &LangCode {
        &self.lang
    }

    /// Text of the last approved correspondence for this node, in this
    /// document's language.
    ///
    /// Empty when the node has never been approved.
    pub fn last_approved(&self, node: NodeId) -> &ChunkedText {
        self.approved
            .get(&node)
            .and_then(|pair| pair.get(&self.lang))
            .unwrap_or(&EMPTY)
    }

    pub fn last_approved_pair(&self, node: NodeId) -> Option<&ApprovedPair> {
        self.approved.get(&node)
    }

    /// Sets the last approved correspondence for this node.
    ///
    /// The same handle must be set on the other document's paired node; see
    /// [`approve_pair`].
    pub fn set_last_approved_pair(&mut self, node: NodeId, pair: ApprovedPair) {
        if pair.get(&self.lang).is_none() {
            log::warn!(
                "approved pair for node {:?} has no text for language '{}'",
                node.0,
                self.lang
            );
        }
        log::debug!("setting last approved pair for node {:?}", node.0);
        self.approved.insert(node, pair);
    }

    pub fn clear(&mut self, node: NodeId) -> Option<ApprovedPair> {
        self.approved.remove(&node)
    }

    pub fn len(&self) -> usize {
        self.approved.len()
    }

    pub fn is_empty(&self) -> bool {
        self.approved.is_empty()
    }
}

/// Records one approval on both paired nodes, sharing a single handle.
pub fn approve_pair(
    left: (&mut ApprovalStore, NodeId),
    right: (&mut ApprovalStore, NodeId),
    pair: ApprovedPair,
) {
    let (left_store, left_node) = left;
    let (right_store, right_node) = right;
    left_store.set_last_approved_pair(left_node, pair.clone());
    right_store.set_last_approved_pair(right_node, pair);
}
