//! Adapter between the chunking core and a host document.

use crate::approval::{ApprovalStore, LangCode};
use crate::chunking::{ChunkedText, InvalidInputError, LinearItem, chunk_linear_data};

/// A host document that can hand over the linear data of its content nodes.
pub trait DocumentSource {
    type Node;

    /// Language of this document
    fn lang(&self) -> LangCode;

    /// Flat linear data covered by a content node, in document order
    fn data_from_node(&self, node: &Self::Node) -> Vec<LinearItem>;
}

/// The node's current content, chunked at annotation changes.
///
/// Computed fresh on every call; callers re-invoke when the content changes.
pub fn chunked_for_node<D: DocumentSource>(
    source: &D,
    node: &D::Node,
) -> Result<ChunkedText, InvalidInputError> {
    let data = source.data_from_node(node);
    chunk_linear_data(&data).inspect_err(|e| log::warn!("cannot chunk node content: {e}"))
}

/// Creates an empty approval store for the source document's language.
pub fn approval_store_for<D: DocumentSource>(source: &D) -> ApprovalStore {
    ApprovalStore::new(source.lang())
}
