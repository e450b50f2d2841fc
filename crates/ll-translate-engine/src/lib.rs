pub mod approval;
pub mod chunking;
pub mod dirty;
pub mod host;

// Re-export key types for easier usage
pub use approval::{ApprovalStore, ApprovedPair, LangCode, NodeId, approve_pair};
pub use chunking::{
    AnnotatedChar, AnnotationId, Chunk, ChunkedText, ChunkedTextBuilder, InvalidInputError,
    LinearItem, build_chunked, chunk_linear_data,
};
pub use dirty::{AttributeModel, ClassToggle, DIRTY_ATTRIBUTE, DirtyState, DirtyStateBinding};
pub use host::{DocumentSource, approval_store_for, chunked_for_node};
