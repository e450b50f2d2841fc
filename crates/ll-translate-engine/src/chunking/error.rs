use thiserror::Error;

/// A linear-data item that is neither a bare character nor a character with
/// an annotation list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid linear data at index {index}: {reason}")]
pub struct InvalidInputError {
    /// Position of the offending item in the input sequence
    pub index: usize,
    pub reason: InvalidItem,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidItem {
    #[error("expected a single character, found {0:?}")]
    NotSingleChar(String),
    #[error("expected a character, found a '{0}' element")]
    Element(String),
}
