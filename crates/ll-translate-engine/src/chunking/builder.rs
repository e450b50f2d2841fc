use super::{
    error::InvalidInputError,
    prefix::common_prefix_len,
    runs::{Run, RunBuilder},
    types::{AnnotatedChar, AnnotationId, Chunk, ChunkedText, LinearItem},
};

/// Incrementally builds a [`ChunkedText`] from annotated characters.
///
/// Characters are grouped into runs as they arrive; `finish` computes the
/// common annotation prefix over all runs and emits the deviating chunks.
#[derive(Debug, Default)]
pub struct ChunkedTextBuilder {
    runs: RunBuilder,
}

impl ChunkedTextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: &AnnotatedChar) {
        self.runs.push(item);
    }

    pub fn finish(self) -> ChunkedText {
        assemble(self.runs.finish())
    }
}

/// Chunks a sequence of annotated characters at annotation changes.
pub fn build_chunked(items: &[AnnotatedChar]) -> ChunkedText {
    let mut builder = ChunkedTextBuilder::new();
    for item in items {
        builder.push(item);
    }
    builder.finish()
}

/// Validates host linear data and chunks it.
///
/// Fails on the first item that is not a character; no partial result is
/// produced.
pub fn chunk_linear_data(data: &[LinearItem]) -> Result<ChunkedText, InvalidInputError> {
    let mut builder = ChunkedTextBuilder::new();
    for (index, item) in data.iter().enumerate() {
        builder.push(&item.to_annotated_char(index)?);
    }
    Ok(builder.finish())
}

fn assemble(runs: Vec<Run>) -> ChunkedText {
    let Some(first) = runs.first() else {
        return ChunkedText::empty();
    };

    let lists: Vec<&[AnnotationId]> = runs.iter().map(|r| r.annotations.as_slice()).collect();
    let common_len = common_prefix_len(&lists);
    let common_annotations = first.annotations[..common_len].to_vec();

    let mut text = String::with_capacity(runs.iter().map(|r| r.text.len()).sum());
    let mut chunks = Vec::new();
    let mut start = 0;
    for run in runs {
        text.push_str(&run.text);
        // Compared by length: every list starts with the common prefix, so a
        // list of exactly that length is the prefix itself.
        if run.annotations.len() > common_len {
            chunks.push(Chunk {
                start,
                text: run.text,
                annotations: run.annotations,
            });
        }
        start += run.char_len;
    }

    log::trace!(
        "chunked {start} chars: {} common annotations, {} chunks",
        common_annotations.len(),
        chunks.len()
    );

    ChunkedText::new(text, common_annotations, chunks)
}
