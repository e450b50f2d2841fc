use super::types::{AnnotatedChar, AnnotationId};

/// A maximal stretch of characters sharing one ordered annotation list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub text: String,
    /// Number of characters (input items) in `text`
    pub char_len: usize,
    pub annotations: Vec<AnnotationId>,
}

/// Groups characters into [`Run`]s, starting a new run whenever the
/// annotation list changes.
///
/// Lists are compared structurally and in order, so `[a, b]` and `[b, a]`
/// start separate runs.
#[derive(Debug, Default)]
pub struct RunBuilder {
    current: Option<Run>,
    out: Vec<Run>,
}

impl RunBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, item: &AnnotatedChar) {
        match &mut self.current {
            Some(run) if run.annotations == item.annotations => {
                run.text.push_str(&item.ch);
                run.char_len += 1;
            }
            _ => {
                self.flush();
                self.current = Some(Run {
                    text: item.ch.clone(),
                    char_len: 1,
                    annotations: item.annotations.clone(),
                });
            }
        }
    }

    pub fn finish(mut self) -> Vec<Run> {
        self.flush();
        self.out
    }

    fn flush(&mut self) {
        if let Some(run) = self.current.take() {
            self.out.push(run);
        }
    }
}

pub fn collect_runs(items: &[AnnotatedChar]) -> Vec<Run> {
    let mut builder = RunBuilder::new();
    for item in items {
        builder.push(item);
    }
    builder.finish()
}
