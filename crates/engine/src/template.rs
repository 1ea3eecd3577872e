//! Template segmentation and reassembly.

use crate::error::{EngineError, Result};

/// Default sentinel marker splitting a template into segments and blanks.
pub const DEFAULT_MARKER: &str = "____MARK____";

/// A fill-in template: N sentinel markers dividing the source into N+1 fixed
/// scaffold segments and N editable blanks.
///
/// Segmentation is the only derived state; a `Template` is immutable after
/// parsing and safe to share across reconciliation calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    marker: String,
    segments: Vec<String>,
}

impl Template {
    /// Segment `text` on [`DEFAULT_MARKER`].
    pub fn parse(text: &str) -> Result<Self> {
        Self::parse_with_marker(text, DEFAULT_MARKER)
    }

    /// Segment `text` on an explicit sentinel.
    ///
    /// Empty text is an error. Text without the sentinel is a valid template
    /// with zero blanks; callers decide what a blank-less exercise means. An
    /// empty sentinel never matches anything and also yields the zero-blank
    /// segmentation.
    pub fn parse_with_marker(text: &str, marker: &str) -> Result<Self> {
        if text.is_empty() {
            return Err(EngineError::EmptyTemplate);
        }
        let segments = if marker.is_empty() {
            vec![text.to_string()]
        } else {
            text.split(marker).map(str::to_string).collect()
        };
        Ok(Self {
            marker: marker.to_string(),
            segments,
        })
    }

    /// The fixed scaffold segments in order, always `blank_count() + 1` of
    /// them.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of editable blanks.
    #[must_use]
    pub fn blank_count(&self) -> usize {
        self.segments.len() - 1
    }

    /// The sentinel this template was segmented on.
    #[must_use]
    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Reassemble a full source file by substituting `blanks` into the
    /// template, the inverse of reconciliation.
    pub fn fill<S: AsRef<str>>(&self, blanks: &[S]) -> Result<String> {
        if blanks.len() != self.blank_count() {
            return Err(EngineError::BlankCountMismatch {
                expected: self.blank_count(),
                actual: blanks.len(),
            });
        }
        let mut out = String::with_capacity(
            self.segments.iter().map(String::len).sum::<usize>()
                + blanks.iter().map(|b| b.as_ref().len()).sum::<usize>(),
        );
        for (i, segment) in self.segments.iter().enumerate() {
            out.push_str(segment);
            if let Some(blank) = blanks.get(i) {
                out.push_str(blank.as_ref());
            }
        }
        Ok(out)
    }
}
