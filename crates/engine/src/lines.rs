//! Line classification and the whitespace-insensitive text forms used for
//! boundary matching.

use serde::{Deserialize, Serialize};

/// Classification of one physical source line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineClass {
    /// Preprocessor or import-style top-level line (`#...`, `using...`)
    Directive,
    /// Everything else
    Body,
}

/// Classify one physical line on its trimmed form.
///
/// Directive lines are excluded from boundary matching and tracked
/// separately, so a learner's extra includes/imports survive reconciliation.
#[must_use]
pub fn classify_line(line: &str) -> LineClass {
    let trimmed = line.trim();
    if trimmed.starts_with('#') || trimmed.starts_with("using") {
        LineClass::Directive
    } else {
        LineClass::Body
    }
}

/// Comment lines never take part in matching.
pub(crate) fn is_comment(line: &str) -> bool {
    line.trim().starts_with("//")
}

/// The exact character set removed by compaction. A fixed set rather than
/// `char::is_whitespace`: unicode spaces inside string literals are content,
/// and stripping them would change which candidates match.
pub(crate) fn is_layout(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0C' | '\x0B')
}

/// Body-only view of `text`: comment and directive lines dropped, remaining
/// lines rejoined with `\n`.
///
/// Splits on `\n` specifically so a CR before the break stays attached to its
/// line and survives into recovered slices.
pub(crate) fn body_text(text: &str) -> String {
    text.split('\n')
        .filter(|line| !is_comment(line) && classify_line(line) == LineClass::Body)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Trimmed directive lines of `text`, in encountered order.
pub(crate) fn directive_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(str::trim)
        .filter(|line| classify_line(line) == LineClass::Directive)
        .collect()
}

/// Body text of a template segment with every layout character removed.
/// Used only to locate the segment inside a compacted candidate.
pub(crate) fn normalize_segment(segment: &str) -> String {
    body_text(segment).chars().filter(|c| !is_layout(*c)).collect()
}

/// A candidate's body text compacted for matching, plus the map back into
/// the uncompacted form.
#[derive(Debug)]
pub(crate) struct CompactCandidate {
    body: String,
    compact: String,
    /// Byte offset in `body` for each byte of `compact`.
    offsets: Vec<usize>,
}

impl CompactCandidate {
    pub(crate) fn build(candidate: &str) -> Self {
        let body = body_text(candidate);
        let mut compact = String::with_capacity(body.len());
        let mut offsets = Vec::with_capacity(body.len());
        for (offset, c) in body.char_indices() {
            if !is_layout(c) {
                compact.push(c);
                // One map entry per encoded byte, so match positions (byte
                // indices into `compact`) index directly.
                for _ in 0..c.len_utf8() {
                    offsets.push(offset);
                }
            }
        }
        Self {
            body,
            compact,
            offsets,
        }
    }

    pub(crate) fn compact(&self) -> &str {
        &self.compact
    }

    /// Length of the compacted text in bytes.
    pub(crate) fn len(&self) -> usize {
        self.compact.len()
    }

    /// Slice of the original body text spanned by compacted byte positions
    /// `start..end`. A boundary equal to `len()` maps to the end of the body.
    pub(crate) fn body_slice(&self, start: usize, end: usize) -> &str {
        let a = self.body_offset(start);
        let b = self.body_offset(end);
        &self.body[a..b]
    }

    fn body_offset(&self, compact_pos: usize) -> usize {
        self.offsets
            .get(compact_pos)
            .copied()
            .unwrap_or(self.body.len())
    }
}
