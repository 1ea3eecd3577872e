//! Anchored reconciliation of a full candidate source file against a
//! segmented template.
//!
//! Matching runs over whitespace-compacted body text so learners can reindent
//! and re-wrap freely, while recovered blanks come from the uncompacted text
//! so their original formatting is preserved. The search cursor only moves
//! forward: each scaffold segment is looked for in the not-yet-consumed
//! remainder, which keeps boundaries in template order even when a segment's
//! text recurs earlier in the candidate.

use crate::error::{EngineError, Result};
use crate::lines::{directive_lines, normalize_segment, CompactCandidate};
use crate::template::Template;
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Original-formatting content recovered for one blank
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReconciledBlank {
    /// Blank position, 0-based
    pub index: usize,
    /// The learner's text, trimmed of leading/trailing whitespace
    pub content: String,
}

/// Recover the per-blank text a learner wrote into a flattened candidate.
///
/// Returns one [`ReconciledBlank`] per template blank, in order, with the
/// learner's extra directive lines prepended to blank 0. Fails closed with
/// [`EngineError::TemplateMismatch`] when any scaffold segment cannot be
/// located in order; no partial result is ever returned.
pub fn reconcile(candidate: &str, template: &Template) -> Result<Vec<ReconciledBlank>> {
    let blank_count = template.blank_count();
    if blank_count == 0 {
        return Ok(Vec::new());
    }

    let normalized: Vec<String> = template
        .segments()
        .iter()
        .map(|s| normalize_segment(s))
        .collect();
    let compacted = CompactCandidate::build(candidate);

    let mut starts = vec![0usize; blank_count];
    let mut ends = vec![0usize; blank_count];
    let mut cursor = 0usize;
    let last = normalized.len() - 1;
    for (i, needle) in normalized.iter().enumerate() {
        let found = if needle.is_empty() {
            // No scaffold to anchor on. Interior segments match zero-width
            // at the cursor; the final one pins the last blank's right edge
            // to the end of the candidate.
            if i == last {
                compacted.len()
            } else {
                cursor
            }
        } else {
            match find_from(compacted.compact(), needle, cursor) {
                Some(pos) => pos,
                None => {
                    debug!("scaffold segment {i} not found at or after offset {cursor}");
                    return Err(EngineError::mismatch(format!(
                        "scaffold segment {i} not found"
                    )));
                }
            }
        };
        trace!("segment {i} spans {found}..{} compacted", found + needle.len());
        if i > 0 {
            ends[i - 1] = found;
        }
        if i < blank_count {
            starts[i] = found + needle.len();
        }
        cursor = found + needle.len();
    }

    let mut blanks: Vec<ReconciledBlank> = (0..blank_count)
        .map(|i| ReconciledBlank {
            index: i,
            content: compacted.body_slice(starts[i], ends[i]).trim().to_string(),
        })
        .collect();

    let extra = directive_diff(candidate, template.segments());
    if !extra.is_empty() {
        let first = &mut blanks[0];
        let mut merged = extra.join("\n");
        if !first.content.is_empty() {
            merged.push('\n');
            merged.push_str(&first.content);
        }
        first.content = merged;
    }

    Ok(blanks)
}

/// First occurrence of `needle` in `haystack` at or after byte offset `from`.
fn find_from(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    haystack.get(from..)?.find(needle).map(|pos| from + pos)
}

/// Directive lines of `candidate` that no template segment carries, trimmed,
/// in encountered order. Duplicates are kept; the learner wrote them.
fn directive_diff<'a>(candidate: &'a str, segments: &[String]) -> Vec<&'a str> {
    let known: HashSet<&str> = segments.iter().flat_map(|s| directive_lines(s)).collect();
    directive_lines(candidate)
        .into_iter()
        .filter(|line| !known.contains(line))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn contents(blanks: &[ReconciledBlank]) -> Vec<&str> {
        blanks.iter().map(|b| b.content.as_str()).collect()
    }

    #[test]
    fn recovers_single_blank_with_original_formatting() {
        let t = Template::parse("int main() {\n____MARK____\n}\n").unwrap();
        let candidate = "int main() {\n    int a = 1;\n    return a;\n}\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["int a = 1;\n    return a;"]);
        assert_eq!(blanks[0].index, 0);
    }

    #[test]
    fn reindented_scaffold_still_matches() {
        let t = Template::parse("void f() {\n____MARK____\n}\nvoid g() {\n____MARK____\n}\n")
            .unwrap();
        let candidate = "void f()\n{\n  a();\n}\nvoid g()   {\n\tb();\n}\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["a();", "b();"]);
    }

    #[test]
    fn untouched_blank_comes_back_empty() {
        let t = Template::parse("start\n____MARK____\nend\n").unwrap();
        let blanks = reconcile("start\n\nend\n", &t).unwrap();
        assert_eq!(contents(&blanks), vec![""]);
    }

    #[test]
    fn altered_scaffold_fails_closed() {
        let t = Template::parse("int main() {\n____MARK____\nreturn 0;\n}\n").unwrap();
        // Learner renamed a scaffold identifier.
        let candidate = "int main() {\nint x;\nreturn 1;\n}\n";
        let err = reconcile(candidate, &t).unwrap_err();
        assert!(matches!(err, EngineError::TemplateMismatch(_)));
    }

    #[test]
    fn zero_blank_template_reconciles_to_nothing() {
        let t = Template::parse("no markers at all\n").unwrap();
        assert_eq!(reconcile("whatever\n", &t).unwrap(), Vec::new());
    }

    #[test]
    fn trailing_marker_takes_the_rest_of_the_candidate() {
        let t = Template::parse("int main() {\n____MARK____").unwrap();
        let candidate = "int main() {\n  return 7;\n}\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["return 7;\n}"]);
    }

    #[test]
    fn adjacent_markers_stay_deterministic() {
        // No scaffold between the blanks, so the split is arbitrary; the
        // first blank is empty and the second takes the span.
        let t = Template::parse("a____MARK________MARK____b").unwrap();
        let blanks = reconcile("axyb", &t).unwrap();
        assert_eq!(contents(&blanks), vec!["", "xy"]);
    }

    #[test]
    fn identical_adjacent_segments_never_rematch_the_same_span() {
        let t = Template::parse("sep\n____MARK____\nsep\n____MARK____\nsep\n").unwrap();
        let candidate = "sep\none\nsep\ntwo\nsep\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["one", "two"]);
    }

    #[test]
    fn segment_text_inside_an_earlier_segment_is_not_rematched() {
        // "}" occurs inside segment 0's own span; an unanchored search for
        // the closing segment would land there and invert the boundaries.
        let t = Template::parse("void helper() {}\nint main() {\n____MARK____\n}\n").unwrap();
        let candidate = "void helper() {}\nint main() {\n    return 0;\n}\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["return 0;"]);
    }

    #[test]
    fn segment_text_on_a_comment_line_inside_a_blank_is_invisible() {
        let t = Template::parse("begin\n____MARK____\nclose\n").unwrap();
        let candidate = "begin\n// close\nwork();\nclose\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["work();"]);
    }

    #[test]
    fn learner_directives_are_prepended_to_blank_zero() {
        let t = Template::parse("#include <a>\n____MARK____\nrest").unwrap();
        let candidate = "#include <a>\n#include <b>\nhello\nrest";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["#include <b>\nhello"]);
    }

    #[test]
    fn directive_prepend_to_empty_blank_has_no_trailing_newline() {
        let t = Template::parse("#include <a>\nbody\n____MARK____\nend\n").unwrap();
        let candidate = "#include <a>\nusing helper;\nbody\n\nend\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["using helper;"]);
    }

    #[test]
    fn indented_directive_inside_a_blank_is_collected() {
        let t = Template::parse("top\n____MARK____\nbottom\n").unwrap();
        let candidate = "top\n    #include <late>\nwork();\nbottom\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["#include <late>\nwork();"]);
    }

    #[test]
    fn duplicate_learner_directives_are_all_kept() {
        let t = Template::parse("go\n____MARK____\nstop\n").unwrap();
        let candidate = "#include <x>\ngo\nrun();\n#include <x>\nstop\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(
            contents(&blanks),
            vec!["#include <x>\n#include <x>\nrun();"]
        );
    }

    #[test]
    fn directive_diff_ignores_lines_the_template_already_has() {
        let segments = vec!["#include <a>\nx".to_string(), "y\nusing z;".to_string()];
        let diff = directive_diff("#include <a>\nusing z;\n#include <b>\ncode", &segments);
        assert_eq!(diff, vec!["#include <b>"]);
    }

    #[test]
    fn find_from_is_anchored() {
        assert_eq!(find_from("abcabc", "abc", 0), Some(0));
        assert_eq!(find_from("abcabc", "abc", 1), Some(3));
        assert_eq!(find_from("abcabc", "abc", 4), None);
        assert_eq!(find_from("abc", "", 3), Some(3));
    }

    #[test]
    fn crlf_candidate_round_trips_with_lf_template() {
        let t = Template::parse("first\n____MARK____\nlast\n").unwrap();
        let candidate = "first\r\nmiddle one;\r\nlast\r\n";
        let blanks = reconcile(candidate, &t).unwrap();
        assert_eq!(contents(&blanks), vec!["middle one;"]);
    }

    const PROP_TEMPLATE: &str = "int run() {\n____MARK____\n}\nint stop() {\n____MARK____\n}\n";

    proptest! {
        #[test]
        fn proptest_fill_then_reconcile_round_trips(
            b0 in "[a-f]{0,12}",
            b1 in "[a-f]{1,12}( [a-f]{1,8}){0,2}",
        ) {
            let t = Template::parse(PROP_TEMPLATE).unwrap();
            let assembled = t.fill(&[b0.as_str(), b1.as_str()]).unwrap();
            let blanks = reconcile(&assembled, &t).unwrap();
            prop_assert_eq!(blanks[0].content.as_str(), b0.trim());
            prop_assert_eq!(blanks[1].content.as_str(), b1.trim());
        }

        #[test]
        fn proptest_blank_padding_never_moves_boundaries(
            left in "[ \t\n]{0,8}",
            right in "[ \t\n]{0,8}",
            word in "[a-f]{1,10}",
        ) {
            let t = Template::parse(PROP_TEMPLATE).unwrap();
            let padded = format!("{left}{word}{right}");
            let assembled = t.fill(&[padded.as_str(), "fixed"]).unwrap();
            let blanks = reconcile(&assembled, &t).unwrap();
            prop_assert_eq!(blanks[0].content.as_str(), word.as_str());
            prop_assert_eq!(blanks[1].content.as_str(), "fixed");
        }
    }
}
