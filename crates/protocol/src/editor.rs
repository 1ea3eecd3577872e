//! Glue for a blank-per-editor view.

use gapfill_engine::{reconcile, Template};
use log::debug;

/// Contents to pre-fill a grid of blank editors with.
///
/// Reconciles `candidate` against `template` and returns one string per
/// blank. When the candidate is not a formatting-only variant of the
/// template the grid must not guess, so every editor starts empty instead.
/// Views parse their template once and keep it; segmentation errors surface
/// there, never here.
#[must_use]
pub fn prefill_blanks(template: &Template, candidate: &str) -> Vec<String> {
    match reconcile(candidate, template) {
        Ok(blanks) => blanks.into_iter().map(|b| b.content).collect(),
        Err(err) => {
            debug!("candidate does not match template ({err}); presenting empty blanks");
            vec![String::new(); template.blank_count()]
        }
    }
}
