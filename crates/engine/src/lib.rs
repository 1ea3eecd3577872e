//! # Gapfill Engine
//!
//! Template blank reconciliation for fill-in-the-blank coding exercises.
//!
//! An exercise ships a template whose sentinel markers divide it into N+1
//! fixed scaffold segments and N editable blanks. Learners often flatten the
//! exercise into one file, edit it in their own editor, and come back; this
//! crate recovers what they wrote into each blank, with the original
//! formatting, so a blank-per-editor view can be repopulated faithfully.
//!
//! ## Architecture
//!
//! ```text
//! Template text
//!     │
//!     ├──> Segmentation (split on sentinel marker)
//!     │        └─> N+1 scaffold segments, N blanks
//!     │
//! Candidate text ──> Reconciliation
//!     │    ├─> Classify lines (directive / body), drop comments
//!     │    ├─> Compact whitespace, keep offset map
//!     │    ├─> Anchored in-order search for each scaffold segment
//!     │    └─> Slice original text between boundaries
//!     │
//!     └──> ReconciledBlank[] (+ learner's extra directives on blank 0)
//! ```
//!
//! Matching is whitespace-insensitive, so reindenting or re-wrapping blank
//! content never breaks recovery, but any edit to the scaffold itself fails
//! the whole call: reconciliation returns all N blanks or none.
//!
//! ## Example
//!
//! ```rust
//! use gapfill_engine::{reconcile, Template};
//!
//! let template = Template::parse("int main() {\n____MARK____\n}\n").unwrap();
//! assert_eq!(template.blank_count(), 1);
//!
//! let learner_file = "int main() {\n    return 42;\n}\n";
//! let blanks = reconcile(learner_file, &template).unwrap();
//! assert_eq!(blanks[0].content, "return 42;");
//! ```
//!
//! Everything here is pure and synchronous; polling, transport, and editor
//! wiring live in `gapfill-protocol`.

mod error;
mod lines;
mod matcher;
mod session;
mod template;

pub use error::{EngineError, Result};
pub use lines::{classify_line, LineClass};
pub use matcher::{reconcile, ReconciledBlank};
pub use session::NavigationSession;
pub use template::{Template, DEFAULT_MARKER};
