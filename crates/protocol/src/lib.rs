//! # Gapfill Protocol
//!
//! The collaborator surface around the reconciliation engine: the data model
//! shared with a remote judge, the traits a transport implements, the
//! bounded verdict poller, and the editor prefill fallback.
//!
//! ```text
//! ExerciseSource ──template──> gapfill-engine ──blanks──> editor grid
//!        │                                                    │
//!        └── judge ◄──submit── SubmissionTransport ◄──────────┘
//!                 │
//!                 └──status──> SubmissionWatcher (bounded, cancellable)
//! ```
//!
//! Everything network-shaped stops at the trait boundary: this crate holds
//! no HTTP client and parses no markup. Implementations of the traits live
//! with whatever frontend embeds the engine.

mod editor;
mod error;
mod provider;
mod types;
mod watch;

pub use editor::prefill_blanks;
pub use error::{ProtocolError, Result};
pub use provider::{ExerciseSource, SubmissionTransport};
pub use types::{
    code_file_name, known_languages, ExerciseDetail, ExerciseKind, ExerciseSummary, LanguageInfo,
    Submission, SubmitOutcome, PENDING_VERDICT,
};
pub use watch::{PollConfig, SubmissionWatcher, WatchOutcome};
