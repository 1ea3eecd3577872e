//! Wire-shaped data model shared with the judge.
//!
//! Field names follow the judge's camelCase JSON. Nothing here talks to the
//! network; transports live behind the traits in [`crate::provider`].

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Verdict string of a submission still sitting in the judge queue.
pub const PENDING_VERDICT: &str = "Waiting";

/// How the judge runs an exercise. Encoded as an integer on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum ExerciseKind {
    /// Whole-file submission
    Standard,
    /// Template with blanks; a submission carries one code string per blank
    FillInBlank,
}

impl TryFrom<u8> for ExerciseKind {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Self::Standard),
            1 => Ok(Self::FillInBlank),
            other => Err(format!("unknown exercise kind {other}")),
        }
    }
}

impl From<ExerciseKind> for u8 {
    fn from(kind: ExerciseKind) -> Self {
        match kind {
            ExerciseKind::Standard => 0,
            ExerciseKind::FillInBlank => 1,
        }
    }
}

/// One row of the exercise listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSummary {
    pub id: u32,
    pub name: String,
    pub difficulty: u32,
    pub keywords: String,
}

/// One selectable language of a standard exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LanguageInfo {
    /// Display name
    pub name: String,
    /// Compiler identifier sent on submit
    pub value: String,
    /// Editor syntax mode
    pub mode: String,
    /// File extension without the dot
    pub extension: String,
}

/// Full detail for one exercise
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseDetail {
    pub id: u32,
    pub name: String,
    pub kind: ExerciseKind,
    pub memory_limit: String,
    pub time_limit: String,
    pub description: String,
    pub uploader: String,
    /// Standard exercises only
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub languages: Vec<LanguageInfo>,
    /// Fill-in-the-blank exercises only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blank_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub compiler: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

/// One row of the submission listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Submission {
    pub id: u32,
    pub exercise_id: u32,
    pub exercise_name: String,
    /// Judge verdict; [`PENDING_VERDICT`] while queued
    pub status: String,
    pub score: u32,
    pub run_time: String,
    pub memory: String,
    pub language: String,
    pub code_length: String,
    pub submitter: String,
    pub submitted_at: String,
}

impl Submission {
    /// Whether the judge has not produced a verdict yet.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.status == PENDING_VERDICT
    }
}

/// The judge's answer to a submit call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SubmitOutcome {
    /// Queued for evaluation
    #[serde(rename_all = "camelCase")]
    Accepted { submission_id: u32 },
    /// Refused before evaluation (quota, closed exercise, bad compiler)
    #[serde(rename_all = "camelCase")]
    Rejected { status: i32, info: String },
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

static KNOWN_LANGUAGES: Lazy<Vec<LanguageInfo>> = Lazy::new(|| {
    vec![
        LanguageInfo {
            name: "C++".to_string(),
            value: "g++".to_string(),
            mode: "text/x-c++src".to_string(),
            extension: "cpp".to_string(),
        },
        LanguageInfo {
            name: "C".to_string(),
            value: "gcc".to_string(),
            mode: "text/x-csrc".to_string(),
            extension: "c".to_string(),
        },
        LanguageInfo {
            name: "Python 3".to_string(),
            value: "python3".to_string(),
            mode: "text/x-python".to_string(),
            extension: "py".to_string(),
        },
    ]
});

/// The compilers the judge ships, with their editor modes and extensions.
#[must_use]
pub fn known_languages() -> &'static [LanguageInfo] {
    &KNOWN_LANGUAGES
}

/// On-disk name for a downloaded template: `{exercise id}.{extension}`.
///
/// Compilers missing from the registry fall back on a substring guess, so an
/// unknown `python3.11` still lands in a `.py` file.
#[must_use]
pub fn code_file_name(exercise_id: u32, compiler: &str) -> String {
    let extension = known_languages()
        .iter()
        .find(|lang| lang.value == compiler)
        .map(|lang| lang.extension.as_str())
        .unwrap_or_else(|| if compiler.contains("python") { "py" } else { "cpp" });
    format!("{exercise_id}.{extension}")
}
