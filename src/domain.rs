//! Domain models used by the backend: tutorials, steps, gradable code chunks,
//! rubrics, and check results.
//!
//! Field names serialize in camelCase because the SPA consumes these values
//! directly. Step descriptions are opaque HTML blobs: the backend never parses
//! or rewrites them, it only ships them to the rendering layer.

use serde::{Deserialize, Serialize};

/// Difficulty level shown on tutorial cards and used for catalog filtering.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    /// Case-insensitive parse of a filter string (e.g. from a query param).
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Some(Difficulty::Beginner),
            "intermediate" => Some(Difficulty::Intermediate),
            "advanced" => Some(Difficulty::Advanced),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A titled, leveled sequence of instructional steps. Immutable once produced:
/// the resolver builds it, the rendering layer consumes it read-only.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tutorial {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Always non-empty; enforced at the catalog/config boundary.
    pub steps: Vec<Step>,
}

/// One unit of instruction. A step with no code chunks is purely explanatory.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Step {
    /// Unique within its tutorial, not globally.
    pub id: String,
    pub title: String,
    /// Opaque HTML-bearing string; pre-sanitized content, never interpreted here.
    pub description: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub code_chunks: Vec<CodeChunk>,
}

/// One gradable coding exercise: scaffold code, expected solution, and the
/// rubric the checker grades against.
///
/// The rubric lives on the chunk itself. `None` means the exercise has no
/// automated checks, which the checker reports as an explicit ungraded state
/// rather than a silent pass.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeChunk {
    /// Unique within its step.
    pub id: String,
    pub file_name: String,
    pub language: String,
    pub instructions: String,
    pub initial_code: String,
    pub expected_solution: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub hints: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rubric: Option<Rubric>,
}

/// Required literal substrings a submission must contain to grade correct.
/// Order is preserved: feedback lists missing tokens in authoring order.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Rubric {
    #[serde(default)]
    pub required: Vec<String>,
}

/// Verdict for one submission. Transient: produced per check call, never stored.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub is_correct: bool,
    /// False when the chunk carries no rubric; distinguishes "passed" from
    /// "nothing to grade against".
    pub graded: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// Failure modes of catalog-id resolution. Free-text resolution is total and
/// has no error variant by construction.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// The identifier is absent from the static catalog. Not retried: the
    /// catalog is immutable, retrying cannot change the outcome.
    #[error("tutorial '{0}' not found in catalog")]
    NotFound(String),
}
