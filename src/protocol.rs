//! Public protocol structs for WebSocket and HTTP endpoints (serde ready).
//! Keep this small and stable to evolve backend and frontend independently.

use serde::{Deserialize, Serialize};

use crate::domain::{CodeChunk, Difficulty, Tutorial, ValidationResult};

/// Messages the client can send over WebSocket.
#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientWsMessage {
    Ping,
    ListTutorials {
        #[serde(default)]
        difficulty: Option<String>,
    },
    Tutorial {
        #[serde(rename = "projectId")]
        project_id: String,
    },
    GenerateTutorial {
        prompt: String,
    },
    CheckSolution {
        code: String,
        chunk: CodeChunk,
    },
    Hint {
        chunk: CodeChunk,
        #[serde(rename = "hintIndex", default)]
        hint_index: usize,
    },
}

/// Messages the server sends back over WebSocket.
#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerWsMessage {
    Pong,
    TutorialList {
        tutorials: Vec<TutorialSummary>,
    },
    Tutorial {
        tutorial: Tutorial,
    },
    CheckResult {
        result: ValidationResult,
    },
    Hint {
        text: String,
    },
    Error {
        message: String,
    },
}

/// Card-sized view of a catalog tutorial, used by the landing page listing.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialSummary {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub step_count: usize,
}

/// Convert a full `Tutorial` to its listing summary.
pub fn to_summary(t: &Tutorial) -> TutorialSummary {
    TutorialSummary {
        id: t.id.clone(),
        title: t.title.clone(),
        description: t.description.clone(),
        difficulty: t.difficulty,
        step_count: t.steps.len(),
    }
}

//
// HTTP request/response DTOs
//

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub difficulty: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TutorialQuery {
    #[serde(rename = "projectId")]
    pub project_id: String,
}

#[derive(Deserialize)]
pub struct GenerateIn {
    pub prompt: String,
}

#[derive(Deserialize)]
pub struct CheckIn {
    pub code: String,
    pub chunk: CodeChunk,
}

#[derive(Deserialize)]
pub struct HintIn {
    pub chunk: CodeChunk,
    #[serde(rename = "hintIndex", default)]
    pub hint_index: usize,
}

#[derive(Serialize)]
pub struct HintOut {
    pub text: String,
}

#[derive(Serialize)]
pub struct HealthOut {
    pub ok: bool,
}

/// JSON body for HTTP error responses (currently only the 404 catalog miss).
#[derive(Serialize, Deserialize)]
pub struct ErrorOut {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_messages_parse_from_tagged_json() {
        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"type":"tutorial","projectId":"todo-app"}"#).unwrap();
        assert!(matches!(msg, ClientWsMessage::Tutorial { ref project_id } if project_id == "todo-app"));

        let msg: ClientWsMessage =
            serde_json::from_str(r#"{"type":"generate_tutorial","prompt":"a todo app"}"#).unwrap();
        assert!(matches!(msg, ClientWsMessage::GenerateTutorial { .. }));
    }

    #[test]
    fn summary_counts_steps() {
        let t = crate::catalog::builtin_tutorials().remove(0);
        let s = to_summary(&t);
        assert_eq!(s.id, "todo-app");
        assert_eq!(s.step_count, 3);
        assert_eq!(
            serde_json::to_value(&s.difficulty).unwrap(),
            serde_json::json!("Beginner")
        );
    }
}
