//! Loading the optional catalog extension from TOML.
//!
//! A deployment can contribute extra predefined tutorials (with steps, code
//! chunks, rubrics, and hints) without recompiling. See `CatalogConfig` for
//! the expected schema. The built-in catalog keeps the service useful when no
//! config is present or the file fails to parse.

use serde::Deserialize;
use tracing::{error, info};

use crate::domain::{CodeChunk, Difficulty, Rubric};

#[derive(Clone, Debug, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub tutorials: Vec<TutorialCfg>,
}

/// Tutorial entry accepted in TOML configuration. Ids default to generated
/// values where omitted; a tutorial with no steps is rejected at load time.
#[derive(Clone, Debug, Deserialize)]
pub struct TutorialCfg {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub difficulty: Difficulty,
    #[serde(default)]
    pub steps: Vec<StepCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct StepCfg {
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub code_chunks: Vec<ChunkCfg>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ChunkCfg {
    #[serde(default)]
    pub id: Option<String>,
    pub file_name: String,
    #[serde(default = "default_language")]
    pub language: String,
    #[serde(default)]
    pub instructions: String,
    #[serde(default)]
    pub initial_code: String,
    #[serde(default)]
    pub expected_solution: String,
    #[serde(default)]
    pub hints: Vec<String>,
    /// Omitted = the exercise is not graded; the checker reports it as such.
    #[serde(default)]
    pub rubric: Option<Vec<String>>,
}

fn default_language() -> String {
    "javascript".into()
}

impl ChunkCfg {
    pub fn into_chunk(self, fallback_id: String) -> CodeChunk {
        CodeChunk {
            id: self.id.unwrap_or(fallback_id),
            file_name: self.file_name,
            language: self.language,
            instructions: self.instructions,
            initial_code: self.initial_code,
            expected_solution: self.expected_solution,
            hints: self.hints,
            rubric: self.rubric.map(|required| Rubric { required }),
        }
    }
}

/// Attempt to load `CatalogConfig` from CATALOG_CONFIG_PATH. On any
/// parsing/IO error, returns None.
pub fn load_catalog_config_from_env() -> Option<CatalogConfig> {
    let path = std::env::var("CATALOG_CONFIG_PATH").ok()?;
    match std::fs::read_to_string(&path) {
        Ok(s) => match toml::from_str::<CatalogConfig>(&s) {
            Ok(cfg) => {
                info!(target: "codetutor_backend", %path, tutorials = cfg.tutorials.len(), "Loaded catalog config (TOML)");
                Some(cfg)
            }
            Err(e) => {
                error!(target: "codetutor_backend", %path, error = %e, "Failed to parse TOML config");
                None
            }
        },
        Err(e) => {
            error!(target: "codetutor_backend", %path, error = %e, "Failed to read TOML config file");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_full_tutorial_entry() {
        let cfg: CatalogConfig = toml::from_str(
            r#"
[[tutorials]]
id = "chat-app"
title = "Building a Chat App"
description = "Realtime chat with websockets"
difficulty = "Advanced"

[[tutorials.steps]]
title = "Project setup"
description = "<p>Scaffold the project.</p>"

[[tutorials.steps.code_chunks]]
id = "chat-socket"
file_name = "socket.js"
instructions = "Open a websocket and forward messages."
initial_code = "// your code here"
expected_solution = "socket.addEventListener('message', onMessage);"
rubric = ["addEventListener", "onMessage"]
hints = ["Listen for the 'message' event."]
"#,
        )
        .unwrap();

        assert_eq!(cfg.tutorials.len(), 1);
        let t = &cfg.tutorials[0];
        assert_eq!(t.id.as_deref(), Some("chat-app"));
        assert_eq!(t.difficulty, Difficulty::Advanced);
        assert_eq!(t.steps.len(), 1);

        let chunk = t.steps[0].code_chunks[0].clone().into_chunk("x".into());
        assert_eq!(chunk.id, "chat-socket");
        assert_eq!(chunk.language, "javascript");
        assert_eq!(chunk.rubric.unwrap().required, vec!["addEventListener", "onMessage"]);
    }

    #[test]
    fn missing_optional_fields_default() {
        let cfg: CatalogConfig = toml::from_str(
            r#"
[[tutorials]]
title = "Untitled"
difficulty = "Beginner"
"#,
        )
        .unwrap();
        let t = &cfg.tutorials[0];
        assert!(t.id.is_none());
        assert!(t.steps.is_empty());
    }

    #[test]
    fn empty_input_is_an_empty_config() {
        let cfg: CatalogConfig = toml::from_str("").unwrap();
        assert!(cfg.tutorials.is_empty());
    }
}
