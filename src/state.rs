//! Application state: the immutable catalog and the resolver built over it.
//!
//! The catalog is assembled once at startup — config-provided tutorials
//! first, then the built-ins for any id not already taken — and never mutated
//! afterwards, so it is shared as a plain `Arc` with no locking. Resolver and
//! checker are referentially transparent over it; concurrent handlers need no
//! coordination.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::catalog::{builtin_tutorials, Catalog};
use crate::config::{load_catalog_config_from_env, CatalogConfig, TutorialCfg};
use crate::domain::{Difficulty, Step, Tutorial};
use crate::resolver::Resolver;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub resolver: Resolver,
}

impl AppState {
    /// Build state from env: load the optional TOML catalog extension and
    /// merge it with the built-ins.
    #[instrument(level = "info", skip_all)]
    pub fn new() -> Self {
        Self::from_config(load_catalog_config_from_env())
    }

    pub fn from_config(cfg: Option<CatalogConfig>) -> Self {
        let mut catalog = Catalog::default();

        // Config entries first: on id collision with a built-in, the config
        // entry wins because it was inserted before.
        if let Some(cfg) = cfg {
            for tc in cfg.tutorials {
                let Some(t) = tutorial_from_cfg(tc) else { continue };
                let id = t.id.clone();
                if !catalog.insert(t) {
                    warn!(target: "tutorial", %id, "Duplicate tutorial id in config; keeping the first entry");
                }
            }
        }

        // Always insert built-ins, but don't overwrite existing ids.
        for t in builtin_tutorials() {
            catalog.insert(t);
        }

        // Inventory summary by difficulty.
        let mut count_by_diff: HashMap<Difficulty, usize> = HashMap::new();
        for t in catalog.tutorials(None) {
            *count_by_diff.entry(t.difficulty).or_insert(0) += 1;
        }
        for (diff, count) in count_by_diff {
            info!(target: "tutorial", difficulty = %diff, count, "Startup catalog inventory");
        }
        info!(target: "tutorial", total = catalog.len(), "Catalog ready");

        let catalog = Arc::new(catalog);
        let resolver = Resolver::new(catalog.clone());
        Self { catalog, resolver }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::from_config(None)
    }
}

/// Convert a config entry into a domain tutorial, enforcing the invariants
/// the rest of the core relies on: at least one step, step ids unique within
/// the tutorial, chunk ids unique within their step. Invalid entries are
/// skipped with an error log rather than aborting startup.
fn tutorial_from_cfg(tc: TutorialCfg) -> Option<Tutorial> {
    let id = tc.id.unwrap_or_else(|| Uuid::new_v4().to_string());

    if tc.steps.is_empty() {
        error!(target: "tutorial", %id, "Skipping config tutorial: it has no steps");
        return None;
    }

    let mut steps = Vec::with_capacity(tc.steps.len());
    let mut step_ids = HashSet::new();
    for (i, sc) in tc.steps.into_iter().enumerate() {
        let step_id = sc.id.unwrap_or_else(|| format!("step-{}", i + 1));
        if !step_ids.insert(step_id.clone()) {
            error!(target: "tutorial", %id, %step_id, "Skipping config tutorial: duplicate step id");
            return None;
        }

        let mut chunk_ids = HashSet::new();
        let mut chunks = Vec::with_capacity(sc.code_chunks.len());
        for cc in sc.code_chunks {
            let chunk = cc.into_chunk(Uuid::new_v4().to_string());
            if !chunk_ids.insert(chunk.id.clone()) {
                error!(target: "tutorial", %id, %step_id, chunk_id = %chunk.id, "Skipping config tutorial: duplicate chunk id");
                return None;
            }
            chunks.push(chunk);
        }

        steps.push(Step {
            id: step_id,
            title: sc.title,
            description: sc.description,
            code_chunks: chunks,
        });
    }

    Some(Tutorial {
        id,
        title: tc.title,
        description: tc.description,
        difficulty: tc.difficulty,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cfg_from_toml(s: &str) -> CatalogConfig {
        toml::from_str(s).unwrap()
    }

    #[test]
    fn builtins_present_without_config() {
        let state = AppState::from_config(None);
        for id in ["todo-app", "weather-app", "blog-api", "portfolio"] {
            assert!(state.catalog.contains(id), "missing builtin '{id}'");
        }
    }

    #[test]
    fn config_entry_shadows_builtin_with_same_id() {
        let cfg = cfg_from_toml(
            r#"
[[tutorials]]
id = "todo-app"
title = "Todo, Reimagined"
difficulty = "Beginner"

[[tutorials.steps]]
title = "Only step"
"#,
        );
        let state = AppState::from_config(Some(cfg));
        assert_eq!(state.catalog.get("todo-app").unwrap().title, "Todo, Reimagined");
        // Built-ins with other ids still arrive.
        assert!(state.catalog.contains("weather-app"));
    }

    #[test]
    fn step_less_config_entry_is_skipped() {
        let cfg = cfg_from_toml(
            r#"
[[tutorials]]
id = "empty-one"
title = "Nothing here"
difficulty = "Beginner"
"#,
        );
        let state = AppState::from_config(Some(cfg));
        assert!(!state.catalog.contains("empty-one"));
    }

    #[test]
    fn duplicate_step_ids_reject_the_entry() {
        let cfg = cfg_from_toml(
            r#"
[[tutorials]]
id = "dup-steps"
title = "Broken"
difficulty = "Beginner"

[[tutorials.steps]]
id = "step-1"
title = "One"

[[tutorials.steps]]
id = "step-1"
title = "Two"
"#,
        );
        let state = AppState::from_config(Some(cfg));
        assert!(!state.catalog.contains("dup-steps"));
    }

    #[test]
    fn config_tutorial_is_resolvable_by_id() {
        let cfg = cfg_from_toml(
            r#"
[[tutorials]]
id = "chat-app"
title = "Building a Chat App"
difficulty = "Advanced"

[[tutorials.steps]]
title = "Project setup"
description = "<p>Scaffold it.</p>"
"#,
        );
        let state = AppState::from_config(Some(cfg));
        let t = state.resolver.resolve_catalog_id("chat-app").unwrap();
        assert_eq!(t.title, "Building a Chat App");
        assert_eq!(t.steps[0].id, "step-1");
    }
}
