//! Tutorial resolution: exact catalog lookup and free-text classification.
//!
//! Free-text classification is an ordered list of (keyword set, template
//! builder) rules, first match wins. The final rule has an empty keyword set
//! and therefore always matches, so free-text resolution is total by
//! construction; only the catalog-id path can fail.

use std::sync::Arc;

use serde::Deserialize;
use tracing::{debug, info, instrument};
use uuid::Uuid;

use crate::catalog::Catalog;
use crate::domain::{ResolveError, Tutorial};
use crate::templates::{self, TemplateBuilder};

/// What the caller wants resolved: a known catalog entry or a free-text
/// project description.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum ResolveRequest {
    CatalogId { id: String },
    FreeText { text: String },
}

/// One classification rule. An empty keyword set matches everything, which is
/// how the generic fallback is expressed.
struct TopicRule {
    name: &'static str,
    keywords: &'static [&'static str],
    build: TemplateBuilder,
}

impl TopicRule {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.is_empty() || self.keywords.iter().any(|k| lowered.contains(k))
    }
}

/// Priority-ordered classification rules. Keywords overlap across prompts is
/// resolved by order, not by disjointness: "todo and weather app" is a todo
/// project.
const TOPIC_RULES: &[TopicRule] = &[
    TopicRule {
        name: "todo",
        keywords: &["todo", "task"],
        build: templates::todo_app,
    },
    TopicRule {
        name: "weather",
        keywords: &["weather", "forecast"],
        build: templates::weather_app,
    },
    TopicRule {
        name: "blog",
        keywords: &["blog", "cms"],
        build: templates::blog_api,
    },
    TopicRule {
        name: "portfolio",
        keywords: &["portfolio", "personal website"],
        build: templates::portfolio,
    },
    TopicRule {
        name: "generic",
        keywords: &[],
        build: templates::generic,
    },
];

/// Maps a prompt or identifier to a tutorial document. Stateless beyond the
/// injected catalog; safe to call from concurrent handlers without locking.
#[derive(Clone)]
pub struct Resolver {
    catalog: Arc<Catalog>,
}

impl Resolver {
    /// The catalog is an explicit constructor argument, never a hidden
    /// module-level singleton, so test fixtures and production content can
    /// coexist.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Single entry point covering both resolution modes.
    pub fn resolve(&self, req: &ResolveRequest) -> Result<Tutorial, ResolveError> {
        match req {
            ResolveRequest::CatalogId { id } => self.resolve_catalog_id(id),
            ResolveRequest::FreeText { text } => Ok(self.resolve_prompt(text)),
        }
    }

    /// Exact-id lookup in the predefined catalog.
    #[instrument(level = "info", skip(self))]
    pub fn resolve_catalog_id(&self, id: &str) -> Result<Tutorial, ResolveError> {
        match self.catalog.get(id) {
            Some(t) => {
                info!(target: "tutorial", %id, steps = t.steps.len(), "Catalog tutorial resolved");
                Ok(t.clone())
            }
            None => {
                info!(target: "tutorial", %id, "Catalog miss");
                Err(ResolveError::NotFound(id.to_string()))
            }
        }
    }

    /// Classify a free-text prompt and build a fresh tutorial. Never fails:
    /// the generic rule at the end of the table matches any input, including
    /// the empty string.
    #[instrument(level = "info", skip(self, text), fields(text_len = text.len()))]
    pub fn resolve_prompt(&self, text: &str) -> Tutorial {
        let lowered = text.to_lowercase();
        let rule = TOPIC_RULES
            .iter()
            .find(|r| r.matches(&lowered))
            .unwrap_or(&TOPIC_RULES[TOPIC_RULES.len() - 1]);

        let id = fresh_tutorial_id();
        let tutorial = (rule.build)(id, text);
        debug!(target: "tutorial", rule = rule.name, id = %tutorial.id, "Prompt classified");
        tutorial
    }
}

/// Fresh unique id for a generated tutorial. Repeated calls with the same
/// prompt yield distinct ids over structurally identical content.
fn fresh_tutorial_id() -> String {
    format!("custom-{}", Uuid::new_v4())
}
