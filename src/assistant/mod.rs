pub mod format;
pub mod texts;

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::agents::AgentKind;
use crate::catalog::types::CatalogMatch;
use crate::catalog::Catalog;
use crate::knowledge::types::Topic;
use crate::knowledge::KnowledgeBase;
use crate::search::{self, LegalReference, LegalSearch};

/// Which local table answered a question.
#[derive(Debug)]
pub enum Resolution<'a> {
    Catalog(CatalogMatch<'a>),
    Topic(&'a Topic),
    NoMatch,
}

/// A rendered reply plus how it was produced, for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub path: &'static str,
}

/// Single entry point for questions: catalog first, then the knowledge base,
/// then the fixed topic list.
pub struct Assistant {
    knowledge: KnowledgeBase,
    catalog: Catalog,
    max_listed: usize,
}

impl Assistant {
    pub fn new(knowledge: KnowledgeBase, catalog: Catalog, max_listed: usize) -> Self {
        Self {
            knowledge,
            catalog,
            max_listed: max_listed.max(1),
        }
    }

    pub fn knowledge(&self) -> &KnowledgeBase {
        &self.knowledge
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn resolve(&self, query: &str) -> Resolution<'_> {
        if let Some(found) = self.catalog.find_programs(query) {
            return Resolution::Catalog(found);
        }
        match self.knowledge.best_topic(query) {
            Some(topic) => Resolution::Topic(topic),
            None => Resolution::NoMatch,
        }
    }

    /// Local answer, never empty. Same query, same text.
    pub fn answer(&self, query: &str) -> String {
        self.render(self.resolve(query)).text
    }

    fn render(&self, resolution: Resolution<'_>) -> Reply {
        match resolution {
            Resolution::Catalog(found) => Reply {
                text: format::catalog_match(&self.catalog, &found, self.max_listed),
                path: found.strategy(),
            },
            Resolution::Topic(topic) => Reply {
                text: topic.answer.clone(),
                path: "knowledge_base",
            },
            Resolution::NoMatch => Reply {
                text: texts::FALLBACK.to_string(),
                path: "fallback",
            },
        }
    }

    /// Chat turn. Like [`Assistant::answer`], but may consult `search` when
    /// the local tables have nothing, or up front for agents that search first.
    /// Search errors and timeouts count as "no results".
    pub async fn respond(
        &self,
        query: &str,
        agent: AgentKind,
        search: Option<&dyn LegalSearch>,
        timeout: Duration,
    ) -> Reply {
        if let Some(search) = search.filter(|_| agent.searches_first()) {
            let refs = bounded_search(search, query, timeout).await;
            if !refs.is_empty() {
                return search_reply(query, &refs);
            }
        }

        let resolution = self.resolve(query);
        if !matches!(resolution, Resolution::NoMatch) {
            return self.render(resolution);
        }

        if let Some(search) = search.filter(|_| !agent.searches_first()) {
            if search::looks_like_labor_law(query) {
                let refs = bounded_search(search, query, timeout).await;
                if !refs.is_empty() {
                    return search_reply(query, &refs);
                }
            } else {
                debug!("Question outside labour law, skipping online search");
            }
        }

        self.render(Resolution::NoMatch)
    }

    /// Hash of the knowledge base and catalog contents. Two processes with the
    /// same digest answer every question identically.
    pub fn snapshot_digest(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for topic in self.knowledge.topics() {
            hasher.update(topic.id.as_bytes());
            for keyword in &topic.keywords {
                hasher.update(b"\0");
                hasher.update(keyword.as_bytes());
            }
            hasher.update(b"\x1e");
            hasher.update(topic.answer.as_bytes());
            hasher.update(b"\x1f");
        }
        for record in self.catalog.programs() {
            hasher.update(record.number.as_bytes());
            hasher.update(record.name.as_bytes());
            hasher.update(record.occupational_codes.join(",").as_bytes());
            hasher.update(record.age_range.to_string().as_bytes());
            hasher.update(record.sponsoring_institutions.join(",").as_bytes());
            hasher.update(b"\x1f");
        }
        hasher.finalize().to_hex().to_string()
    }
}

fn search_reply(query: &str, refs: &[LegalReference]) -> Reply {
    Reply {
        text: format::search_results(query, refs),
        path: "online_search",
    }
}

async fn bounded_search(
    search: &dyn LegalSearch,
    query: &str,
    timeout: Duration,
) -> Vec<LegalReference> {
    match tokio::time::timeout(timeout, search.search_legal_text(query)).await {
        Ok(Ok(refs)) => {
            info!(count = refs.len(), "Online search returned");
            refs
        }
        Ok(Err(e)) => {
            warn!("Online search failed: {:#}", e);
            Vec::new()
        }
        Err(_) => {
            warn!(?timeout, "Online search timed out");
            Vec::new()
        }
    }
}
