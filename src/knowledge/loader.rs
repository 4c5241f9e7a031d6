use std::collections::HashSet;
use std::path::Path;

use tracing::{debug, info};

use super::topics::builtin_topics;
use super::types::Topic;
use super::KnowledgeBase;
use crate::error::BuildError;

/// Build the knowledge base from `path` when given, otherwise from the
/// built-in table. Both sources go through the same validation.
pub fn load(path: Option<&Path>) -> Result<KnowledgeBase, BuildError> {
    let topics = match path {
        Some(path) => {
            let topics = read_topics(path)?;
            info!(?path, count = topics.len(), "Loaded topics from file");
            topics
        }
        None => builtin_topics(),
    };
    KnowledgeBase::new(topics)
}

fn read_topics(path: &Path) -> Result<Vec<Topic>, BuildError> {
    let bytes = std::fs::read(path).map_err(|source| BuildError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_slice(&bytes).map_err(|source| BuildError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Lowercase and deduplicate keywords, rejecting anything that would match
/// every query or return an empty answer.
pub(super) fn validate(topics: Vec<Topic>) -> Result<Vec<Topic>, BuildError> {
    let mut ids = HashSet::new();
    let mut out = Vec::with_capacity(topics.len());

    for mut topic in topics {
        if !ids.insert(topic.id.clone()) {
            return Err(BuildError::DuplicateTopic(topic.id));
        }
        if topic.keywords.is_empty() {
            return Err(BuildError::InvalidKeywordConfiguration {
                topic: topic.id,
                reason: "no keywords",
            });
        }
        if topic.keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(BuildError::InvalidKeywordConfiguration {
                topic: topic.id,
                reason: "empty keyword",
            });
        }
        if topic.answer.trim().is_empty() {
            return Err(BuildError::EmptyAnswer(topic.id));
        }

        let mut seen = HashSet::new();
        topic.keywords = topic
            .keywords
            .into_iter()
            .map(|k| k.to_lowercase())
            .filter(|k| seen.insert(k.clone()))
            .collect();

        debug!(topic = %topic.id, keywords = topic.keywords.len(), "topic registered");
        out.push(topic);
    }

    Ok(out)
}
