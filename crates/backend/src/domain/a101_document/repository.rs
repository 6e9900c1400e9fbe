//! In-memory chunk store. Nothing survives a restart.

use super::aggregate::{terms_of, Chunk};
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock};

#[derive(Default)]
pub struct DocumentStore {
    chunks: RwLock<Vec<Chunk>>,
}

impl DocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every chunk of `source_file` with `texts`; returns the new count
    pub fn replace_document(&self, source_file: &str, texts: Vec<String>) -> usize {
        let mut chunks = self.chunks.write().unwrap_or_else(PoisonError::into_inner);
        let before = chunks.len();
        chunks.retain(|c| c.source_file != source_file);
        let removed = before - chunks.len();
        if removed > 0 {
            tracing::debug!("Removed {} old chunks of '{}'", removed, source_file);
        }

        let added = texts.len();
        chunks.extend(
            texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| Chunk::new(source_file, i, text)),
        );
        added
    }

    /// Up to `top_k` chunks sharing at least one term with `query`.
    ///
    /// Ranked by the number of distinct query terms matched; ties keep
    /// insertion order.
    pub fn search(&self, query: &str, top_k: usize) -> Vec<Chunk> {
        let query_terms: HashSet<String> = terms_of(query).collect();
        if query_terms.is_empty() {
            return Vec::new();
        }

        let chunks = self.chunks.read().unwrap_or_else(PoisonError::into_inner);
        let mut scored: Vec<(usize, &Chunk)> = chunks
            .iter()
            .map(|c| (query_terms.iter().filter(|t| c.terms.contains(*t)).count(), c))
            .filter(|(score, _)| *score > 0)
            .collect();
        scored.sort_by(|a, b| b.0.cmp(&a.0));

        scored
            .into_iter()
            .take(top_k)
            .map(|(_, c)| c.clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.chunks
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
