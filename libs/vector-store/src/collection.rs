use serde::Serialize;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::distance::DistanceMetric;
use crate::error::{StoreError, StoreResult};

/// A stored record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub id: String,
    pub embedding: Vec<f32>,
    pub document: String,
}

/// Nearest-neighbor results, one group per query embedding.
///
/// Within a group, entries are ordered nearest first and the three vectors
/// are index-aligned.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct QueryResult {
    pub ids: Vec<Vec<String>>,
    pub documents: Vec<Vec<String>>,
    pub distances: Vec<Vec<f32>>,
}

/// Handle to a named collection.
///
/// Cloning is cheap; all clones share the same records.
#[derive(Debug, Clone)]
pub struct Collection {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    name: String,
    metric: DistanceMetric,
    state: RwLock<State>,
}

#[derive(Debug, Default)]
struct State {
    /// Fixed by the first record ever written
    dimension: Option<usize>,
    /// Insertion order
    records: Vec<Record>,
    positions: HashMap<String, usize>,
}

impl State {
    fn check_dimension(&self, embedding: &[f32]) -> StoreResult<()> {
        match self.dimension {
            Some(expected) if expected != embedding.len() => Err(StoreError::DimensionMismatch {
                expected,
                got: embedding.len(),
            }),
            _ => Ok(()),
        }
    }

    fn reindex(&mut self) {
        self.positions = self
            .records
            .iter()
            .enumerate()
            .map(|(pos, record)| (record.id.clone(), pos))
            .collect();
    }
}

/// What a write does when the id is already stored
#[derive(Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    Add,
    Upsert,
}

impl Collection {
    pub(crate) fn new(name: impl Into<String>, metric: DistanceMetric) -> Self {
        Self {
            inner: Arc::new(Inner {
                name: name.into(),
                metric,
                state: RwLock::new(State::default()),
            }),
        }
    }

    pub fn name(&self) -> &str {
        &self.inner.name
    }

    pub fn metric(&self) -> DistanceMetric {
        self.inner.metric
    }

    /// Dimensionality of stored embeddings, `None` until the first write.
    pub async fn dimension(&self) -> Option<usize> {
        self.inner.state.read().await.dimension
    }

    pub async fn count(&self) -> usize {
        self.inner.state.read().await.records.len()
    }

    /// Insert a batch of records. Ids that already exist are left untouched.
    ///
    /// The batch is validated as a whole before anything is written, so a
    /// rejected batch leaves the collection unchanged.
    pub async fn add(
        &self,
        ids: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        documents: Vec<String>,
    ) -> StoreResult<usize> {
        self.write(ids, embeddings, documents, WriteMode::Add).await
    }

    /// Insert a batch of records, replacing any record with the same id.
    pub async fn upsert(
        &self,
        ids: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        documents: Vec<String>,
    ) -> StoreResult<usize> {
        self.write(ids, embeddings, documents, WriteMode::Upsert)
            .await
    }

    async fn write(
        &self,
        ids: Vec<String>,
        embeddings: Vec<Vec<f32>>,
        documents: Vec<String>,
        mode: WriteMode,
    ) -> StoreResult<usize> {
        if ids.len() != embeddings.len() || ids.len() != documents.len() {
            return Err(StoreError::BatchLengthMismatch {
                ids: ids.len(),
                embeddings: embeddings.len(),
                documents: documents.len(),
            });
        }

        let mut seen = HashSet::with_capacity(ids.len());
        for id in &ids {
            if !seen.insert(id.as_str()) {
                return Err(StoreError::DuplicateId(id.clone()));
            }
        }

        for embedding in &embeddings {
            validate_embedding(embedding)?;
        }

        let mut state = self.inner.state.write().await;

        let batch_dimension = match embeddings.first() {
            Some(first) => first.len(),
            None => return Ok(0),
        };
        let expected = state.dimension.unwrap_or(batch_dimension);
        if let Some(bad) = embeddings.iter().find(|e| e.len() != expected) {
            return Err(StoreError::DimensionMismatch {
                expected,
                got: bad.len(),
            });
        }
        state.dimension = Some(expected);

        let mut written = 0;
        for ((id, embedding), document) in ids.into_iter().zip(embeddings).zip(documents) {
            match state.positions.get(&id).copied() {
                Some(pos) if mode == WriteMode::Upsert => {
                    let record = &mut state.records[pos];
                    record.embedding = embedding;
                    record.document = document;
                    written += 1;
                }
                Some(_) => {
                    tracing::warn!(
                        collection = %self.inner.name,
                        id = %id,
                        "Add of existing embedding ID ignored"
                    );
                }
                None => {
                    let pos = state.records.len();
                    state.positions.insert(id.clone(), pos);
                    state.records.push(Record {
                        id,
                        embedding,
                        document,
                    });
                    written += 1;
                }
            }
        }

        tracing::debug!(
            collection = %self.inner.name,
            written,
            total = state.records.len(),
            "Wrote records"
        );
        Ok(written)
    }

    /// Exact k-nearest-neighbor search.
    ///
    /// Returns one group per query embedding holding at most `n_results`
    /// entries. Ties are broken by insertion order. An empty collection
    /// yields empty groups whatever the query dimension.
    pub async fn query(
        &self,
        query_embeddings: &[Vec<f32>],
        n_results: usize,
    ) -> StoreResult<QueryResult> {
        if n_results == 0 {
            return Err(StoreError::InvalidResultCount(n_results));
        }
        for embedding in query_embeddings {
            validate_embedding(embedding)?;
        }

        let state = self.inner.state.read().await;
        let mut result = QueryResult::default();

        for query in query_embeddings {
            if state.records.is_empty() {
                result.ids.push(Vec::new());
                result.documents.push(Vec::new());
                result.distances.push(Vec::new());
                continue;
            }
            state.check_dimension(query)?;

            let mut scored: Vec<(usize, f32)> = state
                .records
                .iter()
                .enumerate()
                .map(|(pos, record)| (pos, self.inner.metric.distance(query, &record.embedding)))
                .collect();
            // Stable sort keeps insertion order among equal distances
            scored.sort_by(|a, b| a.1.total_cmp(&b.1));
            scored.truncate(n_results);

            let records = &state.records;
            result
                .ids
                .push(scored.iter().map(|(pos, _)| records[*pos].id.clone()).collect());
            result.documents.push(
                scored
                    .iter()
                    .map(|(pos, _)| records[*pos].document.clone())
                    .collect(),
            );
            result
                .distances
                .push(scored.iter().map(|(_, d)| *d).collect());
        }

        Ok(result)
    }

    /// Fetch records by id, in request order. Unknown ids are skipped.
    pub async fn get(&self, ids: &[String]) -> Vec<Record> {
        let state = self.inner.state.read().await;
        ids.iter()
            .filter_map(|id| state.positions.get(id))
            .map(|pos| state.records[*pos].clone())
            .collect()
    }

    /// Remove records by id. Returns how many were removed.
    pub async fn delete(&self, ids: &[String]) -> usize {
        let mut state = self.inner.state.write().await;
        let doomed: HashSet<&String> = ids.iter().collect();

        let before = state.records.len();
        state.records.retain(|record| !doomed.contains(&record.id));
        let removed = before - state.records.len();

        if removed > 0 {
            state.reindex();
        }
        removed
    }
}

fn validate_embedding(embedding: &[f32]) -> StoreResult<()> {
    if embedding.is_empty() {
        return Err(StoreError::EmptyEmbedding);
    }
    if let Some(pos) = embedding.iter().position(|v| !v.is_finite()) {
        return Err(StoreError::NonFiniteValue(pos));
    }
    Ok(())
}
