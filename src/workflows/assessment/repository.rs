use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::{QuestionnaireAnswers, StressAssessment};

/// Submission handed to the store; the repository assigns the timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResponse {
    pub user_id: String,
    pub answers: QuestionnaireAnswers,
    pub assessment: StressAssessment,
}

/// Persisted record: answers, assessment, ownership, and the server-assigned
/// creation timestamp. Records are never mutated; a later submission from the
/// same user appends a new record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredResponse {
    pub user_id: String,
    pub answers: QuestionnaireAnswers,
    pub assessment: StressAssessment,
    pub created_at: DateTime<Utc>,
}

impl StoredResponse {
    pub fn history_view(&self) -> HistoryEntryView {
        HistoryEntryView {
            created_at: self.created_at,
            stress_class: self.assessment.stress_class.code(),
            stress_level: self.assessment.stress_class.display_label(),
            confidence: self.assessment.confidence_percent(),
            recommendations: self.assessment.recommendations.clone(),
        }
    }
}

/// Entry shape exposed to the history/results UI.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryView {
    pub created_at: DateTime<Utc>,
    pub stress_class: u8,
    pub stress_level: &'static str,
    pub confidence: u8,
    pub recommendations: String,
}

/// Storage abstraction so the service can be exercised in isolation.
///
/// Insert-only: there is no update or delete path, and `insert` stamps
/// `created_at` so history ordering is decided by the persistence layer.
pub trait ResponseRepository: Send + Sync {
    fn insert(&self, response: NewResponse) -> Result<StoredResponse, RepositoryError>;
    fn history(&self, user_id: &str, limit: usize) -> Result<Vec<StoredResponse>, RepositoryError>;
}

/// Error enumeration for persistence failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("response store unavailable: {0}")]
    Unavailable(String),
}

/// Append-only in-memory store backing the default server wiring and tests.
#[derive(Debug, Default)]
pub struct InMemoryResponseStore {
    records: Mutex<Vec<StoredResponse>>,
}

impl InMemoryResponseStore {
    pub fn len(&self) -> usize {
        self.records.lock().expect("response store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ResponseRepository for InMemoryResponseStore {
    fn insert(&self, response: NewResponse) -> Result<StoredResponse, RepositoryError> {
        let stored = StoredResponse {
            user_id: response.user_id,
            answers: response.answers,
            assessment: response.assessment,
            created_at: Utc::now(),
        };

        let mut guard = self.records.lock().expect("response store poisoned");
        guard.push(stored.clone());
        Ok(stored)
    }

    fn history(&self, user_id: &str, limit: usize) -> Result<Vec<StoredResponse>, RepositoryError> {
        let guard = self.records.lock().expect("response store poisoned");
        let mut entries: Vec<StoredResponse> = guard
            .iter()
            .filter(|record| record.user_id == user_id)
            .cloned()
            .collect();
        entries.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        entries.truncate(limit);
        Ok(entries)
    }
}
