use serde::{Deserialize, Serialize};

use crate::error::{RemoteError, Result};
use crate::model::Concert;

/// Outcome of a single fetch attempt.
///
/// Serializes as `{"data": [...]}` or `{"error": "..."}`. A fresh value is
/// produced by every fetch and replaces the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConcertListResult {
    Data(Vec<Concert>),
    Error(String),
}

impl ConcertListResult {
    /// The fetched concerts, or an empty slice for a failed fetch.
    pub fn data(&self) -> &[Concert] {
        match self {
            ConcertListResult::Data(concerts) => concerts,
            ConcertListResult::Error(_) => &[],
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            ConcertListResult::Data(_) => None,
            ConcertListResult::Error(message) => Some(message),
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ConcertListResult::Error(_))
    }

    pub fn into_result(self) -> Result<Vec<Concert>> {
        match self {
            ConcertListResult::Data(concerts) => Ok(concerts),
            ConcertListResult::Error(message) => Err(RemoteError::new(message)),
        }
    }
}

impl From<Result<Vec<Concert>>> for ConcertListResult {
    fn from(result: Result<Vec<Concert>>) -> Self {
        match result {
            Ok(concerts) => ConcertListResult::Data(concerts),
            Err(err) => ConcertListResult::Error(err.message().to_owned()),
        }
    }
}
