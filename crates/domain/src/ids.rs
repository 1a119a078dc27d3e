use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

/// Identifier of a saved favorite.
///
/// Ids are creation timestamps in milliseconds, bumped past the newest existing
/// id when two favorites are saved within the same millisecond.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavoriteId(i64);

impl FavoriteId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> i64 {
        self.0
    }

    /// Next id for a store whose current ids are `existing`: `max(now_ms, newest + 1)`.
    pub fn next(now_ms: i64, existing: impl IntoIterator<Item = FavoriteId>) -> Self {
        let newest = existing.into_iter().map(|id| id.0).max();
        match newest {
            Some(newest) if newest >= now_ms => Self(newest.saturating_add(1)),
            _ => Self(now_ms),
        }
    }

    /// Id of a raw stored record, accepting numeric strings written by older clients.
    pub fn of_record(record: &Value) -> Option<Self> {
        match record.get("id")? {
            Value::Number(n) => n.as_i64().map(Self),
            Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

impl fmt::Display for FavoriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for FavoriteId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<FavoriteId> for i64 {
    fn from(value: FavoriteId) -> Self {
        value.0
    }
}

impl std::str::FromStr for FavoriteId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim()
            .parse::<i64>()
            .map(Self)
            .map_err(|_| DomainError::parse(format!("Invalid favorite id: {s}")))
    }
}
