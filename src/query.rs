//! Query results and the "no entries found" wrapper.
//!
//! [`result_entries`] reports a single sentinel error for every failure,
//! whether the query itself failed or simply came back empty. The cause of a
//! failing query is discarded.

use serde::Serialize;
use std::fmt;

/// Entries returned by a query
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QueryResult {
    entries: Vec<String>,
}

impl QueryResult {
    pub fn new(entries: Vec<String>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn into_entries(self) -> Vec<String> {
        self.entries
    }
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{[{}]}}", self.entries.join(" "))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// Sentinel for any lookup that produced nothing usable
    NoEntriesFound,
    /// The query source could not be reached
    Unavailable(String),
}

impl fmt::Display for QueryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryError::NoEntriesFound => write!(f, "no entries found"),
            QueryError::Unavailable(reason) => write!(f, "query unavailable: {}", reason),
        }
    }
}

impl std::error::Error for QueryError {}

/// Run the lookup. Always succeeds with an empty result.
pub fn query() -> Result<QueryResult, QueryError> {
    Ok(QueryResult::new(Vec::new()))
}

/// Run [`query`] and reject empty results.
pub fn result_entries() -> Result<QueryResult, QueryError> {
    result_entries_with(query)
}

/// Run `source` and reject empty results.
///
/// A failing `source` and an empty result both map to
/// [`QueryError::NoEntriesFound`].
pub fn result_entries_with<F>(source: F) -> Result<QueryResult, QueryError>
where
    F: FnOnce() -> Result<QueryResult, QueryError>,
{
    let not_found = QueryError::NoEntriesFound;

    let result = match source() {
        Ok(result) => result,
        Err(_) => return Err(not_found),
    };

    if result.is_empty() {
        return Err(not_found);
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_returns_empty_result() {
        let result = query().unwrap();
        assert!(result.is_empty());
        assert_eq!(result.len(), 0);
        assert_eq!(result.entries(), &[] as &[String]);
    }

    #[test]
    fn test_result_entries_always_fails() {
        assert_eq!(result_entries(), Err(QueryError::NoEntriesFound));
    }

    #[test]
    fn test_failing_source_reports_sentinel() {
        let err = result_entries_with(|| Err(QueryError::Unavailable("timeout".to_string())))
            .unwrap_err();
        assert_eq!(err, QueryError::NoEntriesFound);
        assert_eq!(err.to_string(), "no entries found");
    }

    #[test]
    fn test_empty_source_reports_sentinel() {
        let err = result_entries_with(|| Ok(QueryResult::default())).unwrap_err();
        assert_eq!(err, QueryError::NoEntriesFound);
    }

    #[test]
    fn test_populated_source_passes_through() {
        let entries = vec!["alpha".to_string(), "beta".to_string()];
        let result = result_entries_with(|| Ok(QueryResult::new(entries.clone()))).unwrap();
        assert_eq!(result.entries(), entries.as_slice());
        assert_eq!(result.into_entries(), entries);
    }

    #[test]
    fn test_display() {
        assert_eq!(QueryResult::default().to_string(), "{[]}");
        let result = QueryResult::new(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(result.to_string(), "{[a b]}");
        assert_eq!(
            QueryError::Unavailable("down".to_string()).to_string(),
            "query unavailable: down"
        );
    }

    #[test]
    fn test_serializes_entries() {
        let result = QueryResult::new(vec!["a".to_string()]);
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json, serde_json::json!({ "entries": ["a"] }));
    }
}
