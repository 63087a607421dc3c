//! Directory source trait and the static, startup-loaded implementation.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use common::{DirectoryUser, SearchQuery};
use thiserror::Error;

use crate::error;

const BUNDLED_DIRECTORY: &str = include_str!("../data/directory.json");

/// Trait for looking up people in the staff directory.
#[async_trait]
pub trait DirectorySource: Send + Sync {
    /// Returns every user matching the query, in directory order.
    async fn search(&self, query: &SearchQuery) -> error::Result<Vec<DirectoryUser>>;
}

/// Errors loading a directory at startup.
#[derive(Debug, Error)]
pub enum DirectoryLoadError {
    #[error("failed to read directory file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid directory JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("duplicate directory user id: {0}")]
    DuplicateId(String),
}

/// A fixed, read-only list of users held in memory.
///
/// Cloning is cheap; clones share the same list.
#[derive(Debug, Clone)]
pub struct StaticDirectory {
    users: Arc<[DirectoryUser]>,
}

impl StaticDirectory {
    /// Creates a directory from an explicit user list.
    pub fn new(users: Vec<DirectoryUser>) -> Result<Self, DirectoryLoadError> {
        let mut seen = std::collections::HashSet::new();
        for user in &users {
            if !seen.insert(user.id.as_str()) {
                return Err(DirectoryLoadError::DuplicateId(user.id.clone()));
            }
        }
        Ok(Self {
            users: users.into(),
        })
    }

    /// The two-person directory shipped with the service.
    pub fn bundled() -> Result<Self, DirectoryLoadError> {
        Self::from_json(BUNDLED_DIRECTORY)
    }

    /// Parses a JSON array of users.
    pub fn from_json(json: &str) -> Result<Self, DirectoryLoadError> {
        let users: Vec<DirectoryUser> = serde_json::from_str(json)?;
        Self::new(users)
    }

    /// Loads a JSON array of users from disk.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, DirectoryLoadError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DirectoryLoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let directory = Self::from_json(&json)?;
        tracing::info!(path = %path.display(), users = directory.len(), "loaded directory");
        Ok(directory)
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Synchronous filter used by the trait implementation.
    pub fn matching(&self, query: &SearchQuery) -> Vec<DirectoryUser> {
        self.users
            .iter()
            .filter(|user| user.matches(query))
            .cloned()
            .collect()
    }
}

#[async_trait]
impl DirectorySource for StaticDirectory {
    async fn search(&self, query: &SearchQuery) -> error::Result<Vec<DirectoryUser>> {
        let users = self.matching(query);
        tracing::debug!(%query, matched = users.len(), "directory search");
        Ok(users)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(s: &str) -> SearchQuery {
        SearchQuery::parse(Some(s.to_string())).unwrap()
    }

    fn ids(users: &[DirectoryUser]) -> Vec<&str> {
        users.iter().map(|u| u.id.as_str()).collect()
    }

    #[test]
    fn bundled_directory_has_two_users() {
        let directory = StaticDirectory::bundled().unwrap();
        assert_eq!(directory.len(), 2);
    }

    #[tokio::test]
    async fn search_filters_by_any_field() {
        let directory = StaticDirectory::bundled().unwrap();

        let by_name = directory.search(&query("sarah")).await.unwrap();
        assert_eq!(ids(&by_name), ["user2"]);

        let by_department = directory.search(&query("operations")).await.unwrap();
        assert_eq!(ids(&by_department), ["user2"]);

        let by_title = directory.search(&query("developer")).await.unwrap();
        assert_eq!(ids(&by_title), ["user1"]);
    }

    #[tokio::test]
    async fn search_preserves_declaration_order() {
        let directory = StaticDirectory::bundled().unwrap();
        let users = directory.search(&query("company.com")).await.unwrap();
        assert_eq!(ids(&users), ["user1", "user2"]);
    }

    #[tokio::test]
    async fn search_is_case_insensitive() {
        let directory = StaticDirectory::bundled().unwrap();
        let upper = directory.search(&query("SMITH")).await.unwrap();
        let lower = directory.search(&query("smith")).await.unwrap();
        assert_eq!(upper, lower);
        assert_eq!(ids(&upper), ["user1"]);
    }

    #[tokio::test]
    async fn user_matching_several_fields_appears_once() {
        // "john" hits both displayName and mail of user1, and "Johnson" of user2.
        let directory = StaticDirectory::bundled().unwrap();
        let users = directory.search(&query("john")).await.unwrap();
        assert_eq!(ids(&users), ["user1", "user2"]);
    }

    #[tokio::test]
    async fn no_match_returns_empty() {
        let directory = StaticDirectory::bundled().unwrap();
        let users = directory.search(&query("zz-nobody")).await.unwrap();
        assert!(users.is_empty());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let json = r#"[
            {"id":"a","displayName":"A","mail":"a@x","jobTitle":"t","department":"d"},
            {"id":"a","displayName":"B","mail":"b@x","jobTitle":"t","department":"d"}
        ]"#;
        assert!(matches!(
            StaticDirectory::from_json(json),
            Err(DirectoryLoadError::DuplicateId(id)) if id == "a"
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(matches!(
            StaticDirectory::from_json("{not json"),
            Err(DirectoryLoadError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = StaticDirectory::from_json_file("/nonexistent/directory.json").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/directory.json"));
    }
}
