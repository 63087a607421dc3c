use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{QueryError, ValidationError};
use crate::json;

/// A person listed in the staff directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryUser {
    pub id: String,
    pub display_name: String,
    pub mail: String,
    pub job_title: String,
    pub department: String,
}

impl DirectoryUser {
    /// Returns true if any searchable field contains the query, ignoring case.
    ///
    /// `id` is deliberately not searchable.
    pub fn matches(&self, query: &SearchQuery) -> bool {
        let needle = query.normalized();
        [
            &self.display_name,
            &self.mail,
            &self.department,
            &self.job_title,
        ]
        .into_iter()
        .any(|field| field.to_lowercase().contains(needle))
    }
}

/// A validated directory search term.
///
/// Keeps the caller's original text for echoing back alongside the
/// lower-cased form used for matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    raw: String,
    normalized: String,
}

impl SearchQuery {
    /// Shortest accepted query, in UTF-16 code units.
    pub const MIN_LEN: usize = 2;

    /// Validates a query taken from a request body.
    pub fn parse(raw: Option<String>) -> Result<Self, ValidationError> {
        match raw {
            Some(raw) if raw.encode_utf16().count() >= Self::MIN_LEN => Ok(Self {
                normalized: raw.to_lowercase(),
                raw,
            }),
            _ => Err(ValidationError::QueryTooShort { min: Self::MIN_LEN }),
        }
    }

    /// Validates a raw `query` value from a request body.
    ///
    /// Unset values (see [`json::is_truthy`]) and arrays shorter than the
    /// minimum are invalid, like short strings. Any other non-string value
    /// has no text to match and is [`QueryError::NotText`].
    pub fn from_json(raw: Option<&Value>) -> Result<Self, QueryError> {
        let too_short = ValidationError::QueryTooShort { min: Self::MIN_LEN };
        match raw.filter(|v| json::is_truthy(v)) {
            None => Err(too_short.into()),
            Some(Value::String(s)) => Ok(Self::parse(Some(s.clone()))?),
            Some(Value::Array(items)) if items.len() < Self::MIN_LEN => Err(too_short.into()),
            Some(other) => Err(QueryError::NotText(json::type_name(other))),
        }
    }

    /// The query exactly as supplied.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// The lower-cased query.
    pub fn normalized(&self) -> &str {
        &self.normalized
    }

    pub fn into_inner(self) -> String {
        self.raw
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn john() -> DirectoryUser {
        DirectoryUser {
            id: "user1".to_string(),
            display_name: "John Smith".to_string(),
            mail: "john.smith@company.com".to_string(),
            job_title: "Software Developer".to_string(),
            department: "IT".to_string(),
        }
    }

    fn query(s: &str) -> SearchQuery {
        SearchQuery::parse(Some(s.to_string())).unwrap()
    }

    #[test]
    fn parse_rejects_missing_and_short_queries() {
        assert_eq!(
            SearchQuery::parse(None),
            Err(ValidationError::QueryTooShort { min: 2 })
        );
        assert!(SearchQuery::parse(Some(String::new())).is_err());
        assert!(SearchQuery::parse(Some("j".to_string())).is_err());
    }

    #[test]
    fn parse_keeps_raw_text() {
        let q = query("SMith");
        assert_eq!(q.as_str(), "SMith");
        assert_eq!(q.normalized(), "smith");
    }

    #[test]
    fn parse_counts_utf16_units() {
        // One astral-plane character is two UTF-16 units.
        assert!(SearchQuery::parse(Some("😀".to_string())).is_ok());
        assert!(SearchQuery::parse(Some("é".to_string())).is_err());
    }

    #[test]
    fn parse_does_not_trim() {
        let q = query("  ");
        assert_eq!(q.as_str(), "  ");
    }

    #[test]
    fn from_json_reads_strings() {
        let q = SearchQuery::from_json(Some(&json!("Smith"))).unwrap();
        assert_eq!(q.as_str(), "Smith");

        assert_eq!(
            SearchQuery::from_json(Some(&json!("s"))),
            Err(QueryError::Invalid(ValidationError::QueryTooShort { min: 2 }))
        );
    }

    #[test]
    fn from_json_treats_unset_values_as_too_short() {
        let unset = [
            None,
            Some(json!(null)),
            Some(json!(0)),
            Some(json!(false)),
            Some(json!(["ab"])),
        ];
        for raw in unset {
            assert!(
                matches!(
                    SearchQuery::from_json(raw.as_ref()),
                    Err(QueryError::Invalid(_))
                ),
                "{raw:?}"
            );
        }
    }

    #[test]
    fn from_json_rejects_non_text() {
        assert_eq!(
            SearchQuery::from_json(Some(&json!(42))),
            Err(QueryError::NotText("number"))
        );
        assert_eq!(
            SearchQuery::from_json(Some(&json!({ "name": "smith" }))),
            Err(QueryError::NotText("object"))
        );
        assert_eq!(
            SearchQuery::from_json(Some(&json!(["a", "b", "c"]))),
            Err(QueryError::NotText("array"))
        );
    }

    #[test]
    fn matches_each_searchable_field() {
        let user = john();
        assert!(user.matches(&query("john s")));
        assert!(user.matches(&query("@company")));
        assert!(user.matches(&query("it")));
        assert!(user.matches(&query("developer")));
    }

    #[test]
    fn matching_ignores_case() {
        let user = john();
        assert!(user.matches(&query("SMITH")));
        assert!(user.matches(&query("smith")));
    }

    #[test]
    fn id_is_not_searchable() {
        assert!(!john().matches(&query("user1")));
    }

    #[test]
    fn serializes_with_camel_case_fields() {
        let json = serde_json::to_value(john()).unwrap();
        assert_eq!(json["displayName"], "John Smith");
        assert_eq!(json["jobTitle"], "Software Developer");
        assert!(json.get("display_name").is_none());
    }
}
