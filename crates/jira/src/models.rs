//! Wire types for the search and update endpoints.

use rollout_core::Issue;
use serde::Deserialize;

/// One page of a JQL search response.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(rename = "startAt")]
    pub start_at: u64,
    #[serde(rename = "maxResults")]
    pub max_results: u64,
    pub total: u64,
    pub issues: Vec<JiraIssue>,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssue {
    pub key: String,
    pub fields: JiraIssueFields,
}

#[derive(Debug, Deserialize)]
pub struct JiraIssueFields {
    pub summary: String,
    /// Remaining time estimate in seconds.
    pub timeestimate: Option<i64>,
}

impl From<JiraIssue> for Issue {
    fn from(issue: JiraIssue) -> Self {
        Issue {
            key: issue.key,
            summary: issue.fields.summary,
            estimate_seconds: issue.fields.timeestimate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_a_search_page() {
        let body = r#"{
            "startAt": 0,
            "maxResults": 100,
            "total": 2,
            "issues": [
                {"key": "ROLL-1", "fields": {"summary": "first", "timeestimate": 28800}},
                {"key": "ROLL-2", "fields": {"summary": "second", "timeestimate": null}}
            ]
        }"#;
        let page: SearchResponse = serde_json::from_str(body).unwrap();
        assert_eq!(page.total, 2);
        assert_eq!(page.issues.len(), 2);
        assert_eq!(page.issues[0].key, "ROLL-1");
        assert_eq!(page.issues[0].fields.timeestimate, Some(28800));
        assert!(page.issues[1].fields.timeestimate.is_none());
    }

    #[test]
    fn missing_timeestimate_field_is_tolerated() {
        let body = r#"{"key": "ROLL-3", "fields": {"summary": "bare"}}"#;
        let issue: JiraIssue = serde_json::from_str(body).unwrap();
        assert!(issue.fields.timeestimate.is_none());
    }

    #[test]
    fn converts_to_core_issue() {
        let issue = JiraIssue {
            key: "ROLL-9".into(),
            fields: JiraIssueFields {
                summary: "convert me".into(),
                timeestimate: Some(57600),
            },
        };
        let core: Issue = issue.into();
        assert_eq!(core.key, "ROLL-9");
        assert_eq!(core.summary, "convert me");
        assert_eq!(core.estimate_seconds, Some(57600));
    }
}
