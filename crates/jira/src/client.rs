use chrono::NaiveDate;
use rollout_core::Issue;
use serde_json::{json, Map, Value};
use tracing::debug;

use crate::error::JiraError;
use crate::models::SearchResponse;

/// Page size for the search endpoint.
const MAX_RESULTS: u64 = 100;

/// Client for the Jira REST v3 search and issue-update endpoints.
pub struct JiraClient {
    base_url: String,
    username: String,
    api_token: String,
    http: reqwest::Client,
}

impl JiraClient {
    /// Create a client for `base_url`, e.g. `https://company.atlassian.net`.
    pub fn new(base_url: &str, username: &str, api_token: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            username: username.to_string(),
            api_token: api_token.to_string(),
            http: reqwest::Client::new(),
        }
    }

    /// Run a JQL query, paging until every match has been fetched, and
    /// return the issues in the order the tracker yields them.
    pub async fn search(&self, jql: &str) -> Result<Vec<Issue>, JiraError> {
        let url = format!("{}/rest/api/3/search", self.base_url);
        let mut issues: Vec<Issue> = Vec::new();
        let mut start_at: u64 = 0;

        loop {
            debug!(%jql, start_at, "searching issues");
            let start_at_param = start_at.to_string();
            let max_results_param = MAX_RESULTS.to_string();
            let resp = self
                .http
                .get(&url)
                .basic_auth(&self.username, Some(&self.api_token))
                .header("Accept", "application/json")
                .query(&[
                    ("jql", jql),
                    ("startAt", start_at_param.as_str()),
                    ("maxResults", max_results_param.as_str()),
                    ("validateQuery", "strict"),
                ])
                .send()
                .await?;

            if !resp.status().is_success() {
                let status = resp.status().as_u16();
                let body = resp.text().await.unwrap_or_default();
                return Err(JiraError::Api { status, body });
            }

            let page: SearchResponse = resp.json().await?;
            let fetched = page.issues.len() as u64;
            let total = page.total;
            issues.extend(page.issues.into_iter().map(Issue::from));

            match next_page_start(start_at, fetched, total) {
                Some(next) => start_at = next,
                None => break,
            }
        }

        debug!(count = issues.len(), "search complete");
        Ok(issues)
    }

    /// Write the computed start/due dates onto one issue. Field identifiers
    /// are tracker-specific (e.g. `customfield_10015` and `duedate`).
    pub async fn update_dates(
        &self,
        key: &str,
        start_field: &str,
        due_field: &str,
        start_date: NaiveDate,
        due_date: NaiveDate,
    ) -> Result<(), JiraError> {
        let url = format!(
            "{}/rest/api/3/issue/{}?overrideScreenSecurity=false&overrideEditableFlag=false",
            self.base_url, key
        );
        let payload = date_fields_payload(start_field, due_field, start_date, due_date);

        debug!(%key, %start_date, %due_date, "updating rollout dates");
        let resp = self
            .http
            .put(&url)
            .basic_auth(&self.username, Some(&self.api_token))
            .header("Accept", "application/json")
            .json(&payload)
            .send()
            .await?;

        if !resp.status().is_success() {
            let status = resp.status().as_u16();
            let body = resp.text().await.unwrap_or_default();
            return Err(JiraError::Api { status, body });
        }

        Ok(())
    }
}

/// Where the next search page starts, or None once the reported total has
/// been fetched. An empty page also ends the loop, whatever the total says.
fn next_page_start(start_at: u64, fetched: u64, total: u64) -> Option<u64> {
    if fetched == 0 {
        return None;
    }
    let next = start_at + fetched;
    if next >= total {
        None
    } else {
        Some(next)
    }
}

/// Build the update body: both date fields in `YYYY-MM-DD` format.
fn date_fields_payload(
    start_field: &str,
    due_field: &str,
    start_date: NaiveDate,
    due_date: NaiveDate,
) -> Value {
    let mut fields = Map::new();
    fields.insert(
        start_field.to_string(),
        Value::String(start_date.format("%Y-%m-%d").to_string()),
    );
    fields.insert(
        due_field.to_string(),
        Value::String(due_date.format("%Y-%m-%d").to_string()),
    );
    json!({ "fields": fields })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_trailing_slash_from_base_url() {
        let client = JiraClient::new("https://example.atlassian.net/", "me", "token");
        assert_eq!(client.base_url, "https://example.atlassian.net");
    }

    #[test]
    fn paging_walks_until_the_total_is_exhausted() {
        // 250 matches fetched in pages of 100
        assert_eq!(next_page_start(0, 100, 250), Some(100));
        assert_eq!(next_page_start(100, 100, 250), Some(200));
        assert_eq!(next_page_start(200, 50, 250), None);
    }

    #[test]
    fn paging_stops_on_a_single_short_page() {
        assert_eq!(next_page_start(0, 7, 7), None);
    }

    #[test]
    fn paging_stops_on_an_empty_page_even_with_total_remaining() {
        assert_eq!(next_page_start(0, 0, 50), None);
    }

    #[test]
    fn update_payload_uses_iso_dates_under_configured_fields() {
        let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let due = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let payload = date_fields_payload("customfield_10015", "duedate", start, due);
        assert_eq!(payload["fields"]["customfield_10015"], "2024-01-01");
        assert_eq!(payload["fields"]["duedate"], "2024-01-03");
    }
}
