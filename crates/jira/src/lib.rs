//! REST adapter for a Jira-style issue tracker: JQL search plus per-issue
//! date field updates, authenticated with a username/API-token pair.

pub mod client;
pub mod error;
pub mod models;

pub use client::JiraClient;
pub use error::JiraError;
