use anyhow::{Context, Result};
use reqwest::Client;
use reqwest::header::RETRY_AFTER;
use serde::Deserialize;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::sleep;

use crate::calendar::RawCalendar;

/// Fetch adapter for the GitHub GraphQL API. Owns every network concern
/// (token, retries, HTTP errors); the calendar core never sees any of it.
#[derive(Clone)]
pub struct GithubClient {
    token: Arc<String>,
    http: Arc<Client>,
}

impl GithubClient {
    /// Create a GitHub GraphQL client using the GITHUB_TOKEN env variable.
    pub fn new() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN")
            .context("GITHUB_TOKEN environment variable not set")?;
        Ok(Self {
            token: Arc::new(token),
            http: Arc::new(Client::new()),
        })
    }

    /// Low-level GraphQL request with basic retry/backoff and `errors` checking.
    async fn graphql(&self, query: &str) -> Result<Value> {
        // Simple retry/backoff policy
        const MAX_RETRIES: usize = 4;
        let mut attempt = 0usize;

        loop {
            attempt += 1;

            let req = self
                .http
                .post("https://api.github.com/graphql")
                .bearer_auth(&*self.token)
                .header("User-Agent", "ghstreak")
                .json(&serde_json::json!({ "query": query }));

            let resp = req
                .send()
                .await
                .map_err(|e| anyhow::anyhow!("Network error sending GraphQL request: {e}"))?;

            let status = resp.status();
            let headers = resp.headers().clone();

            // Parse JSON (even for non-2xx to capture error payloads)
            let json: Value = resp
                .json()
                .await
                .map_err(|e| anyhow::anyhow!("Failed to parse JSON from GitHub: {e}"))?;

            // If GraphQL returned an `errors` field, treat it as an error.
            if let Some(errors) = json.get("errors") {
                return Err(anyhow::anyhow!("GraphQL reported errors: {errors:#}"));
            }

            if status.is_success() {
                return Ok(json);
            }

            // If rate limited, honor Retry-After header when present
            if status.as_u16() == 429 {
                if attempt >= MAX_RETRIES {
                    return Err(anyhow::anyhow!(
                        "GitHub API returned 429 (rate-limited) and retries exhausted"
                    ));
                }
                let wait_secs = headers
                    .get(RETRY_AFTER)
                    .and_then(|v| v.to_str().ok())
                    .and_then(|s| s.parse::<u64>().ok())
                    .unwrap_or(2);
                sleep(Duration::from_secs(wait_secs)).await;
                continue;
            }

            // Retry on 5xx server errors
            if status.is_server_error() && attempt < MAX_RETRIES {
                let backoff = Duration::from_millis(250u64.saturating_mul(1 << (attempt - 1)));
                sleep(backoff).await;
                continue;
            }

            return Err(anyhow::anyhow!(
                "GitHub API returned HTTP {}: {json:#}",
                status.as_u16()
            ));
        }
    }

    /// Fetch the trailing-year contribution calendar for `username`.
    pub async fn contribution_calendar(&self, username: &str) -> Result<RawCalendar> {
        let query = format!(
            r#"
            {{
                user(login: "{username}") {{
                    contributionsCollection {{
                        contributionCalendar {{
                            totalContributions
                            weeks {{
                                contributionDays {{
                                    date
                                    contributionCount
                                }}
                            }}
                        }}
                    }}
                }}
            }}
        "#
        );

        #[derive(Deserialize)]
        struct CalendarResponse {
            data: Option<CalendarData>,
        }
        #[derive(Deserialize)]
        struct CalendarData {
            user: Option<CalendarUser>,
        }
        #[derive(Deserialize)]
        struct CalendarUser {
            #[serde(rename = "contributionsCollection")]
            contributions_collection: ContribCollection,
        }
        #[derive(Deserialize)]
        struct ContribCollection {
            #[serde(rename = "contributionCalendar")]
            contribution_calendar: RawCalendar,
        }

        let json = self.graphql(&query).await?;
        let parsed: CalendarResponse = serde_json::from_value(json)
            .context("Failed to deserialize contribution_calendar response")?;

        parsed
            .data
            .and_then(|d| d.user)
            .map(|u| u.contributions_collection.contribution_calendar)
            .ok_or_else(|| anyhow::anyhow!("No GitHub user found for login {username:?}"))
    }
}
