// Splunk management REST API job store.

use crate::config::Search;
use crate::domain::entities::row::Row;
use crate::domain::value_objects::entity_name::EntityName;
use crate::infrastructure::search::dto::{JobEnvelope, JobRow, RowsPage};
use crate::infrastructure::search::job_store::{JobRepositoryError, JobStore};
use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use thiserror::Error;
use tracing::{debug, warn};

/// Rows requested per call; matches the platform's default `maxresultrows`.
const PAGE_SIZE: usize = 50_000;

#[derive(Error, Debug)]
pub enum SplunkStoreError {
    #[error("invalid search base_url {0:?}")]
    InvalidBaseUrl(String),

    #[error("build http client: {0}")]
    Client(#[from] reqwest::Error),
}

#[derive(Debug, Clone)]
enum SplunkAuth {
    Bearer(String),
    Basic { username: String, password: String },
    Anonymous,
}

/// Resolves sids and reads result sets through `/services/search/jobs`.
pub struct SplunkJobStore {
    client: reqwest::Client,
    base_url: Url,
    auth: SplunkAuth,
}

impl SplunkJobStore {
    /// Build a store from the `search` settings.
    pub fn new(settings: &Search) -> Result<Self, SplunkStoreError> {
        let base_url = Url::parse(&settings.base_url)
            .map_err(|_| SplunkStoreError::InvalidBaseUrl(settings.base_url.clone()))?;
        if base_url.cannot_be_a_base() {
            return Err(SplunkStoreError::InvalidBaseUrl(settings.base_url.clone()));
        }

        let timeout = std::time::Duration::from_millis(settings.request_timeout_ms);
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .danger_accept_invalid_certs(settings.accept_invalid_certs)
            .build()?;

        let auth = match (&settings.token, &settings.username) {
            (Some(token), _) => SplunkAuth::Bearer(token.clone()),
            (None, Some(username)) => SplunkAuth::Basic {
                username: username.clone(),
                password: settings.password.clone().unwrap_or_default(),
            },
            (None, None) => SplunkAuth::Anonymous,
        };

        Ok(Self {
            client,
            base_url,
            auth,
        })
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, JobRepositoryError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| JobRepositoryError::StorageUnavailable)?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    async fn fetch(
        &self,
        url: Url,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, JobRepositoryError> {
        let request = self
            .client
            .get(url.clone())
            .query(&[("output_mode", "json")])
            .query(query);
        let request = match &self.auth {
            SplunkAuth::Bearer(token) => request.bearer_auth(token),
            SplunkAuth::Basic { username, password } => {
                request.basic_auth(username, Some(password))
            }
            SplunkAuth::Anonymous => request,
        };

        let response = request.send().await.map_err(|e| {
            warn!(url = %url, error = %e, "search platform request failed");
            JobRepositoryError::from(e)
        })?;
        debug!(url = %url, status = response.status().as_u16(), "search platform response");
        Ok(response)
    }
}

fn check_status(status: StatusCode) -> Result<(), JobRepositoryError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::NOT_FOUND => Err(JobRepositoryError::NotFound),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(JobRepositoryError::Unauthorized),
        _ => Err(JobRepositoryError::StorageUnavailable),
    }
}

#[async_trait]
impl JobStore for SplunkJobStore {
    async fn get(&self, sid: &str) -> Result<Option<JobRow>, JobRepositoryError> {
        let url = self.endpoint(&["services", "search", "jobs", sid])?;
        let response = self.fetch(url, &[]).await?;

        match check_status(response.status()) {
            Ok(()) => {}
            Err(JobRepositoryError::NotFound) => return Ok(None),
            Err(err) => return Err(err),
        }

        let envelope = response.json::<JobEnvelope>().await?;
        Ok(envelope.entry.into_iter().next().map(|entry| entry.content))
    }

    async fn list_rows(
        &self,
        sid: &str,
        entity: EntityName,
        offset: usize,
        count: usize,
    ) -> Result<Vec<Row>, JobRepositoryError> {
        // The platform reads count=0 as "everything".
        if count == 0 {
            return Ok(Vec::new());
        }

        let url = self.endpoint(&["services", "search", "jobs", sid, entity.as_str()])?;
        let mut rows = Vec::new();

        // Replies are capped server-side (maxresultrows), so keep reading until the window
        // is full or the set runs out.
        while rows.len() < count {
            let page_offset = offset.saturating_add(rows.len());
            let page_count = (count - rows.len()).min(PAGE_SIZE);
            let query = [
                ("offset", page_offset.to_string()),
                ("count", page_count.to_string()),
            ];
            let response = self.fetch(url.clone(), &query).await?;
            check_status(response.status())?;

            // A job with no rows yet answers 204 with an empty body.
            if response.status() == StatusCode::NO_CONTENT {
                break;
            }

            let page = response.json::<RowsPage>().await?;
            if page.results.is_empty() {
                break;
            }
            debug!(sid, offset = page_offset, received = page.results.len(), "read result page");
            rows.extend(page.results);
        }

        rows.truncate(count);
        Ok(rows)
    }

    async fn ping(&self) -> Result<(), JobRepositoryError> {
        let url = self.endpoint(&["services", "server", "info"])?;
        let response = self.fetch(url, &[]).await?;
        check_status(response.status())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings(base_url: &str) -> Search {
        Search {
            backend: crate::config::SearchBackend::Splunk,
            base_url: base_url.to_string(),
            token: None,
            username: Some("admin".to_string()),
            password: Some("changeme".to_string()),
            request_timeout_ms: 1000,
            accept_invalid_certs: true,
            fixture_path: None,
        }
    }

    #[test]
    fn given_base_url_with_path_when_endpoint_built_should_append_segments() {
        let store = SplunkJobStore::new(&settings("https://splunk.local:8089/proxy/")).unwrap();

        let url = store
            .endpoint(&["services", "search", "jobs", "a/b c"])
            .unwrap();

        assert_eq!(
            url.as_str(),
            "https://splunk.local:8089/proxy/services/search/jobs/a%2Fb%20c"
        );
    }

    #[test]
    fn given_unparseable_base_url_when_built_should_fail() {
        let result = SplunkJobStore::new(&settings("not a url"));
        assert!(matches!(result, Err(SplunkStoreError::InvalidBaseUrl(_))));
    }

    #[test]
    fn given_token_and_username_when_built_should_prefer_token() {
        let mut s = settings("https://splunk.local:8089");
        s.token = Some("abc".to_string());
        let store = SplunkJobStore::new(&s).unwrap();
        assert!(matches!(store.auth, SplunkAuth::Bearer(ref t) if t == "abc"));
    }

    #[test]
    fn given_statuses_when_checked_should_map_to_repository_errors() {
        assert_eq!(check_status(StatusCode::OK), Ok(()));
        assert_eq!(
            check_status(StatusCode::NOT_FOUND),
            Err(JobRepositoryError::NotFound)
        );
        assert_eq!(
            check_status(StatusCode::FORBIDDEN),
            Err(JobRepositoryError::Unauthorized)
        );
        assert_eq!(
            check_status(StatusCode::BAD_GATEWAY),
            Err(JobRepositoryError::StorageUnavailable)
        );
    }

    #[tokio::test]
    async fn given_zero_count_when_list_rows_should_not_touch_the_network() {
        // Port 9 (discard) is never contacted: a request would fail the test.
        let store = SplunkJobStore::new(&settings("http://127.0.0.1:9")).unwrap();

        let rows = store
            .list_rows("sid", EntityName::Results, 0, 0)
            .await
            .unwrap();

        assert!(rows.is_empty());
    }
}
