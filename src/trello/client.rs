//! Trello REST API client
//!
//! One request per call, no pagination, no retries. Failures carry the
//! status and body Trello returned.

use anyhow::{Context, Result, bail};
use reqwest::{Client, Url};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::types::{TrelloCard, TrelloList};

/// Production Trello API endpoint
pub const DEFAULT_BASE_URL: &str = "https://api.trello.com";

/// Browser-facing endpoint that issues access tokens
const AUTHORIZE_URL: &str = "https://trello.com/1/authorize";

/// Thin client over Trello's REST API
pub struct TrelloClient {
    http: Client,
    base_url: String,
    app_key: String,
    token: Option<String>,
}

impl TrelloClient {
    /// Create a client for the given application key and optional user token
    pub fn new(app_key: String, token: Option<String>) -> Self {
        Self {
            http: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            app_key,
            token,
        }
    }

    /// Point the client at a different API endpoint
    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    /// Build the URL a user must visit to grant this application a token
    pub fn token_request_url(
        &self,
        app_name: &str,
        expiration: &str,
        write_access: bool,
    ) -> Result<Url> {
        let scope = if write_access { "read,write" } else { "read" };
        Url::parse_with_params(
            AUTHORIZE_URL,
            &[
                ("key", self.app_key.as_str()),
                ("name", app_name),
                ("expiration", expiration),
                ("response_type", "token"),
                ("scope", scope),
            ],
        )
        .context("Failed to build Trello authorize URL")
    }

    /// Fetch the board's lists (id and name only)
    pub async fn board_lists(&self, board_id: &str) -> Result<Vec<TrelloList>> {
        self.get_json(
            &format!("/1/boards/{board_id}/lists"),
            &[("fields", "name")],
        )
        .await
    }

    /// Fetch the board's cards (id, name and parent list only)
    pub async fn board_cards(&self, board_id: &str) -> Result<Vec<TrelloCard>> {
        self.get_json(
            &format!("/1/boards/{board_id}/cards"),
            &[("fields", "name,idList")],
        )
        .await
    }

    /// Create a new card with the given name in a list
    pub async fn create_card(&self, list_id: &str, name: &str) -> Result<TrelloCard> {
        let url = format!("{}/1/cards", self.base_url);
        debug!(%url, list_id, "creating trello card");

        let response = self
            .http
            .post(&url)
            .query(&[("idList", list_id), ("name", name)])
            .query(&self.auth_params())
            .send()
            .await
            .context("Request to /1/cards failed")?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Trello API error on /1/cards: status {status}: {body}");
        }

        response
            .json()
            .await
            .context("Malformed Trello response from /1/cards")
    }

    /// GET a Trello endpoint and decode the JSON body
    async fn get_json<T: DeserializeOwned>(&self, path: &str, query: &[(&str, &str)]) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching from trello");

        let response = self
            .http
            .get(&url)
            .query(query)
            .query(&self.auth_params())
            .send()
            .await
            .with_context(|| format!("Request to {path} failed"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            bail!("Trello API error on {path}: status {status}: {body}");
        }

        response
            .json()
            .await
            .with_context(|| format!("Malformed Trello response from {path}"))
    }

    /// Query parameters authenticating every API request
    fn auth_params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![("key", self.app_key.as_str())];
        if let Some(token) = &self.token {
            params.push(("token", token.as_str()));
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn query_map(url: &Url) -> HashMap<String, String> {
        url.query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect()
    }

    #[test]
    fn token_url_defaults_to_read_scope() {
        let client = TrelloClient::new("key123".to_string(), None);
        let url = client.token_request_url("boxsizer", "30days", false).unwrap();

        assert_eq!(url.host_str(), Some("trello.com"));
        assert_eq!(url.path(), "/1/authorize");

        let query = query_map(&url);
        assert_eq!(query["key"], "key123");
        assert_eq!(query["name"], "boxsizer");
        assert_eq!(query["expiration"], "30days");
        assert_eq!(query["response_type"], "token");
        assert_eq!(query["scope"], "read");
    }

    #[test]
    fn token_url_adds_write_scope_on_request() {
        let client = TrelloClient::new("key123".to_string(), None);
        let url = client.token_request_url("boxsizer", "never", true).unwrap();

        let query = query_map(&url);
        assert_eq!(query["expiration"], "never");
        assert_eq!(query["scope"], "read,write");
    }

    #[test]
    fn app_name_is_percent_encoded() {
        let client = TrelloClient::new("key123".to_string(), None);
        let url = client
            .token_request_url("box sizer", "30days", false)
            .unwrap();

        assert!(url.as_str().contains("name=box+sizer"));
    }

    #[test]
    fn base_url_override_drops_trailing_slash() {
        let client = TrelloClient::new("key".to_string(), None)
            .with_base_url("http://localhost:9999/");
        assert_eq!(client.base_url, "http://localhost:9999");
    }

    #[test]
    fn auth_params_include_token_when_present() {
        let client = TrelloClient::new("key".to_string(), Some("tok".to_string()));
        assert_eq!(
            client.auth_params(),
            vec![("key", "key"), ("token", "tok")]
        );

        let keyless = TrelloClient::new("key".to_string(), None);
        assert_eq!(keyless.auth_params(), vec![("key", "key")]);
    }
}
