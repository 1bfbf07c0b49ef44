//! Qard API client.
//!
//! Wraps outbound calls to the Qard financial data API:
//! - Legal-user creation/lookup
//! - Company profile, officers and financial statement fetches
//! - Fire-and-forget user data sync
//!
//! Every public operation is best-effort: transport failures, non-success
//! statuses and unparseable bodies are logged and collapsed to `None` so
//! callers never deal with upstream errors directly. A 204 from the API is
//! "no data", logged at warn level rather than error.

use std::time::Duration;

use reqwest::{header, Client, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{error, warn};

use crate::config::QardConfig;
use crate::error::{Error, Result};
use crate::models::{is_valid_uuid, CompanyProfile, RemoteUser};

/// Client for the Qard API.
#[derive(Clone)]
pub struct QardClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl QardClient {
    /// Create a new client from the injected configuration.
    pub fn new(config: &QardConfig) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent("qardboard/1.0")
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// Build headers attached to every request.
    fn build_headers(&self) -> header::HeaderMap {
        let mut headers = header::HeaderMap::new();
        headers.insert("X-API-KEY", self.api_key.parse().unwrap());
        headers.insert(header::ACCEPT, "application/json".parse().unwrap());
        headers
    }

    /// Create or look up the legal user for a company.
    ///
    /// Returns `None` when the call fails or when the response carries no
    /// well-formed UUID; both cases count as "no user".
    pub async fn create_legal_user(&self, name: &str, siren: &str) -> Option<RemoteUser> {
        let body = json!({ "name": name, "siren": siren });

        let result: Result<RemoteUser> = self.try_post("/api/v6/users/legal", &body).await;

        match result {
            Ok(user) if is_valid_uuid(&user.id) => Some(user),
            Ok(user) => {
                warn!(
                    "Qard API [create_legal_user]: rejected malformed user id {:?} for siren {}",
                    user.id, siren
                );
                None
            }
            Err(err) => {
                error!("Qard API error [create_legal_user]: {}", err);
                None
            }
        }
    }

    /// Fetch the company profile for a legal user.
    pub async fn get_company_profile(&self, user_id: &str) -> Option<CompanyProfile> {
        self.fetch(
            &format!("/api/v6/users/{}/company-profile", user_id),
            "get_company_profile",
        )
        .await
    }

    /// Fetch the officer list for a legal user.
    pub async fn get_company_officers(&self, user_id: &str) -> Option<Value> {
        self.fetch(
            &format!("/api/v6/users/{}/company-officers", user_id),
            "get_company_officers",
        )
        .await
    }

    /// Fetch the financial statements for a legal user.
    pub async fn get_financial_statements(&self, user_id: &str) -> Option<Value> {
        self.fetch(
            &format!("/api/v6/users/{}/financial-statements", user_id),
            "get_financial_statements",
        )
        .await
    }

    /// Trigger a data sync for a legal user.
    ///
    /// Fire-and-forget: failures are logged and swallowed.
    pub async fn sync_user_data(&self, user_id: &str) {
        let url = format!("{}/api/v6/users/{}/sync", self.base_url, user_id);

        let result = self
            .client
            .post(&url)
            .headers(self.build_headers())
            .send()
            .await
            .and_then(|response| response.error_for_status());

        if let Err(err) = result {
            error!("Qard API error [sync_user_data]: {}", err);
        }
    }

    /// Collapse a GET outcome to `Option`, logging per the failure kind.
    async fn fetch<T: DeserializeOwned>(&self, endpoint: &str, context: &str) -> Option<T> {
        match self.try_get(endpoint).await {
            Ok(Some(data)) => Some(data),
            Ok(None) => {
                warn!("Qard API [{}]: No content (204)", context);
                None
            }
            Err(err) => {
                error!("Qard API error [{}]: {}", context, err);
                None
            }
        }
    }

    /// One best-effort GET against a Qard resource.
    ///
    /// `Ok(None)` means the API answered 204 No Content.
    async fn try_get<T: DeserializeOwned>(&self, endpoint: &str) -> Result<Option<T>> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .get(&url)
            .headers(self.build_headers())
            .send()
            .await
            .map_err(|e| Error::Qard(format!("Request failed: {}", e)))?;

        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Qard(format!("Qard API error {}: {}", status, text)));
        }

        let data = response
            .json()
            .await
            .map_err(|e| Error::Qard(format!("Failed to parse response: {}", e)))?;

        Ok(Some(data))
    }

    /// One best-effort POST with a JSON body.
    async fn try_post<T: DeserializeOwned>(&self, endpoint: &str, body: &Value) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);

        let response = self
            .client
            .post(&url)
            .headers(self.build_headers())
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Qard(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(Error::Qard(format!("Qard API error {}: {}", status, text)));
        }

        response
            .json()
            .await
            .map_err(|e| Error::Qard(format!("Failed to parse response: {}", e)))
    }
}
