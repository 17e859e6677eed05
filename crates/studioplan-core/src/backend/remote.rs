//! Remote backend over a PostgREST-style table API (as served by Supabase).

use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::{Method, RequestBuilder, Response, StatusCode};
use serde::Deserialize;

use super::{
    shape::{from_backend_shape, NewPlanRow, PlanRow},
    BackendKind, PlanBackend,
};
use crate::{
    error::{PlanError, Result},
    models::SavedPlan,
    params::CreatePlan,
};

/// Table holding plan rows when none is configured.
pub const DEFAULT_TABLE: &str = "plans";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Connection settings for the remote store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    /// Access key sent as `apikey` and bearer token
    pub key: String,
    /// Table holding plan rows
    pub table: String,
}

impl RemoteConfig {
    /// Builds a config when both URL and key are present and non-blank.
    pub fn from_parts(url: Option<&str>, key: Option<&str>, table: Option<&str>) -> Option<Self> {
        let url = url.map(str::trim).filter(|u| !u.is_empty())?;
        let key = key.map(str::trim).filter(|k| !k.is_empty())?;
        let table = table
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .unwrap_or(DEFAULT_TABLE);

        Some(Self {
            url: url.to_string(),
            key: key.to_string(),
            table: table.to_string(),
        })
    }

    /// REST endpoint for the plan table.
    pub fn endpoint(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

/// Error body returned by the REST API.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    message: Option<String>,
    details: Option<String>,
    hint: Option<String>,
    code: Option<String>,
}

/// Plan backend that stores each saved plan as a row in a remote table.
pub struct RemoteBackend {
    client: reqwest::Client,
    endpoint: String,
    key: String,
}

impl RemoteBackend {
    /// Creates a backend for the given remote config.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::Configuration` if the HTTP client cannot be built.
    pub fn new(config: &RemoteConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("studioplan/", env!("CARGO_PKG_VERSION")))
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| PlanError::Configuration {
                message: format!("Failed to build HTTP client: {e}"),
            })?;

        Ok(Self {
            client,
            endpoint: config.endpoint(),
            key: config.key.clone(),
        })
    }

    fn request(&self, method: Method) -> RequestBuilder {
        self.client
            .request(method, &self.endpoint)
            .header("apikey", &self.key)
            .bearer_auth(&self.key)
    }

    async fn send(&self, operation: &str, request: RequestBuilder) -> Result<Response> {
        let response = request
            .send()
            .await
            .map_err(|e| PlanError::remote(operation, &e.to_string(), None))?;

        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(remote_error(operation, status, &body))
    }

    async fn rows(&self, operation: &str, response: Response) -> Result<Vec<PlanRow>> {
        response
            .json::<Vec<PlanRow>>()
            .await
            .map_err(|e| PlanError::remote(operation, &format!("unexpected response: {e}"), None))
    }
}

/// Builds the caller-facing error for a failed REST call, keeping the
/// backend's own message and details so missing-table and permission-policy
/// problems can be diagnosed from the message alone.
fn remote_error(operation: &str, status: StatusCode, body: &str) -> PlanError {
    let parsed = serde_json::from_str::<ErrorBody>(body).unwrap_or_default();

    match parsed.message {
        Some(message) => {
            let message = match parsed.code {
                Some(code) => format!("{message} [{code}]"),
                None => message,
            };
            let details = parsed.details.or(parsed.hint);
            PlanError::remote(operation, &message, details.as_deref())
        }
        None if body.trim().is_empty() => PlanError::remote(operation, &format!("HTTP {status}"), None),
        None => PlanError::remote(operation, &format!("HTTP {status}: {}", body.trim()), None),
    }
}

#[async_trait]
impl PlanBackend for RemoteBackend {
    fn kind(&self) -> BackendKind {
        BackendKind::Remote
    }

    async fn list(&self) -> Result<Vec<SavedPlan>> {
        const OPERATION: &str = "Failed to list plans";
        debug!("GET {}", self.endpoint);

        let request = self
            .request(Method::GET)
            .query(&[("select", "*"), ("order", "created_at.desc")]);
        let response = self.send(OPERATION, request).await?;
        let rows = self.rows(OPERATION, response).await?;

        Ok(rows.into_iter().map(from_backend_shape).collect())
    }

    async fn create(&self, params: &CreatePlan) -> Result<SavedPlan> {
        const OPERATION: &str = "Failed to create plan";
        debug!("POST {}", self.endpoint);

        let request = self
            .request(Method::POST)
            .header("Prefer", "return=representation")
            .json(&NewPlanRow::new(&params.plan_data, &params.report));
        let response = self.send(OPERATION, request).await?;
        let row = self
            .rows(OPERATION, response)
            .await?
            .into_iter()
            .next()
            .ok_or_else(|| PlanError::remote(OPERATION, "no row returned", None))?;

        Ok(from_backend_shape(row))
    }

    async fn update(&self, plan: &SavedPlan) -> Result<SavedPlan> {
        const OPERATION: &str = "Failed to update plan";
        debug!("PATCH {} id={}", self.endpoint, plan.id);

        let request = self
            .request(Method::PATCH)
            .query(&[("id", format!("eq.{}", plan.id))])
            .header("Prefer", "return=representation")
            .json(&NewPlanRow::from(plan));
        let response = self.send(OPERATION, request).await?;

        // No returned row means no row matched the id.
        self.rows(OPERATION, response)
            .await?
            .into_iter()
            .next()
            .map(from_backend_shape)
            .ok_or_else(|| PlanError::PlanNotFound {
                id: plan.id.clone(),
            })
    }

    async fn delete(&self, id: &str) -> Result<()> {
        const OPERATION: &str = "Failed to delete plan";
        debug!("DELETE {} id={id}", self.endpoint);

        let request = self
            .request(Method::DELETE)
            .query(&[("id", format!("eq.{id}"))]);
        self.send(OPERATION, request).await?;
        Ok(())
    }
}
