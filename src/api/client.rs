//! The employee API client.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};

use crate::api::error::ApiError;
use crate::api::wire::WireEmployee;
use crate::config::ApiSettings;
use crate::model::Employee;

/// Header carrying the customer identifier on every request.
pub const CUSTOMER_HEADER: &str = "x-customer-id";
/// Header carrying the shared API key on every request.
pub const API_KEY_HEADER: &str = "x-api-key";

const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Client for the remote employee-records service.
///
/// Constructed explicitly and passed into the state containers that need
/// it; there is no global instance. Tests point `base_url` at a local
/// mock server.
pub struct EmployeeApi {
    client: Client,
    settings: ApiSettings,
}

impl EmployeeApi {
    pub fn new(settings: ApiSettings) -> Self {
        let client = Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .expect("Failed to build HTTP client");
        Self { client, settings }
    }

    fn collection_url(&self) -> String {
        format!(
            "{}/employees",
            self.settings.base_url.trim_end_matches('/')
        )
    }

    fn resource_url(&self, id: &str) -> String {
        format!("{}/{}", self.collection_url(), id)
    }

    fn authed(&self, builder: RequestBuilder) -> RequestBuilder {
        let builder = builder.header(CUSTOMER_HEADER, self.settings.customer_id.as_str());
        match self.settings.credential() {
            Some(key) => builder.header(API_KEY_HEADER, key.expose()),
            None => builder,
        }
    }

    async fn check(resp: Response) -> Result<Response, ApiError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        Err(ApiError::http(status, &body))
    }

    async fn decode_one(resp: Response) -> Result<Employee, ApiError> {
        let wire: WireEmployee = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(wire.into_model())
    }

    /// Fetch the full employee collection.
    ///
    /// The service reports an empty collection as 404, so that status is
    /// an empty list here, not an error.
    pub async fn list(&self) -> Result<Vec<Employee>, ApiError> {
        tracing::debug!("fetching employee list");
        let resp = self
            .authed(self.client.get(self.collection_url()))
            .send()
            .await?;
        if resp.status() == StatusCode::NOT_FOUND {
            return Ok(Vec::new());
        }
        let resp = Self::check(resp).await?;
        let wires: Vec<WireEmployee> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        Ok(wires.into_iter().map(WireEmployee::into_model).collect())
    }

    /// Fetch a single employee by id.
    pub async fn get(&self, id: &str) -> Result<Employee, ApiError> {
        tracing::debug!(id, "fetching employee");
        let resp = self
            .authed(self.client.get(self.resource_url(id)))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Self::decode_one(resp).await
    }

    /// Create a new employee. Resolves with the record as the service
    /// echoes it back.
    pub async fn create(&self, employee: &Employee) -> Result<Employee, ApiError> {
        tracing::debug!(id = %employee.id, "creating employee");
        let payload = WireEmployee::from_model(employee);
        let resp = self
            .authed(self.client.post(self.collection_url()).json(&payload))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Self::decode_one(resp).await
    }

    /// Update an existing employee. The identifier travels in the payload,
    /// not the path.
    pub async fn update(&self, employee: &Employee) -> Result<Employee, ApiError> {
        tracing::debug!(id = %employee.id, "updating employee");
        let payload = WireEmployee::from_model(employee);
        let resp = self
            .authed(self.client.put(self.collection_url()).json(&payload))
            .send()
            .await?;
        let resp = Self::check(resp).await?;
        Self::decode_one(resp).await
    }

    /// Delete an employee by id.
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        tracing::debug!(id, "deleting employee");
        let resp = self
            .authed(self.client.delete(self.resource_url(id)))
            .send()
            .await?;
        Self::check(resp).await?;
        Ok(())
    }
}
