use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use super::LearningGateway;
use crate::error::{GatewayError, GatewayResult, ValidationError};
use crate::models::{AppliedSkill, Learning, LearningDetail, NewAppliedSkill, NewLearning};
use crate::traits::{Headers, HttpClient, Response};

const LEARNING_PATH: &str = "/api/learning";

/// Error payload the store sends with non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
}

/// [`LearningGateway`] over the store's REST API.
///
/// # Example
///
/// ```ignore
/// let gateway = HttpGateway::new(ReqwestHttpClient::new(), "http://localhost:3000/server/SkillBridge");
/// let learnings = gateway.list_learnings().await?;
/// ```
#[derive(Debug, Clone)]
pub struct HttpGateway<C: HttpClient> {
    client: C,
    base_url: String,
}

impl<C: HttpClient> HttpGateway<C> {
    /// Create a gateway rooted at `base_url` (trailing slashes are ignored).
    pub fn new(client: C, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    fn collection_url(&self) -> String {
        format!("{}{}", self.base_url, LEARNING_PATH)
    }

    /// The id is a single path segment, so `/`, `?` and `#` are escaped.
    fn learning_url(&self, id: &str) -> String {
        format!("{}{}/{}", self.base_url, LEARNING_PATH, urlencoding::encode(id))
    }

    fn applied_url(&self, id: &str) -> String {
        format!("{}/applied", self.learning_url(id))
    }

    fn read_headers() -> Headers {
        let mut headers = Headers::new();
        headers.insert("Accept".to_string(), "application/json".to_string());
        headers
    }

    fn write_headers() -> Headers {
        let mut headers = Self::read_headers();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        headers
    }

    async fn get(&self, url: &str) -> GatewayResult<Response> {
        let response = self.client.get(url, &Self::read_headers()).await?;
        Ok(response)
    }

    async fn post<B: serde::Serialize + Sync>(&self, url: &str, body: &B) -> GatewayResult<Response> {
        let body = serde_json::to_string(body).map_err(|e| GatewayError::decode(e.to_string()))?;
        let response = self.client.post(url, &body, &Self::write_headers()).await?;
        Ok(response)
    }
}

/// Build the error for a non-2xx response.
///
/// Uses the `error` field of a JSON body when present, the status' reason
/// phrase otherwise.
fn error_from_response(response: &Response) -> GatewayError {
    let message = response
        .json::<ErrorBody>()
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty())
        .or_else(|| reason_phrase(response.status));
    GatewayError::fetch(Some(response.status), message)
}

fn reason_phrase(status: u16) -> Option<String> {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .map(str::to_string)
}

fn decode<T: DeserializeOwned>(response: &Response) -> GatewayResult<T> {
    response
        .json::<T>()
        .map_err(|e| GatewayError::decode(e.to_string()))
}

#[async_trait]
impl<C: HttpClient> LearningGateway for HttpGateway<C> {
    async fn list_learnings(&self) -> GatewayResult<Vec<Learning>> {
        let url = self.collection_url();
        let response = self.get(&url).await?;
        if !response.is_success() {
            return Err(error_from_response(&response));
        }

        // Anything but an array is an empty collection
        let value: serde_json::Value = decode(&response)?;
        if !value.is_array() {
            tracing::warn!("List response was not an array; treating as empty");
            return Ok(Vec::new());
        }
        let learnings: Vec<Learning> =
            serde_json::from_value(value).map_err(|e| GatewayError::decode(e.to_string()))?;
        tracing::debug!("Fetched {} learnings", learnings.len());
        Ok(learnings)
    }

    async fn get_learning(&self, id: &str) -> GatewayResult<LearningDetail> {
        if id.trim().is_empty() {
            return Err(ValidationError::MissingLearningId.into());
        }
        let url = self.learning_url(id);
        let response = self.get(&url).await?;
        if response.status == 404 {
            return Err(GatewayError::not_found(id));
        }
        if !response.is_success() {
            return Err(error_from_response(&response));
        }
        decode(&response)
    }

    async fn create_learning(&self, request: &NewLearning) -> GatewayResult<Learning> {
        let request = request.validated()?;
        let url = self.collection_url();
        let response = self.post(&url, &request).await?;
        if !response.is_success() {
            return Err(error_from_response(&response));
        }
        decode(&response)
    }

    async fn create_applied_skill(
        &self,
        learning_id: &str,
        request: &NewAppliedSkill,
    ) -> GatewayResult<AppliedSkill> {
        if learning_id.trim().is_empty() {
            return Err(ValidationError::MissingLearningId.into());
        }
        let request = request.validated()?;
        let url = self.applied_url(learning_id);
        let response = self.post(&url, &request).await?;
        if !response.is_success() {
            return Err(error_from_response(&response));
        }
        decode(&response)
    }
}
