use crate::domain::model::{ExerciseQuery, ExerciseRecord};
use crate::domain::ports::ExerciseSource;
use crate::utils::error::{PlannerError, Result};
use crate::utils::validation::validate_url;
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use reqwest::Client;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://exercises-by-api-ninjas.p.rapidapi.com/v1/exercises";

const API_KEY_HEADER: &str = "x-rapidapi-key";
const API_HOST_HEADER: &str = "x-rapidapi-host";

/// Exercise database reached over HTTP. Requests are plain GETs with
/// `muscle`, `type` and `difficulty` query parameters; no retry, no timeout.
pub struct RemoteSource {
    endpoint: String,
    client: Client,
}

impl RemoteSource {
    pub fn new(endpoint: &str, api_key: Option<&str>) -> Result<Self> {
        validate_url("api_endpoint", endpoint)?;

        let mut headers = HeaderMap::new();
        if let Some(key) = api_key {
            let key_value =
                HeaderValue::from_str(key).map_err(|e| PlannerError::InvalidConfigValueError {
                    field: "api_key".to_string(),
                    value: "<redacted>".to_string(),
                    reason: format!("API key is not a valid header value: {}", e),
                })?;
            headers.insert(HeaderName::from_static(API_KEY_HEADER), key_value);

            // RapidAPI wants the gateway host alongside the key
            if let Some(host) = Url::parse(endpoint)
                .ok()
                .and_then(|url| url.host_str().map(str::to_string))
            {
                if let Ok(host_value) = HeaderValue::from_str(&host) {
                    headers.insert(HeaderName::from_static(API_HOST_HEADER), host_value);
                }
            }
        }

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .map_err(|e| PlannerError::ConfigError {
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            endpoint: endpoint.to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn data_source_error(muscle: &str, source: reqwest::Error) -> PlannerError {
    tracing::error!("❌ Error fetching exercise data for '{}': {}", muscle, source);
    PlannerError::DataSourceError {
        muscle: muscle.to_string(),
        source,
    }
}

#[async_trait]
impl ExerciseSource for RemoteSource {
    fn name(&self) -> &str {
        "remote"
    }

    async fn fetch(&self, query: &ExerciseQuery) -> Result<Vec<ExerciseRecord>> {
        let mut request = self
            .client
            .get(&self.endpoint)
            .query(&[("muscle", query.muscle.as_str())]);

        if let Some(exercise_type) = &query.exercise_type {
            request = request.query(&[("type", exercise_type.as_str())]);
        }
        if let Some(difficulty) = &query.difficulty {
            request = request.query(&[("difficulty", difficulty.as_str())]);
        }

        tracing::debug!("Making API request to: {} ({:?})", self.endpoint, query);

        let response = request
            .send()
            .await
            .map_err(|e| data_source_error(&query.muscle, e))?;

        tracing::debug!("API response status: {}", response.status());

        let records: Vec<ExerciseRecord> = response
            .error_for_status()
            .map_err(|e| data_source_error(&query.muscle, e))?
            .json()
            .await
            .map_err(|e| data_source_error(&query.muscle, e))?;

        tracing::debug!(
            "Received {} exercises for '{}'",
            records.len(),
            query.muscle
        );
        Ok(records)
    }
}
