//! Tourism-course village forecast tool.
//!
//! Proxies the Korea Meteorological Administration's tourism forecast API
//! on the public data portal (`getTourStnVilageFcst1`). The upstream JSON is
//! passed through untouched. Every outcome, including upstream failures, is
//! reported as an [`InvocationResult`]; the tool never errors.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

use crate::core::config::ForecastConfig;
use crate::domains::tools::{InvocationResult, ToolDefinition, ToolFailure};

/// Fixed pagination and format parameters sent upstream.
const PAGE_NO: u32 = 1;
const NUM_OF_ROWS: u32 = 10;
const DATA_TYPE: &str = "JSON";

const MISSING_KEY_MESSAGE: &str = "API 인증키가 설정되지 않았습니다";
const REQUEST_FAILED_MESSAGE: &str = "API 요청 실패";
const PARSE_FAILED_MESSAGE: &str = "JSON 파싱 실패";

/// Parameters for the forecast lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct TourForecastParams {
    /// Reference date, `YYYYMMDD`.
    #[schemars(description = "Reference date in YYYYMMDD format")]
    pub current_date: String,

    /// Reference hour, 0 to 23.
    #[schemars(description = "Reference hour (0-23)")]
    pub hour: i64,

    /// Tourism course identifier.
    #[schemars(description = "Regional tourism course ID")]
    pub course_id: i64,
}

/// Query string sent to the upstream endpoint.
#[derive(Debug, Serialize)]
struct ForecastQuery<'a> {
    #[serde(rename = "ServiceKey")]
    service_key: &'a str,
    #[serde(rename = "pageNo")]
    page_no: u32,
    #[serde(rename = "numOfRows")]
    num_of_rows: u32,
    #[serde(rename = "dataType")]
    data_type: &'a str,
    #[serde(rename = "CURRENT_DATE")]
    current_date: &'a str,
    #[serde(rename = "HOUR")]
    hour: i64,
    #[serde(rename = "COURSE_ID")]
    course_id: i64,
}

/// Tourism forecast proxy tool.
#[derive(Debug, Clone)]
pub struct TourForecastTool {
    client: reqwest::Client,
    config: ForecastConfig,
}

impl TourForecastTool {
    pub fn new(config: ForecastConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Use a preconfigured HTTP client.
    pub fn with_client(client: reqwest::Client, config: ForecastConfig) -> Self {
        Self { client, config }
    }

    /// Build the full request URL for the given parameters.
    ///
    /// The service key is percent-encoded exactly once, here.
    pub fn request_url(
        &self,
        service_key: &str,
        params: &TourForecastParams,
    ) -> Result<String, serde_urlencoded::ser::Error> {
        let query = ForecastQuery {
            service_key,
            page_no: PAGE_NO,
            num_of_rows: NUM_OF_ROWS,
            data_type: DATA_TYPE,
            current_date: &params.current_date,
            hour: params.hour,
            course_id: params.course_id,
        };
        let encoded = serde_urlencoded::to_string(&query)?;
        Ok(format!("{}?{}", self.config.base_url, encoded))
    }

    /// Query the upstream API and classify the outcome.
    #[instrument(skip(self), fields(date = %params.current_date, hour = params.hour, course_id = params.course_id))]
    pub async fn fetch(&self, params: &TourForecastParams) -> InvocationResult {
        let Some(service_key) = self.config.service_key.as_deref() else {
            warn!("Forecast requested but no service key is configured");
            return InvocationResult::failure(ToolFailure::new(MISSING_KEY_MESSAGE));
        };

        let url = match self.request_url(service_key, params) {
            Ok(url) => url,
            Err(e) => {
                error!("Failed to encode forecast query: {}", e);
                return InvocationResult::failure(
                    ToolFailure::new(REQUEST_FAILED_MESSAGE).with_details(e.to_string()),
                );
            }
        };

        info!("Requesting tourism forecast");
        let response = match self.client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Forecast request failed: {}", e);
                return InvocationResult::failure(
                    ToolFailure::new(REQUEST_FAILED_MESSAGE).with_details(e.to_string()),
                );
            }
        };

        let status = response.status();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => {
                error!("Failed to read forecast response body: {}", e);
                return InvocationResult::failure(
                    ToolFailure::new(REQUEST_FAILED_MESSAGE).with_details(e.to_string()),
                );
            }
        };

        classify_response(status.as_u16(), body)
    }
}

/// Map an upstream status and body to a tool result.
pub fn classify_response(status: u16, body: String) -> InvocationResult {
    if status != 200 {
        warn!("Forecast API returned HTTP {}", status);
        return InvocationResult::failure(
            ToolFailure::new(format!("API 호출 실패 (HTTP {})", status)).with_details(body),
        );
    }

    match serde_json::from_str::<serde_json::Value>(&body) {
        Ok(value) => InvocationResult::json(value),
        Err(e) => {
            warn!("Forecast API returned a non-JSON body: {}", e);
            InvocationResult::failure(ToolFailure::new(PARSE_FAILED_MESSAGE).with_raw(body))
        }
    }
}

#[async_trait]
impl ToolDefinition for TourForecastTool {
    const NAME: &'static str = "get_tour_weather_forecast";
    const DESCRIPTION: &'static str = "Look up the village forecast for a regional tourism course \
         from the public data portal. Takes a date (YYYYMMDD), an hour (0-23) and a course ID, \
         and returns the upstream JSON response unchanged.";
    type Params = TourForecastParams;

    async fn call(&self, params: TourForecastParams) -> InvocationResult {
        self.fetch(&params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const FORECAST_PATH: &str = "/getTourStnVilageFcst1";

    fn params() -> TourForecastParams {
        TourForecastParams {
            current_date: "20240101".to_string(),
            hour: 9,
            course_id: 12,
        }
    }

    fn tool_for(server: &MockServer) -> TourForecastTool {
        TourForecastTool::new(ForecastConfig {
            base_url: format!("{}{}", server.uri(), FORECAST_PATH),
            service_key: Some("test-key".to_string()),
        })
    }

    #[test]
    fn test_params_schema_validation() {
        let ok = serde_json::json!({ "current_date": "20240101", "hour": 3, "course_id": 1 });
        assert!(serde_json::from_value::<TourForecastParams>(ok).is_ok());

        let bad = serde_json::json!({ "current_date": "20240101", "hour": "three", "course_id": 1 });
        assert!(serde_json::from_value::<TourForecastParams>(bad).is_err());
    }

    #[test]
    fn test_request_url_encodes_key_once() {
        let tool = TourForecastTool::new(ForecastConfig {
            base_url: "https://example.test/fcst".to_string(),
            service_key: None,
        });
        let url = tool.request_url("a+b/c=", &params()).unwrap();
        assert_eq!(
            url,
            "https://example.test/fcst?ServiceKey=a%2Bb%2Fc%3D&pageNo=1&numOfRows=10\
             &dataType=JSON&CURRENT_DATE=20240101&HOUR=9&COURSE_ID=12"
        );
    }

    #[test]
    fn test_classify_response() {
        assert_eq!(
            classify_response(200, r#"{"a":1}"#.to_string()),
            InvocationResult::json(serde_json::json!({ "a": 1 }))
        );

        match classify_response(404, "missing".to_string()) {
            InvocationResult::Failure(f) => {
                assert!(f.error.contains("404"));
                assert_eq!(f.details.as_deref(), Some("missing"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_success_passes_json_through() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .and(query_param("ServiceKey", "test-key"))
            .and(query_param("pageNo", "1"))
            .and(query_param("numOfRows", "10"))
            .and(query_param("dataType", "JSON"))
            .and(query_param("CURRENT_DATE", "20240101"))
            .and(query_param("HOUR", "9"))
            .and(query_param("COURSE_ID", "12"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"a":1}"#))
            .expect(1)
            .mount(&server)
            .await;

        let result = tool_for(&server).call(params()).await;
        assert_eq!(result, InvocationResult::json(serde_json::json!({ "a": 1 })));
    }

    #[tokio::test]
    async fn test_non_200_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("server error"))
            .expect(1)
            .mount(&server)
            .await;

        match tool_for(&server).call(params()).await {
            InvocationResult::Failure(f) => {
                assert!(f.error.contains("500"));
                assert_eq!(f.details.as_deref(), Some("server error"));
                assert!(f.raw.is_none());
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unparseable_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(FORECAST_PATH))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        match tool_for(&server).call(params()).await {
            InvocationResult::Failure(f) => {
                assert_eq!(f.error, PARSE_FAILED_MESSAGE);
                assert_eq!(f.raw.as_deref(), Some("<html>"));
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_missing_key_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let tool = TourForecastTool::new(ForecastConfig {
            base_url: server.uri(),
            service_key: None,
        });
        match tool.call(params()).await {
            InvocationResult::Failure(f) => assert_eq!(f.error, MISSING_KEY_MESSAGE),
            other => panic!("Expected failure, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_upstream() {
        let tool = TourForecastTool::new(ForecastConfig {
            base_url: "http://127.0.0.1:1/fcst".to_string(),
            service_key: Some("k".to_string()),
        });
        match tool.call(params()).await {
            InvocationResult::Failure(f) => {
                assert_eq!(f.error, REQUEST_FAILED_MESSAGE);
                assert!(f.details.is_some());
            }
            other => panic!("Expected failure, got {:?}", other),
        }
    }
}
