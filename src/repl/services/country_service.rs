//! # Country Service
//!
//! REST client for the country and language endpoints.
//!
//! Every operation either yields its decoded payload or a single
//! [`ServiceError::RequestFailed`]. Callers never see reqwest errors.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

use crate::repl::events::Action;
use crate::repl::models::{Country, FormFields, Language};

/// Message used when the service gave nothing usable to show
pub const FALLBACK_ERROR_MESSAGE: &str = "An error occurred";

/// What made a request fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureCause {
    /// The service answered with a non-success status
    Status,
    /// The request never produced a response (connect, timeout, TLS...)
    Transport,
    /// A success response carried a body that could not be decoded
    Decode,
}

/// Failure of a service request
///
/// `message` is what the UI shows: the service's error payload verbatim
/// when it sent one, [`FALLBACK_ERROR_MESSAGE`] otherwise.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    #[error("{message}")]
    RequestFailed {
        status: Option<u16>,
        cause: FailureCause,
        message: String,
        detail: Option<String>,
    },
}

impl ServiceError {
    /// Non-success status, with the error payload the service sent (if any)
    pub fn status(status: u16, payload: Option<String>) -> Self {
        Self::RequestFailed {
            status: Some(status),
            cause: FailureCause::Status,
            message: payload.unwrap_or_else(|| FALLBACK_ERROR_MESSAGE.to_string()),
            detail: None,
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: None,
            cause: FailureCause::Transport,
            message: FALLBACK_ERROR_MESSAGE.to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn decode(status: u16, detail: impl Into<String>) -> Self {
        Self::RequestFailed {
            status: Some(status),
            cause: FailureCause::Decode,
            message: FALLBACK_ERROR_MESSAGE.to_string(),
            detail: Some(detail.into()),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::RequestFailed { message, .. } => message,
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => *status,
        }
    }

    pub fn cause(&self) -> FailureCause {
        match self {
            Self::RequestFailed { cause, .. } => *cause,
        }
    }

    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::RequestFailed { detail, .. } => detail.as_deref(),
        }
    }
}

/// Turn an error response body into the message to display
///
/// A JSON string is unquoted, any other JSON value is shown compactly and a
/// non-JSON body is returned as-is. Blank bodies and JSON `null` give `None`.
pub fn extract_error_payload(body: &str) -> Option<String> {
    if body.trim().is_empty() {
        return None;
    }

    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(serde_json::Value::Null) => None,
        Ok(serde_json::Value::String(text)) if text.is_empty() => None,
        Ok(serde_json::Value::String(text)) => Some(text),
        Ok(value) => Some(value.to_string()),
        Err(_) => Some(body.to_string()),
    }
}

/// One request to the service, with every argument resolved from the form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServiceRequest {
    AddCountry(Country),
    GetCountry { name: String },
    UpdateCountry { name: String, replacement: Country },
    DeleteCountry { name: String },
    GetLanguage { id: String },
    CountriesWithLanguage { language_id: String },
}

impl ServiceRequest {
    /// Build the request an action sends, reading the current field values
    pub fn from_action(action: Action, fields: &FormFields) -> Self {
        match action {
            Action::AddCountry => {
                Self::AddCountry(Country::new(fields.name.clone(), fields.capital.clone()))
            }
            Action::GetCountry => Self::GetCountry {
                name: fields.name.clone(),
            },
            Action::UpdateCountry => Self::UpdateCountry {
                name: fields.name.clone(),
                replacement: Country::new(fields.new_name.clone(), fields.new_capital.clone()),
            },
            Action::DeleteCountry => Self::DeleteCountry {
                name: fields.name.clone(),
            },
            Action::GetLanguage => Self::GetLanguage {
                id: fields.language_id.clone(),
            },
            Action::CountriesWithLanguage => Self::CountriesWithLanguage {
                language_id: fields.language_id.clone(),
            },
        }
    }

    pub fn action(&self) -> Action {
        match self {
            Self::AddCountry(_) => Action::AddCountry,
            Self::GetCountry { .. } => Action::GetCountry,
            Self::UpdateCountry { .. } => Action::UpdateCountry,
            Self::DeleteCountry { .. } => Action::DeleteCountry,
            Self::GetLanguage { .. } => Action::GetLanguage,
            Self::CountriesWithLanguage { .. } => Action::CountriesWithLanguage,
        }
    }
}

/// Decoded payload of a successful request
#[derive(Debug, Clone, PartialEq)]
pub enum ServiceResponse {
    /// Create, update or delete went through; the body is not interpreted
    Done,
    Country(Country),
    Language(Language),
    Countries(Vec<Country>),
}

pub type ServiceOutcome = Result<ServiceResponse, ServiceError>;

/// The country service as seen by the UI
#[async_trait]
pub trait CountryService: Send + Sync {
    async fn add_country(&self, country: &Country) -> Result<(), ServiceError>;

    async fn get_country(&self, name: &str) -> Result<Country, ServiceError>;

    async fn update_country(&self, name: &str, replacement: &Country) -> Result<(), ServiceError>;

    async fn delete_country(&self, name: &str) -> Result<(), ServiceError>;

    async fn get_language(&self, id: &str) -> Result<Language, ServiceError>;

    async fn countries_with_language(&self, language_id: &str)
        -> Result<Vec<Country>, ServiceError>;

    /// Send one request and fold its result into a [`ServiceOutcome`]
    async fn execute(&self, request: &ServiceRequest) -> ServiceOutcome {
        match request {
            ServiceRequest::AddCountry(country) => {
                self.add_country(country).await.map(|_| ServiceResponse::Done)
            }
            ServiceRequest::GetCountry { name } => {
                self.get_country(name).await.map(ServiceResponse::Country)
            }
            ServiceRequest::UpdateCountry { name, replacement } => self
                .update_country(name, replacement)
                .await
                .map(|_| ServiceResponse::Done),
            ServiceRequest::DeleteCountry { name } => {
                self.delete_country(name).await.map(|_| ServiceResponse::Done)
            }
            ServiceRequest::GetLanguage { id } => {
                self.get_language(id).await.map(ServiceResponse::Language)
            }
            ServiceRequest::CountriesWithLanguage { language_id } => self
                .countries_with_language(language_id)
                .await
                .map(ServiceResponse::Countries),
        }
    }
}

/// [`CountryService`] over HTTP
#[derive(Debug, Clone)]
pub struct HttpCountryService {
    client: Client,
    base_url: String,
}

impl HttpCountryService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        tracing::debug!("Created country service client for {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Send a request and return the status and body of a success response
    async fn send(&self, request: RequestBuilder) -> Result<(u16, String), ServiceError> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("Country service request failed: {e}");
            ServiceError::transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ServiceError::transport(e.to_string()))?;

        if status.is_success() {
            tracing::debug!("Country service answered {}", status.as_u16());
            Ok((status.as_u16(), body))
        } else {
            tracing::warn!("Country service answered {}: {}", status.as_u16(), body);
            Err(ServiceError::status(
                status.as_u16(),
                extract_error_payload(&body),
            ))
        }
    }

    async fn send_and_decode<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> Result<T, ServiceError> {
        let (status, body) = self.send(request).await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Could not decode country service response: {e}");
            ServiceError::decode(status, e.to_string())
        })
    }
}

#[async_trait]
impl CountryService for HttpCountryService {
    async fn add_country(&self, country: &Country) -> Result<(), ServiceError> {
        let request = self.client.post(self.url("/countries")).json(country);
        self.send(request).await.map(|_| ())
    }

    async fn get_country(&self, name: &str) -> Result<Country, ServiceError> {
        let request = self
            .client
            .get(self.url("/countries"))
            .query(&[("name", name)]);
        self.send_and_decode(request).await
    }

    async fn update_country(&self, name: &str, replacement: &Country) -> Result<(), ServiceError> {
        let request = self
            .client
            .put(self.url("/countries"))
            .query(&[("name", name)])
            .json(replacement);
        self.send(request).await.map(|_| ())
    }

    async fn delete_country(&self, name: &str) -> Result<(), ServiceError> {
        let request = self
            .client
            .delete(self.url("/countries"))
            .query(&[("name", name)]);
        self.send(request).await.map(|_| ())
    }

    async fn get_language(&self, id: &str) -> Result<Language, ServiceError> {
        let request = self
            .client
            .get(self.url("/languages"))
            .query(&[("id", id)]);
        self.send_and_decode(request).await
    }

    async fn countries_with_language(
        &self,
        language_id: &str,
    ) -> Result<Vec<Country>, ServiceError> {
        let request = self
            .client
            .get(self.url("/countries/with-language"))
            .query(&[("languageId", language_id)]);
        self.send_and_decode(request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::matchers::{body_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn service_for(server: &MockServer) -> HttpCountryService {
        HttpCountryService::new(server.uri(), Duration::from_secs(5)).unwrap()
    }

    #[test]
    fn extract_error_payload_should_unquote_json_strings() {
        assert_eq!(
            extract_error_payload("\"not found\""),
            Some("not found".to_string())
        );
    }

    #[test]
    fn extract_error_payload_should_keep_plain_text_verbatim() {
        assert_eq!(
            extract_error_payload("Country not found"),
            Some("Country not found".to_string())
        );
    }

    #[test]
    fn extract_error_payload_should_render_json_objects_compactly() {
        assert_eq!(
            extract_error_payload(r#"{ "error": "bad" }"#),
            Some(r#"{"error":"bad"}"#.to_string())
        );
    }

    #[test]
    fn extract_error_payload_should_ignore_blank_bodies() {
        assert_eq!(extract_error_payload(""), None);
        assert_eq!(extract_error_payload("   "), None);
        assert_eq!(extract_error_payload("null"), None);
        assert_eq!(extract_error_payload("\"\""), None);
    }

    #[test]
    fn service_error_without_payload_should_use_fallback_message() {
        let error = ServiceError::status(500, None);
        assert_eq!(error.message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error.to_string(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error.status_code(), Some(500));
        assert_eq!(error.cause(), FailureCause::Status);
    }

    #[test]
    fn transport_error_should_keep_detail_out_of_the_message() {
        let error = ServiceError::transport("connection refused");
        assert_eq!(error.message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error.detail(), Some("connection refused"));
        assert_eq!(error.status_code(), None);
    }

    #[test]
    fn request_should_resolve_update_arguments_from_fields() {
        let fields = FormFields {
            name: "Italy".into(),
            new_name: "Italia".into(),
            new_capital: "Roma".into(),
            ..FormFields::default()
        };

        let request = ServiceRequest::from_action(Action::UpdateCountry, &fields);

        assert_eq!(
            request,
            ServiceRequest::UpdateCountry {
                name: "Italy".into(),
                replacement: Country::new("Italia", "Roma"),
            }
        );
        assert_eq!(request.action(), Action::UpdateCountry);
    }

    #[tokio::test]
    async fn add_country_should_post_name_and_capital() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/countries"))
            .and(body_json(json!({"name": "Italy", "capital": "Rome"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "Italy", "capital": "Rome"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let outcome = service_for(&server)
            .execute(&ServiceRequest::AddCountry(Country::new("Italy", "Rome")))
            .await;

        assert_eq!(outcome, Ok(ServiceResponse::Done));
    }

    #[tokio::test]
    async fn get_country_should_decode_the_country() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countries"))
            .and(query_param("name", "Italy"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"name": "Italy", "capital": "Rome"})),
            )
            .mount(&server)
            .await;

        let country = service_for(&server).get_country("Italy").await.unwrap();

        assert_eq!(country, Country::new("Italy", "Rome"));
    }

    #[tokio::test]
    async fn get_country_with_null_capital_should_succeed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countries"))
            .and(query_param("name", "Italy"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"name": "Italy", "capital": null})),
            )
            .mount(&server)
            .await;

        let outcome = service_for(&server)
            .execute(&ServiceRequest::GetCountry {
                name: "Italy".into(),
            })
            .await;

        assert_eq!(
            outcome,
            Ok(ServiceResponse::Country(Country::new("Italy", "")))
        );
    }

    #[tokio::test]
    async fn get_country_should_surface_the_error_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countries"))
            .and(query_param("name", "Atlantis"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!("not found")))
            .mount(&server)
            .await;

        let error = service_for(&server)
            .get_country("Atlantis")
            .await
            .unwrap_err();

        assert_eq!(error.message(), "not found");
        assert_eq!(error.status_code(), Some(404));
    }

    #[tokio::test]
    async fn get_country_should_encode_the_name_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countries"))
            .and(query_param("name", "Bosnia & Herzegovina"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "name": "Bosnia & Herzegovina",
                "capital": "Sarajevo"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let country = service_for(&server)
            .get_country("Bosnia & Herzegovina")
            .await
            .unwrap();

        assert_eq!(country.capital, "Sarajevo");
    }

    #[tokio::test]
    async fn update_country_should_put_the_replacement() {
        let server = MockServer::start().await;
        Mock::given(method("PUT"))
            .and(path("/countries"))
            .and(query_param("name", "Italy"))
            .and(body_json(json!({"name": "Italia", "capital": "Roma"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("updated"))
            .expect(1)
            .mount(&server)
            .await;

        let result = service_for(&server)
            .update_country("Italy", &Country::new("Italia", "Roma"))
            .await;

        assert_eq!(result, Ok(()));
    }

    #[tokio::test]
    async fn delete_country_should_send_the_name_query() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/countries"))
            .and(query_param("name", "Italy"))
            .respond_with(ResponseTemplate::new(200).set_body_string("deleted"))
            .expect(1)
            .mount(&server)
            .await;

        assert_eq!(service_for(&server).delete_country("Italy").await, Ok(()));
    }

    #[tokio::test]
    async fn get_language_should_decode_the_language() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/languages"))
            .and(query_param("id", "4"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"id": 4, "name": "Italian"})),
            )
            .mount(&server)
            .await;

        let language = service_for(&server).get_language("4").await.unwrap();

        assert_eq!(language.name, "Italian");
    }

    #[tokio::test]
    async fn countries_with_language_should_decode_the_list() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/countries/with-language"))
            .and(query_param("languageId", "4"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"name": "Italy", "capital": "Rome"},
                {"name": "San Marino", "capital": "San Marino"}
            ])))
            .mount(&server)
            .await;

        let countries = service_for(&server)
            .countries_with_language("4")
            .await
            .unwrap();

        assert_eq!(countries.len(), 2);
        assert_eq!(countries[1].name, "San Marino");
    }

    #[tokio::test]
    async fn server_error_without_body_should_fall_back() {
        let server = MockServer::start().await;
        Mock::given(method("DELETE"))
            .and(path("/countries"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let error = service_for(&server).delete_country("Italy").await.unwrap_err();

        assert_eq!(error.message(), FALLBACK_ERROR_MESSAGE);
        assert_eq!(error.status_code(), Some(500));
    }

    #[tokio::test]
    async fn undecodable_success_body_should_fail() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/languages"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let error = service_for(&server).get_language("1").await.unwrap_err();

        assert_eq!(error.cause(), FailureCause::Decode);
        assert_eq!(error.message(), FALLBACK_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn unreachable_server_should_be_a_transport_failure() {
        // Nothing listens on the discard port
        let service =
            HttpCountryService::new("http://127.0.0.1:9", Duration::from_secs(2)).unwrap();

        let error = service.get_country("Italy").await.unwrap_err();

        assert_eq!(error.cause(), FailureCause::Transport);
        assert_eq!(error.message(), FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn base_url_should_drop_trailing_slash() {
        let service =
            HttpCountryService::new("http://localhost:8080/", Duration::from_secs(5)).unwrap();
        assert_eq!(service.base_url(), "http://localhost:8080");
    }
}
