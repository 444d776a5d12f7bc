// SPDX-FileCopyrightText: 2026 Cantoria Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP plumbing for the Sheets v4 API: authenticated client construction,
//! URL building, and status-code mapping.

use std::time::Duration;

use cantoria_core::CantoriaError;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

/// Authenticated low-level client for the Sheets REST API.
#[derive(Debug, Clone)]
pub struct SheetsClient {
    http: reqwest::Client,
    base_url: String,
}

impl SheetsClient {
    /// Builds a client with a bearer token and a 30 second request timeout.
    pub fn new(api_token: &str, base_url: impl Into<String>) -> Result<Self, CantoriaError> {
        let mut headers = HeaderMap::new();
        let bearer = HeaderValue::from_str(&format!("Bearer {api_token}"))
            .map_err(|e| CantoriaError::Config(format!("invalid sheets API token: {e}")))?;
        headers.insert(reqwest::header::AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| CantoriaError::Store {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Builds a URL from path segments appended to the base URL.
    ///
    /// Segments are percent-encoded individually, so worksheet titles with
    /// spaces survive intact.
    pub fn url(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url, CantoriaError> {
        let mut url = Url::parse(&self.base_url)
            .map_err(|e| CantoriaError::Config(format!("invalid sheets base URL: {e}")))?;
        {
            let mut path = url
                .path_segments_mut()
                .map_err(|_| CantoriaError::Config("sheets base URL cannot be a base".into()))?;
            for segment in segments {
                path.push(segment);
            }
        }
        for (key, value) in query {
            url.query_pairs_mut().append_pair(key, value);
        }
        Ok(url)
    }

    /// Performs a request with an optional JSON body, expecting a JSON
    /// response of type `T`.
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<T, CantoriaError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let mut request = self.http.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| CantoriaError::Store {
            message: format!("sheets request failed: {e}"),
            source: Some(Box::new(e)),
        })?;

        let status = response.status();
        debug!(%method, %url, %status, "sheets API response");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CantoriaError::store(format!(
                "sheets API {} ({status}): {body}",
                status_label(status)
            )));
        }

        response.json().await.map_err(|e| CantoriaError::Store {
            message: format!("malformed sheets API response: {e}"),
            source: Some(Box::new(e)),
        })
    }

    /// Performs a request where the response body is irrelevant.
    pub async fn request_unit<B>(
        &self,
        method: Method,
        url: Url,
        body: Option<&B>,
    ) -> Result<(), CantoriaError>
    where
        B: Serialize + ?Sized,
    {
        let _: serde_json::Value = self.request_json(method, url, body).await?;
        Ok(())
    }
}

/// Human label for the API status codes the backend is known to return.
pub fn status_label(status: StatusCode) -> &'static str {
    match status.as_u16() {
        400 => "bad request",
        401 => "unauthorized",
        403 => "forbidden",
        404 => "not found",
        409 => "conflict",
        429 => "rate limited",
        500 => "server error",
        _ => "unexpected status",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_cover_the_documented_codes() {
        let cases = [
            (400, "bad request"),
            (401, "unauthorized"),
            (403, "forbidden"),
            (404, "not found"),
            (409, "conflict"),
            (429, "rate limited"),
            (500, "server error"),
            (502, "unexpected status"),
        ];
        for (code, label) in cases {
            assert_eq!(status_label(StatusCode::from_u16(code).unwrap()), label);
        }
    }

    #[test]
    fn url_encodes_worksheet_titles() {
        let client = SheetsClient::new("tok", "https://example.test/v4/spreadsheets").unwrap();
        let url = client
            .url(&["sheet-1", "values", "'Notification Chat Log'"], &[])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "https://example.test/v4/spreadsheets/sheet-1/values/'Notification%20Chat%20Log'"
        );
    }
}
