use http::header::AUTHORIZATION;
use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::BLOG_API_BASE_URL;
use crate::gateway::errors::GatewayError;

/// HTTP gateway to the blog backend
///
/// Holds a connection-pooled client and the base address; every operation
/// takes a relative endpoint path and an optional credential token. The token
/// is sent as the raw `Authorization` header value (no `Bearer ` prefix,
/// which is what the backend expects) and is never attached when absent or
/// empty.
#[derive(Debug, Clone)]
pub struct Gateway {
    client: reqwest::Client,
    base_url: Url,
}

impl Gateway {
    pub fn new(base_url: &str) -> Result<Self, GatewayError> {
        let base_url =
            Url::parse(base_url).map_err(|e| GatewayError::BadRequestUrl(e.to_string()))?;
        Ok(Self {
            client: build_client(),
            base_url,
        })
    }

    /// Build a gateway against the address in `BLOG_API_BASE_URL`
    pub fn from_env() -> Result<Self, GatewayError> {
        Self::new(&BLOG_API_BASE_URL)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        token: Option<&str>,
    ) -> Result<T, GatewayError> {
        let url = self.endpoint(path)?;
        tracing::debug!("GET {}", url);
        let request = authorize(self.client.get(url), token);
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        decode_body(response).await
    }

    pub async fn post<B, T>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("POST {}", url);
        let request = authorize(self.client.post(url), token).json(body);
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        decode_body(response).await
    }

    pub async fn put<B, T>(
        &self,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        tracing::debug!("PUT {}", url);
        let request = authorize(self.client.put(url), token).json(body);
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        decode_body(response).await
    }

    pub async fn delete(&self, path: &str, token: Option<&str>) -> Result<(), GatewayError> {
        let url = self.endpoint(path)?;
        tracing::debug!("DELETE {}", url);
        let request = authorize(self.client.delete(url), token);
        let response = request
            .send()
            .await
            .map_err(|e| GatewayError::Network(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(GatewayError::from_status(status));
        }
        Ok(())
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::BadRequestUrl(e.to_string()))
    }
}

/// Attach the credential token as the raw `Authorization` value
///
/// An absent or empty token leaves the request untouched; an empty
/// `Authorization` header is never sent.
fn authorize(request: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) if !token.is_empty() => request.header(AUTHORIZATION, token),
        _ => request,
    }
}

async fn decode_body<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, GatewayError> {
    let status = response.status();
    if !status.is_success() {
        tracing::debug!("Backend answered {}", status);
        return Err(GatewayError::from_status(status));
    }

    let response_body = response
        .text()
        .await
        .map_err(|e| GatewayError::Network(e.to_string()))?;
    tracing::debug!("Response body: {:#?}", response_body);

    serde_json::from_str(&response_body)
        .map_err(|e| GatewayError::Decode(format!("Failed to deserialize response body: {e}")))
}

// No request timeout: in-flight requests wait on the transport's default
// behavior.
fn build_client() -> reqwest::Client {
    reqwest::Client::builder()
        .pool_idle_timeout(std::time::Duration::from_secs(90))
        .pool_max_idle_per_host(32)
        .build()
        .expect("Failed to create reqwest client")
}
