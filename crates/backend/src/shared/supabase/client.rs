use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

use super::SupabaseError;
use crate::shared::config::SupabaseConfig;

/// HTTP клиент PostgREST (`{url}/rest/v1`)
///
/// Создаётся один раз при старте и передаётся в обработчики через состояние.
#[derive(Clone)]
pub struct SupabaseClient {
    http: reqwest::Client,
    rest_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &SupabaseConfig) -> Result<Self, SupabaseError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            http,
            rest_url: format!("{}/rest/v1", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        })
    }

    /// GET /rest/v1/{table}?{query}
    pub async fn select<T: DeserializeOwned>(
        &self,
        table: &str,
        query: &[(&str, &str)],
    ) -> Result<Vec<T>, SupabaseError> {
        let url = format!("{}/{}", self.rest_url, table);
        tracing::debug!("Supabase select: {} {:?}", url, query);

        let request = self.authorized(self.http.get(&url).query(query));
        Self::read_json(request).await
    }

    /// POST /rest/v1/rpc/{function} с именованными параметрами в теле
    pub async fn rpc<P, T>(&self, function: &str, params: &P) -> Result<T, SupabaseError>
    where
        P: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = format!("{}/rpc/{}", self.rest_url, function);
        tracing::debug!("Supabase rpc: {}", url);

        let request = self.authorized(self.http.post(&url).json(params));
        Self::read_json(request).await
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        let request = request.header(ACCEPT, "application/json");
        if self.anon_key.is_empty() {
            return request;
        }
        request
            .header("apikey", self.anon_key.as_str())
            .header(AUTHORIZATION, format!("Bearer {}", self.anon_key))
    }

    async fn read_json<T: DeserializeOwned>(request: RequestBuilder) -> Result<T, SupabaseError> {
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(SupabaseError::from_response(status.as_u16(), &body));
        }

        serde_json::from_str(&body).map_err(|e| SupabaseError::Decode(e.to_string()))
    }
}
