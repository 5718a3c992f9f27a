use contracts::shared::api_error::ApiErrorBody;
use thiserror::Error;

/// Ошибки обращения к Supabase (PostgREST)
#[derive(Debug, Error)]
pub enum SupabaseError {
    /// Сеть, таймаут, TLS, построение запроса
    #[error("{0}")]
    Network(String),

    /// Удалённая сторона ответила не-2xx статусом
    #[error("{}", .body.message)]
    Api { status: u16, body: ApiErrorBody },

    #[error("Invalid response from Supabase: {0}")]
    Decode(String),
}

impl SupabaseError {
    /// Разбор тела ошибки PostgREST; если формат другой, сообщение строится из статуса
    pub fn from_response(status: u16, body: &str) -> Self {
        let body = match serde_json::from_str::<ApiErrorBody>(body) {
            Ok(parsed) if !parsed.message.trim().is_empty() => parsed,
            _ => {
                let raw = body.trim();
                if raw.is_empty() {
                    ApiErrorBody::new(format!("HTTP {}", status))
                } else {
                    ApiErrorBody::new(format!("HTTP {}: {}", status, raw))
                }
            }
        };
        SupabaseError::Api { status, body }
    }

    /// Тело, которое backend отдаёт фронтенду
    pub fn to_body(&self) -> ApiErrorBody {
        match self {
            SupabaseError::Api { body, .. } => body.clone(),
            other => ApiErrorBody::new(other.to_string()),
        }
    }
}

impl From<reqwest::Error> for SupabaseError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            SupabaseError::Decode(e.to_string())
        } else if e.is_timeout() {
            SupabaseError::Network(format!("Request to Supabase timed out: {}", e))
        } else if e.is_connect() {
            SupabaseError::Network(format!("Could not connect to Supabase: {}", e))
        } else {
            SupabaseError::Network(e.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_postgrest_body_is_kept_verbatim() {
        let err = SupabaseError::from_response(
            404,
            r#"{"code":"PGRST202","details":null,"hint":null,"message":"Could not find the function public.search_skus(grp, limit_rows, q, visc) in the schema cache"}"#,
        );
        assert_eq!(
            err.to_string(),
            "Could not find the function public.search_skus(grp, limit_rows, q, visc) in the schema cache"
        );
        assert_eq!(err.to_body().code.as_deref(), Some("PGRST202"));
    }

    #[test]
    fn test_non_json_body_falls_back_to_status() {
        let err = SupabaseError::from_response(503, "upstream unavailable");
        assert_eq!(err.to_string(), "HTTP 503: upstream unavailable");

        let err = SupabaseError::from_response(401, "");
        assert_eq!(err.to_string(), "HTTP 401");
    }

    #[test]
    fn test_empty_message_falls_back_to_status() {
        let err = SupabaseError::from_response(500, r#"{"message":""}"#);
        assert_eq!(err.to_string(), r#"HTTP 500: {"message":""}"#);
    }

    #[test]
    fn test_decode_error_body() {
        let err = SupabaseError::Decode("expected value at line 1".into());
        assert_eq!(
            err.to_body().message,
            "Invalid response from Supabase: expected value at line 1"
        );
    }
}
