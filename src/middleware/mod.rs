use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::de::DeserializeOwned;

use crate::models::Message;

/// Тело запроса в JSON или в форме (`application/x-www-form-urlencoded`).
///
/// Пустое тело или тело без поддерживаемого Content-Type даёт `T::default()`,
/// то есть "все поля отсутствуют"; дальше это ловит проверка обязательных полей.
#[derive(Debug, Clone)]
pub struct Payload<T>(pub T);

#[derive(Debug)]
pub struct PayloadRejection;

impl IntoResponse for PayloadRejection {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(Message::new("Malformed request body"))).into_response()
    }
}

impl<S, T> FromRequest<S> for Payload<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = PayloadRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_ascii_lowercase())
            .unwrap_or_default();

        let body = Bytes::from_request(req, state).await.map_err(|e| {
            tracing::debug!("Failed to read request body: {:?}", e);
            PayloadRejection
        })?;

        decode(&content_type, &body).map(Payload)
    }
}

fn decode<T: DeserializeOwned + Default>(content_type: &str, body: &[u8]) -> Result<T, PayloadRejection> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }

    if content_type.starts_with("application/x-www-form-urlencoded") {
        serde_urlencoded::from_bytes(body).map_err(|e| {
            tracing::debug!("Malformed form body: {}", e);
            PayloadRejection
        })
    } else if content_type.contains("json") {
        serde_json::from_slice(body).map_err(|e| {
            tracing::debug!("Malformed JSON body: {}", e);
            PayloadRejection
        })
    } else {
        Ok(T::default())
    }
}
