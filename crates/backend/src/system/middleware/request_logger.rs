use axum::body::{to_bytes, Body};
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;

/// Middleware для логирования HTTP запросов
///
/// Для каждого запроса пишет в tracing: метод, путь, статус,
/// длительность (ms) и размер ответа в байтах.
pub async fn request_logger(req: Request<Body>, next: Next) -> Response {
    let start = std::time::Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;
    let (parts, body) = response.into_parts();

    // Читаем тело ответа, чтобы узнать реальный размер
    let bytes = match to_bytes(body, usize::MAX).await {
        Ok(b) => b,
        Err(e) => {
            tracing::warn!(
                "{} {} -> {} | {}ms | body error: {}",
                method,
                path,
                parts.status.as_u16(),
                start.elapsed().as_millis(),
                e
            );
            return Response::from_parts(parts, Body::default());
        }
    };

    let status = parts.status.as_u16();
    let elapsed = start.elapsed().as_millis();
    if parts.status.is_success() {
        tracing::info!("{} {} -> {} | {}ms | {} B", method, path, status, elapsed, bytes.len());
    } else {
        tracing::warn!("{} {} -> {} | {}ms | {} B", method, path, status, elapsed, bytes.len());
    }

    Response::from_parts(parts, Body::from(bytes))
}
