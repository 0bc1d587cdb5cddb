use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use std::time::Instant;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

use crate::AppState;

mod http;

pub struct Api {
    state: Arc<AppState>,
}

impl Api {
    pub fn new(state: Arc<AppState>) -> Self {
        Self { state }
    }

    pub fn router(&self) -> Router {
        let router = Router::new()
            .route("/", get(http::index))
            .route("/health", get(http::health))
            .route("/lose", post(http::wheel_loss))
            .route("/win", post(http::wheel_win))
            .route("/odd_even_loses", post(http::odds_evens_loss))
            .route("/odd_even_wins", post(http::odds_evens_win));

        let router = router.layer(middleware::from_fn(request_id_middleware));
        let router = router.layer(TraceLayer::new_for_http());

        router.with_state(self.state.clone())
    }
}

async fn request_id_middleware(req: Request, next: Next) -> Response {
    let request_id = req
        .headers()
        .get(header::HeaderName::from_static("x-request-id"))
        .and_then(|value| value.to_str().ok())
        .map(|value| value.to_string())
        .unwrap_or_else(|| Uuid::new_v4().to_string());
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let start = Instant::now();
    let mut response = next.run(req).await;
    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(
            header::HeaderName::from_static("x-request-id"),
            header_value,
        );
    }
    tracing::info!(
        request_id = %request_id,
        method = %method,
        path = %path,
        status = response.status().as_u16(),
        elapsed_ms = start.elapsed().as_millis() as u64,
        "http.request"
    );
    response
}
