use axum::{
    extract::{Query, State as AxumState},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form, Json,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{error, info};
use wheelhouse_types::stats::DEFAULT_BET_AMOUNT;

use crate::{dashboard, playlist, AppState};

/// Simple health response for basic liveness checks.
#[derive(Serialize)]
struct HealthResponse {
    ok: bool,
}

#[derive(Deserialize)]
pub(super) struct DashboardQuery {
    active_tab: Option<String>,
}

/// Form body shared by all four game buttons. Fields arrive as strings so a
/// garbled amount degrades to the default bet instead of a 422.
#[derive(Deserialize)]
pub(super) struct BetForm {
    bet_amount_hidden: Option<String>,
    winner_name: Option<String>,
}

impl BetForm {
    fn bet(&self) -> i64 {
        self.bet_amount_hidden
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .unwrap_or(DEFAULT_BET_AMOUNT)
    }
}

pub(super) async fn health() -> Response {
    Json(HealthResponse { ok: true }).into_response()
}

pub(super) async fn index(
    AxumState(state): AxumState<Arc<AppState>>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let doc = state.load_document().await;
    let songs = state
        .config
        .playlist_path
        .as_deref()
        .map(playlist::load_playlist)
        .unwrap_or_default();
    let active_tab = query.active_tab.as_deref().unwrap_or("wheel");
    Html(dashboard::render(&doc, active_tab, &songs)).into_response()
}

pub(super) async fn wheel_loss(
    AxumState(state): AxumState<Arc<AppState>>,
    Form(form): Form<BetForm>,
) -> Response {
    let bet = form.bet();
    match state.update_document(|doc| doc.record_wheel_loss(bet)).await {
        Ok(doc) => {
            info!(
                bet,
                net_profit = doc.net_profit,
                loss_streak = doc.loss_streak,
                "wheel loss recorded"
            );
            Redirect::to("/").into_response()
        }
        Err(err) => save_failure(err),
    }
}

pub(super) async fn wheel_win(
    AxumState(state): AxumState<Arc<AppState>>,
    Form(form): Form<BetForm>,
) -> Response {
    let bet = form.bet();
    let winner = form.winner_name.clone();
    match state
        .update_document(|doc| doc.record_wheel_win(bet, winner.as_deref()))
        .await
    {
        Ok(doc) => {
            info!(
                bet,
                net_profit = doc.net_profit,
                total_wins = doc.total_wins,
                "wheel win recorded"
            );
            Redirect::to("/").into_response()
        }
        Err(err) => save_failure(err),
    }
}

pub(super) async fn odds_evens_loss(
    AxumState(state): AxumState<Arc<AppState>>,
    Form(form): Form<BetForm>,
) -> Response {
    let bet = form.bet();
    match state
        .update_document(|doc| doc.record_odds_evens_loss(bet))
        .await
    {
        Ok(doc) => {
            info!(bet, net_profit = doc.oe_net_profit, "odds-evens loss recorded");
            Redirect::to("/?active_tab=odds").into_response()
        }
        Err(err) => save_failure(err),
    }
}

pub(super) async fn odds_evens_win(
    AxumState(state): AxumState<Arc<AppState>>,
    Form(form): Form<BetForm>,
) -> Response {
    let bet = form.bet();
    match state
        .update_document(|doc| doc.record_odds_evens_win(bet))
        .await
    {
        Ok(doc) => {
            info!(
                bet,
                net_profit = doc.oe_net_profit,
                total_wins = doc.oe_total_wins,
                "odds-evens win recorded"
            );
            Redirect::to("/?active_tab=odds").into_response()
        }
        Err(err) => save_failure(err),
    }
}

/// The one fault that cannot degrade to defaults: the document could not be
/// written back.
fn save_failure(err: anyhow::Error) -> Response {
    error!(%err, "failed to persist stats document");
    (StatusCode::INTERNAL_SERVER_ERROR, "persistence failure").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Api, ServerConfig};
    use axum::body::Body;
    use axum::http::{header, Request};
    use tower::ServiceExt;

    fn test_state(dir: &tempfile::TempDir) -> Arc<AppState> {
        Arc::new(AppState::new(ServerConfig {
            data_path: dir.path().join("casino_data.json"),
            playlist_path: None,
        }))
    }

    fn form_request(uri: &str, body: &str) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn health_returns_ok() {
        let dir = tempfile::tempdir().unwrap();
        let app = Api::new(test_state(&dir)).router();

        let response = app
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn wheel_loss_mutates_document_and_redirects_home() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = Api::new(state.clone()).router();

        let response = app
            .oneshot(form_request("/lose", "bet_amount_hidden=25000"))
            .await
            .unwrap();

        assert!(response.status().is_redirection());
        assert_eq!(response.headers().get(header::LOCATION).unwrap(), "/");

        let doc = state.load_document().await;
        assert_eq!(doc.net_profit, 25_000);
        assert_eq!(doc.loss_streak, 1);
        assert_eq!(doc.profit_history, vec![0, 25_000]);
    }

    #[tokio::test]
    async fn wheel_win_credits_named_winner() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = Api::new(state.clone()).router();

        let response = app
            .oneshot(form_request(
                "/win",
                "bet_amount_hidden=25000&winner_name=Ann",
            ))
            .await
            .unwrap();
        assert!(response.status().is_redirection());

        let doc = state.load_document().await;
        assert_eq!(doc.net_profit, -200_000);
        assert_eq!(doc.total_wins, 1);
        assert_eq!(doc.leaderboard.get("ann"), Some(&200_000));
    }

    #[tokio::test]
    async fn garbled_bet_falls_back_to_default() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = Api::new(state.clone()).router();

        let response = app
            .oneshot(form_request("/lose", "bet_amount_hidden=lots"))
            .await
            .unwrap();
        assert!(response.status().is_redirection());

        let doc = state.load_document().await;
        assert_eq!(doc.net_profit, DEFAULT_BET_AMOUNT);
    }

    #[tokio::test]
    async fn odds_evens_routes_redirect_to_odds_tab() {
        let dir = tempfile::tempdir().unwrap();
        let state = test_state(&dir);
        let app = Api::new(state.clone()).router();

        let response = app
            .oneshot(form_request("/odd_even_wins", "bet_amount_hidden=10000"))
            .await
            .unwrap();
        assert!(response.status().is_redirection());
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "/?active_tab=odds"
        );

        let doc = state.load_document().await;
        assert_eq!(doc.oe_net_profit, -8_000);
        assert_eq!(doc.oe_total_wins, 1);
    }

    #[tokio::test]
    async fn index_renders_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let app = Api::new(test_state(&dir)).router();

        let response = app
            .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let content_type = response
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
