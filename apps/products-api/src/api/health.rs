//! Readiness endpoint

use axum::{extract::State, response::Response, routing::get, Router};
use axum_helpers::{run_health_checks, HealthCheckFuture};

use crate::state::{AppState, Store};

/// Pings the selected store; 200 when reachable, 503 otherwise
async fn ready(State(state): State<AppState>) -> Response {
    let check: (&str, HealthCheckFuture) = match &state.store {
        Store::Postgres(db) => (
            "postgres",
            Box::pin(async move {
                database::postgres::check_health(db)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
        Store::Mongo { client, .. } => (
            "mongodb",
            Box::pin(async move {
                database::mongodb::check_health(client)
                    .await
                    .map_err(|e| e.to_string())
            }),
        ),
    };

    run_health_checks(vec![check]).await
}

pub fn router(state: AppState) -> Router {
    Router::new().route("/ready", get(ready)).with_state(state)
}
