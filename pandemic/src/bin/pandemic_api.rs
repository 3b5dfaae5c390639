use std::net::SocketAddr;

use axum::{
    extract::Path,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use serde_json::json;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pandemic::{RunSummary, Scenario, ScenarioRun};

#[derive(Debug, Serialize)]
struct SimulateResponse {
    return_code: i32,
    scenario: String,
    model: &'static str,
    summary: RunSummary,
    trajectory: ScenarioRun,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pandemic=info,pandemic_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(8000);

    let app = Router::new()
        .route("/healthz", get(healthz))
        .route("/simulate", post(simulate))
        .route("/scenarios/:name", get(builtin_scenario));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

async fn healthz() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

async fn simulate(Json(scenario): Json<Scenario>) -> impl IntoResponse {
    // Runs are CPU-bound; keep them off the async workers.
    let join = tokio::task::spawn_blocking(move || simulate_sync(scenario));

    match join.await {
        Ok(Ok(resp)) => (StatusCode::OK, Json(resp)).into_response(),
        Ok(Err((code, body))) => (code, Json(body)).into_response(),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"return_code": 2, "error": format!("join error: {e}")})),
        )
            .into_response(),
    }
}

fn simulate_sync(scenario: Scenario) -> Result<SimulateResponse, (StatusCode, serde_json::Value)> {
    let run = scenario.run().map_err(|e| {
        warn!(error = %e, "rejected scenario");
        (
            StatusCode::BAD_REQUEST,
            json!({"return_code": 1, "parameter": e.parameter(), "error": e.to_string()}),
        )
    })?;

    Ok(SimulateResponse {
        return_code: 0,
        scenario: scenario.name().to_string(),
        model: scenario.model_kind(),
        summary: run.summary(),
        trajectory: run,
    })
}

async fn builtin_scenario(Path(name): Path<String>) -> impl IntoResponse {
    match Scenario::builtin(&name) {
        Some(s) => (StatusCode::OK, Json(json!(s))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(json!({"error": format!("unknown scenario '{name}'")})),
        )
            .into_response(),
    }
}
