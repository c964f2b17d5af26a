use std::sync::Arc;

use arivu_stem::{par_stem_all, stem, stem_all, stem_traced};
use arivu_text::{PARALLEL_STEM_THRESHOLD, Pipeline, tokenize};
use arivu_types::Rewrite;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use serde_json::json;
use thiserror::Error;
use tracing::{error, warn};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub max_tokens: usize,
}

#[derive(Deserialize)]
pub struct StemQuery {
    pub word: String,
    pub trace: Option<bool>,
}

#[derive(Deserialize)]
pub struct StemBatchRequest {
    pub tokens: Vec<String>,
}

#[derive(Deserialize)]
pub struct PreprocessQuery {
    pub text: String,
}

#[derive(Serialize)]
pub struct StemResponse {
    word: String,
    stem: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<Vec<RewriteView>>,
}

#[derive(Serialize)]
struct RewriteView {
    stage: &'static str,
    name: String,
    input: String,
    output: String,
    suffix: Option<&'static str>,
}

impl From<Rewrite> for RewriteView {
    fn from(r: Rewrite) -> Self {
        Self {
            stage: r.stage.label(),
            name: r.stage.to_string(),
            input: r.input,
            output: r.output,
            suffix: r.suffix,
        }
    }
}

#[derive(Serialize)]
pub struct StemBatchResponse {
    stems: Vec<String>,
}

#[derive(Serialize)]
pub struct PreprocessResponse {
    text: String,
    tokens: Vec<String>,
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/v1/stem", get(stem_word).post(stem_batch))
        .route("/v1/preprocess", get(preprocess))
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    "ok"
}

async fn stem_word(
    query: Result<Query<StemQuery>, QueryRejection>,
) -> Result<Json<StemResponse>, ApiError> {
    let Query(params) = query?;
    let response = if params.trace.unwrap_or(false) {
        let trace = stem_traced(&params.word);
        StemResponse {
            stem: trace.output().to_string(),
            trace: Some(trace.rewrites.into_iter().map(RewriteView::from).collect()),
            word: params.word,
        }
    } else {
        StemResponse {
            stem: stem(&params.word),
            trace: None,
            word: params.word,
        }
    };
    Ok(Json(response))
}

async fn stem_batch(
    State(state): State<AppState>,
    body: Result<Json<StemBatchRequest>, JsonRejection>,
) -> Result<Json<StemBatchResponse>, ApiError> {
    let Json(body) = body?;
    let count = body.tokens.len();
    if count > state.max_tokens {
        warn!("rejecting stem batch of {count} tokens");
        return Err(ApiError::too_many_tokens(count, state.max_tokens));
    }

    let stems = if count >= PARALLEL_STEM_THRESHOLD {
        tokio::task::spawn_blocking(move || par_stem_all(&body.tokens))
            .await
            .map_err(|e| {
                error!("stem worker failed: {e}");
                ApiError::Internal
            })?
    } else {
        stem_all(&body.tokens)
    };

    Ok(Json(StemBatchResponse { stems }))
}

async fn preprocess(
    State(state): State<AppState>,
    query: Result<Query<PreprocessQuery>, QueryRejection>,
) -> Result<Json<PreprocessResponse>, ApiError> {
    let Query(params) = query?;
    if params.text.trim().is_empty() {
        return Err(ApiError::bad_request("text is required"));
    }
    let raw = tokenize(&params.text);
    if raw.len() > state.max_tokens {
        warn!("rejecting preprocess text of {} tokens", raw.len());
        return Err(ApiError::too_many_tokens(raw.len(), state.max_tokens));
    }
    // Expansions can still grow the sequence past the cap.
    let tokens = state.pipeline.process_tokens(&raw);
    if tokens.len() > state.max_tokens {
        return Err(ApiError::too_many_tokens(tokens.len(), state.max_tokens));
    }
    Ok(Json(PreprocessResponse {
        text: params.text,
        tokens,
    }))
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("internal server error")]
    Internal,
}

impl ApiError {
    fn bad_request<T: Into<String>>(msg: T) -> Self {
        ApiError::BadRequest(msg.into())
    }

    fn too_many_tokens(count: usize, max: usize) -> Self {
        ApiError::BadRequest(format!("too many tokens: {count} (max {max})"))
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(msg) => {
                let body = Json(ErrorResponse { error: msg });
                (StatusCode::BAD_REQUEST, body).into_response()
            }
            ApiError::Internal => {
                let body = Json(json!({ "error": "internal server error" }));
                (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
            }
        }
    }
}
