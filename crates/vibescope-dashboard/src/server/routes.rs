use crate::state::AppState;
use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::Utc;
use serde::Deserialize;
use vibescope_core::{Error, Sentiment};
use vibescope_engine::{sentiment_breakdown, source_breakdown};
use vibescope_export::{export_filename, ExportFormat};

// ============================================================================
// Health endpoints
// ============================================================================

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "ok" }))
}

// ============================================================================
// Analysis endpoints
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    /// Raw input: a typed text, or the whole content of an uploaded file
    pub text: String,

    /// Treat the input as a file upload: one item per non-blank line
    #[serde(default)]
    pub split_lines: bool,
}

pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    let texts: Vec<String> = if req.split_lines {
        req.text
            .split('\n')
            .filter(|line| !line.trim().is_empty())
            .map(String::from)
            .collect()
    } else {
        vec![req.text]
    };

    match state.analyzer.analyze(&texts).await {
        Ok(results) => {
            state.totals.record_batch(results.len());
            state.replace_results(results.clone());
            Json(serde_json::json!({
                "total": results.len(),
                "results": results,
            }))
            .into_response()
        }
        Err(e) => {
            state.totals.record_failure();
            error_response(e)
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ResultsQuery {
    /// Restrict to one sentiment bucket; "all" or absent means no filter
    pub sentiment: Option<String>,
}

pub async fn get_results(
    State(state): State<AppState>,
    Query(query): Query<ResultsQuery>,
) -> Response {
    let results = state.current_results();

    match query.sentiment.as_deref() {
        None | Some("all") => Json(results).into_response(),
        Some(raw) => match raw.parse::<Sentiment>() {
            Ok(bucket) => {
                let filtered: Vec<_> = results
                    .into_iter()
                    .filter(|result| result.bucket() == bucket)
                    .collect();
                Json(filtered).into_response()
            }
            Err(e) => error_response(e),
        },
    }
}

// ============================================================================
// Statistics endpoints
// ============================================================================

pub async fn sentiment_stats(State(state): State<AppState>) -> impl IntoResponse {
    let results = state.current_results();
    let breakdown = sentiment_breakdown(&results);

    Json(serde_json::json!({
        "total": breakdown.total,
        "positive": breakdown.positive,
        "negative": breakdown.negative,
        "neutral": breakdown.neutral,
        "percentages": {
            "positive": breakdown.percentage(Sentiment::Positive),
            "negative": breakdown.percentage(Sentiment::Negative),
            "neutral": breakdown.percentage(Sentiment::Neutral),
        },
    }))
}

pub async fn source_stats(State(state): State<AppState>) -> impl IntoResponse {
    let results = state.current_results();
    Json(source_breakdown(&results))
}

pub async fn get_totals(State(state): State<AppState>) -> impl IntoResponse {
    Json(state.totals.snapshot())
}

// ============================================================================
// Export endpoints
// ============================================================================

pub async fn export(
    State(state): State<AppState>,
    Path(format): Path<String>,
) -> Response {
    let format: ExportFormat = match format.parse() {
        Ok(format) => format,
        Err(e) => return error_response(e),
    };

    let results = state.current_results();
    let content = match format.encode(&results) {
        Ok(content) => content,
        Err(e) => return error_response(e),
    };

    let filename = export_filename(format, Utc::now().date_naive());
    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(format.mime_type()),
    );
    if let Ok(disposition) =
        HeaderValue::from_str(&format!("attachment; filename=\"{filename}\""))
    {
        headers.insert(header::CONTENT_DISPOSITION, disposition);
    }

    (StatusCode::OK, headers, content).into_response()
}

// ============================================================================
// Error mapping
// ============================================================================

/// Convert an error into a JSON response; the rendering layer never
/// sees an unhandled fault.
fn error_response(e: Error) -> Response {
    let status = match &e {
        Error::Validation(_) => StatusCode::BAD_REQUEST,
        Error::Initialization(_) | Error::Classification(_) => StatusCode::BAD_GATEWAY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(serde_json::json!({ "error": e.to_string() }))).into_response()
}
