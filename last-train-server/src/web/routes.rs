//! HTTP route handlers.

use askama::Template;
use axum::{
    Extension, Form, Json, Router,
    extract::{State, rejection::FormRejection},
    http::{StatusCode, header},
    middleware,
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::debug;

use crate::session::SessionId;

use super::dto::*;
use super::session::session_bootstrap;
use super::state::AppState;
use super::templates::IndexTemplate;

/// Create the application router.
///
/// `static_dir` is the path to the static assets directory. Every
/// route, static files included, sits inside the session middleware so
/// any response can carry the first-contact cookie.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    Router::new()
        .route("/", get(index_page))
        .route("/calculate", post(calculate))
        .route("/stations", get(station_list))
        .route("/health", get(health))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(middleware::from_fn(session_bootstrap))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// Home page: the station picker, and the visitor's pending result if
/// one is stored. Reading the result consumes it, so a reload after
/// this render shows the bare form again.
async fn index_page(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
) -> Result<Html<String>, AppError> {
    let result = state.sessions.bag(&session_id).await.take_calculation();

    let page = IndexTemplate::new(state.catalog.stations(), result);
    let html = page.render().map_err(|e| AppError::Internal {
        message: format!("template error: {e}"),
    })?;

    Ok(Html(html))
}

/// Handle either home-page form.
///
/// Valid submissions store their result in the session; anything else
/// is dropped. Either way the browser is sent back to `/` with a 303,
/// so the result (when there is one) appears after the redirect and a
/// refresh never replays the POST.
async fn calculate(
    State(state): State<AppState>,
    Extension(session_id): Extension<SessionId>,
    form: Result<Form<CalculationForm>, FormRejection>,
) -> Redirect {
    match form {
        Ok(Form(form)) => match form.into_calculation() {
            Some(calculation) => {
                state
                    .sessions
                    .bag(&session_id)
                    .await
                    .store_calculation(calculation);
            }
            None => debug!("dropping calculation submission with no usable fields"),
        },
        Err(rejection) => debug!(error = %rejection, "dropping malformed calculation submission"),
    }

    Redirect::to("/")
}

/// The public station catalog as JSON, for the typeahead script.
///
/// The catalog is fixed for the process lifetime, so clients are told
/// to cache it for an hour.
async fn station_list(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, "public, max-age=3600")],
        Json(state.catalog.stations().to_vec()),
    )
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    Internal { message: String },
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let AppError::Internal { message } = self;
        let status = StatusCode::INTERNAL_SERVER_ERROR;

        tracing::error!(status = %status, error = %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
