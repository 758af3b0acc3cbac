use axum::{
    Form, Json,
    extract::State,
    response::{Html, Redirect},
};
use std::sync::Arc;
use tracing::debug;

use super::{ApiResponse, AppState, StatusDto};
use crate::render::{PageContext, render_grid, render_page};
use crate::services::Notification;
use crate::validation::{MovieForm, current_year};

/// `GET /` renders the whole catalog page from the current in-memory state.
pub async fn index(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = state.catalog.snapshot().await;
    let notification = state.notifier.current();

    Html(render_page(&PageContext {
        view: &view,
        status: state.status.current(),
        notification: notification.as_ref(),
        current_year: current_year(),
    }))
}

/// `POST /movies` handles the add-movie form.
///
/// Outcomes are reported through the notifier, so the browser is always sent
/// back to the catalog page.
pub async fn submit_movie(
    State(state): State<Arc<AppState>>,
    Form(form): Form<MovieForm>,
) -> Redirect {
    if let Err(e) = state.catalog.submit(&form).await {
        debug!(error = %e, "Submission not accepted");
    }
    Redirect::to("/")
}

/// `POST /reload`
pub async fn reload(State(state): State<Arc<AppState>>) -> Redirect {
    let outcome = state.catalog.reload().await;
    debug!(?outcome, "Manual reload finished");
    Redirect::to("/")
}

/// `GET /fragments/movies` returns only the grid, for partial refreshes.
pub async fn movies_fragment(State(state): State<Arc<AppState>>) -> Html<String> {
    let view = state.catalog.snapshot().await;
    Html(render_grid(&view))
}

/// `GET /status`
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ApiResponse<StatusDto>> {
    Json(ApiResponse::success(state.status.current().into()))
}

/// `GET /notification`
pub async fn get_notification(
    State(state): State<Arc<AppState>>,
) -> Json<ApiResponse<Option<Notification>>> {
    Json(ApiResponse::success(state.notifier.current()))
}
