//! The in-memory movie list shown by the frontend, plus the submit flow that
//! feeds it.

use serde::Serialize;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use thiserror::Error;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::clients::backend::{BackendError, MovieBackend};
use crate::constants::messages::{ADD_FAILED, LOAD_FAILED};
use crate::models::Movie;
use crate::services::notifier::Notifier;
use crate::validation::{MovieForm, ValidationError, current_year, validate_submission};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "movies", rename_all = "lowercase")]
pub enum CatalogView {
    Loading,
    Loaded(Vec<Movie>),
    Failed,
}

impl CatalogView {
    #[must_use]
    pub fn movies(&self) -> &[Movie] {
        match self {
            Self::Loaded(movies) => movies,
            Self::Loading | Self::Failed => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
    Applied { count: usize },
    /// A newer reload was dispatched while this one was in flight.
    Stale,
    Failed,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

pub struct Catalog {
    backend: Arc<dyn MovieBackend>,
    notifier: Arc<Notifier>,
    view: RwLock<CatalogView>,
    dispatched: AtomicU64,
}

impl Catalog {
    #[must_use]
    pub fn new(backend: Arc<dyn MovieBackend>, notifier: Arc<Notifier>) -> Self {
        Self {
            backend,
            notifier,
            view: RwLock::new(CatalogView::Loading),
            dispatched: AtomicU64::new(0),
        }
    }

    pub async fn snapshot(&self) -> CatalogView {
        self.view.read().await.clone()
    }

    #[must_use]
    pub fn backend(&self) -> &Arc<dyn MovieBackend> {
        &self.backend
    }

    /// Fetches the list and replaces the view wholesale.
    ///
    /// Each call takes a sequence number; a response is only applied if no
    /// newer reload was dispatched in the meantime.
    pub async fn reload(&self) -> ReloadOutcome {
        let seq = self.dispatched.fetch_add(1, Ordering::SeqCst) + 1;
        {
            let mut view = self.view.write().await;
            if self.dispatched.load(Ordering::SeqCst) != seq {
                debug!(seq, "Reload superseded before dispatch");
                return ReloadOutcome::Stale;
            }
            *view = CatalogView::Loading;
        }

        let result = self.backend.list_movies().await;

        let mut view = self.view.write().await;
        if self.dispatched.load(Ordering::SeqCst) != seq {
            debug!(seq, "Discarding stale movie list response");
            return ReloadOutcome::Stale;
        }

        match result {
            Ok(movies) => {
                let count = movies.len();
                debug!(seq, count, "Movie list loaded");
                *view = CatalogView::Loaded(movies);
                ReloadOutcome::Applied { count }
            }
            Err(e) => {
                warn!(seq, error = %e, "Failed to load movies");
                *view = CatalogView::Failed;
                drop(view);
                self.notifier.error(LOAD_FAILED);
                ReloadOutcome::Failed
            }
        }
    }

    /// Validates the form, creates the movie and refreshes the list.
    ///
    /// Nothing is sent to the backend when validation fails.
    pub async fn submit(&self, form: &MovieForm) -> Result<Movie, SubmitError> {
        let new_movie = match validate_submission(form, current_year()) {
            Ok(movie) => movie,
            Err(e) => {
                warn!(error = %e, "Rejected movie submission");
                self.notifier.error(format!("Cannot add movie: {e}"));
                return Err(e.into());
            }
        };

        match self.backend.create_movie(&new_movie).await {
            Ok(created) => {
                info!(title = %created.title, year = created.year, "Movie added");
                self.notifier
                    .success(format!("Movie \"{}\" added successfully!", created.title));
                self.reload().await;
                Ok(created)
            }
            Err(e) => {
                warn!(error = %e, title = %new_movie.title, "Failed to add movie");
                let message = e.backend_message().unwrap_or(ADD_FAILED).to_string();
                self.notifier.error(message);
                Err(e.into())
            }
        }
    }
}
