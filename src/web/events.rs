use axum::{
    Router,
    extract::State,
    response::sse::{Event, KeepAlive, Sse},
    routing::get,
};
use futures::stream::{self, Stream};
use std::{convert::Infallible, sync::Arc};
use tokio::sync::watch;
use tracing::debug;

use super::{AppState, StatusDto};
use crate::constants::intervals::SSE_KEEP_ALIVE;
use crate::services::{Notification, Reachability};

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/events", get(sse_handler))
}

struct Subscriptions {
    status: watch::Receiver<Reachability>,
    notification: watch::Receiver<Option<Notification>>,
}

/// Streams `status` and `notification` events. The current value of each is
/// sent first so a freshly opened page is in sync.
async fn sse_handler(
    State(state): State<Arc<AppState>>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    let mut subs = Subscriptions {
        status: state.status.subscribe(),
        notification: state.notifier.subscribe(),
    };
    subs.status.mark_changed();
    subs.notification.mark_changed();

    let stream = stream::unfold(subs, |mut subs| async move {
        let event = tokio::select! {
            biased;
            changed = subs.status.changed() => {
                changed.ok()?;
                let dto = StatusDto::from(*subs.status.borrow_and_update());
                status_event(&dto)
            }
            changed = subs.notification.changed() => {
                changed.ok()?;
                let current = subs.notification.borrow_and_update().clone();
                notification_event(current.as_ref())
            }
        };
        Some((Ok(event), subs))
    });

    debug!("Event stream opened");
    Sse::new(stream).keep_alive(KeepAlive::new().interval(SSE_KEEP_ALIVE))
}

fn status_event(dto: &StatusDto) -> Event {
    let json = serde_json::to_string(dto).unwrap_or_default();
    Event::default().event("status").data(json)
}

fn notification_event(notification: Option<&Notification>) -> Event {
    let json = serde_json::to_string(&notification).unwrap_or_default();
    Event::default().event("notification").data(json)
}
