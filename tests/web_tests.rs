use async_trait::async_trait;
use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode, header},
};
use http_body_util::BodyExt;
use marquee::clients::{BackendError, MovieBackend};
use marquee::config::Config;
use marquee::models::{Movie, NewMovie};
use std::sync::{Arc, Mutex};
use tower::ServiceExt;

#[derive(Default)]
struct InMemoryBackend {
    movies: Mutex<Vec<Movie>>,
    posted: Mutex<Vec<NewMovie>>,
}

#[async_trait]
impl MovieBackend for InMemoryBackend {
    async fn list_movies(&self) -> Result<Vec<Movie>, BackendError> {
        Ok(self.movies.lock().unwrap().clone())
    }

    async fn create_movie(&self, movie: &NewMovie) -> Result<Movie, BackendError> {
        self.posted.lock().unwrap().push(movie.clone());
        let mut created = Movie::from(movie.clone());
        let mut movies = self.movies.lock().unwrap();
        created.id = Some(movies.len() as i64 + 1);
        movies.push(created.clone());
        Ok(created)
    }

    async fn probe(&self) -> bool {
        true
    }
}

async fn spawn_app(
    movies: Vec<Movie>,
) -> (Arc<marquee::web::AppState>, Arc<InMemoryBackend>, Router) {
    let backend = Arc::new(InMemoryBackend {
        movies: Mutex::new(movies),
        ..Default::default()
    });
    let state = marquee::web::create_app_state_with_backend(Config::default(), backend.clone());
    state.catalog.reload().await;
    let router = marquee::web::router(state.clone());
    (state, backend, router)
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

fn sample(title: &str, rating: Option<i32>) -> Movie {
    Movie {
        id: Some(1),
        title: title.to_string(),
        year: 1995,
        genre: "Crime".to_string(),
        director: Some("Michael Mann".to_string()),
        description: None,
        rating,
    }
}

#[tokio::test]
async fn test_index_with_empty_catalog() {
    let (_, _, app) = spawn_app(vec![]).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let html = body_string(response).await;
    assert!(html.contains("<span id=\"movie-count\">0 movies</span>"));
    assert!(html.contains("id=\"empty-state\""));
    assert!(html.contains("id=\"movie-form\""));
}

#[tokio::test]
async fn test_index_with_single_movie() {
    let (_, _, app) = spawn_app(vec![sample("Heat", Some(8))]).await;

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    let html = body_string(response).await;
    assert!(html.contains("<span id=\"movie-count\">1 movie</span>"));
    assert!(html.contains("Heat"));
    assert!(html.contains("★★★★☆"));
}

#[tokio::test]
async fn test_submit_valid_form_creates_and_redirects() {
    let (state, backend, app) = spawn_app(vec![]).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/movies")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "title=+Inception+&year=2010&genre=Sci-Fi&director=&description=&rating=9",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers()[header::LOCATION], "/");

    let posted = backend.posted.lock().unwrap().clone();
    assert_eq!(posted.len(), 1);
    assert_eq!(posted[0].title, "Inception");
    assert_eq!(posted[0].rating, Some(9));
    assert_eq!(posted[0].director, None);

    assert_eq!(state.catalog.snapshot().await.movies().len(), 1);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/notification")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["data"]["severity"], "success");
    assert_eq!(
        json["data"]["message"],
        "Movie \"Inception\" added successfully!"
    );
}

#[tokio::test]
async fn test_submit_invalid_year_is_not_forwarded() {
    let (state, backend, app) = spawn_app(vec![]).await;

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/movies")
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("title=X&year=1899&genre=Drama"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert!(backend.posted.lock().unwrap().is_empty());

    let shown = state.notifier.current().unwrap();
    assert!(shown.message.contains("invalid year"));
}

#[tokio::test]
async fn test_status_and_fragment_endpoints() {
    let (state, _, app) = spawn_app(vec![sample("Heat", None)]).await;

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["data"]["state"], "checking");

    state.status.record(true);

    let response = app
        .clone()
        .oneshot(Request::builder().uri("/status").body(Body::empty()).unwrap())
        .await
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&body_string(response).await).unwrap();
    assert_eq!(json["data"]["state"], "online");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/fragments/movies")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let html = body_string(response).await;
    assert!(html.starts_with("<section id=\"movies-grid\""));
    assert!(html.contains("Michael Mann"));
    assert!(!html.contains("movie-rating"));
}

#[tokio::test]
async fn test_reload_picks_up_backend_changes() {
    let (state, backend, app) = spawn_app(vec![]).await;
    backend.movies.lock().unwrap().push(sample("Heat", Some(10)));

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/reload")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(state.catalog.snapshot().await.movies().len(), 1);
}

#[tokio::test]
async fn test_assets_served_and_missing_asset_is_404() {
    let (_, _, app) = spawn_app(vec![]).await;

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/assets/style.css")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()[header::CONTENT_TYPE], "text/css");

    let response = app
        .oneshot(
            Request::builder()
                .uri("/assets/missing.js")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
