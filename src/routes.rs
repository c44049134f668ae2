// src/routes.rs

use axum::{
    Router,
    http::{HeaderValue, Method, header},
    routing::{get, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    handlers::{questions, quiz},
    state::AppState,
};

/// Assembles the main application router.
///
/// * Mounts the quiz API under `/api/quiz`.
/// * Applies global middleware (Trace, CORS).
/// * Injects global state (the in-memory store).
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);

    let question_routes = Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route(
            "/{id}",
            get(questions::get_question).delete(questions::delete_question),
        )
        .route("/category/{category}", get(questions::list_by_category))
        .route(
            "/category/{category}/difficulty/{difficulty}",
            get(questions::list_by_category_and_difficulty),
        );

    let quiz_routes = Router::new()
        .route("/", get(quiz::welcome))
        .nest("/questions", question_routes)
        .route("/categories", get(questions::list_categories))
        .route("/submit", post(quiz::submit_quiz))
        .route("/leaderboard", get(quiz::get_leaderboard))
        .route(
            "/leaderboard/category/{category}",
            get(quiz::get_category_leaderboard),
        )
        .route("/results", get(quiz::list_results))
        .route("/results/user/{email}", get(quiz::get_user_results))
        .route("/stats", get(quiz::get_stats));

    Router::new()
        .nest("/api/quiz", quiz_routes)
        // Global Middleware (applied from outside in)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

fn cors_layer(origin: &str) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE]);

    match origin.parse::<HeaderValue>() {
        Ok(origin) => layer.allow_origin(origin),
        Err(_) => {
            tracing::warn!("Ignoring unparsable CORS origin '{}'", origin);
            layer
        }
    }
}
