use axum::{
    http::{header, HeaderValue, Method},
    middleware::{from_fn, from_fn_with_state},
    response::Html,
    routing::{delete, get, post, put},
    Json, Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;

use crate::{handlers, middleware, openapi::ApiDoc};

pub fn build_router(state: Arc<crate::AppState>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(
            state
                .config
                .cors_origin
                .parse::<HeaderValue>()
                .expect("COMPANIO_CORS_ORIGIN must be a valid header value"),
        )
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION, header::ACCEPT])
        .allow_credentials(true);

    // Auth routes
    let auth_routes = Router::new()
        .route("/login", post(handlers::auth_handler::login))
        .route("/register", post(handlers::auth_handler::register))
        .route("/logout", post(handlers::auth_handler::logout))
        .route("/me", get(handlers::auth_handler::get_me));

    // Journal entry routes
    let entry_routes = Router::new()
        .route("/", get(handlers::entries_handler::list_entries))
        .route("/", post(handlers::entries_handler::create_entry))
        .route("/{id}", get(handlers::entries_handler::get_entry))
        .route("/{id}", put(handlers::entries_handler::update_entry))
        .route("/{id}", delete(handlers::entries_handler::delete_entry));

    // Goal routes
    let goal_routes = Router::new()
        .route("/", get(handlers::goals_handler::list_goals))
        .route("/", post(handlers::goals_handler::create_goal))
        .route("/{id}", get(handlers::goals_handler::get_goal))
        .route("/{id}", put(handlers::goals_handler::update_goal))
        .route("/{id}/toggle", post(handlers::goals_handler::toggle_goal))
        .route("/{id}", delete(handlers::goals_handler::delete_goal));

    // Settings routes
    let settings_routes = Router::new()
        .route("/{userId}", get(handlers::settings_handler::get_settings))
        .route("/{userId}", put(handlers::settings_handler::update_settings));

    // Generated content routes
    let content_routes = Router::new()
        .route("/affirmation", get(handlers::content_handler::get_affirmation))
        .route("/prompts", get(handlers::content_handler::get_prompts));

    // Theme routes
    let theme_routes = Router::new()
        .route("/", get(handlers::theme_handler::get_theme))
        .route("/", put(handlers::theme_handler::set_theme))
        .route("/toggle", post(handlers::theme_handler::toggle_theme));

    let mut router = Router::new()
        .route("/health", get(handlers::health_check))
        .route("/metrics", get(handlers::metrics_handler))
        .nest("/api/auth", auth_routes)
        .nest("/api/entries", entry_routes)
        .nest("/api/goals", goal_routes)
        .nest("/api/settings", settings_routes)
        .nest("/api/content", content_routes)
        .nest("/api/theme", theme_routes)
        .route("/api-docs/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .route("/swagger-ui", get(swagger_ui));

    // Debug endpoint is only mounted when a key is configured
    if state.config.debug_key.is_some() {
        router = router.route(
            "/debug",
            get(handlers::debug::debug_handler)
                .route_layer(from_fn_with_state(state.clone(), middleware::require_debug_key)),
        );
    }

    router
        .layer(from_fn(middleware::metrics_middleware))
        .layer(from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn swagger_ui() -> Html<&'static str> {
    Html(r#"
<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Companio API Documentation</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-bundle.js"></script>
    <script src="https://unpkg.com/swagger-ui-dist@5/swagger-ui-standalone-preset.js"></script>
    <script>
        window.onload = () => {
            window.ui = SwaggerUIBundle({
                url: '/api-docs/openapi.json',
                dom_id: '#swagger-ui',
                presets: [
                    SwaggerUIBundle.presets.apis,
                    SwaggerUIStandalonePreset
                ],
                layout: "StandaloneLayout"
            });
        };
    </script>
</body>
</html>
    "#)
}
