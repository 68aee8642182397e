//! HTTP router assembly.

use axum::{
    Router,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::{handlers, store::SharedStore};

/// Build the application router.
///
/// Collection routes answer both with and without the trailing slash.
/// Files under `static_dir` (the dashboard page and its chart script) are served at `/static`.
pub fn router(store: SharedStore, static_dir: &str) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health_check))
        // User routes
        .route(
            "/users/",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route(
            "/users",
            post(handlers::users::create_user).get(handlers::users::list_users),
        )
        .route("/users/{user_id}", get(handlers::users::get_user))
        // Transaction routes
        .route("/transactions/", post(handlers::transactions::create_transaction))
        .route("/transactions", post(handlers::transactions::create_transaction))
        // Dashboard data
        .route("/admin/summary", get(handlers::admin::summary))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(TraceLayer::new_for_http())
        // Share the store with all handlers via State extraction
        .with_state(store)
}

#[cfg(test)]
pub mod test_support {
    use std::sync::Arc;

    use axum::{
        Router,
        body::Body,
        http::{Method, Request, StatusCode},
    };
    use serde_json::Value;
    use tower::ServiceExt;

    use crate::store::MemoryStore;

    /// Router over a fresh in-memory store.
    pub fn test_router() -> Router {
        super::router(Arc::new(MemoryStore::new()), "static")
    }

    /// Send one request and decode the JSON body (`Value::Null` if empty).
    pub async fn send(
        app: Router,
        method: Method,
        uri: &str,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let request = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => request
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => request.body(Body::empty()).unwrap(),
        };

        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);

        (status, json)
    }
}
