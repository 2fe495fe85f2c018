//! Router builder for the biblio HTTP server.

use axum::Router;
use std::time::Duration;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, SetRequestIdLayer},
    timeout::TimeoutLayer,
    trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};

/// Builder for constructing the main HTTP router.
///
/// Routes and merges are collected first; middleware is applied once in
/// [`build`](RouterBuilder::build) so every registered route sits under the
/// full layer stack regardless of registration order.
pub struct RouterBuilder {
    router: Router,
    tracing: bool,
    cors: bool,
    request_id: bool,
    timeout_ms: Option<u64>,
}

impl RouterBuilder {
    /// Create a new router builder.
    pub fn new() -> Self {
        Self {
            router: Router::new(),
            tracing: false,
            cors: false,
            request_id: false,
            timeout_ms: None,
        }
    }

    /// Add a route to the router.
    pub fn route(mut self, path: &str, route: axum::routing::MethodRouter) -> Self {
        self.router = self.router.route(path, route);
        self
    }

    /// Merge another router's routes at the root.
    pub fn merge(mut self, other: Router) -> Self {
        self.router = self.router.merge(other);
        self
    }

    /// Enable request/response tracing middleware.
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }

    /// Enable permissive CORS middleware.
    pub fn with_cors(mut self) -> Self {
        self.cors = true;
        self
    }

    /// Enable request ID middleware.
    pub fn with_request_id(mut self) -> Self {
        self.request_id = true;
        self
    }

    /// Enable timeout middleware.
    pub fn with_timeout(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    /// Build the final router with the configured middleware stack.
    ///
    /// Layers wrap outward, so the application order here puts request-id
    /// outermost, then tracing, CORS, and timeout closest to the handlers.
    pub fn build(self) -> Router {
        let mut router = self.router;

        if let Some(timeout_ms) = self.timeout_ms {
            router = router.layer(TimeoutLayer::new(Duration::from_millis(timeout_ms)));
        }

        if self.cors {
            router = router.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        if self.tracing {
            router = router.layer(
                TraceLayer::new_for_http()
                    .make_span_with(DefaultMakeSpan::new().include_headers(true))
                    .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                    .on_response(DefaultOnResponse::new().level(tracing::Level::INFO)),
            );
        }

        if self.request_id {
            router = router.layer(SetRequestIdLayer::x_request_id(MakeRequestUuid));
        }

        router
    }
}

impl Default for RouterBuilder {
    fn default() -> Self {
        Self::new()
    }
}
