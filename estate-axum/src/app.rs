use std::sync::Arc;

use axum::handler::Handler;
use axum::routing::get;
use axum::Router;
use estate_core::EstateConfig;
use tokio::net::{TcpListener, ToSocketAddrs};
use tower::ServiceBuilder;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AxumApp {
    pub config: Arc<EstateConfig>,
    pub router: Router<()>,
}

impl AxumApp {
    pub fn new(config: EstateConfig) -> Self {
        Self {
            config: Arc::new(config),
            router: Router::new(),
        }
    }

    pub fn use_router(mut self, path: &str, router: Router<()>) -> Self {
        self.router = self.router.nest(path, router);
        self
    }

    pub fn use_get<H, T>(mut self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()> + Clone + Send + Sync + 'static,
        T: 'static,
    {
        self.router = self.router.route(path, get(handler));
        self
    }

    pub fn service<H, T>(self, path: &str, handler: H) -> Self
    where
        H: Handler<T, ()> + Clone + Send + Sync + 'static,
        T: 'static,
    {
        self.use_get(path, handler)
    }

    /// Request tracing and `x-request-id` on every response. A client-supplied
    /// id is kept. Call after all routes are mounted.
    pub fn with_request_tracing(mut self) -> Self {
        self.router = self.router.layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id()),
        );
        self
    }

    /// `http.host`:`http.port` from the config, with local defaults.
    pub fn address(&self) -> String {
        let host = self.config.get("http.host").unwrap_or("127.0.0.1");
        let port = self.config.get("http.port").unwrap_or("8080");
        format!("{host}:{port}")
    }

    pub async fn listen<A>(self, addr: A) -> anyhow::Result<()>
    where
        A: ToSocketAddrs,
    {
        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router).await?;
        Ok(())
    }
}

pub fn axum(config: EstateConfig) -> AxumApp {
    AxumApp::new(config)
}
