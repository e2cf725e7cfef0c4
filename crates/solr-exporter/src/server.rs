//! Telemetry HTTP server.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, header};
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use prometheus::{Encoder, Registry, TextEncoder};
use tower_http::compression::CompressionLayer;
use tracing::{debug, error, info};

pub(crate) struct ServerConfig {
    pub listen_address: SocketAddr,
    pub telemetry_path: String,
}

struct AppState {
    registry: Registry,
    telemetry_path: String,
}

type SharedState = Arc<AppState>;

fn router(registry: Registry, telemetry_path: &str) -> Router {
    let state = Arc::new(AppState {
        registry,
        telemetry_path: telemetry_path.to_string(),
    });
    let mut app = Router::new()
        .route(telemetry_path, get(handle_metrics))
        .route("/health", get(handle_health));
    if telemetry_path != "/" {
        app = app.route("/", get(handle_landing));
    }
    app.with_state(state).layer(CompressionLayer::new())
}

pub(crate) async fn serve(config: ServerConfig, registry: Registry) -> std::io::Result<()> {
    let app = router(registry, &config.telemetry_path);
    let listener = tokio::net::TcpListener::bind(config.listen_address).await?;
    info!(addr = %config.listen_address, path = %config.telemetry_path, "listening");
    axum::serve(listener, app).await
}

async fn handle_metrics(State(state): State<SharedState>) -> Response {
    // Collectors issue blocking HTTP calls to Solr.
    let registry = state.registry.clone();
    let families = match tokio::task::spawn_blocking(move || registry.gather()).await {
        Ok(families) => families,
        Err(e) => {
            error!(error = %e, "metrics gathering failed");
            return (StatusCode::INTERNAL_SERVER_ERROR, "metrics gathering failed").into_response();
        }
    };

    let mut buf = Vec::new();
    if let Err(e) = TextEncoder::new().encode(&families, &mut buf) {
        error!(error = %e, "failed to encode metrics");
        return (StatusCode::INTERNAL_SERVER_ERROR, "failed to encode metrics").into_response();
    }
    debug!(families = families.len(), bytes = buf.len(), "scrape served");
    ([(header::CONTENT_TYPE, prometheus::TEXT_FORMAT)], buf).into_response()
}

async fn handle_health() -> &'static str {
    "ok"
}

async fn handle_landing(State(state): State<SharedState>) -> Html<String> {
    Html(format!(
        "<html>\n<head><title>Solr Exporter</title></head>\n<body>\n<h1>Solr Exporter</h1>\n\
         <p><a href=\"{path}\">Metrics</a></p>\n<p>version {version}</p>\n</body>\n</html>\n",
        path = state.telemetry_path,
        version = solr_exporter_core::VERSION,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use prometheus::{Gauge, Opts};

    fn state() -> SharedState {
        let registry = Registry::new();
        let gauge = Gauge::with_opts(Opts::new("solr_up", "Was the Solr instance query successful?")).unwrap();
        gauge.set(1.0);
        registry.register(Box::new(gauge)).unwrap();
        Arc::new(AppState {
            registry,
            telemetry_path: "/metrics".to_string(),
        })
    }

    async fn body_text(response: Response) -> String {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_metrics_handler() {
        let response = handle_metrics(State(state())).await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            prometheus::TEXT_FORMAT
        );
        let text = body_text(response).await;
        assert!(text.lines().any(|l| l == "solr_up 1"), "{}", text);
    }

    #[tokio::test]
    async fn test_landing_links_metrics() {
        let Html(page) = handle_landing(State(state())).await;
        assert!(page.contains("href=\"/metrics\""));
    }

    #[tokio::test]
    async fn test_health() {
        assert_eq!(handle_health().await, "ok");
    }
}
