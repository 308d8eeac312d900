use std::time::Duration;

use poem::http::StatusCode;
use poem::{
    Endpoint, EndpointExt, IntoResponse, Route, Server as PoemServer,
    listener::TcpListener,
    middleware::{Cors, Tracing},
};
use poem_openapi::{
    OpenApiService,
    error::{ContentTypeError, ParseRequestPayloadError},
    payload::Json,
};
use tokio::signal;

use crate::api::error::{ErrorResponse, INVALID_PAYLOAD};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

const API_TITLE: &str = "Todo Service API";
const SHUTDOWN_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Server;

impl Server {
    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let app = build_app(container, config.cors, addr.clone());

        tracing::info!("Server running at http://{}", addr);
        tracing::info!("Swagger UI at http://{}/docs", addr);
        tracing::info!("OpenAPI JSON at http://{}/openapi.json", addr);

        PoemServer::new(TcpListener::bind(&addr))
            .run_with_graceful_shutdown(app, shutdown_signal(), Some(SHUTDOWN_TIMEOUT))
            .await?;

        tracing::info!("Server stopped");
        Ok(())
    }
}

/// Assembles the routes, docs and middleware stack.
pub fn build_app(container: DependencyContainer, cors: Cors, addr: String) -> impl Endpoint {
    let api_service = OpenApiService::new(
        (
            container.home_api,
            container.health_api,
            container.auth_api,
            container.todo_api,
        ),
        API_TITLE,
        env!("CARGO_PKG_VERSION"),
    )
    .server(format!("http://{}", addr));
    let ui = api_service.swagger_ui();
    let spec = api_service.spec_endpoint();

    Route::new()
        .nest("/", api_service)
        .nest("/docs", ui)
        .nest("/openapi.json", spec)
        .catch_error(invalid_payload)
        .catch_error(unsupported_content_type)
        .with(cors)
        .with(Tracing)
}

async fn invalid_payload(err: ParseRequestPayloadError) -> impl IntoResponse {
    tracing::debug!("Rejected request body: {}", err);
    Json(ErrorResponse::new(INVALID_PAYLOAD)).with_status(StatusCode::BAD_REQUEST)
}

async fn unsupported_content_type(err: ContentTypeError) -> impl IntoResponse {
    tracing::debug!("Rejected request body: {}", err);
    Json(ErrorResponse::new(INVALID_PAYLOAD)).with_status(StatusCode::BAD_REQUEST)
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
