use crate::errors::handlers::not_found;
use super::shutdown::shutdown_signal;
use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderValue, Method, header};
use axum::Router;
use core_config::server::ServerConfig;
use core_config::{env_optional, env_or_default, ConfigError, FromEnv};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if:
/// - The TCP listener fails to bind to the configured address
/// - The server encounters an error during operation
///
/// # Example
/// ```ignore
/// use axum::Router;
/// use core_config::server::ServerConfig;
/// use axum_helpers::server::create_app;
///
/// let router = Router::new();
/// create_app(router, &ServerConfig::default()).await?;
/// ```
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    info!("Server stopped");
    Ok(())
}

/// Cross-cutting settings applied by [`create_router`]
#[derive(Clone, Debug, Default)]
pub struct RouterOptions {
    /// Directory served read-only under `/api` for paths no route claims
    pub docs_dir: Option<PathBuf>,

    /// Allowed CORS origins; no CORS layer when empty
    pub cors_origins: Vec<HeaderValue>,
}

impl RouterOptions {
    pub fn with_docs_dir(mut self, docs_dir: impl Into<PathBuf>) -> Self {
        self.docs_dir = Some(docs_dir.into());
        self
    }
}

/// Load RouterOptions from environment variables
///
/// - `DOCS_DIR` (default: ./api)
/// - `CORS_ALLOWED_ORIGIN` (optional) - comma-separated origins, e.g.
///   `http://localhost:3000,https://example.com`
impl FromEnv for RouterOptions {
    fn from_env() -> Result<Self, ConfigError> {
        let docs_dir = PathBuf::from(env_or_default("DOCS_DIR", "./api"));

        let cors_origins = match env_optional("CORS_ALLOWED_ORIGIN") {
            Some(origins) => parse_origins(&origins)?,
            None => Vec::new(),
        };

        Ok(Self {
            docs_dir: Some(docs_dir),
            cors_origins,
        })
    }
}

fn parse_origins(origins: &str) -> Result<Vec<HeaderValue>, ConfigError> {
    origins
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<HeaderValue>().map_err(|e| ConfigError::ParseError {
                key: "CORS_ALLOWED_ORIGIN".to_string(),
                details: format!("{}: {}", s, e),
            })
        })
        .collect()
}

fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600))
}

/// Creates the application router around the API routes.
///
/// This function sets up:
/// - Swagger UI at `/swagger-ui`, document at `/api-docs/openapi.json`
/// - API routes nested under `/api`
/// - Static files from `docs_dir` for any `/api/...` path no route matches
/// - 404 `{"error": "Not found"}` fallback outside `/api`
/// - Request tracing and, when origins are configured, CORS
///
/// Health endpoints are merged by the app with `health_router()`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::{create_router, RouterOptions};
///
/// let api_routes = Router::new()
///     .route("/example", get(handler))
///     .with_state(my_state);
///
/// let router = create_router::<ApiDoc>(api_routes, RouterOptions::default());
/// ```
pub fn create_router<T>(apis: Router, options: RouterOptions) -> Router
where
    T: OpenApi + 'static,
{
    let apis = match options.docs_dir {
        Some(dir) => {
            info!(docs_dir = %dir.display(), "Serving static API docs under /api");
            apis.fallback_service(
                ServeDir::new(dir).not_found_service(not_found.into_service()),
            )
        }
        None => apis.fallback(not_found),
    };

    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", T::openapi()))
        .nest("/api", apis)
        .fallback(not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        );

    if options.cors_origins.is_empty() {
        router
    } else {
        info!(origins = options.cors_origins.len(), "CORS enabled");
        router.layer(cors_layer(options.cors_origins))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use axum::routing::get;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    #[derive(OpenApi)]
    #[openapi(info(title = "test"))]
    struct TestDoc;

    fn api() -> Router {
        Router::new().route("/ping", get(|| async { "pong" }))
    }

    async fn get_path(router: Router, uri: &str) -> (StatusCode, String) {
        let response = router
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_api_routes_are_nested() {
        let router = create_router::<TestDoc>(api(), RouterOptions::default());
        let (status, body) = get_path(router, "/api/ping").await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "pong");
    }

    #[tokio::test]
    async fn test_unknown_route_returns_error_envelope() {
        let router = create_router::<TestDoc>(api(), RouterOptions::default());
        let (status, body) = get_path(router, "/nowhere").await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "{\n  \"error\": \"Not found\"\n}");
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let router = create_router::<TestDoc>(api(), RouterOptions::default());
        let (status, body) = get_path(router, "/api-docs/openapi.json").await;

        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("\"title\":\"test\""));
    }

    #[tokio::test]
    async fn test_docs_dir_served_under_api() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("swagger.yaml"), "swagger: '2.0'\n").unwrap();

        let options = RouterOptions::default().with_docs_dir(dir.path());
        let router = create_router::<TestDoc>(api(), options.clone());
        let (status, body) = get_path(router, "/api/swagger.yaml").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "swagger: '2.0'\n");

        let router = create_router::<TestDoc>(api(), options);
        let (status, body) = get_path(router, "/api/missing.yaml").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert!(body.contains("Not found"));
    }

    #[test]
    fn test_router_options_from_env_defaults() {
        temp_env::with_vars(
            [("DOCS_DIR", None::<&str>), ("CORS_ALLOWED_ORIGIN", None::<&str>)],
            || {
                let options = RouterOptions::from_env().unwrap();
                assert_eq!(options.docs_dir, Some(PathBuf::from("./api")));
                assert!(options.cors_origins.is_empty());
            },
        );
    }

    #[test]
    fn test_router_options_parses_origins() {
        temp_env::with_var(
            "CORS_ALLOWED_ORIGIN",
            Some("http://localhost:3000, https://example.com"),
            || {
                let options = RouterOptions::from_env().unwrap();
                assert_eq!(options.cors_origins.len(), 2);
                assert_eq!(options.cors_origins[1], "https://example.com");
            },
        );
    }

    #[test]
    fn test_router_options_rejects_invalid_origin() {
        temp_env::with_var("CORS_ALLOWED_ORIGIN", Some("http://bad\norigin"), || {
            let err = RouterOptions::from_env().unwrap_err();
            assert!(err.to_string().contains("CORS_ALLOWED_ORIGIN"));
        });
    }
}
