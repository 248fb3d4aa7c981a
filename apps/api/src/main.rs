use axum::extract::DefaultBodyLimit;
use http::{HeaderValue, Method, header};
use mosaic_api::{
    config::Config,
    infrastructure::{
        http::build_http_client,
        repositories::{
            sanity_comment_repository::SanityCommentRepository,
            sanity_post_repository::SanityPostRepository,
        },
        sanity::client::SanityClient,
        verification::hcaptcha::HCaptchaVerifier,
    },
    presentation::http::{routes::create_router, state::AppState},
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::set_header::SetResponseHeaderLayer;

/// Comment bodies are capped at a few kilobytes; anything near this is abuse.
const MAX_BODY_BYTES: usize = 64 * 1024;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Uses RUST_LOG if set, otherwise sensible defaults
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .or_else(|_| {
            tracing_subscriber::EnvFilter::try_new("info,mosaic_api=debug,tower_http=debug")
        })
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = Arc::new(Config::from_env()?);
    let client = build_http_client(Duration::from_secs(config.upstream_timeout_seconds))?;

    let sanity = Arc::new(SanityClient::new(&config, client.clone()));
    let state = AppState {
        config: config.clone(),
        comment_repo: Arc::new(SanityCommentRepository::new(sanity.clone())),
        post_repo: Arc::new(SanityPostRepository::new(sanity)),
        verifier: Arc::new(HCaptchaVerifier::new(&config, client)),
    };

    let cors = build_cors(&config.allowed_origins);

    let app = create_router(state)
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(cors)
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ));

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(
        project = %config.sanity_project_id,
        dataset = %config.sanity_dataset,
        use_cdn = config.sanity_use_cdn,
        "comments api listening on {}",
        addr
    );
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

/// Explicit origins when configured. Without any, debug builds allow every
/// origin and release builds allow none.
fn build_cors(allowed_origins: &[String]) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT])
        .max_age(Duration::from_secs(3600));

    let origins: Vec<HeaderValue> = allowed_origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if !origins.is_empty() {
        base.allow_origin(AllowOrigin::list(origins))
    } else if cfg!(debug_assertions) {
        base.allow_origin(Any)
    } else {
        tracing::warn!("ALLOWED_ORIGINS is empty; cross-origin requests will be refused");
        base.allow_origin(AllowOrigin::list(Vec::<HeaderValue>::new()))
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Ctrl+C received, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("SIGTERM received, initiating graceful shutdown");
        }
    }
}
