//! Listshop backend entry point.

use std::sync::Arc;
use std::time::Duration;

use axum::http::HeaderValue;
use axum::{middleware, routing::get, Router};
use sqlx::postgres::PgPoolOptions;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use listshop::adapters::auth::{GoTrueAuthGateway, GoTrueConfig, JwtSessionResolver};
use listshop::adapters::http::{
    access_guard, recovery_routes, share_admin_routes, shared_list_routes, AccessGuardState,
    RecoveryHandlers, ShareAdminHandlers, SharedListHandlers,
};
use listshop::adapters::postgres::{PostgresListReader, PostgresShareRepository};
use listshop::application::handlers::{
    CreateShareHandler, DeleteShareHandler, ListSharesHandler, ResetPasswordHandler,
    ResolveShareHandler, SubmitPasswordHandler,
};
use listshop::config::AppConfig;
use listshop::domain::access::RoutePolicy;
use listshop::ports::{AuthGateway, ListReader, SessionResolver, ShareRepository};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.server.log_level)),
        )
        .init();

    tracing::info!(environment = ?config.server.environment, "starting listshop backend");

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .idle_timeout(config.database.idle_timeout())
        .connect(&config.database.url)
        .await?;

    // Ports
    let resolver: Arc<dyn SessionResolver> = Arc::new(JwtSessionResolver::new(
        &config.auth.jwt_secret,
        &config.auth.jwt_audience,
    ));
    let gateway: Arc<dyn AuthGateway> = Arc::new(GoTrueAuthGateway::new(GoTrueConfig::new(
        config.auth.provider_url.clone(),
        config.auth.anon_key.clone(),
    )));
    let shares: Arc<dyn ShareRepository> = Arc::new(PostgresShareRepository::new(pool.clone()));
    let lists: Arc<dyn ListReader> = Arc::new(PostgresListReader::new(pool));

    // Application handlers
    let reset_handler = Arc::new(ResetPasswordHandler::new(gateway));
    let resolve_handler = Arc::new(ResolveShareHandler::new(shares.clone(), lists.clone()));
    let submit_handler = Arc::new(SubmitPasswordHandler::new(shares.clone(), lists.clone()));
    let create_handler = Arc::new(CreateShareHandler::new(shares.clone(), lists.clone()));
    let list_handler = Arc::new(ListSharesHandler::new(shares.clone(), lists));
    let delete_handler = Arc::new(DeleteShareHandler::new(shares));

    let api = Router::new()
        .route("/health", get(health))
        .merge(recovery_routes(RecoveryHandlers::new(
            reset_handler,
            config.auth.access_token_cookie.clone(),
        )))
        .merge(shared_list_routes(SharedListHandlers::new(
            resolve_handler,
            submit_handler,
        )))
        .merge(share_admin_routes(ShareAdminHandlers::new(
            create_handler,
            list_handler,
            delete_handler,
        )));

    let guard_state = AccessGuardState {
        resolver,
        policy: Arc::new(RoutePolicy::default()),
        access_token_cookie: config.auth.access_token_cookie.clone(),
        recovery_ttl: config.access.recovery_ttl(),
    };

    let app = Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(guard_state, access_guard))
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(cors_layer(&config));

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

async fn health() -> &'static str {
    "ok"
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
