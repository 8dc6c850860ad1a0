mod config;
mod controller;
mod data;
mod error;
mod middleware;
mod model;
mod router;
mod service;
mod startup;
mod state;

use tracing_subscriber::EnvFilter;

use crate::{
    config::Config,
    data::user::UserRepository,
    error::AppError,
    service::bot_api::BotApiClient,
    state::{AppState, RedirectTargets},
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client()?;
    let oauth_client = startup::setup_oauth_client(&config)?;

    let bot_api = BotApiClient::new(
        http_client.clone(),
        config.bot_api_url.clone(),
        config.bot_api_key.clone(),
    );

    // First login on a fresh instance becomes admin; point the operator at it.
    if !UserRepository::new(&db).admin_exists().await? {
        tracing::info!(
            "No admin users found; the first login at {}/api/auth/login will be promoted to admin",
            config.app_url
        );
    }

    let state = AppState::new(
        db,
        http_client,
        oauth_client,
        bot_api,
        config.app_url.clone(),
        RedirectTargets {
            invite: config.invite_url.clone(),
            support: config.support_url.clone(),
            docs: config.docs_url.clone(),
        },
    );

    let app = router::router().with_state(state).layer(session);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
