use anyhow::Result;
use recipe_core::application::{
    commands::users::AccountSettings,
    ports::{
        notify::AccountNotifier,
        security::{ActivationTokenService, PasswordHasher, TokenManager},
        session_revocation::SessionRevocationStore,
        time::Clock,
        util::SlugGenerator,
    },
    services::{ApplicationDependencies, ApplicationServices, ApplicationSettings},
};
use recipe_core::config::AppConfig;
use recipe_core::infrastructure::{
    database,
    notify::LoggingNotifier,
    repositories::{
        PostgresCategoryRepository, PostgresFavouriteRepository, PostgresRecipeReadRepository,
        PostgresRecipeWriteRepository, PostgresReviewRepository, PostgresSlugLookup,
        PostgresUserRepository,
    },
    security::{
        activation::HmacActivationTokens, password::Argon2PasswordHasher,
        redis_session_store::RedisSessionRevocationStore,
        session_store::InMemorySessionRevocationStore, token::BiscuitTokenManager,
    },
    time::SystemClock,
    util::DefaultSlugGenerator,
};
use recipe_core::presentation::http::{routes::build_router_with_options, state::HttpState};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    if let Err(err) = bootstrap().await {
        tracing::error!(error = %err, "fatal error");
        eprintln!("fatal error: {err}");
        std::process::exit(1);
    }
}

async fn bootstrap() -> Result<()> {
    dotenvy::dotenv().ok();
    init_tracing();

    let config = AppConfig::from_env()?;

    let pool = database::init_pool(config.database_url()).await?;
    database::run_migrations(&pool).await?;
    tracing::info!("database migrations applied");

    let session_revocation_store: Arc<dyn SessionRevocationStore> = match config.redis_url() {
        Some(url) => {
            tracing::info!("using redis session revocation store");
            Arc::new(RedisSessionRevocationStore::from_url(url)?)
        }
        None => {
            tracing::info!("REDIS_URL not set; revoked sessions are kept in memory");
            Arc::new(InMemorySessionRevocationStore::new())
        }
    };

    let password_hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2PasswordHasher::default());
    let token_manager: Arc<dyn TokenManager> = Arc::new(BiscuitTokenManager::new(
        config.biscuit_private_key(),
        config.token_ttl(),
    )?);
    let activation_tokens: Arc<dyn ActivationTokenService> = Arc::new(
        HmacActivationTokens::new(config.activation_secret().as_bytes().to_vec()),
    );
    let notifier: Arc<dyn AccountNotifier> = Arc::new(LoggingNotifier::default());
    let clock: Arc<dyn Clock> = Arc::new(SystemClock::default());
    let slugger: Arc<dyn SlugGenerator> = Arc::new(DefaultSlugGenerator::default());

    let deps = ApplicationDependencies {
        user_repo: Arc::new(PostgresUserRepository::new(pool.clone())),
        category_repo: Arc::new(PostgresCategoryRepository::new(pool.clone())),
        recipe_write_repo: Arc::new(PostgresRecipeWriteRepository::new(pool.clone())),
        recipe_read_repo: Arc::new(PostgresRecipeReadRepository::new(pool.clone())),
        review_repo: Arc::new(PostgresReviewRepository::new(pool.clone())),
        favourite_repo: Arc::new(PostgresFavouriteRepository::new(pool.clone())),
        slug_lookup: Arc::new(PostgresSlugLookup::new(pool.clone())),
        password_hasher,
        token_manager,
        activation_tokens,
        notifier,
        session_revocation_store,
        clock,
        slugger,
    };

    let settings = ApplicationSettings {
        account: AccountSettings {
            public_base_url: config.public_base_url().to_string(),
            activation_redirect_url: config.activation_redirect_url().map(str::to_string),
        },
        slug_max_attempts: config.slug_max_attempts(),
    };

    let state = HttpState::new(Arc::new(ApplicationServices::new(deps, settings)));
    let app = build_router_with_options(
        state,
        config.allowed_origins(),
        config.rate_limit_enabled(),
    );

    let listener = tokio::net::TcpListener::bind(config.listen_addr()).await?;
    let address: SocketAddr = listener.local_addr()?;
    tracing::info!("listening on {address}");

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

fn init_tracing() {
    let env_filter = std::env::var("RUST_LOG")
        .ok()
        .unwrap_or_else(|| "info,tower_http=info,sqlx=warn".to_string());

    let subscriber = tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(env_filter))
        .with(tracing_subscriber::fmt::layer());

    if subscriber.try_init().is_err() {
        tracing::warn!("tracing subscriber already initialised");
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!(error = %err, "failed to install CTRL+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                tracing::error!(error = %err, "failed to install terminate handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {}
        _ = terminate => {}
    }
    tracing::info!("shutdown signal received");
}
