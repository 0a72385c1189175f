/// Muse Server - multi-user music library backend
use clap::{Parser, Subcommand};
use muse_search::providers::{AudiusProvider, JamendoProvider, MixcloudProvider, YoutubeProvider};
use muse_search::{SearchAggregator, SearchProvider};
use muse_server::{config::AppConfig, create_router, services::AuthService, state::AppState};
use std::{net::SocketAddr, sync::Arc, time::Duration};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "muse-server")]
#[command(about = "Muse multi-user music library server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Username
        #[arg(short, long)]
        username: String,
        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "muse_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => {
            serve().await?;
        }
        Commands::AddUser { username, password } => {
            add_user(&username, &password).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Muse Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize database
    let pool = muse_storage::create_pool(&config.storage.database_url).await?;
    muse_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Initialize auth service
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    ));
    tracing::info!("Auth service initialized");

    // Initialize search aggregator
    let search = Arc::new(build_aggregator(&config));
    tracing::info!(providers = ?search.provider_names(), "Search aggregator initialized");

    let app_state = AppState::new(pool, Arc::clone(&auth_service), search);
    let app = create_router(app_state, auth_service);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Assemble the provider list from configuration. Providers missing
/// their credentials are skipped, not errors; the aggregator runs fine
/// with any subset, including none.
fn build_aggregator(config: &AppConfig) -> SearchAggregator {
    let http = reqwest::Client::new();
    let mut providers: Vec<Arc<dyn SearchProvider>> = Vec::new();

    match &config.search.youtube_api_key {
        Some(key) if !key.is_empty() => {
            providers.push(Arc::new(YoutubeProvider::new(http.clone(), key.clone())));
        }
        _ => tracing::warn!("YouTube search disabled: no API key configured"),
    }

    match &config.search.jamendo_client_id {
        Some(id) if !id.is_empty() => {
            providers.push(Arc::new(JamendoProvider::new(http.clone(), id.clone())));
        }
        _ => tracing::warn!("Jamendo search disabled: no client id configured"),
    }

    if config.search.mixcloud_enabled {
        providers.push(Arc::new(MixcloudProvider::new(http.clone())));
    }

    if config.search.audius_enabled {
        providers.push(Arc::new(AudiusProvider::new(
            http,
            config.search.audius_app_name.clone(),
        )));
    }

    SearchAggregator::new(providers)
        .with_timeout(Duration::from_secs(config.search.provider_timeout_secs))
}

async fn add_user(username: &str, password: &str) -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let pool = muse_storage::create_pool(&config.storage.database_url).await?;
    muse_storage::run_migrations(&pool).await?;

    let auth_service = AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.jwt_expiration_hours,
        config.auth.jwt_refresh_expiration_days,
    );

    let user = muse_storage::users::create(&pool, username).await?;
    let password_hash = auth_service.hash_password(password)?;
    muse_storage::users::set_password_hash(&pool, user.id, &password_hash).await?;

    println!("Created user {} ({})", user.name, user.id);

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = AppConfig::load()?;
    let pool = muse_storage::create_pool(&config.storage.database_url).await?;
    muse_storage::run_migrations(&pool).await?;

    let users = muse_storage::users::get_all(&pool).await?;

    println!("Users:");
    for user in users {
        println!("  {} - {}", user.id, user.name);
    }

    Ok(())
}
