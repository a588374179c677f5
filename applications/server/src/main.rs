/// Roster Server - user management HTTP service
use clap::{Parser, Subcommand};
use roster_core::{User, UserService};
use roster_server::{api, config::ServerConfig, state::AppState};
use roster_storage::SqliteUserGateway;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
    /// Create a new user
    AddUser {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address (must be unique)
        #[arg(short, long)]
        email: String,
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
                .unwrap_or_else(|_| "roster_server=info,roster_core=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { config } => {
            serve(config).await?;
        }
        Commands::AddUser {
            name,
            email,
            password,
        } => {
            add_user(name, email, password).await?;
        }
        Commands::ListUsers => {
            list_users().await?;
        }
    }

    Ok(())
}

/// Open the database and wire the user service onto it
async fn connect(config: &ServerConfig) -> anyhow::Result<UserService<SqliteUserGateway>> {
    let pool = roster_storage::create_pool(&config.storage.database_url).await?;
    roster_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    Ok(UserService::new(SqliteUserGateway::new(pool)))
}

async fn serve(config_path: Option<PathBuf>) -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::load_from(config_path.as_deref())?;
    config.validate()?;

    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let users = Arc::new(connect(&config).await?);
    let app = api::router(AppState::new(users));

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn add_user(name: String, email: String, password: String) -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;
    let users = connect(&config).await?;

    let created = users
        .create_with_password(User::new(name, email, password))
        .await?;

    println!(
        "Created user {} - {} <{}>",
        created.id.unwrap_or_default(),
        created.name,
        created.email
    );

    Ok(())
}

async fn list_users() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;
    let users = connect(&config).await?;

    println!("Users:");
    for user in users.get_all().await? {
        println!(
            "  {} - {} <{}>",
            user.id.unwrap_or_default(),
            user.name,
            user.email
        );
    }

    Ok(())
}
