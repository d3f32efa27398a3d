//! statusd: a password-protected status flag over HTTP.
//!
//! This is the application entry point. It initializes tracing, loads
//! configuration from a TOML file, resolves the password hash from the
//! environment (failing fast if it is missing or malformed), sets up the
//! Axum router, and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use statusd::auth::PasswordVerifier;
use statusd::config::{self, AppConfig, DEFAULT_CONFIG_PATH, DEFAULT_LOG_FILTER};
use statusd::http::start_server;
use statusd::routes::create_router;
use statusd::state::AppState;
use statusd::templates::init_templates;

/// statusd: a password-protected status flag over HTTP
#[derive(Parser, Debug)]
#[command(name = "statusd", version, about)]
struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = DEFAULT_CONFIG_PATH)]
    config: String,

    /// Log level filter (e.g., "statusd=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,

    /// Read a password from stdin, print its bcrypt hash, and exit
    #[arg(long)]
    hash_password: bool,
}

/// Hash-generation helper for provisioning the credential.
///
/// Reads from stdin rather than argv so the plaintext does not land in shell
/// history or the process table.
fn hash_password_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let mut password = String::new();
    std::io::stdin().read_line(&mut password)?;
    let password = password.trim_end_matches(['\r', '\n']);

    let hash = bcrypt::hash(password, bcrypt::DEFAULT_COST)?;
    println!("{}", hash);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command line arguments
    let args = Args::parse();

    if args.hash_password {
        return hash_password_from_stdin();
    }

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    // Load configuration
    let config = AppConfig::load(&args.config)?;

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if config.logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    tracing::info!("Loaded configuration");

    // Resolve the credential; refuse to start without a usable hash. Log that
    // a credential exists, never the hash itself.
    let verifier = PasswordVerifier::new(config::load_password_hash()?)?;
    tracing::info!("Toggle credential configured");

    // Initialize Tera templates
    let tera = init_templates()?;
    tracing::info!("Initialized templates");

    // Create application state and router
    let state = AppState::new(config.clone(), tera, verifier);
    let app = create_router(state);

    // Start server
    start_server(app, &config).await?;

    Ok(())
}
