use std::sync::Arc;

use tracing::{error, info};

use postboard::{ensure_admin, AppState, BoardError, Config, Database, WebServer};

const CONFIG_PATH: &str = "config.toml";

#[tokio::main]
async fn main() {
    // Load configuration
    let config = match Config::load_with_env(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = postboard::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        // Fall back to console-only logging
        postboard::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = run(config).await {
        error!("Fatal error: {e}");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> postboard::Result<()> {
    config.validate()?;

    info!("Postboard - bulletin board API");

    let db = Database::open(&config.database.path).await?;
    info!("Database opened at {}", config.database.path);

    if let Some(admin) = &config.admin {
        if ensure_admin(db.pool(), admin)
            .await
            .map_err(BoardError::from)?
        {
            info!(user_id = %admin.user_id, "Administrator account created");
        }
    }

    let state = Arc::new(AppState::from_config(db, &config.web)?);
    let server = WebServer::new(&config.web, state)?;
    info!("API configured on {}", server.addr());

    server.run().await?;
    Ok(())
}
