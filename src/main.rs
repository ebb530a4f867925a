use std::sync::Arc;

use anyhow::Context;

use recipe_organizer::config::SkillConfig;
use recipe_organizer::skill::{SkillHandler, SkillRouteState, skill_routes};
use recipe_organizer::store::{LibSqlBackend, RecipeStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = SkillConfig::from_env().context("Invalid configuration")?;

    eprintln!("🍝 Recipe Organizer v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("   Endpoint: http://{}/alexa", config.listen_addr());
    eprintln!("   Database: {}", config.db_path.display());
    match &config.app_id {
        Some(app_id) => eprintln!("   Application: {app_id}"),
        None => eprintln!("   Application: any (RECIPE_ORGANIZER_APP_ID not set)"),
    }

    // ── Database ─────────────────────────────────────────────────────────
    let store: Arc<dyn RecipeStore> = Arc::new(
        LibSqlBackend::new_local(&config.db_path)
            .await
            .with_context(|| format!("Failed to open database at {}", config.db_path.display()))?,
    );

    // ── HTTP ─────────────────────────────────────────────────────────────
    let handler = Arc::new(SkillHandler::new(store, config.app_id.clone()));
    let app = skill_routes(SkillRouteState { handler });

    let listener = tokio::net::TcpListener::bind(config.listen_addr())
        .await
        .with_context(|| format!("Failed to bind {}", config.listen_addr()))?;
    tracing::info!(addr = %config.listen_addr(), "Skill endpoint started");

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
            tracing::info!("Shutting down");
        })
        .await
        .context("Server error")?;

    Ok(())
}
