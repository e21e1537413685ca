// ============================================================================
// CAMPUSCONNECT DASHBOARD SERVER
// ============================================================================

// - Campus email sign-in gate with session tokens
// - Feed, marketplace, events, services and Q&A areas
// - Search / category / status filtering over in-memory stores
// - Like, save, favorite and register toggles
// - Input validation
// - Structured logging

use campus_connect::{AppState, Config, router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("campus_connect=info,tower_http=info")),
        )
        .with_target(false)
        .compact()
        .init();

    let config = Config::from_env()?;
    let addr = config.bind_addr.clone();
    let seeded = config.seed_demo;

    let state = AppState::new(config);
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;

    info!("Server running on http://{}", addr);
    if seeded {
        info!("Demo data loaded");
    }
    info!("API Endpoints:");
    info!("  GET    /health                          - Health check");
    info!("  POST   /auth/signin                     - Sign in with campus email");
    info!("  GET    /dashboard                       - Tabs and counts (auth)");
    info!("  GET    /profile/me                      - Own profile (auth)");
    info!("  PUT    /profile/me                      - Edit profile (auth)");
    info!("  GET    /{{area}}?q=&category=&status=     - Filtered list (auth)");
    info!("  POST   /{{area}}                          - Create item (auth)");
    info!("  POST   /{{area}}/:id/toggle/:flag         - Toggle flag (auth)");
    info!("  areas: posts, listings, events, services, questions");

    axum::serve(listener, app).await?;

    Ok(())
}
