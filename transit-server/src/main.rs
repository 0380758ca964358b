use std::net::SocketAddr;

use transit_server::cache::{CachedStopCatalog, CatalogCacheConfig};
use transit_server::directions::{DirectionsClient, DirectionsConfig};
use transit_server::mbta::{MbtaClient, MbtaConfig};
use transit_server::speech::{SpeechClient, SpeechConfig};
use transit_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "transit_server=info,tower_http=info".into()),
        )
        .init();

    // Get credentials from environment
    let google_key = std::env::var("GOOGLE_DIRECTIONS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: GOOGLE_DIRECTIONS_API_KEY not set. Directions calls will fail.");
        String::new()
    });
    let mbta_key = std::env::var("MBTA_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: MBTA_API_KEY not set. MBTA calls will be rate-limited or fail.");
        String::new()
    });
    let elevenlabs_key = std::env::var("ELEVENLABS_API_KEY").unwrap_or_else(|_| {
        eprintln!("Warning: ELEVENLABS_API_KEY not set. Speech synthesis will fail.");
        String::new()
    });

    // Create upstream clients
    let directions = DirectionsClient::new(DirectionsConfig::new(&google_key))
        .expect("Failed to create Directions client");

    let mbta = MbtaClient::new(MbtaConfig::new(&mbta_key)).expect("Failed to create MBTA client");

    let catalog_client =
        MbtaClient::new(MbtaConfig::new(&mbta_key)).expect("Failed to create MBTA client");
    let catalog = CachedStopCatalog::new(catalog_client, &CatalogCacheConfig::default());

    let speech = SpeechClient::new(SpeechConfig::new(&elevenlabs_key))
        .expect("Failed to create speech client");

    // Build app state and router
    let state = AppState::new(directions, mbta, catalog, speech);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], 5001));
    println!("Transit catchability server listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health                        - Health check");
    println!("  POST /api/directions                - Plan and evaluate transit routes");
    println!("  GET  /api/mbta/stations             - Subway station catalog");
    println!("  GET  /api/mbta/predictions/:stop_id - Arrival predictions");
    println!("  GET  /api/mbta/vehicles             - Live vehicle positions");
    println!("  GET  /api/speak                     - Text-to-speech");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
