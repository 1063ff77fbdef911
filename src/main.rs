use skyairlens::{config, routes, state, store};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::AppConfig::from_env().expect("invalid configuration");
    let port = config.port;

    let store = store::build_store(&config)
        .await
        .expect("store init failed");
    let state = state::AppState::new(config, store);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "skyairlens listening");
    axum::serve(listener, app).await.expect("server failed");
}
