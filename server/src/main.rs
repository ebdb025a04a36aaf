//! Host binary for the moderation dashboard.
//!
//! SYSTEM CONTEXT
//! ==============
//! This process only renders the application shell and serves the compiled
//! WASM/CSS assets. All moderation data flows between the browser and the
//! external backend API; no domain routes live here.

mod routes;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let app = routes::app().expect("router init failed");

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "modqueue listening");
    axum::serve(listener, app).await.expect("server failed");
}
