mod routes;
mod services;
mod state;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let port: u16 = std::env::var("PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()
        .expect("invalid PORT");

    let state = state::AppState::from_env().expect("state init failed");
    tracing::info!(
        resume_paths = ?state.resume.paths(),
        static_dir = %state.static_dir.display(),
        "profile sources configured"
    );

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "slidefolio listening");
    axum::serve(listener, app).await.expect("server failed");
}
