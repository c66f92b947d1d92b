use tracing_subscriber::EnvFilter;

use liftoff_server::router::create_router;
use liftoff_server::server;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let app = create_router();

    if let Err(err) = server::serve(app).await {
        tracing::error!("fatal: {err}");
        std::process::exit(1);
    }
}
