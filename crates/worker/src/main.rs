use std::time::Duration;

use tokio_util::sync::CancellationToken;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use hyperion_worker::runner::TaskRunner;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hyperion_worker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = hyperion_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    hyperion_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    // Migrations are owned by the API binary; the worker only assumes the
    // schema is already in place.

    let poll_interval_ms: u64 = std::env::var("WORKER_POLL_INTERVAL_MS")
        .unwrap_or_else(|_| "1000".into())
        .parse()
        .expect("WORKER_POLL_INTERVAL_MS must be a valid u64");

    let runner = TaskRunner::with_poll_interval(pool, Duration::from_millis(poll_interval_ms));

    let cancel = CancellationToken::new();
    let signal_cancel = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::info!("Received SIGINT (Ctrl-C), stopping task runner");
            signal_cancel.cancel();
        }
    });

    runner.run(cancel).await;
    tracing::info!("Worker stopped");
}
