use rusty_media_library::{
    adapters::memory::{
        InMemoryCatalogRepository, InMemoryLoanRepository, InMemoryMemberRepository,
        SequentialIdSource,
    },
    adapters::postgres::{
        PostgresCatalogRepository, PostgresLoanRepository, PostgresMemberRepository,
    },
    api::{handlers::AppState, router::create_router},
    application::lending::ServiceDependencies,
};
use sqlx::Row;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rusty_media_library=debug,tower_http=debug,axum=trace".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Storage backend selection: PostgreSQL stores when DATABASE_URL is set,
    // the in-memory reference adapters otherwise.
    let service_deps = match std::env::var("DATABASE_URL") {
        Ok(database_url) => {
            let pool = sqlx::postgres::PgPoolOptions::new()
                .max_connections(5)
                .connect(&database_url)
                .await
                .expect("Failed to connect to database");

            sqlx::migrate!("./migrations")
                .run(&pool)
                .await
                .expect("Failed to run migrations");

            // Loan ids are not persisted by the id source itself; resume
            // the sequence after the highest id already in the store.
            let next_id: i64 = sqlx::query("SELECT COALESCE(MAX(id), 0) + 1 AS next_id FROM loans")
                .fetch_one(&pool)
                .await
                .expect("Failed to read loan id sequence")
                .get("next_id");

            tracing::info!("Using PostgreSQL stores");

            ServiceDependencies::new(
                Arc::new(PostgresCatalogRepository::new(pool.clone())),
                Arc::new(PostgresMemberRepository::new(pool.clone())),
                Arc::new(PostgresLoanRepository::new(pool)),
                Arc::new(SequentialIdSource::starting_at(next_id)),
            )
        }
        Err(_) => {
            tracing::info!("Using in-memory stores");
            ServiceDependencies::new(
                Arc::new(InMemoryCatalogRepository::new()),
                Arc::new(InMemoryMemberRepository::new()),
                Arc::new(InMemoryLoanRepository::new()),
                Arc::new(SequentialIdSource::new()),
            )
        }
    };

    // Create application state
    let app_state = Arc::new(AppState { service_deps });

    // Create router
    let app = create_router(app_state);

    // Server configuration
    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".into());
    let addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind to address");

    tracing::info!("Server listening on {}", addr);

    // Start server
    axum::serve(listener, app)
        .await
        .expect("Failed to start server");
}
