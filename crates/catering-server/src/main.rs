use catering_server::{
    db::{create_tables, init_db, initialize_default_data},
    logging::init_tracing_to_file,
    routes,
    settings::Settings,
};

#[tokio::main]
async fn main() {
    init_tracing_to_file();
    let settings = Settings::load("config/services.toml").unwrap();

    tracing::info!("Initializing database connection...");
    match init_db(settings.surrealdb).await {
        Ok(()) => {
            create_tables().await.unwrap();
            initialize_default_data().await.unwrap();
            tracing::info!("Database initialized successfully");
        }
        Err(e) => {
            tracing::warn!(
                "Database initialization failed: {}. Continuing without database.",
                e
            );
            tracing::warn!("Catalog and order endpoints will not work without a database");
        }
    }

    let router = routes::create_routes();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", settings.http.port))
        .await
        .unwrap();

    tracing::info!("Catering server started on port {}", settings.http.port);
    tracing::info!(
        "OpenAPI document available at: http://localhost:{}/api-docs/openapi.json",
        settings.http.port
    );

    axum::serve(listener, router).await.unwrap();
}
