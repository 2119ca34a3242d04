use anyhow::Context;
use storage::Database;
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use web::app;
use web::config::Config;
use web::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::athletes::handlers::list_athletes,
        features::athletes::handlers::create_athlete,
        features::training_centers::handlers::list_training_centers,
        features::training_centers::handlers::create_training_center,
        features::categories::handlers::list_categories,
        features::categories::handlers::create_category,
    ),
    components(
        schemas(
            storage::dto::athlete::CreateAthleteRequest,
            storage::dto::athlete::AthleteResponse,
            storage::dto::athlete::AthleteListItem,
            storage::dto::training_center::CreateTrainingCenterRequest,
            storage::dto::training_center::TrainingCenterResponse,
            storage::dto::category::CreateCategoryRequest,
            storage::dto::category::CategoryResponse,
            storage::dto::common::Page<storage::dto::athlete::AthleteListItem>,
            storage::models::Athlete,
            storage::models::TrainingCenter,
            storage::models::Category,
        )
    ),
    tags(
        (name = "athletes", description = "Athlete registration and listing"),
        (name = "training_centers", description = "Training center registration and listing"),
        (name = "categories", description = "Category registration and listing"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting workout registration API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let router = app(db)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(CorsLayer::permissive());

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, router).await?;

    Ok(())
}
