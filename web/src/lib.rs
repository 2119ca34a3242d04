use axum::Router;
use storage::Database;

pub mod config;
pub mod error;
pub mod features;

/// Build the application router over a connected database.
pub fn app(db: Database) -> Router {
    Router::new()
        .nest("/atletas", features::athletes::routes())
        .nest("/centros", features::training_centers::routes())
        .nest("/categorias", features::categories::routes())
        .with_state(db)
}
