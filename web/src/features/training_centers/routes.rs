use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_training_center, list_training_centers};

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_training_centers).post(create_training_center))
}
