use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_category, list_categories};

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_categories).post(create_category))
}
