use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{create_athlete, list_athletes};

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(list_athletes).post(create_athlete))
}
