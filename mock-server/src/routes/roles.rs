//! `/api/roles` route.

use std::sync::Arc;

use axum::extract::State;
use axum::Json;

use crate::types::Role;
use crate::Dataset;

pub async fn list(State(data): State<Arc<Dataset>>) -> Json<Vec<Role>> {
    Json(data.roles.clone())
}
