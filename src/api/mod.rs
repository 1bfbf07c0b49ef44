//! HTTP routes for qardboard.
//!
//! Route structure:
//! - /companies - Company listing page (HTML)
//! - /health - Health check (public)

mod companies;
pub mod status;

use axum::Router;

use crate::AppState;

/// Build the complete router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(status::routes())
        .merge(companies::routes())
}
