//! Service layer for qardboard.
//!
//! Contains business logic and external service integrations:
//! - Qard (financial data API client)
//! - Listing (company listing orchestrator)

mod listing;
mod qard;

pub use listing::{ListingService, CREATED_AT_FALLBACK, REDIRECT_FALLBACK, STATUS_FALLBACK};
pub use qard::QardClient;
