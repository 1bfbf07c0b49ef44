//! Domain types for qardboard.
//!
//! - Company (fixed directory, display entries, listing output)
//! - Qard (wire types for the remote API, shared UUID validation)

mod company;
mod qard;

pub use company::{CompanyListing, CompanyRecord, DisplayEntry, COMPANY_DIRECTORY};
pub use qard::{is_valid_uuid, CompanyProfile, LegalInfo, RemoteUser};
