//! Company domain types.

use serde::Serialize;

/// Fixed directory of companies shown on the listing page, in display
/// order. Each entry is a (SIREN, name) pair.
pub const COMPANY_DIRECTORY: &[(&str, &str)] = &[
    ("834816985", "QARD."),
    ("839836608", "ARIA"),
    ("852379890", "MANSA GROUP"),
    ("832872436", "ALGOAN"),
    ("813414620", "YELLOAN"),
    ("830256558", "AVANSEO"),
];

/// A company known to the listing, keyed by its SIREN registry number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompanyRecord {
    pub siren: String,
    pub name: String,
}

impl CompanyRecord {
    pub fn new(siren: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            siren: siren.into(),
            name: name.into(),
        }
    }

    /// The fixed company directory, in declaration order.
    pub fn directory() -> Vec<CompanyRecord> {
        COMPANY_DIRECTORY
            .iter()
            .map(|(siren, name)| CompanyRecord::new(*siren, *name))
            .collect()
    }
}

/// One row of the company listing.
///
/// Only built for companies whose remote user id passed UUID validation,
/// so `user_id` is always a syntactically valid UUID.
#[derive(Debug, Clone, Serialize)]
pub struct DisplayEntry {
    pub name: String,
    pub siren: String,
    pub user_id: String,
    pub redirect_url: String,
    pub created_at: String,
    pub status: String,
}

/// Orchestrator output: listing rows plus the transient warnings shown
/// above the table.
#[derive(Debug, Default)]
pub struct CompanyListing {
    pub entries: Vec<DisplayEntry>,
    pub warnings: Vec<String>,
}
