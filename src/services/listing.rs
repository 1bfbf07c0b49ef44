//! Company listing orchestrator.
//!
//! Drives the fixed company directory through the Qard client and builds
//! the display collection for the companies page. Companies whose remote
//! user id cannot be validated are skipped with a warning instead of
//! failing the page.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::models::{is_valid_uuid, CompanyListing, CompanyRecord, DisplayEntry};
use crate::services::QardClient;

/// Shown when the profile fetch came back empty.
pub const CREATED_AT_FALLBACK: &str = "profile unavailable";

/// Shown when the profile carries no legal status.
pub const STATUS_FALLBACK: &str = "not communicated";

/// Link target when the remote user has no redirect URL.
pub const REDIRECT_FALLBACK: &str = "#";

/// Service assembling the company listing.
#[derive(Clone)]
pub struct ListingService {
    qard: Arc<QardClient>,
}

impl ListingService {
    pub fn new(qard: Arc<QardClient>) -> Self {
        Self { qard }
    }

    /// Build the listing for the fixed company directory.
    pub async fn build(&self) -> CompanyListing {
        self.build_for(&CompanyRecord::directory()).await
    }

    /// Build the listing for an explicit set of companies.
    ///
    /// Fully sequential: each company's user creation is followed by its
    /// profile fetch before the next company starts. Entry order matches
    /// the input order, with skipped companies omitted.
    pub async fn build_for(&self, companies: &[CompanyRecord]) -> CompanyListing {
        let mut listing = CompanyListing::default();

        for company in companies {
            let user = self
                .qard
                .create_legal_user(&company.name, &company.siren)
                .await;

            match user {
                Some(user) if is_valid_uuid(&user.id) => {
                    let profile = self
                        .qard
                        .get_company_profile(&user.id)
                        .await
                        .unwrap_or_default();

                    let status = profile
                        .status()
                        .map(String::from)
                        .unwrap_or_else(|| STATUS_FALLBACK.to_string());

                    listing.entries.push(DisplayEntry {
                        name: company.name.clone(),
                        siren: company.siren.clone(),
                        redirect_url: user
                            .redirect_url
                            .unwrap_or_else(|| REDIRECT_FALLBACK.to_string()),
                        user_id: user.id,
                        created_at: profile
                            .creation_date
                            .unwrap_or_else(|| CREATED_AT_FALLBACK.to_string()),
                        status,
                    });
                }
                _ => {
                    warn!(
                        company = %company.name,
                        siren = %company.siren,
                        "Skipping company without a valid user id"
                    );
                    listing.warnings.push(format!(
                        "Invalid user id for {} / {}",
                        company.name, company.siren
                    ));
                }
            }
        }

        debug!(
            entries = listing.entries.len(),
            warnings = listing.warnings.len(),
            "Company listing assembled"
        );

        listing
    }
}
