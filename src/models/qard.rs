//! Wire types for the Qard API.

use std::sync::OnceLock;

use regex::Regex;
use serde::Deserialize;

/// Legal-user record returned by the create-user endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct RemoteUser {
    pub id: String,
    pub redirect_url: Option<String>,
}

/// Best-effort company profile.
///
/// Missing fields degrade to placeholder strings at display time and
/// never fail the pipeline.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CompanyProfile {
    pub creation_date: Option<String>,
    pub legal: Option<LegalInfo>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LegalInfo {
    pub status: Option<String>,
}

impl CompanyProfile {
    /// Legal status, if the profile carries one.
    pub fn status(&self) -> Option<&str> {
        self.legal.as_ref().and_then(|legal| legal.status.as_deref())
    }
}

static UUID_RE: OnceLock<Regex> = OnceLock::new();

/// Check that a string is a canonical v1-v5 UUID.
///
/// Case-insensitive 8-4-4-4-12 hex grouping with the version nibble in
/// 1-5 and the variant nibble in 8, 9, a or b. Shared by the Qard client
/// and the listing orchestrator.
pub fn is_valid_uuid(candidate: &str) -> bool {
    let re = UUID_RE.get_or_init(|| {
        Regex::new(
            r"(?i)^[0-9a-f]{8}-[0-9a-f]{4}-[1-5][0-9a-f]{3}-[89ab][0-9a-f]{3}-[0-9a-f]{12}$",
        )
        .expect("UUID pattern compiles")
    });
    re.is_match(candidate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_canonical_v4_uuid() {
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
    }

    #[test]
    fn test_accepts_uppercase() {
        assert!(is_valid_uuid("550E8400-E29B-41D4-A716-446655440000"));
    }

    #[test]
    fn test_accepts_all_versions_one_to_five() {
        for version in 1..=5 {
            let id = format!("550e8400-e29b-{}1d4-a716-446655440000", version);
            assert!(is_valid_uuid(&id), "version {} should be valid", version);
        }
    }

    #[test]
    fn test_rejects_invalid_version_nibble() {
        assert!(!is_valid_uuid("550e8400-e29b-61d4-a716-446655440000"));
        assert!(!is_valid_uuid("550e8400-e29b-01d4-a716-446655440000"));
    }

    #[test]
    fn test_rejects_invalid_variant_nibble() {
        assert!(!is_valid_uuid("550e8400-e29b-41d4-c716-446655440000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-0716-446655440000"));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(!is_valid_uuid("not-a-uuid"));
        assert!(!is_valid_uuid(""));
        assert!(!is_valid_uuid("550e8400e29b41d4a716446655440000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-44665544000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-4466554400000"));
    }

    #[test]
    fn test_rejects_surrounding_noise() {
        assert!(!is_valid_uuid(" 550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_valid_uuid("550e8400-e29b-41d4-a716-446655440000\n"));
    }

    #[test]
    fn test_profile_status_reads_nested_field() {
        let profile = CompanyProfile {
            creation_date: None,
            legal: Some(LegalInfo {
                status: Some("active".into()),
            }),
        };
        assert_eq!(profile.status(), Some("active"));

        let empty = CompanyProfile::default();
        assert_eq!(empty.status(), None);
    }
}
