//! Company listing page.
//!
//! Routes:
//! - GET /companies - Render the fixed company directory as an HTML table

use axum::{extract::State, response::Html, routing::get, Router};

use crate::models::{CompanyListing, DisplayEntry};
use crate::AppState;

/// Build company routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/companies", get(companies_index))
}

/// Company listing page.
///
/// GET /companies
///
/// Always renders, even when every upstream call failed; the worst case
/// is an empty table preceded by one warning banner per company.
#[axum::debug_handler]
async fn companies_index(State(state): State<AppState>) -> Html<String> {
    let listing = state.listing.build().await;
    Html(render(&listing))
}

fn render(listing: &CompanyListing) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n");
    html.push_str("<title>Companies</title>\n");
    html.push_str("<style>\n");
    html.push_str("  body { font-family: system-ui, sans-serif; max-width: 960px; margin: 2rem auto; padding: 0 1rem; color: #1a1a1a; }\n");
    html.push_str("  h1 { border-bottom: 2px solid #333; padding-bottom: 0.5rem; }\n");
    html.push_str("  table { border-collapse: collapse; width: 100%; margin: 1rem 0; }\n");
    html.push_str("  th, td { border: 1px solid #ddd; padding: 0.5rem; text-align: left; }\n");
    html.push_str("  th { background: #f5f5f5; font-weight: 600; }\n");
    html.push_str("  tr:nth-child(even) { background: #fafafa; }\n");
    html.push_str("  .warning { background: #fff3cd; border: 1px solid #ffe69c; border-radius: 4px; padding: 0.75rem 1rem; margin: 0.5rem 0; }\n");
    html.push_str("  .empty { color: #666; }\n");
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<h1>Companies</h1>\n");

    for warning in &listing.warnings {
        html.push_str(&format!(
            "<div class=\"warning\">{}</div>\n",
            escape_html(warning)
        ));
    }

    if listing.entries.is_empty() {
        html.push_str("<p class=\"empty\">No companies to display.</p>\n");
    } else {
        html.push_str("<table>\n<thead><tr><th>Name</th><th>SIREN</th><th>User ID</th><th>Link</th><th>Created</th><th>Status</th></tr></thead>\n<tbody>\n");
        for entry in &listing.entries {
            write_row(&mut html, entry);
        }
        html.push_str("</tbody></table>\n");
    }

    html.push_str("</body>\n</html>\n");

    html
}

fn write_row(html: &mut String, entry: &DisplayEntry) {
    html.push_str(&format!(
        "<tr><td>{}</td><td>{}</td><td>{}</td><td><a href=\"{}\">open</a></td><td>{}</td><td>{}</td></tr>\n",
        escape_html(&entry.name),
        escape_html(&entry.siren),
        escape_html(&entry.user_id),
        escape_html(&entry.redirect_url),
        escape_html(&entry.created_at),
        escape_html(&entry.status),
    ));
}

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> DisplayEntry {
        DisplayEntry {
            name: "QARD.".into(),
            siren: "834816985".into(),
            user_id: "550e8400-e29b-41d4-a716-446655440000".into(),
            redirect_url: "#".into(),
            created_at: "2018-01-01".into(),
            status: "active".into(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<b>"A & B"</b>"#),
            "&lt;b&gt;&quot;A &amp; B&quot;&lt;/b&gt;"
        );
    }

    #[test]
    fn test_render_lists_entries_in_order() {
        let mut second = entry();
        second.name = "ARIA".into();
        let listing = CompanyListing {
            entries: vec![entry(), second],
            warnings: vec![],
        };

        let html = render(&listing);
        let qard = html.find("QARD.").expect("first row present");
        let aria = html.find("ARIA").expect("second row present");
        assert!(qard < aria);
        assert!(!html.contains("class=\"warning\""));
    }

    #[test]
    fn test_render_escapes_remote_fields() {
        let mut poisoned = entry();
        poisoned.status = "<script>alert(1)</script>".into();
        let listing = CompanyListing {
            entries: vec![poisoned],
            warnings: vec![],
        };

        let html = render(&listing);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn test_render_empty_listing_shows_warnings() {
        let listing = CompanyListing {
            entries: vec![],
            warnings: vec!["Invalid user id for QARD. / 834816985".into()],
        };

        let html = render(&listing);
        assert!(html.contains("class=\"warning\""));
        assert!(html.contains("Invalid user id for QARD. / 834816985"));
        assert!(html.contains("No companies to display."));
    }
}
