//! Listings feed: the wire shape of the query surface and the
//! presentational blocks rendered from it.

use crate::db::models::DbListing;
use serde::{Deserialize, Serialize};

/// One listing as the feed exposes it:
/// `{ id title description url company { name url } }`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Listing {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub url: String,
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Company {
    pub name: String,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ListingsResponse {
    pub listings: Vec<Listing>,
}

impl From<DbListing> for Listing {
    fn from(row: DbListing) -> Self {
        let company = row.company_name.map(|name| Company {
            name,
            url: row.company_url,
        });
        Listing {
            id: row.id,
            title: row.title,
            description: row.description,
            url: row.url,
            company,
        }
    }
}

/// Render the feed as structural HTML blocks: heading-linked title,
/// company line (linked only when the company has a URL), description.
pub fn render_feed(listings: &[Listing]) -> String {
    let mut out = String::new();
    for listing in listings {
        out.push_str("<article>\n");
        out.push_str(&format!(
            "  <h2><a href=\"{}\">{}</a></h2>\n",
            escape(&listing.url),
            escape(&listing.title)
        ));
        if let Some(company) = &listing.company {
            match &company.url {
                Some(url) => out.push_str(&format!(
                    "  <p><a href=\"{}\">{}</a></p>\n",
                    escape(url),
                    escape(&company.name)
                )),
                None => out.push_str(&format!("  <p>{}</p>\n", escape(&company.name))),
            }
        }
        out.push_str(&format!("  <p>{}</p>\n", escape(&listing.description)));
        out.push_str("</article>\n");
    }
    out
}

/// Render a failed feed query; the raw error message is shown verbatim.
pub fn render_error(message: &str) -> String {
    format!(
        "<div>Universe broken...</div>\n<p>{}</p>\n",
        escape(message)
    )
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(company: Option<Company>) -> Listing {
        Listing {
            id: 1,
            title: "Staff Engineer".to_string(),
            description: "Build & ship".to_string(),
            url: "https://example.com/jobs/1".to_string(),
            company,
        }
    }

    #[test]
    fn title_links_to_listing_url() {
        let html = render_feed(&[listing(None)]);
        assert!(html.contains("<h2><a href=\"https://example.com/jobs/1\">Staff Engineer</a></h2>"));
        assert!(html.contains("<p>Build &amp; ship</p>"));
    }

    #[test]
    fn company_with_url_renders_as_link() {
        let html = render_feed(&[listing(Some(Company {
            name: "Acme".to_string(),
            url: Some("https://acme.example".to_string()),
        }))]);
        assert!(html.contains("<p><a href=\"https://acme.example\">Acme</a></p>"));
    }

    #[test]
    fn company_without_url_renders_as_plain_text() {
        let html = render_feed(&[listing(Some(Company {
            name: "Acme".to_string(),
            url: None,
        }))]);
        assert!(html.contains("<p>Acme</p>"));
        assert!(!html.contains("<a href=\"https://acme.example\""));
    }

    #[test]
    fn error_banner_carries_raw_message() {
        let html = render_error("connection refused");
        assert!(html.contains("Universe broken..."));
        assert!(html.contains("<p>connection refused</p>"));
    }

    #[test]
    fn db_row_maps_to_feed_shape() {
        let row = crate::db::models::DbListing {
            id: 7,
            title: "t".to_string(),
            description: "d".to_string(),
            url: "u".to_string(),
            notes: Some("private".to_string()),
            company_name: Some("Acme".to_string()),
            company_url: None,
            user_id: Some(3),
            created_at: chrono::Utc::now(),
        };
        let listing = Listing::from(row);
        assert_eq!(
            listing.company,
            Some(Company {
                name: "Acme".to_string(),
                url: None
            })
        );
        // notes stay private to the persistence layer
        let json = serde_json::to_value(&listing).unwrap();
        assert!(json.get("notes").is_none());
    }
}
