use chrono::DateTime;
use dioxus::prelude::*;
use shared_types::NewsArticle;
use shared_ui::{Card, CardContent, CardDescription, CardFooter, CardHeader, CardTitle};

/// Shorten an RFC 3339 publish timestamp to a readable date. Unparseable
/// input is shown as-is.
fn format_published(raw: &str) -> String {
    match DateTime::parse_from_rfc3339(raw) {
        Ok(parsed) => parsed.format("%d %b %Y").to_string(),
        Err(_) => raw.to_string(),
    }
}

/// One article in the news feed. The title links to the source.
#[component]
pub fn ArticleCard(article: NewsArticle) -> Element {
    rsx! {
        Card {
            if let Some(image) = &article.image_url {
                img { class: "article-image", src: "{image}", alt: "" }
            }
            CardHeader {
                CardTitle {
                    a {
                        href: "{article.url}",
                        target: "_blank",
                        rel: "noopener noreferrer",
                        "{article.title}"
                    }
                }
                CardDescription { "{article.source.name}" }
            }
            if let Some(description) = &article.description {
                CardContent {
                    p { "{description}" }
                }
            }
            CardFooter {
                span { class: "article-date", {format_published(&article.published_at)} }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn rfc3339_timestamps_are_shortened() {
        assert_eq!(format_published("2025-03-16T18:30:00Z"), "16 Mar 2025");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_published("yesterday"), "yesterday");
    }
}
