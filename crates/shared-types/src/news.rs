use serde::{Deserialize, Serialize};

/// A single article returned by the news search API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub url: String,
    #[serde(default, rename = "urlToImage")]
    pub image_url: Option<String>,
    #[serde(rename = "publishedAt")]
    pub published_at: String,
    pub source: NewsSource,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsSource {
    pub name: String,
}

/// Envelope returned by the article search endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsResponse {
    pub status: String,
    #[serde(rename = "totalResults")]
    pub total_results: i64,
    pub articles: Vec<NewsArticle>,
}

/// Number of pages needed to show `total_results` at `page_size` per page.
pub fn total_pages(total_results: i64, page_size: i64) -> i64 {
    if page_size <= 0 {
        return 1;
    }
    (total_results + page_size - 1) / page_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn deserializes_api_field_names() {
        let json = r#"{
            "status": "ok",
            "totalResults": 42,
            "articles": [{
                "title": "Patrol increased in Adajan",
                "description": null,
                "url": "https://example.com/a",
                "urlToImage": null,
                "publishedAt": "2024-03-20T10:30:00Z",
                "source": { "name": "Surat Times" }
            }]
        }"#;
        let resp: NewsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.total_results, 42);
        assert_eq!(resp.articles[0].source.name, "Surat Times");
        assert_eq!(resp.articles[0].description, None);
    }

    #[test]
    fn total_pages_rounds_up() {
        assert_eq!(total_pages(0, 10), 0);
        assert_eq!(total_pages(1, 10), 1);
        assert_eq!(total_pages(10, 10), 1);
        assert_eq!(total_pages(11, 10), 2);
        assert_eq!(total_pages(42, 10), 5);
    }

    #[test]
    fn total_pages_guards_bad_page_size() {
        assert_eq!(total_pages(42, 0), 1);
    }
}
