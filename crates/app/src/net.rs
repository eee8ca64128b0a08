//! Outbound HTTP: the news feed and reverse geocoding.

use serde::Deserialize;
use shared_types::{AppError, NewsResponse};

pub const NEWS_ENDPOINT: &str = "https://newsapi.org/v2/everything";
pub const GEOCODE_ENDPOINT: &str = "https://nominatim.openstreetmap.org/reverse";

/// Articles fetched per news page.
pub const PAGE_SIZE: i64 = 10;

/// Baked in at build time; the feed degrades to an error banner when
/// absent.
const NEWS_API_KEY: &str = match option_env!("NEWS_API_KEY") {
    Some(key) => key,
    None => "",
};

/// Compose the article search query. A base clause scopes results to
/// Surat crime and safety coverage; category and free text are AND-ed
/// on top.
pub fn build_query(search: &str, category: &str) -> String {
    let mut query = String::from("(crime OR safety OR police) AND Surat");
    if !category.is_empty() && category != "all" {
        query.push_str(" AND ");
        query.push_str(category);
    }
    let trimmed = search.trim();
    if !trimmed.is_empty() {
        query.push_str(" AND ");
        query.push_str(trimmed);
    }
    query
}

pub fn news_url(query: &str, page: i64, api_key: &str) -> String {
    format!(
        "{NEWS_ENDPOINT}?q={}&pageSize={PAGE_SIZE}&page={page}&sortBy=publishedAt&language=en&apiKey={api_key}",
        urlencoding::encode(query),
    )
}

/// Fetch one page of articles for the given search text and category.
pub async fn fetch_articles(
    search: &str,
    category: &str,
    page: i64,
) -> Result<NewsResponse, AppError> {
    let url = news_url(&build_query(search, category), page, NEWS_API_KEY);
    let response = reqwest::get(&url).await.map_err(|err| {
        tracing::warn!("news request failed: {err}");
        AppError::network("could not reach the news service")
    })?;

    if !response.status().is_success() {
        return Err(AppError::network(format!(
            "news service returned status {}",
            response.status()
        )));
    }

    let body: NewsResponse = response
        .json()
        .await
        .map_err(|err| AppError::network(format!("unreadable news payload: {err}")))?;

    if body.status == "error" {
        return Err(AppError::network("news service reported an error"));
    }

    Ok(body)
}

#[derive(Debug, Deserialize)]
struct ReverseGeocodeResponse {
    display_name: Option<String>,
}

pub fn geocode_url(lat: f64, lon: f64) -> String {
    format!("{GEOCODE_ENDPOINT}?format=json&lat={lat}&lon={lon}")
}

/// Translate coordinates into a display address. Falls back to a
/// generic label when the service has no name for the point.
pub async fn reverse_geocode(lat: f64, lon: f64) -> Result<String, AppError> {
    let response = reqwest::get(&geocode_url(lat, lon)).await.map_err(|err| {
        tracing::warn!("reverse geocode failed: {err}");
        AppError::network("could not reach the geocoding service")
    })?;

    let body: ReverseGeocodeResponse = response
        .json()
        .await
        .map_err(|err| AppError::network(format!("unreadable geocode payload: {err}")))?;

    Ok(body
        .display_name
        .unwrap_or_else(|| "Location selected on map".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn base_query_scopes_to_surat() {
        let query = build_query("", "");
        assert_eq!(query, "(crime OR safety OR police) AND Surat");
    }

    #[test]
    fn category_all_is_treated_as_no_filter() {
        assert_eq!(build_query("", "all"), build_query("", ""));
    }

    #[test]
    fn category_and_search_are_appended() {
        let query = build_query("  chain snatching ", "theft");
        assert_eq!(
            query,
            "(crime OR safety OR police) AND Surat AND theft AND chain snatching"
        );
    }

    #[test]
    fn news_url_encodes_query_and_carries_page() {
        let url = news_url("a b", 3, "k");
        assert!(url.starts_with(NEWS_ENDPOINT));
        assert!(url.contains("q=a%20b"));
        assert!(url.contains("page=3"));
        assert!(url.contains("pageSize=10"));
        assert!(url.contains("apiKey=k"));
    }

    #[test]
    fn geocode_url_carries_coordinates() {
        let url = geocode_url(21.17, 72.83);
        assert!(url.contains("lat=21.17"));
        assert!(url.contains("lon=72.83"));
        assert!(url.contains("format=json"));
    }
}
