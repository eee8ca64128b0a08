use serde::{Deserialize, Serialize};

/// A community forum post. Posts created in the UI live only in memory.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommunityPost {
    pub id: String,
    pub author_name: String,
    pub author_initials: String,
    pub title: String,
    pub content: String,
    pub date: String,
    pub likes: u32,
    pub comments: u32,
    pub tags: Vec<String>,
}

/// A trending tag with its usage count.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendingTag {
    pub name: String,
    pub count: u32,
}

/// Tags that mark a post as an alert for the Alerts tab.
pub const ALERT_TAGS: &[&str] = &["alert", "warning", "scamalert"];

/// Posts whose tag set contains `tag`, preserving order.
pub fn posts_with_tag<'a>(posts: &'a [CommunityPost], tag: &str) -> Vec<&'a CommunityPost> {
    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| t == tag))
        .collect()
}

/// Posts carrying any of the alert tags.
pub fn alert_posts(posts: &[CommunityPost]) -> Vec<&CommunityPost> {
    posts
        .iter()
        .filter(|p| p.tags.iter().any(|t| ALERT_TAGS.contains(&t.as_str())))
        .collect()
}

/// Posts sorted by like count, most-liked first.
pub fn by_popularity(posts: &[CommunityPost]) -> Vec<&CommunityPost> {
    let mut sorted: Vec<&CommunityPost> = posts.iter().collect();
    sorted.sort_by(|a, b| b.likes.cmp(&a.likes));
    sorted
}

/// Case-insensitive search over title and content.
pub fn search_posts<'a>(posts: &'a [CommunityPost], query: &str) -> Vec<&'a CommunityPost> {
    let needle = query.to_lowercase();
    posts
        .iter()
        .filter(|p| {
            needle.is_empty()
                || p.title.to_lowercase().contains(&needle)
                || p.content.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Split a comma-separated tag field into trimmed, non-empty tags.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|t| t.trim().trim_start_matches('#').to_lowercase())
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(id: &str, title: &str, likes: u32, tags: &[&str]) -> CommunityPost {
        CommunityPost {
            id: id.into(),
            author_name: "Tester".into(),
            author_initials: "T".into(),
            title: title.into(),
            content: String::new(),
            date: "April 5, 2025".into(),
            likes,
            comments: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn tag_filter_returns_exact_subset() {
        let posts = vec![
            post("1", "a", 1, &["safety", "vesu"]),
            post("2", "b", 2, &["alert"]),
            post("3", "c", 3, &["safety"]),
        ];
        let hits = posts_with_tag(&posts, "safety");
        assert_eq!(
            hits.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "3"]
        );
        assert!(posts_with_tag(&posts, "missing").is_empty());
    }

    #[test]
    fn alert_posts_match_any_alert_tag() {
        let posts = vec![
            post("1", "a", 1, &["safety"]),
            post("2", "b", 2, &["scamalert"]),
            post("3", "c", 3, &["warning", "vesu"]),
        ];
        let hits = alert_posts(&posts);
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].id, "2");
    }

    #[test]
    fn popularity_sorts_by_likes_desc() {
        let posts = vec![
            post("1", "a", 8, &[]),
            post("2", "b", 67, &[]),
            post("3", "c", 15, &[]),
        ];
        let sorted = by_popularity(&posts);
        assert_eq!(
            sorted.iter().map(|p| p.likes).collect::<Vec<_>>(),
            vec![67, 15, 8]
        );
    }

    #[test]
    fn search_is_case_insensitive_over_title_and_content() {
        let mut p = post("1", "Suspicious activity near City Light", 0, &[]);
        p.content = "loitering after midnight".into();
        let posts = vec![p, post("2", "Lost wallet", 0, &[])];

        assert_eq!(search_posts(&posts, "CITY light").len(), 1);
        assert_eq!(search_posts(&posts, "midnight").len(), 1);
        assert_eq!(search_posts(&posts, "").len(), 2);
        assert!(search_posts(&posts, "nothing").is_empty());
    }

    #[test]
    fn parse_tags_trims_and_lowercases() {
        assert_eq!(
            parse_tags(" Safety, #Vesu ,, alert "),
            vec!["safety", "vesu", "alert"]
        );
        assert!(parse_tags("  ,").is_empty());
    }
}
