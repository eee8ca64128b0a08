use dioxus::prelude::*;
use shared_types::community::{alert_posts, by_popularity, parse_tags, posts_with_tag, search_posts};
use shared_types::CommunityPost;
use shared_ui::{
    Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, Input, PageHeader,
    PageSubtitle, PageTitle, SearchBar, TabContent, TabList, TabTrigger, Tabs, Textarea,
};

use crate::components::PostCard;
use crate::data;
use crate::notifications::use_notifications;

/// Narrow the feed to a tag (when one is picked) and then a search
/// query. Both tabs other than Alerts draw from this pool.
fn filter_feed(posts: &[CommunityPost], tag: Option<&str>, query: &str) -> Vec<CommunityPost> {
    let tagged: Vec<CommunityPost> = match tag {
        Some(tag) => posts_with_tag(posts, tag).into_iter().cloned().collect(),
        None => posts.to_vec(),
    };
    search_posts(&tagged, query).into_iter().cloned().collect()
}

/// Community forum: seed posts plus anything written this session.
/// Posts are held in memory only and reset on reload.
#[component]
pub fn Community() -> Element {
    let store = use_notifications();
    let mut posts = use_signal(data::sample_posts);
    let mut query = use_signal(String::new);
    let mut tag_filter = use_signal(|| Option::<String>::None);

    let mut new_title = use_signal(String::new);
    let mut new_content = use_signal(String::new);
    let mut new_tags = use_signal(String::new);
    let mut form_error = use_signal(|| Option::<String>::None);

    let on_like = move |id: String| {
        posts.with_mut(|list| {
            if let Some(post) = list.iter_mut().find(|p| p.id == id) {
                post.likes += 1;
            }
        });
    };

    let publish = move |evt: FormEvent| {
        evt.prevent_default();
        let title = new_title.peek().trim().to_string();
        let content = new_content.peek().trim().to_string();
        if title.is_empty() || content.is_empty() {
            form_error.set(Some("Title and content are both required.".to_string()));
            return;
        }
        form_error.set(None);

        let post = CommunityPost {
            id: uuid::Uuid::new_v4().to_string(),
            author_name: "You".to_string(),
            author_initials: "YO".to_string(),
            title,
            content,
            date: chrono::Utc::now().format("%Y-%m-%d").to_string(),
            likes: 0,
            comments: 0,
            tags: parse_tags(&new_tags.peek()),
        };
        posts.with_mut(|list| list.insert(0, post));
        new_title.set(String::new());
        new_content.set(String::new());
        new_tags.set(String::new());
        let mut store = store;
        store.success("Post published", "Your post is now visible to the community.");
    };

    let active_tag = tag_filter();
    let all = posts.read();
    let visible = filter_feed(&all, active_tag.as_deref(), &query());
    let alerts: Vec<CommunityPost> = alert_posts(&visible).into_iter().cloned().collect();
    let popular: Vec<CommunityPost> = by_popularity(&visible).into_iter().cloned().collect();
    let post_count = all.len();
    let alert_count = alert_posts(&all).len();
    let likes_given: u32 = all.iter().map(|p| p.likes).sum();
    drop(all);

    let trending: Vec<(shared_types::TrendingTag, BadgeVariant)> = data::trending_tags()
        .into_iter()
        .map(|tag| {
            let variant = if active_tag.as_deref() == Some(tag.name.as_str()) {
                BadgeVariant::Primary
            } else {
                BadgeVariant::Outline
            };
            (tag, variant)
        })
        .collect();

    rsx! {
        PageHeader {
            PageTitle { "Community" }
            PageSubtitle { "Reports, warnings and appreciation from people across the city." }
        }

        div { class: "community-layout",
            div { class: "community-main",
                SearchBar {
                    Input {
                        value: query(),
                        placeholder: "Search posts...",
                        on_input: move |evt: FormEvent| query.set(evt.value()),
                    }
                }

                Tabs { default_value: "recent",
                    TabList {
                        TabTrigger { value: "recent", "Recent" }
                        TabTrigger { value: "alerts", "Alerts" }
                        TabTrigger { value: "popular", "Popular" }
                    }
                    TabContent { value: "recent",
                        if visible.is_empty() {
                            p { class: "feed-empty", "No posts match the current filters." }
                        }
                        for post in visible.iter().cloned() {
                            PostCard { key: "{post.id}", post: post, on_like: on_like }
                        }
                    }
                    TabContent { value: "alerts",
                        if alerts.is_empty() {
                            p { class: "feed-empty", "No alert posts right now." }
                        }
                        for post in alerts.iter().cloned() {
                            PostCard { key: "{post.id}", post: post, on_like: on_like }
                        }
                    }
                    TabContent { value: "popular",
                        for post in popular.iter().cloned() {
                            PostCard { key: "{post.id}", post: post, on_like: on_like }
                        }
                    }
                }
            }

            aside { class: "community-side",
                Card {
                    CardHeader {
                        CardTitle { "Share with the community" }
                    }
                    CardContent {
                        form { onsubmit: publish,
                            Input {
                                label: "Title",
                                value: new_title(),
                                on_input: move |evt: FormEvent| new_title.set(evt.value()),
                            }
                            Textarea {
                                label: "What happened?",
                                value: new_content(),
                                on_input: move |evt: FormEvent| new_content.set(evt.value()),
                            }
                            Input {
                                label: "Tags (comma separated)",
                                value: new_tags(),
                                placeholder: "alert, adajan",
                                on_input: move |evt: FormEvent| new_tags.set(evt.value()),
                            }
                            if let Some(message) = form_error() {
                                p { class: "form-error", "{message}" }
                            }
                            Button { button_type: "submit", "Publish" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Community pulse" }
                    }
                    CardContent {
                        ul { class: "pulse-list",
                            li { strong { "{post_count}" } " posts" }
                            li { strong { "{alert_count}" } " active alerts" }
                            li { strong { "{likes_given}" } " likes given" }
                        }
                    }
                }

                Card {
                    CardHeader {
                        CardTitle { "Trending tags" }
                    }
                    CardContent {
                        // Clicking a tag narrows the feed; clicking it again clears.
                        div { class: "tag-cloud",
                            for (tag, variant) in trending {
                                button {
                                    key: "{tag.name}",
                                    class: "tag-button",
                                    onclick: {
                                        let name = tag.name.clone();
                                        move |_| {
                                            let same = tag_filter.peek().as_deref() == Some(name.as_str());
                                            tag_filter.set(if same { None } else { Some(name.clone()) });
                                        }
                                    },
                                    Badge { variant: variant, "#{tag.name} ({tag.count})" }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn post(id: &str, title: &str, tags: &[&str]) -> CommunityPost {
        CommunityPost {
            id: id.into(),
            author_name: "Tester".into(),
            author_initials: "T".into(),
            title: title.into(),
            content: String::new(),
            date: "2025-04-05".into(),
            likes: 0,
            comments: 0,
            tags: tags.iter().map(|t| t.to_string()).collect(),
        }
    }

    #[test]
    fn tag_filter_narrows_before_search() {
        let posts = vec![
            post("1", "Chain snatching near Adajan", &["alert", "adajan"]),
            post("2", "Streetlights fixed in Adajan", &["adajan"]),
            post("3", "Chain snatching in Katargam", &["alert"]),
        ];

        let by_tag = filter_feed(&posts, Some("adajan"), "");
        assert_eq!(
            by_tag.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["1", "2"]
        );

        let tag_and_query = filter_feed(&posts, Some("adajan"), "snatching");
        assert_eq!(tag_and_query.len(), 1);
        assert_eq!(tag_and_query[0].id, "1");

        assert_eq!(filter_feed(&posts, None, "").len(), 3);
    }
}
