use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdMessageCircle, LdThumbsUp};
use dioxus_free_icons::Icon;
use shared_types::CommunityPost;
use shared_ui::{Badge, BadgeVariant, Card, CardContent, CardFooter, CardHeader, CardTitle};

/// One forum post. `on_like` bumps the in-memory like counter.
#[component]
pub fn PostCard(post: CommunityPost, on_like: EventHandler<String>) -> Element {
    let post_id = post.id.clone();

    rsx! {
        Card {
            CardHeader {
                div { class: "post-author",
                    span { class: "post-avatar", "{post.author_initials}" }
                    div {
                        span { class: "post-author-name", "{post.author_name}" }
                        span { class: "post-date", "{post.date}" }
                    }
                }
                CardTitle { "{post.title}" }
            }
            CardContent {
                p { "{post.content}" }
                div { class: "post-tags",
                    for tag in post.tags.iter() {
                        Badge { variant: BadgeVariant::Outline, "#{tag}" }
                    }
                }
            }
            CardFooter {
                button {
                    class: "post-like",
                    onclick: move |_| on_like.call(post_id.clone()),
                    Icon { icon: LdThumbsUp, width: 14, height: 14 }
                    span { "{post.likes}" }
                }
                span { class: "post-comments",
                    Icon { icon: LdMessageCircle, width: 14, height: 14 }
                    span { "{post.comments}" }
                }
            }
        }
    }
}
