use dioxus::prelude::*;
use shared_types::news::total_pages;
use shared_ui::{FormSelect, Input, PageHeader, PageSubtitle, PageTitle, Pagination, SearchBar, Skeleton};

use crate::components::ArticleCard;
use crate::net;
use crate::notifications::use_notifications;
use crate::time;

/// Categories offered alongside free-text search.
const CATEGORIES: &[(&str, &str)] = &[
    ("all", "All categories"),
    ("theft", "Theft"),
    ("cybercrime", "Cybercrime"),
    ("assault", "Assault"),
    ("traffic", "Traffic"),
];

/// Live news feed. Search input is debounced so a burst of keystrokes
/// costs one request; category and page changes fetch immediately.
#[component]
pub fn News() -> Element {
    let store = use_notifications();
    let mut search_input = use_signal(String::new);
    let mut debounced_search = use_signal(String::new);
    let mut generation = use_signal(|| 0u32);
    let mut category = use_signal(|| "all".to_string());
    let mut page = use_signal(|| 1i64);

    let articles = use_resource(move || async move {
        let result = net::fetch_articles(&debounced_search(), &category(), page()).await;
        if let Err(err) = &result {
            let mut store = store;
            store.error("News feed", err.friendly_message());
        }
        result
    });

    let on_search = move |evt: FormEvent| {
        search_input.set(evt.value());
        let my_generation = generation() + 1;
        generation.set(my_generation);
        spawn(async move {
            time::sleep_ms(time::DEBOUNCE_MS).await;
            // A newer keystroke supersedes this one.
            if *generation.peek() == my_generation {
                page.set(1);
                debounced_search.set(search_input.peek().clone());
            }
        });
    };

    let feed = match &*articles.read() {
        Some(Ok(response)) => rsx! {
            if response.articles.is_empty() {
                p { class: "feed-empty", "No articles matched. Try a broader search." }
            } else {
                div { class: "article-grid",
                    for article in response.articles.iter().cloned() {
                        ArticleCard { key: "{article.url}", article: article }
                    }
                }
                Pagination {
                    page: page,
                    total_pages: total_pages(response.total_results, net::PAGE_SIZE),
                }
            }
        },
        Some(Err(err)) => rsx! {
            div { class: "feed-error",
                p { {err.friendly_message()} }
            }
        },
        None => rsx! {
            div { class: "article-grid",
                for i in 0..6 {
                    Skeleton { key: "{i}" }
                }
            }
        },
    };

    rsx! {
        PageHeader {
            PageTitle { "Crime & Safety News" }
            PageSubtitle { "Coverage of crime and public safety in Surat." }
        }

        SearchBar {
            Input {
                value: search_input(),
                placeholder: "Search articles...",
                on_input: on_search,
            }
            FormSelect {
                value: category(),
                onchange: move |evt: FormEvent| {
                    category.set(evt.value());
                    page.set(1);
                },
                for (key, name) in CATEGORIES {
                    option { value: *key, "{name}" }
                }
            }
        }

        {feed}
    }
}
