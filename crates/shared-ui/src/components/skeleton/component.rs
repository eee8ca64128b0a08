use dioxus::prelude::*;

/// Loading placeholder with an animated pulse.
#[component]
pub fn Skeleton(#[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>) -> Element {
    attributes.push(Attribute::new("class", "skeleton", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..attributes,
        }
    }
}
