use dioxus::prelude::*;

/// Card container used for stats, forms and list entries.
#[component]
pub fn Card(
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "card", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            ..attributes,
            {children}
        }
    }
}

/// Header section of a Card.
#[component]
pub fn CardHeader(children: Element) -> Element {
    rsx! {
        div { class: "card-header", {children} }
    }
}

/// Title element within a CardHeader.
#[component]
pub fn CardTitle(children: Element) -> Element {
    rsx! {
        h3 { class: "card-title", {children} }
    }
}

/// Description text within a CardHeader.
#[component]
pub fn CardDescription(children: Element) -> Element {
    rsx! {
        p { class: "card-description", {children} }
    }
}

/// Main content section of a Card.
#[component]
pub fn CardContent(children: Element) -> Element {
    rsx! {
        div { class: "card-content", {children} }
    }
}

/// Footer section of a Card.
#[component]
pub fn CardFooter(children: Element) -> Element {
    rsx! {
        div { class: "card-footer", {children} }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Element {
        rsx! {
            CardHeader {
                CardTitle { "Police Login" }
                CardDescription { "Access the police dashboard" }
            }
        }
    }

    #[test]
    fn header_renders_title_and_description() {
        let mut dom = VirtualDom::new(sample);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);
        assert!(html.contains("card-title"));
        assert!(html.contains("Police Login"));
        assert!(html.contains("Access the police dashboard"));
    }
}
