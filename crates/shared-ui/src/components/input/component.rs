use dioxus::prelude::*;

/// Single-line text input with an optional label.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] label: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] required: bool,
    #[props(default = false)] disabled: bool,
    #[props(default = false)] readonly: bool,
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
) -> Element {
    attributes.push(Attribute::new("class", "input", None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "input-wrapper",
            if !label.is_empty() {
                label { class: "input-label", "{label}" }
            }
            input {
                r#type: "{input_type}",
                value: value,
                placeholder: placeholder,
                required: required,
                disabled: disabled,
                readonly: readonly,
                oninput: move |evt| on_input.call(evt),
                ..attributes,
            }
        }
    }
}
