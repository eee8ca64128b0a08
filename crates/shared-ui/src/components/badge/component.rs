use dioxus::prelude::*;

/// Visual variant for badges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BadgeVariant {
    #[default]
    Primary,
    Secondary,
    Warning,
    Destructive,
    Outline,
}

impl BadgeVariant {
    pub fn class(&self) -> &'static str {
        match self {
            BadgeVariant::Primary => "primary",
            BadgeVariant::Secondary => "secondary",
            BadgeVariant::Warning => "warning",
            BadgeVariant::Destructive => "destructive",
            BadgeVariant::Outline => "outline",
        }
    }
}

/// Inline label for statuses, severities and tags.
#[component]
pub fn Badge(
    #[props(default)] variant: BadgeVariant,
    #[props(extends = GlobalAttributes)] mut attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    attributes.push(Attribute::new("class", "badge", None, false));
    attributes.push(Attribute::new("data-style", variant.class(), None, false));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        span {
            ..attributes,
            {children}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn variant_classes_are_distinct() {
        let variants = [
            BadgeVariant::Primary,
            BadgeVariant::Secondary,
            BadgeVariant::Warning,
            BadgeVariant::Destructive,
            BadgeVariant::Outline,
        ];
        let mut classes: Vec<&str> = variants.iter().map(|v| v.class()).collect();
        classes.dedup();
        assert_eq!(classes.len(), variants.len());
    }
}
