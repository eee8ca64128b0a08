use dioxus::prelude::*;

/// Color scheme applied through the `data-theme` attribute on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    /// Key used for storage and the `data-theme` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        }
    }

    /// Parse a stored key, falling back to light.
    pub fn from_key(s: &str) -> Self {
        match s {
            "dark" => ThemeMode::Dark,
            _ => ThemeMode::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Seed the theme on application startup.
///
/// Reads the persisted mode from localStorage and applies it to the
/// document root. Mount once in the top-level App component.
#[component]
pub fn ThemeSeed() -> Element {
    use_effect(|| {
        document::eval(
            r#"
            (function() {
                var theme = window.localStorage.getItem('scc.theme') || 'light';
                document.documentElement.setAttribute('data-theme', theme);
            })();
            "#,
        );
    });

    rsx! {}
}

/// Read the persisted mode back out of localStorage.
pub async fn stored_theme() -> ThemeMode {
    match document::eval("return window.localStorage.getItem('scc.theme');").await {
        Ok(value) => ThemeMode::from_key(value.as_str().unwrap_or("light")),
        Err(_) => ThemeMode::Light,
    }
}

/// Set the active theme, persisting to localStorage and updating the
/// document root.
pub fn set_theme(mode: ThemeMode) {
    let key = mode.as_str();
    document::eval(&format!(
        r#"
        (function() {{
            window.localStorage.setItem('scc.theme', '{key}');
            document.documentElement.setAttribute('data-theme', '{key}');
        }})();
        "#,
    ));
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_mode_is_light() {
        assert_eq!(ThemeMode::default(), ThemeMode::Light);
    }

    #[test]
    fn key_round_trip() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_key(mode.as_str()), mode);
        }
    }

    #[test]
    fn unknown_key_falls_back_to_light() {
        assert_eq!(ThemeMode::from_key("solarized"), ThemeMode::Light);
        assert_eq!(ThemeMode::from_key(""), ThemeMode::Light);
    }

    #[test]
    fn toggle_flips_between_modes() {
        assert_eq!(ThemeMode::Light.toggled(), ThemeMode::Dark);
        assert_eq!(ThemeMode::Dark.toggled(), ThemeMode::Light);
    }
}
