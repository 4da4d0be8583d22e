use leptos::prelude::*;

/// Theme name that defers to the operating system preference.
pub const SYSTEM_THEME: &str = "system";

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

/// Where the active theme is written on `<html>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeAttribute {
    /// The theme name is added to the element's class list.
    #[default]
    Class,
}

/// Configuration handed to the theme provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeOptions {
    pub attribute: ThemeAttribute,
    pub default_theme: String,
    pub enable_system: bool,
    pub themes: Vec<String>,
}

impl Default for ThemeOptions {
    fn default() -> Self {
        Self {
            attribute: ThemeAttribute::Class,
            default_theme: SYSTEM_THEME.to_string(),
            enable_system: true,
            themes: vec!["light".to_string(), "dark".to_string()],
        }
    }
}

/// Selected theme and the concrete theme it resolves to.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: ReadSignal<String>,
    pub resolved: Memo<String>,
}

/// Maps a selected theme to the concrete theme written to the DOM.
/// - "system" (when enabled) → "dark" or "light" from the OS preference
/// - a configured theme → itself
/// - anything else → the first configured theme
pub fn resolve_theme(theme: &str, options: &ThemeOptions, system_dark: Option<bool>) -> String {
    if theme == SYSTEM_THEME && options.enable_system {
        return if system_dark == Some(true) { "dark" } else { "light" }.to_string();
    }
    if options.themes.iter().any(|t| t == theme) {
        return theme.to_string();
    }
    options
        .themes
        .first()
        .cloned()
        .unwrap_or_else(|| "light".to_string())
}

/// `None` when there is no window or the media query is unsupported.
pub fn system_prefers_dark() -> Option<bool> {
    let window = web_sys::window()?;
    let query = window.match_media(DARK_SCHEME_QUERY).ok().flatten()?;
    Some(query.matches())
}

/// Write the resolved theme onto `<html>`.
pub fn apply_theme(attribute: ThemeAttribute, resolved: &str, themes: &[String]) {
    if let Some(window) = web_sys::window() {
        if let Some(doc) = window.document() {
            if let Some(html) = doc.document_element() {
                match attribute {
                    ThemeAttribute::Class => {
                        let classes = html.class_list();
                        for theme in themes {
                            let _ = classes.remove_1(theme);
                        }
                        let _ = classes.add_1(resolved);
                    }
                }
            }
        }
    }
}

#[component]
pub fn ThemeProvider(options: ThemeOptions, children: Children) -> impl IntoView {
    let theme = RwSignal::new(options.default_theme.clone());
    let system_dark = system_prefers_dark();

    let resolve_options = options.clone();
    let resolved = Memo::new(move |_| resolve_theme(&theme.get(), &resolve_options, system_dark));

    provide_context(ThemeContext {
        theme: theme.read_only(),
        resolved,
    });

    // Keep <html> in sync with the resolved theme
    Effect::new(move |_| {
        let current = resolved.get();
        apply_theme(options.attribute, &current, &options.themes);
    });

    children()
}
