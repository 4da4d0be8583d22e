use leptos::prelude::*;

use crate::theme::ThemeContext;

/// "dark" when selected and resolved agree, "system (dark)" otherwise.
fn theme_label(selected: &str, resolved: &str) -> String {
    if selected == resolved {
        resolved.to_string()
    } else {
        format!("{selected} ({resolved})")
    }
}

/// Shows the selected and resolved theme, or "pending" outside a `ThemeProvider`.
#[component]
pub fn ThemeBadge(
    /// The label text, e.g. "Theme"
    #[prop(optional, into)]
    label: Option<String>,
) -> impl IntoView {
    let context = use_context::<ThemeContext>();

    let class = if context.is_some() {
        "theme-badge theme-ready"
    } else {
        "theme-badge theme-pending"
    };
    let value = move || {
        context
            .map(|ctx| theme_label(&ctx.theme.get(), &ctx.resolved.get()))
            .unwrap_or_else(|| "pending".to_string())
    };

    view! {
        <div class="theme-item">
            <span class="theme-name">{label.unwrap_or_else(|| "Theme".to_string())}</span>
            <span class=class>{value}</span>
        </div>
    }
}
