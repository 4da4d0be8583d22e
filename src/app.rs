use leptos::prelude::*;

use crate::components::providers::Providers;
use crate::components::theme_badge::ThemeBadge;

#[component]
pub fn App() -> impl IntoView {
    view! {
        <Providers>
            <div class="app-layout">
                <header class="app-header">
                    <h1 class="app-title">"Shorts Generator"</h1>
                    <ThemeBadge />
                </header>
                <main class="content">
                    <p>"Turn long videos into shorts."</p>
                </main>
            </div>
        </Providers>
    }
}
