//! Navigation Bar Component with theme toggle

use crate::services::store::BrowserStore;
use crate::state::theme::use_theme_context;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Navbar() -> impl IntoView {
    let theme_ctx = use_theme_context();

    let toggle_theme = move |_| {
        theme_ctx.toggle(&BrowserStore);
    };

    view! {
        <nav class="navbar">
            <A href="/" {..} class="nav-link-clean">
                <span class="nav-title">"Gemini Chatbot"</span>
            </A>
            <button
                class="theme-toggle"
                on:click=toggle_theme
                aria-label="Toggle theme"
            >
                {move || if theme_ctx.theme.get().is_dark() { "🌙" } else { "☀️" }}
            </button>
        </nav>
    }
}
