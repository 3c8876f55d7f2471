//! Gemini Chat - Leptos Frontend
//!
//! Root component: provides the chat and theme contexts and routes to
//! the single chat page.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::pages::ChatPage;
use crate::services::store::BrowserStore;
use crate::state::chat::provide_chat_context;
use crate::state::theme::provide_theme_context;

#[component]
pub fn App() -> impl IntoView {
    // History is hydrated from localStorage here, once, on mount.
    provide_chat_context(&BrowserStore);
    provide_theme_context(&BrowserStore);

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <Routes fallback=|| view! { <NotFound/> }>
                    <Route path=path!("/") view=ChatPage/>
                </Routes>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page-center">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href="/">
                    <span class="btn">"Back to chat"</span>
                </A>
            </div>
        </div>
    }
}
