//! Transient error notification

use leptos::prelude::*;

/// Toast shown for validation and submission failures. Renders nothing
/// while the message signal is `None`.
#[component]
pub fn Notification(message: ReadSignal<Option<String>>) -> impl IntoView {
    view! {
        {move || {
            message
                .get()
                .map(|text| {
                    view! {
                        <div class="notification" role="alert">
                            {text}
                        </div>
                    }
                })
        }}
    }
}
