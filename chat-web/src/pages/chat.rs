//! Chat Page
//!
//! The whole conversation UI: question form with optional file
//! attachment, optimistic history rendering, per-entry deletion.
//!
//! Submission flow: append a pending entry, fire the request, then
//! either resolve the entry with the answer (persisting the snapshot)
//! or roll it back and surface a transient notification. The file input
//! is only cleared on success so a failed submission can be retried
//! as-is.

use leptos::ev::SubmitEvent;
use leptos::html;
use leptos::prelude::*;

use crate::components::Notification;
use crate::services::api;
use crate::services::store::BrowserStore;
use crate::state::chat::use_chat_context;
use crate::state::history::AnswerState;
use crate::utils::constants::NOTIFICATION_MS;
use crate::utils::upload::validate_file;

/// Show a message and clear it after a few seconds.
fn flash(set_notice: WriteSignal<Option<String>>, message: String) {
    set_notice.set(Some(message));
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(NOTIFICATION_MS).await;
        set_notice.set(None);
    });
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let chat = use_chat_context();

    let (question, set_question) = signal(String::new());
    let (notice, set_notice) = signal(None::<String>);
    let file_input: NodeRef<html::Input> = NodeRef::new();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();

        // One submission in flight at a time; the button is disabled
        // too, but a form can also be submitted with Enter.
        if chat.submitting.get_untracked() {
            return;
        }

        let question_text = question.get_untracked().trim().to_string();
        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        if question_text.is_empty() && file.is_none() {
            flash(set_notice, "Type a question or attach a file".to_string());
            return;
        }

        if let Some(file) = &file {
            if let Err(message) = validate_file(file) {
                flash(set_notice, message);
                return;
            }
        }

        // Optimistic append; the question input is cleared speculatively,
        // the file input is not.
        let entry_id = chat.begin_submission(&question_text);
        set_question.set(String::new());

        leptos::task::spawn_local(async move {
            match api::ask(&question_text, file.as_ref()).await {
                Ok(answer) => {
                    chat.complete_submission(&BrowserStore, entry_id, answer);
                    if let Some(input) = file_input.get_untracked() {
                        input.set_value("");
                    }
                }
                Err(error) => {
                    chat.fail_submission(entry_id);
                    // Restore the question so the user can retry.
                    set_question.set(question_text);
                    flash(set_notice, error.message);
                }
            }
        });
    };

    view! {
        <div class="chat-page">
            <Notification message=notice/>

            <div class="card chat-card">
                <form on:submit=on_submit class="chat-form">
                    <input
                        type="text"
                        placeholder="Ask a question..."
                        prop:value=question
                        on:input=move |ev| set_question.set(event_target_value(&ev))
                    />
                    <input
                        type="file"
                        accept="image/*,application/pdf,text/plain"
                        node_ref=file_input
                    />
                    <button
                        type="submit"
                        class="btn"
                        prop:disabled=move || chat.submitting.get()
                    >
                        {move || if chat.submitting.get() { "Asking..." } else { "Ask" }}
                    </button>
                </form>

                <div class="chat-history">
                    <For
                        each=move || chat.history.get().entries().to_vec()
                        key=|entry| entry.id
                        children=move |entry| {
                            let entry_id = entry.id;
                            let on_delete = move |_| {
                                chat.delete_entry(&BrowserStore, entry_id);
                            };

                            view! {
                                <div class="chat-entry">
                                    <div class="chat-entry-header">
                                        <p class="chat-question">
                                            "User: " <span>{entry.question.clone()}</span>
                                        </p>
                                        <button
                                            class="delete-btn"
                                            aria-label="Delete entry"
                                            on:click=on_delete
                                        >
                                            "✕"
                                        </button>
                                    </div>
                                    {match entry.answer.clone() {
                                        AnswerState::Pending => {
                                            view! {
                                                <p class="chat-answer skeleton">"Thinking..."</p>
                                            }
                                                .into_any()
                                        }
                                        AnswerState::Answered(answer) => {
                                            view! { <p class="chat-answer">{answer}</p> }
                                                .into_any()
                                        }
                                        // Failed entries are purged by the
                                        // rollback; nothing to render.
                                        AnswerState::Failed => ().into_any(),
                                    }}
                                </div>
                            }
                        }
                    />
                </div>
            </div>

            <footer class="chat-footer">"Powered by Gemini API"</footer>
        </div>
    }
}
