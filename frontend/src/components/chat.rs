//! Chat mock-up shown in the hero.
//!
//! The input is purely local: "Ask" clears it and the quick actions
//! pre-fill it. Nothing leaves the page.

use leptos::*;

use crate::components::LucideIcon;
use crate::{ChatDraft, Icon, CHAT_PLACEHOLDER, QUICK_ACTIONS};

#[component]
pub fn ChatPanel() -> impl IntoView {
    let draft = create_rw_signal(ChatDraft::default());

    let on_ask = move |_| {
        draft.update(|d| {
            let question = d.ask();
            log::debug!("💬 Ask pressed, cleared {:?}", question);
        });
    };

    view! {
        <div class="chat-panel">
            <div class="chat-prompt">
                <div class="chat-avatar">
                    <LucideIcon icon=Icon::Bot class="icon-sm"/>
                </div>
                <span>"Ask me anything about campus!"</span>
            </div>

            <div class="chat-row">
                <input
                    type="text"
                    class="chat-input"
                    placeholder=CHAT_PLACEHOLDER
                    prop:value=move || draft.with(|d| d.text().to_owned())
                    on:input=move |ev| draft.update(|d| d.edit(event_target_value(&ev)))
                />
                <button class="btn btn-ask" on:click=on_ask>"Ask"</button>
            </div>

            <div class="quick-actions">
                {QUICK_ACTIONS
                    .into_iter()
                    .map(move |phrase| {
                        view! {
                            <button
                                class="btn btn-quick"
                                on:click=move |_| {
                                    log::debug!("⚡ Quick action: {}", phrase);
                                    draft.update(|d| d.quick_action(phrase));
                                }
                            >
                                {phrase}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
        </div>
    }
}
