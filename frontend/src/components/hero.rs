//! Hero section component

use leptos::*;

use crate::components::ChatPanel;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero-inner">
                <h2 class="hero-title">
                    "Your Smart Campus"
                    <span class="hero-title-accent">"Assistant"</span>
                </h2>
                <p class="hero-subtitle">
                    "Get instant help with navigation, schedules, dining, and campus life. "
                    "Powered by AI to make your student experience seamless."
                </p>
                <ChatPanel/>
            </div>

            <div class="hero-decoration" aria-hidden="true">
                <div class="blob blob-top-right"></div>
                <div class="blob blob-bottom-left"></div>
            </div>
        </section>
    }
}
