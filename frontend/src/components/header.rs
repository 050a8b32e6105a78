use leptos::*;

use crate::components::LucideIcon;
use crate::{Icon, APP_NAME, APP_TAGLINE};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container header-inner">
                <div class="brand">
                    <div class="brand-mark">
                        <LucideIcon icon=Icon::GraduationCap class="icon-md"/>
                    </div>
                    <div>
                        <h1 class="brand-name">{APP_NAME}</h1>
                        <p class="brand-tagline">{APP_TAGLINE}</p>
                    </div>
                </div>
                <div class="header-actions">
                    <span class="badge">
                        <LucideIcon icon=Icon::Clock class="icon-xs"/>
                        "Online"
                    </span>
                    // Notifications are not wired to anything yet
                    <button class="btn btn-outline btn-sm" aria-label="Notifications">
                        <LucideIcon icon=Icon::Bell class="icon-sm"/>
                    </button>
                </div>
            </div>
        </header>
    }
}
