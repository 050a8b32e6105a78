//! Call-to-action section

use leptos::*;

use crate::components::LucideIcon;
use crate::Icon;

#[component]
pub fn CallToAction() -> impl IntoView {
    view! {
        <section class="cta">
            <div class="container cta-inner">
                <h3>"Ready to Get Started?"</h3>
                <p>
                    "Connect with Supabase to unlock full functionality including authentication, "
                    "real-time features, and personalized assistance."
                </p>
                <div class="cta-actions">
                    <button class="btn btn-hero btn-lg">
                        <LucideIcon icon=Icon::MessageCircle class="icon-md"/>
                        "Start Chatting"
                    </button>
                    <button class="btn btn-outline btn-lg">
                        <LucideIcon icon=Icon::MapPin class="icon-md"/>
                        "Explore Campus"
                    </button>
                </div>
            </div>
        </section>
    }
}
