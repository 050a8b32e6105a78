//! Feature grid

use leptos::*;

use crate::components::LucideIcon;
use crate::{Feature, FEATURES};

#[component]
pub fn FeatureGrid() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="section-heading">
                    <h3>"Everything You Need for Campus Life"</h3>
                    <p>
                        "From AI-powered assistance to interactive campus maps, "
                        "we've got all your student needs covered."
                    </p>
                </div>

                <div class="feature-grid">
                    {FEATURES
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=*feature/> })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

/// A single card of the grid.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="card-header">
                <div class=format!("feature-icon {}", feature.accent.css_class())>
                    <LucideIcon icon=feature.icon class="icon-md"/>
                </div>
                <h4 class="card-title">{feature.title}</h4>
            </div>
            <div class="card-content">
                <p>{feature.description}</p>
            </div>
        </div>
    }
}
