//! Footer component

use leptos::*;

use crate::COPYRIGHT;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{COPYRIGHT}</p>
            </div>
        </footer>
    }
}
