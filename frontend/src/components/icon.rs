//! Inline SVG pictograms.

use leptos::*;

use crate::Icon;

/// Stroked 24x24 icon drawn in `currentColor`.
#[component]
pub fn LucideIcon(
    icon: Icon,
    /// Extra classes, typically a size (`icon-xs`, `icon-sm`, `icon-md`).
    #[prop(optional)]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            class=format!("icon {}", class)
            xmlns="http://www.w3.org/2000/svg"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            role="img"
            aria-label=icon.label()
        >
            {icon.paths().iter().map(|d| view! { <path d=*d/> }).collect_view()}
        </svg>
    }
}
