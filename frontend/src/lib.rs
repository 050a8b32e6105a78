//! Campus Assistant - Leptos landing page
//!
//! A WebAssembly marketing page for Campus Assistant, the intelligent
//! campus companion. Everything is static except the hero chat input,
//! whose text lives in a local signal.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (brand, online badge, notifications)                 │
//! ├─────────────────────────────────────────────────────────────┤
//! │  CampusAssistant                                             │
//! │  ├── Hero                                                    │
//! │  │   └── ChatPanel (input, Ask, quick actions)              │
//! │  ├── FeatureGrid (six FeatureCards)                         │
//! │  └── CallToAction                                           │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`config`] - Compile-time settings (names, copy, log level)
//! - [`types`] - Common types (Feature, Icon, ChatDraft)
//! - [`content`] - Feature cards and quick-action phrases
//! - [`components`] - UI components (Header, Hero, FeatureGrid, etc.)

use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use wasm_bindgen::prelude::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod content;
pub mod components;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{Accent, ChatDraft, Feature, Icon};

// Content
pub use content::{FEATURES, QUICK_ACTIONS};

// Components
pub use components::*;

// =============================================================================
// Application Entry Point
// =============================================================================

/// Install the panic hook and logger, then mount the app on `<body>`.
#[wasm_bindgen]
pub fn start() {
    // Setup panic hook for better error messages
    console_error_panic_hook::set_once();

    // Setup console logging
    _ = console_log::init_with_level(LOG_LEVEL);

    log::info!("🎓 {} - Starting Leptos App", APP_NAME);

    mount_to_body(|| view! { <App/> });
}

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Meta name="description" content=APP_TAGLINE/>
        <Router>
            <main>
                <Routes>
                    <Route path="/" view=CampusAssistant/>
                </Routes>
            </main>
        </Router>
    }
}

/// The landing page.
#[component]
pub fn CampusAssistant() -> impl IntoView {
    view! {
        <div class="page">
            <Header/>
            <Hero/>
            <FeatureGrid/>
            <CallToAction/>
            <Footer/>
        </div>
    }
}
