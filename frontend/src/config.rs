//! Application configuration.
//!
//! Compile-time settings for the Campus Assistant landing page.
//! Everything here is baked into the WASM bundle; there is no
//! runtime configuration.

/// Product name shown in the header and the document title.
pub const APP_NAME: &str = "Campus Assistant";

/// One-line tagline under the product name.
pub const APP_TAGLINE: &str = "Your intelligent campus companion";

/// Footer line.
pub const COPYRIGHT: &str = "Campus Assistant © 2024 - Making student life easier with AI";

/// Placeholder text of the hero chat input.
pub const CHAT_PLACEHOLDER: &str = "e.g., Where is the computer science building?";

/// Browser console log level.
pub const LOG_LEVEL: log::Level = log::Level::Debug;
