//! UI Components for the Campus Assistant landing page.
//!
//! # Layout Components
//! - [`Header`] - Brand, status badge and notifications button
//! - [`Hero`] - Headline with the chat mock-up
//! - [`FeatureGrid`] - The six feature cards
//! - [`CallToAction`] - Closing pitch and buttons
//! - [`Footer`] - Page footer
//!
//! # Building Blocks
//! - [`ChatPanel`] - Chat input, Ask button and quick actions
//! - [`FeatureCard`] - One card of the grid
//! - [`LucideIcon`] - Inline SVG icon

mod header;
mod hero;
mod chat;
mod features;
mod cta;
mod footer;
mod icon;

pub use header::*;
pub use hero::*;
pub use chat::*;
pub use features::*;
pub use cta::*;
pub use footer::*;
pub use icon::*;
