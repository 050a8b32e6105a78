//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Feature Types** - Cards of the feature grid
//! - **Icon Types** - Pictograms rendered as inline SVG
//! - **Chat Types** - The hero chat input draft

// =============================================================================
// Feature Types
// =============================================================================

/// Colour treatment of a feature card's icon tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    /// Brand gradient
    Primary,
    /// Secondary brand colour
    Secondary,
    /// Accent colour
    Accent,
}

impl Accent {
    /// Get CSS class for styling.
    pub fn css_class(&self) -> &'static str {
        match self {
            Accent::Primary => "accent-primary",
            Accent::Secondary => "accent-secondary",
            Accent::Accent => "accent-accent",
        }
    }
}

/// A marketed capability shown as a card in the feature grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Feature {
    /// Card pictogram
    pub icon: Icon,
    /// Card heading
    pub title: &'static str,
    /// One-sentence pitch
    pub description: &'static str,
    /// Icon tile colour
    pub accent: Accent,
}

// =============================================================================
// Icon Types
// =============================================================================

/// Pictograms used on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    MessageCircle,
    MapPin,
    Calendar,
    BookOpen,
    Users,
    Search,
    Bot,
    GraduationCap,
    Clock,
    Bell,
}

impl Icon {
    /// Every icon, in declaration order.
    pub const ALL: [Icon; 10] = [
        Icon::MessageCircle,
        Icon::MapPin,
        Icon::Calendar,
        Icon::BookOpen,
        Icon::Users,
        Icon::Search,
        Icon::Bot,
        Icon::GraduationCap,
        Icon::Clock,
        Icon::Bell,
    ];

    /// Accessible label for the SVG.
    pub fn label(&self) -> &'static str {
        match self {
            Icon::MessageCircle => "message",
            Icon::MapPin => "map pin",
            Icon::Calendar => "calendar",
            Icon::BookOpen => "book",
            Icon::Users => "users",
            Icon::Search => "search",
            Icon::Bot => "assistant",
            Icon::GraduationCap => "graduation cap",
            Icon::Clock => "clock",
            Icon::Bell => "notifications",
        }
    }

    /// SVG path data on a 24x24 grid, stroked, no fill.
    pub fn paths(&self) -> &'static [&'static str] {
        match self {
            Icon::MessageCircle => &["M7.9 20A9 9 0 1 0 4 16.1L2 22Z"],
            Icon::MapPin => &[
                "M20 10c0 4.993-5.539 10.193-7.399 11.799a1 1 0 0 1-1.202 0C9.539 20.193 4 14.993 4 10a8 8 0 0 1 16 0",
                "M9 10a3 3 0 1 0 6 0a3 3 0 1 0-6 0",
            ],
            Icon::Calendar => &[
                "M8 2v4",
                "M16 2v4",
                "M5 4h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z",
                "M3 10h18",
            ],
            Icon::BookOpen => &[
                "M2 3h6a4 4 0 0 1 4 4v14a3 3 0 0 0-3-3H2z",
                "M22 3h-6a4 4 0 0 0-4 4v14a3 3 0 0 1 3-3h7z",
            ],
            Icon::Users => &[
                "M16 21v-2a4 4 0 0 0-4-4H6a4 4 0 0 0-4 4v2",
                "M5 7a4 4 0 1 0 8 0a4 4 0 1 0-8 0",
                "M22 21v-2a4 4 0 0 0-3-3.87",
                "M16 3.13a4 4 0 0 1 0 7.75",
            ],
            Icon::Search => &["M3 11a8 8 0 1 0 16 0a8 8 0 1 0-16 0", "m21 21-4.3-4.3"],
            Icon::Bot => &[
                "M12 8V4H8",
                "M6 8h12a2 2 0 0 1 2 2v8a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2v-8a2 2 0 0 1 2-2z",
                "M2 14h2",
                "M20 14h2",
                "M15 13v2",
                "M9 13v2",
            ],
            Icon::GraduationCap => &["M22 10v6M2 10l10-5 10 5-10 5z", "M6 12v5c3 3 9 3 12 0v-5"],
            Icon::Clock => &["M2 12a10 10 0 1 0 20 0a10 10 0 1 0-20 0", "M12 6v6l4 2"],
            Icon::Bell => &[
                "M6 8a6 6 0 0 1 12 0c0 7 3 9 3 9H3s3-2 3-9",
                "M10.3 21a1.94 1.94 0 0 0 3.4 0",
            ],
        }
    }
}

// =============================================================================
// Chat Types
// =============================================================================

/// Text currently typed into the hero chat input.
///
/// Nothing is ever submitted: "Ask" only clears the field and the
/// quick actions only pre-fill it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChatDraft {
    text: String,
}

impl ChatDraft {
    /// Current input value.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Replace the draft with the field's new content.
    pub fn edit(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Clear the draft, returning what was there.
    pub fn ask(&mut self) -> String {
        std::mem::take(&mut self.text)
    }

    /// Overwrite the draft with a canned phrase.
    pub fn quick_action(&mut self, phrase: &str) {
        self.text.clear();
        self.text.push_str(phrase);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_starts_empty() {
        let draft = ChatDraft::default();
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_edit_replaces_text() {
        let mut draft = ChatDraft::default();
        draft.edit("Where is the gym?");
        assert_eq!(draft.text(), "Where is the gym?");

        draft.edit("Wh");
        assert_eq!(draft.text(), "Wh");

        draft.edit("");
        assert_eq!(draft.text(), "");

        draft.edit("Où est la cafétéria ? 🍕");
        assert_eq!(draft.text(), "Où est la cafétéria ? 🍕");
    }

    #[test]
    fn test_ask_clears_regardless_of_content() {
        let mut draft = ChatDraft::default();
        assert_eq!(draft.ask(), "");
        assert_eq!(draft.text(), "");

        draft.edit("When does the library close?");
        assert_eq!(draft.ask(), "When does the library close?");
        assert_eq!(draft.text(), "");
    }

    #[test]
    fn test_quick_action_overwrites() {
        let mut draft = ChatDraft::default();
        draft.edit("something else entirely");
        draft.quick_action("Find the library");
        assert_eq!(draft.text(), "Find the library");

        draft.quick_action("Show my class schedule");
        assert_eq!(draft.text(), "Show my class schedule");
    }

    #[test]
    fn test_accent_classes_are_distinct() {
        assert_ne!(Accent::Primary.css_class(), Accent::Secondary.css_class());
        assert_ne!(Accent::Secondary.css_class(), Accent::Accent.css_class());
        assert_ne!(Accent::Primary.css_class(), Accent::Accent.css_class());
    }

    #[test]
    fn test_every_icon_has_path_data() {
        for icon in Icon::ALL {
            assert!(!icon.paths().is_empty(), "{:?} has no paths", icon);
            assert!(icon.paths().iter().all(|d| !d.is_empty()));
            assert!(!icon.label().is_empty());
        }
    }
}
