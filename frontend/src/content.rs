//! Static page content: the feature cards and the quick-action phrases.

use crate::types::{Accent, Feature, Icon};

/// Cards of the "Everything You Need for Campus Life" grid.
pub const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::MessageCircle,
        title: "AI Assistant",
        description: "Get instant answers about courses, events, and campus life",
        accent: Accent::Primary,
    },
    Feature {
        icon: Icon::MapPin,
        title: "Campus Maps",
        description: "Navigate campus with interactive maps and directions",
        accent: Accent::Secondary,
    },
    Feature {
        icon: Icon::Calendar,
        title: "Events & Schedule",
        description: "Stay updated with campus events and your class schedule",
        accent: Accent::Accent,
    },
    Feature {
        icon: Icon::BookOpen,
        title: "Study Resources",
        description: "Access lecture notes, study materials, and academic resources",
        accent: Accent::Primary,
    },
    Feature {
        icon: Icon::Users,
        title: "Student Community",
        description: "Connect with classmates and join study groups",
        accent: Accent::Secondary,
    },
    Feature {
        icon: Icon::Search,
        title: "Lost & Found",
        description: "Report and find lost items across campus",
        accent: Accent::Accent,
    },
];

/// Canned questions offered under the chat input.
pub const QUICK_ACTIONS: [&str; 4] = [
    "Find the library",
    "What's for lunch today?",
    "Show my class schedule",
    "Campus events this week",
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ChatDraft;

    #[test]
    fn test_feature_cards() {
        let cards: Vec<(&str, &str)> = FEATURES.iter().map(|f| (f.title, f.description)).collect();
        assert_eq!(
            cards,
            vec![
                ("AI Assistant", "Get instant answers about courses, events, and campus life"),
                ("Campus Maps", "Navigate campus with interactive maps and directions"),
                ("Events & Schedule", "Stay updated with campus events and your class schedule"),
                ("Study Resources", "Access lecture notes, study materials, and academic resources"),
                ("Student Community", "Connect with classmates and join study groups"),
                ("Lost & Found", "Report and find lost items across campus"),
            ]
        );
    }

    #[test]
    fn test_feature_accents_cycle() {
        let accents: Vec<Accent> = FEATURES.iter().map(|f| f.accent).collect();
        assert_eq!(
            accents,
            vec![
                Accent::Primary,
                Accent::Secondary,
                Accent::Accent,
                Accent::Primary,
                Accent::Secondary,
                Accent::Accent,
            ]
        );
    }

    #[test]
    fn test_quick_actions() {
        assert_eq!(
            QUICK_ACTIONS,
            [
                "Find the library",
                "What's for lunch today?",
                "Show my class schedule",
                "Campus events this week",
            ]
        );
    }

    #[test]
    fn test_each_quick_action_fills_the_draft() {
        let mut draft = ChatDraft::default();
        draft.edit("typed by hand");
        for phrase in QUICK_ACTIONS {
            draft.quick_action(phrase);
            assert_eq!(draft.text(), phrase);
        }
    }
}
