//! Page-level views.
//!
//! # Data Flow
//! ```text
//! RouteMatch (page kind)
//!     → view.rs (bind page to the resolved Location)
//!     → render_document() → HTML mount shell served to the browser
//! ```
//!
//! # Design Decisions
//! - Page internals live in the client bundle; this layer only names the
//!   component to mount and the location it was resolved for
//! - NotFound is an ordinary page, never an error

use serde::{Deserialize, Serialize};

pub mod view;

pub use view::View;

/// The page components a route can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Page {
    Home,
    AnimalManagement,
    Scoring,
    Dashboard,
    NotFound,
}

impl Page {
    /// Every page kind, in route table order.
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::AnimalManagement,
        Page::Scoring,
        Page::Dashboard,
        Page::NotFound,
    ];

    /// Name of the client component mounted for this page.
    pub fn component_name(self) -> &'static str {
        match self {
            Page::Home => "HomePage",
            Page::AnimalManagement => "AnimalManagementPage",
            Page::Scoring => "ScoringPage",
            Page::Dashboard => "DashboardPage",
            Page::NotFound => "NotFoundPage",
        }
    }

    /// Document title.
    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "MyCows",
            Page::AnimalManagement => "MyCows · Animals",
            Page::Scoring => "MyCows · Scoring",
            Page::Dashboard => "MyCows · Dashboard",
            Page::NotFound => "MyCows · Page not found",
        }
    }

    /// Stable label used in logs and metrics.
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::AnimalManagement => "animal_management",
            Page::Scoring => "scoring",
            Page::Dashboard => "dashboard",
            Page::NotFound => "not_found",
        }
    }

    pub fn is_not_found(self) -> bool {
        self == Page::NotFound
    }
}

impl std::fmt::Display for Page {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.component_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_component_names_are_distinct() {
        let mut names: Vec<_> = Page::ALL.iter().map(|p| p.component_name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Page::ALL.len());
    }

    #[test]
    fn test_serde_label_matches_as_str() {
        for page in Page::ALL {
            let json = serde_json::to_string(&page).unwrap();
            assert_eq!(json, format!("\"{}\"", page.as_str()));
        }
    }

    #[test]
    fn test_only_not_found_is_not_found() {
        assert!(Page::NotFound.is_not_found());
        assert!(!Page::Home.is_not_found());
        assert!(!Page::Dashboard.is_not_found());
    }
}
