// SPDX-License-Identifier: MPL-2.0
//! Navigation tabs and active-tab resolution.

/// A top-level navigation destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub name: &'static str,
    pub route: &'static str,
    /// i18n key of the visible label.
    pub label_key: &'static str,
}

/// Tabs shown in the navigation pill, in display order.
pub const TABS: [NavTab; 2] = [
    NavTab {
        name: "About",
        route: "/",
        label_key: "navbar-about",
    },
    NavTab {
        name: "Projects",
        route: "/projects",
        label_key: "navbar-projects",
    },
];

/// Index of the tab whose route equals `current_path` exactly.
///
/// Sub-routes do not activate their parent tab: `/projects/foo` has no
/// active tab.
#[must_use]
pub fn active_index(tabs: &[NavTab], current_path: &str) -> Option<usize> {
    tabs.iter().position(|tab| tab.route == current_path)
}

/// Returns true for links handled inside the application (`/projects/...`).
#[must_use]
pub fn is_internal_link(target: &str) -> bool {
    target.starts_with('/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internal_links_start_with_slash() {
        assert!(is_internal_link("/projects/x"));
        assert!(is_internal_link("/"));
        assert!(!is_internal_link("https://example.com"));
        assert!(!is_internal_link("mailto:me@example.com"));
        assert!(!is_internal_link(""));
    }

    #[test]
    fn projects_route_activates_second_tab() {
        assert_eq!(active_index(&TABS, "/projects"), Some(1));
    }

    #[test]
    fn root_route_activates_about() {
        assert_eq!(active_index(&TABS, "/"), Some(0));
    }

    #[test]
    fn unknown_route_has_no_active_tab() {
        assert_eq!(active_index(&TABS, "/contact"), None);
    }

    #[test]
    fn matching_is_exact_not_prefix() {
        assert_eq!(active_index(&TABS, "/projects/alpha"), None);
        assert_eq!(active_index(&TABS, "/projects/"), None);
        assert_eq!(active_index(&TABS, ""), None);
    }

    #[test]
    fn tab_list_has_exactly_two_entries() {
        assert_eq!(TABS.len(), 2);
        assert_eq!(TABS[0].name, "About");
        assert_eq!(TABS[1].route, "/projects");
    }
}
