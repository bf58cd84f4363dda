//! Layout chrome state (theme, mobile navigation).
//!
//! DESIGN
//! ======
//! The only state shared across routes. Page-specific state lives in the
//! page modules so navigating away drops it.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Theme and navigation chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiState {
    pub dark_mode: bool,
    pub nav_open: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self { dark_mode: true, nav_open: false }
    }
}

/// Primary navigation entries as `(href, label)`.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("/", "Home"),
    ("/map", "Star Map"),
    ("/events", "Events"),
    ("/community", "Community"),
    ("/dashboard", "Dashboard"),
    ("/profile", "Profile"),
];

/// Whether `href` is the active route for `path`.
pub fn nav_active(href: &str, path: &str) -> bool {
    if href == "/" {
        return path == "/" || path.is_empty();
    }
    path == href || path.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}
