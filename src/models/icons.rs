//! Default icon catalog offered by the icon picker

use serde::{Deserialize, Serialize};

/// A selectable icon: display label and Font Awesome class list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconOption {
    pub label: String,
    pub value: String,
}

const DEFAULT_ICONS: [(&str, &str); 31] = [
    ("Add", "fas fa-plus"),
    ("Arrow Left", "fas fa-arrow-left"),
    ("Arrow Right", "fas fa-arrow-right"),
    ("Arrow Up", "fas fa-arrow-up"),
    ("Arrow Down", "fas fa-arrow-down"),
    ("Cart", "fas fa-cart-shopping"),
    ("Check", "fas fa-check"),
    ("Chevron Left", "fas fa-chevron-left"),
    ("Chevron Right", "fas fa-chevron-right"),
    ("Circle", "fas fa-circle"),
    ("Close", "fas fa-xmark"),
    ("Delete", "fas fa-trash"),
    ("Download", "fas fa-download"),
    ("Edit", "fas fa-pen"),
    ("Email", "fas fa-envelope"),
    ("Heart", "fas fa-heart"),
    ("Help", "fas fa-question"),
    ("Home", "fas fa-house"),
    ("Information", "fas fa-info"),
    ("Link", "fas fa-link"),
    ("Menu", "fas fa-bars"),
    ("Notification", "fas fa-bell"),
    ("Phone", "fas fa-phone"),
    ("Remove", "fas fa-minus"),
    ("Share", "fas fa-share-nodes"),
    ("Search", "fas fa-magnifying-glass"),
    ("Settings", "fas fa-gear"),
    ("Star", "fas fa-star"),
    ("Upload", "fas fa-upload"),
    ("User", "fas fa-user"),
    ("Warning", "fas fa-triangle-exclamation"),
];

/// The full default catalog, in picker order
pub fn default_icons() -> Vec<IconOption> {
    DEFAULT_ICONS
        .iter()
        .map(|(label, value)| IconOption {
            label: label.to_string(),
            value: value.to_string(),
        })
        .collect()
}

/// Icons whose label contains `query`, ignoring case.
///
/// Entries with a blank label are never offered. An empty query matches
/// every remaining icon.
pub fn filter_icons(icons: &[IconOption], query: &str) -> Vec<IconOption> {
    let needle = query.to_lowercase();
    icons
        .iter()
        .filter(|icon| !icon.label.trim().is_empty())
        .filter(|icon| icon.label.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
